//! Ate pairing on MNT4-298, landing in `Fq4 = Fq2[v]`.

use curve::mnt4_298::{G1Config, G2Config};
use field::mnt4_298::{Fq2, Fq4Config, FqConfig};
use field::Fp4ConfigWrapper;
use lazy_static::lazy_static;

use crate::engine::Pairing;
use crate::mnt::{Mnt, MntConfig, MntParams};
use crate::mnt_affine::MntAffine;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Config;

pub type Mnt4_298 = Pairing<Mnt<Config>>;

/// The same pairing with affine G2 steps.
pub type Mnt4_298Affine = Pairing<MntAffine<Config>>;

lazy_static! {
    static ref PARAMS: MntParams = MntParams::new(
        "mnt4_298",
        "0x1eef5546609756bec2a33f0dc9a1b671660000",
        false,
        "0x1eef5546609756bec2a33f0dc9a1b671660001",
        false,
        "1",
    );
}

impl MntConfig for Config {
    type Fp = FqConfig;
    type Fqe = Fq2;
    type FqkConfig = Fp4ConfigWrapper<Fq4Config>;
    type G1Config = G1Config;
    type G2Config = G2Config;

    fn params() -> &'static MntParams {
        &PARAMS
    }

    fn twist() -> Fq2 {
        curve::mnt4_298::twist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{
        assert_bilinear, assert_double_miller_loop, assert_final_exponentiation_is_power,
    };
    use crate::{PairingConfig, PairingError};
    use curve::mnt4_298::{Fq, Fr, G1Affine, G1Projective, G2Affine, G2Projective};
    use curve::Group;
    use field::{Field, PrimeField, RandomField};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_loop_count_is_positive() {
        assert!(!Mnt::<Config>::loop_count().is_negative());
        let q = Mnt4_298::prepare_g2(&G2Affine::generator()).unwrap();
        let loop_count = Mnt::<Config>::loop_count();
        assert_eq!(
            q.lines().len(),
            loop_count.digits().len() + loop_count.addition_count()
        );
    }

    #[test]
    fn test_bilinearity() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = Fr::random(&mut rng);
        let p = G1Affine::generator();
        let q = G2Affine::generator();
        let s_p = G1Projective::generator().scalar_mul(&s).to_affine();
        let s_q = G2Projective::generator().scalar_mul(&s).to_affine();
        assert_bilinear::<Mnt<Config>>(&p, &q, &s_p, &s_q, s.value(), Fr::modulus());
    }

    #[test]
    fn test_double_miller_loop() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = G1Projective::random(&mut rng).to_affine();
        let q1 = G2Projective::random(&mut rng).to_affine();
        let p2 = G1Projective::random(&mut rng).to_affine();
        let q2 = G2Projective::random(&mut rng).to_affine();
        assert_double_miller_loop::<Mnt<Config>>(&p1, &q1, &p2, &q2);
    }

    #[test]
    fn test_rejects_invalid_points() {
        let q = G2Affine::generator();
        assert_eq!(
            Mnt4_298::pair(&G1Affine::identity(), &q),
            Err(PairingError::IdentityPoint)
        );
        let off_curve = G1Affine::new_unchecked(Fq::one(), Fq::one());
        assert_eq!(Mnt4_298::pair(&off_curve, &q), Err(PairingError::NotOnCurve));
    }

    #[test]
    fn test_final_exponentiation_is_power_of_miller_output() {
        let mut rng = StdRng::seed_from_u64(42);
        let p = G1Projective::random(&mut rng).to_affine();
        let q = G2Projective::random(&mut rng).to_affine();
        let f = Mnt4_298::pair(&p, &q).unwrap();
        assert_final_exponentiation_is_power::<Mnt<Config>>(&f, Fr::modulus(), &1u32.into());
    }

    #[test]
    fn test_affine_ate_matches_projective_ate() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..2 {
            let p = G1Projective::random(&mut rng).to_affine();
            let q = G2Projective::random(&mut rng).to_affine();
            assert_eq!(
                Mnt4_298Affine::pair_reduced(&p, &q).unwrap(),
                Mnt4_298::pair_reduced(&p, &q).unwrap()
            );
        }
    }

    #[test]
    fn test_affine_ate_bilinearity() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = Fr::random(&mut rng);
        let p = G1Affine::generator();
        let q = G2Affine::generator();
        let s_p = G1Projective::generator().scalar_mul(&s).to_affine();
        let s_q = G2Projective::generator().scalar_mul(&s).to_affine();
        assert_bilinear::<MntAffine<Config>>(&p, &q, &s_p, &s_q, s.value(), Fr::modulus());
    }

    #[test]
    fn test_affine_ate_walks_naf_digits() {
        let loop_count = MntAffine::<Config>::loop_count();
        assert!(!loop_count.is_negative());
        assert!(loop_count
            .digits()
            .windows(2)
            .all(|pair| pair[0] == 0 || pair[1] == 0));

        let q = Mnt4_298Affine::prepare_g2(&G2Affine::generator()).unwrap();
        assert_eq!(
            q.lines().len(),
            loop_count.digits().len() + loop_count.addition_count()
        );
        assert_eq!(
            Mnt4_298Affine::pair(&G1Affine::identity(), &G2Affine::generator()),
            Err(PairingError::IdentityPoint)
        );
    }
}

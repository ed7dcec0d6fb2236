//! Optimal ate pairing on BN254 (alt_bn128).

use curve::bn254::{G1Config, G2Config};
use field::bn254::{Fq, Fq12Config, Fq2, Fq2Config, Fq6Config, FqConfig};
use lazy_static::lazy_static;

use crate::bn::{Bn, BnConfig, BnParams};
use crate::engine::Pairing;
use crate::sextic::{SexticTwistConfig, TwistType};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Config;

pub type Bn254 = Pairing<Bn<Config>>;

lazy_static! {
    static ref TWIST: Fq2 = Fq2::new(Fq::from(9u64), Fq::from(1u64));
    static ref PARAMS: BnParams<Fq2> =
        BnParams::new("bn254", "4965661367192848881", false, &*TWIST);
}

impl SexticTwistConfig for Config {
    type Fp = FqConfig;
    type Fp2Config = Fq2Config;
    type Fp6Config = Fq6Config;
    type Fp12Config = Fq12Config;
    type G1Config = G1Config;
    type G2Config = G2Config;

    const TWIST_TYPE: TwistType = TwistType::D;

    fn twist() -> &'static Fq2 {
        &TWIST
    }
}

impl BnConfig for Config {
    fn params() -> &'static BnParams<Fq2> {
        &PARAMS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{
        assert_bilinear, assert_double_miller_loop, assert_final_exponentiation_is_power,
    };
    use crate::{PairingConfig, PairingError};
    use curve::bn254::{Fr, G1Affine, G1Projective, G2Affine, G2Projective};
    use curve::Group;
    use field::{Field, PrimeField, RandomField};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_ate_loop_is_naf_of_6u_plus_2() {
        let params = Config::params();
        let ate = params.u() * 6u32 + 2u32;
        let loop_count = crate::LoopCount::naf(&ate, false);
        assert_eq!(Bn::<Config>::loop_count(), &loop_count);

        // One doubling per digit, one addition per non-zero digit, two tail lines.
        let q = Bn254::prepare_g2(&G2Affine::generator()).unwrap();
        assert_eq!(
            q.lines().len(),
            loop_count.digits().len() + loop_count.addition_count() + 2
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
        assert_bilinear::<Bn<Config>>(&p, &q, &s_p, &s_q, s.value(), Fr::modulus());
    }

    #[test]
    fn test_double_miller_loop() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = G1Projective::random(&mut rng).to_affine();
        let q1 = G2Projective::random(&mut rng).to_affine();
        let p2 = G1Projective::random(&mut rng).to_affine();
        let q2 = G2Projective::random(&mut rng).to_affine();
        assert_double_miller_loop::<Bn<Config>>(&p1, &q1, &p2, &q2);
    }

    #[test]
    fn test_final_exponentiation_is_power_of_miller_output() {
        // The hard-part chain computes the 2u(6u^2 + 3u + 1)-th power of the
        // textbook final exponentiation.
        let u = Config::params().u();
        let multiplier = u * 2u32 * (u * u * 6u32 + u * 3u32 + 1u32);

        let mut rng = StdRng::seed_from_u64(42);
        let p = G1Projective::random(&mut rng).to_affine();
        let q = G2Projective::random(&mut rng).to_affine();
        let f = Bn254::pair(&p, &q).unwrap();
        assert_final_exponentiation_is_power::<Bn<Config>>(&f, Fr::modulus(), &multiplier);
    }

    #[test]
    fn test_rejects_identity_and_off_curve_points() {
        let q = G2Affine::generator();
        assert_eq!(
            Bn254::pair_reduced(&G1Affine::identity(), &q),
            Err(PairingError::IdentityPoint)
        );
        let off_curve = G1Affine::new_unchecked(Fq::one(), Fq::one());
        assert_eq!(Bn254::pair(&off_curve, &q), Err(PairingError::NotOnCurve));
        assert_eq!(
            Bn254::pair(&G1Affine::generator(), &G2Affine::identity()),
            Err(PairingError::IdentityPoint)
        );
    }
}

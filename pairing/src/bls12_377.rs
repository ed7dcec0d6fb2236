//! Optimal ate pairing on BLS12-377, `x = 0x8508c00000000001`, D-type twist.

use curve::bls12_377::{G1Config, G2Config};
use field::bls12_377::{Fq, Fq12Config, Fq2, Fq2Config, Fq6Config, FqConfig};
use field::Field;
use lazy_static::lazy_static;

use crate::bls12::{Bls12, Bls12Config, Bls12Params};
use crate::engine::Pairing;
use crate::sextic::{SexticTwistConfig, TwistType};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Config;

pub type Bls12_377 = Pairing<Bls12<Config>>;

lazy_static! {
    static ref TWIST: Fq2 = Fq2::new(Fq::zero(), Fq::one());
    static ref PARAMS: Bls12Params = Bls12Params::new("bls12_377", "0x8508c00000000001", false);
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

impl Bls12Config for Config {
    fn params() -> &'static Bls12Params {
        &PARAMS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{assert_bilinear, assert_double_miller_loop};
    use crate::{PairingConfig, PairingError};
    use curve::bls12_377::{Fr, G1Affine, G1Projective, G2Affine, G2Projective};
    use curve::Group;
    use field::{PrimeField, RandomField};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_loop_runs_over_x() {
        let loop_count = Bls12::<Config>::loop_count();
        assert!(!loop_count.is_negative());
        assert_eq!(loop_count.digits().len(), 63);
        assert_eq!(loop_count.addition_count(), 6);
    }

    #[test]
    fn test_bilinearity() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = Fr::random(&mut rng);
        let p = G1Affine::generator();
        let q = G2Affine::generator();
        let s_p = G1Projective::generator().scalar_mul(&s).to_affine();
        let s_q = G2Projective::generator().scalar_mul(&s).to_affine();
        assert_bilinear::<Bls12<Config>>(&p, &q, &s_p, &s_q, s.value(), Fr::modulus());
    }

    #[test]
    fn test_double_miller_loop() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = G1Projective::random(&mut rng).to_affine();
        let q1 = G2Projective::random(&mut rng).to_affine();
        let p2 = G1Projective::random(&mut rng).to_affine();
        let q2 = G2Projective::random(&mut rng).to_affine();
        assert_double_miller_loop::<Bls12<Config>>(&p1, &q1, &p2, &q2);
    }

    #[test]
    fn test_rejects_invalid_points() {
        let p = G1Affine::generator();
        assert_eq!(
            Bls12_377::pair(&p, &G2Affine::identity()),
            Err(PairingError::IdentityPoint)
        );
        let off_curve = G2Affine::new_unchecked(Fq2::one(), Fq2::one());
        assert_eq!(
            Bls12_377::pair_reduced(&p, &off_curve),
            Err(PairingError::NotOnCurve)
        );
    }
}

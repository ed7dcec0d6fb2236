//! MNT6-298: `y^2 = x^3 + 11x + b` over Fq and its cubic twist over Fq3.

pub use field::mnt6_298::{Fq, Fq3, Fr};
use field::Field;
use lazy_static::lazy_static;

use crate::models::{SWCurveConfig, SWCurveParams};
use crate::{Affine, Projective};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct G1Config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct G2Config;

pub type G1Affine = Affine<G1Config>;
pub type G1Projective = Projective<G1Config>;
pub type G2Affine = Affine<G2Config>;
pub type G2Projective = Projective<G2Config>;

/// The twist element `u` of Fq3.
pub fn twist() -> Fq3 {
    Fq3::new(Fq::zero(), Fq::one(), Fq::zero())
}

fn coeff_b() -> Fq {
    Fq::from_literal("0xd68c7b1dc5dd042e957b71c44d3d6c24e683fc09b420b1a2d263fde47ddba59463d0c65282")
}

lazy_static! {
    static ref G1: SWCurveParams<Fq> = SWCurveParams::new(
        "mnt6_298.g1",
        Fq::from(11u64),
        coeff_b(),
        (
            Fq::from_literal("0x2a4feee24fd2c69d1d90471b2ba61ed56f9bad79b57e0b4c671392584bdadebc01abbc0447d"),
            Fq::from_literal("0x32986c245f6db2f82f4e037bf7afd69cbfcbff07fc25d71e9c75e1b97208a333d73d91d3028"),
        ),
        "1",
    );
    // a' = a * twist^2, b' = b * twist^3
    static ref G2: SWCurveParams<Fq3> = SWCurveParams::new(
        "mnt6_298.g2",
        twist().square().mul_by_base_prime_field(&Fq::from(11u64)),
        (twist().square() * &twist()).mul_by_base_prime_field(&coeff_b()),
        (
            Fq3::new(
                Fq::from_literal("0x34f7320a12b56ce532bccb3b44902cbaa723cd60035ada7404b743ad2e644ad76257e4c6813"),
                Fq::from_literal("0xcf41620baa52eec50e61a70ab5b45f681952e0109340fec84f1b2890aba9b15cac5a0c80fa"),
                Fq::from_literal("0x11f99170e10e326433cccb8032fb48007ca3c4e105cf31b056ac767e2cb01258391bd4917ce"),
            ),
            Fq3::new(
                Fq::from_literal("0x3a65968f03cc64d62ad05c79c415e07ebd38b363ec48309487c0b83e1717a582c1b60fecc91"),
                Fq::from_literal("0xca5e8427e5db1506c1a24cefc2451ab3accaea5db82dcb0c7117cc74402faa5b2c37685c6e"),
                Fq::from_literal("0xf75d2dd88302c9a4ef941307629a1b3e197277d83abb715f647c2e55a27baf782f5c60e7f7"),
            ),
        ),
        "0xdf94b3a10ace4c868d35ee98b8b1cd454f1a1f292d2362035024095209870c0f7ffbbf096e99fb6a637b933124e28403e0b413f4d65a5b22e7f6194104081d31771efd4719dec00000000",
    );
}

impl SWCurveConfig for G1Config {
    type BaseField = Fq;
    type ScalarField = Fr;

    fn params() -> &'static SWCurveParams<Fq> {
        &G1
    }
}

impl SWCurveConfig for G2Config {
    type BaseField = Fq3;
    type ScalarField = Fr;

    fn params() -> &'static SWCurveParams<Fq3> {
        &G2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Group;

    #[test]
    fn test_generators() {
        assert!(G1Affine::generator().is_on_curve());
        assert!(G2Affine::generator().is_on_curve());
        assert!(G1Projective::generator().is_in_prime_order_subgroup());
        assert!(G2Projective::generator().is_in_prime_order_subgroup());
    }

    #[test]
    fn test_twisted_coefficients() {
        assert_eq!(
            G2Config::params().a(),
            &Fq3::new(Fq::zero(), Fq::zero(), Fq::from(11u64))
        );
        assert_eq!(
            G2Config::params().b(),
            &Fq3::new(coeff_b() * &Fq::from(5u64), Fq::zero(), Fq::zero())
        );
    }
}

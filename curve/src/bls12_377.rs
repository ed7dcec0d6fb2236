//! BLS12-377: `y^2 = x^3 + 1` over Fq and its sextic D-twist
//! `y^2 = x^3 + 1/u` over Fq2, with `u^2 = -5`.

pub use field::bls12_377::{Fq, Fq2, Fr};
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

lazy_static! {
    static ref G1: SWCurveParams<Fq> = SWCurveParams::new(
        "bls12_377.g1",
        Fq::zero(),
        Fq::one(),
        (
            Fq::from_literal("0x008848defe740a67c8fc6225bf87ff5485951e2caa9d41bb188282c8bd37cb5cd5481512ffcd394eeab9b16eb21be9ef"),
            Fq::from_literal("0x01914a69c5102eff1f674f5d30afeec4bd7fb348ca3e52d96d182ad44fb82305c2fe3d3634a9591afd82de55559c8ea6"),
        ),
        "0x170b5d44300000000000000000000000",
    );
    static ref G2: SWCurveParams<Fq2> = SWCurveParams::new(
        "bls12_377.g2",
        Fq2::zero(),
        Fq2::new(
            Fq::zero(),
            Fq::from_literal("0x010222f6db0fd6f343bd03737460c589dc7b4f91cd5fd889129207b63c6bf8000dd39e5c1ccccccd1c9ed9999999999a"),
        ),
        (
            Fq2::new(
                Fq::from_literal("0x00b997fef930828fe1b9e6a1707b8aa508a3dbfd7fe2246499c709226a0a6fef49f85b3a375363f4f8f6ea3fbd159f8a"),
                Fq::from_literal("0x00d6ac33b84947d9845f81a57a136bfa326e915fabc8cd6a57ff133b42d00f62e4e1af460228cd5184deae976fa62596"),
            ),
            Fq2::new(
                Fq::from_literal("0x0118dd509b2e9a13744a507d515a595dbb7e3b63df568866473790184bdf83636c94df2b7a962cb2af4337f07cb7e622"),
                Fq::from_literal("0x0185067c6ca76d992f064a432bd9f9be832b0cac2d824d0518f77d39e76c3e146afb825f2092218d038867d7f337a010"),
            ),
        ),
        "0x26ba558ae9562addd88d99a6f6a829fbb36b00e1dcc40c8c505634fae2e189d693e8c36676bd09a0f3622fba094800452217cc900000000000000000000001",
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
    type BaseField = Fq2;
    type ScalarField = Fr;

    fn params() -> &'static SWCurveParams<Fq2> {
        &G2
    }
}

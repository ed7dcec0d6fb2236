//! BN254 (alt_bn128): `y^2 = x^3 + 3` over Fq and its sextic D-twist
//! `y^2 = x^3 + 3/ξ` over Fq2, with `ξ = 9 + u`.

pub use field::bn254::{Fq, Fq2, Fr};
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
        "bn254.g1",
        Fq::zero(),
        Fq::from(3u64),
        (Fq::one(), Fq::from(2u64)),
        "1",
    );
    static ref G2: SWCurveParams<Fq2> = SWCurveParams::new(
        "bn254.g2",
        Fq2::zero(),
        Fq2::new(
            Fq::from_literal(
                "19485874751759354771024239261021720505790618469301721065564631296452457478373",
            ),
            Fq::from_literal(
                "266929791119991161246907387137283842545076965332900288569378510910307636690",
            ),
        ),
        (
            Fq2::new(
                Fq::from_literal(
                    "10857046999023057135944570762232829481370756359578518086990519993285655852781",
                ),
                Fq::from_literal(
                    "11559732032986387107991004021392285783925812861821192530917403151452391805634",
                ),
            ),
            Fq2::new(
                Fq::from_literal(
                    "8495653923123431417604973247489272438418190587263600148770280649306958101930",
                ),
                Fq::from_literal(
                    "4082367875863433681332203403145435568316851327593401208105741076214120093531",
                ),
            ),
        ),
        "0x30644e72e131a029b85045b68181585e06ceecda572a2489345f2299c0f9fa8d",
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

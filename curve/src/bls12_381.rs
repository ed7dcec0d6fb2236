//! BLS12-381: `y^2 = x^3 + 4` over Fq and its sextic M-twist
//! `y^2 = x^3 + 4(1 + u)` over Fq2.

pub use field::bls12_381::{Fq, Fq2, Fr};
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
        "bls12_381.g1",
        Fq::zero(),
        Fq::from(4u64),
        (
            Fq::from_literal("0x17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb"),
            Fq::from_literal("0x08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1"),
        ),
        "0x396c8c005555e1568c00aaab0000aaab",
    );
    static ref G2: SWCurveParams<Fq2> = SWCurveParams::new(
        "bls12_381.g2",
        Fq2::zero(),
        Fq2::new(Fq::from(4u64), Fq::from(4u64)),
        (
            Fq2::new(
                Fq::from_literal("0x024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8"),
                Fq::from_literal("0x13e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e"),
            ),
            Fq2::new(
                Fq::from_literal("0x0ce5d527727d6e118cc9cdc6da2e351aadfd9baa8cbdd3a76d429a695160d12c923ac9cc3baca289e193548608b82801"),
                Fq::from_literal("0x0606c4a02ea734cc32acd2b02bc28b99cb3e287e85a763af267492ab572e99ab3f370d275cec1da1aaa9075ff05f79be"),
            ),
        ),
        "0x5d543a95414e7f1091d50792876a202cd91de4547085abaa68a205b2e5a7ddfa628f1cb4d9e82ef21537e293a6691ae1616ec6e786f0c70cf1c38e31c7238e5",
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

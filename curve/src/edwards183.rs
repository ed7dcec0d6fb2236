//! Edwards-183: `x^2 + y^2 = 1 + d x^2 y^2` over Fq and its twist over Fq3.

pub use field::edwards183::{Fq, Fq3, Fr};
use field::Field;
use lazy_static::lazy_static;

use crate::edwards::{EdwardsAffine, EdwardsProjective};
use crate::models::{TECurveConfig, TECurveParams};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct G1Config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct G2Config;

pub type G1Affine = EdwardsAffine<G1Config>;
pub type G1Projective = EdwardsProjective<G1Config>;
pub type G2Affine = EdwardsAffine<G2Config>;
pub type G2Projective = EdwardsProjective<G2Config>;

/// The twist element `u` of Fq3.
pub fn twist() -> Fq3 {
    Fq3::new(Fq::zero(), Fq::one(), Fq::zero())
}

fn coeff_d() -> Fq {
    Fq::from_literal("0x64536d55979879327cf1306bb5a6277d254ef9776ce70")
}

lazy_static! {
    static ref G1: TECurveParams<Fq> = TECurveParams::new(
        "edwards183.g1",
        Fq::one(),
        coeff_d(),
        (
            Fq::from_literal("0x26c5df4587aa6a5d345efc9f2d47f8b1656517ef618f7a"),
            Fq::from_literal("0x32d83d8aaa0c500f57b15fda90b1ad111067f812c7dd27"),
        ),
        "4",
    );
    // a' = twist, d' = d * twist
    static ref G2: TECurveParams<Fq3> = TECurveParams::new(
        "edwards183.g2",
        twist(),
        twist().mul_by_base_prime_field(&coeff_d()),
        (
            Fq3::new(
                Fq::from_literal("0x2f501f9482c0d0d6e80ac55a79fd4d4594caf187952660"),
                Fq::from_literal("0x37bf8f1b1cda11a81e8bb8f41b5ff462c9a13dc7de1578"),
                Fq::from_literal("0x2962f0da0c7928b2cfbbace3d0354652b6922a764c12d8"),
            ),
            Fq3::new(
                Fq::from_literal("0x03ce954c85ad30f53b1bb4c4f87029780f4141927feb19"),
                Fq::from_literal("0x2214eb976de3a4d9df9c8d5f7aedfec337e03a20b32fff"),
                Fq::from_literal("0x249774ab0edc7fe2e665ddbfe08594f3071e0b3ac994c3"),
            ),
        ),
        "0x41aec4b3afaaf26443b9e16fcbc4c73a8911cfc52edf3e92a06d2247386dd24e30baf43d09a8a84db14100000000",
    );
}

impl TECurveConfig for G1Config {
    type BaseField = Fq;
    type ScalarField = Fr;

    fn params() -> &'static TECurveParams<Fq> {
        &G1
    }
}

impl TECurveConfig for G2Config {
    type BaseField = Fq3;
    type ScalarField = Fr;

    fn params() -> &'static TECurveParams<Fq3> {
        &G2
    }
}

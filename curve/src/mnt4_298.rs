//! MNT4-298: `y^2 = x^3 + 2x + b` over Fq and its quadratic twist over Fq2.

pub use field::mnt4_298::{Fq, Fq2, Fr};
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

/// The twist element `u` of Fq2.
pub fn twist() -> Fq2 {
    Fq2::new(Fq::zero(), Fq::one())
}

fn coeff_b() -> Fq {
    Fq::from_literal("0x3545a27639415585ea4d523234fc3edd2a2070a085c7b980f4e9cd21a515d4b0ef528ec0fd5")
}

lazy_static! {
    static ref G1: SWCurveParams<Fq> = SWCurveParams::new(
        "mnt4_298.g1",
        Fq::from(2u64),
        coeff_b(),
        (
            Fq::from_literal("0x7a2caf82a1ba85213fe6ca3875aee86aba8f73d69060c4079492b948dea216b5b9c8d2af46"),
            Fq::from_literal("0x2db619461cc82672f7f159fec2e89d0148dcc9862d36778c1afd96a71e29cba48e710a48ab2"),
        ),
        "1",
    );
    // a' = a * twist^2, b' = b * twist^3
    static ref G2: SWCurveParams<Fq2> = SWCurveParams::new(
        "mnt4_298.g2",
        twist().square().mul_by_base_prime_field(&Fq::from(2u64)),
        (twist().square() * &twist()).mul_by_base_prime_field(&coeff_b()),
        (
            Fq2::new(
                Fq::from_literal("0x371780491c5660571ff542f2ef89001f205151e12a72cb14f01a931e72dba7903df6c09a9a4"),
                Fq::from_literal("0x4ba59a3f72da165def838081af697c851f002f576303302bb6c02c712c968be32c0ae0a989"),
            ),
            Fq2::new(
                Fq::from_literal("0x4b471f33ffaad868a1c47d6605d31e5c4b3b2e0b60ec98f0f610a5aafd0d9522bca4e79f22"),
                Fq::from_literal("0x355d05a1c69a5031f3f81a5c100cb7d982f78ec9cfc3b5168ed8d75c7c484fb61a3cbf0e0f1"),
            ),
        ),
        "0x3bcf7bcd473a266249da7b0548ecaeec9635d32203f880a7ab50fe2b151d6d67810e2cc0001",
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

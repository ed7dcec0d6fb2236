//! Fields of MNT4-298: `Fq`, `Fr` and the tower
//! `Fq2 = Fq[u]/(u^2 - 17)`, `Fq4 = Fq2[v]/(v^2 - u)`.
//!
//! The scalar field of MNT4-298 is the base field of MNT6-298 and vice versa.

use lazy_static::lazy_static;

use crate::{Field, Fp, Fp2, Fp2Config, Fp4, Fp4Config, FpConfig, FpParams, QuadParams};

pub(crate) const MODULUS: &str =
    "475922286169261325753349249653048451545124879242694725395555128576210262817955800483758081";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FqConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FrConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fq2Config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fq4Config;

pub type Fq = Fp<FqConfig>;
pub type Fr = Fp<FrConfig>;
pub type Fq2 = Fp2<Fq2Config>;
pub type Fq4 = Fp4<Fq4Config>;

lazy_static! {
    static ref FQ: FpParams = FpParams::new("mnt4_298.fq", MODULUS);
    static ref FR: FpParams = FpParams::new("mnt4_298.fr", crate::mnt6_298::MODULUS);
    static ref FQ2: QuadParams<Fq, Fq> = QuadParams::new(Fq::from(17u64), &Fq::from(17u64));
    static ref FQ4: QuadParams<Fq2, Fq> =
        QuadParams::new(Fq2::new(Fq::zero(), Fq::one()), &Fq::from(17u64));
}

impl FpConfig for FqConfig {
    fn params() -> &'static FpParams {
        &FQ
    }
}

impl FpConfig for FrConfig {
    fn params() -> &'static FpParams {
        &FR
    }
}

impl Fp2Config for Fq2Config {
    type Fp = FqConfig;

    fn params() -> &'static QuadParams<Fq, Fq> {
        &FQ2
    }
}

impl Fp4Config for Fq4Config {
    type Fp2Config = Fq2Config;

    fn params() -> &'static QuadParams<Fq2, Fq> {
        &FQ4
    }
}

//! Fields of MNT6-298: `Fq`, `Fr` and the tower
//! `Fq3 = Fq[u]/(u^3 - 5)`, `Fq6 = Fq3[v]/(v^2 - u)`.

use lazy_static::lazy_static;

use crate::{
    CubicParams, Field, Fp, Fp3, Fp3Config, Fp6_2over3, Fp6_2over3Config, FpConfig, FpParams,
    QuadParams,
};

pub(crate) const MODULUS: &str =
    "475922286169261325753349249653048451545124878552823515553267735739164647307408490559963137";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FqConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FrConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fq3Config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fq6Config;

pub type Fq = Fp<FqConfig>;
pub type Fr = Fp<FrConfig>;
pub type Fq3 = Fp3<Fq3Config>;
pub type Fq6 = Fp6_2over3<Fq6Config>;

lazy_static! {
    static ref FQ: FpParams = FpParams::new("mnt6_298.fq", MODULUS);
    static ref FR: FpParams = FpParams::new("mnt6_298.fr", crate::mnt4_298::MODULUS);
    static ref FQ3: CubicParams<Fq, Fq> = CubicParams::new(Fq::from(5u64));
    static ref FQ6: QuadParams<Fq3, Fq> =
        QuadParams::new(Fq3::new(Fq::zero(), Fq::one(), Fq::zero()), &Fq::from(5u64));
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

impl Fp3Config for Fq3Config {
    type Fp = FqConfig;

    fn params() -> &'static CubicParams<Fq, Fq> {
        &FQ3
    }
}

impl Fp6_2over3Config for Fq6Config {
    type Fp3Config = Fq3Config;

    fn params() -> &'static QuadParams<Fq3, Fq> {
        &FQ6
    }
}

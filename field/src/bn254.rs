//! Fields of BN254 (alt_bn128): `Fq`, `Fr` and the tower
//! `Fq2 = Fq[u]/(u^2 + 1)`, `Fq6 = Fq2[v]/(v^3 - (9 + u))`, `Fq12 = Fq6[w]/(w^2 - v)`.

use lazy_static::lazy_static;

use crate::{
    CubicParams, Field, Fp, Fp12, Fp12Config, Fp2, Fp2Config, Fp6, Fp6Config, FpConfig, FpParams,
    QuadParams,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FqConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FrConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fq2Config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fq6Config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fq12Config;

pub type Fq = Fp<FqConfig>;
pub type Fr = Fp<FrConfig>;
pub type Fq2 = Fp2<Fq2Config>;
pub type Fq6 = Fp6<Fq6Config>;
pub type Fq12 = Fp12<Fq12Config>;

/// The sextic non-residue `ξ = 9 + u`.
pub fn fq6_nonresidue() -> Fq2 {
    Fq2::new(Fq::from(9u64), Fq::one())
}

lazy_static! {
    static ref FQ: FpParams = FpParams::new(
        "bn254.fq",
        "21888242871839275222246405745257275088696311157297823662689037894645226208583",
    );
    static ref FR: FpParams = FpParams::new(
        "bn254.fr",
        "21888242871839275222246405745257275088548364400416034343698204186575808495617",
    );
    static ref FQ2: QuadParams<Fq, Fq> = QuadParams::new(-Fq::one(), &-Fq::one());
    static ref FQ6: CubicParams<Fq2, Fq2> = CubicParams::new(fq6_nonresidue());
    static ref FQ12: QuadParams<Fq6, Fq2> = QuadParams::new(
        Fq6::new(Fq2::zero(), Fq2::one(), Fq2::zero()),
        &fq6_nonresidue(),
    );
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

impl Fp6Config for Fq6Config {
    type Fp2Config = Fq2Config;

    fn params() -> &'static CubicParams<Fq2, Fq2> {
        &FQ6
    }
}

impl Fp12Config for Fq12Config {
    type Fp6Config = Fq6Config;

    fn params() -> &'static QuadParams<Fq6, Fq2> {
        &FQ12
    }
}

//! Optimal ate pairing on BLS12-381, `x = -0xd201000000010000`, M-type twist.

use curve::bls12_381::{G1Config, G2Config};
use field::bls12_381::{Fq, Fq12Config, Fq2, Fq2Config, Fq6Config, FqConfig};
use field::Field;
use lazy_static::lazy_static;

use crate::bls12::{Bls12, Bls12Config, Bls12Params};
use crate::engine::Pairing;
use crate::sextic::{SexticTwistConfig, TwistType};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Config;

pub type Bls12_381 = Pairing<Bls12<Config>>;

lazy_static! {
    static ref TWIST: Fq2 = Fq2::new(Fq::one(), Fq::one());
    static ref PARAMS: Bls12Params = Bls12Params::new("bls12_381", "0xd201000000010000", true);
}

impl SexticTwistConfig for Config {
    type Fp = FqConfig;
    type Fp2Config = Fq2Config;
    type Fp6Config = Fq6Config;
    type Fp12Config = Fq12Config;
    type G1Config = G1Config;
    type G2Config = G2Config;

    const TWIST_TYPE: TwistType = TwistType::M;

    fn twist() -> &'static Fq2 {
        &TWIST
    }
}

impl Bls12Config for Config {
    fn params() -> &'static Bls12Params {
        &PARAMS
    }
}

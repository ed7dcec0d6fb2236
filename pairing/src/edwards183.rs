//! Ate pairing on the Edwards-183 curve and its twist over Fq3.

use curve::edwards183::{G1Config, G2Config};
use field::edwards183::{Fq3, Fq6Config, FqConfig, Fr};
use field::{Fp6_2over3ConfigWrapper, PrimeField};
use lazy_static::lazy_static;

use crate::edwards::{Edwards, EdwardsPairingConfig, EdwardsPairingParams};
use crate::engine::Pairing;
use crate::tate::Tate;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Config;

pub type Edwards183 = Pairing<Edwards<Config>>;

pub type Edwards183Tate = Tate<Config>;

lazy_static! {
    static ref PARAMS: EdwardsPairingParams = EdwardsPairingParams::new(
        "edwards183",
        "4492509698523932320491110403",
        Fr::modulus(),
        "17970038794095729281964441603",
        true,
        "4",
    );
}

impl EdwardsPairingConfig for Config {
    type Fp = FqConfig;
    type Fqe = Fq3;
    type FqkConfig = Fp6_2over3ConfigWrapper<Fq6Config>;
    type G1Config = G1Config;
    type G2Config = G2Config;

    fn params() -> &'static EdwardsPairingParams {
        &PARAMS
    }

    fn twist() -> Fq3 {
        curve::edwards183::twist()
    }
}

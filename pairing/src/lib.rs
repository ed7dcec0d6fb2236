//! Pairings on the BN, BLS12, MNT4, MNT6 and Edwards curve families.
//!
//! [`Pairing`] is a single Miller-loop engine driven by a [`PairingConfig`]
//! policy. A family policy (`Bn`, `Bls12`, `Mnt`, `Edwards`) supplies the
//! doubling and addition steps on G2 and the evaluation of their lines at a G1
//! point, together with its final exponentiation. `MntAffine` is an MNT variant
//! with affine G2 steps, and [`Tate`] is the Tate pairing on Edwards curves.
//! Each curve module binds a family to concrete curve parameters:
//!
//! ```
//! use curve::bls12_381::{G1Affine, G2Affine};
//! use field::Field;
//! use pairing::bls12_381::Bls12_381;
//!
//! let p = G1Affine::generator();
//! let q = G2Affine::generator();
//! let e = Bls12_381::pair_reduced(&p, &q).unwrap();
//! assert!(!e.is_one());
//! ```

mod bls12;
mod bn;
mod edwards;
mod engine;
mod errors;
mod loop_count;
mod mnt;
mod mnt_affine;
mod sextic;
mod tate;

pub mod bls12_377;
pub mod bls12_381;
pub mod bn254;
pub mod edwards183;
pub mod mnt4_298;
pub mod mnt6_298;

/// `bn128` is the same curve as `alt_bn128`/BN254.
pub use bn254 as bn128;

#[cfg(test)]
mod tests;

pub use bls12::{Bls12, Bls12Config, Bls12Params};
pub use bn::{Bn, BnConfig, BnParams};
pub use edwards::{
    Edwards, EdwardsG1Prepared, EdwardsLineCoeffs, EdwardsLineTriple, EdwardsPairingConfig,
    EdwardsPairingParams,
};
pub use engine::{G2Prepared, Pairing, PairingConfig};
pub use errors::PairingError;
pub use loop_count::LoopCount;
pub use mnt::{Mnt, MntConfig, MntG1Prepared, MntG2Base, MntLineCoeffs, MntParams};
pub use mnt_affine::{MntAffine, MntAffineG1Prepared, MntAffineLineCoeffs};
pub use sextic::{EllCoeff, G2HomProjective, SexticTwistConfig, TwistType};
pub use tate::{Tate, TateG1Prepared, TateG2Prepared};

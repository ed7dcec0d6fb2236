//! Prime fields and extension-field towers for pairing-friendly curves.
//!
//! [`Fp`] is a prime field over an arbitrary modulus, selected by a zero-sized
//! [`FpConfig`] marker. [`QuadExtField`] and [`CubicExtField`] build quadratic
//! and cubic extensions over any [`Field`], and the `towers` module stacks them
//! into the Fp2, Fp3, Fp4, Fp6 and Fp12 towers used by the pairing crate. The
//! per-curve modules fix the moduli, non-residues and Frobenius tables.
//! [`Matrix`] is a small fixed-size matrix with entrywise arithmetic.

#[macro_use]
mod macros;

mod cubic;
mod errors;
mod fp;
mod matrix;
pub mod naf;
mod quadratic;
mod random;
mod sqrt;
mod towers;
mod traits;

pub mod bls12_377;
pub mod bls12_381;
pub mod bn254;
pub mod edwards183;
pub mod mnt4_298;
pub mod mnt6_298;

#[cfg(test)]
mod tests;

pub use cubic::{CubicExtConfig, CubicExtField, CubicParams};
pub use errors::FieldError;
pub use fp::{biguint_from_literal, Fp, FpConfig, FpParams};
pub use matrix::Matrix;
pub use quadratic::{QuadExtConfig, QuadExtField, QuadParams};
pub use random::RandomField;
pub use towers::*;
pub use traits::{ConfigBounds, Field, PrimeField};

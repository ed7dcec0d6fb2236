//! Elliptic-curve groups of the pairing-friendly curve families.
//!
//! Short Weierstrass curves use Jacobian coordinates and twisted Edwards curves
//! use extended coordinates. Every curve is described by a config type carrying
//! its coefficients, generator and cofactor, so that points of different curves
//! never mix. The `hash_to_curve` module implements RFC 9380 for BLS12-381.

mod affine;
mod edwards;
mod errors;
mod group;
pub mod hash_to_curve;
mod models;
mod msm;
mod projective;
mod random;

pub mod bls12_377;
pub mod bls12_381;
pub mod bn254;
pub mod edwards183;
pub mod mnt4_298;
pub mod mnt6_298;

/// `bn128` is the same curve as `alt_bn128`/BN254.
pub use bn254 as bn128;

pub use affine::Affine;
pub use edwards::{EdwardsAffine, EdwardsProjective};
pub use errors::{CurveError, HashToCurveError};
pub use group::{Group, ScalarBits};
pub use models::{SWCurveConfig, SWCurveParams, TECurveConfig, TECurveParams};
pub use msm::bucket_msm;
pub use projective::Projective;

//! Error types for pairing computation.

use field::FieldError;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PairingError {
    /// Precomputation was handed the identity, whose lines are undefined.
    #[error("cannot prepare the identity point for a pairing")]
    IdentityPoint,

    #[error("point does not satisfy the curve equation")]
    NotOnCurve,

    #[error(transparent)]
    Field(#[from] FieldError),
}

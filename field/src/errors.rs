//! Error types for field arithmetic.

use thiserror::Error;

/// Errors raised by field operations with a restricted domain.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Zero has no multiplicative inverse.
    #[error("attempted to invert zero")]
    ZeroInverse,

    /// The element is not a quadratic residue.
    #[error("element is not a square")]
    NonSquare,

    #[error("expected {expected} bytes, found {found}")]
    InvalidLength { expected: usize, found: usize },

    /// An encoded integer is not below the field modulus.
    #[error("encoded value is not a canonical field element")]
    NonCanonical,

    /// A windowed NAF needs a width between 2 and 32.
    #[error("wNAF window {0} is outside 2..=32")]
    InvalidWindow(u32),

    #[error("index {index} is out of range for dimension {bound}")]
    IndexOutOfRange { index: usize, bound: usize },
}

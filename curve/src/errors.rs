//! Error types for curve points and hash-to-curve.

use field::FieldError;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    #[error("point does not satisfy the curve equation")]
    NotOnCurve,

    #[error("point is not in the prime-order subgroup")]
    NotInSubgroup,

    #[error("invalid point encoding flag {0:#04x}")]
    InvalidFlag(u8),

    #[error(transparent)]
    Field(#[from] FieldError),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum HashToCurveError {
    /// `expand_message_xmd` can produce at most 255 hash blocks and 65535 bytes.
    #[error("requested {0} bytes exceeds the expand_message_xmd limit")]
    ExpandLengthTooLarge(usize),

    #[error("domain separation tag of {0} bytes exceeds 255 bytes")]
    DstTooLong(usize),

    #[error(transparent)]
    Field(#[from] FieldError),
}

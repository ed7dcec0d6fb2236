use core::ops::Neg;
use field::{Field, FieldError};
use serde::{Deserialize, Serialize};

use crate::errors::CurveError;
use crate::models::SWCurveConfig;
use crate::projective::Projective;
use crate::Group;

const FLAG_FINITE: u8 = 0;
const FLAG_IDENTITY: u8 = 1;

/// Affine point on a short Weierstrass curve `y^2 = x^3 + a x + b`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Affine<P: SWCurveConfig> {
    pub x: P::BaseField,
    pub y: P::BaseField,
    /// Whether this point is the point at infinity (identity element)
    pub infinity: bool,
}

impl<P: SWCurveConfig> Affine<P> {
    /// Create a new affine point without checking the curve equation.
    pub fn new_unchecked(x: P::BaseField, y: P::BaseField) -> Self {
        Affine {
            x,
            y,
            infinity: false,
        }
    }

    /// Create a new affine point, rejecting coordinates off the curve.
    pub fn new(x: P::BaseField, y: P::BaseField) -> Result<Self, CurveError> {
        let point = Self::new_unchecked(x, y);
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(CurveError::NotOnCurve)
        }
    }

    pub fn identity() -> Self {
        Affine {
            x: P::BaseField::zero(),
            y: P::BaseField::zero(),
            infinity: true,
        }
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.infinity
    }

    pub fn generator() -> Self {
        let (x, y) = P::params().generator();
        Self::new_unchecked(x.clone(), y.clone())
    }

    /// Check if a point is on the curve: y^2 = x^3 + a*x + b.
    pub fn is_on_curve(&self) -> bool {
        if self.infinity {
            return true;
        }
        let x2 = self.x.square();
        let rhs = x2 * &self.x + &P::mul_by_a(&self.x) + P::params().b();
        self.y.square() == rhs
    }

    pub fn is_in_prime_order_subgroup(&self) -> bool {
        self.to_projective().is_in_prime_order_subgroup()
    }

    pub fn to_projective(&self) -> Projective<P> {
        Projective::from_affine(self)
    }

    pub fn negate(&self) -> Self {
        if self.infinity {
            return self.clone();
        }
        Self::new_unchecked(self.x.clone(), -self.y.clone())
    }

    /// Flag byte followed by the big-endian coordinates.
    pub fn serialized_size() -> usize {
        1 + 2 * P::BaseField::serialized_size()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::serialized_size());
        if self.infinity {
            bytes.push(FLAG_IDENTITY);
            bytes.resize(Self::serialized_size(), 0);
        } else {
            bytes.push(FLAG_FINITE);
            bytes.extend(self.x.to_bytes());
            bytes.extend(self.y.to_bytes());
        }
        bytes
    }

    /// Decodes and validates a point; subgroup membership is left to the caller.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CurveError> {
        let expected = Self::serialized_size();
        if bytes.len() != expected {
            return Err(FieldError::InvalidLength {
                expected,
                found: bytes.len(),
            }
            .into());
        }

        let (flag, coordinates) = bytes.split_at(1);
        match flag[0] {
            FLAG_IDENTITY if coordinates.iter().all(|&b| b == 0) => Ok(Self::identity()),
            FLAG_IDENTITY => Err(CurveError::NotOnCurve),
            FLAG_FINITE => {
                let (x, y) = coordinates.split_at(coordinates.len() / 2);
                Self::new(P::BaseField::from_bytes(x)?, P::BaseField::from_bytes(y)?)
            }
            other => Err(CurveError::InvalidFlag(other)),
        }
    }

    /// Like [`Self::from_bytes`], also rejecting points outside the prime-order subgroup.
    pub fn from_bytes_checked(bytes: &[u8]) -> Result<Self, CurveError> {
        let point = Self::from_bytes(bytes)?;
        if point.is_in_prime_order_subgroup() {
            Ok(point)
        } else {
            Err(CurveError::NotInSubgroup)
        }
    }
}

impl<P: SWCurveConfig> Default for Affine<P> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<P: SWCurveConfig> Neg for Affine<P> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

//! Twisted Edwards curves `a x^2 + y^2 = 1 + d x^2 y^2` in extended coordinates.

use core::borrow::Borrow;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use field::{Field, FieldError};
use serde::{Deserialize, Serialize};

use crate::errors::CurveError;
use crate::models::TECurveConfig;
use crate::Group;

/// Affine point; the identity is (0, 1).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct EdwardsAffine<P: TECurveConfig> {
    pub x: P::BaseField,
    pub y: P::BaseField,
}

impl<P: TECurveConfig> EdwardsAffine<P> {
    pub fn new_unchecked(x: P::BaseField, y: P::BaseField) -> Self {
        EdwardsAffine { x, y }
    }

    pub fn new(x: P::BaseField, y: P::BaseField) -> Result<Self, CurveError> {
        let point = Self::new_unchecked(x, y);
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(CurveError::NotOnCurve)
        }
    }

    pub fn identity() -> Self {
        Self::new_unchecked(P::BaseField::zero(), P::BaseField::one())
    }

    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_one()
    }

    pub fn generator() -> Self {
        let (x, y) = P::params().generator();
        Self::new_unchecked(x.clone(), y.clone())
    }

    pub fn is_on_curve(&self) -> bool {
        let x2 = self.x.square();
        let y2 = self.y.square();
        let lhs = P::mul_by_a(&x2) + &y2;
        let rhs = P::BaseField::one() + &(P::params().d().clone() * &x2 * &y2);
        lhs == rhs
    }

    pub fn is_in_prime_order_subgroup(&self) -> bool {
        self.to_projective().is_in_prime_order_subgroup()
    }

    pub fn to_projective(&self) -> EdwardsProjective<P> {
        EdwardsProjective::from_affine(self)
    }

    pub fn negate(&self) -> Self {
        Self::new_unchecked(-self.x.clone(), self.y.clone())
    }

    pub fn serialized_size() -> usize {
        2 * P::BaseField::serialized_size()
    }

    /// Big-endian `x || y`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.x.to_bytes();
        bytes.extend(self.y.to_bytes());
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CurveError> {
        let expected = Self::serialized_size();
        if bytes.len() != expected {
            return Err(FieldError::InvalidLength {
                expected,
                found: bytes.len(),
            }
            .into());
        }
        let (x, y) = bytes.split_at(expected / 2);
        Self::new(P::BaseField::from_bytes(x)?, P::BaseField::from_bytes(y)?)
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

impl<P: TECurveConfig> Default for EdwardsAffine<P> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<P: TECurveConfig> Neg for EdwardsAffine<P> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

/// Extended point (X:Y:T:Z) with x = X/Z, y = Y/Z and T = XY/Z.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct EdwardsProjective<P: TECurveConfig> {
    pub x: P::BaseField,
    pub y: P::BaseField,
    pub t: P::BaseField,
    pub z: P::BaseField,
}

impl<P: TECurveConfig> EdwardsProjective<P> {
    pub fn new(x: P::BaseField, y: P::BaseField, t: P::BaseField, z: P::BaseField) -> Self {
        EdwardsProjective { x, y, t, z }
    }

    pub fn from_affine(point: &EdwardsAffine<P>) -> Self {
        let t = point.x.clone() * &point.y;
        Self::new(point.x.clone(), point.y.clone(), t, P::BaseField::one())
    }

    pub fn to_affine(&self) -> EdwardsAffine<P> {
        match self.z.inverse() {
            Ok(z_inv) => EdwardsAffine::new_unchecked(
                self.x.clone() * &z_inv,
                self.y.clone() * &z_inv,
            ),
            Err(_) => EdwardsAffine::identity(),
        }
    }

    pub fn batch_normalize(points: &[Self]) -> Vec<EdwardsAffine<P>> {
        let mut prefix = Vec::with_capacity(points.len());
        let mut acc = P::BaseField::one();
        for p in points {
            prefix.push(acc.clone());
            acc *= &p.z;
        }

        let mut acc_inv = match acc.inverse() {
            Ok(inv) => inv,
            Err(_) => return points.iter().map(Self::to_affine).collect(),
        };

        let mut result = vec![EdwardsAffine::identity(); points.len()];
        for (i, p) in points.iter().enumerate().rev() {
            let z_inv = acc_inv.clone() * &prefix[i];
            acc_inv *= &p.z;
            result[i] = EdwardsAffine::new_unchecked(p.x.clone() * &z_inv, p.y.clone() * &z_inv);
        }
        result
    }

    /// Checks `(a X^2 + Y^2) Z^2 = Z^4 + d X^2 Y^2` and `T Z = X Y`.
    pub fn is_on_curve(&self) -> bool {
        if self.z.is_zero() {
            return false;
        }
        let x2 = self.x.square();
        let y2 = self.y.square();
        let z2 = self.z.square();
        let lhs = (P::mul_by_a(&x2) + &y2) * &z2;
        let rhs = z2.square() + &(P::params().d().clone() * &x2 * &y2);
        lhs == rhs && self.t.clone() * &self.z == self.x.clone() * &self.y
    }

    /// `madd-2008-hwcd`.
    pub fn add_mixed(&self, other: &EdwardsAffine<P>) -> Self {
        let t2 = other.x.clone() * &other.y;

        let a = self.x.clone() * &other.x;
        let b = self.y.clone() * &other.y;
        let c = P::params().d().clone() * &self.t * &t2;
        let d = self.z.clone();

        let e = (self.x.clone() + &self.y) * &(other.x.clone() + &other.y) - &a - &b;
        let f = d.clone() - &c;
        let g = d + &c;
        let h = b - &P::mul_by_a(&a);

        Self::new(e.clone() * &f, g.clone() * &h, e * &h, f * &g)
    }

    pub fn clear_cofactor(&self) -> Self {
        self.mul_bigint(P::params().cofactor())
    }
}

impl<P: TECurveConfig> Default for EdwardsProjective<P> {
    fn default() -> Self {
        <Self as Group>::identity()
    }
}

impl<P: TECurveConfig> PartialEq for EdwardsProjective<P> {
    fn eq(&self, other: &Self) -> bool {
        self.x.clone() * &other.z == other.x.clone() * &self.z
            && self.y.clone() * &other.z == other.y.clone() * &self.z
    }
}

impl<P: TECurveConfig> Eq for EdwardsProjective<P> {}

impl<P: TECurveConfig> Group for EdwardsProjective<P> {
    type ScalarField = P::ScalarField;

    fn identity() -> Self {
        Self::new(
            P::BaseField::zero(),
            P::BaseField::one(),
            P::BaseField::zero(),
            P::BaseField::one(),
        )
    }

    fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y == self.z
    }

    fn generator() -> Self {
        Self::from_affine(&EdwardsAffine::generator())
    }

    /// `dbl-2008-hwcd`.
    fn double(&self) -> Self {
        let a = self.x.square();
        let b = self.y.square();
        let c = self.z.square().double();
        let d = P::mul_by_a(&a);

        let e = (self.x.clone() + &self.y).square() - &a - &b;
        let g = d.clone() + &b;
        let f = g.clone() - &c;
        let h = d - &b;

        Self::new(e.clone() * &f, g.clone() * &h, e * &h, f * &g)
    }

    fn negate(&self) -> Self {
        Self::new(
            -self.x.clone(),
            self.y.clone(),
            -self.t.clone(),
            self.z.clone(),
        )
    }

    fn is_well_formed(&self) -> bool {
        self.is_on_curve()
    }
}

impl<'a, P: TECurveConfig> Add<&'a Self> for EdwardsProjective<P> {
    type Output = Self;

    /// `add-2008-hwcd`.
    fn add(self, other: &'a Self) -> Self {
        if self == *other {
            return self.double();
        }

        let a = self.x.clone() * &other.x;
        let b = self.y.clone() * &other.y;
        let c = P::params().d().clone() * &self.t * &other.t;
        let d = self.z.clone() * &other.z;

        let e = (self.x.clone() + &self.y) * &(other.x.clone() + &other.y) - &a - &b;
        let f = d.clone() - &c;
        let g = d + &c;
        let h = b - &P::mul_by_a(&a);

        Self::new(e.clone() * &f, g.clone() * &h, e * &h, f * &g)
    }
}

impl<P: TECurveConfig> Add for EdwardsProjective<P> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self + &other
    }
}

impl<'a, P: TECurveConfig> Add<&'a EdwardsAffine<P>> for EdwardsProjective<P> {
    type Output = Self;

    fn add(self, other: &'a EdwardsAffine<P>) -> Self {
        self.add_mixed(other)
    }
}

impl<P: TECurveConfig> AddAssign for EdwardsProjective<P> {
    fn add_assign(&mut self, other: Self) {
        *self = self.clone() + &other;
    }
}

impl<'a, P: TECurveConfig> AddAssign<&'a Self> for EdwardsProjective<P> {
    fn add_assign(&mut self, other: &'a Self) {
        *self = self.clone() + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl<P: TECurveConfig> Sub for EdwardsProjective<P> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + &other.negate()
    }
}

impl<P: TECurveConfig> SubAssign for EdwardsProjective<P> {
    fn sub_assign(&mut self, other: Self) {
        *self = self.clone() - other;
    }
}

impl<P: TECurveConfig> Neg for EdwardsProjective<P> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl<P: TECurveConfig, T: Borrow<P::ScalarField>> Mul<T> for EdwardsProjective<P> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        self.scalar_mul_windowed(scalar.borrow())
    }
}

impl<P: TECurveConfig> From<EdwardsAffine<P>> for EdwardsProjective<P> {
    fn from(point: EdwardsAffine<P>) -> Self {
        Self::from_affine(&point)
    }
}

impl<P: TECurveConfig> From<EdwardsProjective<P>> for EdwardsAffine<P> {
    fn from(point: EdwardsProjective<P>) -> Self {
        point.to_affine()
    }
}

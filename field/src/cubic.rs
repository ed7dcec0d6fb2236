//! Generic cubic extension `B[v] / (v^3 - ξ)`, used for Fp3 and Fp6 (3-over-2).

use core::ops::{AddAssign, MulAssign, Neg, SubAssign};
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::FieldError;
use crate::quadratic::frobenius_coefficients;
use crate::random::RandomField;
use crate::traits::{ConfigBounds, Field};

/// Non-residue and Frobenius tables of one cubic tower level.
#[derive(Debug)]
pub struct CubicParams<B, C> {
    pub nonresidue: B,
    pub frobenius_c1: Vec<C>,
    pub frobenius_c2: Vec<C>,
}

impl<B: Field> CubicParams<B, B> {
    /// Tables `ξ^((p^i - 1)/3)` and `ξ^(2(p^i - 1)/3)` for every `i` below the absolute degree.
    pub fn new(nonresidue: B) -> Self {
        let degree = 3 * B::extension_degree();
        let frobenius_c1 = frobenius_coefficients(&nonresidue, 1, 3, degree);
        let frobenius_c2 = frobenius_coefficients(&nonresidue, 2, 3, degree);

        tracing::debug!(degree, "derived cubic tower frobenius coefficients");

        Self {
            nonresidue,
            frobenius_c1,
            frobenius_c2,
        }
    }
}

pub trait CubicExtConfig: ConfigBounds {
    type BaseField: Field;
    type FrobCoeff: Field;

    fn nonresidue() -> &'static Self::BaseField;

    fn mul_base_field_by_nonresidue(fe: &Self::BaseField) -> Self::BaseField {
        Self::nonresidue().clone() * fe
    }

    fn mul_base_field_by_frob_coeff(
        c1: &mut Self::BaseField,
        c2: &mut Self::BaseField,
        power: usize,
    );
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct CubicExtField<P: CubicExtConfig> {
    pub c0: P::BaseField,
    pub c1: P::BaseField,
    pub c2: P::BaseField,
}

impl<P: CubicExtConfig> CubicExtField<P> {
    pub fn new(c0: P::BaseField, c1: P::BaseField, c2: P::BaseField) -> Self {
        CubicExtField { c0, c1, c2 }
    }

    pub fn mul_by_base_field(&self, elem: &P::BaseField) -> Self {
        Self::new(
            self.c0.clone() * elem,
            self.c1.clone() * elem,
            self.c2.clone() * elem,
        )
    }

    /// Multiplies by the generator `v`: `(ξ c2, c0, c1)`.
    pub fn mul_by_root(&self) -> Self {
        Self::new(
            P::mul_base_field_by_nonresidue(&self.c2),
            self.c0.clone(),
            self.c1.clone(),
        )
    }

    // Cofactors of the multiplication matrix; shared by inverse and norm.
    fn adjugate(&self) -> (P::BaseField, P::BaseField, P::BaseField) {
        let t0 = self.c0.square();
        let t1 = self.c1.square();
        let t2 = self.c2.square();
        let t3 = self.c0.clone() * &self.c1;
        let t4 = self.c0.clone() * &self.c2;
        let t5 = self.c1.clone() * &self.c2;
        (
            t0 - &P::mul_base_field_by_nonresidue(&t5),
            P::mul_base_field_by_nonresidue(&t2) - &t3,
            t1 - &t4,
        )
    }

    /// Norm over the base field, `a0 s0 + ξ (a2 s1 + a1 s2)` for the cofactors `s`.
    pub fn norm_to_base(&self) -> P::BaseField {
        let (s0, s1, s2) = self.adjugate();
        self.norm_from_adjugate(&s0, &s1, &s2)
    }

    fn norm_from_adjugate(
        &self,
        s0: &P::BaseField,
        s1: &P::BaseField,
        s2: &P::BaseField,
    ) -> P::BaseField {
        let tail = self.c2.clone() * s1 + &(self.c1.clone() * s2);
        self.c0.clone() * s0 + &P::mul_base_field_by_nonresidue(&tail)
    }
}

impl<'a, P: CubicExtConfig> AddAssign<&'a Self> for CubicExtField<P> {
    #[inline]
    fn add_assign(&mut self, other: &'a Self) {
        self.c0 += &other.c0;
        self.c1 += &other.c1;
        self.c2 += &other.c2;
    }
}

impl<'a, P: CubicExtConfig> SubAssign<&'a Self> for CubicExtField<P> {
    #[inline]
    fn sub_assign(&mut self, other: &'a Self) {
        self.c0 -= &other.c0;
        self.c1 -= &other.c1;
        self.c2 -= &other.c2;
    }
}

impl<'a, P: CubicExtConfig> MulAssign<&'a Self> for CubicExtField<P> {
    /// Karatsuba-style, six base-field multiplications.
    fn mul_assign(&mut self, other: &'a Self) {
        let (a0, a1, a2) = (&self.c0, &self.c1, &self.c2);
        let (b0, b1, b2) = (&other.c0, &other.c1, &other.c2);

        let v0 = a0.clone() * b0;
        let v1 = a1.clone() * b1;
        let v2 = a2.clone() * b2;

        let c0 = (a1.clone() + a2) * &(b1.clone() + b2) - &v1 - &v2;
        let c0 = v0.clone() + &P::mul_base_field_by_nonresidue(&c0);

        let c1 = (a0.clone() + a1) * &(b0.clone() + b1) - &v0 - &v1
            + &P::mul_base_field_by_nonresidue(&v2);

        let c2 = (a0.clone() + a2) * &(b0.clone() + b2) - &v0 + &v1 - &v2;

        self.c0 = c0;
        self.c1 = c1;
        self.c2 = c2;
    }
}

impl<P: CubicExtConfig> Neg for CubicExtField<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1, -self.c2)
    }
}

impl_field_ops!(CubicExtField, CubicExtConfig);

impl<P: CubicExtConfig> Field for CubicExtField<P> {
    type BasePrimeField = <P::BaseField as Field>::BasePrimeField;

    fn zero() -> Self {
        Self::new(
            P::BaseField::zero(),
            P::BaseField::zero(),
            P::BaseField::zero(),
        )
    }

    fn one() -> Self {
        Self::new(
            P::BaseField::one(),
            P::BaseField::zero(),
            P::BaseField::zero(),
        )
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }

    fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero() && self.c2.is_zero()
    }

    fn double(&self) -> Self {
        Self::new(self.c0.double(), self.c1.double(), self.c2.double())
    }

    /// Chung–Hasan SQR2.
    fn square(&self) -> Self {
        let s0 = self.c0.square();
        let s1 = (self.c0.clone() * &self.c1).double();
        let s2 = (self.c0.clone() - &self.c1 + &self.c2).square();
        let s3 = (self.c1.clone() * &self.c2).double();
        let s4 = self.c2.square();

        let c0 = s0.clone() + &P::mul_base_field_by_nonresidue(&s3);
        let c1 = s1.clone() + &P::mul_base_field_by_nonresidue(&s4);
        let c2 = s1 + &s2 + &s3 - &s0 - &s4;
        Self::new(c0, c1, c2)
    }

    fn inverse(&self) -> Result<Self, FieldError> {
        if self.is_zero() {
            return Err(FieldError::ZeroInverse);
        }
        let (s0, s1, s2) = self.adjugate();
        let t = self.norm_from_adjugate(&s0, &s1, &s2).inverse()?;
        Ok(Self::new(s0 * &t, s1 * &t, s2 * &t))
    }

    fn frobenius_map(&self, power: usize) -> Self {
        let c0 = self.c0.frobenius_map(power);
        let mut c1 = self.c1.frobenius_map(power);
        let mut c2 = self.c2.frobenius_map(power);
        P::mul_base_field_by_frob_coeff(&mut c1, &mut c2, power);
        Self::new(c0, c1, c2)
    }

    fn norm(&self) -> Self::BasePrimeField {
        self.norm_to_base().norm()
    }

    fn extension_degree() -> usize {
        3 * P::BaseField::extension_degree()
    }

    fn from_base_prime_field(elem: Self::BasePrimeField) -> Self {
        Self::new(
            P::BaseField::from_base_prime_field(elem),
            P::BaseField::zero(),
            P::BaseField::zero(),
        )
    }

    fn from_base_prime_field_elems(elems: &[Self::BasePrimeField]) -> Option<Self> {
        if elems.len() != Self::extension_degree() {
            return None;
        }
        let step = elems.len() / 3;
        Some(Self::new(
            P::BaseField::from_base_prime_field_elems(&elems[..step])?,
            P::BaseField::from_base_prime_field_elems(&elems[step..2 * step])?,
            P::BaseField::from_base_prime_field_elems(&elems[2 * step..])?,
        ))
    }

    fn to_base_prime_field_elems(&self) -> Vec<Self::BasePrimeField> {
        let mut elems = self.c0.to_base_prime_field_elems();
        elems.extend(self.c1.to_base_prime_field_elems());
        elems.extend(self.c2.to_base_prime_field_elems());
        elems
    }

    fn mul_by_base_prime_field(&self, elem: &Self::BasePrimeField) -> Self {
        Self::new(
            self.c0.mul_by_base_prime_field(elem),
            self.c1.mul_by_base_prime_field(elem),
            self.c2.mul_by_base_prime_field(elem),
        )
    }

    fn serialized_size() -> usize {
        3 * P::BaseField::serialized_size()
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.c0.to_bytes();
        bytes.extend(self.c1.to_bytes());
        bytes.extend(self.c2.to_bytes());
        bytes
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, FieldError> {
        let expected = Self::serialized_size();
        if bytes.len() != expected {
            return Err(FieldError::InvalidLength {
                expected,
                found: bytes.len(),
            });
        }
        let step = expected / 3;
        Ok(Self::new(
            P::BaseField::from_bytes(&bytes[..step])?,
            P::BaseField::from_bytes(&bytes[step..2 * step])?,
            P::BaseField::from_bytes(&bytes[2 * step..])?,
        ))
    }
}

impl<P: CubicExtConfig> Distribution<CubicExtField<P>> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> CubicExtField<P> {
        CubicExtField::new(
            P::BaseField::random(rng),
            P::BaseField::random(rng),
            P::BaseField::random(rng),
        )
    }
}

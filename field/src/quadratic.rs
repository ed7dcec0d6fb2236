//! Generic quadratic extension `B[u] / (u^2 - β)`.
//!
//! A tower level is fixed by a [`QuadExtConfig`], which names the base field,
//! the non-residue `β` and the Frobenius coefficient table. The Fp2, Fp4,
//! Fp6 (2-over-3) and Fp12 towers are all instances of this type.

use core::ops::{AddAssign, MulAssign, Neg, SubAssign};
use num_bigint::BigUint;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::FieldError;
use crate::random::RandomField;
use crate::traits::{ConfigBounds, Field};

/// Non-residue and Frobenius table of one quadratic tower level.
#[derive(Debug)]
pub struct QuadParams<B, C> {
    pub nonresidue: B,
    pub frobenius_c1: Vec<C>,
}

impl<B: Field, C: Field> QuadParams<B, C> {
    /// `frobenius_root` is the element of `C` whose power the top generator reaches:
    /// with `u` the generator and `d = 2 * [B : C]`, `u^d = frobenius_root`.
    pub fn new(nonresidue: B, frobenius_root: &C) -> Self {
        let degree = 2 * B::extension_degree();
        let denominator = (degree / C::extension_degree()) as u32;
        let frobenius_c1 = frobenius_coefficients(frobenius_root, 1, denominator, degree);

        tracing::debug!(degree, "derived quadratic tower frobenius coefficients");

        Self {
            nonresidue,
            frobenius_c1,
        }
    }
}

/// `root^(numerator * (p^i - 1) / denominator)` for `i` in `0..count`.
pub(crate) fn frobenius_coefficients<F: Field>(
    root: &F,
    numerator: u32,
    denominator: u32,
    count: usize,
) -> Vec<F> {
    let p = F::characteristic();
    (0..count)
        .map(|i| {
            let exp: BigUint = (p.pow(i as u32) - 1u32) * numerator / denominator;
            root.pow(&exp)
        })
        .collect()
}

pub trait QuadExtConfig: ConfigBounds {
    type BaseField: Field;
    /// Field the Frobenius coefficients live in.
    type FrobCoeff: Field;

    fn nonresidue() -> &'static Self::BaseField;

    fn mul_base_field_by_nonresidue(fe: &Self::BaseField) -> Self::BaseField {
        Self::nonresidue().clone() * fe
    }

    fn mul_base_field_by_frob_coeff(fe: &mut Self::BaseField, power: usize);

    /// Squaring of a norm-1 element: `(1 + 2β c1^2, (c0 + c1)^2 - c0^2 - c1^2)`.
    fn cyclotomic_square(fe: &QuadExtField<Self>) -> QuadExtField<Self> {
        let one = Self::BaseField::one();
        let a = fe.c1.square();
        let b = fe.c1.clone() + &fe.c0;
        let c = b.square() - &a;
        let d = Self::mul_base_field_by_nonresidue(&a);
        let e = c - &d;
        QuadExtField::new(d.double() + &one, e - &one)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct QuadExtField<P: QuadExtConfig> {
    pub c0: P::BaseField,
    pub c1: P::BaseField,
}

impl<P: QuadExtConfig> QuadExtField<P> {
    pub fn new(c0: P::BaseField, c1: P::BaseField) -> Self {
        QuadExtField { c0, c1 }
    }

    /// `c0 - c1 u`, the image under the non-trivial automorphism over the base field.
    pub fn conjugate(&self) -> Self {
        Self::new(self.c0.clone(), -self.c1.clone())
    }

    /// `c0^2 - β c1^2`.
    pub fn norm_to_base(&self) -> P::BaseField {
        self.c0.square() - &P::mul_base_field_by_nonresidue(&self.c1.square())
    }

    pub fn mul_by_base_field(&self, elem: &P::BaseField) -> Self {
        Self::new(self.c0.clone() * elem, self.c1.clone() * elem)
    }

    /// Multiplies by the generator `u`.
    pub fn mul_by_root(&self) -> Self {
        Self::new(P::mul_base_field_by_nonresidue(&self.c1), self.c0.clone())
    }

    /// Inverse of an element of norm one.
    pub fn unitary_inverse(&self) -> Self {
        self.conjugate()
    }

    pub fn cyclotomic_square(&self) -> Self {
        P::cyclotomic_square(self)
    }

    /// Exponentiation inside the cyclotomic subgroup, most significant bit first.
    pub fn cyclotomic_exp(&self, exp: &BigUint) -> Self {
        let mut result = Self::one();
        for i in (0..exp.bits()).rev() {
            result = result.cyclotomic_square();
            if exp.bit(i) {
                result *= self;
            }
        }
        result
    }
}

impl<'a, P: QuadExtConfig> AddAssign<&'a Self> for QuadExtField<P> {
    #[inline]
    fn add_assign(&mut self, other: &'a Self) {
        self.c0 += &other.c0;
        self.c1 += &other.c1;
    }
}

impl<'a, P: QuadExtConfig> SubAssign<&'a Self> for QuadExtField<P> {
    #[inline]
    fn sub_assign(&mut self, other: &'a Self) {
        self.c0 -= &other.c0;
        self.c1 -= &other.c1;
    }
}

impl<'a, P: QuadExtConfig> MulAssign<&'a Self> for QuadExtField<P> {
    /// Karatsuba: three base-field multiplications.
    fn mul_assign(&mut self, other: &'a Self) {
        let v0 = self.c0.clone() * &other.c0;
        let v1 = self.c1.clone() * &other.c1;
        let c1 = (self.c0.clone() + &self.c1) * &(other.c0.clone() + &other.c1) - &v0 - &v1;
        self.c0 = v0 + &P::mul_base_field_by_nonresidue(&v1);
        self.c1 = c1;
    }
}

impl<P: QuadExtConfig> Neg for QuadExtField<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1)
    }
}

impl_field_ops!(QuadExtField, QuadExtConfig);

impl<P: QuadExtConfig> Field for QuadExtField<P> {
    type BasePrimeField = <P::BaseField as Field>::BasePrimeField;

    fn zero() -> Self {
        Self::new(P::BaseField::zero(), P::BaseField::zero())
    }

    fn one() -> Self {
        Self::new(P::BaseField::one(), P::BaseField::zero())
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero()
    }

    fn double(&self) -> Self {
        Self::new(self.c0.double(), self.c1.double())
    }

    /// Complex squaring: two base-field multiplications.
    fn square(&self) -> Self {
        let v0 = self.c0.clone() - &self.c1;
        let v3 = self.c0.clone() - &P::mul_base_field_by_nonresidue(&self.c1);
        let v2 = self.c0.clone() * &self.c1;
        let c0 = v0 * &v3 + &v2 + &P::mul_base_field_by_nonresidue(&v2);
        Self::new(c0, v2.double())
    }

    /// `(c0 t, -c1 t)` with `t = (c0^2 - β c1^2)^-1`.
    fn inverse(&self) -> Result<Self, FieldError> {
        if self.is_zero() {
            return Err(FieldError::ZeroInverse);
        }
        let t = self.norm_to_base().inverse()?;
        Ok(Self::new(self.c0.clone() * &t, -(self.c1.clone() * &t)))
    }

    fn frobenius_map(&self, power: usize) -> Self {
        let c0 = self.c0.frobenius_map(power);
        let mut c1 = self.c1.frobenius_map(power);
        P::mul_base_field_by_frob_coeff(&mut c1, power);
        Self::new(c0, c1)
    }

    fn norm(&self) -> Self::BasePrimeField {
        self.norm_to_base().norm()
    }

    fn extension_degree() -> usize {
        2 * P::BaseField::extension_degree()
    }

    fn from_base_prime_field(elem: Self::BasePrimeField) -> Self {
        Self::new(P::BaseField::from_base_prime_field(elem), P::BaseField::zero())
    }

    fn from_base_prime_field_elems(elems: &[Self::BasePrimeField]) -> Option<Self> {
        if elems.len() != Self::extension_degree() {
            return None;
        }
        let (low, high) = elems.split_at(elems.len() / 2);
        Some(Self::new(
            P::BaseField::from_base_prime_field_elems(low)?,
            P::BaseField::from_base_prime_field_elems(high)?,
        ))
    }

    fn to_base_prime_field_elems(&self) -> Vec<Self::BasePrimeField> {
        let mut elems = self.c0.to_base_prime_field_elems();
        elems.extend(self.c1.to_base_prime_field_elems());
        elems
    }

    fn mul_by_base_prime_field(&self, elem: &Self::BasePrimeField) -> Self {
        Self::new(
            self.c0.mul_by_base_prime_field(elem),
            self.c1.mul_by_base_prime_field(elem),
        )
    }

    fn serialized_size() -> usize {
        2 * P::BaseField::serialized_size()
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.c0.to_bytes();
        bytes.extend(self.c1.to_bytes());
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
        let (low, high) = bytes.split_at(expected / 2);
        Ok(Self::new(
            P::BaseField::from_bytes(low)?,
            P::BaseField::from_bytes(high)?,
        ))
    }
}

impl<P: QuadExtConfig> Distribution<QuadExtField<P>> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> QuadExtField<P> {
        QuadExtField::new(P::BaseField::random(rng), P::BaseField::random(rng))
    }
}

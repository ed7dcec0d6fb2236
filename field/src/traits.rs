use core::fmt::Debug;
use core::hash::Hash;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_bigint::BigUint;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::FieldError;
use crate::random::RandomField;
use crate::sqrt::tonelli_shanks;

/// Bounds shared by every zero-sized configuration marker.
pub trait ConfigBounds:
    'static + Send + Sync + Sized + Copy + Clone + Debug + Default + PartialEq + Eq + Hash
{
}

impl<T> ConfigBounds for T where
    T: 'static + Send + Sync + Sized + Copy + Clone + Debug + Default + PartialEq + Eq + Hash
{
}

/// Arithmetic shared by prime fields and every extension tower built on them.
pub trait Field:
    'static
    + Sized
    + Clone
    + Debug
    + Default
    + PartialEq
    + Eq
    + Hash
    + Send
    + Sync
    + Serialize
    + DeserializeOwned
    + RandomField
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + Sum
    + Product
{
    type BasePrimeField: PrimeField;

    fn zero() -> Self;
    fn one() -> Self;
    fn is_zero(&self) -> bool;

    fn is_one(&self) -> bool {
        *self == Self::one()
    }

    fn double(&self) -> Self {
        self.clone() + self
    }

    fn square(&self) -> Self {
        self.clone() * self
    }

    /// Multiplicative inverse, failing on zero.
    fn inverse(&self) -> Result<Self, FieldError>;

    /// Applies `x -> x^(p^power)`.
    fn frobenius_map(&self, power: usize) -> Self;

    /// Norm down to the prime field.
    fn norm(&self) -> Self::BasePrimeField;

    /// Degree of this field over its prime field.
    fn extension_degree() -> usize;

    fn from_base_prime_field(elem: Self::BasePrimeField) -> Self;

    /// Builds an element from its prime-field coefficients, lowest tower level first.
    fn from_base_prime_field_elems(elems: &[Self::BasePrimeField]) -> Option<Self>;

    fn to_base_prime_field_elems(&self) -> Vec<Self::BasePrimeField>;

    fn mul_by_base_prime_field(&self, elem: &Self::BasePrimeField) -> Self;

    fn characteristic() -> &'static BigUint {
        Self::BasePrimeField::modulus()
    }

    /// Number of elements, `p^degree`.
    fn order() -> BigUint {
        Self::characteristic().pow(Self::extension_degree() as u32)
    }

    /// Square-and-multiply, most significant bit first.
    fn pow(&self, exp: &BigUint) -> Self {
        let mut result = Self::one();
        for i in (0..exp.bits()).rev() {
            result = result.square();
            if exp.bit(i) {
                result *= self;
            }
        }
        result
    }

    fn pow_u64(&self, exp: u64) -> Self {
        self.pow(&BigUint::from(exp))
    }

    /// An element is a square exactly when its norm is a square in the prime field.
    fn is_square(&self) -> bool {
        self.is_zero() || self.norm().is_square()
    }

    fn sqrt(&self) -> Result<Self, FieldError> {
        tonelli_shanks(self)
    }

    /// Sign of the element as defined by RFC 9380, section 4.1.
    fn sgn0(&self) -> bool {
        let mut sign = false;
        let mut zero = true;
        for elem in self.to_base_prime_field_elems() {
            let sign_i = elem.into_biguint().bit(0);
            sign = sign || (zero && sign_i);
            zero = zero && elem.is_zero();
        }
        sign
    }

    /// Length of the fixed-size big-endian encoding.
    fn serialized_size() -> usize;

    fn to_bytes(&self) -> Vec<u8>;

    fn from_bytes(bytes: &[u8]) -> Result<Self, FieldError>;
}

/// A field of prime order.
pub trait PrimeField: Field<BasePrimeField = Self> + Ord {
    fn modulus() -> &'static BigUint;

    fn modulus_bits() -> u64;

    /// Reduces an arbitrary integer modulo the field order.
    fn from_biguint(value: &BigUint) -> Self;

    fn into_biguint(&self) -> BigUint;

    fn from_u64(value: u64) -> Self {
        Self::from_biguint(&BigUint::from(value))
    }

    fn from_be_bytes_mod_order(bytes: &[u8]) -> Self {
        Self::from_biguint(&BigUint::from_bytes_be(bytes))
    }
}

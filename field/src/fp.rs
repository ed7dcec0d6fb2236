//! Prime field `Fp` over an arbitrary odd modulus.
//!
//! Elements are canonical `BigUint` residues in `[0, p)`. Each field instance is
//! described by a lazily built [`FpParams`] record holding the modulus and the
//! exponents derived from it, reached through a zero-sized [`FpConfig`] marker.

use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};
use core::marker::PhantomData;
use core::ops::{AddAssign, MulAssign, Neg, SubAssign};
use num_bigint::BigUint;
use num_traits::{Num, One, Zero};
use rand::distr::{Distribution, StandardUniform};
use rand::{Rng, RngCore};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::FieldError;
use crate::sqrt::tonelli_shanks;
use crate::traits::{ConfigBounds, Field, PrimeField};

/// Parses a hard-coded `0x`-prefixed hex or decimal integer literal.
pub fn biguint_from_literal(literal: &str) -> BigUint {
    let parsed = match literal.strip_prefix("0x") {
        Some(hex) => BigUint::from_str_radix(hex, 16),
        None => BigUint::from_str_radix(literal, 10),
    };
    parsed.expect("hard-coded integer literal must parse")
}

/// Modulus of a prime field together with the values derived from it.
#[derive(Debug)]
pub struct FpParams {
    name: &'static str,
    modulus: BigUint,
    minus_one_div_two: BigUint,
    minus_two: BigUint,
    // p - 1 = 2^two_adicity * t with t odd
    two_adicity: u64,
    // Present when p = 3 (mod 4)
    plus_one_div_four: Option<BigUint>,
    bits: u64,
    byte_len: usize,
}

impl FpParams {
    pub fn new(name: &'static str, modulus: &str) -> Self {
        let modulus = biguint_from_literal(modulus);
        let minus_one = &modulus - 1u32;
        let plus_one_div_four = if &modulus % 4u32 == BigUint::from(3u32) {
            Some((&modulus + 1u32) >> 2u32)
        } else {
            None
        };
        let two_adicity = minus_one.trailing_zeros().unwrap_or(0);
        let bits = modulus.bits();
        let byte_len = bits.div_ceil(8) as usize;

        tracing::debug!(
            field = name,
            bits,
            two_adicity,
            "initialized prime field parameters"
        );

        Self {
            name,
            minus_one_div_two: minus_one >> 1u32,
            minus_two: &modulus - 2u32,
            two_adicity,
            plus_one_div_four,
            bits,
            byte_len,
            modulus,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn bits(&self) -> u64 {
        self.bits
    }

    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    pub fn two_adicity(&self) -> u64 {
        self.two_adicity
    }
}

/// Zero-sized marker selecting the parameters of one prime field.
pub trait FpConfig: ConfigBounds {
    fn params() -> &'static FpParams;
}

/// Element of the prime field described by `P`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Fp<P: FpConfig> {
    value: BigUint,
    _config: PhantomData<P>,
}

impl<P: FpConfig> Fp<P> {
    /// Reduces `value` modulo `p`.
    pub fn new(value: BigUint) -> Self {
        Self::from_reduced(value % P::params().modulus())
    }

    #[inline]
    fn from_reduced(value: BigUint) -> Self {
        Fp {
            value,
            _config: PhantomData,
        }
    }

    pub fn from_literal(literal: &str) -> Self {
        Self::new(biguint_from_literal(literal))
    }

    /// Canonical residue in `[0, p)`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }
}

impl<P: FpConfig> Default for Fp<P> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: FpConfig> Debug for Fp<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fp(0x{})", self.value.to_str_radix(16))
    }
}

impl<P: FpConfig> Display for Fp<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<P: FpConfig> PartialOrd for Fp<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: FpConfig> Ord for Fp<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<'a, P: FpConfig> AddAssign<&'a Self> for Fp<P> {
    #[inline]
    fn add_assign(&mut self, other: &'a Self) {
        let modulus = P::params().modulus();
        self.value += &other.value;
        if self.value >= *modulus {
            self.value -= modulus;
        }
    }
}

impl<'a, P: FpConfig> SubAssign<&'a Self> for Fp<P> {
    #[inline]
    fn sub_assign(&mut self, other: &'a Self) {
        if self.value < other.value {
            self.value += P::params().modulus();
        }
        self.value -= &other.value;
    }
}

impl<'a, P: FpConfig> MulAssign<&'a Self> for Fp<P> {
    #[inline]
    fn mul_assign(&mut self, other: &'a Self) {
        self.value = (&self.value * &other.value) % P::params().modulus();
    }
}

impl<P: FpConfig> Neg for Fp<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        if self.value.is_zero() {
            return self;
        }
        Self::from_reduced(P::params().modulus() - self.value)
    }
}

impl_field_ops!(Fp, FpConfig);

impl<P: FpConfig> Field for Fp<P> {
    type BasePrimeField = Self;

    #[inline]
    fn zero() -> Self {
        Self::from_reduced(BigUint::zero())
    }

    #[inline]
    fn one() -> Self {
        Self::from_reduced(BigUint::one())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.value.is_one()
    }

    fn square(&self) -> Self {
        Self::from_reduced((&self.value * &self.value) % P::params().modulus())
    }

    /// Fermat inversion: `a^(p-2)`.
    fn inverse(&self) -> Result<Self, FieldError> {
        if self.is_zero() {
            return Err(FieldError::ZeroInverse);
        }
        let params = P::params();
        Ok(Self::from_reduced(
            self.value.modpow(&params.minus_two, params.modulus()),
        ))
    }

    fn frobenius_map(&self, _power: usize) -> Self {
        self.clone()
    }

    fn norm(&self) -> Self {
        self.clone()
    }

    fn extension_degree() -> usize {
        1
    }

    fn from_base_prime_field(elem: Self) -> Self {
        elem
    }

    fn from_base_prime_field_elems(elems: &[Self]) -> Option<Self> {
        match elems {
            [elem] => Some(elem.clone()),
            _ => None,
        }
    }

    fn to_base_prime_field_elems(&self) -> Vec<Self> {
        vec![self.clone()]
    }

    fn mul_by_base_prime_field(&self, elem: &Self) -> Self {
        self.clone() * elem
    }

    fn pow(&self, exp: &BigUint) -> Self {
        Self::from_reduced(self.value.modpow(exp, P::params().modulus()))
    }

    /// Euler's criterion.
    fn is_square(&self) -> bool {
        self.is_zero() || self.pow(&P::params().minus_one_div_two).is_one()
    }

    fn sqrt(&self) -> Result<Self, FieldError> {
        if self.is_zero() {
            return Ok(Self::zero());
        }
        match &P::params().plus_one_div_four {
            Some(exp) => {
                let candidate = self.pow(exp);
                if candidate.square() == *self {
                    Ok(candidate)
                } else {
                    Err(FieldError::NonSquare)
                }
            }
            None => tonelli_shanks(self),
        }
    }

    fn serialized_size() -> usize {
        P::params().byte_len()
    }

    /// Big-endian, left-padded to the byte length of the modulus.
    fn to_bytes(&self) -> Vec<u8> {
        let len = Self::serialized_size();
        let digits = self.value.to_bytes_be();
        let mut bytes = vec![0u8; len - digits.len()];
        bytes.extend_from_slice(&digits);
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
        let value = BigUint::from_bytes_be(bytes);
        if value >= *P::params().modulus() {
            return Err(FieldError::NonCanonical);
        }
        Ok(Self::from_reduced(value))
    }
}

impl<P: FpConfig> PrimeField for Fp<P> {
    fn modulus() -> &'static BigUint {
        P::params().modulus()
    }

    fn modulus_bits() -> u64 {
        P::params().bits()
    }

    fn from_biguint(value: &BigUint) -> Self {
        Self::new(value.clone())
    }

    fn into_biguint(&self) -> BigUint {
        self.value.clone()
    }

    fn from_u64(value: u64) -> Self {
        Self::new(BigUint::from(value))
    }
}

impl<P: FpConfig> From<u64> for Fp<P> {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl<P: FpConfig> Distribution<Fp<P>> for StandardUniform {
    /// Rejection sampling over the byte length of the modulus.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp<P> {
        let params = P::params();
        let excess_bits = params.byte_len() * 8 - params.bits() as usize;
        let mut bytes = vec![0u8; params.byte_len()];
        loop {
            rng.fill_bytes(&mut bytes);
            bytes[0] &= 0xffu8 >> excess_bits;
            let value = BigUint::from_bytes_be(&bytes);
            if value < *params.modulus() {
                return Fp::from_reduced(value);
            }
        }
    }
}

impl<P: FpConfig> Serialize for Fp<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.to_bytes())
    }
}

impl<'de, P: FpConfig> Deserialize<'de> for Fp<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = <Vec<u8>>::deserialize(deserializer)?;
        Self::from_bytes(&bytes).map_err(serde::de::Error::custom)
    }
}

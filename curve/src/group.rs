use core::fmt::Debug;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use field::naf::find_wnaf;
use field::{Fp, FpConfig, PrimeField, RandomField};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;

use crate::errors::CurveError;

/// Little-endian 64-bit limbs of a scalar.
pub trait ScalarBits {
    fn to_u64_limbs(&self) -> Vec<u64>;

    fn to_biguint(&self) -> BigUint {
        self.to_u64_limbs()
            .iter()
            .rev()
            .fold(BigUint::zero(), |acc, &limb| (acc << 64u32) + limb)
    }
}

impl ScalarBits for u64 {
    fn to_u64_limbs(&self) -> Vec<u64> {
        vec![*self]
    }
}

impl ScalarBits for BigUint {
    fn to_u64_limbs(&self) -> Vec<u64> {
        self.to_u64_digits()
    }

    fn to_biguint(&self) -> BigUint {
        self.clone()
    }
}

impl<P: FpConfig> ScalarBits for Fp<P> {
    fn to_u64_limbs(&self) -> Vec<u64> {
        self.value().to_u64_digits()
    }

    fn to_biguint(&self) -> BigUint {
        self.value().clone()
    }
}

pub trait Group:
    Sized
    + Clone
    + Debug
    + PartialEq
    + Eq
    + Send
    + Sync
    + Add<Output = Self>
    + for<'a> Add<&'a Self, Output = Self>
    + AddAssign
    + for<'a> AddAssign<&'a Self>
    + Sub<Output = Self>
    + SubAssign
    + Neg<Output = Self>
{
    type ScalarField: PrimeField + ScalarBits;

    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    fn double(&self) -> Self;
    fn negate(&self) -> Self;

    /// Whether the point satisfies its curve equation.
    fn is_well_formed(&self) -> bool;

    /// Order of the prime-order subgroup, the characteristic of the scalar field.
    fn order() -> &'static BigUint {
        Self::ScalarField::modulus()
    }

    /// `generator * s` for a uniformly random scalar `s`.
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::generator().scalar_mul(&Self::ScalarField::random(rng))
    }

    #[inline]
    fn scalar_mul<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Self {
        let scalar_limbs = scalar.to_u64_limbs();
        let mut result = Self::identity();
        let mut temp = self.clone();

        for &limb in scalar_limbs.iter() {
            let mut bits = limb;
            for _ in 0..64 {
                if bits & 1 == 1 {
                    result += temp.clone();
                }
                temp = temp.double();
                bits >>= 1;
            }
        }

        result
    }

    fn scalar_mul_windowed<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Self {
        if self.is_identity() {
            return Self::identity();
        }

        let mut table = vec![Self::identity(); 16];
        table[1] = self.clone();

        for i in 2..16 {
            table[i] = if i % 2 == 0 {
                table[i / 2].double()
            } else {
                table[i - 1].clone() + &table[1]
            };
        }

        let scalar_limbs = scalar.to_u64_limbs();
        let mut result = Self::identity();

        for &limb in scalar_limbs.iter().rev() {
            for shift in (0..64).step_by(4).rev() {
                result = result.double();
                result = result.double();
                result = result.double();
                result = result.double();

                let window = ((limb >> shift) & 0xF) as usize;
                if window != 0 {
                    result = result + &table[window];
                }
            }
        }

        result
    }

    /// Scalar multiplication over the width-`window` NAF of the scalar.
    ///
    /// The table holds `2^(window - 2)` odd multiples of the point.
    fn scalar_mul_wnaf<S: ScalarBits + ?Sized>(
        &self,
        scalar: &S,
        window: u32,
    ) -> Result<Self, CurveError> {
        let digits = find_wnaf(&scalar.to_biguint(), window)?;

        // Odd multiples P, 3P, 5P, ... up to 2^(w-1) - 1
        let double = self.double();
        let mut odd_multiples = vec![self.clone()];
        for i in 1..(1usize << (window - 2)) {
            let next = odd_multiples[i - 1].clone() + &double;
            odd_multiples.push(next);
        }

        let mut result = Self::identity();
        for &digit in digits.iter().rev() {
            result = result.double();
            if digit > 0 {
                result = result + &odd_multiples[(digit as usize) / 2];
            } else if digit < 0 {
                result = result - odd_multiples[(-digit as usize) / 2].clone();
            }
        }

        Ok(result)
    }

    fn mul_u64(&self, n: u64) -> Self {
        if n == 0 {
            return Self::identity();
        }
        if n == 1 {
            return self.clone();
        }

        let mut result = Self::identity();
        let mut temp = self.clone();
        let mut bits = n;

        while bits > 0 {
            if bits & 1 == 1 {
                result += temp.clone();
            }
            temp = temp.double();
            bits >>= 1;
        }

        result
    }

    fn mul_bigint(&self, n: &BigUint) -> Self {
        self.scalar_mul_windowed(n)
    }

    fn is_in_prime_order_subgroup(&self) -> bool {
        self.is_well_formed() && self.mul_bigint(Self::order()).is_identity()
    }

    fn multi_scalar_mul<S: ScalarBits>(points: &[Self], scalars: &[S]) -> Self {
        assert_eq!(
            points.len(),
            scalars.len(),
            "Points and scalars must have same length"
        );

        crate::msm::bucket_msm(points, scalars)
    }
}

//! Signed-digit recodings of scalars.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::errors::FieldError;

/// Width-`window` non-adjacent form, least significant digit first.
///
/// Every non-zero digit is odd with absolute value below `2^(window - 1)`,
/// and any two non-zero digits are at least `window` positions apart.
/// Widths outside `2..=32` are rejected with [`FieldError::InvalidWindow`].
pub fn find_wnaf(scalar: &BigUint, window: u32) -> Result<Vec<i64>, FieldError> {
    if !(2..=32).contains(&window) {
        return Err(FieldError::InvalidWindow(window));
    }
    Ok(wnaf_digits(scalar, window))
}

/// Plain non-adjacent form, least significant digit first.
pub fn find_naf(scalar: &BigUint) -> Vec<i8> {
    wnaf_digits(scalar, 2).into_iter().map(|d| d as i8).collect()
}

fn wnaf_digits(scalar: &BigUint, window: u32) -> Vec<i64> {
    let modulus = 1u64 << window;
    let half = (modulus >> 1) as i64;
    let mut k = scalar.clone();
    let mut digits = Vec::with_capacity(k.bits() as usize + 1);

    while !k.is_zero() {
        let digit = if k.bit(0) {
            let low = k.iter_u64_digits().next().unwrap_or(0) & (modulus - 1);
            let d = low as i64;
            if d >= half {
                d - modulus as i64
            } else {
                d
            }
        } else {
            0
        };

        if digit < 0 {
            k += (-digit) as u64;
        } else {
            k -= digit as u64;
        }
        digits.push(digit);
        k >>= 1u32;
    }

    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use proptest::prelude::*;

    fn evaluate(digits: &[i64]) -> BigInt {
        digits
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, &d| acc * 2 + BigInt::from(d))
    }

    #[test]
    fn test_naf_of_small_values() {
        assert!(find_naf(&BigUint::zero()).is_empty());
        assert_eq!(find_naf(&BigUint::from(7u32)), vec![-1, 0, 0, 1]);
        assert_eq!(find_naf(&BigUint::from(12u32)), vec![0, 0, -1, 0, 1]);
    }

    #[test]
    fn test_wnaf_rejects_window_out_of_range() {
        let scalar = BigUint::from(12345u32);
        assert_eq!(find_wnaf(&scalar, 0), Err(FieldError::InvalidWindow(0)));
        assert_eq!(find_wnaf(&scalar, 1), Err(FieldError::InvalidWindow(1)));
        assert_eq!(find_wnaf(&scalar, 33), Err(FieldError::InvalidWindow(33)));
        assert!(find_wnaf(&scalar, 32).is_ok());
    }

    proptest! {
        #[test]
        fn prop_wnaf_reconstructs_scalar(value in any::<u128>(), window in 2u32..7) {
            let scalar = BigUint::from(value);
            let digits = find_wnaf(&scalar, window).unwrap();
            prop_assert_eq!(evaluate(&digits), BigInt::from(value));

            let bound = 1i64 << (window - 1);
            for (i, &d) in digits.iter().enumerate() {
                if d != 0 {
                    prop_assert!(d % 2 != 0 && d.abs() < bound);
                    let next = (i + 1)..(i + window as usize).min(digits.len());
                    prop_assert!(digits[next].iter().all(|&e| e == 0));
                }
            }
        }
    }
}

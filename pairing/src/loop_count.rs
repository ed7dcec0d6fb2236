use field::biguint_from_literal;
use field::naf::find_naf;
use num_bigint::BigUint;

/// Signed digits walked by both G2 precomputation and the Miller loop.
///
/// Digits run from the most significant position down, with the leading 1
/// dropped since the walk starts from `Q` itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoopCount {
    digits: Vec<i8>,
    negative: bool,
}

impl LoopCount {
    /// Plain binary expansion of `|value|`.
    pub fn binary(value: &BigUint, negative: bool) -> Self {
        let digits = (0..value.bits().saturating_sub(1))
            .rev()
            .map(|i| value.bit(i) as i8)
            .collect();
        Self::with_digits(digits, negative)
    }

    /// Non-adjacent form of `|value|`.
    pub fn naf(value: &BigUint, negative: bool) -> Self {
        let mut digits = find_naf(value);
        // The top NAF digit of a positive integer is always 1
        digits.pop();
        digits.reverse();
        Self::with_digits(digits, negative)
    }

    /// Parses a hard-coded literal and expands it in binary.
    pub fn binary_from_literal(literal: &str, negative: bool) -> Self {
        Self::binary(&biguint_from_literal(literal), negative)
    }

    fn with_digits(digits: Vec<i8>, negative: bool) -> Self {
        tracing::debug!(
            steps = digits.len(),
            additions = digits.iter().filter(|&&d| d != 0).count(),
            negative,
            "built miller loop count"
        );
        Self { digits, negative }
    }

    pub fn digits(&self) -> &[i8] {
        &self.digits
    }

    /// Whether the loop parameter is negative, which inverts the Miller output.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Number of addition steps taken by the walk.
    pub fn addition_count(&self) -> usize {
        self.digits.iter().filter(|&&d| d != 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    // Re-attaches the dropped leading 1 and evaluates the digits.
    fn evaluate(count: &LoopCount) -> BigInt {
        count
            .digits()
            .iter()
            .fold(BigInt::from(1), |acc, &d| acc * 2 + BigInt::from(d))
    }

    #[test]
    fn test_binary_digits() {
        let count = LoopCount::binary(&BigUint::from(0b1011u32), false);
        assert_eq!(count.digits(), &[0, 1, 1]);
        assert_eq!(count.addition_count(), 2);
        assert!(!count.is_negative());
    }

    #[test]
    fn test_naf_digits_reconstruct_value() {
        let ate = BigUint::from(29793968203157093288u128);
        let count = LoopCount::naf(&ate, false);
        assert_eq!(evaluate(&count), BigInt::from(ate));
        assert!(count
            .digits()
            .windows(2)
            .all(|pair| pair[0] == 0 || pair[1] == 0));
    }

    #[test]
    fn test_binary_from_literal_keeps_sign() {
        let count = LoopCount::binary_from_literal("0xd201000000010000", true);
        assert!(count.is_negative());
        assert_eq!(count.digits().len(), 63);
        assert_eq!(evaluate(&count), BigInt::from(0xd201000000010000u64));
    }

    #[test]
    fn test_one_has_no_steps() {
        let count = LoopCount::binary(&BigUint::from(1u32), false);
        assert!(count.digits().is_empty());
    }
}

//! Fixed-size matrices over a field with elementwise arithmetic.

use core::array;
use core::ops::{Add, Mul};

use crate::errors::FieldError;
use crate::traits::Field;

/// An `N x M` matrix of field elements, stored row by row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix<F: Field, const N: usize, const M: usize> {
    entries: [[F; M]; N],
}

impl<F: Field, const N: usize, const M: usize> Matrix<F, N, M> {
    const NON_EMPTY: () = assert!(N != 0 && M != 0, "matrix dimensions must be positive");

    pub fn from_rows(entries: [[F; M]; N]) -> Self {
        let () = Self::NON_EMPTY;
        Self { entries }
    }

    /// Builds the matrix whose `(i, j)` entry is `f(i, j)`.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> F) -> Self {
        Self::from_rows(array::from_fn(|i| array::from_fn(|j| f(i, j))))
    }

    pub fn zero() -> Self {
        Self::from_fn(|_, _| F::zero())
    }

    pub fn row_count(&self) -> usize {
        N
    }

    pub fn column_count(&self) -> usize {
        M
    }

    pub fn row(&self, i: usize) -> Result<[F; M], FieldError> {
        check_index(i, N)?;
        Ok(self.entries[i].clone())
    }

    pub fn column(&self, j: usize) -> Result<[F; N], FieldError> {
        check_index(j, M)?;
        Ok(array::from_fn(|i| self.entries[i][j].clone()))
    }

    pub fn get(&self, i: usize, j: usize) -> Result<&F, FieldError> {
        check_index(i, N)?;
        check_index(j, M)?;
        Ok(&self.entries[i][j])
    }

    pub fn set(&mut self, i: usize, j: usize, value: F) -> Result<(), FieldError> {
        check_index(i, N)?;
        check_index(j, M)?;
        self.entries[i][j] = value;
        Ok(())
    }

    pub fn transpose(&self) -> Matrix<F, M, N> {
        Matrix::from_fn(|i, j| self.entries[j][i].clone())
    }

    /// Applies `f` to every entry.
    pub fn map(&self, mut f: impl FnMut(&F) -> F) -> Self {
        Self::from_fn(|i, j| f(&self.entries[i][j]))
    }

    /// Combines matching entries of `self` and `other` with `f`.
    pub fn zip_with(&self, other: &Self, mut f: impl FnMut(&F, &F) -> F) -> Self {
        Self::from_fn(|i, j| f(&self.entries[i][j], &other.entries[i][j]))
    }

    /// Adds `a` to every entry.
    pub fn add_scalar(&self, a: &F) -> Self {
        self.map(|x| x.clone() + a)
    }

    /// Multiplies every entry by `a`.
    pub fn scale(&self, a: &F) -> Self {
        self.map(|x| x.clone() * a)
    }

    /// Entrywise product.
    pub fn hadamard(&self, other: &Self) -> Self {
        self.zip_with(other, |x, y| x.clone() * y)
    }

    /// Entrywise quotient, failing if any entry of `other` is zero.
    pub fn div_elementwise(&self, other: &Self) -> Result<Self, FieldError> {
        let inverses = other.try_map(F::inverse)?;
        Ok(self.hadamard(&inverses))
    }

    /// `a / x` for every entry `x`, failing on a zero entry.
    pub fn scalar_div(&self, a: &F) -> Result<Self, FieldError> {
        Ok(self.try_map(F::inverse)?.scale(a))
    }

    fn try_map(&self, f: impl Fn(&F) -> Result<F, FieldError>) -> Result<Self, FieldError> {
        let mut result = Self::zero();
        for (dst, src) in result.entries.iter_mut().zip(&self.entries) {
            for (d, s) in dst.iter_mut().zip(src) {
                *d = f(s)?;
            }
        }
        Ok(result)
    }
}

fn check_index(index: usize, bound: usize) -> Result<(), FieldError> {
    if index < bound {
        Ok(())
    } else {
        Err(FieldError::IndexOutOfRange { index, bound })
    }
}

impl<'a, F: Field, const N: usize, const M: usize> Add<&'a Matrix<F, N, M>>
    for &'a Matrix<F, N, M>
{
    type Output = Matrix<F, N, M>;

    fn add(self, other: Self) -> Matrix<F, N, M> {
        self.zip_with(other, |x, y| x.clone() + y)
    }
}

impl<F: Field, const N: usize, const M: usize> Add for Matrix<F, N, M> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        &self + &other
    }
}

/// Entrywise product.
impl<'a, F: Field, const N: usize, const M: usize> Mul<&'a Matrix<F, N, M>>
    for &'a Matrix<F, N, M>
{
    type Output = Matrix<F, N, M>;

    fn mul(self, other: Self) -> Matrix<F, N, M> {
        self.hadamard(other)
    }
}

impl<F: Field, const N: usize, const M: usize> Mul for Matrix<F, N, M> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.hadamard(&other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bn254::Fr;

    fn sample() -> Matrix<Fr, 2, 3> {
        Matrix::from_fn(|i, j| Fr::from((3 * i + j + 1) as u64))
    }

    #[test]
    fn test_rows_and_columns() {
        let m = sample();
        assert_eq!(m.row_count(), 2);
        assert_eq!(m.column_count(), 3);
        assert_eq!(m.row(1).unwrap(), [Fr::from(4u64), Fr::from(5u64), Fr::from(6u64)]);
        assert_eq!(m.column(2).unwrap(), [Fr::from(3u64), Fr::from(6u64)]);
        assert_eq!(m.get(0, 1), Ok(&Fr::from(2u64)));
        assert_eq!(m.transpose().row(2).unwrap(), m.column(2).unwrap());
    }

    #[test]
    fn test_out_of_range_indices_are_errors() {
        let mut m = sample();
        assert_eq!(m.row(2), Err(FieldError::IndexOutOfRange { index: 2, bound: 2 }));
        assert_eq!(m.column(3), Err(FieldError::IndexOutOfRange { index: 3, bound: 3 }));
        assert_eq!(m.get(0, 5), Err(FieldError::IndexOutOfRange { index: 5, bound: 3 }));
        assert_eq!(
            m.set(7, 0, Fr::one()),
            Err(FieldError::IndexOutOfRange { index: 7, bound: 2 })
        );
        assert_eq!(m, sample());
    }

    #[test]
    fn test_set_then_get() {
        let mut m = Matrix::<Fr, 3, 3>::zero();
        m.set(2, 1, Fr::from(9u64)).unwrap();
        assert_eq!(m.get(2, 1), Ok(&Fr::from(9u64)));
        assert_eq!(m.get(1, 2), Ok(&Fr::zero()));
    }

    #[test]
    fn test_elementwise_arithmetic() {
        let m = sample();
        let two = Fr::from(2u64);

        assert_eq!(&m + &m, m.scale(&two));
        assert_eq!(m.add_scalar(&Fr::one()).get(1, 2), Ok(&Fr::from(7u64)));
        assert_eq!((&m * &m).get(1, 1), Ok(&Fr::from(25u64)));
        assert_eq!(m.div_elementwise(&m).unwrap(), Matrix::from_fn(|_, _| Fr::one()));

        let inverses = m.scalar_div(&Fr::one()).unwrap();
        assert_eq!(inverses.hadamard(&m), Matrix::from_fn(|_, _| Fr::one()));
    }

    #[test]
    fn test_division_by_zero_entry_fails() {
        let m = sample();
        let mut divisor = sample();
        divisor.set(0, 2, Fr::zero()).unwrap();
        assert_eq!(m.div_elementwise(&divisor), Err(FieldError::ZeroInverse));
        assert_eq!(divisor.scalar_div(&Fr::one()), Err(FieldError::ZeroInverse));
    }
}

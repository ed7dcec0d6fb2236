use core::marker::PhantomData;

use crate::cubic::{CubicExtConfig, CubicExtField, CubicParams};
use crate::towers::fp2::{Fp2, Fp2Config};
use crate::traits::{ConfigBounds, Field};

/// `Fp6 = Fp2[v] / (v^3 - ξ)`.
pub trait Fp6Config: ConfigBounds {
    type Fp2Config: Fp2Config;

    fn params() -> &'static CubicParams<Fp2<Self::Fp2Config>, Fp2<Self::Fp2Config>>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fp6ConfigWrapper<P: Fp6Config>(PhantomData<P>);

impl<P: Fp6Config> CubicExtConfig for Fp6ConfigWrapper<P> {
    type BaseField = Fp2<P::Fp2Config>;
    type FrobCoeff = Fp2<P::Fp2Config>;

    #[inline]
    fn nonresidue() -> &'static Self::BaseField {
        &P::params().nonresidue
    }

    fn mul_base_field_by_frob_coeff(
        c1: &mut Self::BaseField,
        c2: &mut Self::BaseField,
        power: usize,
    ) {
        let params = P::params();
        *c1 *= &params.frobenius_c1[power % 6];
        *c2 *= &params.frobenius_c2[power % 6];
    }
}

pub type Fp6<P> = CubicExtField<Fp6ConfigWrapper<P>>;

// Sparse products used by the line evaluations of the sextic-twist pairings.
impl<P: Fp6Config> Fp6<P> {
    /// Multiplies by `b0 + b2 v^2`.
    pub fn mul_by_02(&self, b0: &Fp2<P::Fp2Config>, b2: &Fp2<P::Fp2Config>) -> Self {
        let nr = Fp6ConfigWrapper::<P>::mul_base_field_by_nonresidue;
        let (a0, a1, a2) = (&self.c0, &self.c1, &self.c2);
        Self::new(
            a0.clone() * b0 + &nr(&(a1.clone() * b2)),
            a1.clone() * b0 + &nr(&(a2.clone() * b2)),
            a0.clone() * b2 + &(a2.clone() * b0),
        )
    }

    /// Multiplies by `b1 v`.
    pub fn mul_by_1(&self, b1: &Fp2<P::Fp2Config>) -> Self {
        let nr = Fp6ConfigWrapper::<P>::mul_base_field_by_nonresidue;
        Self::new(
            nr(&(self.c2.clone() * b1)),
            self.c0.clone() * b1,
            self.c1.clone() * b1,
        )
    }

    /// Multiplies by `b1 v + b2 v^2`.
    pub fn mul_by_12(&self, b1: &Fp2<P::Fp2Config>, b2: &Fp2<P::Fp2Config>) -> Self {
        let nr = Fp6ConfigWrapper::<P>::mul_base_field_by_nonresidue;
        let (a0, a1, a2) = (&self.c0, &self.c1, &self.c2);
        let a2b2 = a2.clone() * b2;
        Self::new(
            nr(&(a1.clone() * b2 + &(a2.clone() * b1))),
            a0.clone() * b1 + &nr(&a2b2),
            a0.clone() * b2 + &(a1.clone() * b1),
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::bn254::{Fq2, Fq6};
    use crate::{Field, RandomField};

    #[test]
    fn test_sparse_products_match_full_multiplication() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = Fq6::random(&mut rng);
        let b0 = Fq2::random(&mut rng);
        let b1 = Fq2::random(&mut rng);
        let b2 = Fq2::random(&mut rng);
        let zero = Fq2::zero();

        let full = a.clone() * Fq6::new(b0.clone(), zero.clone(), b2.clone());
        assert_eq!(a.mul_by_02(&b0, &b2), full);

        let full = a.clone() * Fq6::new(zero.clone(), b1.clone(), zero.clone());
        assert_eq!(a.mul_by_1(&b1), full);

        let full = a.clone() * Fq6::new(zero, b1.clone(), b2.clone());
        assert_eq!(a.mul_by_12(&b1, &b2), full);
    }
}

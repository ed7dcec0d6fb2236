use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::cubic::{CubicExtConfig, CubicExtField};
use crate::fp::{Fp, FpConfig};
use crate::quadratic::{QuadExtConfig, QuadExtField};

/// Helper trait for sampling random field elements.
pub trait RandomField: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl<P: FpConfig> RandomField for Fp<P> {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }
}

impl<P: QuadExtConfig> RandomField for QuadExtField<P> {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }
}

impl<P: CubicExtConfig> RandomField for CubicExtField<P> {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }
}

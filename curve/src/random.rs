use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::edwards::{EdwardsAffine, EdwardsProjective};
use crate::models::{SWCurveConfig, TECurveConfig};
use crate::{Affine, Group, Projective};

impl<P: SWCurveConfig> Distribution<Projective<P>> for StandardUniform {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Projective<P> {
        Projective::random(rng)
    }
}

impl<P: SWCurveConfig> Distribution<Affine<P>> for StandardUniform {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Affine<P> {
        Projective::<P>::random(rng).to_affine()
    }
}

impl<P: TECurveConfig> Distribution<EdwardsProjective<P>> for StandardUniform {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> EdwardsProjective<P> {
        EdwardsProjective::random(rng)
    }
}

impl<P: TECurveConfig> Distribution<EdwardsAffine<P>> for StandardUniform {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> EdwardsAffine<P> {
        EdwardsProjective::<P>::random(rng).to_affine()
    }
}

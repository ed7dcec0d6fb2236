use core::marker::PhantomData;

use crate::fp::{Fp, FpConfig};
use crate::quadratic::{QuadExtConfig, QuadExtField, QuadParams};
use crate::traits::ConfigBounds;

/// `Fp2 = Fp[u] / (u^2 - β)`.
pub trait Fp2Config: ConfigBounds {
    type Fp: FpConfig;

    fn params() -> &'static QuadParams<Fp<Self::Fp>, Fp<Self::Fp>>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fp2ConfigWrapper<P: Fp2Config>(PhantomData<P>);

impl<P: Fp2Config> QuadExtConfig for Fp2ConfigWrapper<P> {
    type BaseField = Fp<P::Fp>;
    type FrobCoeff = Fp<P::Fp>;

    #[inline]
    fn nonresidue() -> &'static Self::BaseField {
        &P::params().nonresidue
    }

    fn mul_base_field_by_frob_coeff(fe: &mut Self::BaseField, power: usize) {
        *fe *= &P::params().frobenius_c1[power % 2];
    }
}

pub type Fp2<P> = QuadExtField<Fp2ConfigWrapper<P>>;

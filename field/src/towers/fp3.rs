use core::marker::PhantomData;

use crate::cubic::{CubicExtConfig, CubicExtField, CubicParams};
use crate::fp::{Fp, FpConfig};
use crate::traits::ConfigBounds;

/// `Fp3 = Fp[v] / (v^3 - β)`.
pub trait Fp3Config: ConfigBounds {
    type Fp: FpConfig;

    fn params() -> &'static CubicParams<Fp<Self::Fp>, Fp<Self::Fp>>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fp3ConfigWrapper<P: Fp3Config>(PhantomData<P>);

impl<P: Fp3Config> CubicExtConfig for Fp3ConfigWrapper<P> {
    type BaseField = Fp<P::Fp>;
    type FrobCoeff = Fp<P::Fp>;

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
        *c1 *= &params.frobenius_c1[power % 3];
        *c2 *= &params.frobenius_c2[power % 3];
    }
}

pub type Fp3<P> = CubicExtField<Fp3ConfigWrapper<P>>;

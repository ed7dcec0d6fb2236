use core::marker::PhantomData;

use crate::fp::Fp;
use crate::quadratic::{QuadExtConfig, QuadExtField, QuadParams};
use crate::towers::fp3::{Fp3, Fp3Config};
use crate::traits::{ConfigBounds, Field};

type BaseFp<P> = Fp<<<P as Fp6_2over3Config>::Fp3Config as Fp3Config>::Fp>;

/// `Fp6 = Fp3[w] / (w^2 - v)`, where `v` generates Fp3.
#[allow(non_camel_case_types)]
pub trait Fp6_2over3Config: ConfigBounds {
    type Fp3Config: Fp3Config;

    fn params() -> &'static QuadParams<Fp3<Self::Fp3Config>, BaseFp<Self>>;
}

#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fp6_2over3ConfigWrapper<P: Fp6_2over3Config>(PhantomData<P>);

impl<P: Fp6_2over3Config> QuadExtConfig for Fp6_2over3ConfigWrapper<P> {
    type BaseField = Fp3<P::Fp3Config>;
    type FrobCoeff = BaseFp<P>;

    #[inline]
    fn nonresidue() -> &'static Self::BaseField {
        &P::params().nonresidue
    }

    #[inline]
    fn mul_base_field_by_nonresidue(fe: &Self::BaseField) -> Self::BaseField {
        fe.mul_by_root()
    }

    fn mul_base_field_by_frob_coeff(fe: &mut Self::BaseField, power: usize) {
        *fe = fe.mul_by_base_prime_field(&P::params().frobenius_c1[power % 6]);
    }
}

#[allow(non_camel_case_types)]
pub type Fp6_2over3<P> = QuadExtField<Fp6_2over3ConfigWrapper<P>>;

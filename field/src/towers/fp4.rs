use core::marker::PhantomData;

use crate::fp::Fp;
use crate::quadratic::{QuadExtConfig, QuadExtField, QuadParams};
use crate::towers::fp2::{Fp2, Fp2Config};
use crate::traits::{ConfigBounds, Field};

type BaseFp<P> = Fp<<<P as Fp4Config>::Fp2Config as Fp2Config>::Fp>;

/// `Fp4 = Fp2[v] / (v^2 - u)`, where `u` generates Fp2.
pub trait Fp4Config: ConfigBounds {
    type Fp2Config: Fp2Config;

    fn params() -> &'static QuadParams<Fp2<Self::Fp2Config>, BaseFp<Self>>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fp4ConfigWrapper<P: Fp4Config>(PhantomData<P>);

impl<P: Fp4Config> QuadExtConfig for Fp4ConfigWrapper<P> {
    type BaseField = Fp2<P::Fp2Config>;
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
        *fe = fe.mul_by_base_prime_field(&P::params().frobenius_c1[power % 4]);
    }
}

pub type Fp4<P> = QuadExtField<Fp4ConfigWrapper<P>>;

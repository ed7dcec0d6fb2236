//! Curve models and their parameter records.
//!
//! A curve is fixed by a zero-sized config type whose `params()` returns a
//! `'static` record built once from literals.

use field::{biguint_from_literal, ConfigBounds, Field, PrimeField};
use num_bigint::BigUint;

use crate::group::ScalarBits;

/// Coefficients, generator and cofactor of `y^2 = x^3 + a x + b`.
#[derive(Debug)]
pub struct SWCurveParams<F> {
    name: &'static str,
    a: F,
    b: F,
    generator: (F, F),
    cofactor: BigUint,
}

impl<F: Field> SWCurveParams<F> {
    pub fn new(name: &'static str, a: F, b: F, generator: (F, F), cofactor: &str) -> Self {
        let cofactor = biguint_from_literal(cofactor);
        tracing::debug!(
            curve = name,
            cofactor_bits = cofactor.bits(),
            a_is_zero = a.is_zero(),
            "initialized short Weierstrass curve parameters"
        );
        Self {
            name,
            a,
            b,
            generator,
            cofactor,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn a(&self) -> &F {
        &self.a
    }

    pub fn b(&self) -> &F {
        &self.b
    }

    pub fn generator(&self) -> &(F, F) {
        &self.generator
    }

    pub fn cofactor(&self) -> &BigUint {
        &self.cofactor
    }
}

pub trait SWCurveConfig: ConfigBounds {
    type BaseField: Field;
    type ScalarField: PrimeField + ScalarBits;

    fn params() -> &'static SWCurveParams<Self::BaseField>;

    /// `a * elem`, skipping the product on `a = 0` curves.
    #[inline]
    fn mul_by_a(elem: &Self::BaseField) -> Self::BaseField {
        let a = Self::params().a();
        if a.is_zero() {
            Self::BaseField::zero()
        } else {
            a.clone() * elem
        }
    }
}

/// Coefficients, generator and cofactor of `a x^2 + y^2 = 1 + d x^2 y^2`.
#[derive(Debug)]
pub struct TECurveParams<F> {
    name: &'static str,
    a: F,
    d: F,
    generator: (F, F),
    cofactor: BigUint,
}

impl<F: Field> TECurveParams<F> {
    pub fn new(name: &'static str, a: F, d: F, generator: (F, F), cofactor: &str) -> Self {
        let cofactor = biguint_from_literal(cofactor);
        tracing::debug!(
            curve = name,
            cofactor_bits = cofactor.bits(),
            "initialized twisted Edwards curve parameters"
        );
        Self {
            name,
            a,
            d,
            generator,
            cofactor,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn a(&self) -> &F {
        &self.a
    }

    pub fn d(&self) -> &F {
        &self.d
    }

    pub fn generator(&self) -> &(F, F) {
        &self.generator
    }

    pub fn cofactor(&self) -> &BigUint {
        &self.cofactor
    }
}

pub trait TECurveConfig: ConfigBounds {
    type BaseField: Field;
    type ScalarField: PrimeField + ScalarBits;

    fn params() -> &'static TECurveParams<Self::BaseField>;

    #[inline]
    fn mul_by_a(elem: &Self::BaseField) -> Self::BaseField {
        let a = Self::params().a();
        if a.is_one() {
            elem.clone()
        } else {
            a.clone() * elem
        }
    }
}

//! Optimal ate pairing on BLS12 curves, looping over the curve parameter `x`.

use core::marker::PhantomData;
use curve::Affine;
use field::{biguint_from_literal, Field, Fp12, Fp2};
use num_bigint::BigUint;

use crate::engine::PairingConfig;
use crate::errors::PairingError;
use crate::loop_count::LoopCount;
use crate::sextic::{self, EllCoeff, G2HomProjective, SexticTwistConfig};

#[derive(Debug)]
pub struct Bls12Params {
    name: &'static str,
    x: BigUint,
    x_is_negative: bool,
    loop_count: LoopCount,
}

impl Bls12Params {
    pub fn new(name: &'static str, x: &str, x_is_negative: bool) -> Self {
        let x = biguint_from_literal(x);
        tracing::debug!(
            curve = name,
            x_bits = x.bits(),
            x_is_negative,
            "initialized BLS12 pairing parameters"
        );
        Self {
            name,
            loop_count: LoopCount::binary(&x, x_is_negative),
            x,
            x_is_negative,
        }
    }

    pub fn x(&self) -> &BigUint {
        &self.x
    }

    pub fn x_is_negative(&self) -> bool {
        self.x_is_negative
    }
}

pub trait Bls12Config: SexticTwistConfig {
    fn params() -> &'static Bls12Params;
}

/// The BLS12 family as a pairing policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bls12<P: Bls12Config>(PhantomData<P>);

impl<P: Bls12Config> Bls12<P> {
    /// `f^x` for `f` in the cyclotomic subgroup.
    fn exp_by_x(f: &Fp12<P::Fp12Config>) -> Fp12<P::Fp12Config> {
        let params = P::params();
        let result = f.cyclotomic_exp(&params.x);
        if params.x_is_negative {
            result.unitary_inverse()
        } else {
            result
        }
    }
}

impl<P: Bls12Config> PairingConfig for Bls12<P> {
    type G1Affine = Affine<P::G1Config>;
    type G2Affine = Affine<P::G2Config>;
    type G1Prepared = Affine<P::G1Config>;
    type G2Base = (Fp2<P::Fp2Config>, Fp2<P::Fp2Config>);
    type G2Accumulator = G2HomProjective<P>;
    type LineCoeffs = EllCoeff<Fp2<P::Fp2Config>>;
    type TargetField = Fp12<P::Fp12Config>;

    fn name() -> &'static str {
        P::params().name
    }

    fn loop_count() -> &'static LoopCount {
        &P::params().loop_count
    }

    fn prepare_g1(p: &Self::G1Affine) -> Result<Self::G1Prepared, PairingError> {
        sextic::check_g1::<P>(p)
    }

    fn g2_start(q: &Self::G2Affine) -> Result<(Self::G2Base, Self::G2Accumulator), PairingError> {
        sextic::g2_start::<P>(q)
    }

    fn doubling_step(r: &mut Self::G2Accumulator) -> Result<Self::LineCoeffs, PairingError> {
        Ok(sextic::doubling_step(r))
    }

    fn addition_step(
        r: &mut Self::G2Accumulator,
        (x, y): &Self::G2Base,
        negate: bool,
    ) -> Result<Self::LineCoeffs, PairingError> {
        if negate {
            Ok(sextic::addition_step(r, x, &-y.clone()))
        } else {
            Ok(sextic::addition_step(r, x, y))
        }
    }

    fn ell(
        f: &mut Self::TargetField,
        coeffs: &Self::LineCoeffs,
        p: &Self::G1Prepared,
        _q: &Self::G2Base,
    ) {
        sextic::ell::<P>(f, coeffs, p)
    }

    /// `r` divides `p^6 + 1`, so conjugation agrees with inversion after the
    /// final exponentiation.
    fn invert_miller_output(f: &Self::TargetField) -> Result<Self::TargetField, PairingError> {
        Ok(f.conjugate())
    }

    /// Hard part following Hayashida, Hayasaka and Teruya, "Efficient Final
    /// Exponentiation via Cyclotomic Structure for Pairings over Families of
    /// Elliptic Curves".
    fn final_exponentiation(f: &Self::TargetField) -> Result<Self::TargetField, PairingError> {
        let r = sextic::final_exponentiation_easy_part::<P>(f)?;

        let y0 = r.cyclotomic_square();
        let y1 = y0.unitary_inverse();
        let y2 = Self::exp_by_x(&r);
        let y3 = y2.cyclotomic_square();
        let y4 = y1 * &y2;
        let y5 = Self::exp_by_x(&y4);
        let y6 = Self::exp_by_x(&y5);
        let y7 = Self::exp_by_x(&y6);
        let y8 = y7 * &y3;
        let y9 = Self::exp_by_x(&y8);
        let y10 = y4.unitary_inverse() * &y9;
        let y11 = r.clone() * &y10;
        let y12 = (y5 * &r).frobenius_map(3);
        let y13 = (y8 * &r.unitary_inverse()).frobenius_map(1);
        let y14 = (y2 * &y6).frobenius_map(2);

        Ok(y14 * &y12 * &y13 * &y11)
    }
}

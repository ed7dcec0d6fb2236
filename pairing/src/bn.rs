//! Optimal ate pairing on Barreto–Naehrig curves.
//!
//! The loop runs over the NAF of `6u + 2` and closes with the two lines through
//! `π(Q)` and `-π²(Q)`, where `π` is the Frobenius endomorphism carried to the
//! twist.

use core::marker::PhantomData;
use curve::Affine;
use field::{biguint_from_literal, Field, Fp12, Fp2};
use num_bigint::BigUint;

use crate::engine::PairingConfig;
use crate::errors::PairingError;
use crate::loop_count::LoopCount;
use crate::sextic::{self, EllCoeff, G2HomProjective, SexticTwistConfig};

/// Curve parameter `u`, the ate loop count and the Frobenius twist constants.
#[derive(Debug)]
pub struct BnParams<F> {
    name: &'static str,
    u: BigUint,
    u_is_negative: bool,
    loop_count: LoopCount,
    // ξ^((p - 1) / 3) and ξ^((p - 1) / 2)
    twist_mul_by_q_x: F,
    twist_mul_by_q_y: F,
}

impl<F: Field> BnParams<F> {
    pub fn new(name: &'static str, u: &str, u_is_negative: bool, twist: &F) -> Self {
        let u = biguint_from_literal(u);
        let ate = &u * 6u32 + 2u32;
        let p = F::characteristic();
        let twist_mul_by_q_x = twist.pow(&((p - 1u32) / 3u32));
        let twist_mul_by_q_y = twist.pow(&((p - 1u32) / 2u32));

        tracing::debug!(
            curve = name,
            u_bits = u.bits(),
            ate_bits = ate.bits(),
            "initialized BN pairing parameters"
        );

        Self {
            name,
            loop_count: LoopCount::naf(&ate, u_is_negative),
            u,
            u_is_negative,
            twist_mul_by_q_x,
            twist_mul_by_q_y,
        }
    }

    pub fn u(&self) -> &BigUint {
        &self.u
    }

    pub fn u_is_negative(&self) -> bool {
        self.u_is_negative
    }
}

pub trait BnConfig: SexticTwistConfig {
    fn params() -> &'static BnParams<Fp2<Self::Fp2Config>>;
}

/// The BN family as a pairing policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bn<P: BnConfig>(PhantomData<P>);

impl<P: BnConfig> Bn<P> {
    /// Frobenius endomorphism on the twist.
    fn mul_by_char(
        x: &Fp2<P::Fp2Config>,
        y: &Fp2<P::Fp2Config>,
    ) -> (Fp2<P::Fp2Config>, Fp2<P::Fp2Config>) {
        let params = P::params();
        (
            x.frobenius_map(1) * &params.twist_mul_by_q_x,
            y.frobenius_map(1) * &params.twist_mul_by_q_y,
        )
    }

    /// `f^|u|` in the cyclotomic subgroup, inverted when `u` is positive.
    fn exp_by_neg_u(f: &Fp12<P::Fp12Config>) -> Fp12<P::Fp12Config> {
        let params = P::params();
        let result = f.cyclotomic_exp(&params.u);
        if params.u_is_negative {
            result
        } else {
            result.unitary_inverse()
        }
    }
}

impl<P: BnConfig> PairingConfig for Bn<P> {
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

    /// Lines through `π(Q)` and `-π²(Q)`.
    fn tail_steps(
        r: &mut Self::G2Accumulator,
        (x, y): &Self::G2Base,
    ) -> Result<Vec<Self::LineCoeffs>, PairingError> {
        let (q1_x, q1_y) = Self::mul_by_char(x, y);
        let (q2_x, q2_y) = Self::mul_by_char(&q1_x, &q1_y);

        Ok(vec![
            sextic::addition_step(r, &q1_x, &q1_y),
            sextic::addition_step(r, &q2_x, &-q2_y),
        ])
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

    /// Fuentes-Castañeda et al. addition chain for the hard part.
    fn final_exponentiation(f: &Self::TargetField) -> Result<Self::TargetField, PairingError> {
        let r = sextic::final_exponentiation_easy_part::<P>(f)?;

        let y0 = Self::exp_by_neg_u(&r);
        let y1 = y0.cyclotomic_square();
        let y2 = y1.cyclotomic_square();
        let y3 = y2 * &y1;
        let y4 = Self::exp_by_neg_u(&y3);
        let y5 = y4.cyclotomic_square();
        let y6 = Self::exp_by_neg_u(&y5);
        let y7 = y3.unitary_inverse();
        let y8 = y6.unitary_inverse() * &y4;
        let y9 = y8 * &y7;
        let y10 = y9.clone() * &y1;
        let y11 = y9.clone() * &y4 * &r;
        let y12 = y10.frobenius_map(1) * &y11;
        let y13 = y9.frobenius_map(2) * &y12;
        let y14 = (r.unitary_inverse() * &y10).frobenius_map(3);

        Ok(y14 * &y13)
    }
}

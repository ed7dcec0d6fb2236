//! Affine ate pairing on MNT curves.
//!
//! The G2 walk keeps `R` in affine coordinates over the NAF of the ate loop
//! count and pays one `Fqe` inversion per step for the slope. Each line is then
//! two `Fqe` coefficients, and its evaluation at `P` costs a single `Fqe`
//! multiplication.

use core::marker::PhantomData;
use curve::{Affine, SWCurveConfig};
use field::{Field, Fp, QuadExtField};

use crate::engine::PairingConfig;
use crate::errors::PairingError;
use crate::loop_count::LoopCount;
use crate::mnt::{Mnt, MntConfig};

/// `P` as `x` and `y u^2`, with `u` the twist element.
#[derive(Clone, Debug)]
pub struct MntAffineG1Prepared<P: MntConfig> {
    x: Fp<P::Fp>,
    y_twist_squared: P::Fqe,
}

#[derive(Clone, Debug)]
pub struct AffinePoint<F> {
    x: F,
    y: F,
}

/// Slope `gamma` of a line through `(x0, y0)` as `gamma u` and `gamma x0 - y0`.
#[derive(Clone, Debug)]
pub struct MntAffineLineCoeffs<F> {
    gamma_twist: F,
    gamma_x_minus_y: F,
}

/// The MNT family with affine G2 steps as a pairing policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MntAffine<P: MntConfig>(PhantomData<P>);

impl<P: MntConfig> MntAffine<P> {
    /// Moves `r` along the line of slope `gamma` through `r` and `(other_x, _)`.
    fn advance(r: &mut AffinePoint<P::Fqe>, gamma: &P::Fqe, other_x: &P::Fqe) {
        let x = gamma.square() - &r.x - other_x;
        r.y = gamma.clone() * &(r.x.clone() - &x) - &r.y;
        r.x = x;
    }
}

impl<P: MntConfig> PairingConfig for MntAffine<P> {
    type G1Affine = Affine<P::G1Config>;
    type G2Affine = Affine<P::G2Config>;
    type G1Prepared = MntAffineG1Prepared<P>;
    type G2Base = AffinePoint<P::Fqe>;
    type G2Accumulator = AffinePoint<P::Fqe>;
    type LineCoeffs = MntAffineLineCoeffs<P::Fqe>;
    type TargetField = QuadExtField<P::FqkConfig>;

    fn name() -> &'static str {
        Mnt::<P>::name()
    }

    fn loop_count() -> &'static LoopCount {
        P::params().naf_loop_count()
    }

    fn prepare_g1(p: &Self::G1Affine) -> Result<Self::G1Prepared, PairingError> {
        if p.is_identity() {
            return Err(PairingError::IdentityPoint);
        }
        if !p.is_on_curve() {
            return Err(PairingError::NotOnCurve);
        }
        Ok(MntAffineG1Prepared {
            x: p.x.clone(),
            y_twist_squared: P::twist().square().mul_by_base_prime_field(&p.y),
        })
    }

    fn g2_start(q: &Self::G2Affine) -> Result<(Self::G2Base, Self::G2Accumulator), PairingError> {
        if q.is_identity() {
            return Err(PairingError::IdentityPoint);
        }
        if !q.is_on_curve() {
            return Err(PairingError::NotOnCurve);
        }
        let base = AffinePoint {
            x: q.x.clone(),
            y: q.y.clone(),
        };
        Ok((base.clone(), base))
    }

    /// Tangent slope `(3 x^2 + a) / 2y`.
    fn doubling_step(r: &mut Self::G2Accumulator) -> Result<Self::LineCoeffs, PairingError> {
        let x_squared = r.x.square();
        let numerator = x_squared.double() + &x_squared + P::G2Config::params().a();
        let gamma = numerator * &r.y.double().inverse()?;

        let coeffs = MntAffineLineCoeffs {
            gamma_twist: gamma.clone() * &P::twist(),
            gamma_x_minus_y: gamma.clone() * &r.x - &r.y,
        };
        let x = r.x.clone();
        Self::advance(r, &gamma, &x);
        Ok(coeffs)
    }

    /// Chord slope `(y - y_Q) / (x - x_Q)`, with `y_Q` negated for a `-1` digit.
    fn addition_step(
        r: &mut Self::G2Accumulator,
        q: &Self::G2Base,
        negate: bool,
    ) -> Result<Self::LineCoeffs, PairingError> {
        let q_y = if negate { -q.y.clone() } else { q.y.clone() };
        let gamma = (r.y.clone() - &q_y) * &(r.x.clone() - &q.x).inverse()?;

        let coeffs = MntAffineLineCoeffs {
            gamma_twist: gamma.clone() * &P::twist(),
            gamma_x_minus_y: gamma.clone() * &q.x - &q_y,
        };
        Self::advance(r, &gamma, &q.x);
        Ok(coeffs)
    }

    fn ell(
        f: &mut Self::TargetField,
        coeffs: &Self::LineCoeffs,
        p: &Self::G1Prepared,
        _q: &Self::G2Base,
    ) {
        let line = QuadExtField::new(
            p.y_twist_squared.clone(),
            coeffs.gamma_x_minus_y.clone() - &coeffs.gamma_twist.mul_by_base_prime_field(&p.x),
        );
        *f *= &line;
    }

    fn invert_miller_output(f: &Self::TargetField) -> Result<Self::TargetField, PairingError> {
        Mnt::<P>::invert_miller_output(f)
    }

    fn final_exponentiation(f: &Self::TargetField) -> Result<Self::TargetField, PairingError> {
        Mnt::<P>::final_exponentiation(f)
    }
}

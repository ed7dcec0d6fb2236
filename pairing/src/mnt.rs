//! Ate pairing on MNT curves of embedding degree 4 and 6.
//!
//! G2 lives on a quadratic (MNT4) or cubic (MNT6) twist over `Fqe`, and the
//! target field is the quadratic extension `Fqk = Fqe[w]`. The G2 walk uses
//! extended Jacobian coordinates `(X, Y, Z, T = Z^2)` on the twist, and the
//! lines are evaluated at `P` mapped through the twist.

use core::marker::PhantomData;
use curve::{Affine, SWCurveConfig};
use field::{biguint_from_literal, ConfigBounds, Field, Fp, FpConfig, QuadExtConfig, QuadExtField};
use num_bigint::BigUint;

use crate::engine::PairingConfig;
use crate::errors::PairingError;
use crate::loop_count::LoopCount;

/// Ate loop count and the final exponent `w1 p + w0` of the hard part.
#[derive(Debug)]
pub struct MntParams {
    name: &'static str,
    loop_count: LoopCount,
    naf_loop_count: LoopCount,
    final_exponent_w0: BigUint,
    final_exponent_w0_is_negative: bool,
    final_exponent_w1: BigUint,
}

impl MntParams {
    pub fn new(
        name: &'static str,
        ate_loop_count: &str,
        ate_is_negative: bool,
        w0: &str,
        w0_is_negative: bool,
        w1: &str,
    ) -> Self {
        let ate = biguint_from_literal(ate_loop_count);
        let final_exponent_w0 = biguint_from_literal(w0);
        tracing::debug!(
            curve = name,
            w0_bits = final_exponent_w0.bits(),
            ate_is_negative,
            "initialized MNT pairing parameters"
        );
        Self {
            name,
            loop_count: LoopCount::binary(&ate, ate_is_negative),
            naf_loop_count: LoopCount::naf(&ate, ate_is_negative),
            final_exponent_w0,
            final_exponent_w0_is_negative: w0_is_negative,
            final_exponent_w1: biguint_from_literal(w1),
        }
    }
}

impl MntParams {
    /// Non-adjacent form of the ate loop count, walked by the affine variant.
    pub fn naf_loop_count(&self) -> &LoopCount {
        &self.naf_loop_count
    }
}

pub trait MntConfig: ConfigBounds {
    type Fp: FpConfig;
    /// Field the twist is defined over, Fq2 or Fq3.
    type Fqe: Field<BasePrimeField = Fp<Self::Fp>>;
    type FqkConfig: QuadExtConfig<BaseField = Self::Fqe>;
    type G1Config: SWCurveConfig<BaseField = Fp<Self::Fp>>;
    type G2Config: SWCurveConfig<BaseField = Self::Fqe>;

    fn params() -> &'static MntParams;

    /// The generator of `Fqe` over Fq used to build the twist.
    fn twist() -> Self::Fqe;
}

#[derive(Clone, Debug)]
pub struct MntG1Prepared<P: MntConfig> {
    x: Fp<P::Fp>,
    x_twist: P::Fqe,
    y_twist: P::Fqe,
}

#[derive(Clone, Debug)]
pub struct MntG2Base<P: MntConfig> {
    x: P::Fqe,
    y: P::Fqe,
    y_squared: P::Fqe,
    x_over_twist: P::Fqe,
    y_over_twist: P::Fqe,
}

/// Running point in extended Jacobian coordinates.
#[derive(Clone, Debug)]
pub struct ExtendedJacobian<F> {
    x: F,
    y: F,
    z: F,
    t: F,
}

#[derive(Clone, Debug)]
pub enum MntLineCoeffs<F> {
    Doubling { c_h: F, c_4c: F, c_j: F, c_l: F },
    Addition { c_l1: F, c_rz: F },
}

/// The MNT family as a pairing policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Mnt<P: MntConfig>(PhantomData<P>);

impl<P: MntConfig> Mnt<P> {
    /// Adds the affine point `(x, y)` with `y_squared = y^2` to `r`.
    fn mixed_addition(
        r: &mut ExtendedJacobian<P::Fqe>,
        x: &P::Fqe,
        y: &P::Fqe,
        y_squared: &P::Fqe,
    ) -> MntLineCoeffs<P::Fqe> {
        let b = x.clone() * &r.t;
        let d = ((y.clone() + &r.z).square() - y_squared - &r.t) * &r.t;
        let h = b - &r.x;
        let i = h.square();
        let e = i.double().double();
        let j = h.clone() * &e;
        let v = r.x.clone() * &e;
        let l1 = d - &r.y.double();

        let x3 = l1.square() - &j - &v.double();
        let y3 = l1.clone() * &(v - &x3) - &(r.y.double() * &j);
        let z3 = (r.z.clone() + &h).square() - &r.t - &i;
        let t3 = z3.square();

        *r = ExtendedJacobian {
            x: x3,
            y: y3,
            z: z3.clone(),
            t: t3,
        };
        MntLineCoeffs::Addition {
            c_l1: l1,
            c_rz: z3,
        }
    }

    /// `f^((q^(k/2) - 1))`, times `f^(q + 1)` when `k/2` is odd.
    fn final_exponentiation_first_chunk(
        f: &QuadExtField<P::FqkConfig>,
    ) -> Result<QuadExtField<P::FqkConfig>, PairingError> {
        let half = P::Fqe::extension_degree();
        let elt = f.frobenius_map(half) * &f.inverse()?;
        if half % 2 == 1 {
            Ok(elt.frobenius_map(1) * &elt)
        } else {
            Ok(elt)
        }
    }
}

/// `f^(w1 q + w0)` for `f` of norm one over `Fqe`.
pub(crate) fn final_exponentiation_last_chunk<C: QuadExtConfig>(
    f: &QuadExtField<C>,
    w0: &BigUint,
    w0_is_negative: bool,
    w1: &BigUint,
) -> QuadExtField<C> {
    let w1_part = f.frobenius_map(1).cyclotomic_exp(w1);
    let w0_part = if w0_is_negative {
        f.unitary_inverse().cyclotomic_exp(w0)
    } else {
        f.cyclotomic_exp(w0)
    };
    w1_part * &w0_part
}

impl<P: MntConfig> PairingConfig for Mnt<P> {
    type G1Affine = Affine<P::G1Config>;
    type G2Affine = Affine<P::G2Config>;
    type G1Prepared = MntG1Prepared<P>;
    type G2Base = MntG2Base<P>;
    type G2Accumulator = ExtendedJacobian<P::Fqe>;
    type LineCoeffs = MntLineCoeffs<P::Fqe>;
    type TargetField = QuadExtField<P::FqkConfig>;

    fn name() -> &'static str {
        P::params().name
    }

    fn loop_count() -> &'static LoopCount {
        &P::params().loop_count
    }

    fn prepare_g1(p: &Self::G1Affine) -> Result<Self::G1Prepared, PairingError> {
        if p.is_identity() {
            return Err(PairingError::IdentityPoint);
        }
        if !p.is_on_curve() {
            return Err(PairingError::NotOnCurve);
        }
        let twist = P::twist();
        Ok(MntG1Prepared {
            x: p.x.clone(),
            x_twist: twist.mul_by_base_prime_field(&p.x),
            y_twist: twist.mul_by_base_prime_field(&p.y),
        })
    }

    fn g2_start(q: &Self::G2Affine) -> Result<(Self::G2Base, Self::G2Accumulator), PairingError> {
        if q.is_identity() {
            return Err(PairingError::IdentityPoint);
        }
        if !q.is_on_curve() {
            return Err(PairingError::NotOnCurve);
        }
        let twist_inv = P::twist().inverse()?;
        let base = MntG2Base {
            x: q.x.clone(),
            y: q.y.clone(),
            y_squared: q.y.square(),
            x_over_twist: q.x.clone() * &twist_inv,
            y_over_twist: q.y.clone() * &twist_inv,
        };
        let r = ExtendedJacobian {
            x: q.x.clone(),
            y: q.y.clone(),
            z: P::Fqe::one(),
            t: P::Fqe::one(),
        };
        Ok((base, r))
    }

    fn doubling_step(r: &mut Self::G2Accumulator) -> Result<Self::LineCoeffs, PairingError> {
        let a = r.t.square();
        let b = r.x.square();
        let c = r.y.square();
        let d = c.square();
        let e = (r.x.clone() + &c).square() - &b - &d;
        let f = b.double() + &b + &P::G2Config::mul_by_a(&a);
        let g = f.square();

        let x3 = g.clone() - &e.double().double();
        let y3 = f.clone() * &(e.double() - &x3) - &d.double().double().double();
        let z3 = (r.y.clone() + &r.z).square() - &c - &r.z.square();
        let t3 = z3.square();

        let coeffs = MntLineCoeffs::Doubling {
            c_h: (z3.clone() + &r.t).square() - &t3 - &a,
            c_4c: c.double().double(),
            c_j: (f.clone() + &r.t).square() - &g - &a,
            c_l: (f + &r.x).square() - &g - &b,
        };
        *r = ExtendedJacobian {
            x: x3,
            y: y3,
            z: z3,
            t: t3,
        };
        Ok(coeffs)
    }

    fn addition_step(
        r: &mut Self::G2Accumulator,
        q: &Self::G2Base,
        negate: bool,
    ) -> Result<Self::LineCoeffs, PairingError> {
        if negate {
            Ok(Self::mixed_addition(r, &q.x, &-q.y.clone(), &q.y_squared))
        } else {
            Ok(Self::mixed_addition(r, &q.x, &q.y, &q.y_squared))
        }
    }

    /// With a negative loop count the walk closes with the line through `-R`.
    fn tail_steps(
        r: &mut Self::G2Accumulator,
        _q: &Self::G2Base,
    ) -> Result<Vec<Self::LineCoeffs>, PairingError> {
        if !P::params().loop_count.is_negative() {
            return Ok(Vec::new());
        }
        let z2_inv = r.t.inverse()?;
        let z3_inv = (r.t.clone() * &r.z).inverse()?;
        let minus_r_x = r.x.clone() * &z2_inv;
        let minus_r_y = -(r.y.clone() * &z3_inv);
        let minus_r_y_squared = minus_r_y.square();
        Ok(vec![Self::mixed_addition(
            r,
            &minus_r_x,
            &minus_r_y,
            &minus_r_y_squared,
        )])
    }

    fn ell(
        f: &mut Self::TargetField,
        coeffs: &Self::LineCoeffs,
        p: &Self::G1Prepared,
        q: &Self::G2Base,
    ) {
        let line: Self::TargetField = match coeffs {
            MntLineCoeffs::Doubling { c_h, c_4c, c_j, c_l } => QuadExtField::new(
                -c_4c.clone() - &(c_j.clone() * &p.x_twist) + c_l,
                c_h.clone() * &p.y_twist,
            ),
            MntLineCoeffs::Addition { c_l1, c_rz } => {
                let l1_coeff = P::Fqe::from_base_prime_field(p.x.clone()) - &q.x_over_twist;
                QuadExtField::new(
                    c_rz.clone() * &p.y_twist,
                    -(q.y_over_twist.clone() * c_rz + &(l1_coeff * c_l1)),
                )
            }
        };
        *f *= &line;
    }

    /// `r` divides `q^(k/2) + 1`, so conjugation over `Fqe` stands in for inversion.
    fn invert_miller_output(f: &Self::TargetField) -> Result<Self::TargetField, PairingError> {
        Ok(f.conjugate())
    }

    fn final_exponentiation(f: &Self::TargetField) -> Result<Self::TargetField, PairingError> {
        let params = P::params();
        let elt = Self::final_exponentiation_first_chunk(f)?;
        Ok(final_exponentiation_last_chunk(
            &elt,
            &params.final_exponent_w0,
            params.final_exponent_w0_is_negative,
            &params.final_exponent_w1,
        ))
    }
}

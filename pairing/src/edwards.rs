//! Ate pairing on twisted Edwards curves of embedding degree 6.
//!
//! G1 is an Edwards curve over Fq and G2 its twist over Fq3. The G2 walk runs in
//! extended coordinates, and each step emits three Fq3 coefficients that are
//! evaluated against three Fq values precomputed from `P`.

use core::marker::PhantomData;
use curve::{EdwardsAffine, TECurveConfig};
use field::{biguint_from_literal, ConfigBounds, Field, Fp, FpConfig, QuadExtConfig, QuadExtField};
use num_bigint::BigUint;

use crate::engine::PairingConfig;
use crate::errors::PairingError;
use crate::loop_count::LoopCount;
use crate::mnt::final_exponentiation_last_chunk;

#[derive(Debug)]
pub struct EdwardsPairingParams {
    name: &'static str,
    loop_count: LoopCount,
    tate_loop_count: LoopCount,
    final_exponent_w0: BigUint,
    final_exponent_w0_is_negative: bool,
    final_exponent_w1: BigUint,
}

impl EdwardsPairingParams {
    pub fn new(
        name: &'static str,
        ate_loop_count: &str,
        scalar_field_modulus: &BigUint,
        w0: &str,
        w0_is_negative: bool,
        w1: &str,
    ) -> Self {
        let final_exponent_w0 = biguint_from_literal(w0);
        tracing::debug!(
            curve = name,
            w0_bits = final_exponent_w0.bits(),
            "initialized Edwards pairing parameters"
        );
        Self {
            name,
            loop_count: LoopCount::binary_from_literal(ate_loop_count, false),
            tate_loop_count: LoopCount::binary(scalar_field_modulus, false),
            final_exponent_w0,
            final_exponent_w0_is_negative: w0_is_negative,
            final_exponent_w1: biguint_from_literal(w1),
        }
    }
}

pub trait EdwardsPairingConfig: ConfigBounds {
    type Fp: FpConfig;
    type Fqe: Field<BasePrimeField = Fp<Self::Fp>>;
    type FqkConfig: QuadExtConfig<BaseField = Self::Fqe>;
    type G1Config: TECurveConfig<BaseField = Fp<Self::Fp>>;
    type G2Config: TECurveConfig<BaseField = Self::Fqe>;

    fn params() -> &'static EdwardsPairingParams;

    /// The generator of `Fqe` over Fq used to build the twist.
    fn twist() -> Self::Fqe;
}

impl EdwardsPairingParams {
    /// Binary expansion of the group order `r`, walked by the Tate pairing.
    pub fn tate_loop_count(&self) -> &LoopCount {
        &self.tate_loop_count
    }
}

/// `P = (x, y)` as `(x y, x, 1 + y)`.
#[derive(Clone, Debug)]
pub struct EdwardsG1Prepared<F> {
    xy: F,
    xz: F,
    zz_plus_yz: F,
}

/// Point in extended coordinates `(X : Y : Z : T)` with `T Z = X Y`.
#[derive(Clone, Debug)]
pub struct ExtendedPoint<F> {
    x: F,
    y: F,
    z: F,
    t: F,
}

#[derive(Clone, Debug)]
pub struct EdwardsLineTriple<F> {
    pub(crate) c_zz: F,
    pub(crate) c_xy: F,
    pub(crate) c_xz: F,
}

#[derive(Clone, Debug)]
pub enum EdwardsLineCoeffs<F> {
    Doubling(EdwardsLineTriple<F>),
    Addition(EdwardsLineTriple<F>),
}

impl<F: Field> ExtendedPoint<F> {
    pub(crate) fn from_affine(x: &F, y: &F) -> Self {
        Self {
            x: x.clone(),
            y: y.clone(),
            z: F::one(),
            t: x.clone() * y,
        }
    }

    fn negate(&self) -> Self {
        Self {
            x: -self.x.clone(),
            y: self.y.clone(),
            z: self.z.clone(),
            t: -self.t.clone(),
        }
    }
}

/// Doubles `r` on `a x^2 + y^2 = 1 + d x^2 y^2`, returning the tangent conic.
pub(crate) fn extended_doubling<F: Field>(
    r: &mut ExtendedPoint<F>,
    mul_by_a: impl Fn(&F) -> F,
) -> EdwardsLineTriple<F> {
    let a = r.x.square();
    let b = r.y.square();
    let c = r.z.square();
    let d = (r.x.clone() + &r.y).square();
    let e = (r.y.clone() + &r.z).square();
    let f = d - &(a.clone() + &b);
    let g = e - &(b.clone() + &c);
    let h = mul_by_a(&a);
    let i = h.clone() + &b;
    let j = c.clone() - &i;
    let k = j.clone() + &c;

    let coeffs = EdwardsLineTriple {
        c_zz: (r.y.clone() * &(r.t.clone() - &r.x)).double(),
        c_xy: j.double() + &g,
        c_xz: (mul_by_a(&(r.x.clone() * &r.t)) - &b).double(),
    };

    let b_minus_h = b - &h;
    *r = ExtendedPoint {
        x: f.clone() * &k,
        y: i.clone() * &b_minus_h,
        z: i * &k,
        t: f * &b_minus_h,
    };
    coeffs
}

/// Adds the affine point `q` (with `Z = 1`) to `r`, returning the chord conic.
pub(crate) fn extended_addition<F: Field>(
    r: &mut ExtendedPoint<F>,
    q: &ExtendedPoint<F>,
    mul_by_a: impl Fn(&F) -> F,
) -> EdwardsLineTriple<F> {
    let a = r.x.clone() * &q.x;
    let b = r.y.clone() * &q.y;
    let c = r.z.clone() * &q.t;
    let d = r.t.clone();
    let e = d.clone() + &c;
    let f = (r.x.clone() - &r.y) * &(q.x.clone() + &q.y) + &b - &a;
    let g = b.clone() + &mul_by_a(&a);
    let h = d - &c;
    let i = r.t.clone() * &q.t;

    let coeffs = EdwardsLineTriple {
        c_zz: mul_by_a(&((r.t.clone() - &r.x) * &(q.t.clone() + &q.x) - &i + &a)),
        c_xy: r.x.clone() - &(q.x.clone() * &r.z) + &f,
        c_xz: (r.y.clone() - &r.t) * &(q.y.clone() + &q.t) - &b + &i - &h,
    };

    *r = ExtendedPoint {
        x: e.clone() * &f,
        y: g.clone() * &h,
        z: f * &g,
        t: e * &h,
    };
    coeffs
}

/// The Edwards family as a pairing policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Edwards<P: EdwardsPairingConfig>(PhantomData<P>);

impl<P: EdwardsPairingConfig> Edwards<P> {
    pub(crate) fn check<C: TECurveConfig>(point: &EdwardsAffine<C>) -> Result<(), PairingError> {
        if point.is_identity() {
            return Err(PairingError::IdentityPoint);
        }
        if !point.is_on_curve() {
            return Err(PairingError::NotOnCurve);
        }
        Ok(())
    }
}

impl<P: EdwardsPairingConfig> PairingConfig for Edwards<P> {
    type G1Affine = EdwardsAffine<P::G1Config>;
    type G2Affine = EdwardsAffine<P::G2Config>;
    type G1Prepared = EdwardsG1Prepared<Fp<P::Fp>>;
    type G2Base = ExtendedPoint<P::Fqe>;
    type G2Accumulator = ExtendedPoint<P::Fqe>;
    type LineCoeffs = EdwardsLineCoeffs<P::Fqe>;
    type TargetField = QuadExtField<P::FqkConfig>;

    fn name() -> &'static str {
        P::params().name
    }

    fn loop_count() -> &'static LoopCount {
        &P::params().loop_count
    }

    fn prepare_g1(p: &Self::G1Affine) -> Result<Self::G1Prepared, PairingError> {
        Self::check(p)?;
        Ok(EdwardsG1Prepared {
            xy: p.x.clone() * &p.y,
            xz: p.x.clone(),
            zz_plus_yz: Fp::<P::Fp>::one() + &p.y,
        })
    }

    fn g2_start(q: &Self::G2Affine) -> Result<(Self::G2Base, Self::G2Accumulator), PairingError> {
        Self::check(q)?;
        let base = ExtendedPoint::from_affine(&q.x, &q.y);
        Ok((base.clone(), base))
    }

    fn doubling_step(r: &mut Self::G2Accumulator) -> Result<Self::LineCoeffs, PairingError> {
        Ok(EdwardsLineCoeffs::Doubling(extended_doubling(
            r,
            P::G2Config::mul_by_a,
        )))
    }

    fn addition_step(
        r: &mut Self::G2Accumulator,
        q: &Self::G2Base,
        negate: bool,
    ) -> Result<Self::LineCoeffs, PairingError> {
        let q = if negate { q.negate() } else { q.clone() };
        Ok(EdwardsLineCoeffs::Addition(extended_addition(
            r,
            &q,
            P::G2Config::mul_by_a,
        )))
    }

    fn ell(
        f: &mut Self::TargetField,
        coeffs: &Self::LineCoeffs,
        p: &Self::G1Prepared,
        _q: &Self::G2Base,
    ) {
        let eval = |c: &EdwardsLineTriple<P::Fqe>| {
            (
                c.c_xy.mul_by_base_prime_field(&p.xy) + &c.c_xz.mul_by_base_prime_field(&p.xz),
                c.c_zz.mul_by_base_prime_field(&p.zz_plus_yz),
            )
        };
        let line: Self::TargetField = match coeffs {
            EdwardsLineCoeffs::Doubling(c) => {
                let (xy_xz, zz) = eval(c);
                QuadExtField::new(xy_xz, zz)
            }
            EdwardsLineCoeffs::Addition(c) => {
                let (xy_xz, zz) = eval(c);
                QuadExtField::new(zz, xy_xz)
            }
        };
        *f *= &line;
    }

    /// Same chunks as MNT6: `(q^3 - 1)(q + 1)` followed by `w1 q + w0`.
    fn final_exponentiation(f: &Self::TargetField) -> Result<Self::TargetField, PairingError> {
        let params = P::params();
        let elt = f.frobenius_map(3) * &f.inverse()?;
        let elt = elt.frobenius_map(1) * &elt;
        Ok(final_exponentiation_last_chunk(
            &elt,
            &params.final_exponent_w0,
            params.final_exponent_w0_is_negative,
            &params.final_exponent_w1,
        ))
    }
}

//! Tate pairing on twisted Edwards curves of embedding degree 6.
//!
//! The roles of the ate pairing are swapped: the walk runs over the group order
//! `r` starting from `P` in G1, so every conic has coefficients in Fq, and the
//! conics are evaluated at two Fq3 values derived from `Q`.

use core::marker::PhantomData;
use curve::{EdwardsAffine, TECurveConfig};
use field::{Field, Fp, QuadExtField};

use crate::edwards::{
    extended_addition, extended_doubling, Edwards, EdwardsLineTriple, EdwardsPairingConfig,
    ExtendedPoint,
};
use crate::engine::{accumulate_lines, walk_lines, PairingConfig};
use crate::errors::PairingError;
use crate::loop_count::LoopCount;

/// Conic coefficients of `P`, one triple per step of the walk over `r`.
#[derive(Clone, Debug)]
pub struct TateG1Prepared<F> {
    lines: Vec<EdwardsLineTriple<F>>,
}

impl<F> TateG1Prepared<F> {
    pub fn lines(&self) -> &[EdwardsLineTriple<F>] {
        &self.lines
    }
}

/// `Q = (x, y)` as `y` and `eta = (1 + y) / (x u)`, with `u` the twist element.
#[derive(Clone, Debug)]
pub struct TateG2Prepared<F> {
    y0: F,
    eta: F,
}

type TargetOf<P> = QuadExtField<<P as EdwardsPairingConfig>::FqkConfig>;

/// The reduced Tate pairing over an Edwards pairing configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tate<P: EdwardsPairingConfig>(PhantomData<P>);

impl<P: EdwardsPairingConfig> Tate<P> {
    pub fn loop_count() -> &'static LoopCount {
        P::params().tate_loop_count()
    }

    /// Walks the binary expansion of `r` from `P`, recording one conic per step.
    pub fn prepare_g1(
        p: &EdwardsAffine<P::G1Config>,
    ) -> Result<TateG1Prepared<Fp<P::Fp>>, PairingError> {
        Edwards::<P>::check(p)?;
        let base = ExtendedPoint::from_affine(&p.x, &p.y);
        let mut r = base.clone();
        let lines = walk_lines(
            Self::loop_count(),
            &mut r,
            |r| Ok(extended_doubling(r, P::G1Config::mul_by_a)),
            |r, _| Ok(extended_addition(r, &base, P::G1Config::mul_by_a)),
        )?;
        Ok(TateG1Prepared { lines })
    }

    pub fn prepare_g2(
        q: &EdwardsAffine<P::G2Config>,
    ) -> Result<TateG2Prepared<P::Fqe>, PairingError> {
        Edwards::<P>::check(q)?;
        let x_twist_inv = (q.x.clone() * &P::twist()).inverse()?;
        Ok(TateG2Prepared {
            y0: q.y.clone(),
            eta: (P::Fqe::one() + &q.y) * &x_twist_inv,
        })
    }

    fn ell(f: &mut TargetOf<P>, c: &EdwardsLineTriple<Fp<P::Fp>>, q: &TateG2Prepared<P::Fqe>) {
        let c0 = P::Fqe::from_base_prime_field(c.c_xz.clone())
            + &q.y0.mul_by_base_prime_field(&c.c_xy);
        let line = QuadExtField::new(c0, q.eta.mul_by_base_prime_field(&c.c_zz));
        *f *= &line;
    }

    /// Product of the Tate Miller functions of every pair, sharing the squarings.
    pub fn multi_miller_loop(
        pairs: &[(&TateG1Prepared<Fp<P::Fp>>, &TateG2Prepared<P::Fqe>)],
    ) -> Result<TargetOf<P>, PairingError> {
        let (f, _) = accumulate_lines::<TargetOf<P>, _>(
            Self::loop_count(),
            pairs,
            |f, (p, q), step| Self::ell(f, &p.lines[step], q),
        );
        Ok(f)
    }

    pub fn miller_loop(
        p: &TateG1Prepared<Fp<P::Fp>>,
        q: &TateG2Prepared<P::Fqe>,
    ) -> Result<TargetOf<P>, PairingError> {
        Self::multi_miller_loop(&[(p, q)])
    }

    pub fn double_miller_loop(
        first: (&TateG1Prepared<Fp<P::Fp>>, &TateG2Prepared<P::Fqe>),
        second: (&TateG1Prepared<Fp<P::Fp>>, &TateG2Prepared<P::Fqe>),
    ) -> Result<TargetOf<P>, PairingError> {
        Self::multi_miller_loop(&[first, second])
    }

    /// Same final exponentiation as the ate pairing on this curve.
    pub fn final_exponentiation(f: &TargetOf<P>) -> Result<TargetOf<P>, PairingError> {
        Edwards::<P>::final_exponentiation(f)
    }

    pub fn pair(
        p: &EdwardsAffine<P::G1Config>,
        q: &EdwardsAffine<P::G2Config>,
    ) -> Result<TargetOf<P>, PairingError> {
        tracing::trace!(family = Edwards::<P>::name(), "computing tate miller loop");
        let p = Self::prepare_g1(p)?;
        let q = Self::prepare_g2(q)?;
        Self::miller_loop(&p, &q)
    }

    pub fn pair_reduced(
        p: &EdwardsAffine<P::G1Config>,
        q: &EdwardsAffine<P::G2Config>,
    ) -> Result<TargetOf<P>, PairingError> {
        let f = Self::pair(p, q)?;
        tracing::trace!(family = Edwards::<P>::name(), "computing final exponentiation");
        Self::final_exponentiation(&f)
    }
}

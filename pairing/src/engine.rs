use core::fmt::Debug;
use core::marker::PhantomData;
use field::{ConfigBounds, Field};

use crate::errors::PairingError;
use crate::loop_count::LoopCount;

/// Policy of one pairing family on one curve.
///
/// The family supplies its point types, the doubling and addition steps of the
/// G2 walk, and how a step's line coefficients are evaluated at a G1 point. The
/// walk itself, the shared squarings and the sign handling live in [`Pairing`].
pub trait PairingConfig: ConfigBounds {
    type G1Affine: Clone + Debug;
    type G2Affine: Clone + Debug;

    /// G1 point in the form consumed by line evaluation.
    type G1Prepared: Clone + Debug + Send + Sync;

    /// Values derived once from `Q` and needed by every line.
    type G2Base: Clone + Debug + Send + Sync;

    /// Running multiple of `Q` during precomputation.
    type G2Accumulator;

    type LineCoeffs: Clone + Debug + Send + Sync;

    type TargetField: Field;

    fn name() -> &'static str;

    fn loop_count() -> &'static LoopCount;

    fn prepare_g1(p: &Self::G1Affine) -> Result<Self::G1Prepared, PairingError>;

    /// Validates `Q` and returns its base data together with the starting accumulator.
    fn g2_start(q: &Self::G2Affine) -> Result<(Self::G2Base, Self::G2Accumulator), PairingError>;

    fn doubling_step(r: &mut Self::G2Accumulator) -> Result<Self::LineCoeffs, PairingError>;

    /// Adds `Q`, or `-Q` when `negate` is set, to the accumulator.
    fn addition_step(
        r: &mut Self::G2Accumulator,
        q: &Self::G2Base,
        negate: bool,
    ) -> Result<Self::LineCoeffs, PairingError>;

    /// Lines appended after the digit walk.
    fn tail_steps(
        _r: &mut Self::G2Accumulator,
        _q: &Self::G2Base,
    ) -> Result<Vec<Self::LineCoeffs>, PairingError> {
        Ok(Vec::new())
    }

    /// Multiplies `f` by the line with coefficients `coeffs` evaluated at `p`.
    fn ell(
        f: &mut Self::TargetField,
        coeffs: &Self::LineCoeffs,
        p: &Self::G1Prepared,
        q: &Self::G2Base,
    );

    /// Turns `f_{|x|}` into `f_x` for a negative loop parameter `x`.
    ///
    /// Any representative of `f^-1` modulo `r`-th powers will do. Families whose
    /// target field is a quadratic extension with `r | p^(k/2) + 1` override this
    /// with conjugation.
    fn invert_miller_output(f: &Self::TargetField) -> Result<Self::TargetField, PairingError> {
        Ok(f.inverse()?)
    }

    fn final_exponentiation(f: &Self::TargetField) -> Result<Self::TargetField, PairingError>;
}

/// Runs the G2 walk over `loop_count`, recording one line per step.
pub(crate) fn walk_lines<A, L>(
    loop_count: &LoopCount,
    r: &mut A,
    mut doubling_step: impl FnMut(&mut A) -> Result<L, PairingError>,
    mut addition_step: impl FnMut(&mut A, bool) -> Result<L, PairingError>,
) -> Result<Vec<L>, PairingError> {
    let mut lines = Vec::with_capacity(loop_count.digits().len() + loop_count.addition_count());
    for &digit in loop_count.digits() {
        lines.push(doubling_step(r)?);
        if digit != 0 {
            lines.push(addition_step(r, digit < 0)?);
        }
    }
    Ok(lines)
}

/// Squares `f` once per digit and absorbs the matching line of every pair.
///
/// `absorb(f, pair, step)` multiplies in line `step` of `pair`. Returns the
/// accumulated value and the number of lines consumed per pair.
pub(crate) fn accumulate_lines<F: Field, T>(
    loop_count: &LoopCount,
    pairs: &[T],
    mut absorb: impl FnMut(&mut F, &T, usize),
) -> (F, usize) {
    let mut f = F::one();
    let mut step = 0;

    for &digit in loop_count.digits() {
        f = f.square();
        for pair in pairs {
            absorb(&mut f, pair, step);
        }
        step += 1;

        if digit != 0 {
            for pair in pairs {
                absorb(&mut f, pair, step);
            }
            step += 1;
        }
    }
    (f, step)
}

/// Line coefficients of `Q`, in the order the Miller loop consumes them.
#[derive(Clone, Debug)]
pub struct G2Prepared<P: PairingConfig> {
    base: P::G2Base,
    lines: Vec<P::LineCoeffs>,
}

impl<P: PairingConfig> G2Prepared<P> {
    pub fn base(&self) -> &P::G2Base {
        &self.base
    }

    pub fn lines(&self) -> &[P::LineCoeffs] {
        &self.lines
    }
}

/// The pairing engine over a family policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pairing<P: PairingConfig>(PhantomData<P>);

impl<P: PairingConfig> Pairing<P> {
    pub fn prepare_g1(p: &P::G1Affine) -> Result<P::G1Prepared, PairingError> {
        P::prepare_g1(p)
    }

    /// Walks the loop count from `Q`, recording one line per step.
    pub fn prepare_g2(q: &P::G2Affine) -> Result<G2Prepared<P>, PairingError> {
        let (base, mut r) = P::g2_start(q)?;
        let mut lines = walk_lines(P::loop_count(), &mut r, P::doubling_step, |r, negate| {
            P::addition_step(r, &base, negate)
        })?;
        lines.extend(P::tail_steps(&mut r, &base)?);

        Ok(G2Prepared { base, lines })
    }

    /// Product of the Miller functions of every pair, sharing the squarings.
    pub fn multi_miller_loop(
        pairs: &[(&P::G1Prepared, &G2Prepared<P>)],
    ) -> Result<P::TargetField, PairingError> {
        let loop_count = P::loop_count();
        let (mut f, step) =
            accumulate_lines::<P::TargetField, _>(loop_count, pairs, |f, (p, q), step| {
                P::ell(f, &q.lines[step], p, &q.base)
            });

        for (p, q) in pairs {
            for coeffs in &q.lines[step..] {
                P::ell(&mut f, coeffs, p, &q.base);
            }
        }

        if loop_count.is_negative() {
            f = P::invert_miller_output(&f)?;
        }
        Ok(f)
    }

    pub fn miller_loop(
        p: &P::G1Prepared,
        q: &G2Prepared<P>,
    ) -> Result<P::TargetField, PairingError> {
        Self::multi_miller_loop(&[(p, q)])
    }

    pub fn double_miller_loop(
        first: (&P::G1Prepared, &G2Prepared<P>),
        second: (&P::G1Prepared, &G2Prepared<P>),
    ) -> Result<P::TargetField, PairingError> {
        Self::multi_miller_loop(&[first, second])
    }

    pub fn final_exponentiation(f: &P::TargetField) -> Result<P::TargetField, PairingError> {
        P::final_exponentiation(f)
    }

    /// Miller loop output for `(P, Q)`, before the final exponentiation.
    pub fn pair(p: &P::G1Affine, q: &P::G2Affine) -> Result<P::TargetField, PairingError> {
        tracing::trace!(family = P::name(), "computing miller loop");
        let p = Self::prepare_g1(p)?;
        let q = Self::prepare_g2(q)?;
        Self::miller_loop(&p, &q)
    }

    /// The reduced pairing `e(P, Q)`, an element of order dividing `r`.
    pub fn pair_reduced(p: &P::G1Affine, q: &P::G2Affine) -> Result<P::TargetField, PairingError> {
        let f = Self::pair(p, q)?;
        tracing::trace!(family = P::name(), "computing final exponentiation");
        Self::final_exponentiation(&f)
    }
}

//! Doubling and addition steps shared by the BN and BLS12 families.
//!
//! Both families pair G1 over Fq with a sextic twist of G2 over Fq2 and land in
//! the tower `Fq12 = Fq6[w]`. Steps run in homogeneous projective coordinates
//! on the twist and emit three Fq2 line coefficients; the twist type decides
//! which sparse Fq12 product absorbs them.

use curve::{Affine, SWCurveConfig};
use field::{
    ConfigBounds, Field, Fp, Fp12, Fp12Config, Fp2, Fp2Config, Fp6Config, FpConfig, PrimeField,
};

use crate::errors::PairingError;

/// Whether the twist isomorphism divides (D) or multiplies (M) by the twist element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TwistType {
    M,
    D,
}

/// Curve data of a sextic-twist pairing.
pub trait SexticTwistConfig: ConfigBounds {
    type Fp: FpConfig;
    type Fp2Config: Fp2Config<Fp = Self::Fp>;
    type Fp6Config: Fp6Config<Fp2Config = Self::Fp2Config>;
    type Fp12Config: Fp12Config<Fp6Config = Self::Fp6Config>;
    type G1Config: SWCurveConfig<BaseField = Fp<Self::Fp>>;
    type G2Config: SWCurveConfig<BaseField = Fp2<Self::Fp2Config>>;

    const TWIST_TYPE: TwistType;

    /// The Fq2 element the twist is built from.
    fn twist() -> &'static Fp2<Self::Fp2Config>;
}

pub type EllCoeff<F> = (F, F, F);

type Fq2Of<P> = Fp2<<P as SexticTwistConfig>::Fp2Config>;

/// Running point `(X : Y : Z)` on the twist.
#[derive(Clone, Debug)]
pub struct G2HomProjective<P: SexticTwistConfig> {
    x: Fq2Of<P>,
    y: Fq2Of<P>,
    z: Fq2Of<P>,
    two_inv: Fp<P::Fp>,
}

impl<P: SexticTwistConfig> G2HomProjective<P> {
    fn from_affine(x: &Fq2Of<P>, y: &Fq2Of<P>) -> Self {
        let two_inv = Fp::<P::Fp>::from_biguint(&((Fp::<P::Fp>::modulus() + 1u32) >> 1u32));
        Self {
            x: x.clone(),
            y: y.clone(),
            z: Fq2Of::<P>::one(),
            two_inv,
        }
    }
}

pub(crate) fn check_g1<P: SexticTwistConfig>(
    p: &Affine<P::G1Config>,
) -> Result<Affine<P::G1Config>, PairingError> {
    if p.is_identity() {
        return Err(PairingError::IdentityPoint);
    }
    if !p.is_on_curve() {
        return Err(PairingError::NotOnCurve);
    }
    Ok(p.clone())
}

/// Validates `Q` and starts the walk at `Q` itself.
pub(crate) fn g2_start<P: SexticTwistConfig>(
    q: &Affine<P::G2Config>,
) -> Result<((Fq2Of<P>, Fq2Of<P>), G2HomProjective<P>), PairingError> {
    if q.is_identity() {
        return Err(PairingError::IdentityPoint);
    }
    if !q.is_on_curve() {
        return Err(PairingError::NotOnCurve);
    }
    let r = G2HomProjective::from_affine(&q.x, &q.y);
    Ok(((q.x.clone(), q.y.clone()), r))
}

/// Doubles `r`, returning the tangent line.
pub(crate) fn doubling_step<P: SexticTwistConfig>(
    r: &mut G2HomProjective<P>,
) -> EllCoeff<Fq2Of<P>> {
    let b = P::G2Config::params().b();

    let a = (r.x.clone() * &r.y).mul_by_base_prime_field(&r.two_inv);
    let y2 = r.y.square();
    let z2 = r.z.square();
    let e = b.clone() * &(z2.double() + &z2);
    let f = e.double() + &e;
    let g = (y2.clone() + &f).mul_by_base_prime_field(&r.two_inv);
    let h = (r.y.clone() + &r.z).square() - &(y2.clone() + &z2);
    let i = e.clone() - &y2;
    let j = r.x.square();
    let e_square = e.square();

    r.x = a * &(y2.clone() - &f);
    r.y = g.square() - &(e_square.double() + &e_square);
    r.z = y2 * &h;

    let j3 = j.double() + &j;
    match P::TWIST_TYPE {
        TwistType::M => (i, -(P::twist().clone() * &h), j3),
        TwistType::D => (P::twist().clone() * &i, -h, j3),
    }
}

/// Adds the affine point `(x2, y2)` to `r`, returning the chord.
pub(crate) fn addition_step<P: SexticTwistConfig>(
    r: &mut G2HomProjective<P>,
    x2: &Fq2Of<P>,
    y2: &Fq2Of<P>,
) -> EllCoeff<Fq2Of<P>> {
    let theta = r.y.clone() - &(y2.clone() * &r.z);
    let lambda = r.x.clone() - &(x2.clone() * &r.z);
    let c = theta.square();
    let d = lambda.square();
    let e = lambda.clone() * &d;
    let f = r.z.clone() * &c;
    let g = r.x.clone() * &d;
    let h = e.clone() + &f - &g.double();

    r.x = lambda.clone() * &h;
    r.y = theta.clone() * &(g - &h) - &(e.clone() * &r.y);
    r.z *= &e;

    let j = theta.clone() * x2 - &(lambda.clone() * y2);
    match P::TWIST_TYPE {
        TwistType::M => (j, P::twist().clone() * &lambda, -theta),
        TwistType::D => (P::twist().clone() * &j, lambda, -theta),
    }
}

/// Scales the coefficients by `P` and multiplies them into `f` sparsely.
pub(crate) fn ell<P: SexticTwistConfig>(
    f: &mut Fp12<P::Fp12Config>,
    coeffs: &EllCoeff<Fq2Of<P>>,
    p: &Affine<P::G1Config>,
) {
    let (c0, c1, c2) = coeffs;
    let ell_vw = c1.mul_by_base_prime_field(&p.y);
    let ell_vv = c2.mul_by_base_prime_field(&p.x);

    match P::TWIST_TYPE {
        TwistType::M => f.mul_by_045(c0, &ell_vw, &ell_vv),
        TwistType::D => f.mul_by_024(c0, &ell_vw, &ell_vv),
    }
}

/// `f^((p^6 - 1)(p^2 + 1))`, mapping the Miller output into the cyclotomic subgroup.
pub(crate) fn final_exponentiation_easy_part<P: SexticTwistConfig>(
    f: &Fp12<P::Fp12Config>,
) -> Result<Fp12<P::Fp12Config>, PairingError> {
    let f1 = f.conjugate() * &f.inverse()?;
    Ok(f1.frobenius_map(2) * &f1)
}

//! Hashing to curve points following RFC 9380.
//!
//! A target curve with `a = 0` is reached through the simplified SWU map onto an
//! isogenous curve `y^2 = x^3 + A' x + B'`, followed by a fixed rational isogeny
//! and cofactor clearing.

mod expander;
pub mod bls12_381;

pub use expander::expand_message_xmd;

use field::{Field, FieldError, PrimeField};
use num_bigint::BigUint;

use crate::errors::HashToCurveError;
use crate::models::SWCurveConfig;
use crate::{Affine, Group, Projective};

/// Security parameter `k` of the hash-to-field construction.
const SECURITY_BITS: u64 = 128;

/// Bytes drawn per prime-field coefficient, `L = ceil((ceil(log2 p) + k) / 8)`.
fn field_chunk_len<F: Field>() -> usize {
    let bits = F::BasePrimeField::modulus_bits() + SECURITY_BITS;
    bits.div_ceil(8) as usize
}

/// Hashes `msg` to `count` elements of `F`.
pub fn hash_to_field<F: Field>(
    msg: &[u8],
    dst: &[u8],
    count: usize,
) -> Result<Vec<F>, HashToCurveError> {
    let degree = F::extension_degree();
    let chunk = field_chunk_len::<F>();
    let uniform = expand_message_xmd(msg, dst, count * degree * chunk)?;

    let elems = uniform
        .chunks(degree * chunk)
        .map(|element_bytes| {
            let coeffs: Vec<F::BasePrimeField> = element_bytes
                .chunks(chunk)
                .map(F::BasePrimeField::from_be_bytes_mod_order)
                .collect();
            F::from_base_prime_field_elems(&coeffs)
                .ok_or(HashToCurveError::Field(FieldError::InvalidLength {
                    expected: degree,
                    found: coeffs.len(),
                }))
        })
        .collect::<Result<Vec<F>, _>>()?;
    Ok(elems)
}

/// Coefficients of the isogenous curve and the SWU constant `Z`.
#[derive(Debug)]
pub struct SSWUParams<F> {
    pub a: F,
    pub b: F,
    pub z: F,
}

/// Simplified SWU map onto `y^2 = x^3 + a x + b`, returning affine `(x, y)`.
pub fn map_to_curve_sswu<F: Field>(params: &SSWUParams<F>, u: &F) -> Result<(F, F), FieldError> {
    let SSWUParams { a, b, z } = params;

    let z_u2 = z.clone() * &u.square();
    let tv1 = z_u2.square() + &z_u2;

    let x1 = if tv1.is_zero() {
        // Exceptional case: x1 = B / (Z A)
        b.clone() * &(z.clone() * a).inverse()?
    } else {
        -(b.clone() * &a.inverse()?) * &(F::one() + &tv1.inverse()?)
    };

    let g = |x: &F| x.square() * x + &(a.clone() * x) + b;

    let gx1 = g(&x1);
    let (x, mut y) = if gx1.is_square() {
        let y1 = gx1.sqrt()?;
        (x1, y1)
    } else {
        let x2 = z_u2 * &x1;
        let y2 = g(&x2).sqrt()?;
        (x2, y2)
    };

    if u.sgn0() != y.sgn0() {
        y = -y;
    }
    Ok((x, y))
}

/// Rational map `(x, y) -> (x_num / x_den, y * y_num / y_den)`.
///
/// Coefficients are listed lowest degree first; both denominators are monic and
/// their leading coefficient is left implicit.
#[derive(Debug)]
pub struct IsogenyMap<F> {
    pub x_num: Vec<F>,
    pub x_den: Vec<F>,
    pub y_num: Vec<F>,
    pub y_den: Vec<F>,
}

fn horner<F: Field>(coeffs: &[F], x: &F, monic: bool) -> F {
    let init = if monic { F::one() } else { F::zero() };
    coeffs
        .iter()
        .rev()
        .fold(init, |acc, c| acc * x + c)
}

impl<F: Field> IsogenyMap<F> {
    /// Applies the map; a vanishing denominator sends the point to the identity.
    pub fn apply(&self, x: &F, y: &F) -> Option<(F, F)> {
        let x_num = horner(&self.x_num, x, false);
        let x_den = horner(&self.x_den, x, true);
        let y_num = horner(&self.y_num, x, false);
        let y_den = horner(&self.y_den, x, true);

        let x_den_inv = x_den.inverse().ok()?;
        let y_den_inv = y_den.inverse().ok()?;
        Some((x_num * &x_den_inv, y.clone() * &y_num * &y_den_inv))
    }
}

/// A curve reachable by the SWU-plus-isogeny construction.
pub trait HashToCurveConfig: SWCurveConfig {
    fn sswu_params() -> &'static SSWUParams<Self::BaseField>;

    fn isogeny() -> &'static IsogenyMap<Self::BaseField>;

    /// Effective cofactor `h_eff` used by `clear_cofactor`.
    fn h_eff() -> &'static BigUint;
}

/// Maps one field element to the target curve, before cofactor clearing.
pub fn map_to_curve<P: HashToCurveConfig>(
    u: &P::BaseField,
) -> Result<Projective<P>, HashToCurveError> {
    let (x, y) = map_to_curve_sswu(P::sswu_params(), u)?;
    Ok(match P::isogeny().apply(&x, &y) {
        Some((x, y)) => Affine::new_unchecked(x, y).to_projective(),
        None => Projective::identity(),
    })
}

pub fn clear_cofactor<P: HashToCurveConfig>(point: &Projective<P>) -> Projective<P> {
    point.mul_bigint(P::h_eff())
}

/// `hash_to_curve` of RFC 9380 (the random-oracle encoding).
pub fn hash_to_curve<P: HashToCurveConfig>(
    msg: &[u8],
    dst: &[u8],
) -> Result<Projective<P>, HashToCurveError> {
    let u = hash_to_field::<P::BaseField>(msg, dst, 2)?;
    let q0 = map_to_curve::<P>(&u[0])?;
    let q1 = map_to_curve::<P>(&u[1])?;
    let point = clear_cofactor(&(q0 + &q1));

    tracing::trace!(
        curve = P::params().name(),
        identity = point.is_identity(),
        "hashed message to curve"
    );
    Ok(point)
}

/// `encode_to_curve` of RFC 9380 (the non-uniform encoding).
pub fn encode_to_curve<P: HashToCurveConfig>(
    msg: &[u8],
    dst: &[u8],
) -> Result<Projective<P>, HashToCurveError> {
    let u = hash_to_field::<P::BaseField>(msg, dst, 1)?;
    Ok(clear_cofactor(&map_to_curve::<P>(&u[0])?))
}

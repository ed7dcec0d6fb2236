use core::borrow::Borrow;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use field::Field;
use serde::{Deserialize, Serialize};

use crate::affine::Affine;
use crate::models::SWCurveConfig;
use crate::Group;

/// Jacobian point on a short Weierstrass curve.
/// Represents (X:Y:Z) with (x, y) = (X/Z^2, Y/Z^3).
/// The point at infinity is represented as (1:1:0).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Projective<P: SWCurveConfig> {
    pub x: P::BaseField,
    pub y: P::BaseField,
    pub z: P::BaseField,
}

impl<P: SWCurveConfig> Projective<P> {
    pub fn new(x: P::BaseField, y: P::BaseField, z: P::BaseField) -> Self {
        Projective { x, y, z }
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    pub fn from_affine(point: &Affine<P>) -> Self {
        if point.is_identity() {
            return <Self as Group>::identity();
        }
        Projective::new(point.x.clone(), point.y.clone(), P::BaseField::one())
    }

    /// Convert to affine coordinates.
    pub fn to_affine(&self) -> Affine<P> {
        match self.z.inverse() {
            Ok(z_inv) => {
                let z_inv2 = z_inv.square();
                let x = self.x.clone() * &z_inv2;
                let y = self.y.clone() * &(z_inv2 * &z_inv);
                Affine::new_unchecked(x, y)
            }
            Err(_) => Affine::identity(),
        }
    }

    /// Converts many points with a single field inversion (Montgomery's trick).
    pub fn batch_normalize(points: &[Self]) -> Vec<Affine<P>> {
        let mut prefix = Vec::with_capacity(points.len());
        let mut acc = P::BaseField::one();
        for p in points {
            prefix.push(acc.clone());
            if !p.is_infinity() {
                acc *= &p.z;
            }
        }

        let mut acc_inv = match acc.inverse() {
            Ok(inv) => inv,
            Err(_) => return points.iter().map(Self::to_affine).collect(),
        };

        let mut result = vec![Affine::identity(); points.len()];
        for (i, p) in points.iter().enumerate().rev() {
            if p.is_infinity() {
                continue;
            }
            let z_inv = acc_inv.clone() * &prefix[i];
            acc_inv *= &p.z;

            let z_inv2 = z_inv.square();
            let x = p.x.clone() * &z_inv2;
            let y = p.y.clone() * &(z_inv2 * &z_inv);
            result[i] = Affine::new_unchecked(x, y);
        }
        result
    }

    /// Check if a point is on the curve: Y^2 = X^3 + a*X*Z^4 + b*Z^6.
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity() {
            return true;
        }
        let z2 = self.z.square();
        let z4 = z2.square();
        let z6 = z4.clone() * &z2;
        let rhs = self.x.square() * &self.x
            + &(P::mul_by_a(&self.x) * &z4)
            + &(P::params().b().clone() * &z6);
        self.y.square() == rhs
    }

    /// Mixed addition with an affine point, `madd-2007-bl`.
    pub fn add_mixed(&self, other: &Affine<P>) -> Self {
        if other.is_identity() {
            return self.clone();
        }
        if self.is_infinity() {
            return Self::from_affine(other);
        }

        let z1z1 = self.z.square();
        let u2 = other.x.clone() * &z1z1;
        let s2 = other.y.clone() * &self.z * &z1z1;

        if u2 == self.x {
            return if s2 == self.y {
                self.double()
            } else {
                <Self as Group>::identity()
            };
        }

        let h = u2 - &self.x;
        let hh = h.square();
        let i = hh.double().double();
        let j = h.clone() * &i;
        let r = (s2 - &self.y).double();
        let v = self.x.clone() * &i;

        let x3 = r.square() - &j - &v.double();
        let y3 = r * &(v - &x3) - &(self.y.clone() * &j).double();
        let z3 = (self.z.clone() + &h).square() - &z1z1 - &hh;

        Projective::new(x3, y3, z3)
    }

    /// Multiplies by the curve cofactor.
    pub fn clear_cofactor(&self) -> Self {
        self.mul_bigint(P::params().cofactor())
    }
}

impl<P: SWCurveConfig> Default for Projective<P> {
    fn default() -> Self {
        <Self as Group>::identity()
    }
}

impl<P: SWCurveConfig> PartialEq for Projective<P> {
    /// Compares X1 Z2^2 = X2 Z1^2 and Y1 Z2^3 = Y2 Z1^3.
    fn eq(&self, other: &Self) -> bool {
        match (self.is_infinity(), other.is_infinity()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            (false, false) => {}
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();

        if self.x.clone() * &z2z2 != other.x.clone() * &z1z1 {
            return false;
        }
        self.y.clone() * &(z2z2 * &other.z) == other.y.clone() * &(z1z1 * &self.z)
    }
}

impl<P: SWCurveConfig> Eq for Projective<P> {}

impl<P: SWCurveConfig> Group for Projective<P> {
    type ScalarField = P::ScalarField;

    #[inline]
    fn identity() -> Self {
        Projective::new(
            P::BaseField::one(),
            P::BaseField::one(),
            P::BaseField::zero(),
        )
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity()
    }

    fn generator() -> Self {
        Self::from_affine(&Affine::generator())
    }

    /// `dbl-2007-bl`.
    fn double(&self) -> Self {
        if self.is_infinity() || self.y.is_zero() {
            return <Self as Group>::identity();
        }

        let xx = self.x.square();
        let yy = self.y.square();
        let yyyy = yy.square();
        let zz = self.z.square();

        let s = ((self.x.clone() + &yy).square() - &xx - &yyyy).double();
        let m = xx.double() + &xx + &P::mul_by_a(&zz.square());
        let t = m.square() - &s.double();

        let y3 = m * &(s - &t) - &yyyy.double().double().double();
        let z3 = (self.y.clone() + &self.z).square() - &yy - &zz;

        Projective::new(t, y3, z3)
    }

    fn negate(&self) -> Self {
        Projective::new(self.x.clone(), -self.y.clone(), self.z.clone())
    }

    fn is_well_formed(&self) -> bool {
        self.is_on_curve()
    }
}

impl<'a, P: SWCurveConfig> Add<&'a Self> for Projective<P> {
    type Output = Self;

    /// `add-2007-bl`; equal inputs are routed to doubling.
    fn add(self, other: &'a Self) -> Self {
        if self.is_infinity() {
            return other.clone();
        }
        if other.is_infinity() {
            return self;
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x.clone() * &z2z2;
        let u2 = other.x.clone() * &z1z1;
        let s1 = self.y.clone() * &other.z * &z2z2;
        let s2 = other.y.clone() * &self.z * &z1z1;

        if u1 == u2 {
            return if s1 == s2 {
                self.double()
            } else {
                <Self as Group>::identity()
            };
        }

        let h = u2 - &u1;
        let i = h.double().square();
        let j = h.clone() * &i;
        let r = (s2 - &s1).double();
        let v = u1 * &i;

        let x3 = r.square() - &j - &v.double();
        let y3 = r * &(v - &x3) - &(s1 * &j).double();
        let z3 = ((self.z.clone() + &other.z).square() - &z1z1 - &z2z2) * &h;

        Projective::new(x3, y3, z3)
    }
}

impl<P: SWCurveConfig> Add for Projective<P> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self + &other
    }
}

impl<'a, P: SWCurveConfig> Add<&'a Affine<P>> for Projective<P> {
    type Output = Self;

    fn add(self, other: &'a Affine<P>) -> Self {
        self.add_mixed(other)
    }
}

impl<P: SWCurveConfig> AddAssign for Projective<P> {
    fn add_assign(&mut self, other: Self) {
        *self = self.clone() + &other;
    }
}

impl<'a, P: SWCurveConfig> AddAssign<&'a Self> for Projective<P> {
    fn add_assign(&mut self, other: &'a Self) {
        *self = self.clone() + other;
    }
}

impl<'a, P: SWCurveConfig> AddAssign<&'a Affine<P>> for Projective<P> {
    fn add_assign(&mut self, other: &'a Affine<P>) {
        *self = self.add_mixed(other);
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl<P: SWCurveConfig> Sub for Projective<P> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + &other.negate()
    }
}

impl<P: SWCurveConfig> SubAssign for Projective<P> {
    fn sub_assign(&mut self, other: Self) {
        *self = self.clone() - other;
    }
}

impl<P: SWCurveConfig> Neg for Projective<P> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl<P: SWCurveConfig, T: Borrow<P::ScalarField>> Mul<T> for Projective<P> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        self.scalar_mul_windowed(scalar.borrow())
    }
}

impl<P: SWCurveConfig> From<Affine<P>> for Projective<P> {
    fn from(point: Affine<P>) -> Self {
        Projective::from_affine(&point)
    }
}

impl<P: SWCurveConfig> From<&Affine<P>> for Projective<P> {
    fn from(point: &Affine<P>) -> Self {
        Projective::from_affine(point)
    }
}

impl<P: SWCurveConfig> From<Projective<P>> for Affine<P> {
    fn from(point: Projective<P>) -> Self {
        point.to_affine()
    }
}

impl<P: SWCurveConfig> From<&Projective<P>> for Affine<P> {
    fn from(point: &Projective<P>) -> Self {
        point.to_affine()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bls12_381::{G1Projective, G2Projective};
    use crate::mnt4_298;
    use crate::CurveError;
    use field::bls12_381::Fr;
    use field::{FieldError, RandomField};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_infinity() {
        let inf = G1Projective::identity();
        assert!(inf.is_infinity());
        assert!(inf.is_on_curve());
        assert_eq!(inf.double(), inf);
    }

    #[test]
    fn test_conversion_affine_projective() {
        let affine = Affine::generator();
        let projective = G1Projective::from_affine(&affine);
        assert_eq!(projective.to_affine(), affine);
    }

    #[test]
    fn test_point_addition_with_infinity() {
        let g = G1Projective::generator();
        let inf = G1Projective::identity();

        assert_eq!(g.clone() + &inf, g);
        assert_eq!(inf.clone() + &g, g);
        assert_eq!(inf.clone() + &inf, inf);
    }

    #[test]
    fn test_point_doubling() {
        let g = G2Projective::generator();
        let g2 = g.double();

        assert!(g2.is_on_curve(), "Doubled point is not on the curve");
        assert_eq!(g.clone() + &g, g2);
    }

    #[test]
    fn test_point_negation() {
        let g = G1Projective::generator();
        let neg_g = g.negate();

        assert!(neg_g.is_on_curve());
        assert_eq!(g + neg_g, G1Projective::identity());
    }

    #[test]
    fn test_equality_is_coordinate_independent() {
        let g = G1Projective::generator();
        let lambda = field::bls12_381::Fq::from(7u64);
        let lambda2 = lambda.square();
        let scaled = G1Projective::new(
            g.x.clone() * &lambda2,
            g.y.clone() * &(lambda2 * &lambda),
            g.z.clone() * &lambda,
        );
        assert_eq!(scaled, g);
        assert_ne!(scaled, g.double());
    }

    #[test]
    fn test_mixed_addition_matches_full_addition() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = G1Projective::random(&mut rng);
        let b = G1Projective::random(&mut rng);
        let b_affine = b.to_affine();

        assert_eq!(a.add_mixed(&b_affine), a.clone() + &b);
        assert_eq!(a.add_mixed(&a.to_affine()), a.double());
        assert_eq!(a.add_mixed(&(-a.to_affine())), G1Projective::identity());
        assert_eq!(G1Projective::identity().add_mixed(&b_affine), b);
    }

    #[test]
    fn test_doubling_with_nonzero_a() {
        let g = mnt4_298::G1Projective::generator();
        let g2 = g.double();
        assert!(g2.is_on_curve());
        assert_eq!(g2, g.clone() + &g);
        assert_eq!(g.mul_u64(3), g2 + &g);
    }

    #[test]
    fn test_scalar_mul_variants_agree() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = G1Projective::generator();
        let s = Fr::random(&mut rng);

        let expected = g.scalar_mul(&s);
        assert_eq!(g.scalar_mul_windowed(&s), expected);
        for window in [2, 4, 5] {
            assert_eq!(g.scalar_mul_wnaf(&s, window).unwrap(), expected);
        }
        assert_eq!(g.clone() * &s, expected);
        assert!(expected.is_on_curve());
    }

    #[test]
    fn test_wnaf_window_out_of_range_is_an_error() {
        let g = G1Projective::generator();
        let s = Fr::from(7u64);
        assert_eq!(
            g.scalar_mul_wnaf(&s, 1),
            Err(CurveError::Field(FieldError::InvalidWindow(1)))
        );
        assert_eq!(
            g.scalar_mul_wnaf(&s, 33),
            Err(CurveError::Field(FieldError::InvalidWindow(33)))
        );
    }

    #[test]
    fn test_scalar_mul_zero_and_one() {
        let g = G1Projective::generator();
        assert_eq!(g.scalar_mul(&Fr::zero()), G1Projective::identity());
        assert_eq!(g.scalar_mul_wnaf(&Fr::zero(), 4).unwrap(), G1Projective::identity());
        assert_eq!(g.scalar_mul(&Fr::one()), g);
    }

    #[test]
    fn test_scalar_distributivity() {
        let g = G1Projective::generator();
        let a = Fr::from(3u64);
        let b = Fr::from(5u64);

        let left = g.scalar_mul(&(a.clone() + &b));
        let right = g.scalar_mul(&a) + g.scalar_mul(&b);
        assert_eq!(left, right);
    }

    #[test]
    fn test_generator_has_prime_order() {
        let g = G1Projective::generator();
        assert!(g.mul_bigint(G1Projective::order()).is_identity());
        assert!(g.is_in_prime_order_subgroup());
        assert!(G2Projective::generator().is_in_prime_order_subgroup());
    }

    #[test]
    fn test_batch_normalize() {
        let g = G1Projective::generator();
        let points = vec![
            g.mul_u64(1),
            G1Projective::identity(),
            g.mul_u64(3),
            g.mul_u64(4),
        ];

        let affine_points = G1Projective::batch_normalize(&points);

        assert_eq!(affine_points.len(), 4);
        for (proj, aff) in points.iter().zip(affine_points.iter()) {
            assert_eq!(proj.to_affine(), *aff);
        }
    }

    #[test]
    fn test_multi_scalar_mul() {
        let mut rng = StdRng::seed_from_u64(42);
        let points: Vec<G1Projective> = (0..5).map(|_| G1Projective::random(&mut rng)).collect();
        let scalars: Vec<Fr> = (0..5).map(|_| Fr::random(&mut rng)).collect();

        let expected = points
            .iter()
            .zip(scalars.iter())
            .fold(G1Projective::identity(), |acc, (p, s)| acc + p.scalar_mul(s));
        assert_eq!(G1Projective::multi_scalar_mul(&points, &scalars), expected);
    }

    #[test]
    #[should_panic(expected = "Points and scalars must have same length")]
    fn test_multi_scalar_mul_length_mismatch() {
        let points = vec![G1Projective::generator()];
        let scalars: Vec<u64> = vec![1, 2];
        G1Projective::multi_scalar_mul(&points, &scalars);
    }
}

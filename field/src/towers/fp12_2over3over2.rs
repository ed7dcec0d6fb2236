use core::marker::PhantomData;

use crate::cubic::CubicExtConfig;
use crate::quadratic::{QuadExtConfig, QuadExtField, QuadParams};
use crate::towers::fp2::{Fp2, Fp2Config};
use crate::towers::fp6_3over2::{Fp6, Fp6Config, Fp6ConfigWrapper};
use crate::traits::{ConfigBounds, Field};

type Fp2Of<P> = Fp2<<<P as Fp12Config>::Fp6Config as Fp6Config>::Fp2Config>;

/// `Fp12 = Fp6[w] / (w^2 - v)`, where `v` generates Fp6.
pub trait Fp12Config: ConfigBounds {
    type Fp6Config: Fp6Config;

    fn params() -> &'static QuadParams<Fp6<Self::Fp6Config>, Fp2Of<Self>>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fp12ConfigWrapper<P: Fp12Config>(PhantomData<P>);

impl<P: Fp12Config> QuadExtConfig for Fp12ConfigWrapper<P> {
    type BaseField = Fp6<P::Fp6Config>;
    type FrobCoeff = Fp2Of<P>;

    #[inline]
    fn nonresidue() -> &'static Self::BaseField {
        &P::params().nonresidue
    }

    #[inline]
    fn mul_base_field_by_nonresidue(fe: &Self::BaseField) -> Self::BaseField {
        fe.mul_by_root()
    }

    fn mul_base_field_by_frob_coeff(fe: &mut Self::BaseField, power: usize) {
        *fe = fe.mul_by_base_field(&P::params().frobenius_c1[power % 12]);
    }

    /// Granger–Scott squaring in the cyclotomic subgroup, viewing Fp12 as
    /// three copies of `Fp4 = Fp2[w^3]`.
    fn cyclotomic_square(fe: &QuadExtField<Self>) -> QuadExtField<Self> {
        let nr = Fp6ConfigWrapper::<P::Fp6Config>::mul_base_field_by_nonresidue;

        let fp4_square = |a: &Fp2Of<P>, b: &Fp2Of<P>| {
            let tmp = a.clone() * b;
            let t0 = (a.clone() + b) * &(a.clone() + &nr(b)) - &tmp - &nr(&tmp);
            (t0, tmp.double())
        };
        let triple_minus_double = |t: &Fp2Of<P>, z: &Fp2Of<P>| t.double() + t - &z.double();
        let triple_plus_double = |t: &Fp2Of<P>, z: &Fp2Of<P>| t.double() + t + &z.double();

        let (z0, z4, z3) = (&fe.c0.c0, &fe.c0.c1, &fe.c0.c2);
        let (z2, z1, z5) = (&fe.c1.c0, &fe.c1.c1, &fe.c1.c2);

        let (t0, t1) = fp4_square(z0, z1);
        let (t2, t3) = fp4_square(z2, z3);
        let (t4, t5) = fp4_square(z4, z5);

        let z0 = triple_minus_double(&t0, z0);
        let z1 = triple_plus_double(&t1, z1);
        let z2 = triple_plus_double(&nr(&t5), z2);
        let z3 = triple_minus_double(&t4, z3);
        let z4 = triple_minus_double(&t2, z4);
        let z5 = triple_plus_double(&t3, z5);

        QuadExtField::new(Fp6::new(z0, z4, z3), Fp6::new(z2, z1, z5))
    }
}

pub type Fp12<P> = QuadExtField<Fp12ConfigWrapper<P>>;

impl<P: Fp12Config> Fp12<P> {
    /// Multiplies by the sparse line `ell_0 + ell_vv v^2 + ell_vw v w`,
    /// non-zero in positions 0, 2 and 4 of the flattened tower.
    pub fn mul_by_024(&mut self, ell_0: &Fp2Of<P>, ell_vw: &Fp2Of<P>, ell_vv: &Fp2Of<P>) {
        let a0a0 = self.c0.mul_by_02(ell_0, ell_vv);
        let a1a1 = self.c1.mul_by_1(ell_vw);
        let line = Fp6::new(ell_0.clone(), ell_vw.clone(), ell_vv.clone());
        let c1 = (self.c0.clone() + &self.c1) * &line - &a0a0 - &a1a1;
        self.c0 = a0a0 + &a1a1.mul_by_root();
        self.c1 = c1;
    }

    /// Multiplies by the sparse line `ell_vw + ell_0 v w + ell_vv v^2 w`,
    /// non-zero in positions 0, 4 and 5 of the flattened tower.
    pub fn mul_by_045(&mut self, ell_0: &Fp2Of<P>, ell_vw: &Fp2Of<P>, ell_vv: &Fp2Of<P>) {
        let a0a0 = self.c0.mul_by_base_field(ell_vw);
        let a1a1 = self.c1.mul_by_12(ell_0, ell_vv);
        let line = Fp6::new(ell_vw.clone(), ell_0.clone(), ell_vv.clone());
        let c1 = (self.c0.clone() + &self.c1) * &line - &a0a0 - &a1a1;
        self.c0 = a0a0 + &a1a1.mul_by_root();
        self.c1 = c1;
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::bn254::{Fq12, Fq2, Fq6};
    use crate::{Field, RandomField};

    // Maps a random element into the cyclotomic subgroup: f^((p^6 - 1)(p^2 + 1)).
    fn cyclotomic_element(f: &Fq12) -> Fq12 {
        let easy = f.conjugate() * &f.inverse().unwrap();
        easy.frobenius_map(2) * &easy
    }

    #[test]
    fn test_cyclotomic_square_matches_square() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..4 {
            let f = cyclotomic_element(&Fq12::random(&mut rng));
            assert_eq!(f.cyclotomic_square(), f.square());
        }
    }

    #[test]
    fn test_cyclotomic_exp_matches_pow() {
        let mut rng = StdRng::seed_from_u64(42);
        let f = cyclotomic_element(&Fq12::random(&mut rng));
        let exp = BigUint::from(4965661367192848881u64);
        assert_eq!(f.cyclotomic_exp(&exp), f.pow(&exp));
    }

    #[test]
    fn test_unitary_inverse_in_cyclotomic_subgroup() {
        let mut rng = StdRng::seed_from_u64(42);
        let f = cyclotomic_element(&Fq12::random(&mut rng));
        assert_eq!(f.unitary_inverse(), f.inverse().unwrap());
    }

    #[test]
    fn test_sparse_line_products_match_full_multiplication() {
        let mut rng = StdRng::seed_from_u64(42);
        let f = Fq12::random(&mut rng);
        let a = Fq2::random(&mut rng);
        let b = Fq2::random(&mut rng);
        let c = Fq2::random(&mut rng);
        let zero = Fq2::zero();

        let line_024 = Fq12::new(
            Fq6::new(a.clone(), zero.clone(), c.clone()),
            Fq6::new(zero.clone(), b.clone(), zero.clone()),
        );
        let mut sparse = f.clone();
        sparse.mul_by_024(&a, &b, &c);
        assert_eq!(sparse, f.clone() * &line_024);

        let line_045 = Fq12::new(
            Fq6::new(a.clone(), zero.clone(), zero.clone()),
            Fq6::new(zero, b.clone(), c.clone()),
        );
        let mut sparse = f.clone();
        sparse.mul_by_045(&b, &a, &c);
        assert_eq!(sparse, f * &line_045);
    }
}

use num_bigint::BigUint;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{Field, FieldError, PrimeField, RandomField};

fn nonzero<F: Field>(rng: &mut StdRng) -> F {
    loop {
        let x = F::random(rng);
        if !x.is_zero() {
            return x;
        }
    }
}

fn non_square<F: Field>(rng: &mut StdRng) -> F {
    loop {
        let x = F::random(rng);
        if !x.is_square() {
            return x;
        }
    }
}

macro_rules! field_tests {
    ($mod_name:ident, $field:ty) => {
        mod $mod_name {
            use super::*;

            type F = $field;

            proptest! {
                #![proptest_config(ProptestConfig::with_cases(16))]

                #[test]
                fn prop_ring_axioms(seed in any::<u64>()) {
                    let mut rng = StdRng::seed_from_u64(seed);
                    let a = F::random(&mut rng);
                    let b = F::random(&mut rng);
                    let c = F::random(&mut rng);

                    prop_assert_eq!(a.clone() + &b, b.clone() + &a);
                    prop_assert_eq!(a.clone() * &b, b.clone() * &a);
                    prop_assert_eq!((a.clone() + &b) + &c, a.clone() + &(b.clone() + &c));
                    prop_assert_eq!((a.clone() * &b) * &c, a.clone() * &(b.clone() * &c));
                    prop_assert_eq!(
                        a.clone() * &(b.clone() + &c),
                        a.clone() * &b + &(a.clone() * &c)
                    );
                    prop_assert_eq!(a.clone() - &a, F::zero());
                    prop_assert_eq!(a.clone() + &(-a.clone()), F::zero());
                    prop_assert_eq!(a.square(), a.clone() * &a);
                    prop_assert_eq!(a.double(), a.clone() + &a);
                }

                #[test]
                fn prop_inverse(seed in any::<u64>()) {
                    let mut rng = StdRng::seed_from_u64(seed);
                    let a: F = nonzero(&mut rng);
                    let inv = a.inverse().unwrap();
                    prop_assert!((a * &inv).is_one());
                }
            }

            #[test]
            fn test_zero_has_no_inverse() {
                assert_eq!(F::zero().inverse(), Err(FieldError::ZeroInverse));
            }

            #[test]
            fn test_one_and_zero() {
                assert!(F::one().is_one());
                assert!(F::zero().is_zero());
                assert!(!F::one().is_zero());
                assert_eq!(F::default(), F::zero());
            }

            #[test]
            fn test_frobenius_is_power_of_characteristic() {
                let mut rng = StdRng::seed_from_u64(42);
                let a = F::random(&mut rng);
                assert_eq!(a.frobenius_map(1), a.pow(F::characteristic()));

                let mut iterated = a.clone();
                for k in 1..=F::extension_degree().min(3) {
                    iterated = iterated.frobenius_map(1);
                    assert_eq!(iterated, a.frobenius_map(k));
                }
                assert_eq!(a.frobenius_map(F::extension_degree()), a);
            }

            #[test]
            fn test_sqrt() {
                let mut rng = StdRng::seed_from_u64(42);
                let a = F::random(&mut rng);
                let square = a.square();
                assert!(square.is_square());
                let root = square.sqrt().unwrap();
                assert_eq!(root.square(), square);

                let n: F = non_square(&mut rng);
                assert_eq!(n.sqrt(), Err(FieldError::NonSquare));
                assert_eq!(F::zero().sqrt(), Ok(F::zero()));
            }

            #[test]
            fn test_prime_field_coefficients() {
                let mut rng = StdRng::seed_from_u64(42);
                let a = F::random(&mut rng);
                let elems = a.to_base_prime_field_elems();
                assert_eq!(elems.len(), F::extension_degree());
                assert_eq!(F::from_base_prime_field_elems(&elems), Some(a.clone()));
                assert_eq!(F::from_base_prime_field_elems(&elems[1..]), None);

                let scalar = elems[0].clone();
                assert_eq!(
                    a.mul_by_base_prime_field(&scalar),
                    a * &F::from_base_prime_field(scalar)
                );
            }

            #[test]
            fn test_byte_round_trip() {
                let mut rng = StdRng::seed_from_u64(42);
                let a = F::random(&mut rng);
                let bytes = a.to_bytes();
                assert_eq!(bytes.len(), F::serialized_size());
                assert_eq!(F::from_bytes(&bytes), Ok(a));
                assert_eq!(
                    F::from_bytes(&bytes[1..]),
                    Err(FieldError::InvalidLength {
                        expected: bytes.len(),
                        found: bytes.len() - 1,
                    })
                );
            }

            #[test]
            fn test_bincode_round_trip() {
                let mut rng = StdRng::seed_from_u64(42);
                let a = F::random(&mut rng);
                let encoded = bincode::serialize(&a).unwrap();
                let decoded: F = bincode::deserialize(&encoded).unwrap();
                assert_eq!(decoded, a);
            }
        }
    };
}

field_tests!(bn254_fq, crate::bn254::Fq);
field_tests!(bn254_fr, crate::bn254::Fr);
field_tests!(bn254_fq2, crate::bn254::Fq2);
field_tests!(bn254_fq6, crate::bn254::Fq6);
field_tests!(bn254_fq12, crate::bn254::Fq12);
field_tests!(bls12_381_fq, crate::bls12_381::Fq);
field_tests!(bls12_381_fr, crate::bls12_381::Fr);
field_tests!(bls12_381_fq2, crate::bls12_381::Fq2);
field_tests!(bls12_381_fq12, crate::bls12_381::Fq12);
field_tests!(bls12_377_fq, crate::bls12_377::Fq);
field_tests!(bls12_377_fq2, crate::bls12_377::Fq2);
field_tests!(bls12_377_fq12, crate::bls12_377::Fq12);
field_tests!(mnt4_298_fq2, crate::mnt4_298::Fq2);
field_tests!(mnt4_298_fq4, crate::mnt4_298::Fq4);
field_tests!(mnt6_298_fq3, crate::mnt6_298::Fq3);
field_tests!(mnt6_298_fq6, crate::mnt6_298::Fq6);
field_tests!(edwards183_fq, crate::edwards183::Fq);
field_tests!(edwards183_fq3, crate::edwards183::Fq3);
field_tests!(edwards183_fq6, crate::edwards183::Fq6);

#[test]
fn test_fermat_little_theorem() {
    use crate::bls12_381::Fq;

    let mut rng = StdRng::seed_from_u64(42);
    let a = Fq::random(&mut rng);
    assert_eq!(a.pow(Fq::modulus()), a);
}

#[test]
fn test_tonelli_shanks_on_highly_two_adic_field() {
    use crate::bls12_377::{Fq, FqConfig};
    use crate::FpConfig;

    // p - 1 is divisible by 2^46, so the (p + 1) / 4 shortcut does not apply.
    assert_eq!(FqConfig::params().two_adicity(), 46);
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..4 {
        let square = Fq::random(&mut rng).square();
        assert_eq!(square.sqrt().unwrap().square(), square);
    }
}

#[test]
fn test_non_canonical_bytes_rejected() {
    use crate::bn254::Fq;

    let bytes = Fq::modulus().to_bytes_be();
    assert_eq!(Fq::from_bytes(&bytes), Err(FieldError::NonCanonical));
}

#[test]
fn test_reduction_on_construction() {
    use crate::bn254::Fq;

    let above = Fq::modulus() + BigUint::from(5u32);
    assert_eq!(Fq::from_biguint(&above), Fq::from(5u64));
    assert_eq!(Fq::from_be_bytes_mod_order(&above.to_bytes_be()), Fq::from(5u64));
}

#[test]
fn test_sgn0() {
    use crate::bls12_381::{Fq, Fq2};

    assert!(!Fq::zero().sgn0());
    assert!(Fq::one().sgn0());
    assert!(!Fq::from(2u64).sgn0());
    assert!(Fq2::new(Fq::zero(), Fq::one()).sgn0());
    assert!(!Fq2::new(Fq::from(2u64), Fq::one()).sgn0());
}

#[test]
fn test_norm_of_extension_element() {
    use crate::mnt6_298::{Fq, Fq3};

    let mut rng = StdRng::seed_from_u64(42);
    let a = Fq3::random(&mut rng);
    // The norm is the product of the Galois conjugates.
    let product = a.clone() * &a.frobenius_map(1) * &a.frobenius_map(2);
    assert_eq!(Fq3::from_base_prime_field(a.norm()), product);
    assert_eq!(Fq::from(7u64).norm(), Fq::from(7u64));
}

mod nonresidues {
    use super::*;

    fn is_cube<F: Field>(x: &F) -> bool {
        let exp: BigUint = (F::order() - 1u32) / 3u32;
        x.pow(&exp).is_one()
    }

    #[test]
    fn test_bn254_tower_polynomials_irreducible() {
        use crate::bn254::{fq6_nonresidue, Fq, Fq2, Fq6};

        assert!(!(-Fq::one()).is_square());
        assert!(!is_cube(&fq6_nonresidue()));
        assert!(!Fq6::new(Fq2::zero(), Fq2::one(), Fq2::zero()).is_square());
    }

    #[test]
    fn test_bls12_381_tower_polynomials_irreducible() {
        use crate::bls12_381::{fq6_nonresidue, Fq, Fq2, Fq6};

        assert!(!(-Fq::one()).is_square());
        assert!(!is_cube(&fq6_nonresidue()));
        assert!(!Fq6::new(Fq2::zero(), Fq2::one(), Fq2::zero()).is_square());
    }

    #[test]
    fn test_bls12_377_tower_polynomials_irreducible() {
        use crate::bls12_377::{fq6_nonresidue, Fq, Fq2, Fq6};

        assert!(!(-Fq::from(5u64)).is_square());
        assert!(!is_cube(&fq6_nonresidue()));
        assert!(!Fq6::new(Fq2::zero(), Fq2::one(), Fq2::zero()).is_square());
    }

    #[test]
    fn test_mnt_tower_polynomials_irreducible() {
        use crate::{mnt4_298, mnt6_298};

        assert!(!mnt4_298::Fq::from(17u64).is_square());
        assert!(!mnt4_298::Fq2::new(mnt4_298::Fq::zero(), mnt4_298::Fq::one()).is_square());
        assert!(!is_cube(&mnt6_298::Fq::from(5u64)));
        let x = mnt6_298::Fq3::new(mnt6_298::Fq::zero(), mnt6_298::Fq::one(), mnt6_298::Fq::zero());
        assert!(!x.is_square());
    }

    #[test]
    fn test_edwards183_tower_polynomials_irreducible() {
        use crate::edwards183::{Fq, Fq3};

        assert!(!is_cube(&Fq::from(61u64)));
        assert!(!Fq3::new(Fq::zero(), Fq::one(), Fq::zero()).is_square());
    }
}

#[test]
fn test_derived_frobenius_coefficient() {
    use crate::bn254::{Fq, Fq2, Fq6};

    let mut rng = StdRng::seed_from_u64(42);
    let a = Fq6::new(Fq2::zero(), Fq2::one(), Fq2::zero());
    let expected = Fq2::new(
        Fq::from_literal(
            "21575463638280843010398324269430826099269044274347216827212613867836435027261",
        ),
        Fq::from_literal(
            "10307601595873709700152284273816112264069230130616436755625194854815875713954",
        ),
    );
    assert_eq!(a.frobenius_map(1).c1, expected);

    let b = Fq6::random(&mut rng);
    assert_eq!(b.frobenius_map(6), b);
}

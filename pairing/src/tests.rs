use super::*;
use curve::bls12_381::{Fr, G1Projective, G2Projective};
use curve::Group;
use field::{Field, PrimeField, RandomField};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::bls12_381::Bls12_381;

/// Checks `e(sP, Q) = e(P, sQ) = e(P, Q)^s`, `e(P, Q) != 1` and `e(P, Q)^r = 1`.
pub(crate) fn assert_bilinear<P: PairingConfig>(
    p: &P::G1Affine,
    q: &P::G2Affine,
    s_p: &P::G1Affine,
    s_q: &P::G2Affine,
    s: &BigUint,
    order: &BigUint,
) {
    let e = Pairing::<P>::pair_reduced(p, q).expect("pair");
    let e_sp = Pairing::<P>::pair_reduced(s_p, q).expect("pair sP");
    let e_sq = Pairing::<P>::pair_reduced(p, s_q).expect("pair sQ");

    assert!(!e.is_one());
    assert!(e.pow(order).is_one());
    assert_eq!(e_sp, e_sq);
    assert_eq!(e_sp, e.pow(s));
}

/// The shared loop equals the product of two separate Miller loops.
pub(crate) fn assert_double_miller_loop<P: PairingConfig>(
    p1: &P::G1Affine,
    q1: &P::G2Affine,
    p2: &P::G1Affine,
    q2: &P::G2Affine,
) {
    let a1 = Pairing::<P>::prepare_g1(p1).expect("prepare p1");
    let b1 = Pairing::<P>::prepare_g2(q1).expect("prepare q1");
    let a2 = Pairing::<P>::prepare_g1(p2).expect("prepare p2");
    let b2 = Pairing::<P>::prepare_g2(q2).expect("prepare q2");

    let shared = Pairing::<P>::double_miller_loop((&a1, &b1), (&a2, &b2)).expect("double loop");
    let separate = Pairing::<P>::miller_loop(&a1, &b1).expect("loop 1")
        * &Pairing::<P>::miller_loop(&a2, &b2).expect("loop 2");
    assert_eq!(shared, separate);
}

/// The final exponentiation equals raising `f` to `multiplier (p^k - 1) / r`.
pub(crate) fn assert_final_exponentiation_is_power<P: PairingConfig>(
    f: &P::TargetField,
    order: &BigUint,
    multiplier: &BigUint,
) {
    let degree = P::TargetField::extension_degree() as u32;
    let group_order = P::TargetField::characteristic().pow(degree) - 1u32;
    assert_eq!(&group_order % order, BigUint::from(0u32));

    let exponent = group_order / order * multiplier;
    let reduced = Pairing::<P>::final_exponentiation(f).expect("final exponentiation");
    assert_eq!(reduced, f.pow(&exponent));
}

#[test]
fn test_bls12_381_bilinearity_survives_serialization() {
    let mut rng = StdRng::seed_from_u64(42);
    let p = G1Projective::random(&mut rng).to_affine();
    let q = G2Projective::random(&mut rng).to_affine();
    let s = Fr::random(&mut rng);

    let s_p = p.to_projective().scalar_mul(&s).to_affine();
    let lhs = Bls12_381::pair_reduced(&s_p, &q).expect("pair sP");

    let p = curve::bls12_381::G1Affine::from_bytes(&p.to_bytes()).expect("decode P");
    let q: curve::bls12_381::G2Affine =
        bincode::deserialize(&bincode::serialize(&q).expect("encode Q")).expect("decode Q");
    let rhs = Bls12_381::pair_reduced(&p, &q).expect("pair").pow(s.value());

    let lhs_bytes = lhs.to_bytes();
    let restored = <Bls12_381Target as Field>::from_bytes(&lhs_bytes).expect("decode target");
    assert_eq!(restored.to_bytes(), rhs.to_bytes());

    let via_bincode: Bls12_381Target =
        bincode::deserialize(&bincode::serialize(&rhs).expect("encode target"))
            .expect("decode target");
    assert_eq!(via_bincode, lhs);
}

type Bls12_381Target = field::bls12_381::Fq12;

#[test]
fn test_pairing_of_negated_point_is_inverse() {
    let p = curve::bls12_381::G1Affine::generator();
    let q = curve::bls12_381::G2Affine::generator();
    let e = Bls12_381::pair_reduced(&p, &q).expect("pair");
    let e_neg = Bls12_381::pair_reduced(&-p.clone(), &q).expect("pair -P");
    assert!((e * &e_neg).is_one());
}

#[test]
fn test_double_miller_loop_checks_product_of_pairings() {
    // e(P, Q) * e(-P, Q) = 1 is the usual signature-verification shape.
    let p = curve::bls12_381::G1Affine::generator();
    let q = curve::bls12_381::G2Affine::generator();
    let a = Bls12_381::prepare_g1(&p).expect("prepare P");
    let neg_a = Bls12_381::prepare_g1(&-p).expect("prepare -P");
    let b = Bls12_381::prepare_g2(&q).expect("prepare Q");

    let f = Bls12_381::double_miller_loop((&a, &b), (&neg_a, &b)).expect("double loop");
    assert!(Bls12_381::final_exponentiation(&f).expect("final exp").is_one());
}

#[test]
fn test_target_order_matches_scalar_field() {
    let e = Bls12_381::pair_reduced(
        &curve::bls12_381::G1Affine::generator(),
        &curve::bls12_381::G2Affine::generator(),
    )
    .expect("pair");
    assert!(e.pow(Fr::modulus()).is_one());
}

use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::errors::FieldError;
use crate::random::RandomField;
use crate::traits::Field;

// Fixed so that the non-residue search is reproducible across calls.
const NONRESIDUE_SEARCH_SEED: u64 = 0x7175_6164_7265_7321;

/// Finds a quadratic non-residue by deterministic sampling.
fn find_nonresidue<F: Field>() -> F {
    let mut rng = StdRng::seed_from_u64(NONRESIDUE_SEARCH_SEED);
    loop {
        let candidate = F::random(&mut rng);
        if !candidate.is_square() {
            return candidate;
        }
    }
}

/// Tonelli–Shanks over a field of arbitrary order `q`.
pub(crate) fn tonelli_shanks<F: Field>(a: &F) -> Result<F, FieldError> {
    if a.is_zero() {
        return Ok(F::zero());
    }
    if !a.is_square() {
        return Err(FieldError::NonSquare);
    }

    // q - 1 = 2^s * t with t odd
    let q_minus_one = F::order() - 1u32;
    let s = q_minus_one.trailing_zeros().unwrap_or(0);
    let t: BigUint = &q_minus_one >> s;

    let mut m = s;
    let mut c = find_nonresidue::<F>().pow(&t);
    let mut tt = a.pow(&t);
    let mut r = a.pow(&((&t + 1u32) >> 1u32));

    while !tt.is_one() {
        // Least i with tt^(2^i) = 1
        let mut i = 0;
        let mut t_pow = tt.clone();
        while !t_pow.is_one() {
            t_pow = t_pow.square();
            i += 1;
            if i == m {
                return Err(FieldError::NonSquare);
            }
        }

        let mut b = c;
        for _ in 0..(m - i - 1) {
            b = b.square();
        }
        m = i;
        c = b.square();
        tt *= &c;
        r *= &b;
    }

    Ok(r)
}

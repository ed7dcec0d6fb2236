use num_bigint::BigUint;

use crate::group::{Group, ScalarBits};

fn window_size(num_points: usize) -> usize {
    if num_points < 32 {
        3
    } else {
        // ln(n) * 0.69 + 2 is close to optimal for the bucket method.
        ((num_points as f64).ln() * 0.69) as usize + 2
    }
}

fn window_digit(scalar: &BigUint, start: u64, width: usize) -> usize {
    let shifted: BigUint = scalar >> start;
    let low = shifted.iter_u64_digits().next().unwrap_or(0);
    (low & ((1u64 << width) - 1)) as usize
}

/// Pippenger bucket method: `sum_i scalars[i] * points[i]`.
pub fn bucket_msm<G: Group, S: ScalarBits>(points: &[G], scalars: &[S]) -> G {
    let scalars: Vec<BigUint> = scalars.iter().map(ScalarBits::to_biguint).collect();
    let max_bits = scalars.iter().map(BigUint::bits).max().unwrap_or(0);
    if max_bits == 0 {
        return G::identity();
    }

    let c = window_size(points.len());
    let num_windows = max_bits.div_ceil(c as u64);

    let mut result = G::identity();
    for w in (0..num_windows).rev() {
        for _ in 0..c {
            result = result.double();
        }

        let mut buckets = vec![G::identity(); (1 << c) - 1];
        for (point, scalar) in points.iter().zip(scalars.iter()) {
            let digit = window_digit(scalar, w * c as u64, c);
            if digit != 0 {
                buckets[digit - 1] += point;
            }
        }

        // sum_j j * bucket_j via running sums
        let mut running = G::identity();
        let mut window_sum = G::identity();
        for bucket in buckets.into_iter().rev() {
            running += bucket;
            window_sum += &running;
        }
        result += window_sum;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bn254::G1Projective;
    use field::bn254::Fr;
    use field::RandomField;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn naive<G: Group, S: ScalarBits>(points: &[G], scalars: &[S]) -> G {
        points
            .iter()
            .zip(scalars.iter())
            .fold(G::identity(), |acc, (p, s)| acc + p.scalar_mul(s))
    }

    #[test]
    fn test_bucket_msm_matches_naive() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in [1usize, 4, 40] {
            let points: Vec<G1Projective> =
                (0..n).map(|_| G1Projective::random(&mut rng)).collect();
            let scalars: Vec<Fr> = (0..n).map(|_| Fr::random(&mut rng)).collect();
            assert_eq!(bucket_msm(&points, &scalars), naive(&points, &scalars));
        }
    }

    #[test]
    fn test_bucket_msm_small_scalars() {
        let g = G1Projective::generator();
        let points = vec![g.clone(), g.double(), g.mul_u64(5)];
        let scalars = vec![3u64, 0, 7];
        assert_eq!(bucket_msm(&points, &scalars), g.mul_u64(38));
        assert_eq!(bucket_msm(&points, &[0u64, 0, 0]), G1Projective::identity());
        assert_eq!(
            bucket_msm::<G1Projective, u64>(&[], &[]),
            G1Projective::identity()
        );
    }
}

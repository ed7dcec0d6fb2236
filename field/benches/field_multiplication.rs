use criterion::{black_box, criterion_group, criterion_main, Criterion};
use field::{bls12_381, bn254, mnt6_298, Field, RandomField};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_bn254_fq_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = bn254::Fq::random(&mut rng);
    let b = bn254::Fq::random(&mut rng);
    c.bench_function("bn254_fq_mul", |bencher| {
        bencher.iter(|| black_box(black_box(&a) * black_box(&b)))
    });
}

fn bench_bn254_fq12_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = bn254::Fq12::random(&mut rng);
    let b = bn254::Fq12::random(&mut rng);
    c.bench_function("bn254_fq12_mul", |bencher| {
        bencher.iter(|| black_box(black_box(&a) * black_box(&b)))
    });
}

fn bench_bls12_381_fq12_square(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = bls12_381::Fq12::random(&mut rng);
    c.bench_function("bls12_381_fq12_square", |bencher| {
        bencher.iter(|| black_box(black_box(&a).square()))
    });
}

fn bench_bls12_381_fq12_inverse(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = bls12_381::Fq12::random(&mut rng);
    c.bench_function("bls12_381_fq12_inverse", |bencher| {
        bencher.iter(|| black_box(black_box(&a).inverse()))
    });
}

fn bench_mnt6_fq6_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = mnt6_298::Fq6::random(&mut rng);
    let b = mnt6_298::Fq6::random(&mut rng);
    c.bench_function("mnt6_298_fq6_mul", |bencher| {
        bencher.iter(|| black_box(black_box(&a) * black_box(&b)))
    });
}

criterion_group!(
    benches,
    bench_bn254_fq_mul,
    bench_bn254_fq12_mul,
    bench_bls12_381_fq12_square,
    bench_bls12_381_fq12_inverse,
    bench_mnt6_fq6_mul
);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{bls12_381, bn254, edwards183, mnt6_298};
use pairing::bls12_381::Bls12_381;
use pairing::bn254::Bn254;
use pairing::edwards183::{Edwards183, Edwards183Tate};
use pairing::mnt6_298::{Mnt6_298, Mnt6_298Affine};

fn bench_bls12_381(c: &mut Criterion) {
    let p = bls12_381::G1Affine::generator();
    let q = bls12_381::G2Affine::generator();
    let p_prepared = Bls12_381::prepare_g1(&p).unwrap();
    let q_prepared = Bls12_381::prepare_g2(&q).unwrap();
    let f = Bls12_381::miller_loop(&p_prepared, &q_prepared).unwrap();

    let mut group = c.benchmark_group("bls12_381");
    group.bench_function("prepare_g2", |bencher| {
        bencher.iter(|| black_box(Bls12_381::prepare_g2(black_box(&q)).unwrap()))
    });
    group.bench_function("miller_loop", |bencher| {
        bencher.iter(|| {
            let f = Bls12_381::miller_loop(black_box(&p_prepared), black_box(&q_prepared));
            black_box(f.unwrap())
        })
    });
    group.bench_function("double_miller_loop", |bencher| {
        bencher.iter(|| {
            black_box(
                Bls12_381::double_miller_loop(
                    (black_box(&p_prepared), black_box(&q_prepared)),
                    (black_box(&p_prepared), black_box(&q_prepared)),
                )
                .unwrap(),
            )
        })
    });
    group.bench_function("final_exponentiation", |bencher| {
        bencher.iter(|| black_box(Bls12_381::final_exponentiation(black_box(&f)).unwrap()))
    });
    group.bench_function("pair_reduced", |bencher| {
        bencher.iter(|| black_box(Bls12_381::pair_reduced(black_box(&p), black_box(&q)).unwrap()))
    });
    group.finish();
}

fn bench_bn254(c: &mut Criterion) {
    let p = bn254::G1Affine::generator();
    let q = bn254::G2Affine::generator();
    c.bench_function("bn254_pair_reduced", |bencher| {
        bencher.iter(|| black_box(Bn254::pair_reduced(black_box(&p), black_box(&q)).unwrap()))
    });
}

fn bench_mnt6_298(c: &mut Criterion) {
    let p = mnt6_298::G1Affine::generator();
    let q = mnt6_298::G2Affine::generator();
    c.bench_function("mnt6_298_pair_reduced", |bencher| {
        bencher.iter(|| black_box(Mnt6_298::pair_reduced(black_box(&p), black_box(&q)).unwrap()))
    });
    c.bench_function("mnt6_298_affine_pair_reduced", |bencher| {
        bencher.iter(|| {
            black_box(Mnt6_298Affine::pair_reduced(black_box(&p), black_box(&q)).unwrap())
        })
    });
}

fn bench_edwards183(c: &mut Criterion) {
    let p = edwards183::G1Affine::generator();
    let q = edwards183::G2Affine::generator();
    c.bench_function("edwards183_ate_pair_reduced", |bencher| {
        bencher.iter(|| black_box(Edwards183::pair_reduced(black_box(&p), black_box(&q)).unwrap()))
    });
    c.bench_function("edwards183_tate_pair_reduced", |bencher| {
        bencher.iter(|| {
            black_box(Edwards183Tate::pair_reduced(black_box(&p), black_box(&q)).unwrap())
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_bls12_381, bench_bn254, bench_mnt6_298, bench_edwards183
}
criterion_main!(benches);

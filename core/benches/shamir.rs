use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigUint;
use sharedsecret::SharedSecret;

const SECRET: u64 = 120398491412912873;

fn bench_split(c: &mut Criterion) {
    let scheme = SharedSecret::default();
    let secret = BigUint::from(SECRET);
    let mut group = c.benchmark_group("split_given_secret");
    for (n, k) in [(5, 3), (20, 10), (100, 50)] {
        let id = BenchmarkId::from_parameter(format!("{n}-of-{k}"));
        group.bench_with_input(id, &(n, k), |b, &(n, k)| {
            let mut rng = rand::thread_rng();
            b.iter(|| {
                let shares = scheme
                    .split_given_secret(black_box(&secret), n, k, &mut rng)
                    .expect("split succeeds");
                black_box(shares);
            });
        });
    }
    group.finish();
}

fn bench_recover(c: &mut Criterion) {
    let scheme = SharedSecret::default();
    let mut group = c.benchmark_group("recover");
    for k in [3, 10, 50] {
        let (shares, _) = scheme
            .split(k, k, &mut rand::thread_rng())
            .expect("split succeeds");
        group.bench_with_input(BenchmarkId::from_parameter(k), &shares, |b, shares| {
            b.iter(|| {
                let secret = scheme.recover(black_box(shares)).expect("recover succeeds");
                black_box(secret);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_split, bench_recover);
criterion_main!(benches);

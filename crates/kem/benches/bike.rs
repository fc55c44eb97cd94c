//! Benchmarks for the BIKE-1 key encapsulation mechanism

use bike_api::Kem;
use bike_kem::bike::decoder::{compute_syndrome, decode};
use bike_kem::{Bike1L1, Bike1L3, Bike1L5};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

/// Key generation, encapsulation and decapsulation for one level
fn bench_level<K: Kem>(c: &mut Criterion, label: &str) {
    let mut group = c.benchmark_group(label);
    group.sample_size(10);
    let mut rng = ChaChaRng::seed_from_u64(42);

    group.bench_function("keygen", |b| {
        b.iter(|| {
            let _keypair = K::keypair(&mut rng).unwrap();
        });
    });

    let keypair = K::keypair(&mut rng).unwrap();
    let pk = K::public_key(&keypair);
    let sk = K::secret_key(&keypair);

    group.bench_function("encapsulate", |b| {
        b.iter(|| {
            let (_ct, _ss) = K::encapsulate(&mut rng, black_box(&pk)).unwrap();
        });
    });

    let (ct, _) = K::encapsulate(&mut rng, &pk).unwrap();

    group.bench_function("decapsulate", |b| {
        b.iter(|| {
            let _ss = K::decapsulate(black_box(&sk), black_box(&ct)).unwrap();
        });
    });

    group.finish();
}

fn bench_bike1_l1(c: &mut Criterion) {
    bench_level::<Bike1L1>(c, "BIKE-1-L1");
}

fn bench_bike1_l3(c: &mut Criterion) {
    bench_level::<Bike1L3>(c, "BIKE-1-L3");
}

fn bench_bike1_l5(c: &mut Criterion) {
    bench_level::<Bike1L5>(c, "BIKE-1-L5");
}

/// The decoder alone, on a valid level 1 ciphertext
fn bench_decoder(c: &mut Criterion) {
    let mut rng = ChaChaRng::seed_from_u64(7);
    let (pk, sk) = Bike1L1::keypair(&mut rng).unwrap();
    let (ct, _) = Bike1L1::encapsulate(&mut rng, &pk).unwrap();
    let syndrome = compute_syndrome(&ct, &sk).unwrap();

    let mut group = c.benchmark_group("BIKE-1-L1 decoder");
    group.sample_size(10);
    group.bench_function("syndrome", |b| {
        b.iter(|| black_box(compute_syndrome(black_box(&ct), &sk).unwrap()));
    });
    group.bench_function("black_gray_flip", |b| {
        b.iter(|| black_box(decode(black_box(&syndrome), &ct, &sk).unwrap()));
    });
    group.finish();
}

criterion_group!(benches, bench_bike1_l1, bench_bike1_l3, bench_bike1_l5, bench_decoder);
criterion_main!(benches);

//! # Uniqueness Filter Benchmarks
//!
//! | Operation | Claim |
//! |-----------|-------|
//! | insert | O(k) |
//! | contains | O(k), early exit on first unset bit |
//! | classify | O(k) per candidate |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use uniqueness_filter::{classify, BloomFilter};

fn random_passwords(seed: u64, count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (&mut rng).sample_iter(&Alphanumeric).take(14).map(char::from).collect())
        .collect()
}

fn bench_insert_and_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("membership-filter");
    let passwords = random_passwords(1, 1_000);

    for k in [1usize, 5, 10] {
        group.throughput(Throughput::Elements(passwords.len() as u64));

        group.bench_with_input(BenchmarkId::new("insert", k), &k, |b, &k| {
            b.iter(|| {
                let mut filter = BloomFilter::new(100_000, k).unwrap();
                for pw in &passwords {
                    filter.insert(black_box(pw));
                }
                filter
            })
        });

        let mut filter = BloomFilter::new(100_000, k).unwrap();
        for pw in &passwords {
            filter.insert(pw);
        }
        let queries = random_passwords(2, 1_000);

        group.bench_with_input(BenchmarkId::new("contains_miss", k), &k, |b, _| {
            b.iter(|| queries.iter().filter(|p| filter.contains(black_box(*p))).count())
        });

        group.bench_with_input(BenchmarkId::new("contains_constant_time", k), &k, |b, _| {
            b.iter(|| {
                queries
                    .iter()
                    .filter(|p| filter.contains_constant_time(black_box(*p)))
                    .count()
            })
        });
    }

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");
    let candidates = random_passwords(3, 10_000);

    group.throughput(Throughput::Elements(candidates.len() as u64));
    group.bench_function("classify_10k", |b| {
        b.iter(|| {
            let mut filter = BloomFilter::with_fpr(candidates.len(), 0.01).unwrap();
            classify(&mut filter, candidates.iter().map(String::as_str)).len()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_insert_and_contains, bench_classify);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;

use threeway::comparator::{by_key, sorted_by, Comparator};
use threeway::{Rational, TaxRecord};

const COUNTS: [usize; 2] = [1000, 10000];

fn random_rationals(count: usize) -> Vec<Rational> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..count)
        .map(|_| Rational::new(rng.gen_range(-10_000..10_000), rng.gen_range(1..10_000)))
        .collect()
}

fn word(rng: &mut StdRng) -> String {
    (0..4).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

fn random_records(count: usize) -> Vec<TaxRecord> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..count)
        .map(|_| {
            let zip = word(&mut rng);
            let tax_id = word(&mut rng);
            let first = word(&mut rng);
            let last = word(&mut rng);
            TaxRecord::new(zip, tax_id, first, last)
        })
        .collect()
}

fn benchmark_rational(c: &mut Criterion) {
    for count in COUNTS {
        let values = random_rationals(count);

        c.bench_function(format!("rational sort cross product {count}").as_str(), |b| {
            b.iter(|| {
                let mut v = values.clone();
                v.sort();
                black_box(v);
            });
        });

        c.bench_function(format!("rational sort f64 convert {count}").as_str(), |b| {
            b.iter(|| {
                let mut v = values.clone();
                v.sort_by(|x, y| x.as_f64().total_cmp(&y.as_f64()));
                black_box(v);
            });
        });
    }
}

fn benchmark_comparator(c: &mut Criterion) {
    let chained = by_key(|r: &TaxRecord| r.zip.clone())
        .then(by_key(|r: &TaxRecord| r.last_name.clone()))
        .then(by_key(|r: &TaxRecord| r.first_name.clone()))
        .then(by_key(|r: &TaxRecord| r.tax_id.clone()));

    for count in COUNTS {
        let records = random_records(count);

        c.bench_function(format!("record sort native ord {count}").as_str(), |b| {
            b.iter(|| {
                let mut v = records.clone();
                v.sort();
                black_box(v);
            });
        });

        c.bench_function(format!("record sort chained comparator {count}").as_str(), |b| {
            b.iter(|| {
                black_box(sorted_by(records.clone(), &chained));
            });
        });
    }
}

criterion_group!(benches, benchmark_rational, benchmark_comparator);
criterion_main!(benches);

//! Criterion benchmark harness: measures per-record dump and load latency for
//! both formats on each record shape.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serbench::format::binary::BincodeFormat;
use serbench::format::json::JsonFormat;
use serbench::format::BenchFormat;
use serbench_core::generator::{generate_record, CorpusParams};
use serbench_core::value::Value;

/// One record of each shape at the standard size.
fn shapes() -> Vec<(&'static str, Value)> {
    let mut rng = StdRng::seed_from_u64(0xDEAD_BEEF);
    let triple = generate_record(&mut rng, CorpusParams::standard().records_per_shape)
        .expect("Failed to generate records");
    vec![
        ("sequence", triple.sequence),
        ("flat", triple.flat),
        ("nested", triple.nested),
    ]
}

fn bench_format(c: &mut Criterion, format: &dyn BenchFormat) {
    let mut group = c.benchmark_group(format!("serde/{}", format.name()));

    for (label, record) in shapes() {
        group.bench_with_input(BenchmarkId::new("dump", label), &record, |b, record| {
            b.iter(|| format.dump(black_box(record)).expect("dump failed"));
        });

        let entry = format.dump(&record).expect("dump failed");
        group.bench_with_input(BenchmarkId::new("load", label), &entry, |b, entry| {
            b.iter(|| format.load(black_box(entry)).expect("load failed"));
        });
    }
    group.finish();
}

fn bench_json(c: &mut Criterion) {
    bench_format(c, &JsonFormat::new());
}

fn bench_bincode(c: &mut Criterion) {
    bench_format(c, &BincodeFormat::new());
}

criterion_group!(benches, bench_json, bench_bincode);
criterion_main!(benches);

use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use otpgen::{OsRandom, TokenGenerator, generate_default};

/// Benchmarks token generation at a fixed digit count.
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let generator = TokenGenerator::new(OsRandom);

    for length in [6, 100, 1000] {
        group.throughput(Throughput::Elements(length as u64));
        group.bench_function(format!("digits/{length}"), |b| {
            b.iter(|| {
                let token = generator
                    .generate(black_box(length))
                    .expect("entropy source failed");
                black_box(token);
            });
        });
    }

    group.finish();
}

/// Benchmarks the 6-digit convenience path, including generator
/// construction, as a caller using the crate-level helpers would hit it.
fn bench_generate_default(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_default");
    group.throughput(Throughput::Elements(6));

    group.bench_function("digits/6", |b| {
        b.iter(|| {
            let token = generate_default().expect("entropy source failed");
            black_box(token);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_generate_default);
criterion_main!(benches);

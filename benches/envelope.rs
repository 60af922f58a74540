use criterion::{criterion_group, criterion_main, Criterion};
use geokernel::{Envelope, EnvelopeTrait};

fn create_data() -> Vec<Envelope> {
    (0..1000)
        .map(|i| {
            let x = (i % 40) as f64 * 2.5;
            let y = (i / 40) as f64 * 2.5;
            Envelope::new(x, x + 4., y, y + 4.)
        })
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = create_data();
    let query = Envelope::new(20., 60., 10., 30.);

    c.bench_function("intersects 1000 envelopes", |b| {
        b.iter(|| data.iter().filter(|env| env.intersects(&query)).count())
    });

    c.bench_function("distance 1000 envelopes", |b| {
        b.iter(|| data.iter().map(|env| env.distance(&query)).sum::<f64>())
    });

    c.bench_function("expand to include 1000 envelopes", |b| {
        b.iter(|| {
            let mut total = Envelope::null();
            for env in &data {
                total.expand_to_include_envelope(env);
            }
            total
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

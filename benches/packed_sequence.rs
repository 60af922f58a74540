use criterion::{criterion_group, criterion_main, Criterion};
use geokernel::array::{CachePolicy, PackedCoordBuffer, SequenceOptions};
use geokernel::datatypes::Dimension;
use geokernel::indexed::IndexedEnvelope;
use geokernel::{CoordinateSequence, Envelope, EnvelopeTrait};

fn create_data(cache: CachePolicy) -> PackedCoordBuffer<f64> {
    let coords: Vec<f64> = (0..10_000)
        .flat_map(|i| {
            let t = i as f64 / 100.;
            [t.cos() * t, t.sin() * t, t]
        })
        .collect();
    PackedCoordBuffer::new(coords, SequenceOptions::new(Dimension::XYZ, cache))
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let retained = create_data(CachePolicy::Retained);
    let disabled = create_data(CachePolicy::Disabled);

    c.bench_function("to_point_array retained", |b| {
        b.iter(|| retained.to_point_array().len())
    });

    c.bench_function("to_point_array disabled", |b| {
        b.iter(|| disabled.to_point_array().len())
    });

    c.bench_function("expand_envelope 10000 points", |b| {
        b.iter(|| {
            let mut env = Envelope::null();
            retained.expand_envelope(&mut env);
            env
        })
    });

    c.bench_function("IndexedEnvelope::new 10000 points", |b| {
        b.iter(|| IndexedEnvelope::new(&retained).max_x())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

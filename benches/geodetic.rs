use criterion::{criterion_group, criterion_main, Criterion};
use geokernel::algorithm::geodetic::{azimuth, local_lon_lat_distance, project};

fn create_data() -> Vec<(f64, f64)> {
    (0..1000)
        .map(|i| {
            let t = i as f64 / 1000.;
            (2.3 + t * 0.1, 48.8 + t * 0.05)
        })
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = create_data();

    c.bench_function("azimuth 1000 pairs", |b| {
        b.iter(|| {
            data.windows(2)
                .map(|w| azimuth(w[0].0, w[0].1, w[1].0, w[1].1))
                .sum::<f64>()
        })
    });

    c.bench_function("local_lon_lat_distance 1000 pairs", |b| {
        b.iter(|| {
            data.windows(2)
                .map(|w| local_lon_lat_distance(w[0].0, w[0].1, w[1].0, w[1].1))
                .sum::<f64>()
        })
    });

    c.bench_function("project 1000 points", |b| {
        b.iter(|| {
            data.iter()
                .filter(|(lon, lat)| project(*lon, *lat, 2.3, 48.75, 2.4, 48.9).is_inside())
                .count()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

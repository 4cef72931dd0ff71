use criterion::{Criterion, black_box, criterion_group, criterion_main};
use drik_panchanga::{SolarCalendar, gregorian_to_hindu, gregorian_to_solar, tithi_at_sunrise};
use drik_vedic_base::Location;

const DELHI: Location = Location {
    latitude_deg: 28.6139,
    longitude_deg: 77.2090,
    altitude_m: 0.0,
    utc_offset_hours: 5.5,
};

fn tithi_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tithi");
    group.bench_function("tithi_at_sunrise", |b| {
        b.iter(|| tithi_at_sunrise(black_box(2025), 1, 13, &DELHI))
    });
    group.finish();
}

fn panchang_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("panchang");
    group.sample_size(20);
    group.bench_function("gregorian_to_hindu", |b| {
        b.iter(|| gregorian_to_hindu(black_box(2025), 1, 13, &DELHI))
    });
    group.bench_function("gregorian_to_solar_tamil", |b| {
        b.iter(|| gregorian_to_solar(black_box(2025), 4, 14, &DELHI, SolarCalendar::Tamil))
    });
    group.finish();
}

criterion_group!(benches, tithi_bench, panchang_bench);
criterion_main!(benches);

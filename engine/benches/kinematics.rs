use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fairway_engine::{haversine, initial_bearing, kinematics, normalize, Fence};
use fairway_formats::{Geofence, PositionReport};

fn setup(n: usize) -> Vec<PositionReport> {
    (0..n)
        .map(|i| {
            let f = i as f64 / n as f64;
            PositionReport::new(
                "AIS",
                &format!("VESSEL {}", i % 20),
                1_700_000_000 + i as i64 * 10,
                1.2 + f * 0.2,
                103.6 + f * 0.4,
            )
        })
        .collect()
}

fn self_haversines(c: &mut Criterion) {
    c.bench_function("haversine", |b| {
        b.iter(|| haversine(black_box(2.319671), 48.573174, 2.303015, 48.566757))
    });
}

fn self_bearing(c: &mut Criterion) {
    c.bench_function("initial_bearing", |b| {
        b.iter(|| initial_bearing(black_box(48.573174), 2.319671, 48.566757, 2.303015))
    });
}

fn track_kinematics(c: &mut Criterion) {
    let tracks = normalize(setup(10_000)).unwrap();

    c.bench_function("kinematics/20 vessels", |b| {
        b.iter(|| {
            tracks.values().for_each(|t| {
                black_box(kinematics(t));
            })
        })
    });
}

fn fence_contains(c: &mut Criterion) {
    let g = Geofence::new(vec![(1.25, 103.6), (1.25, 104.0), (1.35, 104.0), (1.35, 103.6)]).unwrap();
    let fence = Fence::from(&g);
    let pts = setup(10_000);

    c.bench_function("fence/10k points", |b| {
        b.iter(|| black_box(fence.filter_points(&pts)))
    });
}

criterion_group!(
    benches,
    self_haversines,
    self_bearing,
    track_kinematics,
    fence_contains
);
criterion_main!(benches);

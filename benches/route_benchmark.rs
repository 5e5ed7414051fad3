use cafe_route::{
    algorithms::{BruteForce, HeldKarp, RouteSolver},
    models::Cafe,
    utils::cafe_network::CafeNetwork,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_solvers(c: &mut Criterion) {
    // Create benchmark data
    let network = create_benchmark_network();
    let three = ["C3", "C7", "C9"];
    let six = ["C1", "C3", "C5", "C7", "C9", "C2"];

    c.bench_function("brute_force_3_destinations", |b| {
        b.iter(|| BruteForce.solve(black_box(&network), black_box("C0"), black_box(&three)))
    });
    c.bench_function("held_karp_3_destinations", |b| {
        b.iter(|| HeldKarp.solve(black_box(&network), black_box("C0"), black_box(&three)))
    });

    c.bench_function("brute_force_6_destinations", |b| {
        b.iter(|| BruteForce.solve(black_box(&network), black_box("C0"), black_box(&six)))
    });
    c.bench_function("held_karp_6_destinations", |b| {
        b.iter(|| HeldKarp.solve(black_box(&network), black_box("C0"), black_box(&six)))
    });
}

// A 10-café ring with a few chords
fn create_benchmark_network() -> CafeNetwork {
    let cafes = (0..10).map(|i| Cafe::new(format!("C{}", i)));
    let mut roads: Vec<(String, String, f64)> = (0..10)
        .map(|i| {
            (
                format!("C{}", i),
                format!("C{}", (i + 1) % 10),
                (3 + i % 4) as f64,
            )
        })
        .collect();
    for (a, b, d) in [(0, 5, 9.0), (2, 7, 8.0), (4, 9, 6.0)] {
        roads.push((format!("C{}", a), format!("C{}", b), d));
    }

    CafeNetwork::from_parts(cafes, roads).expect("benchmark network is valid")
}

criterion_group!(benches, benchmark_solvers);
criterion_main!(benches);

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use mesh_skin::algs::neighbours::build_facets;
use mesh_skin::algs::volume::total_volume;
use mesh_skin::mesh_generation::brick_grid;

fn bench_facet_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("facet_extraction");

    for &n in &[8usize, 16, 32] {
        let mesh = brick_grid(n, n, n, [0.0; 3], [1.0; 3]).expect("grid");

        group.bench_with_input(BenchmarkId::new("build_facets", n), &n, |b, _| {
            b.iter(|| {
                let set = build_facets(black_box(mesh.elements()), black_box(mesh.nodes()))
                    .expect("facets");
                black_box(set.exterior_count())
            })
        });

        group.bench_with_input(BenchmarkId::new("total_volume", n), &n, |b, _| {
            b.iter(|| {
                total_volume(black_box(mesh.elements()), black_box(mesh.nodes())).expect("volume")
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_facet_extraction);
criterion_main!(benches);

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use surface_embed::algs::euler::summarize;
use surface_embed::algs::maximal_planar::{
    MaximalPlanarOptions, maximal_planar_random_embedding,
};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("maximal_planar");

    for &n in &[1_000usize, 10_000usize] {
        let opts = MaximalPlanarOptions { vertices: n, seed: 42 };

        group.bench_with_input(BenchmarkId::new("generate", n), &n, |b, _| {
            b.iter(|| {
                let out = maximal_planar_random_embedding(&opts).expect("n >= 3");
                black_box(out);
            });
        });

        let out = maximal_planar_random_embedding(&opts).expect("n >= 3");
        group.bench_with_input(BenchmarkId::new("summarize", n), &n, |b, _| {
            b.iter(|| {
                let summary = summarize(&out.graph).expect("valid embedding");
                black_box(summary);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);

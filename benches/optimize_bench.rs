//! Benchmarks the end-to-end `optimize()` pipeline (spec §2) against a
//! handful of representative workloads, mirroring the teacher's use of
//! `criterion` as the benchmarking harness.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use steelcut_core::models::{DesignPart, ModuleBarCatalogEntry, OptimizationConstraints};
use steelcut_core::request::OptimizeRequest;
use steelcut_core::optimize;

fn small_request() -> OptimizeRequest {
    let parts = vec![
        DesignPart::new("p1", 6000, 4, 100.0, "S355"),
        DesignPart::new("p2", 4000, 4, 100.0, "S355"),
        DesignPart::new("p3", 3000, 6, 100.0, "S355"),
    ];
    let modules = vec![ModuleBarCatalogEntry::new("m1", "12m bar", 12000)];
    OptimizeRequest::new(parts, modules, OptimizationConstraints { max_welding_segments: 2, ..Default::default() })
}

fn many_groups_request() -> OptimizeRequest {
    let specs = ["S235", "S275", "S355", "S460"];
    let mut parts = Vec::new();
    for (i, spec) in specs.iter().enumerate() {
        for j in 0..20 {
            parts.push(DesignPart::new(
                format!("p{i}-{j}"),
                1000 + (j as i64 * 137) % 9000,
                1 + (j % 5) as i64,
                100.0 + i as f64,
                *spec,
            ));
        }
    }
    let modules = vec![
        ModuleBarCatalogEntry::new("m1", "6m bar", 6000),
        ModuleBarCatalogEntry::new("m2", "12m bar", 12000),
    ];
    OptimizeRequest::new(parts, modules, OptimizationConstraints { max_welding_segments: 2, ..Default::default() })
}

fn bench_optimize(c: &mut Criterion) {
    c.bench_function("optimize_small", |b| {
        b.iter(|| optimize(black_box(small_request())));
    });
    c.bench_function("optimize_many_groups", |b| {
        b.iter(|| optimize(black_box(many_groups_request())));
    });
}

criterion_group!(benches, bench_optimize);
criterion_main!(benches);

//! Benchmarks for shoplens generation, rendering and export
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shoplens::*;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    group.bench_function("seeded_bundle", |b| {
        b.iter(|| generate_seeded(black_box(42)))
    });

    group.bench_function("entropy_bundle", |b| {
        let mut generator = DataGenerator::new(GeneratorConfig::default());
        b.iter(|| generator.generate())
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let options = RenderOptions::plain();

    for &tab in Tab::all() {
        let mut view = ViewController::new(generate_seeded(42));
        view.set_tab(tab);

        group.bench_function(tab.id(), |b| {
            b.iter(|| render(black_box(&view), &options))
        });
    }

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");
    let bundle = generate_seeded(42);

    group.bench_function("monthly_csv", |b| {
        b.iter(|| export(black_box(&bundle), Dataset::Monthly, ExportFormat::Csv).unwrap())
    });

    group.bench_function("all_json", |b| {
        b.iter(|| export(black_box(&bundle), Dataset::All, ExportFormat::Json).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_render, bench_export);
criterion_main!(benches);

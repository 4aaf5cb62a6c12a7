use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pricing_core::{CostParameters, GroupDomain, PresentationAdapter, SeriesGenerator};

fn bench_series(c: &mut Criterion) {
    let params = CostParameters::default();
    let mut group = c.benchmark_group("series_generate");
    for &max in &[100u32, 10_000u32] {
        group.bench_function(format!("1_to_{max}"), |b| {
            b.iter(|| black_box(SeriesGenerator::generate(1, max, &params)))
        });
    }
    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let mut adapter = PresentationAdapter::new(CostParameters::default(), GroupDomain::default(), 40)
        .expect("adapter");
    let inputs = ["20", "55", "abc", "150", "73"];
    c.bench_function("on_selection_changed", |b| {
        b.iter(|| {
            for raw in inputs {
                black_box(adapter.on_selection_changed(raw));
            }
        })
    });
}

criterion_group!(benches, bench_series, bench_selection);
criterion_main!(benches);

use criterion::{
    black_box, criterion_group, criterion_main, AxisScale, BenchmarkId,
    Criterion, PlotConfiguration,
};
use roaring_sizecmp::{
    CRoaringMeter, Format, Regime, RoaringRsMeter, SizeMeter, Suite,
};

macro_rules! new_benchmark_group {
    // Initialize a new benchmark group with logarithmic axis scale.
    ($c:ident, $name:literal) => {{
        let plot_config =
            PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
        let mut group = $c.benchmark_group($name);
        group.plot_config(plot_config);
        group
    }};
}

macro_rules! bench_measure {
    // Benchmark building and sizing a bitmap from a dense range.
    ($group:ident, $count:ident, $meter:expr, $format:expr) => {
        let benchmark_id = BenchmarkId::new(
            format!("{}/{}", $meter.name(), $format),
            $count,
        );
        $group.bench_with_input(benchmark_id, $count, |b, &$count| {
            let values = Regime::DenseRange {
                start: 0,
                len: $count,
            }
            .generate()
            .expect("valid regime");
            b.iter(|| $meter.measure(black_box(&values), $format));
        });
    };
}

fn measure_dense(c: &mut Criterion) {
    let mut group = new_benchmark_group!(c, "Measure/Dense");
    for count in [1, 10, 100, 1_000, 10_000, 100_000].iter() {
        bench_measure!(group, count, CRoaringMeter, Format::Portable);
        bench_measure!(group, count, CRoaringMeter, Format::Native);
        bench_measure!(group, count, RoaringRsMeter, Format::Portable);
    }
    group.finish();
}

fn generate_suite(c: &mut Criterion) {
    let mut group = c.benchmark_group("Generate");
    for scenario in &Suite::default() {
        group.bench_function(scenario.description.as_str(), |b| {
            b.iter(|| scenario.regime.generate().expect("valid regime"));
        });
    }
    group.finish();
}

criterion_group!(benches, measure_dense, generate_suite);
criterion_main!(benches);

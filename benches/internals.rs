use std::path::Path;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use corebench::corpus::{CORPORA, VARIANTS};
use corebench::report;
use corebench::runner::build_args;
use corebench::types::RunResult;

// ---------------------------------------------------------------------------
// Argument construction
// ---------------------------------------------------------------------------

fn bench_build_args(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_args");
    let workdir = Path::new("/bench/corpus");

    for variant in VARIANTS {
        group.bench_with_input(
            BenchmarkId::from_parameter(variant.name),
            variant,
            |b, variant| {
                b.iter(|| build_args("engine", &CORPORA[0], variant, workdir));
            },
        );
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Metric formatting
// ---------------------------------------------------------------------------

fn bench_metric_formatting(c: &mut Criterion) {
    c.bench_function("duration_metric", |b| {
        b.iter(|| report::duration_metric(&CORPORA[0], &VARIANTS[0]));
    });

    let result = RunResult {
        metric_name: report::duration_metric(&CORPORA[0], &VARIANTS[0]),
        duration_seconds: 12.34567,
    };
    c.bench_function("format_result", |b| {
        b.iter(|| report::format_result(&result));
    });
}

criterion_group!(benches, bench_build_args, bench_metric_formatting);
criterion_main!(benches);

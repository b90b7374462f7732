use criterion::*;
use nestrace::{RenderMode, render_line};

fn criterion_benchmark(c: &mut Criterion) {
    let log = include_str!("../tests/logs/nestest.log");

    for mode in [RenderMode::TruncatedWithCycle, RenderMode::VerboseSummary] {
        c.bench_function(&format!("render {mode}"), move |b| {
            b.iter(|| {
                for line in log.lines() {
                    black_box(render_line(black_box(line), mode).unwrap());
                }
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reported_company_sniffer::{embedded_detector, has_compensation_signal, JobInput};

fn benchmark_analyze(c: &mut Criterion) {
    let detector = embedded_detector().expect("embedded dataset should parse");

    // Exercise the exact path, the full-scan partial path, and a miss.
    let jobs = [
        JobInput::from_company("Accenture"),
        JobInput::from_company("Accenture Federal Services"),
        JobInput::from_company("Local Coffee Roasters"),
    ];

    c.bench_function("analyze", |b| {
        b.iter(|| {
            for job in &jobs {
                black_box(detector.analyze(black_box(job)));
            }
        })
    });
}

fn benchmark_compensation_signal(c: &mut Criterion) {
    let text = "Part-time barista, $18 - $22 an hour, weekends required.";

    c.bench_function("has_compensation_signal", |b| {
        b.iter(|| has_compensation_signal(black_box(text)))
    });
}

criterion_group!(benches, benchmark_analyze, benchmark_compensation_signal);
criterion_main!(benches);

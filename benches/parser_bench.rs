use std::fmt::Write;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lumen::{
    ast::humanize,
    diagnostics::{Collector, DiagnosticReporter, FailFast},
    parse_batch, parse_source,
    syntax::{Parser, SourceFile, tokenize},
};

fn build_module(functions: usize) -> String {
    let mut src = String::with_capacity(functions * 160);

    for i in 0..functions {
        let _ = writeln!(src, "let limit_{i}: Number = {i} * 2 + 1");
        let _ = writeln!(
            src,
            "func step_{i}(x: Number, scale = 2) -> {{\n  let y = if x < limit_{i} then x.next(scale, {i}) else (x - 1) % 3\n  return y++ >> 1\n}}",
        );
    }

    src
}

fn bench_parse_module(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser/module");

    for &functions in &[100usize, 1_000, 5_000] {
        let source = SourceFile::new(build_module(functions), None);
        let tokens = tokenize(&source).unwrap_or_default();
        group.throughput(Throughput::Elements(tokens.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(functions),
            &(source, tokens),
            |b, (source, tokens)| {
                b.iter(|| {
                    let mut parser = Parser::new(
                        tokens.clone(),
                        DiagnosticReporter::fail_fast(source.clone()),
                    );
                    black_box(parser.parse_module_root().is_ok());
                });
            },
        );
    }

    group.finish();
}

fn bench_parse_source(c: &mut Criterion) {
    let source = SourceFile::new(build_module(1_000), None);
    let mut group = c.benchmark_group("pipeline/parse_source");
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("fail_fast", |b| {
        b.iter(|| black_box(parse_source(black_box(&source), FailFast).is_ok()));
    });
    group.bench_function("collector", |b| {
        b.iter(|| {
            let mut collector = Collector::new();
            let ok = parse_source(black_box(&source), &mut collector).is_ok();
            black_box((ok, collector.len()));
        });
    });

    group.finish();
}

fn bench_parse_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/parse_batch");

    for &files in &[1usize, 8, 64] {
        let sources: Vec<SourceFile> = (0..files)
            .map(|i| SourceFile::named(build_module(200), format!("file_{i}.lm")))
            .collect();
        group.throughput(Throughput::Elements(files as u64));
        group.bench_with_input(BenchmarkId::from_parameter(files), &sources, |b, sources| {
            b.iter(|| black_box(parse_batch(black_box(sources)).len()));
        });
    }

    group.finish();
}

fn bench_humanize(c: &mut Criterion) {
    let source = SourceFile::new(build_module(1_000), None);
    let Ok(root) = parse_source(&source, FailFast) else {
        return;
    };

    c.bench_function("ast/humanize", |b| {
        b.iter(|| black_box(humanize(black_box(&root)).len()));
    });
}

criterion_group!(
    benches,
    bench_parse_module,
    bench_parse_source,
    bench_parse_batch,
    bench_humanize
);
criterion_main!(benches);

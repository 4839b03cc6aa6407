use std::hint::black_box;

use bemjson_language_server::bem::BemLinter;
use bemjson_language_server::parser::parse;
use bemjson_language_server::validation::supplemental::SupplementalLinter;
use bemjson_language_server::{Engine, SeverityConfig};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Generate a page with `sections` content sections for a scenario
fn generate_page(sections: usize, scenario: &str) -> String {
    let mut items = Vec::with_capacity(sections + 1);
    items.push(r#"{"block": "text", "mods": {"type": "h1"}}"#.to_string());

    for i in 0..sections {
        let item = match (scenario, i % 4) {
            ("all_valid", 0) | ("mixed_errors", 0) => r#"{"block": "warning", "content": [
                {"block": "placeholder", "mods": {"size": "m"}},
                {"block": "text", "mods": {"size": "l"}},
                {"block": "button", "mods": {"size": "xl"}}
            ]}"#
            .to_string(),
            ("all_valid", 1) => r#"{"block": "grid", "mods": {"m-columns": "10"}, "content": [
                {"elem": "fraction", "elemMods": {"m-col": "5"}, "content": {"block": "offer"}},
                {"elem": "fraction", "elemMods": {"m-col": "5"}, "content": {"block": "payment"}}
            ]}"#
            .to_string(),
            ("mixed_errors", 1) => r#"{"block": "grid", "mods": {"m-columns": "10"}, "content": [
                {"elem": "fraction", "elemMods": {"m-col": "8"}, "content": {"block": "offer"}},
                {"elem": "fraction", "elemMods": {"m-col": "2"}, "content": {"block": "payment"}}
            ]}"#
            .to_string(),
            ("mixed_errors", 2) => format!(r#"{{"BLOCK": "section-{}", "content": []}}"#, i),
            ("mixed_errors", 3) => r#"{"block": "warning", "content": [
                {"block": "button", "mods": {"size": "s"}},
                {"block": "text", "mods": {"size": "l"}},
                {"block": "placeholder", "mods": {"size": "xxl"}}
            ]}"#
            .to_string(),
            _ => format!(
                r#"{{"block": "text", "mods": {{"type": "h2"}}, "content": "Section {}"}}"#,
                i
            ),
        };
        items.push(item);
    }

    format!(r#"{{"block": "page", "content": [{}]}}"#, items.join(",\n"))
}

/// Benchmark validation with different error densities
fn bench_validation_error_density(c: &mut Criterion) {
    let engine = Engine::new();
    let config = SeverityConfig::recommended();

    let mut group = c.benchmark_group("validation_error_density");

    for scenario in ["all_valid", "mixed_errors"] {
        let content = generate_page(1_000, scenario);

        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("scenario", scenario),
            &content,
            |b, content| {
                b.iter(|| {
                    let result = engine.validate(black_box(content), black_box(&config));
                    black_box(result)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark validation scalability with different document sizes
fn bench_validation_scalability(c: &mut Criterion) {
    let engine = Engine::new();
    let config = SeverityConfig::recommended();

    let mut group = c.benchmark_group("validation_scalability");

    for sections in [10, 100, 1_000, 10_000] {
        let content = generate_page(sections, "mixed_errors");

        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("sections", sections),
            &content,
            |b, content| {
                b.iter(|| {
                    let result = engine.validate(black_box(content), black_box(&config));
                    black_box(result)
                })
            },
        );
    }

    group.finish();
}

/// Break the pipeline down into its stages
fn bench_pipeline_stages(c: &mut Criterion) {
    let content = generate_page(1_000, "mixed_errors");
    let linter = BemLinter::new();
    let engine = Engine::new();

    let mut group = c.benchmark_group("pipeline_stages");

    group.bench_function("parse", |b| b.iter(|| black_box(parse(black_box(&content)))));
    group.bench_function("bem_linter", |b| {
        b.iter(|| black_box(linter.lint(black_box(&content))))
    });
    group.bench_function("collect_problems", |b| {
        b.iter(|| black_box(engine.collect_problems(black_box(&content))))
    });

    // Malformed input stops at the parser
    let truncated = &content[..content.len() / 2];
    group.bench_function("malformed", |b| {
        b.iter(|| {
            black_box(engine.validate(black_box(truncated), &SeverityConfig::recommended()))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_validation_error_density,
    bench_validation_scalability,
    bench_pipeline_stages
);
criterion_main!(benches);

//! Benchmarks for the script processor.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scriptforge::analyzer::{compute_statistics, extract_keywords};
use scriptforge::subtitles::{srt, timeline};
use scriptforge::{
    CtaStyle, Language, Niche, ProcessingType, ScriptBlock, ScriptConfiguration, ScriptProcessor,
};

const PARAGRAPH: &str = "A padaria abriu antes do amanhecer. O fermento natural precisa de \
    tempo, paciência e calor para crescer. Cada pão conta uma história de trabalho, \
    família e tradição que atravessa gerações.";

fn source_text(paragraphs: usize) -> String {
    vec![PARAGRAPH; paragraphs].join("\n\n")
}

fn bench_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("simple");

    for paragraphs in [1, 10, 100].iter() {
        let text = source_text(*paragraphs);
        let config = ScriptConfiguration::new()
            .with_block_count(5)
            .with_cta_style(CtaStyle::Emotional)
            .with_image_prompts(true)
            .with_subtitles(true);
        let mut processor = ScriptProcessor::seeded(7);

        group.bench_with_input(
            BenchmarkId::new("paragraphs", paragraphs),
            paragraphs,
            |b, _| b.iter(|| black_box(processor.process(&text, &config))),
        );
    }
    group.finish();
}

fn bench_remodel(c: &mut Criterion) {
    let mut group = c.benchmark_group("remodel");

    for blocks in [1, 5, 20].iter() {
        let text = source_text(10);
        let config = ScriptConfiguration::new()
            .with_processing_type(ProcessingType::Remodel)
            .with_block_count(*blocks)
            .with_cta_style(CtaStyle::Reflective)
            .with_master_prompt(true)
            .with_subtitles(true)
            .with_niche(Niche::new("Culinária", "Panificação", "fermento natural"));
        let mut processor = ScriptProcessor::seeded(7);

        group.bench_with_input(BenchmarkId::new("blocks", blocks), blocks, |b, _| {
            b.iter(|| black_box(processor.process(&text, &config)))
        });
    }
    group.finish();
}

fn bench_analysis(c: &mut Criterion) {
    let text = source_text(100);

    c.bench_function("compute_statistics", |b| {
        b.iter(|| black_box(compute_statistics(&text)))
    });

    c.bench_function("extract_keywords", |b| {
        b.iter(|| black_box(extract_keywords(&text, 10, Language::Pt)))
    });
}

fn bench_subtitles(c: &mut Criterion) {
    let blocks: Vec<ScriptBlock> = (0..200)
        .map(|i| ScriptBlock::new(format!("{i} {PARAGRAPH}")))
        .collect();

    c.bench_function("build_simple_timeline", |b| {
        b.iter(|| black_box(timeline::build_simple(&blocks)))
    });

    let cues = timeline::build_simple(&blocks);
    c.bench_function("render_srt", |b| b.iter(|| black_box(srt::render(&cues))));

    let track = srt::render(&cues);
    c.bench_function("parse_srt", |b| b.iter(|| black_box(srt::parse(&track))));
}

criterion_group!(
    benches,
    bench_simple,
    bench_remodel,
    bench_analysis,
    bench_subtitles,
);

criterion_main!(benches);

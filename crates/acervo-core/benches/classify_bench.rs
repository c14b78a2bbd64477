//! Benchmarks for the criticality classifier.

use acervo_core::{SectorResponse, SectorSurvey, classify, classify_batch};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn survey() -> Vec<SectorResponse> {
    vec![
        SectorResponse::new("Problemas na gestão documental?", "Nenhum"),
        SectorResponse::new("Possui arquivista?", "Não"),
        SectorResponse::new("Possui plano de classificação?", "Regular"),
        SectorResponse::new("Volume documental?", "201 a 500"),
        SectorResponse::new("Estado de conservação?", "Razoável"),
        SectorResponse::new("Condições do local?", "Bom"),
        SectorResponse::new("O setor ainda produz documentos?", "Sim"),
        SectorResponse::new("Frequência de uso?", "Ocasional"),
    ]
}

fn bench_classify(c: &mut Criterion) {
    let responses = survey();
    c.bench_function("classify_positional_survey", |b| {
        b.iter(|| classify(black_box(&responses)));
    });
}

fn bench_batch(c: &mut Criterion) {
    let surveys: Vec<_> = (0..100)
        .map(|i| SectorSurvey::new(format!("Setor {i}"), survey()))
        .collect();
    c.bench_function("classify_batch_100", |b| {
        b.iter(|| classify_batch(black_box(&surveys)));
    });
}

criterion_group!(benches, bench_classify, bench_batch);
criterion_main!(benches);

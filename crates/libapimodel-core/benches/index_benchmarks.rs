use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libapimodel_core::DocumentModel;
use libapimodel_core::index::DocumentIndex;
use libapimodel_core::index::IndexConfig;
use libapimodel_core::node::Document;
use std::sync::Arc;

/// Builds a document with `count` component schemas, each referring to the
/// next one (and the last one back to the first) plus a shared `Id` schema.
fn synthetic_document(count: usize) -> String {
    let mut yaml = String::from("openapi: 3.0.3\ncomponents:\n  schemas:\n");
    yaml.push_str("    Id:\n      type: string\n      format: uuid\n");
    for i in 0..count {
        let next = (i + 1) % count;
        yaml.push_str(&format!(
            "    Model{i}:\n\
            \x20     type: object\n\
            \x20     required:\n\
            \x20       - id\n\
            \x20     properties:\n\
            \x20       id:\n\
            \x20         $ref: '#/components/schemas/Id'\n\
            \x20       next:\n\
            \x20         $ref: '#/components/schemas/Model{next}'\n\
            \x20       tags:\n\
            \x20         type: array\n\
            \x20         items:\n\
            \x20           type: string\n"
        ));
    }
    yaml
}

const SIZES: [usize; 3] = [10, 100, 1000];

// ─── Group 1: Indexing ───────────────────────────────────

fn index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");
    for size in SIZES {
        let yaml = synthetic_document(size);
        group.throughput(Throughput::Bytes(yaml.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &yaml, |b, yaml| {
            b.iter(|| {
                let document = Document::from_yaml_str("api.yaml", yaml)
                    .expect("synthetic document parses");
                black_box(DocumentIndex::build(vec![document]))
            })
        });
    }
    group.finish();
}

// ─── Group 2: Model Building ─────────────────────────────

fn model_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("model_build");
    for size in SIZES {
        let document = Document::from_yaml_str("api.yaml", &synthetic_document(size))
            .expect("synthetic document parses");
        let (index, _) = DocumentIndex::build(vec![document]);
        let index = Arc::new(index);
        group.bench_with_input(BenchmarkId::from_parameter(size), &index, |b, index| {
            b.iter(|| black_box(DocumentModel::build(Arc::clone(index))))
        });
    }
    group.finish();
}

// ─── Group 3: Schema Materialization ─────────────────────

fn walk_schemas(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk_schemas");
    for size in SIZES {
        let yaml = synthetic_document(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &yaml, |b, yaml| {
            b.iter(|| {
                let document = Document::from_yaml_str("api.yaml", yaml)
                    .expect("synthetic document parses");
                let model = DocumentModel::from_documents(vec![document], IndexConfig::default())
                    .expect("model builds");
                let mut visited = 0usize;
                model.walk_schemas(|_| visited += 1);
                black_box(visited)
            })
        });
    }
    group.finish();
}

// ─── Criterion Entrypoint ────────────────────────────────

criterion_group!(
    benches,
    index_build,
    model_build,
    walk_schemas,
);
criterion_main!(benches);

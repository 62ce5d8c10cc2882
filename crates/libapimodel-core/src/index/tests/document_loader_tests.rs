use crate::index::DocumentLoader;
use crate::index::LoadError;
use crate::index::MemoizingLoader;
use crate::tests::test_utils::InMemoryLoader;
use rayon::prelude::*;
use std::sync::Arc;

#[test]
fn concurrent_loads_of_one_location_invoke_the_loader_once() {
    let inner = Arc::new(
        InMemoryLoader::new().with_document("common.yaml", "components:\n  schemas: ~\n"),
    );
    let shared: Arc<dyn DocumentLoader> = inner.clone();
    let loader = MemoizingLoader::new(shared);

    let documents: Vec<_> = (0..64)
        .into_par_iter()
        .map(|_| loader.load("common.yaml").expect("load"))
        .collect();

    assert_eq!(inner.load_count("common.yaml"), 1);
    assert!(documents.iter().all(|document| Arc::ptr_eq(document, &documents[0])));
    assert_eq!(documents[0].location(), "common.yaml");
}

#[test]
fn distinct_locations_are_loaded_independently() {
    let inner = Arc::new(
        InMemoryLoader::new()
            .with_document("a.yaml", "a: 1\n")
            .with_document("b.yaml", "b: 2\n"),
    );
    let shared: Arc<dyn DocumentLoader> = inner.clone();
    let loader = MemoizingLoader::new(shared);

    ["a.yaml", "b.yaml", "a.yaml", "b.yaml"]
        .par_iter()
        .for_each(|location| {
            loader.load(location).expect("load");
        });

    assert_eq!(inner.load_count("a.yaml"), 1);
    assert_eq!(inner.load_count("b.yaml"), 1);

    let mut requested = loader.requested_locations();
    requested.sort();
    assert_eq!(requested, vec!["a.yaml", "b.yaml"]);
}

#[test]
fn failed_loads_are_cached() {
    let inner = Arc::new(InMemoryLoader::new());
    let shared: Arc<dyn DocumentLoader> = inner.clone();
    let loader = MemoizingLoader::new(shared);

    let first = loader.load("missing.yaml");
    let second = loader.load("missing.yaml");

    assert!(matches!(first, Err(LoadError::Unreachable { .. })));
    assert_eq!(first, second);
    assert_eq!(inner.total_loads(), 1);
}

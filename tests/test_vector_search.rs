mod common;

use common::{contents, embedded, entry, setup};
use spire::domain::error::{Operation, StoreError};
use spire::domain::ports::entry_repository::EntryRepository;
use spire::domain::values::vector::Vector;

#[test]
fn test_nearest_first() {
    let (_dir, store) = setup(3);
    store.save(&embedded(1, "far", &[0.0, 1.0, 0.0])).unwrap();
    store.save(&embedded(2, "near", &[1.0, 0.0, 0.0])).unwrap();
    store.save(&embedded(3, "middle", &[1.0, 1.0, 0.0])).unwrap();

    let results = store.search_by_vector(&Vector::new(vec![1.0, 0.0, 0.0])).unwrap();
    assert_eq!(contents(&results), vec!["near", "middle", "far"]);
}

#[test]
fn test_results_carry_their_embeddings() {
    let (_dir, store) = setup(3);
    store.save(&embedded(1, "a", &[0.5, 0.25, -1.0])).unwrap();

    let results = store.search_by_vector(&Vector::new(vec![1.0, 0.0, 0.0])).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].embedding, Vector::new(vec![0.5, 0.25, -1.0]));
    assert_eq!(results[0], store.list().unwrap()[0]);
}

#[test]
fn test_entries_without_embedding_are_excluded() {
    let (_dir, store) = setup(2);
    store.save(&entry(1, "plain")).unwrap();
    store.save(&embedded(2, "embedded", &[1.0, 0.0])).unwrap();

    let results = store.search_by_vector(&Vector::new(vec![0.0, 1.0])).unwrap();
    assert_eq!(contents(&results), vec!["embedded"]);
}

#[test]
fn test_ties_break_by_recency() {
    let (_dir, store) = setup(2);
    store.save(&embedded(1, "older", &[2.0, 0.0])).unwrap();
    store.save(&embedded(2, "newer", &[1.0, 0.0])).unwrap();

    let results = store.search_by_vector(&Vector::new(vec![1.0, 0.0])).unwrap();
    assert_eq!(contents(&results), vec!["newer", "older"]);
}

#[test]
fn test_wrong_query_dimension() {
    let (_dir, store) = setup(3);
    store.save(&embedded(1, "a", &[1.0, 0.0, 0.0])).unwrap();

    let err = store.search_by_vector(&Vector::new(vec![1.0, 0.0])).unwrap_err();
    assert!(matches!(
        err,
        StoreError::DimensionMismatch {
            operation: Operation::SearchByVector,
            expected: 3,
            actual: 2
        }
    ));

    let err = store.search_by_vector(&Vector::default()).unwrap_err();
    assert!(matches!(err, StoreError::DimensionMismatch { actual: 0, .. }));
}

#[test]
fn test_wrong_dimension_issues_no_query() {
    // The store's database directory is gone, so any attempt to reach the
    // engine would surface as a connection error instead.
    let (dir, store) = setup(3);
    drop(dir);

    let err = store.search_by_vector(&Vector::new(vec![1.0])).unwrap_err();
    assert!(matches!(err, StoreError::DimensionMismatch { .. }));
}

#[test]
fn test_empty_store() {
    let (_dir, store) = setup(2);
    assert!(store
        .search_by_vector(&Vector::new(vec![1.0, 0.0]))
        .unwrap()
        .is_empty());
}

#[test]
fn test_default_dimension_ranking() {
    let (_dir, store) = setup(512);
    let axis = |i: usize| {
        let mut v = vec![0.0_f32; 512];
        v[i] = 1.0;
        v
    };
    let mut close = axis(0);
    close[1] = 0.1;

    store.save(&embedded(1, "axis one", &axis(1))).unwrap();
    store.save(&embedded(2, "close to zero", &close)).unwrap();
    store.save(&embedded(3, "axis zero", &axis(0))).unwrap();

    let results = store.search_by_vector(&Vector::new(axis(0))).unwrap();
    assert_eq!(contents(&results), vec!["axis zero", "close to zero", "axis one"]);
    assert_eq!(results[0].embedding.len(), 512);
}

//! Shared test helpers.
#![allow(dead_code)]

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use spire::domain::entities::entry::Entry;
use spire::domain::values::vector::Vector;
use spire::infrastructure::sqlite::entry_store::{SqliteEntryStore, StoreConfig};
use tempfile::TempDir;

/// A store over a fresh database file. Keep the `TempDir` alive for as long
/// as the store is used.
pub fn setup(dimension: usize) -> (TempDir, SqliteEntryStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteEntryStore::open(db_config(&dir).with_dimension(dimension)).unwrap();
    (dir, store)
}

pub fn db_config(dir: &TempDir) -> StoreConfig {
    StoreConfig::new(dir.path().join("journal.db"))
}

/// `secs` seconds after a fixed epoch, with a sub-second component so that
/// fractional precision is exercised.
pub fn at(secs: i64) -> DateTime<FixedOffset> {
    Utc.timestamp_opt(1_700_000_000 + secs, 250_000_000).unwrap().into()
}

pub fn entry(secs: i64, content: &str) -> Entry {
    Entry::at(at(secs), content.to_string())
}

pub fn embedded(secs: i64, content: &str, embedding: &[f32]) -> Entry {
    entry(secs, content).with_embedding(Vector::new(embedding.to_vec()))
}

pub fn contents(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(|e| e.content.as_str()).collect()
}

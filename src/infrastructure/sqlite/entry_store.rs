use crate::domain::entities::entry::Entry;
use crate::domain::error::{Operation, StoreError};
use crate::domain::ports::entry_repository::EntryRepository;
use crate::domain::values::timestamp::{format_timestamp, parse_timestamp};
use crate::domain::values::vector::Vector;
use crate::infrastructure::sqlite::migrations::run_migrations;
use crate::infrastructure::sqlite::vector_functions::register_vector_functions;
use rusqlite::types::ToSql;
use rusqlite::{params, Connection};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_DIMENSION: usize = 512;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Column list shared by every read. The embedding comes back in its plain
/// `[..]` text form, or NULL.
const SELECT_COLS: &str = "time, content, vector_extract(embedding)";

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub dimension: usize,
    pub vector_index: bool,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            dimension: DEFAULT_DIMENSION,
            vector_index: true,
        }
    }

    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn with_vector_index(mut self, vector_index: bool) -> Self {
        self.vector_index = vector_index;
        self
    }
}

/// Journal store over an embedded SQLite file.
///
/// Holds nothing but its configuration: each operation opens its own
/// connection and drops it before returning, on success and error alike, so
/// one store value can be shared across threads. Concurrent writers are
/// serialized by the engine's file lock.
pub struct SqliteEntryStore {
    config: StoreConfig,
}

impl SqliteEntryStore {
    /// Opens the store, creating the schema if needed. Fails if the schema
    /// cannot be brought into shape.
    pub fn open(config: StoreConfig) -> Result<Self, StoreError> {
        let store = Self { config };
        let conn = store.connect(Operation::Init)?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| StoreError::Schema {
                cause: format!("WAL error: {e}"),
            })?;
        run_migrations(&conn, store.config.dimension, store.config.vector_index)?;

        info!(
            path = %store.config.path.display(),
            dimension = store.config.dimension,
            vector_index = store.config.vector_index,
            "entry store ready"
        );
        Ok(store)
    }

    fn connect(&self, operation: Operation) -> Result<Connection, StoreError> {
        let connection_error = |e: rusqlite::Error| StoreError::Connection {
            operation,
            cause: format!("{}: {e}", self.config.path.display()),
        };
        let conn = Connection::open(&self.config.path).map_err(connection_error)?;
        conn.busy_timeout(BUSY_TIMEOUT).map_err(connection_error)?;
        register_vector_functions(&conn).map_err(connection_error)?;
        Ok(conn)
    }

    fn check_dimension(&self, operation: Operation, vector: &Vector) -> Result<(), StoreError> {
        if vector.len() != self.config.dimension {
            return Err(StoreError::DimensionMismatch {
                operation,
                expected: self.config.dimension,
                actual: vector.len(),
            });
        }
        Ok(())
    }

    /// SQL expression for a stored embedding: `NULL` for an empty vector,
    /// otherwise the inlined `vector('[..]')` literal.
    fn embedding_expr(&self, embedding: &Vector) -> Result<String, StoreError> {
        if embedding.is_empty() {
            return Ok("NULL".to_string());
        }
        self.check_dimension(Operation::Save, embedding)?;
        if let Some(idx) = embedding.first_non_finite() {
            return Err(StoreError::Write {
                operation: Operation::Save,
                cause: format!("embedding component {idx} is not a finite number"),
            });
        }
        Ok(embedding.to_sql_literal())
    }

    fn query_entries(
        &self,
        operation: Operation,
        sql: &str,
        params: &[&dyn ToSql],
    ) -> Result<Vec<Entry>, StoreError> {
        let query_error = |e: rusqlite::Error| StoreError::Query {
            operation,
            cause: e.to_string(),
        };

        let conn = self.connect(operation)?;
        let mut stmt = conn.prepare(sql).map_err(query_error)?;
        let mut rows = stmt.query(params).map_err(query_error)?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().map_err(query_error)? {
            let time: String = row.get(0).map_err(query_error)?;
            let content: String = row.get(1).map_err(query_error)?;
            let embedding: Option<String> = row.get(2).map_err(query_error)?;

            let timestamp =
                parse_timestamp(&time).map_err(|source| StoreError::Parse { operation, source })?;
            let embedding = match embedding {
                Some(text) => {
                    Vector::parse(&text).map_err(|source| StoreError::Parse { operation, source })?
                }
                None => Vector::default(),
            };
            entries.push(Entry {
                timestamp,
                content,
                embedding,
            });
        }

        debug!(%operation, count = entries.len(), "entries read");
        Ok(entries)
    }
}

impl EntryRepository for SqliteEntryStore {
    fn save(&self, entry: &Entry) -> Result<(), StoreError> {
        let operation = Operation::Save;
        let embedding = self.embedding_expr(&entry.embedding)?;
        let sql = format!("INSERT INTO entries (time, content, embedding) VALUES (?1, ?2, {embedding})");

        let conn = self.connect(operation)?;
        conn.execute(&sql, params![format_timestamp(&entry.timestamp), entry.content])
            .map_err(|e| StoreError::Write {
                operation,
                cause: format!("Failed to add entry: {e}"),
            })?;

        debug!(
            id = conn.last_insert_rowid(),
            embedded = !entry.embedding.is_empty(),
            "entry saved"
        );
        Ok(())
    }

    fn list(&self) -> Result<Vec<Entry>, StoreError> {
        let sql = format!("SELECT {SELECT_COLS} FROM entries ORDER BY time DESC, id DESC");
        self.query_entries(Operation::List, &sql, &[])
    }

    fn search_by_text(&self, substring: &str) -> Result<Vec<Entry>, StoreError> {
        let escaped = substring
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        let pattern = format!("%{escaped}%");
        let sql = format!(
            "SELECT {SELECT_COLS} FROM entries WHERE content LIKE ?1 ESCAPE '\\' ORDER BY time DESC, id DESC"
        );
        self.query_entries(Operation::SearchByText, &sql, &[&pattern])
    }

    fn search_by_vector(&self, query: &Vector) -> Result<Vec<Entry>, StoreError> {
        let operation = Operation::SearchByVector;
        self.check_dimension(operation, query)?;
        if let Some(idx) = query.first_non_finite() {
            return Err(StoreError::Query {
                operation,
                cause: format!("query vector component {idx} is not a finite number"),
            });
        }

        let blob_len = (self.config.dimension * 4) as i64;
        let sql = format!(
            "SELECT {SELECT_COLS} FROM entries
             WHERE embedding IS NOT NULL AND length(embedding) = ?1
             ORDER BY vector_distance_cos(embedding, {}) ASC, time DESC, id DESC",
            query.to_sql_literal()
        );
        self.query_entries(operation, &sql, &[&blob_len])
    }

    fn dimension(&self) -> usize {
        self.config.dimension
    }
}

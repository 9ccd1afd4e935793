use crate::domain::error::{Operation, StoreError};
use rusqlite::{Connection, OptionalExtension};

/// Idempotently creates the `entries` table and its indexes. The vector
/// index covers rows that carry an embedding, which is the set vector
/// search ranks over.
///
/// An existing table must have been created with the same dimension.
pub fn run_migrations(conn: &Connection, dimension: usize, vector_index: bool) -> Result<(), StoreError> {
    conn.execute_batch(&format!(
        "
        CREATE TABLE IF NOT EXISTS entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            time TIMESTAMP NOT NULL,
            content TEXT NOT NULL CHECK (content <> ''),
            embedding F32_BLOB({dimension})
        );

        CREATE INDEX IF NOT EXISTS entries_time_idx ON entries(time);
        "
    ))
    .map_err(|e| StoreError::Schema {
        cause: format!("Migration failed: {e}"),
    })?;

    let declared = declared_dimension(conn)?;
    if declared != dimension {
        return Err(StoreError::DimensionMismatch {
            operation: Operation::Init,
            expected: dimension,
            actual: declared,
        });
    }

    if vector_index {
        conn.execute_batch(
            "CREATE INDEX IF NOT EXISTS entries_embedding_idx ON entries(id) WHERE embedding IS NOT NULL",
        )
        .map_err(|e| StoreError::Schema {
            cause: format!("Vector index creation failed: {e}"),
        })?;
    }

    Ok(())
}

/// Dimension from the `F32_BLOB(n)` type the embedding column was declared with.
fn declared_dimension(conn: &Connection) -> Result<usize, StoreError> {
    let declared: Option<String> = conn
        .query_row(
            "SELECT type FROM pragma_table_info('entries') WHERE name = 'embedding'",
            [],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| StoreError::Schema {
            cause: format!("Failed to read entries schema: {e}"),
        })?;

    let declared = declared.ok_or_else(|| StoreError::Schema {
        cause: "entries table has no embedding column".into(),
    })?;
    declared
        .trim()
        .strip_prefix("F32_BLOB(")
        .and_then(|rest| rest.strip_suffix(')'))
        .and_then(|n| n.trim().parse().ok())
        .ok_or_else(|| StoreError::Schema {
            cause: format!("embedding column has unexpected type '{declared}'"),
        })
}

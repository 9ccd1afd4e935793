use crate::domain::entities::entry::Entry;
use crate::domain::error::StoreError;
use crate::domain::values::vector::Vector;

/// Append-only journal persistence. Every read returns fully decoded
/// entries, embedding included, or fails as a whole.
pub trait EntryRepository: Send + Sync {
    fn save(&self, entry: &Entry) -> Result<(), StoreError>;

    /// All entries, most recent first.
    fn list(&self) -> Result<Vec<Entry>, StoreError>;

    /// Entries whose content contains `substring`, most recent first.
    /// An empty substring matches every entry.
    fn search_by_text(&self, substring: &str) -> Result<Vec<Entry>, StoreError>;

    /// Embedded entries ordered by ascending cosine distance to `query`.
    fn search_by_vector(&self, query: &Vector) -> Result<Vec<Entry>, StoreError>;

    /// Embedding dimension every stored and query vector must have.
    fn dimension(&self) -> usize;
}

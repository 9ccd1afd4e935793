use crate::domain::entities::entry::Entry;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::domain::ports::entry_repository::EntryRepository;
use std::sync::Arc;
use tracing::warn;

pub struct WriteEntryUseCase {
    repo: Arc<dyn EntryRepository>,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl WriteEntryUseCase {
    pub fn new(repo: Arc<dyn EntryRepository>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self { repo, embedder }
    }

    pub async fn execute(&self, content: &str) -> Result<Entry, DomainError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(DomainError::InvalidInput("entry content is empty".into()));
        }

        let mut entry = Entry::new(content.to_string());

        // An entry is kept even when it cannot be embedded; it just won't
        // show up in semantic search.
        match self.embedder.embed(content, InputType::Document).await {
            Ok(vector) => entry.embedding = vector,
            Err(e) => warn!(error = %e, "saving entry without embedding"),
        }

        self.repo.save(&entry)?;
        Ok(entry)
    }
}

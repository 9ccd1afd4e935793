use crate::domain::entities::entry::Entry;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::domain::ports::entry_repository::EntryRepository;
use std::sync::Arc;

pub struct SearchUseCase {
    repo: Arc<dyn EntryRepository>,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl SearchUseCase {
    pub fn new(repo: Arc<dyn EntryRepository>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self { repo, embedder }
    }

    pub fn list(&self) -> Result<Vec<Entry>, DomainError> {
        Ok(self.repo.list()?)
    }

    pub fn by_text(&self, text: &str) -> Result<Vec<Entry>, DomainError> {
        Ok(self.repo.search_by_text(text)?)
    }

    pub async fn semantic(&self, query: &str) -> Result<Vec<Entry>, DomainError> {
        let vector = self.embedder.embed(query, InputType::Query).await?;
        if vector.is_empty() {
            return Ok(vec![]);
        }
        Ok(self.repo.search_by_vector(&vector)?)
    }
}

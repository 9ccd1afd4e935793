pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::search::SearchUseCase;
use crate::application::write_entry::WriteEntryUseCase;
use crate::config::{Config, ProviderConfig};
use crate::domain::entities::entry::Entry;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::entry_repository::EntryRepository;
use crate::infrastructure::embeddings::noop::NoopProvider;
use crate::infrastructure::embeddings::voyage::VoyageProvider;
use crate::infrastructure::sqlite::entry_store::{SqliteEntryStore, StoreConfig};
use std::sync::Arc;

pub struct Spire {
    write_uc: WriteEntryUseCase,
    search_uc: SearchUseCase,
}

impl Spire {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let embedder: Arc<dyn EmbeddingProvider> = match &config.provider {
            ProviderConfig::Voyage {
                api_key,
                model,
                base_url,
            } => Arc::new(VoyageProvider::new(
                api_key.clone(),
                Some(model.clone()),
                Some(base_url.clone()),
            )),
            ProviderConfig::Noop => Arc::new(NoopProvider),
        };

        Self::with_providers(config.store_config(), embedder)
    }

    pub fn with_providers(
        store_config: StoreConfig,
        embedder: Arc<dyn EmbeddingProvider>,
    ) -> Result<Self, DomainError> {
        let provider_dim = embedder.dimension();
        if provider_dim > 0 && provider_dim != store_config.dimension {
            return Err(DomainError::Config(format!(
                "embedding provider produces {provider_dim}-dimension vectors but the store expects {}",
                store_config.dimension
            )));
        }

        let repo: Arc<dyn EntryRepository> = Arc::new(SqliteEntryStore::open(store_config)?);

        Ok(Self {
            write_uc: WriteEntryUseCase::new(repo.clone(), embedder.clone()),
            search_uc: SearchUseCase::new(repo, embedder),
        })
    }

    pub async fn write(&self, content: &str) -> Result<Entry, DomainError> {
        self.write_uc.execute(content).await
    }

    pub fn entries(&self) -> Result<Vec<Entry>, DomainError> {
        self.search_uc.list()
    }

    pub fn search(&self, text: &str) -> Result<Vec<Entry>, DomainError> {
        self.search_uc.by_text(text)
    }

    pub async fn semantic_search(&self, query: &str) -> Result<Vec<Entry>, DomainError> {
        self.search_uc.semantic(query).await
    }
}

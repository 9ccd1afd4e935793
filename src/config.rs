use crate::domain::error::DomainError;
use crate::infrastructure::embeddings::voyage::{VoyageProvider, DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::infrastructure::sqlite::entry_store::StoreConfig;
use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "./spire.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderConfig {
    Noop,
    Voyage {
        api_key: String,
        model: String,
        base_url: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub provider: ProviderConfig,
    pub dimension: usize,
    pub vector_index: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source; `from_env` passes
    /// the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DomainError> {
        let db_path = lookup("SPIRE_DB").unwrap_or_else(|| DEFAULT_DB_PATH.into());
        let model = lookup("SPIRE_EMBEDDING_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into());

        let provider = match lookup("SPIRE_EMBEDDING_PROVIDER").as_deref().unwrap_or("noop") {
            "noop" => ProviderConfig::Noop,
            "voyage" => ProviderConfig::Voyage {
                api_key: lookup("VOYAGE_API_KEY").filter(|k| !k.is_empty()).ok_or_else(|| {
                    DomainError::Config("VOYAGE_API_KEY is required for the voyage provider".into())
                })?,
                model: model.clone(),
                base_url: lookup("SPIRE_EMBEDDING_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            },
            other => {
                return Err(DomainError::Config(format!(
                    "Unknown embedding provider: '{other}'. Use 'voyage' or 'noop'"
                )))
            }
        };

        let dimension = match lookup("SPIRE_EMBEDDING_DIMENSION") {
            Some(raw) => raw.parse::<usize>().map_err(|_| {
                DomainError::Config(format!("SPIRE_EMBEDDING_DIMENSION must be a positive integer, got '{raw}'"))
            })?,
            None => VoyageProvider::model_dimension(&model),
        };
        if dimension == 0 {
            return Err(DomainError::Config("SPIRE_EMBEDDING_DIMENSION must be positive".into()));
        }

        let vector_index = match lookup("SPIRE_VECTOR_INDEX").as_deref() {
            None | Some("true") | Some("1") => true,
            Some("false") | Some("0") => false,
            Some(other) => {
                return Err(DomainError::Config(format!(
                    "SPIRE_VECTOR_INDEX must be true or false, got '{other}'"
                )))
            }
        };

        Ok(Self {
            db_path: PathBuf::from(db_path),
            provider,
            dimension,
            vector_index,
        })
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.db_path.clone())
            .with_dimension(self.dimension)
            .with_vector_index(self.vector_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_PATH));
        assert_eq!(config.provider, ProviderConfig::Noop);
        assert_eq!(config.dimension, 512);
        assert!(config.vector_index);
    }

    #[test]
    fn test_voyage_requires_api_key() {
        let err = Config::from_lookup(lookup(&[("SPIRE_EMBEDDING_PROVIDER", "voyage")])).unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }

    #[test]
    fn test_voyage_config() {
        let config = Config::from_lookup(lookup(&[
            ("SPIRE_EMBEDDING_PROVIDER", "voyage"),
            ("VOYAGE_API_KEY", "secret"),
            ("SPIRE_EMBEDDING_MODEL", "voyage-3"),
            ("SPIRE_DB", "/tmp/journal.db"),
            ("SPIRE_VECTOR_INDEX", "false"),
        ]))
        .unwrap();
        assert_eq!(
            config.provider,
            ProviderConfig::Voyage {
                api_key: "secret".into(),
                model: "voyage-3".into(),
                base_url: DEFAULT_BASE_URL.into(),
            }
        );
        assert_eq!(config.dimension, 1024);
        assert!(!config.vector_index);
        assert_eq!(config.store_config().path, PathBuf::from("/tmp/journal.db"));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::from_lookup(lookup(&[("SPIRE_EMBEDDING_PROVIDER", "openai")])).is_err());
        assert!(Config::from_lookup(lookup(&[("SPIRE_EMBEDDING_DIMENSION", "abc")])).is_err());
        assert!(Config::from_lookup(lookup(&[("SPIRE_EMBEDDING_DIMENSION", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("SPIRE_VECTOR_INDEX", "maybe")])).is_err());
    }
}

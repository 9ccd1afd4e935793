use std::fmt;
use thiserror::Error;

/// Store operation an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Init,
    Save,
    List,
    SearchByText,
    SearchByVector,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init => write!(f, "init"),
            Self::Save => write!(f, "save"),
            Self::List => write!(f, "list"),
            Self::SearchByText => write!(f, "search_by_text"),
            Self::SearchByVector => write!(f, "search_by_vector"),
        }
    }
}

/// Malformed vector or timestamp text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Invalid vector '{input}': {reason}")]
    Vector { input: String, reason: String },

    #[error("Invalid timestamp '{input}': {reason}")]
    Timestamp { input: String, reason: String },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{operation}: database unavailable: {cause}")]
    Connection { operation: Operation, cause: String },

    #[error("init: schema setup failed: {cause}")]
    Schema { cause: String },

    #[error("{operation}: write failed: {cause}")]
    Write { operation: Operation, cause: String },

    #[error("{operation}: query failed: {cause}")]
    Query { operation: Operation, cause: String },

    #[error("{operation}: {source}")]
    Parse {
        operation: Operation,
        #[source]
        source: ParseError,
    },

    #[error("{operation}: vector has dimension {actual}, store expects {expected}")]
    DimensionMismatch {
        operation: Operation,
        expected: usize,
        actual: usize,
    },
}

impl StoreError {
    pub fn operation(&self) -> Operation {
        match self {
            Self::Schema { .. } => Operation::Init,
            Self::Connection { operation, .. }
            | Self::Write { operation, .. }
            | Self::Query { operation, .. }
            | Self::Parse { operation, .. }
            | Self::DimensionMismatch { operation, .. } => *operation,
        }
    }
}

/// Failure reported by an embedding provider.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("Embedding provider returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Embedding request failed: {0}")]
    Transport(String),

    #[error("Expected 1 embedding from provider, got {0}")]
    UnexpectedCount(usize),

    #[error("Could not decode embedding response: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),
}


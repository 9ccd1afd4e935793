use crate::domain::error::EmbeddingError;
use crate::domain::values::vector::Vector;

#[derive(Debug, Clone, Copy)]
pub enum InputType {
    Document,
    Query,
}

#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Exactly one vector for `text`. A provider with dimension 0 returns an
    /// empty vector.
    async fn embed(&self, text: &str, input_type: InputType) -> Result<Vector, EmbeddingError>;
    fn dimension(&self) -> usize;
}

use crate::domain::error::EmbeddingError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::domain::values::vector::Vector;

/// Provider for deployments without semantic search.
pub struct NoopProvider;

#[async_trait::async_trait]
impl EmbeddingProvider for NoopProvider {
    async fn embed(&self, _text: &str, _input_type: InputType) -> Result<Vector, EmbeddingError> {
        Ok(Vector::default())
    }

    fn dimension(&self) -> usize {
        0
    }
}

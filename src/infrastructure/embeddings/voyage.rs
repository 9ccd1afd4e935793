use crate::domain::error::EmbeddingError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::domain::values::vector::Vector;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_MODEL: &str = "voyage-3-lite";
pub const DEFAULT_BASE_URL: &str = "https://api.voyageai.com";

pub struct VoyageProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct VoyageRequest<'a> {
    input: [&'a str; 1],
    model: &'a str,
    input_type: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct VoyageResponse {
    /// Always "list".
    pub object: String,
    pub data: Vec<VoyageEmbedding>,
    pub model: String,
    pub usage: VoyageUsage,
}

#[derive(Debug, Deserialize)]
pub struct VoyageEmbedding {
    /// Always "embedding".
    pub object: String,
    pub embedding: Vector,
    pub index: usize,
}

#[derive(Debug, Deserialize)]
pub struct VoyageUsage {
    pub total_tokens: u64,
}

pub fn parse_embedding_response(body: &[u8]) -> Result<VoyageResponse, EmbeddingError> {
    serde_json::from_slice(body).map_err(|e| EmbeddingError::Decode(e.to_string()))
}

/// The one embedding a single-input request must yield.
fn single_embedding(response: VoyageResponse) -> Result<Vector, EmbeddingError> {
    let count = response.data.len();
    match response.data.into_iter().next() {
        Some(item) if count == 1 => Ok(item.embedding),
        _ => Err(EmbeddingError::UnexpectedCount(count)),
    }
}

impl VoyageProvider {
    pub fn new(api_key: String, model: Option<String>, base_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub fn model_dimension(model: &str) -> usize {
        match model {
            "voyage-3-lite" => 512,
            "voyage-3" | "voyage-code-3" => 1024,
            "voyage-3-large" | "voyage-large-2" => 1536,
            _ => 512,
        }
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for VoyageProvider {
    async fn embed(&self, text: &str, input_type: InputType) -> Result<Vector, EmbeddingError> {
        let it = match input_type {
            InputType::Document => "document",
            InputType::Query => "query",
        };

        let url = format!("{}/v1/embeddings", self.base_url);

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&VoyageRequest {
                input: [text],
                model: &self.model,
                input_type: it,
            })
            .send()
            .await
            .map_err(|e| EmbeddingError::Transport(format!("Voyage API error: {e}")))?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| EmbeddingError::Transport(format!("Voyage API error: {e}")))?;

        if !status.is_success() {
            return Err(EmbeddingError::Status {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let result = parse_embedding_response(&body)?;
        debug!(model = %result.model, tokens = result.usage.total_tokens, "voyage embedding received");

        single_embedding(result)
    }

    fn dimension(&self) -> usize {
        Self::model_dimension(&self.model)
    }
}

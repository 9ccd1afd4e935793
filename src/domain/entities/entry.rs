use crate::domain::values::vector::Vector;
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub timestamp: DateTime<FixedOffset>,
    pub content: String,
    /// Empty when the entry has not been embedded.
    #[serde(default, skip_serializing_if = "Vector::is_empty")]
    pub embedding: Vector,
}

impl Entry {
    /// A new entry stamped with the current time.
    pub fn new(content: String) -> Self {
        Self::at(Utc::now().into(), content)
    }

    pub fn at(timestamp: DateTime<FixedOffset>, content: String) -> Self {
        Self {
            timestamp,
            content,
            embedding: Vector::default(),
        }
    }

    pub fn with_embedding(mut self, embedding: Vector) -> Self {
        self.embedding = embedding;
        self
    }
}

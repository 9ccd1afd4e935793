//! Fixed-length f32 embedding and its textual forms.
//!
//! Two renderings exist:
//!
//! - the plain form `[1,2,3]`, a JSON array, which is what the engine hands
//!   back from `vector_extract` and what [`Vector::parse`] accepts
//! - the query-literal form `vector('[1,2,3]')`, which is inlined into SQL
//!
//! Components are written with the shortest decimal that round-trips at
//! 32-bit precision and never in exponential notation.

use crate::domain::error::ParseError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector(Vec<f32>);

impl Vector {
    pub fn new(values: Vec<f32>) -> Self {
        Vector(values)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of the first NaN or infinite component, if any.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.0.iter().position(|x| !x.is_finite())
    }

    /// Plain form: `[1,2,3]`.
    pub fn to_json_array(&self) -> String {
        let parts: Vec<String> = self.0.iter().map(|x| x.to_string()).collect();
        format!("[{}]", parts.join(","))
    }

    /// Query-literal form: `vector('[1,2,3]')`.
    ///
    /// Only numeric text ends up between the quotes, which is what makes it
    /// safe to splice into a statement. Never route free text through here.
    pub fn to_sql_literal(&self) -> String {
        format!("vector('{}')", self.to_json_array())
    }

    /// Parses the plain form. `[]` is a valid, zero-dimension vector.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        serde_json::from_str::<Vec<f32>>(text)
            .map(Vector)
            .map_err(|e| ParseError::Vector {
                input: text.to_string(),
                reason: e.to_string(),
            })
    }
}

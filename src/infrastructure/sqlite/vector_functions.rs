//! libSQL-style vector functions registered on each connection:
//! `vector(text|blob)`, `vector_extract(blob)` and
//! `vector_distance_cos(a, b)`. Vectors are stored as packed
//! little-endian f32 blobs.

use crate::domain::values::vector::Vector;
use rusqlite::functions::{Context, FunctionFlags};
use rusqlite::types::ValueRef;
use rusqlite::Connection;

pub fn register_vector_functions(conn: &Connection) -> rusqlite::Result<()> {
    let flags = FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC;

    conn.create_scalar_function("vector", 1, flags, |ctx| {
        Ok(vector_arg(ctx, 0)?.map(|v| serialize_vector(&v)))
    })?;

    conn.create_scalar_function("vector_extract", 1, flags, |ctx| {
        Ok(vector_arg(ctx, 0)?.map(|v| Vector::new(v).to_json_array()))
    })?;

    conn.create_scalar_function("vector_distance_cos", 2, flags, |ctx| {
        let (a, b) = match (vector_arg(ctx, 0)?, vector_arg(ctx, 1)?) {
            (Some(a), Some(b)) => (a, b),
            _ => return Ok(None),
        };
        if a.len() != b.len() {
            return Err(user_error(format!(
                "vector_distance_cos: dimensions differ ({} vs {})",
                a.len(),
                b.len()
            )));
        }
        Ok(Some(1.0 - cosine_similarity(&a, &b)))
    })?;

    Ok(())
}

/// Accepts a packed blob or the plain `[..]` text form; NULL passes through.
fn vector_arg(ctx: &Context<'_>, idx: usize) -> rusqlite::Result<Option<Vec<f32>>> {
    match ctx.get_raw(idx) {
        ValueRef::Null => Ok(None),
        ValueRef::Blob(bytes) => deserialize_vector(bytes).map(Some),
        ValueRef::Text(bytes) => {
            let text = std::str::from_utf8(bytes).map_err(|e| user_error(e.to_string()))?;
            Vector::parse(text)
                .map(|v| Some(v.into_inner()))
                .map_err(|e| rusqlite::Error::UserFunctionError(Box::new(e)))
        }
        _ => Err(user_error("expected a vector blob or text".to_string())),
    }
}

fn user_error(message: String) -> rusqlite::Error {
    rusqlite::Error::UserFunctionError(message.into())
}

pub(crate) fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let x = *x as f64;
        let y = *y as f64;
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 { 0.0 } else { dot / denom }
}

pub(crate) fn serialize_vector(v: &[f32]) -> Vec<u8> {
    v.iter().flat_map(|f| f.to_le_bytes()).collect()
}

fn deserialize_vector(bytes: &[u8]) -> rusqlite::Result<Vec<f32>> {
    if bytes.len() % 4 != 0 {
        return Err(user_error(format!(
            "vector blob length {} is not a multiple of 4",
            bytes.len()
        )));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

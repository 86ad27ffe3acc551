//! Error types for knowledge base and configuration loading
//!
//! Ranking and responding never fail; only loading data can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed corpus or configuration JSON.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share the same identifier.
    #[error("duplicate record id: {0}")]
    DuplicateId(String),

    /// A record is missing a required text field.
    #[error("record {id:?} has an empty {field}")]
    EmptyField { id: String, field: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;

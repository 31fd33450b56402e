//! Domain error types for PaintCalc.
//!
//! Mutations on the plan never fail; these errors cover translating raw
//! input into typed updates and decoding persisted records.

use thiserror::Error;

/// Errors raised while turning a dynamic field key into a typed update.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Unknown {entity} field: {field}")]
    UnknownField { entity: &'static str, field: String },
}

/// Errors raised while decoding or encoding a persisted record.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Corrupt record '{key}': {source}")]
    CorruptRecord {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode record '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage operation failed: {0}")]
    Storage(#[from] anyhow::Error),
}

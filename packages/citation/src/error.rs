//! Error types for the citation core.
//!
//! Malformed citation text and missing documents are reported as data
//! (`valid = false`, warnings) rather than errors. `CitationError` covers
//! the remaining faults: unresolvable identifiers at the API boundary,
//! store failures, and seed loading.

use thiserror::Error;

/// Main error type for the citation library.
#[derive(Debug, Error)]
pub enum CitationError {
    /// No document matched the supplied identifier or title.
    #[error("Statute not found: '{0}'")]
    StatuteNotFound(String),

    /// The backing document store failed.
    #[error("Document store error: {0}")]
    Store(String),

    /// Seed data was readable but inconsistent.
    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization error.
    #[error("YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for citation operations.
pub type Result<T> = std::result::Result<T, CitationError>;

//! Error types for catmatch

use thiserror::Error;

/// Main error type for catmatch operations.
///
/// Expected outcomes such as "no category matched" are never reported through
/// this type; they are modelled as `Option` or as dedicated enum variants by the
/// crate that produces them.
#[derive(Debug, Error)]
pub enum CatmatchError {
    /// Error in engine configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Taxonomy snapshot is unusable
    #[error("Taxonomy error: {0}")]
    Taxonomy(String),

    /// Attribute schema could not be obtained
    #[error("Schema error: {0}")]
    Schema(String),

    /// An ingest payload could not be decoded
    #[error("Payload error: {0}")]
    Payload(String),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for catmatch operations
pub type Result<T> = std::result::Result<T, CatmatchError>;

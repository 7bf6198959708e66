use crate::sources::SourceError;
use thiserror::Error;

/// Result type alias for webhook operations
pub type Result<T, E = HookError> = std::result::Result<T, E>;

/// Errors surfaced to the embedding caller.
///
/// Enrichment misses and transport failures never show up here: the former
/// degrade to fallback values, the latter are logged and absorbed so the
/// triggering submission is unaffected.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Collaborator read failed: {0}")]
    Source(#[from] SourceError),

    #[error("Payload serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

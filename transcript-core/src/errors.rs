use thiserror::Error;

/// Errors surfaced while decoding or encoding transcript documents.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document JSON failed to decode: {0}")]
    Json(#[from] serde_json::Error),
}

use thiserror::Error;

/// Errors raised at the serialization edges of the crate.
///
/// Tree operations themselves are total and never fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
    #[error("opaque value at `{path}` has no JSON representation")]
    Opaque { path: String },
}

//! Error types for study-core.

use thiserror::Error;

/// Errors from the phonetic lookup collaborator.
///
/// These never escape the validator, which degrades any failure to a
/// "no candidates" verdict; they exist so lookup implementations can
/// report what went wrong to logs.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("character not found: {0}")]
    NotFound(String),

    #[error("malformed payload for {character}: {detail}")]
    Malformed { character: String, detail: String },
}

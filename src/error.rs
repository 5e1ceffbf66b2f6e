// src/error.rs
use thiserror::Error;

/// Resolution failures are absorbed, not raised; the only fallible
/// surface is ingesting extraction payloads from the parser boundary.
#[derive(Debug, Error)]
pub enum RippleError {
    #[error("invalid extraction payload: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RippleError>;

//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Please enter a valid question")]
    EmptyQuestion,

    #[error("API key not configured")]
    MissingCredential,

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
}

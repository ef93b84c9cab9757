//! Core domain concepts.
//!
//! - [`question::Question`] — raw, non-blank user input
//! - [`normalize::normalize`] — the informational lowercase/clean/tokenize pass
//! - [`answer::Answer`] — model output or a failure description
//! - [`credential::Credential`] — a provider API key
//! - [`error::DomainError`] — domain-level errors

pub mod answer;
pub mod credential;
pub mod error;
pub mod normalize;
pub mod question;

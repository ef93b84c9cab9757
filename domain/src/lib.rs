//! Domain layer for llm-qa
//!
//! This crate contains the value objects shared by every surface.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Question**: raw, non-blank user input. This is what the model sees.
//! - **NormalizedQuestion**: a lowercase, punctuation-free, tokenized view of
//!   the question, shown to the user for transparency only.
//! - **Answer**: model output, or a failure rendered as `"Error: ..."`.
//! - **Credential**: the provider API key, resolved once per process.

pub mod core;
pub mod prompt;
pub mod providers;

// Re-export commonly used types
pub use crate::core::{
    answer::{Answer, ERROR_PREFIX},
    credential::Credential,
    error::DomainError,
    normalize::{NormalizedQuestion, normalize},
    question::Question,
};
pub use prompt::PromptTemplate;
pub use providers::{ProviderKind, ProviderSettings};

//! Application layer for llm-qa
//!
//! This crate contains the use case and the port definitions it depends on.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoProgress, QueryProgressNotifier},
};
pub use use_cases::ask_question::{AskQuestionOutput, AskQuestionUseCase};

//! Presentation layer for llm-qa
//!
//! This crate contains CLI definitions, the interactive question loop,
//! console formatting, progress display and the web surface.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;
pub mod web;

// Re-export commonly used types
pub use chat::{ChatRepl, SessionEnd};
pub use cli::commands::{Cli, Command, bind_address};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::QuerySpinner;
pub use web::{AppState, router, serve};

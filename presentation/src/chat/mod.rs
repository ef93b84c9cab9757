//! Interactive chat module
//!
//! Provides the line-based question loop for the terminal.

mod input;
mod repl;

pub use input::{EXIT_SENTINELS, SessionState, UserInput};
pub use repl::{ChatRepl, SessionEnd};

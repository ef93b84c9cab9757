//! Terminal output formatting

pub mod console;

use std::io::IsTerminal;

/// Turn ANSI colors on or off for everything formatted by this crate.
///
/// Colors stay off when stdout is not a terminal, whatever the config says.
pub fn set_color_enabled(enabled: bool) {
    if !use_color(enabled, std::io::stdout().is_terminal()) {
        colored::control::set_override(false);
    }
}

fn use_color(configured: bool, stdout_is_terminal: bool) -> bool {
    configured && stdout_is_terminal
}

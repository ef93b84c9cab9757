//! Answer value object

use serde::{Serialize, Serializer};

/// Prefix used when an answer carries a failure description
pub const ERROR_PREFIX: &str = "Error: ";

/// The outcome of asking one question (Value Object)
///
/// Produced once per question and handed straight back to the surface.
/// Failures are kept typed until presentation, where they render as
/// `"Error: <description>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Model output, passed through verbatim
    Text(String),
    /// Description of why the model could not be queried
    Failed(String),
}

impl Answer {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn failed(reason: impl std::fmt::Display) -> Self {
        Self::Failed(reason.to_string())
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Presentation form: the text itself, or the prefixed failure description
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Failed(reason) => format!("{ERROR_PREFIX}{reason}"),
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::Failed(reason) => write!(f, "{}{}", ERROR_PREFIX, reason),
        }
    }
}

impl Serialize for Answer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

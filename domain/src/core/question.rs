//! Question value object

use serde::{Deserialize, Serialize};

/// A question to be answered by the model (Value Object)
///
/// Holds the raw text exactly as the surface received it. Normalization
/// never rewrites this value; see [`crate::core::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Try to create a new question, returning None if the text is blank
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<&str> for Question {
    type Error = crate::DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Question::try_new(s).ok_or(crate::DomainError::EmptyQuestion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::try_new("What is Rust?").unwrap();
        assert_eq!(q.content(), "What is Rust?");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(Question::try_new("").is_none());
        assert!(Question::try_new("   ").is_none());
        assert!(Question::try_new("\t\n").is_none());
    }

    #[test]
    fn test_content_is_not_trimmed() {
        let q = Question::try_new("  padded  ").unwrap();
        assert_eq!(q.content(), "  padded  ");
    }

    #[test]
    fn test_try_from_str() {
        let q: Question = "What is 2+2?".try_into().unwrap();
        assert_eq!(q.into_content(), "What is 2+2?");

        let err = Question::try_from("  ").unwrap_err();
        assert!(matches!(err, crate::DomainError::EmptyQuestion));
    }
}

//! Question normalization
//!
//! A stateless lowercase / strip-punctuation / tokenize pass. The result is
//! informational only: callers display it, but the raw question is what gets
//! sent to the model.

use serde::{Deserialize, Serialize};
use unicode_general_category::{GeneralCategory, get_general_category};

/// Normalized form of a question (Value Object)
///
/// `tokens` is always `cleaned` split on separator runs, empty pieces dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedQuestion {
    /// Text as received
    pub original: String,
    /// Case-folded text
    pub lowercase: String,
    /// `lowercase` with everything except letters, numbers, `_` and separators removed
    pub cleaned: String,
    /// Whitespace-delimited words of `cleaned`
    pub tokens: Vec<String>,
}

/// Normalize raw question text. Total over all strings.
pub fn normalize(question: &str) -> NormalizedQuestion {
    let lowercase = question.to_lowercase();
    let cleaned: String = lowercase.chars().filter(|c| is_kept(*c)).collect();
    let tokens = tokenize(&cleaned);

    NormalizedQuestion {
        original: question.to_string(),
        lowercase,
        cleaned,
        tokens,
    }
}

fn tokenize(cleaned: &str) -> Vec<String> {
    cleaned
        .split(is_separator)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Letters and numbers by general category; combining marks are dropped.
fn is_kept(c: char) -> bool {
    c == '_' || is_separator(c) || is_word_char(c)
}

fn is_word_char(c: char) -> bool {
    use GeneralCategory::*;

    matches!(
        get_general_category(c),
        UppercaseLetter
            | LowercaseLetter
            | TitlecaseLetter
            | ModifierLetter
            | OtherLetter
            | DecimalNumber
            | LetterNumber
            | OtherNumber
    )
}

/// Unicode whitespace plus the information separators U+001C..=U+001F.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

//! Classification of a single line typed by the user

use qa_domain::Question;

/// Inputs that end the session, compared case-insensitively
pub const EXIT_SENTINELS: [&str; 3] = ["quit", "exit", "q"];

/// State of the interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    Terminated,
}

/// What a line of input means to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    Exit,
    Empty,
    Question(Question),
}

impl UserInput {
    /// Trim the line, then check for an exit sentinel before anything else.
    pub fn classify(line: &str) -> Self {
        let trimmed = line.trim();
        let lowered = trimmed.to_lowercase();

        if EXIT_SENTINELS.contains(&lowered.as_str()) {
            return UserInput::Exit;
        }

        match Question::try_new(trimmed) {
            Some(question) => UserInput::Question(question),
            None => UserInput::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_any_case() {
        for line in ["quit", "EXIT", "Q", "  Quit \n", "eXiT\r\n"] {
            assert_eq!(UserInput::classify(line), UserInput::Exit, "{line:?}");
        }
    }

    #[test]
    fn test_sentinel_must_be_whole_line() {
        assert!(matches!(
            UserInput::classify("quit now"),
            UserInput::Question(_)
        ));
        assert!(matches!(UserInput::classify("qq"), UserInput::Question(_)));
    }

    #[test]
    fn test_blank_lines_are_empty() {
        assert_eq!(UserInput::classify(""), UserInput::Empty);
        assert_eq!(UserInput::classify("   \t\n"), UserInput::Empty);
    }

    #[test]
    fn test_question_is_trimmed_raw_text() {
        match UserInput::classify("  What is Rust?  \n") {
            UserInput::Question(q) => assert_eq!(q.content(), "What is Rust?"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}

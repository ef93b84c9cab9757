//! Console output formatter for the interactive session

use colored::Colorize;
use qa_domain::{Answer, NormalizedQuestion, ProviderKind};

const BANNER_WIDTH: usize = 60;

/// Formats session text for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Title banner shown once when the session starts
    pub fn welcome(provider: ProviderKind, model: &str) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("LLM-POWERED Q&A SYSTEM - CLI VERSION"));
        output.push('\n');
        output.push_str(&format!(
            "{} {} ({})\n",
            "Provider:".cyan().bold(),
            provider.display_name(),
            model
        ));
        output.push_str("\nType 'quit' or 'exit' to end the session.\n");
        output
    }

    /// The four derived values of a normalized question
    pub fn preprocessing(normalized: &NormalizedQuestion) -> String {
        format!(
            "\n{}\n{} {}\n{} {}\n{} {}\n{} {:?}\n",
            "[Preprocessing]".dimmed(),
            "Original:".dimmed(),
            normalized.original,
            "Lowercase:".dimmed(),
            normalized.lowercase,
            "Cleaned:".dimmed(),
            normalized.cleaned,
            "Tokens:".dimmed(),
            normalized.tokens
        )
    }

    /// An answer framed by a banner
    pub fn answer(answer: &Answer) -> String {
        let line = "=".repeat(BANNER_WIDTH);
        let body = match answer {
            Answer::Text(_) => answer.to_string(),
            Answer::Failed(_) => answer.to_string().red().to_string(),
        };
        format!(
            "\n{}\n{}\n{}\n{}\n{}\n",
            line.cyan(),
            "ANSWER:".bold(),
            line.cyan(),
            body,
            line.cyan()
        )
    }

    pub fn prompt() -> String {
        format!("\n{} ", "Enter your question:".bold())
    }

    pub fn credential_prompt(provider: ProviderKind) -> String {
        format!(
            "\n{}\nEnter your {} API Key: ",
            "[Setup Required]".yellow().bold(),
            provider.display_name()
        )
    }

    pub fn missing_credential() -> String {
        format!("{}\n", "Error: API key is required!".red())
    }

    pub fn invalid_question() -> String {
        "Please enter a valid question.\n".to_string()
    }

    pub fn farewell() -> String {
        format!(
            "\n{}\n",
            "Thank you for using the Q&A system. Goodbye!".green()
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(BANNER_WIDTH);
        format!("{}\n    {}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}

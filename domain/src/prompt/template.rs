//! Prompt templates

/// Templates for building the prompt sent to the model
pub struct PromptTemplate;

impl PromptTemplate {
    /// Single-instruction prompt wrapping the user's raw question
    pub fn concise_answer(question: &str) -> String {
        format!(
            "Answer the following question clearly and concisely: {}",
            question
        )
    }
}

//! Ask Question use case.
//!
//! Sends one question to the configured provider and turns the outcome into
//! an [`Answer`]. Gateway failures never escape: they become
//! [`Answer::Failed`], which surfaces render as `"Error: ..."`.
//!
//! The model always receives the raw question. The normalized form is
//! computed for display only.

use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::QueryProgressNotifier;
use qa_domain::{Answer, Credential, NormalizedQuestion, PromptTemplate, Question, normalize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of [`AskQuestionUseCase::execute`]
#[derive(Debug, Clone)]
pub struct AskQuestionOutput {
    /// Informational normalized view of the question
    pub preprocessing: NormalizedQuestion,
    /// Model answer or failure
    pub answer: Answer,
}

/// Use case for answering a single question.
#[derive(Clone)]
pub struct AskQuestionUseCase {
    gateway: Arc<dyn LlmGateway>,
}

impl AskQuestionUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &Arc<dyn LlmGateway> {
        &self.gateway
    }

    /// Query the provider once with the raw question text.
    pub async fn query(
        &self,
        question: &str,
        credential: &Credential,
        progress: &dyn QueryProgressNotifier,
    ) -> Answer {
        let provider = self.gateway.provider();
        let model = self.gateway.model();
        let prompt = PromptTemplate::concise_answer(question);

        info!(%provider, model, "Sending question to LLM");
        debug!(prompt_len = prompt.len(), "Prompt built");

        progress.on_query_start(provider, model);
        let result = self.gateway.complete(&prompt, credential).await;
        progress.on_query_complete(result.is_ok());

        match result {
            Ok(text) => {
                debug!(answer_len = text.len(), "LLM answered");
                Answer::text(text)
            }
            Err(e) => {
                warn!(%provider, "LLM request failed: {}", e);
                Answer::failed(e)
            }
        }
    }

    /// Normalize the question, then query the provider with the raw text.
    pub async fn execute(
        &self,
        question: &Question,
        credential: &Credential,
        progress: &dyn QueryProgressNotifier,
    ) -> AskQuestionOutput {
        let preprocessing = normalize(question.content());
        let answer = self.query(question.content(), credential, progress).await;

        AskQuestionOutput {
            preprocessing,
            answer,
        }
    }
}

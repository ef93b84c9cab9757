//! REPL (Read-Eval-Print Loop) for interactive questions

use super::input::{SessionState, UserInput};
use crate::ConsoleFormatter;
use crate::QuerySpinner;
use qa_application::{AskQuestionUseCase, NoProgress, QueryProgressNotifier};
use qa_domain::{Credential, Question, normalize};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// How the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed an exit sentinel
    UserExit,
    /// Input closed before an exit sentinel
    EndOfInput,
    /// No API key was available and none was entered
    MissingCredential,
}

/// Interactive question loop
///
/// Generic over its input and output streams so it can run against
/// stdin/stdout or in-memory buffers.
pub struct ChatRepl {
    use_case: AskQuestionUseCase,
    show_preprocessing: bool,
    show_progress: bool,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: AskQuestionUseCase) -> Self {
        Self {
            use_case,
            show_preprocessing: true,
            show_progress: true,
        }
    }

    /// Set whether to print the normalized question before each answer
    pub fn with_preprocessing(mut self, show: bool) -> Self {
        self.show_preprocessing = show;
        self
    }

    /// Set whether to show the spinner while waiting
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the session until an exit sentinel or end of input.
    ///
    /// When `credential` is None the operator is asked for a key first.
    pub async fn run<R: BufRead, W: Write>(
        &self,
        credential: Option<Credential>,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<SessionEnd> {
        let gateway = self.use_case.gateway();
        write!(
            output,
            "{}",
            ConsoleFormatter::welcome(gateway.provider(), gateway.model())
        )?;

        let credential = match credential {
            Some(credential) => credential,
            None => match self.prompt_for_credential(input, output)? {
                Some(credential) => credential,
                None => {
                    write!(output, "{}", ConsoleFormatter::missing_credential())?;
                    return Ok(SessionEnd::MissingCredential);
                }
            },
        };

        info!("Interactive session started");

        let mut state = SessionState::AwaitingInput;
        let mut end = SessionEnd::EndOfInput;

        while state == SessionState::AwaitingInput {
            write!(output, "{}", ConsoleFormatter::prompt())?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                write!(output, "\n{}", ConsoleFormatter::farewell())?;
                break;
            }

            match UserInput::classify(&line) {
                UserInput::Exit => {
                    write!(output, "{}", ConsoleFormatter::farewell())?;
                    end = SessionEnd::UserExit;
                    state = SessionState::Terminated;
                }
                UserInput::Empty => {
                    write!(output, "{}", ConsoleFormatter::invalid_question())?;
                }
                UserInput::Question(question) => {
                    self.answer_question(&question, &credential, output)
                        .await?;
                }
            }
        }

        output.flush()?;
        debug!(?end, "Interactive session ended");
        Ok(end)
    }

    fn prompt_for_credential<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<Option<Credential>> {
        let provider = self.use_case.gateway().provider();
        write!(output, "{}", ConsoleFormatter::credential_prompt(provider))?;
        output.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        Ok(Credential::try_new(line))
    }

    async fn answer_question<W: Write>(
        &self,
        question: &Question,
        credential: &Credential,
        output: &mut W,
    ) -> io::Result<()> {
        if self.show_preprocessing {
            let normalized = normalize(question.content());
            write!(output, "{}", ConsoleFormatter::preprocessing(&normalized))?;
        }
        output.flush()?;

        let spinner;
        let progress: &dyn QueryProgressNotifier = if self.show_progress {
            spinner = QuerySpinner::new();
            &spinner
        } else {
            &NoProgress
        };

        let answer = self
            .use_case
            .query(question.content(), credential, progress)
            .await;

        write!(output, "{}", ConsoleFormatter::answer(&answer))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use qa_application::{GatewayError, LlmGateway};
    use qa_domain::ProviderKind;
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    struct ScriptedGateway {
        prompts: Mutex<Vec<String>>,
        fail: bool,
    }

    impl ScriptedGateway {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                prompts: Mutex::new(Vec::new()),
                fail,
            })
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl LlmGateway for ScriptedGateway {
        fn provider(&self) -> ProviderKind {
            ProviderKind::Groq
        }

        fn model(&self) -> &str {
            "scripted"
        }

        async fn complete(
            &self,
            prompt: &str,
            _credential: &Credential,
        ) -> Result<String, GatewayError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            if self.fail {
                Err(GatewayError::Timeout)
            } else {
                Ok("The answer is 4.".to_string())
            }
        }
    }

    fn repl(gateway: Arc<ScriptedGateway>) -> ChatRepl {
        ChatRepl::new(AskQuestionUseCase::new(gateway)).with_progress(false)
    }

    fn key() -> Option<Credential> {
        Credential::try_new("test-key")
    }

    async fn run_session(
        repl: &ChatRepl,
        credential: Option<Credential>,
        script: &str,
    ) -> (SessionEnd, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let end = repl.run(credential, &mut input, &mut output).await.unwrap();
        (end, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn test_sentinels_terminate_without_query() {
        for sentinel in ["quit", "exit", "q", "QUIT", "Exit", "Q"] {
            let gateway = ScriptedGateway::new(false);
            let repl = repl(gateway.clone());

            let (end, output) =
                run_session(&repl, key(), &format!("{}\nWhat is Rust?\n", sentinel)).await;

            assert_eq!(end, SessionEnd::UserExit, "{sentinel}");
            assert_eq!(gateway.calls(), 0, "{sentinel}");
            assert!(output.contains("Goodbye!"));
        }
    }

    #[tokio::test]
    async fn test_question_is_answered_with_raw_text() {
        let gateway = ScriptedGateway::new(false);
        let repl = repl(gateway.clone());

        let (end, output) = run_session(&repl, key(), "  What is 2+2?  \nexit\n").await;

        assert_eq!(end, SessionEnd::UserExit);
        assert_eq!(gateway.calls(), 1);
        assert_eq!(
            gateway.prompts.lock().unwrap()[0],
            "Answer the following question clearly and concisely: What is 2+2?"
        );
        assert!(output.contains("[Preprocessing]"));
        assert!(output.contains(r#"["what", "is", "22"]"#));
        assert!(output.contains("ANSWER:"));
        assert!(output.contains("The answer is 4."));
    }

    #[tokio::test]
    async fn test_empty_lines_reprompt() {
        let gateway = ScriptedGateway::new(false);
        let repl = repl(gateway.clone());

        let (end, output) = run_session(&repl, key(), "\n   \nq\n").await;

        assert_eq!(end, SessionEnd::UserExit);
        assert_eq!(gateway.calls(), 0);
        assert_eq!(output.matches("Please enter a valid question.").count(), 2);
    }

    #[tokio::test]
    async fn test_failure_printed_as_answer_and_loop_continues() {
        let gateway = ScriptedGateway::new(true);
        let repl = repl(gateway.clone());

        let (end, output) = run_session(&repl, key(), "first?\nsecond?\nquit\n").await;

        assert_eq!(end, SessionEnd::UserExit);
        assert_eq!(gateway.calls(), 2);
        assert_eq!(output.matches("Error: Timeout").count(), 2);
    }

    #[tokio::test]
    async fn test_preprocessing_can_be_hidden() {
        let gateway = ScriptedGateway::new(false);
        let repl = repl(gateway.clone()).with_preprocessing(false);

        let (_, output) = run_session(&repl, key(), "Hello?\nq\n").await;

        assert!(!output.contains("[Preprocessing]"));
        assert!(output.contains("The answer is 4."));
    }

    #[tokio::test]
    async fn test_end_of_input_terminates() {
        let gateway = ScriptedGateway::new(false);
        let repl = repl(gateway.clone());

        let (end, _) = run_session(&repl, key(), "Why?\n").await;

        assert_eq!(end, SessionEnd::EndOfInput);
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_missing_credential_prompts_then_gives_up() {
        let gateway = ScriptedGateway::new(false);
        let repl = repl(gateway.clone());

        let (end, output) = run_session(&repl, None, "\nWhat is Rust?\n").await;

        assert_eq!(end, SessionEnd::MissingCredential);
        assert_eq!(gateway.calls(), 0);
        assert!(output.contains("Enter your Groq API Key:"));
        assert!(output.contains("Error: API key is required!"));
    }

    #[tokio::test]
    async fn test_prompted_credential_starts_session() {
        let gateway = ScriptedGateway::new(false);
        let repl = repl(gateway.clone());

        let (end, output) = run_session(&repl, None, "gsk_typed\nWhat?\nq\n").await;

        assert_eq!(end, SessionEnd::UserExit);
        assert_eq!(gateway.calls(), 1);
        assert!(!output.contains("gsk_typed"));
    }
}

//! Spinner shown while waiting for the provider

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use qa_application::QueryProgressNotifier;
use qa_domain::ProviderKind;
use std::sync::Mutex;
use std::time::Duration;

/// Terminal spinner for a single in-flight query
pub struct QuerySpinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl QuerySpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for QuerySpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryProgressNotifier for QuerySpinner {
    fn on_query_start(&self, provider: ProviderKind, model: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!(
            "Sending to {} {}...",
            provider.display_name().bold(),
            format!("({})", model).dimmed()
        ));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_query_complete(&self, _success: bool) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let spinner = QuerySpinner::new();
        spinner.on_query_start(ProviderKind::Groq, "llama-3.1-70b-versatile");
        assert!(spinner.bar.lock().unwrap().is_some());

        spinner.on_query_complete(true);
        assert!(spinner.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_complete_without_start_is_harmless() {
        let spinner = QuerySpinner::default();
        spinner.on_query_complete(false);
        assert!(spinner.bar.lock().unwrap().is_none());
    }
}

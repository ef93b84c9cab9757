//! Progress notification port
//!
//! Lets a surface show that a model request is in flight.

use qa_domain::ProviderKind;

/// Callback for progress updates while a question is being answered
///
/// Implementations live in the presentation layer.
pub trait QueryProgressNotifier: Send + Sync {
    /// Called right before the request is sent
    fn on_query_start(&self, provider: ProviderKind, model: &str);

    /// Called once the provider answered or the request failed
    fn on_query_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl QueryProgressNotifier for NoProgress {
    fn on_query_start(&self, _provider: ProviderKind, _model: &str) {}
    fn on_query_complete(&self, _success: bool) {}
}

//! Credential resolution
//!
//! Runs once at startup. The result is passed explicitly to whichever
//! surface needs it; nothing below this point reads the environment.

use qa_domain::{Credential, ProviderSettings};
use tracing::debug;

/// Resolve the API key from the config file value, then the provider's env var.
pub fn resolve_credential(
    settings: &ProviderSettings,
    configured_key: Option<&str>,
) -> Option<Credential> {
    resolve_credential_with(settings, configured_key, |name| std::env::var(name).ok())
}

/// Same as [`resolve_credential`] with an injectable environment lookup.
pub fn resolve_credential_with(
    settings: &ProviderSettings,
    configured_key: Option<&str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<Credential> {
    if let Some(credential) = configured_key.and_then(Credential::try_new) {
        debug!(provider = %settings.kind, "Using API key from config file");
        return Some(credential);
    }

    let credential = lookup(&settings.api_key_env).and_then(Credential::try_new);
    if credential.is_some() {
        debug!(provider = %settings.kind, env = %settings.api_key_env, "Using API key from environment");
    }
    credential
}

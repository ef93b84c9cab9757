//! Credential value object

/// An API key for a hosted model provider
///
/// Resolved once at startup and passed by reference from there on.
/// `Debug` and `Display` never print the key itself.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a key, returning None if it is blank. Surrounding whitespace is dropped.
    pub fn try_new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The raw key, for building request headers
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl std::fmt::Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("***")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_rejected() {
        assert!(Credential::try_new("").is_none());
        assert!(Credential::try_new("  \n").is_none());
    }

    #[test]
    fn test_key_is_trimmed() {
        let c = Credential::try_new(" gsk_abc \n").unwrap();
        assert_eq!(c.expose(), "gsk_abc");
    }

    #[test]
    fn test_key_never_formatted() {
        let c = Credential::try_new("gsk_secret").unwrap();
        assert!(!format!("{:?}", c).contains("gsk_secret"));
        assert!(!format!("{}", c).contains("gsk_secret"));
    }
}

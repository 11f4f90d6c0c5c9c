//! Credential verification
//!
//! The form never compares credentials itself; it asks a [`CredentialVerifier`].

use crate::consts::form_consts::{VALID_ID, VALID_PASSWORD};

/// Decides whether an identifier/secret pair is acceptable.
///
/// Inputs are already trimmed and non-empty when the form calls this.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialVerifier {
    fn verify(&self, identifier: &str, secret: &str) -> bool;
}

/// Accepts exactly one identifier/secret pair, compared case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticCredentialVerifier {
    identifier: &'static str,
    secret: &'static str,
}

impl StaticCredentialVerifier {
    pub const fn new(identifier: &'static str, secret: &'static str) -> Self {
        Self { identifier, secret }
    }
}

impl Default for StaticCredentialVerifier {
    fn default() -> Self {
        Self::new(VALID_ID, VALID_PASSWORD)
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, identifier: &str, secret: &str) -> bool {
        identifier == self.identifier && secret == self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_accepts_built_in_pair() {
        let verifier = StaticCredentialVerifier::default();
        assert!(verifier.verify("teacher123", "password123"));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let verifier = StaticCredentialVerifier::default();
        assert!(!verifier.verify("Teacher123", "password123"));
        assert!(!verifier.verify("teacher123", "PASSWORD123"));
    }

    #[test]
    // The verifier compares exactly; trimming is the caller's job.
    fn test_does_not_trim() {
        let verifier = StaticCredentialVerifier::default();
        assert!(!verifier.verify(" teacher123", "password123"));
    }

    #[test]
    fn test_custom_pair() {
        let verifier = StaticCredentialVerifier::new("admin", "hunter2");
        assert!(verifier.verify("admin", "hunter2"));
        assert!(!verifier.verify("teacher123", "password123"));
    }
}

//! Login validation rule
//!
//! Turns the current form contents into one of three display outcomes.

use crate::consts::form_consts::{colors, text};
use crate::credentials::CredentialVerifier;
use ratatui::style::Color;
use thiserror::Error;

/// Why a submit did not log in. The display text is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// Identifier or secret is empty after trimming.
    #[error("Please enter ID and Password")]
    NeedsInput,
    /// Both fields filled but the verifier refused them. Deliberately does not
    /// say which field was wrong.
    #[error("Invalid ID or Password")]
    Rejected,
}

/// Result of one submit, as rendered in the feedback region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum LoginOutcome {
    Accepted,
    NeedsInput,
    Rejected,
}

impl LoginOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            LoginOutcome::Accepted => text::ACCEPTED,
            LoginOutcome::NeedsInput => text::NEEDS_INPUT,
            LoginOutcome::Rejected => text::REJECTED,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            LoginOutcome::Accepted => colors::SUCCESS,
            LoginOutcome::NeedsInput | LoginOutcome::Rejected => colors::WARNING,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, LoginOutcome::Accepted)
    }
}

impl From<Result<(), ValidationFailure>> for LoginOutcome {
    fn from(result: Result<(), ValidationFailure>) -> Self {
        match result {
            Ok(()) => LoginOutcome::Accepted,
            Err(ValidationFailure::NeedsInput) => LoginOutcome::NeedsInput,
            Err(ValidationFailure::Rejected) => LoginOutcome::Rejected,
        }
    }
}

/// Applies the login rule to raw field contents.
///
/// Both values are trimmed first. The verifier is only consulted when both are
/// non-empty.
pub fn validate(
    verifier: &dyn CredentialVerifier,
    identifier: &str,
    secret: &str,
) -> Result<(), ValidationFailure> {
    let identifier = identifier.trim();
    let secret = secret.trim();

    if identifier.is_empty() || secret.is_empty() {
        return Err(ValidationFailure::NeedsInput);
    }

    if verifier.verify(identifier, secret) {
        Ok(())
    } else {
        Err(ValidationFailure::Rejected)
    }
}

/// Convenience wrapper returning the display outcome directly.
pub fn evaluate(
    verifier: &dyn CredentialVerifier,
    identifier: &str,
    secret: &str,
) -> LoginOutcome {
    validate(verifier, identifier, secret).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{MockCredentialVerifier, StaticCredentialVerifier};
    use mockall::predicate;

    fn verifier() -> StaticCredentialVerifier {
        StaticCredentialVerifier::default()
    }

    #[test]
    fn test_empty_fields_need_input() {
        let cases = [
            ("", ""),
            ("teacher123", ""),
            ("", "password123"),
            ("   ", "password123"),
            ("teacher123", "\t "),
        ];
        for (id, pw) in cases {
            let outcome = evaluate(&verifier(), id, pw);
            assert_eq!(outcome, LoginOutcome::NeedsInput, "input {:?}", (id, pw));
            assert_eq!(outcome.message(), "Please enter ID and Password");
            assert_eq!(outcome.color(), Color::Red);
        }
    }

    #[test]
    fn test_valid_pair_is_accepted() {
        let outcome = evaluate(&verifier(), "teacher123", "password123");
        assert_eq!(outcome, LoginOutcome::Accepted);
        assert_eq!(outcome.message(), "Login successful");
        assert_eq!(outcome.color(), Color::Green);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(
            evaluate(&verifier(), "  teacher123  ", "password123"),
            LoginOutcome::Accepted
        );
        assert_eq!(
            evaluate(&verifier(), "teacher123", " password123\t"),
            LoginOutcome::Accepted
        );
    }

    #[test]
    // Wrong identifier, wrong secret and both wrong all read the same.
    fn test_rejection_does_not_reveal_which_field() {
        let wrong_id = validate(&verifier(), "teacher999", "password123");
        let wrong_pw = validate(&verifier(), "teacher123", "password999");
        let both = validate(&verifier(), "someone", "something");

        assert_eq!(wrong_id, Err(ValidationFailure::Rejected));
        assert_eq!(wrong_pw, wrong_id);
        assert_eq!(both, wrong_id);
        assert_eq!(ValidationFailure::Rejected.to_string(), "Invalid ID or Password");
        assert_eq!(LoginOutcome::from(both).message(), "Invalid ID or Password");
    }

    #[test]
    fn test_inner_whitespace_is_significant() {
        assert_eq!(
            evaluate(&verifier(), "teacher 123", "password123"),
            LoginOutcome::Rejected
        );
    }

    #[test]
    fn test_repeated_validation_is_stable() {
        let v = verifier();
        for (id, pw) in [("teacher123", "password123"), ("teacher123", "nope"), ("", "x")] {
            assert_eq!(evaluate(&v, id, pw), evaluate(&v, id, pw));
        }
    }

    #[test]
    fn test_verifier_skipped_for_empty_input() {
        let mut mock = MockCredentialVerifier::new();
        mock.expect_verify().never();

        assert_eq!(
            validate(&mock, " ", "password123"),
            Err(ValidationFailure::NeedsInput)
        );
    }

    #[test]
    fn test_verifier_receives_trimmed_values() {
        let mut mock = MockCredentialVerifier::new();
        mock.expect_verify()
            .with(predicate::eq("admin"), predicate::eq("hunter2"))
            .times(1)
            .return_const(true);

        assert_eq!(validate(&mock, "  admin ", "hunter2  "), Ok(()));
    }

    #[test]
    fn test_failure_display_matches_outcome_message() {
        for failure in [ValidationFailure::NeedsInput, ValidationFailure::Rejected] {
            let outcome = LoginOutcome::from(Err(failure));
            assert_eq!(failure.to_string(), outcome.message());
        }
    }
}

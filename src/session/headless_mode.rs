//! Check mode execution
//!
//! Applies the login rule once to values given on the command line.

use super::messages::SessionMessage;
use crate::credentials::CredentialVerifier;
use crate::error::AppError;
use crate::logging::{self, LogSink};
use crate::validation::{self, LoginOutcome};
use log::debug;

/// Runs a single validation without opening the form
///
/// Logs go to stderr. The message is printed on stdout when accepted and on
/// stderr otherwise.
///
/// # Returns
/// * `Ok(outcome)` - The outcome shown to the user
/// * `Err` - The logger could not be installed
pub fn run_check_mode(
    verifier: &dyn CredentialVerifier,
    identifier: &str,
    secret: &str,
) -> Result<LoginOutcome, AppError> {
    logging::init(LogSink::Stderr)?;

    let outcome = check(verifier, identifier, secret);
    debug!("Check evaluated to {}", outcome);
    Ok(outcome)
}

/// Evaluates and prints one outcome.
fn check(verifier: &dyn CredentialVerifier, identifier: &str, secret: &str) -> LoginOutcome {
    match validation::validate(verifier, identifier, secret) {
        Ok(()) => {
            SessionMessage::success(LoginOutcome::Accepted.message()).print();
            LoginOutcome::Accepted
        }
        Err(failure) => {
            SessionMessage::error(failure.to_string()).print();
            LoginOutcome::from(Err(failure))
        }
    }
}

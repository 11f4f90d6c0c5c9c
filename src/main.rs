mod config;
mod consts;
mod credentials;
mod error;
mod events;
mod logging;
mod session;
mod ui;
mod validation;

use crate::credentials::StaticCredentialVerifier;
use crate::error::AppError;
use crate::session::messages::SessionMessage;
use crate::session::{load_config, run_check_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::{error::Error, path::PathBuf, process::ExitCode};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Terminal login form for teachers
struct Args {
    /// Command to execute. Opens the login form when omitted.
    #[command(subcommand)]
    command: Option<Command>,

    /// Paint the form with a light background.
    #[arg(long)]
    with_background: bool,

    /// Append diagnostic logs to this file. Level follows RUST_LOG.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Validate an ID and password once without opening the form.
    Check {
        /// Teacher ID
        #[arg(long, value_name = "ID")]
        id: String,

        /// Password
        #[arg(long, value_name = "PASSWORD")]
        password: String,
    },
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Some(Command::Check { id, password }) => {
            let verifier = StaticCredentialVerifier::default();
            let outcome = run_check_mode(&verifier, &id, &password)?;
            if outcome.is_accepted() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        None => match run_form(args.with_background, args.log_file) {
            Ok(()) => Ok(ExitCode::SUCCESS),
            Err(e) => {
                SessionMessage::error(e.to_string()).print();
                Ok(ExitCode::FAILURE)
            }
        },
    }
}

fn run_form(with_background: bool, log_file: Option<PathBuf>) -> Result<(), AppError> {
    // Config problems are reported before the terminal is touched.
    let config = load_config()?;
    let session = setup_session(config, with_background, log_file);
    run_tui_mode(session)
}

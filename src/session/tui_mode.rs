//! TUI mode execution

use super::{messages::print_session_exit_success, setup::SessionData};
use crate::credentials::StaticCredentialVerifier;
use crate::error::AppError;
use crate::logging::{self, LogSink};
use crate::ui::{self, UIConfig};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};

/// Runs the login form in the terminal
///
/// This function handles:
/// 1. Optional file logging (stderr would corrupt the alternate screen)
/// 2. Terminal setup and cleanup
/// 3. Form construction and the UI loop
///
/// Once raw mode is on, every restore step runs whether setup, the UI loop or an
/// earlier restore step failed. The first error is returned.
///
/// # Arguments
/// * `session` - Merged settings from config file and flags
///
/// # Returns
/// * `Ok(())` - The user quit the form
/// * `Err` - Logger, terminal or event handling failed
pub fn run_tui_mode(session: SessionData) -> Result<(), AppError> {
    if let Some(path) = session.log_file.as_deref() {
        logging::init(LogSink::File(path))?;
    }
    info!("Starting login form");

    enable_raw_mode()?;
    let result = run_session(io::stdout(), session.ui_config);
    let restored = restore_terminal(&mut io::stdout());
    result.and(restored)?;

    info!("Login form closed");
    print_session_exit_success();
    Ok(())
}

/// Enters the alternate screen and runs the form until the user quits.
fn run_session<W: Write>(mut out: W, ui_config: UIConfig) -> io::Result<()> {
    execute!(out, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;

    let verifier = Box::new(StaticCredentialVerifier::default());
    let app = ui::App::new(verifier, ui_config);
    ui::run(&mut terminal, app)
}

/// Undoes everything terminal setup may have changed. Later steps still run when
/// an earlier one fails.
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show);
    raw.and(screen)
}

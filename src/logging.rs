use crate::error::AppError;
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::{env, fs::OpenOptions, path::Path};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

/// Where log records are written.
#[derive(Debug)]
pub enum LogSink<'a> {
    /// Standard error. Only safe while the terminal is not in the alternate screen.
    Stderr,
    /// Appended to a file.
    File(&'a Path),
}

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info, // Default to info if parsing fails
    }
}

/// Installs the global logger at the `RUST_LOG` threshold.
pub fn init(sink: LogSink<'_>) -> Result<(), AppError> {
    init_with_level(sink, get_rust_log_level().into())
}

/// Installs the global logger at an explicit threshold. Fails if a logger is
/// already installed in this process.
pub fn init_with_level(sink: LogSink<'_>, level: LevelFilter) -> Result<(), AppError> {
    let mut builder = Builder::new();
    builder.filter_level(level);

    match sink {
        LogSink::Stderr => {
            builder.target(Target::Stderr);
        }
        LogSink::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.target(Target::Pipe(Box::new(file)));
        }
    }

    builder.try_init()?;
    Ok(())
}

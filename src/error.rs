use std::fmt::Formatter;

use crate::levels::{MAX_LEVEL, SILENT};

/// Errors returned by this crate.
///
/// Constructing a [`Logger`](crate::Logger) or changing its level only ever
/// fails with [`InvalidLevel`](LoggerError::InvalidLevel). The other variants
/// come from reading a level out of text: [`parse_level`](crate::parse_level),
/// `Category::from_str` and [`Logger::from_env`](crate::Logger::from_env).
pub enum LoggerError {
    /// A level outside `[SILENT, max]` was requested.
    InvalidLevel { level: u8, max: u8 },
    /// A level name that matches no category, `silent`, or number.
    UnknownLevelName(String),
    /// The environment variable holding the level was not valid unicode.
    InvalidEnvironment(String),
}

impl LoggerError {
    pub(crate) fn invalid_level(level: u8) -> Self {
        LoggerError::InvalidLevel { level, max: MAX_LEVEL }
    }
}

fn format_logger_error(l: &LoggerError, fmt: &mut Formatter) -> std::fmt::Result {
    match l {
        LoggerError::InvalidLevel { level, max } => {
            write!(
                fmt, "Invalid Level {}: logger level must be >= {} and <= {}",
                level, SILENT, max
            )
        }
        LoggerError::UnknownLevelName(name) => {
            write!(fmt, "Unknown Level Name: {:?}", name)
        }
        LoggerError::InvalidEnvironment(var) => {
            write!(fmt, "Invalid Environment: {} is not valid unicode", var)
        }
    }
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        format_logger_error(self, f)
    }
}

impl std::fmt::Debug for LoggerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        format_logger_error(self, f)
    }
}

impl std::error::Error for LoggerError {}

//! Level constants, the fixed category set, and the process-wide prefix table.
//!
//! Every level is a superset of the ones below it: a logger at [`INIT`] also
//! emits [`INSTALL`], [`LISTEN`], ... down to [`ERROR`]. It goes up to 11.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;

use crate::error::LoggerError;

/// No log output at all.
pub const SILENT: u8 = 0;
/// Only errors are logged.
pub const ERROR: u8 = 1;
/// Blocking calls and lower are logged.
pub const BLOCKED: u8 = 2;
/// Warnings and lower are logged.
pub const WARN: u8 = 3;
/// Rejections (e.g., in a firewall) and lower are logged.
pub const REJECT: u8 = 4;
/// Listeners and lower are logged.
pub const LISTEN: u8 = 5;
/// Install notifications and lower are logged.
pub const INSTALL: u8 = 6;
/// Initialization notifications and lower are logged.
pub const INIT: u8 = 7;
/// Incoming requests and lower are logged.
pub const REQUEST: u8 = 8;
/// Info output and lower are logged.
pub const INFO: u8 = 9;
/// Verbose output and lower are logged.
pub const VERBOSE: u8 = 10;
/// All log output is shown.
pub const DEBUG: u8 = 11;

/// The most verbose level a [`Logger`](crate::Logger) may be configured with.
pub const MAX_LEVEL: u8 = DEBUG;

/// Sits above [`MAX_LEVEL`]; only the unconditional emitters gate against it.
pub(crate) const ALWAYS: u8 = MAX_LEVEL + 1;

/// A kind of log message. The discriminant is the category's rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    Error = ERROR,
    Blocked = BLOCKED,
    Warn = WARN,
    Reject = REJECT,
    Listen = LISTEN,
    Install = INSTALL,
    Init = INIT,
    Request = REQUEST,
    Info = INFO,
    Verbose = VERBOSE,
    Debug = DEBUG,
}

impl Category {
    /// Every category, least verbose first.
    pub const ALL: [Category; MAX_LEVEL as usize] = [
        Category::Error,
        Category::Blocked,
        Category::Warn,
        Category::Reject,
        Category::Listen,
        Category::Install,
        Category::Init,
        Category::Request,
        Category::Info,
        Category::Verbose,
        Category::Debug,
    ];

    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// The lowercase name used in configuration, e.g. `"warn"`.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Error => "error",
            Category::Blocked => "blocked",
            Category::Warn => "warn",
            Category::Reject => "reject",
            Category::Listen => "listen",
            Category::Install => "install",
            Category::Init => "init",
            Category::Request => "request",
            Category::Info => "info",
            Category::Verbose => "verbose",
            Category::Debug => "debug",
        }
    }

    /// Returns the category with the given rank. Rank 0 is silence, not a category.
    pub fn from_rank(rank: u8) -> Option<Category> {
        Category::ALL.get(usize::from(rank).checked_sub(1)?).copied()
    }

    /// The rendered prefix written in front of every message of this category.
    ///
    /// Styled with ANSI escapes when the `color` feature is enabled.
    pub fn prefix(self) -> &'static str {
        &PREFIXES[usize::from(self.rank())]
    }

    /// The bare 13 column label, without any styling.
    pub const fn label(self) -> &'static str {
        match self {
            Category::Error => "[***error***]",
            Category::Blocked => "[**blocked**]",
            Category::Warn => "[**warning**]",
            Category::Reject => "[ rejection ]",
            Category::Listen => "[ listening ]",
            Category::Install => "[ installed ]",
            Category::Init => "[initialized]",
            Category::Request => "[  request  ]",
            Category::Info => "[information]",
            Category::Verbose => "[  verbose  ]",
            Category::Debug => "[   debug   ]",
        }
    }

    /// `fg:bg` style spec for categories that stand out, see [`colorize`](crate::style::colorize).
    const fn style(self) -> Option<&'static str> {
        match self {
            Category::Error => Some("black:red"),
            Category::Blocked => Some("255+b:165"),
            Category::Warn => Some("red:yellow+h"),
            Category::Reject => Some("125+b:208"),
            Category::Listen => Some("black:cyan+h"),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = LoggerError;

    /// Case-insensitive lookup through [`LOG_LEVEL`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LOG_LEVEL
            .get(s.trim().to_ascii_lowercase().as_str())
            .and_then(|rank| Category::from_rank(*rank))
            .ok_or_else(|| LoggerError::UnknownLevelName(s.to_string()))
    }
}

fn render_prefix(category: Category) -> String {
    match category.style() {
        #[cfg(feature = "color")]
        Some(spec) => crate::style::colorize(category.label(), spec),
        _ => category.label().to_string(),
    }
}

lazy_static! {
    /// Translates human-readable level names to their rank.
    pub static ref LOG_LEVEL: HashMap<&'static str, u8> = Category::ALL
        .iter()
        .map(|category| (category.name(), category.rank()))
        .collect();

    /// Indexed by rank; slot 0 belongs to silence and stays empty.
    static ref PREFIXES: [String; MAX_LEVEL as usize + 1] = {
        let mut prefixes: [String; MAX_LEVEL as usize + 1] = Default::default();
        for category in Category::ALL {
            prefixes[usize::from(category.rank())] = render_prefix(category);
        }
        prefixes
    };
}

/// Whether a message of rank `message_level` passes a logger configured at
/// `logger_level`.
#[inline]
pub const fn enabled(logger_level: u8, message_level: u8) -> bool {
    if logger_level == SILENT || message_level == SILENT {
        return false;
    }
    message_level <= logger_level
}

/// Checks that `level` is one a logger may be configured with.
#[inline]
pub fn validate(level: u8) -> Result<u8, LoggerError> {
    if level > MAX_LEVEL {
        return Err(LoggerError::invalid_level(level));
    }
    Ok(level)
}

/// Parses a configured level from text.
///
/// Accepts `silent`, any category name, or a decimal level, case-insensitively.
/// Numbers are validated against the level range.
pub fn parse_level(text: &str) -> Result<u8, LoggerError> {
    let name = text.trim().to_ascii_lowercase();
    if name == "silent" {
        return Ok(SILENT);
    }
    if let Some(rank) = LOG_LEVEL.get(name.as_str()) {
        return Ok(*rank);
    }
    match name.parse::<u8>() {
        Ok(level) => validate(level),
        Err(_) => Err(LoggerError::UnknownLevelName(text.to_string())),
    }
}

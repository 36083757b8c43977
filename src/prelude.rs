use std::env::{self, VarError};
use std::fmt;

use lazy_static::lazy_static;

pub use crate::error::LoggerError;
pub use crate::levels::{parse_level, Category, LOG_LEVEL, MAX_LEVEL, SILENT};
pub use crate::writer::{LineWriter, Stderr, Stdout};
use crate::levels::{enabled, ALWAYS, INFO};
use crate::sync::AtomicLevel;

/// Environment variable read by [`Logger::global`] for its initial level.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Level used when the environment does not name one.
pub const FALLBACK_LEVEL: u8 = INFO;

/// Outputs only the log messages whose category is at or below its level.
///
/// `Logger` writes `"<prefix> <message>"` lines to a [`LineWriter`], stderr by
/// default. The level is the only mutable state and may be changed through a
/// shared reference, so one logger can serve many threads.
pub struct Logger<W: LineWriter = Stderr> {
    level: AtomicLevel,
    writer: W,
}

macro_rules! category_methods {
    ($($(#[$doc:meta])* $name:ident => $category:ident;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(&self, args: fmt::Arguments<'_>) {
                self.log(Category::$category, args)
            }
        )*
    };
}

macro_rules! must_functions {
    ($($(#[$doc:meta])* $name:ident => $category:ident;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(args: fmt::Arguments<'_>) {
                must(Category::$category, args)
            }
        )*
    };
}

impl Logger<Stderr> {
    /// Instantiates a stderr logger at `level`.
    ///
    /// # Errors
    ///
    /// [`LoggerError::InvalidLevel`] when `level` is above [`MAX_LEVEL`].
    pub fn new(level: u8) -> Result<Self, LoggerError> {
        Self::with_writer(level, Stderr)
    }

    /// Instantiates a stderr logger whose level is read from the environment
    /// variable `var`, or `fallback` when the variable is unset.
    ///
    /// The variable may hold a category name, `silent`, or a number.
    pub fn from_env(var: &str, fallback: u8) -> Result<Self, LoggerError> {
        let level = match env::var(var) {
            Ok(value) => parse_level(&value)?,
            Err(VarError::NotPresent) => fallback,
            Err(VarError::NotUnicode(_)) => {
                return Err(LoggerError::InvalidEnvironment(var.to_string()))
            }
        };
        Self::new(level)
    }

    /// Returns the process-wide logger, set up on first use from
    /// [`LOG_LEVEL_ENV`]. Requires the "singleton" feature to be enabled.
    ///
    /// A bad environment value is reported once and the logger starts at
    /// [`FALLBACK_LEVEL`].
    #[cfg(feature = "singleton")]
    #[cfg_attr(docsrs, doc(cfg(feature = "singleton")))]
    pub fn global() -> &'static Logger {
        lazy_static! {
            static ref LOGGER: Logger = Logger::from_env(LOG_LEVEL_ENV, FALLBACK_LEVEL)
                .unwrap_or_else(|e| {
                    must_warn(format_args!("{}, using level {}", e, FALLBACK_LEVEL));
                    Logger { level: AtomicLevel::unchecked(FALLBACK_LEVEL), writer: Stderr }
                });
        }

        &LOGGER
    }
}

impl<W: LineWriter> Logger<W> {
    /// Instantiates a logger at `level` that hands its lines to `writer`.
    ///
    /// # Errors
    ///
    /// [`LoggerError::InvalidLevel`] when `level` is above [`MAX_LEVEL`].
    pub fn with_writer(level: u8, writer: W) -> Result<Self, LoggerError> {
        Ok(Self { level: AtomicLevel::new(level)?, writer })
    }

    /// The pseudo-logger behind the `must_*` functions. Its level sits above
    /// [`MAX_LEVEL`], so every category passes.
    pub(crate) fn always(writer: W) -> Self {
        Self { level: AtomicLevel::unchecked(ALWAYS), writer }
    }

    /// Returns the logger's level.
    #[inline]
    pub fn level(&self) -> u8 {
        self.level.load()
    }

    /// Sets the logger's level.
    ///
    /// # Errors
    ///
    /// [`LoggerError::InvalidLevel`] when `level` is above [`MAX_LEVEL`]; the
    /// current level is kept.
    pub fn set_level(&self, level: u8) -> Result<(), LoggerError> {
        self.level.store(level)
    }

    /// Whether a message of `category` would currently be written.
    #[inline]
    pub fn enabled(&self, category: Category) -> bool {
        enabled(self.level(), category.rank())
    }

    /// Returns the line writer this logger hands its output to.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Formats and writes `args` under `category` if the level lets it through.
    pub fn log(&self, category: Category, args: fmt::Arguments<'_>) {
        if !self.enabled(category) {
            return;
        }
        self.writer.write_line(&format!("{} {}", category.prefix(), args));
    }

    category_methods! {
        /// Logs an error.
        error => Error;
        /// Logs a blocked message.
        blocked => Blocked;
        /// Logs a warning.
        warn => Warn;
        /// Logs a rejection.
        reject => Reject;
        /// Logs a listener message.
        listen => Listen;
        /// Logs an install message.
        install => Install;
        /// Logs an initialization message.
        init => Init;
        /// Logs a request.
        request => Request;
        /// Logs an info message.
        info => Info;
        /// Logs a verbose message.
        verbose => Verbose;
        /// Logs a debug message.
        debug => Debug;
    }
}

impl<W: LineWriter> fmt::Debug for Logger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}

#[cfg(not(all(test, not(feature = "loom"))))]
type UnconditionalWriter = Stderr;

#[cfg(all(test, not(feature = "loom")))]
type UnconditionalWriter = tests::ThreadCapture;

lazy_static! {
    static ref UNCONDITIONAL: Logger<UnconditionalWriter> =
        Logger::always(UnconditionalWriter::default());
}

/// Writes `args` under `category` to stderr regardless of any logger's level.
pub fn must(category: Category, args: fmt::Arguments<'_>) {
    UNCONDITIONAL.log(category, args)
}

must_functions! {
    /// Logs an error, always.
    must_error => Error;
    /// Logs a blocked message, always.
    must_blocked => Blocked;
    /// Logs a warning, always.
    must_warn => Warn;
    /// Logs a rejection, always.
    must_reject => Reject;
    /// Logs a listener message, always.
    must_listen => Listen;
    /// Logs an install message, always.
    must_install => Install;
    /// Logs an initialization message, always.
    must_init => Init;
    /// Logs a request, always.
    must_request => Request;
    /// Logs an info message, always.
    must_info => Info;
    /// Logs a verbose message, always.
    must_verbose => Verbose;
    /// Logs a debug message, always.
    must_debug => Debug;
}

/// Logs through `logger` under a [`Category`], with `format!` style arguments.
///
/// ```
/// use console_logger::{log, Category, Logger};
///
/// let logger = Logger::new(console_logger::MAX_LEVEL).unwrap();
/// log!(logger, Category::Listen, "listening on {}:{}", "0.0.0.0", 8080);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $category:expr, $($arg:tt)+) => {
        $logger.log($category, ::core::format_args!($($arg)+))
    };
}

/// Logs to stderr under a [`Category`] regardless of configuration.
///
/// ```
/// use console_logger::{must, Category};
///
/// must!(Category::Error, "cannot bind {}", 8080);
/// ```
#[macro_export]
macro_rules! must {
    ($category:expr, $($arg:tt)+) => {
        $crate::must($category, ::core::format_args!($($arg)+))
    };
}

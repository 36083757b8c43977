#![cfg_attr(docsrs, feature(doc_cfg))]

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
//! <br><br>
//!
//! ## You're probably looking for:
//! * [`Logger`](Logger)
//! * [`Category`](Category)
//! * [`must`](must) and the `must_*` functions

pub mod prelude;
pub mod error;
pub mod levels;
pub mod style;
pub mod writer;
pub(crate) mod sync;

pub use prelude::{
    Logger, LoggerError, Category, LineWriter, Stderr, Stdout,
    LOG_LEVEL, LOG_LEVEL_ENV, FALLBACK_LEVEL, MAX_LEVEL, SILENT, parse_level,
    must, must_error, must_blocked, must_warn, must_reject, must_listen, must_install,
    must_init, must_request, must_info, must_verbose, must_debug,
};

//! Error definitions.
//!
//! Initialization errors are fatal misconfiguration and are surfaced
//! immediately; lookup operations (`resolve`, `handle`) never fail and
//! therefore never appear here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::level::Level;

/// Errors that can occur while applying logging configuration.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// A configured level string could not be parsed.
    #[error("unrecognized log level {0:?}")]
    InvalidLevel(String),

    /// A per-module level string could not be parsed.
    #[error("cannot set level for module {module:?}: unrecognized log level {value:?}")]
    ModuleLevel { module: String, value: String },

    /// The logger pool was asked for a level no logger was built for.
    #[error("no logger built for level {0}")]
    LevelNotBuilt(Level),

    /// The configured log file path is empty.
    #[error("log file path must not be empty")]
    EmptyLogFilePath,

    /// The configured log file path points at a directory.
    #[error("log file path {0:?} is a directory")]
    LogFileIsDirectory(PathBuf),

    /// Opening or creating the log file failed.
    #[error("cannot open log file {path:?}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for logging configuration operations.
pub type LoggingResult<T> = Result<T, LoggingError>;

//! Error types for precheck.

use std::path::PathBuf;

use thiserror::Error;

/// Tool error type.
///
/// A failing check is not an error; it is reported through
/// [`RunReport`](crate::runner::RunReport).
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("Not inside a git repository: {0}")]
    NotAGitRepo(PathBuf),

    #[error("Check step name must not be empty")]
    EmptyStepName,

    #[error("Check step command must not be empty")]
    EmptyCommand,

    #[error("No check steps to run")]
    NoSteps,

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParse(e.to_string())
    }
}

/// Exit code used when the tool itself fails, as opposed to a check.
pub const TOOL_ERROR_EXIT_CODE: i32 = 2;

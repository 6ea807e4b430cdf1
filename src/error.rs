//! Error types for the admin shell

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Unknown theme '{0}' (expected light, dark or system)")]
    UnknownTheme(String),

    #[error("Invalid shell configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type ShellResult<T> = Result<T, ShellError>;

use std::path::PathBuf;
use thiserror::Error;

/// Failure to build [`Settings`](crate::config::Settings). Loading is
/// all-or-nothing, so any of these aborts startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required setting(s): {}", .0.join(", "))]
    MissingRequired(Vec<&'static str>),
    #[error("invalid value {value:?} for {field}: {reason}")]
    Invalid {
        field: &'static str,
        value: String,
        reason: String,
    },
    #[error("failed to read env file {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

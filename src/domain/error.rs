use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for neonmig operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// An environment file could not be decoded.
    #[error("Failed to parse {}: {details}", path.display())]
    Parse { path: PathBuf, details: String },

    /// The database block of an environment file is incomplete or malformed.
    #[error("Invalid environment '{environment}' in {}: {reason}", path.display())]
    InvalidEnvironment { path: PathBuf, environment: String, reason: String },

    /// The derived environment name shadows a control key of the merged config.
    #[error("Environment name '{environment}' in {} is reserved", path.display())]
    ReservedEnvironment { path: PathBuf, environment: String },

    /// Two files derived the same environment name.
    #[error(
        "Environment '{environment}' is defined by both {} and {}",
        first.display(),
        second.display()
    )]
    EnvironmentConflict { environment: String, first: PathBuf, second: PathBuf },

    /// Config file pattern is malformed.
    #[error("Invalid config file pattern '{0}': expected exactly one '*' wildcard")]
    InvalidPattern(String),

    /// A command with the same name is already registered.
    #[error("Command '{0}' is already registered")]
    DuplicateCommand(String),

    /// No command is registered under this name.
    #[error("Command '{0}' is not defined")]
    UnknownCommand(String),

    /// Requested environment is not part of the merged configuration.
    #[error("Environment '{name}' not found. Available: {available}")]
    UnknownEnvironment { name: String, available: String },

    /// Migration name is not CamelCase.
    #[error("Invalid migration name '{0}': must be CamelCase (e.g. AddUsersTable)")]
    InvalidMigrationName(String),

    /// The engine executable could not be started.
    #[error("Migration engine '{program}' could not be started: {details}")]
    EngineUnavailable { program: String, details: String },

    /// Project settings are invalid.
    #[error("Invalid settings: {0}")]
    Settings(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Command-line usage error.
    #[error("{0}")]
    Usage(String),

    /// Merged configuration could not be rendered.
    #[error("Failed to serialize configuration: {0}")]
    Serialization(String),
}

impl AppError {
    pub fn settings<S: Into<String>>(message: S) -> Self {
        AppError::Settings(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers that classify failures coarsely.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Parse { .. }
            | AppError::InvalidEnvironment { .. }
            | AppError::ReservedEnvironment { .. }
            | AppError::InvalidPattern(_)
            | AppError::InvalidMigrationName(_)
            | AppError::Settings(_)
            | AppError::TomlParseError(_)
            | AppError::Usage(_) => io::ErrorKind::InvalidInput,
            AppError::UnknownCommand(_)
            | AppError::UnknownEnvironment { .. }
            | AppError::EngineUnavailable { .. } => io::ErrorKind::NotFound,
            AppError::EnvironmentConflict { .. } | AppError::DuplicateCommand(_) => {
                io::ErrorKind::AlreadyExists
            }
            AppError::Serialization(_) => io::ErrorKind::Other,
        }
    }
}

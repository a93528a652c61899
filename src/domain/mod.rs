pub mod environment;
pub mod error;
pub mod file_pattern;
pub mod migration_config;
pub mod options;
pub mod settings;

pub use environment::{DEFAULT_CHARSET, EnvironmentConfig};
pub use error::AppError;
pub use file_pattern::{ConfigFilePattern, DEFAULT_FILE_PATTERN};
pub use migration_config::{
    DEFAULT_ENVIRONMENT, DEFAULT_MIGRATION_TABLE, Environments, MigrationConfig, MigrationPaths,
    RESERVED_ENVIRONMENT_KEYS,
};
pub use options::{ConflictPolicy, RegistratorOptions};
pub use settings::{ProjectSettings, SETTINGS_FILE};

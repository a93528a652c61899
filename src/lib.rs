//! neonmig: merge `config.<env>.neon` database settings into migration engine
//! configuration and register the migration commands into a console application.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


use std::path::Path;

use services::FilesystemConfigSource;

pub use app::commands::{CommandFactory, CommandSpec, default_commands};
pub use app::settings::{ResolvedSettings, SettingsOverrides};
pub use app::{Application, ConfigRegistrator};
pub use domain::{
    AppError, ConfigFilePattern, ConflictPolicy, EnvironmentConfig, MigrationConfig,
    RegistratorOptions,
};
pub use ports::{
    CommandBinding, CommandRegistry, EngineInvocation, MigrationCommand, MigrationEngine,
};

/// Build the merged configuration from environment files on disk.
pub fn build_config(options: &RegistratorOptions) -> Result<MigrationConfig, AppError> {
    app::build_config(&FilesystemConfigSource::new(), options)
}

/// Register the stock `create`, `migrate`, `rollback` and `status` commands.
pub fn register<R: CommandRegistry + ?Sized>(
    application: &mut R,
    options: &RegistratorOptions,
) -> Result<ConfigRegistrator, AppError> {
    register_with(application, options, &default_commands())
}

/// Register a custom command catalog.
pub fn register_with<R: CommandRegistry + ?Sized>(
    application: &mut R,
    options: &RegistratorOptions,
    commands: &[CommandSpec],
) -> Result<ConfigRegistrator, AppError> {
    ConfigRegistrator::register(application, &FilesystemConfigSource::new(), options, commands)
}

/// Resolve runtime settings for a project rooted at `root`.
pub fn resolve_settings(
    root: &Path,
    settings_file: Option<&Path>,
    overrides: SettingsOverrides,
) -> Result<ResolvedSettings, AppError> {
    let project_settings = app::settings::load_settings(root, settings_file)?;
    app::settings::resolve(root, overrides, project_settings)
}

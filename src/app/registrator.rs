//! Builds the merged migration configuration and registers the command catalog.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::app::commands::CommandSpec;
use crate::domain::{
    AppError, ConflictPolicy, EnvironmentConfig, MigrationConfig, RESERVED_ENVIRONMENT_KEYS,
    RegistratorOptions,
};
use crate::ports::{CommandRegistry, ConfigSource};
use crate::services::neon_decoder;

/// Result of registering migration commands into an application.
#[derive(Debug)]
pub struct ConfigRegistrator {
    config: Arc<MigrationConfig>,
    registered: Vec<String>,
}

impl ConfigRegistrator {
    /// Build the configuration from `options.configs_dir`, then bind every command in
    /// `commands` to it and add it to `application`, in order.
    pub fn register<R, S>(
        application: &mut R,
        source: &S,
        options: &RegistratorOptions,
        commands: &[CommandSpec],
    ) -> Result<Self, AppError>
    where
        R: CommandRegistry + ?Sized,
        S: ConfigSource + ?Sized,
    {
        let config = Arc::new(build_config(source, options)?);

        let mut registered = Vec::with_capacity(commands.len());
        for spec in commands {
            let mut command = (spec.factory)();
            command.set_name(&spec.name);
            command.set_config(Arc::clone(&config));
            application.add(command)?;
            debug!(command = %spec.name, "registered migration command");
            registered.push(spec.name.clone());
        }

        info!(
            environments = config.environments().len(),
            commands = registered.len(),
            "migration commands registered"
        );
        Ok(Self { config, registered })
    }

    pub fn config(&self) -> &Arc<MigrationConfig> {
        &self.config
    }

    /// Names added to the application, in registration order.
    pub fn registered(&self) -> &[String] {
        &self.registered
    }
}

/// Merge the default template with one record per accepted environment file.
///
/// Empty or undecodable files and files without `parameters.database.default`
/// are skipped.
/// Files are visited in file-name order.
pub fn build_config<S: ConfigSource + ?Sized>(
    source: &S,
    options: &RegistratorOptions,
) -> Result<MigrationConfig, AppError> {
    let mut config = MigrationConfig::new(
        options.migrations_dir.clone(),
        options.migration_table.clone(),
        options.default_environment.clone(),
    );
    let mut origins: HashMap<String, PathBuf> = HashMap::new();

    for file in source.list_files(&options.configs_dir)? {
        let Some(environment) =
            options.file_patterns.iter().find_map(|p| p.environment_name(&file.file_name))
        else {
            continue;
        };

        let content = source.read_file(&file.path)?;
        let document = match neon_decoder::decode(&content, &file.path) {
            Ok(document) => document,
            Err(err) => {
                warn!(
                    path = %file.path.display(),
                    error = %err,
                    "skipping config file that could not be decoded"
                );
                continue;
            }
        };
        if neon_decoder::is_falsy(&document) {
            debug!(path = %file.path.display(), "skipping empty config file");
            continue;
        }

        let Some(block) = neon_decoder::database_block(&document) else {
            debug!(path = %file.path.display(), "skipping config file without parameters.database.default");
            continue;
        };

        if RESERVED_ENVIRONMENT_KEYS.iter().any(|key| *key == environment) {
            return Err(AppError::ReservedEnvironment {
                path: file.path.clone(),
                environment: environment.to_string(),
            });
        }

        let record = EnvironmentConfig::from_database_block(block, &file.path, environment)?;

        if let Some(first) = origins.get(environment) {
            match options.conflict_policy {
                ConflictPolicy::Reject => {
                    return Err(AppError::EnvironmentConflict {
                        environment: environment.to_string(),
                        first: first.clone(),
                        second: file.path.clone(),
                    });
                }
                ConflictPolicy::LastWins => {
                    warn!(
                        environment,
                        replaced = %first.display(),
                        by = %file.path.display(),
                        "environment defined twice, keeping the later file"
                    );
                }
            }
        }

        debug!(environment, path = %file.path.display(), "loaded environment");
        origins.insert(environment.to_string(), file.path.clone());
        config.insert_environment(environment.to_string(), record);
    }

    Ok(config)
}

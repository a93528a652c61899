//! Merged configuration handed to the migration engine.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, EnvironmentConfig};

pub const DEFAULT_MIGRATION_TABLE: &str = "phinxlog";
pub const DEFAULT_ENVIRONMENT: &str = "local";

/// Keys of the `environments` block that are not environment names.
pub const RESERVED_ENVIRONMENT_KEYS: [&str; 2] = ["default_migration_table", "default_database"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationPaths {
    pub migrations: PathBuf,
}

/// The `environments` block: two control keys plus one entry per environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environments {
    pub default_migration_table: String,
    pub default_database: String,
    #[serde(flatten)]
    pub entries: BTreeMap<String, EnvironmentConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationConfig {
    paths: MigrationPaths,
    environments: Environments,
}

impl MigrationConfig {
    /// Create the default template with no environments.
    pub fn new(
        migrations_dir: impl Into<PathBuf>,
        migration_table: impl Into<String>,
        default_environment: impl Into<String>,
    ) -> Self {
        Self {
            paths: MigrationPaths { migrations: migrations_dir.into() },
            environments: Environments {
                default_migration_table: migration_table.into(),
                default_database: default_environment.into(),
                entries: BTreeMap::new(),
            },
        }
    }

    pub fn migrations_path(&self) -> &Path {
        &self.paths.migrations
    }

    pub fn migration_table(&self) -> &str {
        &self.environments.default_migration_table
    }

    pub fn default_environment(&self) -> &str {
        &self.environments.default_database
    }

    pub fn environments(&self) -> &BTreeMap<String, EnvironmentConfig> {
        &self.environments.entries
    }

    pub fn environment(&self, name: &str) -> Option<&EnvironmentConfig> {
        self.environments.entries.get(name)
    }

    /// Insert or replace an environment, returning the previous record.
    pub(crate) fn insert_environment(
        &mut self,
        name: String,
        config: EnvironmentConfig,
    ) -> Option<EnvironmentConfig> {
        self.environments.entries.insert(name, config)
    }

    /// Resolve an explicitly requested environment, or the default one.
    pub fn resolve_environment<'a>(
        &'a self,
        requested: Option<&'a str>,
    ) -> Result<(&'a str, &'a EnvironmentConfig), AppError> {
        let name = requested.unwrap_or_else(|| self.default_environment());
        self.environment(name).map(|config| (name, config)).ok_or_else(|| {
            AppError::UnknownEnvironment {
                name: name.to_string(),
                available: self.available_environments(),
            }
        })
    }

    fn available_environments(&self) -> String {
        if self.environments.entries.is_empty() {
            return "(none)".to_string();
        }
        self.environments.entries.keys().cloned().collect::<Vec<_>>().join(", ")
    }

    pub fn to_yaml(&self) -> Result<String, AppError> {
        serde_yaml::to_string(self).map_err(|e| AppError::Serialization(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(self).map_err(|e| AppError::Serialization(e.to_string()))
    }
}

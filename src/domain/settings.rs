//! Pure parse/validate for project settings (`neonmig.toml`).

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::{AppError, ConfigFilePattern, ConflictPolicy};

pub const SETTINGS_FILE: &str = "neonmig.toml";
pub const DEFAULT_CONFIGS_DIR: &str = "config";
pub const DEFAULT_MIGRATIONS_DIR: &str = "migrations";
pub const DEFAULT_ENGINE: &str = "phinx";

/// Project-level defaults; every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSettings {
    pub configs_dir: Option<PathBuf>,
    pub migrations_dir: Option<PathBuf>,
    pub migration_table: Option<String>,
    pub default_environment: Option<String>,
    pub file_patterns: Option<Vec<String>>,
    pub conflict_policy: Option<ConflictPolicy>,
    pub engine: Option<String>,
}

impl ProjectSettings {
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let settings: ProjectSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.migration_table.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(AppError::settings("migration_table must not be empty"));
        }
        if self.default_environment.as_deref().is_some_and(|e| e.trim().is_empty()) {
            return Err(AppError::settings("default_environment must not be empty"));
        }
        if self.engine.as_deref().is_some_and(|e| e.trim().is_empty()) {
            return Err(AppError::settings("engine must not be empty"));
        }
        if let Some(patterns) = &self.file_patterns {
            if patterns.is_empty() {
                return Err(AppError::settings("file_patterns must list at least one pattern"));
            }
            for pattern in patterns {
                ConfigFilePattern::new(pattern)?;
            }
        }
        Ok(())
    }

    /// Compiled file patterns, if the settings name any.
    pub fn compiled_patterns(&self) -> Result<Option<Vec<ConfigFilePattern>>, AppError> {
        self.file_patterns
            .as_ref()
            .map(|patterns| patterns.iter().map(|p| ConfigFilePattern::new(p)).collect())
            .transpose()
    }
}

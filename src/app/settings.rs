//! Project settings loading and precedence resolution.

use std::path::{Path, PathBuf};

use crate::domain::settings::{DEFAULT_CONFIGS_DIR, DEFAULT_ENGINE, DEFAULT_MIGRATIONS_DIR};
use crate::domain::{AppError, ConfigFilePattern, ConflictPolicy, ProjectSettings, RegistratorOptions, SETTINGS_FILE};

/// Values given on the command line or through environment variables.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub configs_dir: Option<PathBuf>,
    pub migrations_dir: Option<PathBuf>,
    pub migration_table: Option<String>,
    pub default_environment: Option<String>,
    pub file_patterns: Vec<ConfigFilePattern>,
    pub conflict_policy: Option<ConflictPolicy>,
    pub engine: Option<String>,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone)]
pub struct ResolvedSettings {
    pub options: RegistratorOptions,
    pub engine: String,
}

/// Load `neonmig.toml`.
///
/// An explicit path must exist. Without one, `<root>/neonmig.toml` is used when
/// present and defaults apply otherwise.
pub fn load_settings(root: &Path, explicit: Option<&Path>) -> Result<ProjectSettings, AppError> {
    let path = match explicit {
        Some(path) => {
            let path = absolutize(root, path);
            if !path.is_file() {
                return Err(AppError::settings(format!(
                    "settings file not found: {}",
                    path.display()
                )));
            }
            path
        }
        None => {
            let path = root.join(SETTINGS_FILE);
            if !path.is_file() {
                return Ok(ProjectSettings::default());
            }
            path
        }
    };

    let content = std::fs::read_to_string(&path)?;
    ProjectSettings::parse_toml(&content)
}

/// Merge overrides over settings over built-in defaults. Relative paths resolve
/// against `root`.
pub fn resolve(
    root: &Path,
    overrides: SettingsOverrides,
    settings: ProjectSettings,
) -> Result<ResolvedSettings, AppError> {
    let configs_dir = overrides
        .configs_dir
        .or(settings.configs_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIGS_DIR));
    let migrations_dir = overrides
        .migrations_dir
        .or(settings.migrations_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MIGRATIONS_DIR));

    let mut options =
        RegistratorOptions::new(absolutize(root, &configs_dir), absolutize(root, &migrations_dir));

    if let Some(table) = overrides.migration_table.or(settings.migration_table.clone()) {
        if table.trim().is_empty() {
            return Err(AppError::settings("migration table must not be empty"));
        }
        options = options.with_migration_table(table);
    }
    if let Some(environment) = overrides.default_environment.or(settings.default_environment.clone())
    {
        if environment.trim().is_empty() {
            return Err(AppError::settings("default environment must not be empty"));
        }
        options = options.with_default_environment(environment);
    }

    if !overrides.file_patterns.is_empty() {
        options = options.with_file_patterns(overrides.file_patterns);
    } else if let Some(patterns) = settings.compiled_patterns()? {
        options = options.with_file_patterns(patterns);
    }

    if let Some(policy) = overrides.conflict_policy.or(settings.conflict_policy) {
        options = options.with_conflict_policy(policy);
    }

    let engine = overrides.engine.or(settings.engine).unwrap_or_else(|| DEFAULT_ENGINE.to_string());

    Ok(ResolvedSettings { options, engine })
}

fn absolutize(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { root.join(path) }
}

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, ConfigFilePattern, DEFAULT_ENVIRONMENT, DEFAULT_MIGRATION_TABLE};

/// What to do when two files derive the same environment name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictPolicy {
    /// Fail with [`AppError::EnvironmentConflict`].
    #[default]
    Reject,
    /// The file visited later replaces the earlier record.
    LastWins,
}

impl ConflictPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            ConflictPolicy::Reject => "reject",
            ConflictPolicy::LastWins => "last-wins",
        }
    }
}

impl FromStr for ConflictPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reject" => Ok(ConflictPolicy::Reject),
            "last-wins" => Ok(ConflictPolicy::LastWins),
            other => Err(AppError::settings(format!(
                "unknown conflict policy '{}': expected 'reject' or 'last-wins'",
                other
            ))),
        }
    }
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inputs for building the merged configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistratorOptions {
    pub configs_dir: PathBuf,
    pub migrations_dir: PathBuf,
    pub migration_table: String,
    pub default_environment: String,
    /// Tried in order; the first pattern that matches a file name wins.
    pub file_patterns: Vec<ConfigFilePattern>,
    pub conflict_policy: ConflictPolicy,
}

impl RegistratorOptions {
    pub fn new(configs_dir: impl Into<PathBuf>, migrations_dir: impl Into<PathBuf>) -> Self {
        Self {
            configs_dir: configs_dir.into(),
            migrations_dir: migrations_dir.into(),
            migration_table: DEFAULT_MIGRATION_TABLE.to_string(),
            default_environment: DEFAULT_ENVIRONMENT.to_string(),
            file_patterns: vec![ConfigFilePattern::default()],
            conflict_policy: ConflictPolicy::default(),
        }
    }

    pub fn with_migration_table(mut self, table: impl Into<String>) -> Self {
        self.migration_table = table.into();
        self
    }

    pub fn with_default_environment(mut self, environment: impl Into<String>) -> Self {
        self.default_environment = environment.into();
        self
    }

    pub fn with_file_patterns(mut self, patterns: Vec<ConfigFilePattern>) -> Self {
        self.file_patterns = patterns;
        self
    }

    pub fn with_conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.conflict_policy = policy;
        self
    }
}

//! File name patterns that select environment files and name their environment.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::domain::AppError;

pub const DEFAULT_FILE_PATTERN: &str = "config.*.neon";

/// A glob with exactly one `*`, e.g. `config.*.neon`.
///
/// The wildcard part of a matching file name is the environment name.
#[derive(Debug, Clone)]
pub struct ConfigFilePattern {
    glob: String,
    regex: Regex,
}

impl ConfigFilePattern {
    pub fn new(glob: &str) -> Result<Self, AppError> {
        let Some((prefix, suffix)) = glob.split_once('*') else {
            return Err(AppError::InvalidPattern(glob.to_string()));
        };
        if suffix.contains('*') || glob.contains('/') || glob.contains('\\') {
            return Err(AppError::InvalidPattern(glob.to_string()));
        }

        let source = format!(r"^{}(?P<env>.+){}$", regex::escape(prefix), regex::escape(suffix));
        let regex = Regex::new(&source).map_err(|_| AppError::InvalidPattern(glob.to_string()))?;
        Ok(Self { glob: glob.to_string(), regex })
    }

    pub fn as_str(&self) -> &str {
        &self.glob
    }

    /// Environment name captured from a bare file name, if the name matches.
    pub fn environment_name<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        self.regex.captures(file_name).and_then(|caps| caps.name("env")).map(|m| m.as_str())
    }
}

impl Default for ConfigFilePattern {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_PATTERN).expect("default pattern is valid")
    }
}

impl FromStr for ConfigFilePattern {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ConfigFilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.glob)
    }
}

impl PartialEq for ConfigFilePattern {
    fn eq(&self, other: &Self) -> bool {
        self.glob == other.glob
    }
}

impl Eq for ConfigFilePattern {}

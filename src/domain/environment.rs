//! Per-environment database connection record.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::domain::AppError;

pub const DEFAULT_CHARSET: &str = "utf8";

/// Connection parameters for one environment, in the shape the migration engine reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub adapter: String,
    pub host: String,
    pub name: String,
    pub user: String,
    pub pass: String,
    pub charset: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl EnvironmentConfig {
    /// Normalize a `parameters.database.default` block.
    ///
    /// Source keys `dbname` and `password` map to `name` and `pass`. `charset`
    /// falls back to [`DEFAULT_CHARSET`]; `port` stays absent unless given.
    pub fn from_database_block(
        block: &Value,
        path: &Path,
        environment: &str,
    ) -> Result<Self, AppError> {
        let invalid = |reason: String| AppError::InvalidEnvironment {
            path: path.to_path_buf(),
            environment: environment.to_string(),
            reason,
        };

        if !block.is_mapping() {
            return Err(invalid("database block must be a mapping".into()));
        }

        let required = |key: &str| -> Result<String, AppError> {
            match block.get(key) {
                None | Some(Value::Null) => Err(invalid(format!("missing required key '{}'", key))),
                Some(value) => scalar_text(value)
                    .ok_or_else(|| invalid(format!("key '{}' must be a scalar value", key))),
            }
        };

        let charset = match block.get("charset") {
            None | Some(Value::Null) => DEFAULT_CHARSET.to_string(),
            Some(value) => scalar_text(value)
                .ok_or_else(|| invalid("key 'charset' must be a scalar value".into()))?,
        };

        let port = match block.get("port") {
            None | Some(Value::Null) => None,
            Some(value) => Some(parse_port(value).ok_or_else(|| {
                invalid(format!("key 'port' must be an integer in 0..=65535, got {}", render(value)))
            })?),
        };

        Ok(Self {
            adapter: required("adapter")?,
            host: required("host")?,
            name: required("dbname")?,
            user: required("user")?,
            pass: required("password")?,
            charset,
            port,
        })
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

fn parse_port(value: &Value) -> Option<u16> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|p| u16::try_from(p).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn render(value: &Value) -> String {
    serde_yaml::to_string(value).map(|s| s.trim().to_string()).unwrap_or_else(|_| "?".into())
}

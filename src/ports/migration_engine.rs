use std::sync::Arc;

use crate::domain::{AppError, MigrationConfig};

/// One request for the external migration engine.
#[derive(Debug, Clone)]
pub struct EngineInvocation {
    /// Engine command name (`create`, `migrate`, `rollback`, `status`).
    pub command: String,
    pub config: Arc<MigrationConfig>,
    pub environment: Option<String>,
    /// Arguments passed through after the engine's own options.
    pub args: Vec<String>,
}

impl EngineInvocation {
    pub fn new(command: impl Into<String>, config: Arc<MigrationConfig>) -> Self {
        Self { command: command.into(), config, environment: None, args: Vec::new() }
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }
}

/// Port for the engine that actually executes migrations.
pub trait MigrationEngine {
    /// Run the invocation and return the engine's exit code.
    fn run(&self, invocation: &EngineInvocation) -> Result<i32, AppError>;
}

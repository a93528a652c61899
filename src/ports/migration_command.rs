use std::sync::Arc;

use clap::ArgMatches;

use crate::domain::{AppError, MigrationConfig};
use crate::ports::MigrationEngine;

/// Name and configuration a command is registered with.
#[derive(Debug, Default, Clone)]
pub struct CommandBinding {
    name: String,
    config: Option<Arc<MigrationConfig>>,
}

impl CommandBinding {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> Option<&Arc<MigrationConfig>> {
        self.config.as_ref()
    }

    /// Bound configuration, or a usage error naming the command.
    pub fn bound_config(&self) -> Result<&Arc<MigrationConfig>, AppError> {
        self.config.as_ref().ok_or_else(|| {
            AppError::Usage(format!("Command '{}' has no migration configuration bound", self.name))
        })
    }
}

/// A named console command bound to the merged migration configuration.
pub trait MigrationCommand {
    fn binding(&self) -> &CommandBinding;

    fn binding_mut(&mut self) -> &mut CommandBinding;

    /// Argument surface, named after [`MigrationCommand::name`].
    fn definition(&self) -> clap::Command;

    /// Execute with parsed arguments and return the process exit code.
    fn execute(&self, matches: &ArgMatches, engine: &dyn MigrationEngine) -> Result<i32, AppError>;

    /// Name the host application dispatches on.
    fn name(&self) -> &str {
        self.binding().name()
    }

    fn set_name(&mut self, name: &str) {
        self.binding_mut().name = name.to_string();
    }

    fn set_config(&mut self, config: Arc<MigrationConfig>) {
        self.binding_mut().config = Some(config);
    }

    /// Bound configuration, `None` until [`MigrationCommand::set_config`] is called.
    fn config(&self) -> Option<&Arc<MigrationConfig>> {
        self.binding().config()
    }
}

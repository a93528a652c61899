use std::sync::Arc;

use clap::ArgMatches;

use super::{environment_arg, selected_environment};
use crate::domain::AppError;
use crate::ports::{CommandBinding, EngineInvocation, MigrationCommand, MigrationEngine};

const ENGINE_COMMAND: &str = "status";

/// Shows which migrations have been applied to an environment.
#[derive(Debug, Default)]
pub struct StatusCommand {
    binding: CommandBinding,
}

impl StatusCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boxed() -> Box<dyn MigrationCommand> {
        Box::new(Self::new())
    }
}

impl MigrationCommand for StatusCommand {
    fn binding(&self) -> &CommandBinding {
        &self.binding
    }

    fn binding_mut(&mut self) -> &mut CommandBinding {
        &mut self.binding
    }

    fn definition(&self) -> clap::Command {
        clap::Command::new(self.binding.name().to_string())
            .about("Show migration status")
            .arg(environment_arg())
    }

    fn execute(&self, matches: &ArgMatches, engine: &dyn MigrationEngine) -> Result<i32, AppError> {
        let config = self.binding.bound_config()?;
        let environment = selected_environment(config, matches)?;

        let invocation =
            EngineInvocation::new(ENGINE_COMMAND, Arc::clone(config)).with_environment(environment);
        engine.run(&invocation)
    }
}

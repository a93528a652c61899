use std::sync::Arc;

use clap::ArgMatches;

use super::{environment_arg, selected_environment, target_arg, target_args};
use crate::domain::AppError;
use crate::ports::{CommandBinding, EngineInvocation, MigrationCommand, MigrationEngine};

const ENGINE_COMMAND: &str = "migrate";

/// Applies pending migrations to an environment.
#[derive(Debug, Default)]
pub struct MigrateCommand {
    binding: CommandBinding,
}

impl MigrateCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boxed() -> Box<dyn MigrationCommand> {
        Box::new(Self::new())
    }
}

impl MigrationCommand for MigrateCommand {
    fn binding(&self) -> &CommandBinding {
        &self.binding
    }

    fn binding_mut(&mut self) -> &mut CommandBinding {
        &mut self.binding
    }

    fn definition(&self) -> clap::Command {
        clap::Command::new(self.binding.name().to_string())
            .about("Migrate the database")
            .arg(environment_arg())
            .arg(target_arg())
    }

    fn execute(&self, matches: &ArgMatches, engine: &dyn MigrationEngine) -> Result<i32, AppError> {
        let config = self.binding.bound_config()?;
        let environment = selected_environment(config, matches)?;

        let invocation = EngineInvocation::new(ENGINE_COMMAND, Arc::clone(config))
            .with_environment(environment)
            .with_args(target_args(matches));
        engine.run(&invocation)
    }
}

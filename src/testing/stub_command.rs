use clap::ArgMatches;

use crate::domain::AppError;
use crate::ports::{CommandBinding, MigrationCommand, MigrationEngine};

/// Command double that does nothing but hold its binding.
#[derive(Debug, Default)]
pub struct StubCommand {
    binding: CommandBinding,
}

impl StubCommand {
    pub fn boxed() -> Box<dyn MigrationCommand> {
        Box::new(Self::default())
    }
}

impl MigrationCommand for StubCommand {
    fn binding(&self) -> &CommandBinding {
        &self.binding
    }

    fn binding_mut(&mut self) -> &mut CommandBinding {
        &mut self.binding
    }

    fn definition(&self) -> clap::Command {
        clap::Command::new(self.binding.name().to_string())
    }

    fn execute(&self, _matches: &ArgMatches, _engine: &dyn MigrationEngine) -> Result<i32, AppError> {
        Ok(0)
    }
}

use std::fs;
use std::sync::Arc;

use clap::{Arg, ArgMatches};

use crate::domain::AppError;
use crate::ports::{CommandBinding, EngineInvocation, MigrationCommand, MigrationEngine};

const ENGINE_COMMAND: &str = "create";

/// Creates a new migration script in the configured migrations path.
#[derive(Debug, Default)]
pub struct CreateCommand {
    binding: CommandBinding,
}

impl CreateCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boxed() -> Box<dyn MigrationCommand> {
        Box::new(Self::new())
    }
}

/// Migration names are CamelCase class names: `AddUsersTable`.
fn validate_migration_name(name: &str) -> Result<(), AppError> {
    let mut chars = name.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric());
    if valid { Ok(()) } else { Err(AppError::InvalidMigrationName(name.to_string())) }
}

impl MigrationCommand for CreateCommand {
    fn binding(&self) -> &CommandBinding {
        &self.binding
    }

    fn binding_mut(&mut self) -> &mut CommandBinding {
        &mut self.binding
    }

    fn definition(&self) -> clap::Command {
        clap::Command::new(self.binding.name().to_string())
            .about("Create a new migration")
            .arg(
                Arg::new("name")
                    .required(true)
                    .value_name("NAME")
                    .help("CamelCase name of the migration, e.g. AddUsersTable"),
            )
    }

    fn execute(&self, matches: &ArgMatches, engine: &dyn MigrationEngine) -> Result<i32, AppError> {
        let config = self.binding.bound_config()?;
        let name = matches
            .get_one::<String>("name")
            .ok_or_else(|| AppError::Usage("Missing migration name".into()))?;
        validate_migration_name(name)?;

        fs::create_dir_all(config.migrations_path())?;

        let invocation =
            EngineInvocation::new(ENGINE_COMMAND, Arc::clone(config)).with_args(vec![name.clone()]);
        engine.run(&invocation)
    }
}

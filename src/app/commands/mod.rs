//! Migration commands bound to the merged configuration.

mod create;
mod migrate;
mod rollback;
mod status;

use clap::{Arg, ArgMatches};

use crate::domain::{AppError, MigrationConfig};
use crate::ports::MigrationCommand;

pub use create::CreateCommand;
pub use migrate::MigrateCommand;
pub use rollback::RollbackCommand;
pub use status::StatusCommand;

/// Builds an unnamed, unbound command instance.
pub type CommandFactory = fn() -> Box<dyn MigrationCommand>;

/// A command name paired with the factory that creates it.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub name: String,
    pub factory: CommandFactory,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>, factory: CommandFactory) -> Self {
        Self { name: name.into(), factory }
    }
}

/// The stock catalog: `create`, `migrate`, `rollback`, `status`.
pub fn default_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new("create", CreateCommand::boxed),
        CommandSpec::new("migrate", MigrateCommand::boxed),
        CommandSpec::new("rollback", RollbackCommand::boxed),
        CommandSpec::new("status", StatusCommand::boxed),
    ]
}

pub(crate) fn environment_arg() -> Arg {
    Arg::new("environment")
        .short('e')
        .long("environment")
        .value_name("NAME")
        .help("Target environment (defaults to the configured default_database)")
}

pub(crate) fn target_arg() -> Arg {
    Arg::new("target")
        .short('t')
        .long("target")
        .value_name("VERSION")
        .value_parser(clap::value_parser!(u64))
        .help("Migration version to stop at")
}

/// Resolve `--environment`, falling back to the default environment.
pub(crate) fn selected_environment(
    config: &MigrationConfig,
    matches: &ArgMatches,
) -> Result<String, AppError> {
    let requested = matches.get_one::<String>("environment").map(String::as_str);
    let (name, _) = config.resolve_environment(requested)?;
    Ok(name.to_string())
}

pub(crate) fn target_args(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_one::<u64>("target")
        .map(|target| vec!["--target".to_string(), target.to_string()])
        .unwrap_or_default()
}

use std::collections::BTreeMap;
use std::ffi::OsString;

use clap::error::ErrorKind;

use crate::domain::AppError;
use crate::ports::{CommandRegistry, MigrationCommand, MigrationEngine};

/// Host console application: a table of named commands with clap dispatch.
pub struct Application {
    name: String,
    version: String,
    commands: BTreeMap<String, Box<dyn MigrationCommand>>,
}

impl Application {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self { name: name.into(), version: version.into(), commands: BTreeMap::new() }
    }

    pub fn get(&self, name: &str) -> Option<&dyn MigrationCommand> {
        self.commands.get(name).map(|command| command.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Argument surface with one subcommand per registered command.
    pub fn definition(&self) -> clap::Command {
        clap::Command::new(self.name.clone())
            .version(self.version.clone())
            .subcommand_required(true)
            .subcommands(self.commands.values().map(|command| command.definition()))
    }

    /// Parse `args` (including the program name) and run the selected command.
    pub fn run<I, T>(&self, args: I, engine: &dyn MigrationEngine) -> Result<i32, AppError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = match self.definition().try_get_matches_from(args) {
            Ok(matches) => matches,
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                err.print()?;
                return Ok(0);
            }
            Err(err) => return Err(usage_error(&err)),
        };

        let Some((name, sub_matches)) = matches.subcommand() else {
            return Err(AppError::Usage("No command given".into()));
        };
        let command =
            self.commands.get(name).ok_or_else(|| AppError::UnknownCommand(name.to_string()))?;
        command.execute(sub_matches, engine)
    }
}

/// Flatten a clap parse error into [`AppError::Usage`].
pub(crate) fn usage_error(err: &clap::Error) -> AppError {
    let rendered = err.render().to_string();
    let message = rendered.trim_end();
    AppError::Usage(message.strip_prefix("error: ").unwrap_or(message).to_string())
}

impl CommandRegistry for Application {
    fn add(&mut self, command: Box<dyn MigrationCommand>) -> Result<(), AppError> {
        let name = command.name().to_string();
        if self.commands.contains_key(&name) {
            return Err(AppError::DuplicateCommand(name));
        }
        self.commands.insert(name, command);
        Ok(())
    }
}

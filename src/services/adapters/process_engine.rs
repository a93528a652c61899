use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::domain::AppError;
use crate::ports::{EngineInvocation, MigrationEngine};

/// Runs an external migration engine executable.
///
/// The merged configuration is written to a temporary YAML file that lives for the
/// duration of the child process. `program` is split on whitespace, so it may
/// carry leading arguments (`php vendor/bin/phinx`) but its path cannot contain
/// spaces.
#[derive(Debug, Clone)]
pub struct ProcessMigrationEngine {
    program: String,
    working_dir: PathBuf,
}

impl ProcessMigrationEngine {
    pub fn new(program: impl Into<String>, working_dir: PathBuf) -> Self {
        Self { program: program.into(), working_dir }
    }

    fn write_config(&self, invocation: &EngineInvocation) -> Result<NamedTempFile, AppError> {
        let yaml = invocation.config.to_yaml()?;
        let mut file = tempfile::Builder::new().prefix("neonmig-").suffix(".yml").tempfile()?;
        file.write_all(yaml.as_bytes())?;
        file.flush()?;
        Ok(file)
    }

    fn command_line(&self, invocation: &EngineInvocation, config_path: &str) -> Vec<String> {
        let mut args: Vec<String> = self.program.split_whitespace().map(str::to_string).collect();
        args.push(invocation.command.clone());
        args.push("--configuration".into());
        args.push(config_path.to_string());
        if let Some(environment) = &invocation.environment {
            args.push("--environment".into());
            args.push(environment.clone());
        }
        args.extend(invocation.args.iter().cloned());
        args
    }
}

impl MigrationEngine for ProcessMigrationEngine {
    fn run(&self, invocation: &EngineInvocation) -> Result<i32, AppError> {
        if self.program.trim().is_empty() {
            return Err(AppError::EngineUnavailable {
                program: self.program.clone(),
                details: "empty engine command".into(),
            });
        }

        let config_file = self.write_config(invocation)?;
        let config_path = config_file.path().to_string_lossy().to_string();

        let argv = self.command_line(invocation, &config_path);
        let (program, args) = argv.split_at(1);
        let program = &program[0];

        info!(engine = %program, command = %invocation.command, "running migration engine");
        debug!(argv = ?argv, "engine command line");

        let status = Command::new(program)
            .args(args)
            .current_dir(&self.working_dir)
            .status()
            .map_err(|e| AppError::EngineUnavailable {
                program: program.clone(),
                details: e.to_string(),
            })?;

        Ok(status.code().unwrap_or(1))
    }
}

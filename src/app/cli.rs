//! CLI Adapter.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use crate::app::{Application, usage_error};
use crate::app::commands::default_commands;
use crate::app::registrator::ConfigRegistrator;
use crate::app::settings::{self, SettingsOverrides};
use crate::domain::{AppError, ConfigFilePattern, ConflictPolicy};
use crate::services::{FilesystemConfigSource, ProcessMigrationEngine};

const BIN_NAME: &str = "neonmig";
const LOG_ENV: &str = "NEONMIG_LOG";

#[derive(Parser)]
#[command(name = "neonmig")]
#[command(version)]
#[command(
    about = "Run database migrations against environments defined in config.<env>.neon files",
    long_about = None
)]
struct Cli {
    /// Project settings file (defaults to ./neonmig.toml when present)
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,
    /// Directory scanned for environment files
    #[arg(long, env = "NEONMIG_CONFIGS_DIR", value_name = "DIR")]
    configs_dir: Option<PathBuf>,
    /// Directory containing migration scripts
    #[arg(long, env = "NEONMIG_MIGRATIONS_DIR", value_name = "DIR")]
    migrations_dir: Option<PathBuf>,
    /// Table that records applied migrations
    #[arg(long, value_name = "NAME")]
    migration_table: Option<String>,
    /// Environment used when a command gets no --environment
    #[arg(long, value_name = "NAME")]
    default_environment: Option<String>,
    /// Environment file pattern with one '*' wildcard (repeatable)
    #[arg(long = "pattern", value_name = "GLOB")]
    patterns: Vec<ConfigFilePattern>,
    /// What to do when two files define the same environment: reject or last-wins
    #[arg(long, value_name = "POLICY")]
    conflict_policy: Option<ConflictPolicy>,
    /// Migration engine executable, optionally with leading arguments.
    /// Split on whitespace, so the executable path must not contain spaces.
    #[arg(long, env = "NEONMIG_ENGINE", value_name = "PROGRAM")]
    engine: Option<String>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Command and its arguments (config, list, create, migrate, rollback, status)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    command: Vec<String>,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn execute(cli: Cli) -> Result<i32, AppError> {
    let root = std::env::current_dir()?;
    let project_settings = settings::load_settings(&root, cli.settings.as_deref())?;
    let overrides = SettingsOverrides {
        configs_dir: cli.configs_dir,
        migrations_dir: cli.migrations_dir,
        migration_table: cli.migration_table,
        default_environment: cli.default_environment,
        file_patterns: cli.patterns,
        conflict_policy: cli.conflict_policy,
        engine: cli.engine,
    };
    let resolved = settings::resolve(&root, overrides, project_settings)?;

    let mut application = Application::new(BIN_NAME, env!("CARGO_PKG_VERSION"));
    let registrator = ConfigRegistrator::register(
        &mut application,
        &FilesystemConfigSource::new(),
        &resolved.options,
        &default_commands(),
    )?;

    let first = cli.command.first().cloned();
    match first.as_deref() {
        None | Some("list") => {
            for name in application.names() {
                println!("{}", name);
            }
            Ok(0)
        }
        Some("config") => {
            let format = config_format(&cli.command)?;
            let rendered = match format.as_str() {
                "json" => registrator.config().to_json()?,
                _ => registrator.config().to_yaml()?,
            };
            println!("{}", rendered.trim_end());
            Ok(0)
        }
        Some(_) => {
            let engine = ProcessMigrationEngine::new(resolved.engine, root);
            let args = std::iter::once(BIN_NAME.to_string()).chain(cli.command);
            application.run(args, &engine)
        }
    }
}

fn config_format(args: &[String]) -> Result<String, AppError> {
    let matches = clap::Command::new("config")
        .about("Print the merged migration configuration")
        .arg(
            Arg::new("format")
                .long("format")
                .value_parser(["yaml", "json"])
                .default_value("yaml"),
        )
        .try_get_matches_from(args)
        .map_err(|e| usage_error(&e))?;

    Ok(matches.get_one::<String>("format").cloned().unwrap_or_else(|| "yaml".to_string()))
}

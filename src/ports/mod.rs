mod command_registry;
mod config_source;
mod migration_command;
mod migration_engine;

pub use command_registry::CommandRegistry;
pub use config_source::{ConfigFile, ConfigSource};
pub use migration_command::{CommandBinding, MigrationCommand};
pub use migration_engine::{EngineInvocation, MigrationEngine};

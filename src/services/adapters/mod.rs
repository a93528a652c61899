mod filesystem_config_source;
mod process_engine;

pub use filesystem_config_source::FilesystemConfigSource;
pub use process_engine::ProcessMigrationEngine;

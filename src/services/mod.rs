pub mod adapters;
pub mod neon_decoder;

pub use adapters::{FilesystemConfigSource, ProcessMigrationEngine};

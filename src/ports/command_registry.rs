use crate::domain::AppError;
use crate::ports::MigrationCommand;

/// Port for the host application's command table.
pub trait CommandRegistry {
    /// Register a command under its name. Fails if the name is taken.
    fn add(&mut self, command: Box<dyn MigrationCommand>) -> Result<(), AppError>;
}

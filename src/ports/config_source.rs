use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// A regular file found directly inside a configuration directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub file_name: String,
}

/// Port for reading environment files.
pub trait ConfigSource {
    /// List regular files directly inside `dir`, sorted by file name.
    ///
    /// Not recursive. Subdirectories are excluded.
    fn list_files(&self, dir: &Path) -> Result<Vec<ConfigFile>, AppError>;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;
}

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::{ConfigFile, ConfigSource};

/// Reads environment files from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemConfigSource;

impl FilesystemConfigSource {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigSource for FilesystemConfigSource {
    fn list_files(&self, dir: &Path) -> Result<Vec<ConfigFile>, AppError> {
        let mut files = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
                debug!(path = %path.display(), "skipping file with non UTF-8 name");
                continue;
            };
            files.push(ConfigFile { path, file_name });
        }

        files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(files)
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        Ok(fs::read_to_string(path)?)
    }
}

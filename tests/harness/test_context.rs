//! Shared testing harness for `neonmig` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a project with empty `config/` and `migrations/` directories.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(work_dir.join("config")).expect("Failed to create config directory");
        fs::create_dir_all(work_dir.join("migrations"))
            .expect("Failed to create migrations directory");

        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub(crate) fn config_dir(&self) -> PathBuf {
        self.work_dir.join("config")
    }

    pub(crate) fn migrations_dir(&self) -> PathBuf {
        self.work_dir.join("migrations")
    }

    /// Write a raw file into `config/`.
    pub(crate) fn write_config(&self, file_name: &str, content: &str) {
        fs::write(self.config_dir().join(file_name), content)
            .unwrap_or_else(|e| panic!("Failed to write {}: {}", file_name, e));
    }

    /// Write `config.<env>.neon` with a complete database block.
    pub(crate) fn write_environment(&self, env: &str, host: &str, port: Option<u16>) {
        let mut content = format!(
            "parameters:\n\tdatabase:\n\t\tdefault:\n\t\t\tadapter: mysql\n\t\t\thost: {}\n\t\t\tdbname: {}_db\n\t\t\tuser: root\n\t\t\tpassword: secret\n",
            host, env
        );
        if let Some(port) = port {
            content.push_str(&format!("\t\t\tport: {}\n", port));
        }
        self.write_config(&format!("config.{}.neon", env), &content);
    }

    /// Write `neonmig.toml` in the project directory.
    pub(crate) fn write_settings(&self, content: &str) {
        fs::write(self.work_dir.join("neonmig.toml"), content)
            .expect("Failed to write neonmig.toml");
    }

    /// Build a command for invoking the compiled `neonmig` binary in the project directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("neonmig").expect("Failed to locate neonmig binary");
        cmd.current_dir(&self.work_dir)
            .env_remove("NEONMIG_CONFIGS_DIR")
            .env_remove("NEONMIG_MIGRATIONS_DIR")
            .env_remove("NEONMIG_ENGINE")
            .env_remove("NEONMIG_LOG");
        cmd
    }

    /// Build a command whose engine is the given fake.
    pub(crate) fn cli_with_engine(&self, engine: &super::FakeEngine) -> Command {
        let mut cmd = self.cli();
        cmd.env("NEONMIG_ENGINE", engine.program());
        cmd
    }
}

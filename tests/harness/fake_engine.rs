use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// Shell script standing in for the migration engine.
///
/// Appends its arguments to `engine.log`, copies the configuration it was handed
/// to `received.yml` and exits with `$FAKE_ENGINE_EXIT` (default 0).
pub struct FakeEngine {
    pub root: TempDir,
    pub script: PathBuf,
    pub log_file: PathBuf,
    pub received_config: PathBuf,
}

impl FakeEngine {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir for fake engine");
        let script = root.path().join("engine");
        let log_file = root.path().join("engine.log");
        let received_config = root.path().join("received.yml");

        let script_content = format!(
            r#"#!/bin/sh
echo "$@" >> "{log}"
if [ "$2" = "--configuration" ]; then
    cp "$3" "{received}"
fi
exit "${{FAKE_ENGINE_EXIT:-0}}"
"#,
            log = log_file.to_string_lossy(),
            received = received_config.to_string_lossy()
        );

        fs::write(&script, script_content).expect("Failed to write engine script");
        let mut perms = fs::metadata(&script).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script, perms).expect("Failed to set permissions");

        Self { root, script, log_file, received_config }
    }

    pub fn program(&self) -> String {
        self.script.to_string_lossy().to_string()
    }

    pub fn get_log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }

    pub fn received_config(&self) -> serde_yaml::Value {
        let content =
            fs::read_to_string(&self.received_config).expect("engine did not receive a config");
        serde_yaml::from_str(&content).expect("received config is not valid YAML")
    }
}

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Runs the `shader-relay` binary against an isolated config file.
pub struct TestHarness {
    _temp: TempDir,
    config_path: PathBuf,
}

impl TestHarness {
    pub fn new(name: &str) -> Self {
        let temp = tempfile::Builder::new()
            .prefix(&format!("shader-relay-{}-", name))
            .tempdir()
            .expect("failed to create temp dir");
        let config_path = temp.path().join("config.toml");
        Self {
            _temp: temp,
            config_path,
        }
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(&self.config_path, content).expect("failed to write config");
    }

    pub fn run_cli(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_shader-relay"))
            .args(args)
            .env("SHADER_RELAY_CONFIG", &self.config_path)
            .env_remove("RUST_LOG")
            .output()
            .expect("failed to run shader-relay")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

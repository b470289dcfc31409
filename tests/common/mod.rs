#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Isolated workspace and home directory for running the binary
pub struct TestEnv {
    pub workspace: TempDir,
    pub home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            workspace: TempDir::new().expect("Failed to create temp workspace"),
            home: TempDir::new().expect("Failed to create temp home"),
        }
    }

    pub fn path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn create_test_file(&self, name: &str, content: &str) -> PathBuf {
        let file_path = self.workspace.path().join(name);
        fs::write(&file_path, content).expect("Failed to create test file");
        file_path
    }

    /// `tonecraft` with no credentials and no colors, run inside the workspace
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tonecraft"));
        cmd.current_dir(self.workspace.path())
            .env("HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env("CLICOLOR", "0")
            .env_remove("GEMINI_API_KEY")
            .env_remove("GOOGLE_API_KEY")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command()
            .args(args)
            .output()
            .expect("Failed to run tonecraft")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

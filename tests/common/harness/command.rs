//! Fluent wrapper around assert_cmd::Command.

#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `trackdex` binary.
///
/// Commands never read the user's config or environment: the config path
/// points into the test directory and `TRACKDEX_DB`/`RUST_LOG` are cleared.
pub struct TrackdexCommand {
    args: Vec<String>,
    config: Option<PathBuf>,
}

impl TrackdexCommand {
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            config: None,
        }
    }

    /// Sets the `--db` option.
    pub fn db(mut self, path: &Path) -> Self {
        self.args.push("--db".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Points `TRACKDEX_CONFIG` at the given file.
    pub fn config(mut self, path: &Path) -> Self {
        self.config = Some(path.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("trackdex").expect("Failed to find trackdex binary");
        let config = self
            .config
            .unwrap_or_else(|| PathBuf::from("/nonexistent/trackdex/config.toml"));
        cmd.env("TRACKDEX_CONFIG", config)
            .env_remove("TRACKDEX_DB")
            .env_remove("RUST_LOG")
            .args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    pub fn import(self, file: &Path) -> Self {
        self.args(["import".to_string(), file.to_string_lossy().to_string()])
    }

    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    pub fn show(self, playlist: &str) -> Self {
        self.args(["show", playlist])
    }

    pub fn search(self, playlist: &str, prefix: &str) -> Self {
        self.args(["search", playlist, prefix])
    }

    pub fn add(self, playlist: &str, title: &str) -> Self {
        self.args(["add", playlist, title])
    }

    pub fn rm(self, playlist: &str, title: &str) -> Self {
        self.args(["rm", playlist, title])
    }

    pub fn export(self, playlist: &str) -> Self {
        self.args(["export", playlist])
    }

    pub fn delete(self, playlist: &str) -> Self {
        self.args(["delete", playlist])
    }

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for TrackdexCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_runs_binary() {
        TrackdexCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = TrackdexCommand::new().search("mix", "be").format_json();
        assert_eq!(
            cmd.get_args(),
            &["search", "mix", "be", "--format", "json"]
        );
    }
}

//! Shared integration test helpers for unicode-hover.
//!
//! Include with `mod common;` at the top of a test file. The
//! `#[allow(dead_code)]` attribute suppresses warnings when a file only uses
//! a subset of the helpers.

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;
use unicode_hover::cli::{self, Cli};
use unicode_hover_config::Config;

/// A temp directory holding a config file path. Keep the `TempDir` alive
/// for as long as the path is used.
pub struct TestContext {
    pub dir: TempDir,
    pub config_path: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = dir.path().join("config.yaml");
        Self { dir, config_path }
    }

    /// Context whose config file already holds `config`.
    pub fn with_config(config: &Config) -> Self {
        let ctx = Self::new();
        config
            .save_to(&ctx.config_path)
            .expect("Failed to write test config");
        ctx
    }

    /// Run the CLI with `args` (program name excluded), feeding `stdin`,
    /// and return stdout.
    pub fn run_cli(&self, args: &[&str], stdin: &str) -> anyhow::Result<String> {
        let config = self.config_path.to_string_lossy().to_string();
        let mut argv = vec!["unicode-hover", "--config", config.as_str()];
        argv.extend_from_slice(args);
        let cli = <Cli as clap::Parser>::try_parse_from(argv)?;

        let mut input = stdin.as_bytes();
        let mut out = Vec::new();
        cli::run(cli, &mut input, &mut out)?;
        Ok(String::from_utf8(out).expect("CLI output is UTF-8"))
    }
}

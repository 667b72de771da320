use anyhow::{Context, Result};
use std::fs;

use super::{Step, StepContext};
use crate::config::HookConfig;
use crate::report;

/// Copies `.env.example` to `.env` so the generated services have a
/// local configuration file to start from. Disabled by default.
pub struct EnvFileStep;

impl Step for EnvFileStep {
    fn name(&self) -> &'static str {
        "env-file"
    }

    fn enabled(&self, config: &HookConfig) -> bool {
        config.steps.env_file
    }

    fn run(&self, ctx: &StepContext) -> Result<()> {
        let example = ctx.root.join(".env.example");
        let target = ctx.root.join(".env");

        if !example.exists() {
            println!("No .env.example found, nothing to copy");
            return Ok(());
        }
        if target.exists() {
            println!(".env already exists, leaving it untouched");
            return Ok(());
        }

        fs::copy(&example, &target).context("Failed to copy .env.example to .env")?;
        report::ok("Created .env file from .env.example");
        Ok(())
    }
}

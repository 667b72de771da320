use anyhow::{Context, Result};
use std::fs;

use super::{Step, StepContext};
use crate::config::HookConfig;

/// Removes template paths for features the configuration opted out of,
/// e.g. `frontend/src/app/guards`. Disabled by default.
pub struct PruneStep;

impl Step for PruneStep {
    fn name(&self) -> &'static str {
        "prune"
    }

    fn enabled(&self, config: &HookConfig) -> bool {
        config.steps.prune
    }

    fn run(&self, ctx: &StepContext) -> Result<()> {
        for rel in &ctx.config.prune.paths {
            let path = ctx.root.join(rel);
            if !path.exists() {
                continue;
            }

            if path.is_dir() {
                fs::remove_dir_all(&path)
                    .with_context(|| format!("Failed to remove directory {}", path.display()))?;
            } else {
                fs::remove_file(&path)
                    .with_context(|| format!("Failed to remove file {}", path.display()))?;
            }
            println!("Removed {}", rel.display());
        }
        Ok(())
    }
}

//! Ordered, config-gated step list for the post-generation hook.
//!
//! Every unit of work is a named step that configuration turns on or
//! off; adding a capability means adding a step and a toggle, not
//! editing the hook flow.

pub mod env_file;
pub mod frontend;
pub mod prune;

use anyhow::Result;
use std::path::Path;

use crate::config::HookConfig;
use crate::process::CommandRunner;

/// A single named unit of post-generation work.
pub trait Step {
    fn name(&self) -> &'static str;

    /// Whether configuration enables this step.
    fn enabled(&self, config: &HookConfig) -> bool;

    fn run(&self, ctx: &StepContext) -> Result<()>;
}

/// Shared context handed to each step.
pub struct StepContext<'a> {
    pub config: &'a HookConfig,
    pub runner: &'a dyn CommandRunner,
    /// Generated project root: the directory the hook was invoked in.
    pub root: &'a Path,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepStatus {
    Ran,
    Skipped,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub step: &'static str,
    pub status: StepStatus,
}

impl StepOutcome {
    pub fn succeeded(&self) -> bool {
        self.status == StepStatus::Ran
    }
}

/// The hook's steps in execution order.
pub fn default_steps() -> Vec<Box<dyn Step>> {
    vec![
        Box::new(env_file::EnvFileStep),
        Box::new(prune::PruneStep),
        Box::new(frontend::FrontendStep),
    ]
}

/// Run steps in order, recording an outcome per step.
///
/// A failing step never aborts the hook: the failure is captured and the
/// remaining steps still run, so final guidance is always printed.
pub fn run_steps(steps: &[Box<dyn Step>], ctx: &StepContext) -> Vec<StepOutcome> {
    steps
        .iter()
        .map(|step| {
            let status = if !step.enabled(ctx.config) {
                StepStatus::Skipped
            } else {
                match step.run(ctx) {
                    Ok(()) => StepStatus::Ran,
                    Err(e) => StepStatus::Failed(format!("{e:#}")),
                }
            };
            StepOutcome {
                step: step.name(),
                status,
            }
        })
        .collect()
}

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;

use postgen::config::HookConfig;
use postgen::guidance;
use postgen::process::SystemRunner;
use postgen::report;
use postgen::steps::{self, StepContext, StepStatus};

pub fn execute(
    config_path: Option<PathBuf>,
    project_name: Option<String>,
    skip_install: bool,
) -> Result<()> {
    let mut config = match &config_path {
        Some(path) => HookConfig::load(path)?,
        None => HookConfig::default(),
    };

    // CLI flags override the config file.
    if let Some(name) = project_name {
        config.project.name = name;
    }
    if skip_install {
        config.frontend.skip_install = true;
    }
    if config.project.name.is_empty() {
        bail!("Project name not set: pass --project-name or set [project] name in the config file");
    }

    report::banner(&format!("Setting up project: {}", config.project.name));

    let root = env::current_dir().context("Failed to read current directory")?;
    let runner = SystemRunner;
    let steps = steps::default_steps();
    let ctx = StepContext {
        config: &config,
        runner: &runner,
        root: &root,
    };
    let outcomes = steps::run_steps(&steps, &ctx);

    let frontend_succeeded = outcomes
        .iter()
        .find(|o| o.step == "frontend")
        .map(|o| o.succeeded())
        .unwrap_or(false);

    report::banner("Project created successfully!");
    for outcome in &outcomes {
        match &outcome.status {
            StepStatus::Ran => report::ok(outcome.step),
            StepStatus::Skipped => {}
            StepStatus::Failed(detail) => report::fail(&format!("{}: {}", outcome.step, detail)),
        }
    }

    print!("\n{}", guidance::render(&config, frontend_succeeded));
    Ok(())
}

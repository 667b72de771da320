use anyhow::{bail, Result};

use super::{Step, StepContext};
use crate::config::HookConfig;
use crate::probe::{self, ToolStatus};
use crate::report;
use crate::workdir::DirGuard;

pub const ANGULAR_CLI: &str = "ng";
pub const NPM: &str = "npm";
/// Exact command the user runs when the CLI is missing.
pub const INSTALL_HINT: &str = "npm install -g @angular/cli";

/// Creates the Angular frontend subproject by delegating to `ng new`
/// inside the frontend directory, then installs npm dependencies.
///
/// Probe, generation, and installation each run exactly once; the first
/// failure records the step as failed and the hook falls back to manual
/// guidance. Files the Angular CLI already wrote are left as-is.
pub struct FrontendStep;

/// The `ng new` invocation printed as remediation when the CLI is
/// missing: same flags the hook itself would pass, minus
/// `--skip-install`.
pub fn manual_create_command(config: &HookConfig) -> String {
    let mut cmd = format!("ng new {} --directory ./", config.frontend_name());
    if config.frontend.routing {
        cmd.push_str(" --routing");
    }
    cmd.push_str(&format!(" --style={}", config.frontend.style));
    cmd.push_str(" --skip-git");
    cmd
}

impl Step for FrontendStep {
    fn name(&self) -> &'static str {
        "frontend"
    }

    fn enabled(&self, config: &HookConfig) -> bool {
        config.steps.frontend
    }

    fn run(&self, ctx: &StepContext) -> Result<()> {
        report::banner("Creating Angular project with Angular CLI...");

        match probe::probe(ctx.runner, ANGULAR_CLI, &["version"]) {
            ToolStatus::Available { version } => match version {
                Some(v) => report::ok(&format!("Angular CLI found ({v})")),
                None => report::ok("Angular CLI found"),
            },
            ToolStatus::Missing => {
                report::fail("Angular CLI not found!");
                println!("\nPlease install Angular CLI first:");
                println!("  {INSTALL_HINT}");
                println!("\nThen manually create the Angular project:");
                println!("  cd {}", ctx.config.frontend.dir.display());
                println!("  {}", manual_create_command(ctx.config));
                bail!("Angular CLI not found (install with '{INSTALL_HINT}')");
            }
            ToolStatus::Broken { detail } => {
                report::fail("Angular CLI not found or not working properly!");
                println!("\nPlease install Angular CLI first:");
                println!("  {INSTALL_HINT}");
                bail!("Angular CLI not working properly: {detail}");
            }
        }

        let frontend_dir = ctx.root.join(&ctx.config.frontend.dir);
        println!(
            "Running 'ng new' in {}...",
            ctx.config.frontend.dir.display()
        );
        println!("This may take a few minutes...\n");

        // The working directory is process-wide state; the guard puts it
        // back on every exit path below, including `?` returns.
        let _guard = DirGuard::change_to(&frontend_dir)?;

        let name = ctx.config.frontend_name();
        let mut args = vec!["new", name.as_str(), "--directory", "./"];
        if ctx.config.frontend.routing {
            args.push("--routing");
        }
        args.extend(["--style", ctx.config.frontend.style.as_str()]);
        args.extend(["--skip-git", "--skip-install"]);

        let generated = ctx.runner.run(ANGULAR_CLI, &args, None)?;
        if !generated.success {
            let detail = generated.error_detail();
            report::fail(&format!("Error creating Angular project: {detail}"));
            bail!("ng new failed: {detail}");
        }
        report::ok("Angular project structure created successfully!");

        if ctx.config.frontend.skip_install {
            println!("Skipping npm install");
            return Ok(());
        }

        println!("\nInstalling npm dependencies...");
        let installed = ctx.runner.run(NPM, &["install"], None)?;
        if !installed.success {
            let detail = installed.error_detail();
            report::fail(&format!("Error installing dependencies: {detail}"));
            bail!("npm install failed: {detail}");
        }
        report::ok("Dependencies installed successfully!");

        Ok(())
    }
}

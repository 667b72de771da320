use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Captured result of a single external command invocation.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Short human-readable failure detail: the last non-empty stderr
    /// line, falling back to stdout, then to the exit code.
    pub fn error_detail(&self) -> String {
        if let Some(line) = last_non_empty_line(&self.stderr) {
            return line.to_string();
        }
        if let Some(line) = last_non_empty_line(&self.stdout) {
            return line.to_string();
        }
        match self.code {
            Some(code) => format!("exit code {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

fn last_non_empty_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).rev().find(|l| !l.is_empty())
}

/// Seam over external process invocation so the hook flow can be
/// exercised without the real tools installed.
pub trait CommandRunner {
    /// Resolve a program on PATH. `None` means the executable is absent.
    fn lookup(&self, program: &str) -> Option<PathBuf>;

    /// Run a program to completion with captured output.
    ///
    /// `Err` means the process could not be spawned; a spawned process
    /// that exits non-zero is `Ok` with `success == false`. Commands are
    /// attempted exactly once, with no timeout.
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<CommandOutput>;
}

/// Production runner backed by `std::process::Command`.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn lookup(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }

    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<CommandOutput> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .with_context(|| format!("Failed to run '{} {}'", program, args.join(" ")))?;

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

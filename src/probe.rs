use crate::process::CommandRunner;

/// Marker line scanned for in version output, e.g. `Angular CLI: 18.2.1`.
pub const VERSION_MARKER: &str = "Angular CLI:";

/// Outcome of probing an external tool.
///
/// "Executable missing" and "executable present but exiting non-zero"
/// are distinct states: the first gets install instructions, the second
/// is reported as a misconfiguration.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolStatus {
    Available { version: Option<String> },
    Missing,
    Broken { detail: String },
}

impl ToolStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, ToolStatus::Available { .. })
    }
}

/// Probe a tool by PATH lookup plus a side-effect-free version query.
///
/// Every failure mode maps to a `ToolStatus` variant; the probe itself
/// never errors.
pub fn probe(runner: &dyn CommandRunner, tool: &str, version_args: &[&str]) -> ToolStatus {
    if runner.lookup(tool).is_none() {
        return ToolStatus::Missing;
    }

    match runner.run(tool, version_args, None) {
        Ok(out) if out.success => ToolStatus::Available {
            version: extract_version(&out.stdout),
        },
        Ok(out) => ToolStatus::Broken {
            detail: out.error_detail(),
        },
        Err(e) => ToolStatus::Broken {
            detail: format!("{e:#}"),
        },
    }
}

fn extract_version(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .find(|line| line.contains(VERSION_MARKER))
        .map(|line| line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::CommandOutput;
    use anyhow::anyhow;
    use std::path::{Path, PathBuf};

    struct FakeRunner {
        found: bool,
        result: Option<CommandOutput>,
    }

    impl CommandRunner for FakeRunner {
        fn lookup(&self, _program: &str) -> Option<PathBuf> {
            self.found.then(|| PathBuf::from("/usr/bin/ng"))
        }

        fn run(
            &self,
            _program: &str,
            _args: &[&str],
            _cwd: Option<&Path>,
        ) -> anyhow::Result<CommandOutput> {
            self.result
                .clone()
                .ok_or_else(|| anyhow!("spawn failed: permission denied"))
        }
    }

    fn ok_output(stdout: &str) -> CommandOutput {
        CommandOutput {
            success: true,
            code: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    #[test]
    fn missing_when_not_on_path() {
        let runner = FakeRunner {
            found: false,
            result: None,
        };
        assert_eq!(probe(&runner, "ng", &["version"]), ToolStatus::Missing);
    }

    #[test]
    fn available_with_parsed_version() {
        let runner = FakeRunner {
            found: true,
            result: Some(ok_output(
                "     _                      _\n\nAngular CLI: 18.2.1\nNode: 20.11.0\n",
            )),
        };
        assert_eq!(
            probe(&runner, "ng", &["version"]),
            ToolStatus::Available {
                version: Some("Angular CLI: 18.2.1".to_string())
            }
        );
    }

    #[test]
    fn available_without_marker_has_no_version() {
        let runner = FakeRunner {
            found: true,
            result: Some(ok_output("18.2.1\n")),
        };
        assert_eq!(
            probe(&runner, "ng", &["version"]),
            ToolStatus::Available { version: None }
        );
    }

    #[test]
    fn broken_on_nonzero_exit() {
        let runner = FakeRunner {
            found: true,
            result: Some(CommandOutput {
                success: false,
                code: Some(1),
                stdout: String::new(),
                stderr: "Cannot find module '@angular/core'\n".to_string(),
            }),
        };
        assert_eq!(
            probe(&runner, "ng", &["version"]),
            ToolStatus::Broken {
                detail: "Cannot find module '@angular/core'".to_string()
            }
        );
    }

    #[test]
    fn broken_on_spawn_failure() {
        let runner = FakeRunner {
            found: true,
            result: None,
        };
        match probe(&runner, "ng", &["version"]) {
            ToolStatus::Broken { detail } => assert!(detail.contains("spawn failed")),
            other => panic!("expected Broken, got {other:?}"),
        }
    }
}

use anyhow::Result;

use postgen::probe::{self, ToolStatus};
use postgen::process::SystemRunner;
use postgen::report;
use postgen::steps::frontend::{ANGULAR_CLI, INSTALL_HINT};

/// Probe the required external tools without generating anything.
/// Returns a non-zero exit code when the Angular CLI is unusable, so
/// scaffolding pipelines can gate on it.
pub fn execute(json_output: bool) -> Result<i32> {
    let runner = SystemRunner;
    let status = probe::probe(&runner, ANGULAR_CLI, &["version"]);

    if json_output {
        let doc = match &status {
            ToolStatus::Available { version } => serde_json::json!({
                "tool": ANGULAR_CLI,
                "status": "available",
                "version": version,
            }),
            ToolStatus::Missing => serde_json::json!({
                "tool": ANGULAR_CLI,
                "status": "missing",
                "install": INSTALL_HINT,
            }),
            ToolStatus::Broken { detail } => serde_json::json!({
                "tool": ANGULAR_CLI,
                "status": "broken",
                "detail": detail,
            }),
        };
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        match &status {
            ToolStatus::Available { version: Some(v) } => {
                report::ok(&format!("Angular CLI found ({v})"));
            }
            ToolStatus::Available { version: None } => report::ok("Angular CLI found"),
            ToolStatus::Missing => {
                report::fail("Angular CLI not found!");
                println!("\nPlease install Angular CLI first:");
                println!("  {INSTALL_HINT}");
            }
            ToolStatus::Broken { detail } => {
                report::fail(&format!("Angular CLI not working properly: {detail}"));
            }
        }
    }

    Ok(if status.is_available() { 0 } else { 1 })
}

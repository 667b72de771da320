pub mod config;
pub mod guidance;
pub mod probe;
pub mod process;
pub mod report;
pub mod steps;
pub mod workdir;

// Re-export commonly used types
pub use config::HookConfig;
pub use probe::ToolStatus;
pub use process::{CommandOutput, CommandRunner, SystemRunner};
pub use workdir::DirGuard;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Runtime configuration for the post-generation hook.
///
/// Values the templating engine resolves (project name, style, step
/// toggles) arrive as explicit configuration from a TOML file and/or
/// CLI flags, never as text substituted into the hook itself, so the
/// hook logic stays independently testable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    pub project: ProjectConfig,
    pub frontend: FrontendConfig,
    pub steps: StepToggles,
    pub prune: PruneConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Subdirectory the frontend subproject is generated into.
    pub dir: PathBuf,
    pub style: String,
    pub routing: bool,
    /// Skip the dependency-installation command after generation.
    pub skip_install: bool,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("frontend"),
            style: "scss".to_string(),
            routing: true,
            skip_install: false,
        }
    }
}

/// Per-step enable flags; see `steps` for the step list itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StepToggles {
    pub frontend: bool,
    pub env_file: bool,
    pub prune: bool,
}

impl Default for StepToggles {
    fn default() -> Self {
        Self {
            frontend: true,
            env_file: false,
            prune: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PruneConfig {
    /// Paths removed by the prune step, relative to the project root.
    pub paths: Vec<PathBuf>,
}

impl HookConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Frontend subproject name, e.g. `wateralmanak-frontend`.
    pub fn frontend_name(&self) -> String {
        format!("{}-frontend", self.project.name)
    }
}

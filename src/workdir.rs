use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Scoped change of the process working directory.
///
/// The working directory is process-wide mutable state. The guard
/// records the directory it was created in and restores it exactly once
/// when dropped, on success, error, and panic paths alike.
pub struct DirGuard {
    original: PathBuf,
}

impl DirGuard {
    /// Change into `target`, remembering the current directory.
    ///
    /// On failure the working directory is left unchanged.
    pub fn change_to(target: &Path) -> Result<Self> {
        let original = env::current_dir().context("Failed to read current directory")?;
        env::set_current_dir(target)
            .with_context(|| format!("Failed to change into {}", target.display()))?;
        Ok(Self { original })
    }

    pub fn original(&self) -> &Path {
        &self.original
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        // Must not panic: drop may run during unwind.
        let _ = env::set_current_dir(&self.original);
    }
}

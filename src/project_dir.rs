use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::debug;

use crate::error::ScaffoldError;

/// Target directory of one run: destination joined with the project name, as typed.
#[derive(Debug, PartialEq)]
pub struct ProjectDir(PathBuf);

impl AsRef<Path> for ProjectDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl Display for ProjectDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.display().fmt(f)
    }
}

impl ProjectDir {
    pub fn new(base_path: &Path, project_name: &str) -> Self {
        Self(base_path.join(project_name))
    }

    /// Clear the way for a fresh scaffold.
    ///
    /// An existing path is removed when `overwrite` is set or `confirm`
    /// answers yes; otherwise it stays untouched and [`ScaffoldError::Aborted`]
    /// is returned. `confirm` is only called for an existing path.
    pub fn prepare(&self, overwrite: bool, confirm: impl FnOnce() -> Result<bool>) -> Result<()> {
        let path = self.0.as_path();
        if !path.exists() {
            return Ok(());
        }
        if !overwrite && !confirm()? {
            return Err(ScaffoldError::Aborted.into());
        }
        std::fs::remove_dir_all(path)
            .with_context(|| format!("cannot remove existing directory {}", path.display()))?;
        debug!("Removed existing directory: {}", path.display());
        Ok(())
    }
}

use anyhow::Context;
use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};

/// deals with `~/` and `$HOME/` prefixes, then anchors relative paths at the
/// current directory
pub fn absolute_path(p: impl AsRef<Path>) -> Result<PathBuf> {
    let p = p.as_ref();
    let p = if p.starts_with("~/") {
        home()?.join(p.strip_prefix("~/")?)
    } else if p.starts_with("$HOME/") {
        home()?.join(p.strip_prefix("$HOME/")?)
    } else {
        p.to_path_buf()
    };

    if p.is_absolute() {
        Ok(p)
    } else {
        Ok(env::current_dir()
            .context("cannot read the current directory")?
            .join(p))
    }
}

/// home path wrapper
pub fn home() -> Result<PathBuf> {
    home::home_dir().context("$HOME was not set")
}

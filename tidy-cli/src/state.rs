use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `~/.tidy`, or `$TIDY_HOME` when set.
pub fn tidy_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("TIDY_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".tidy"))
}

pub fn ensure_tidy_home() -> Result<PathBuf> {
    let dir = tidy_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

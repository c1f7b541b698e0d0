use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tidy_core::DEFAULT_PAGE_SIZE;
use tidy_feed::DEFAULT_BASE_URL;

use crate::state::{ensure_tidy_home, tidy_home};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feed: FeedSection,
    pub log: LogSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSection {
    pub base_url: String,
    pub page_size: usize,
}

impl Default for FeedSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// `tracing` env-filter directive, e.g. `tidy_core=debug`.
    pub filter: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

/// Location of the config file. Does not touch the filesystem.
pub fn config_path() -> Result<PathBuf> {
    Ok(tidy_home()?.join(CONFIG_FILE))
}

/// Read-only: a missing file yields the defaults, nothing is created.
pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

/// For pages that never read the feed settings: an unreadable config is
/// logged and replaced by the defaults instead of aborting.
pub fn or_default(loaded: Result<Config>) -> Config {
    loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %format!("{e:#}"), "ignoring config, using defaults");
        Config::default()
    })
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config) -> Result<PathBuf> {
    let p = ensure_tidy_home()?.join(CONFIG_FILE);
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(p)
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let p = save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg: Config = toml::from_str("[feed]\npage_size = 5\n").unwrap();
        assert_eq!(cfg.feed.page_size, 5);
        assert_eq!(cfg.feed.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.log, LogSection::default());
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let cfg = Config::default();
        let s = toml::to_string_pretty(&cfg).unwrap();
        assert!(s.contains("page_size = 20"));
        let back: Config = toml::from_str(&s).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn malformed_file_is_an_error_that_pages_can_ignore() {
        let dir = std::env::temp_dir().join(format!("tidy-config-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let p = dir.join(CONFIG_FILE);
        fs::write(&p, "[feed\npage_size = 5\n").unwrap();

        let loaded = load_config_from(&p);
        let err = loaded.as_ref().unwrap_err();
        assert!(format!("{err:#}").contains("parse"));
        assert_eq!(or_default(loaded), Config::default());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn or_default_keeps_a_good_config() {
        let mut cfg = Config::default();
        cfg.feed.page_size = 7;
        assert_eq!(or_default(Ok(cfg.clone())), cfg);
        assert_eq!(
            or_default(Err(anyhow::anyhow!("HOME is not set"))),
            Config::default()
        );
    }

    #[test]
    fn absent_file_is_default_config() {
        let p = Path::new("/nonexistent/tidy/config.toml");
        assert_eq!(load_config_from(p).unwrap(), Config::default());
    }
}

//! Client configuration stored in `artboard.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "artboard.toml";

/// Board client configuration (TOML).
///
/// Missing fields default to values that run against a local `board.db`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct BoardConfig {
    pub database: DatabaseConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file holding the board. Created with the schema if missing.
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Width of the dash-padded screen title column.
    pub title_width: usize,

    /// Width of the dash-padded login status column.
    pub status_width: usize,

    /// Wait for Enter after each notice.
    pub pause_on_notice: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("board.db"),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title_width: 40,
            status_width: 25,
            pause_on_notice: true,
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.database.path.as_os_str().is_empty() {
            return Err(anyhow!("database.path must be non-empty"));
        }
        if self.display.title_width == 0 {
            return Err(anyhow!("display.title_width must be > 0"));
        }
        if self.display.status_width == 0 {
            return Err(anyhow!("display.status_width must be > 0"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `BoardConfig::default()`.
pub fn load_config(path: &Path) -> Result<BoardConfig> {
    if !path.exists() {
        let cfg = BoardConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: BoardConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, BoardConfig::default());
    }

    #[test]
    fn full_file_overrides_every_field() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("artboard.toml");
        fs::write(
            &path,
            "[database]\npath = \"gallery.db\"\n\n\
             [display]\ntitle_width = 20\nstatus_width = 12\npause_on_notice = false\n",
        )
        .expect("write");

        let cfg = load_config(&path).expect("load");

        assert_eq!(cfg.database.path, PathBuf::from("gallery.db"));
        assert_eq!(
            cfg.display,
            DisplayConfig {
                title_width: 20,
                status_width: 12,
                pause_on_notice: false,
            }
        );
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("artboard.toml");
        fs::write(&path, "[display]\npause_on_notice = false\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.database, DatabaseConfig::default());
        assert_eq!(cfg.display.title_width, 40);
        assert!(!cfg.display.pause_on_notice);
    }

    #[test]
    fn zero_width_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("artboard.toml");
        fs::write(&path, "[display]\ntitle_width = 0\n").expect("write");
        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("title_width"));
    }
}

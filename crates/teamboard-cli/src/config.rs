//! `teamboard.toml` configuration.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use teamboard_core::dashboard::ViewLimits;
use teamboard_core::task::{TaskStatus, DEFAULT_COLUMNS};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "teamboard.toml";

/// Settings read from `teamboard.toml`. Every field is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Snapshot JSON file. The bundled sample is used when unset.
    pub data: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: Option<String>,
    /// Avatars and activity entries per screen, from the `[limits]` table.
    pub limits: ViewLimits,
    /// Board columns, left to right.
    pub board_columns: Vec<TaskStatus>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: None,
            log_filter: None,
            limits: ViewLimits::default(),
            board_columns: DEFAULT_COLUMNS.to_vec(),
        }
    }
}

impl Config {
    /// Load the config file given with `--config`/`TEAMBOARD_CONFIG`, or
    /// `./teamboard.toml` when none was given.
    ///
    /// Only the implicit default file may be missing; an explicit path that
    /// does not exist is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Read and validate `path`.
    ///
    /// Relative `data` paths are resolved against the config file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;

        if let (Some(data), Some(dir)) = (config.data.as_ref(), path.parent()) {
            if data.is_relative() {
                config.data = Some(dir.join(data));
            }
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.board_columns.is_empty() {
            bail!("board_columns must list at least one status");
        }
        let mut seen = HashSet::new();
        for status in &self.board_columns {
            if !seen.insert(status) {
                bail!("board_columns lists '{}' more than once", status);
            }
        }
        Ok(())
    }
}

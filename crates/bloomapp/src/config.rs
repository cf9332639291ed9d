//! # Configuration
//!
//! Bloom configuration is loaded with [`confique`], layering environment
//! variables over a TOML file over compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `BLOOM_TASK_LIMIT`, `BLOOM_DEFAULT_INTERVAL_DAYS`, `BLOOM_LOG_LEVEL`.
//! 2. **Config file**: `$BLOOM_CONFIG` if set, otherwise `bloom.toml` in the OS config
//!    directory (via `directories`). A missing file is not an error.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `task_limit` | `6` | Tasks shown in the upcoming-watering view |
//! | `default_interval_days` | `3` | Interval pre-filled in new plant drafts |
//! | `log_level` | `warn` | Log filter for the CLI (`RUST_LOG` wins) |
//!
//! `default_interval_days` only seeds new drafts. The status engine's
//! fallback for plants without an interval is fixed at
//! [`crate::status::DEFAULT_INTERVAL_DAYS`].

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{BloomError, Result};
use crate::status::DEFAULT_INTERVAL_DAYS;
use crate::tasks::TASK_PANEL_LIMIT;

pub const CONFIG_FILE_NAME: &str = "bloom.toml";
pub const CONFIG_PATH_ENV: &str = "BLOOM_CONFIG";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BloomConfig {
    /// Number of tasks shown in the upcoming-watering view
    #[config(default = 6, env = "BLOOM_TASK_LIMIT")]
    pub task_limit: usize,

    /// Interval pre-filled when drafting a new plant
    #[config(default = 3, env = "BLOOM_DEFAULT_INTERVAL_DAYS")]
    pub default_interval_days: u32,

    /// Log filter (error, warn, info, debug, trace)
    #[config(default = "warn", env = "BLOOM_LOG_LEVEL")]
    pub log_level: String,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            task_limit: TASK_PANEL_LIMIT,
            default_interval_days: DEFAULT_INTERVAL_DAYS,
            log_level: "warn".to_string(),
        }
    }
}

impl BloomConfig {
    /// Loads env over `path` (when given) over defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| BloomError::Config(e.to_string()))
    }

    /// Loads from the resolved config path.
    pub fn load_default() -> Result<Self> {
        Self::load(Self::resolve_path().as_deref())
    }

    /// `$BLOOM_CONFIG` if set, otherwise the OS config directory.
    pub fn resolve_path() -> Option<PathBuf> {
        if let Some(explicit) = std::env::var_os(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(explicit));
        }
        ProjectDirs::from("com", "bloomops", "bloom")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

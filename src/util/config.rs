//! Configuration file support.
//!
//! Two locations are read:
//! - Global: `~/.harvest/config.toml` - user-wide tool locations
//! - Project: `<root>/harvest.toml` - project overrides and extra libraries
//!
//! Project config takes precedence over global config.
//!
//! ```toml
//! [tools]
//! cmake = "/opt/cmake/bin/cmake"
//! devenv = 'D:\VS\Common7\IDE\devenv.com'
//!
//! [build]
//! jobs = 4
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::BuildSpec;

/// Name of the project config file at the repository root.
pub const PROJECT_CONFIG_NAME: &str = "harvest.toml";

/// Harvest configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// External tool locations
    pub tools: ToolsConfig,

    /// Build settings
    pub build: BuildConfig,

    /// Additional libraries; these shadow built-in recipes of the same name.
    #[serde(rename = "library")]
    pub libraries: Vec<BuildSpec>,
}

/// Explicit paths to external tools. Unset tools are looked up in PATH.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub cmake: Option<PathBuf>,
    pub make: Option<PathBuf>,
    pub devenv: Option<PathBuf>,
    /// Shell used to run `configure` scripts
    pub shell: Option<PathBuf>,
}

/// Build-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Parallel jobs passed to make (None = logical core count)
    pub jobs: Option<usize>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.tools.cmake.is_some() {
            self.tools.cmake = other.tools.cmake;
        }
        if other.tools.make.is_some() {
            self.tools.make = other.tools.make;
        }
        if other.tools.devenv.is_some() {
            self.tools.devenv = other.tools.devenv;
        }
        if other.tools.shell.is_some() {
            self.tools.shell = other.tools.shell;
        }

        if other.build.jobs.is_some() {
            self.build.jobs = other.build.jobs;
        }

        // A library declared in `other` replaces every earlier spec of that name
        self.libraries
            .retain(|lib| !other.libraries.iter().any(|o| o.name == lib.name));
        self.libraries.extend(other.libraries);
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (`<root>/harvest.toml`)
/// 2. Global config (`~/.harvest/config.toml`)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    config.merge(Config::load_or_default(project_path));

    config
}

/// Get the global harvest config directory (`~/.harvest`).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".harvest"))
}

/// Get the global config path (`~/.harvest/config.toml`).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (`<root>/harvest.toml`).
pub fn project_config_path(root: &Path) -> PathBuf {
    root.join(PROJECT_CONFIG_NAME)
}

//! Command implementations

pub mod build;
pub mod completions;
pub mod list;
pub mod paths;

use std::path::PathBuf;

use anyhow::{Context, Result};
use harvest::util::config::{global_config_path, load_config, project_config_path};
use harvest::{BuildContext, PlatformKey, Registry};

/// Options shared by every command.
pub struct GlobalOptions {
    pub root: Option<PathBuf>,
    pub platform: Option<PlatformKey>,
}

/// Everything a command needs, resolved from the global options.
pub struct Session {
    pub registry: Registry,
    pub ctx: BuildContext,
}

impl GlobalOptions {
    pub fn root(&self) -> Result<PathBuf> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("failed to get current directory")?,
        };
        std::path::absolute(&root)
            .with_context(|| format!("failed to resolve root: {}", root.display()))
    }

    pub fn platform(&self) -> Result<PlatformKey> {
        match self.platform {
            Some(platform) => Ok(platform),
            None => Ok(PlatformKey::current()?),
        }
    }

    /// Load config and resolve the build context.
    pub fn session(&self, jobs: Option<usize>) -> Result<Session> {
        let root = self.root()?;
        let platform = self.platform()?;

        let config = load_config(global_config_path().as_deref(), &project_config_path(&root));
        let registry = Registry::new(config.libraries.clone());
        let ctx = BuildContext::new(root, platform, &config, jobs)?;

        Ok(Session { registry, ctx })
    }
}

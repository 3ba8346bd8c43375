//! Build context - platform, layout, tools and parallelism.

use std::path::PathBuf;

use serde::Serialize;

use crate::builder::errors::BuildError;
use crate::builder::tools::ToolSet;
use crate::core::{Layout, PlatformKey};
use crate::util::config::Config;

/// Everything a build needs to know about the host, resolved once at
/// startup.
#[derive(Debug, Clone, Serialize)]
pub struct BuildContext {
    /// Platform the libraries are built for
    pub platform: PlatformKey,

    /// Root, scratch and output directories
    pub layout: Layout,

    /// External tool locations
    pub tools: ToolSet,

    /// Worker count handed to make
    pub jobs: usize,
}

impl BuildContext {
    /// Create a context from the merged configuration.
    ///
    /// `jobs` overrides the configured worker count; without either, the
    /// host's logical core count is used.
    ///
    /// Every path handed to cmake, make and configure is derived from
    /// `root`, so a root that is not valid UTF-8 is rejected.
    pub fn new(
        root: impl Into<PathBuf>,
        platform: PlatformKey,
        config: &Config,
        jobs: Option<usize>,
    ) -> Result<Self, BuildError> {
        let root = root.into();
        if root.to_str().is_none() {
            return Err(BuildError::NonUtf8Root(root));
        }

        Ok(BuildContext {
            platform,
            layout: Layout::new(root, platform),
            tools: ToolSet::resolve(&config.tools, platform),
            jobs: jobs.or(config.build.jobs).unwrap_or_else(num_cpus::get).max(1),
        })
    }

    /// Context with bare tool names, for plans that are only displayed or
    /// run against a test runner.
    pub fn detached(root: impl Into<PathBuf>, platform: PlatformKey, jobs: usize) -> Self {
        BuildContext {
            platform,
            layout: Layout::new(root, platform),
            tools: ToolSet::unresolved(),
            jobs: jobs.max(1),
        }
    }
}

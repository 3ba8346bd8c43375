//! Host platform and build configuration keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::builder::errors::BuildError;

/// Architecture segment of the library output tree. Only x64 is built.
pub const ARCH_DIR: &str = "x64";

/// Operating system family the libraries are built for.
///
/// Selects the library output subdirectory and which build strategy runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKey {
    MacOs,
    Linux,
    Windows,
}

impl PlatformKey {
    /// Detect the platform of the running process.
    pub fn current() -> Result<Self, BuildError> {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS identifier to a platform key.
    ///
    /// Unknown identifiers are rejected instead of producing a malformed
    /// output path.
    pub fn from_os(os: &str) -> Result<Self, BuildError> {
        match os.to_ascii_lowercase().as_str() {
            "macos" | "darwin" => Ok(PlatformKey::MacOs),
            "linux" => Ok(PlatformKey::Linux),
            "windows" => Ok(PlatformKey::Windows),
            _ => Err(BuildError::UnsupportedPlatform(os.to_string())),
        }
    }

    /// Name of the platform directory under `3rdparty/lib`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PlatformKey::MacOs => "macos",
            PlatformKey::Linux => "linux",
            PlatformKey::Windows => "windows",
        }
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, PlatformKey::Windows)
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PlatformKey {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_os(s)
    }
}

/// Build configuration. Every library is built once per configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Configuration {
    Debug,
    Release,
}

impl Configuration {
    /// Both configurations, in build order.
    pub const ALL: [Configuration; 2] = [Configuration::Debug, Configuration::Release];

    /// Name of the output subtree (`debug` or `release`).
    pub const fn name(&self) -> &'static str {
        match self {
            Configuration::Debug => "debug",
            Configuration::Release => "release",
        }
    }

    /// Value passed as `CMAKE_BUILD_TYPE` and as the generated solution's
    /// configuration label.
    pub const fn cmake_build_type(&self) -> &'static str {
        match self {
            Configuration::Debug => "Debug",
            Configuration::Release => "RelWithDebInfo",
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

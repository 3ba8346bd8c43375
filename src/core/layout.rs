//! Directory layout of the third-party tree.
//!
//! ```text
//! <root>/.setup/<project>[/<configuration>]              scratch builds
//! <root>/3rdparty/include/<configuration>/<name>         headers
//! <root>/3rdparty/lib/<platform>/x64/<configuration>/    static libraries
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::platform::{Configuration, PlatformKey, ARCH_DIR};

/// Name of the scratch directory under the root.
pub const SCRATCH_DIR: &str = ".setup";

/// Name of the output tree under the root.
pub const THIRDPARTY_DIR: &str = "3rdparty";

/// Resolved directories, computed once at startup and passed to every
/// operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub root: PathBuf,
    pub scratch_root: PathBuf,
    pub include_root: PathBuf,
    pub lib_root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>, platform: PlatformKey) -> Self {
        let root = root.into();
        let thirdparty = root.join(THIRDPARTY_DIR);

        Layout {
            scratch_root: root.join(SCRATCH_DIR),
            include_root: thirdparty.join("include"),
            lib_root: thirdparty.join("lib").join(platform.as_str()).join(ARCH_DIR),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Header output directory for a configuration.
    pub fn include_dir(&self, config: Configuration) -> PathBuf {
        self.include_root.join(config.name())
    }

    /// Library output directory for a configuration.
    pub fn lib_dir(&self, config: Configuration) -> PathBuf {
        self.lib_root.join(config.name())
    }

    /// Scratch build directory for a project, optionally split per
    /// configuration.
    pub fn scratch_dir(&self, project: &str, config: Option<Configuration>) -> PathBuf {
        let dir = self.scratch_root.join(project);
        match config {
            Some(config) => dir.join(config.cmake_build_type()),
            None => dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = Layout::new("/work/engine", PlatformKey::Linux);

        assert_eq!(layout.scratch_root, PathBuf::from("/work/engine/.setup"));
        assert_eq!(
            layout.include_dir(Configuration::Debug),
            PathBuf::from("/work/engine/3rdparty/include/debug")
        );
        assert_eq!(
            layout.lib_dir(Configuration::Release),
            PathBuf::from("/work/engine/3rdparty/lib/linux/x64/release")
        );
    }

    #[test]
    fn test_lib_root_per_platform() {
        for (platform, segment) in [
            (PlatformKey::MacOs, "macos"),
            (PlatformKey::Linux, "linux"),
            (PlatformKey::Windows, "windows"),
        ] {
            let layout = Layout::new("/r", platform);
            assert_eq!(
                layout.lib_root,
                PathBuf::from("/r/3rdparty/lib").join(segment).join("x64")
            );
        }
    }

    #[test]
    fn test_scratch_dir() {
        let layout = Layout::new("/r", PlatformKey::MacOs);
        assert_eq!(layout.scratch_dir("assimp", None), PathBuf::from("/r/.setup/assimp"));
        assert_eq!(
            layout.scratch_dir("assimp", Some(Configuration::Release)),
            PathBuf::from("/r/.setup/assimp/RelWithDebInfo")
        );
    }
}

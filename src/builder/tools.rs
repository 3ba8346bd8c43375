//! External tool discovery.

use std::path::PathBuf;
use std::process::Command;

use serde::Serialize;

use crate::core::PlatformKey;
use crate::util::config::ToolsConfig;
use crate::util::process::find_executable;

/// Fallback IDE command when Visual Studio cannot be located.
pub const DEFAULT_DEVENV: &str =
    "C:\\Program Files (x86)\\Microsoft Visual Studio\\2019\\Community\\Common7\\IDE\\devenv.com";

/// Locations of the external programs a build invokes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolSet {
    pub cmake: PathBuf,
    pub make: PathBuf,
    pub devenv: PathBuf,
    pub shell: PathBuf,
}

impl ToolSet {
    /// Resolve tools: configured path, then PATH lookup, then the bare name.
    ///
    /// Resolution never fails; a missing tool surfaces when it is run.
    pub fn resolve(config: &ToolsConfig, platform: PlatformKey) -> Self {
        ToolSet {
            cmake: config.cmake.clone().unwrap_or_else(|| lookup("cmake")),
            make: config.make.clone().unwrap_or_else(|| lookup("make")),
            devenv: config.devenv.clone().unwrap_or_else(|| find_devenv(platform)),
            shell: config.shell.clone().unwrap_or_else(|| lookup("sh")),
        }
    }

    /// Tools referenced by bare name, for plans that are never executed.
    pub fn unresolved() -> Self {
        ToolSet {
            cmake: PathBuf::from("cmake"),
            make: PathBuf::from("make"),
            devenv: PathBuf::from(DEFAULT_DEVENV),
            shell: PathBuf::from("sh"),
        }
    }
}

fn lookup(name: &str) -> PathBuf {
    find_executable(name).unwrap_or_else(|| {
        tracing::debug!("`{}` not found in PATH", name);
        PathBuf::from(name)
    })
}

fn find_devenv(platform: PlatformKey) -> PathBuf {
    if platform.is_windows() {
        if let Some(devenv) = find_devenv_with_vswhere() {
            tracing::debug!("Found devenv at: {}", devenv.display());
            return devenv;
        }
    }
    PathBuf::from(DEFAULT_DEVENV)
}

/// Ask vswhere for the newest Visual Studio and use the `devenv.com` next to
/// its product executable.
fn find_devenv_with_vswhere() -> Option<PathBuf> {
    let vswhere = find_vswhere()?;

    let output = Command::new(&vswhere)
        .args(["-latest", "-property", "productPath", "-format", "value"])
        .output();

    match output {
        Ok(out) if out.status.success() => {
            let product = String::from_utf8_lossy(&out.stdout).trim().to_string();
            if product.is_empty() {
                tracing::debug!("vswhere returned empty path");
                return None;
            }
            let com = PathBuf::from(product).with_file_name("devenv.com");
            com.exists().then_some(com)
        }
        Ok(out) => {
            tracing::debug!("vswhere failed: {}", String::from_utf8_lossy(&out.stderr));
            None
        }
        Err(e) => {
            tracing::debug!("Failed to run vswhere: {}", e);
            None
        }
    }
}

/// Find vswhere.exe in its standard location or in PATH.
fn find_vswhere() -> Option<PathBuf> {
    let program_files_x86 = std::env::var("ProgramFiles(x86)")
        .unwrap_or_else(|_| "C:\\Program Files (x86)".to_string());

    let standard_path = PathBuf::from(&program_files_x86)
        .join("Microsoft Visual Studio")
        .join("Installer")
        .join("vswhere.exe");

    if standard_path.exists() {
        return Some(standard_path);
    }

    find_executable("vswhere")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_tools_win() {
        let config = ToolsConfig {
            cmake: Some(PathBuf::from("/opt/cmake/bin/cmake")),
            make: Some(PathBuf::from("gmake")),
            devenv: Some(PathBuf::from("devenv.com")),
            shell: Some(PathBuf::from("/bin/bash")),
        };

        let tools = ToolSet::resolve(&config, PlatformKey::Windows);

        assert_eq!(tools.cmake, PathBuf::from("/opt/cmake/bin/cmake"));
        assert_eq!(tools.make, PathBuf::from("gmake"));
        assert_eq!(tools.devenv, PathBuf::from("devenv.com"));
        assert_eq!(tools.shell, PathBuf::from("/bin/bash"));
    }

    #[test]
    fn test_devenv_fallback_off_windows() {
        let tools = ToolSet::resolve(&ToolsConfig::default(), PlatformKey::Linux);
        assert_eq!(tools.devenv, PathBuf::from(DEFAULT_DEVENV));
    }
}

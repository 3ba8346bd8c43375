//! Description of one external library build.
//!
//! A [`BuildSpec`] is declared once per library (built in, or loaded from a
//! `[[library]]` table in `harvest.toml`) and never mutated afterwards.
//!
//! ```toml
//! [[library]]
//! name = "zstd"
//! source-dir = "external/zstd/build/cmake"
//! args = ["-DZSTD_BUILD_SHARED=OFF"]
//! includes = ["lib/zstd.h"]
//! libs = [{ from = "lib/libzstd.a", to = "libzstd.a" }]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::builder::errors::BuildError;
use crate::core::platform::PlatformKey;

/// Which family of external tools drives the build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildKind {
    /// CMake project: make on Unix hosts, the IDE on Windows.
    #[default]
    Cmake,
    /// Autoconf-style `configure` script.
    Configure,
    /// Existing IDE solution, built in place.
    Ide,
}

/// Settings for a library that ships its own IDE solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct IdeProject {
    /// Solution path relative to the source directory, without `.sln`.
    pub solution: PathBuf,

    /// Restrict the build to a single project of the solution.
    #[serde(default)]
    pub project: Option<String>,

    /// Configuration label used for the debug build.
    #[serde(default = "default_debug_label")]
    pub debug: String,

    /// Configuration label used for the release build.
    #[serde(default = "default_release_label")]
    pub release: String,

    /// Upgrade the solution to the installed IDE version before building.
    #[serde(default)]
    pub upgrade: bool,
}

fn default_debug_label() -> String {
    "Debug".to_string()
}

fn default_release_label() -> String {
    "Release".to_string()
}

impl IdeProject {
    pub fn new(solution: impl Into<PathBuf>) -> Self {
        IdeProject {
            solution: solution.into(),
            project: None,
            debug: default_debug_label(),
            release: default_release_label(),
            upgrade: false,
        }
    }

    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn labels(mut self, debug: impl Into<String>, release: impl Into<String>) -> Self {
        self.debug = debug.into();
        self.release = release.into();
        self
    }

    pub fn upgrade(mut self, upgrade: bool) -> Self {
        self.upgrade = upgrade;
        self
    }
}

/// A produced artifact and the canonical file name it is harvested as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRule {
    /// Path relative to the build directory.
    pub from: PathBuf,
    /// File name inside the library output directory.
    pub to: String,
}

/// Ordered artifact rules.
///
/// Several rules may target the same file name; whichever source exists for
/// the current platform and configuration wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactMapping(Vec<ArtifactRule>);

impl ArtifactMapping {
    pub fn new() -> Self {
        ArtifactMapping(Vec::new())
    }

    /// Append a rule.
    pub fn map(mut self, from: impl Into<PathBuf>, to: impl Into<String>) -> Self {
        self.0.push(ArtifactRule {
            from: from.into(),
            to: to.into(),
        });
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArtifactRule> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One external project to build and harvest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BuildSpec {
    /// Library name, also the scratch directory name.
    pub name: String,

    /// Source directory relative to the repository root.
    pub source_dir: PathBuf,

    #[serde(default)]
    pub kind: BuildKind,

    /// Arguments for the configuration tool.
    #[serde(default)]
    pub args: Vec<String>,

    /// Header files or directories, relative to the build directory.
    #[serde(default)]
    pub includes: Vec<PathBuf>,

    #[serde(default)]
    pub libs: ArtifactMapping,

    /// IDE project files whose debug runtime defines get rewritten,
    /// relative to the build directory.
    #[serde(default)]
    pub project_files: Vec<PathBuf>,

    /// Name of the solution CMake generates. Defaults to the basename of the
    /// source directory.
    #[serde(default)]
    pub solution: Option<String>,

    /// Required for [`BuildKind::Ide`].
    #[serde(default)]
    pub ide: Option<IdeProject>,

    /// Platforms this spec applies to. Empty means all of them.
    #[serde(default)]
    pub platforms: Vec<PlatformKey>,
}

impl BuildSpec {
    pub fn new(name: impl Into<String>, source_dir: impl Into<PathBuf>) -> Self {
        BuildSpec {
            name: name.into(),
            source_dir: source_dir.into(),
            kind: BuildKind::default(),
            args: Vec::new(),
            includes: Vec::new(),
            libs: ArtifactMapping::new(),
            project_files: Vec::new(),
            solution: None,
            ide: None,
            platforms: Vec::new(),
        }
    }

    pub fn kind(mut self, kind: BuildKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn includes(mut self, includes: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.includes.extend(includes.into_iter().map(Into::into));
        self
    }

    pub fn libs(mut self, libs: ArtifactMapping) -> Self {
        self.libs = libs;
        self
    }

    pub fn project_files(mut self, files: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.project_files.extend(files.into_iter().map(Into::into));
        self
    }

    /// Build an existing IDE solution in place.
    pub fn ide(mut self, ide: IdeProject) -> Self {
        self.kind = BuildKind::Ide;
        self.ide = Some(ide);
        self
    }

    pub fn only_on(mut self, platforms: impl IntoIterator<Item = PlatformKey>) -> Self {
        self.platforms.extend(platforms);
        self
    }

    /// Whether this spec is used on `platform`.
    pub fn applies_to(&self, platform: PlatformKey) -> bool {
        self.platforms.is_empty() || self.platforms.contains(&platform)
    }

    /// Solution file stem for CMake-generated IDE builds.
    pub fn solution_name(&self) -> String {
        self.solution.clone().unwrap_or_else(|| {
            self.source_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.name.clone())
        })
    }

    /// Absolute source directory under `root`.
    pub fn source_path(&self, root: &Path) -> PathBuf {
        root.join(&self.source_dir)
    }

    /// IDE settings, required for [`BuildKind::Ide`].
    pub fn ide_project(&self) -> Result<&IdeProject, BuildError> {
        self.ide.as_ref().ok_or_else(|| BuildError::MissingIdeProject {
            library: self.name.clone(),
        })
    }
}

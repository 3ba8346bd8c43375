//! Build strategies.
//!
//! Each strategy turns a [`BuildSpec`] into a [`BuildPlan`] for one family of
//! external tools. The strategy is chosen once per library from its
//! [`BuildKind`] and the host platform.

mod cmake_ide;
mod configure;
mod configure_make;
mod ide_only;

use std::path::Path;

use anyhow::Result;

pub use cmake_ide::CmakeIde;
pub use configure::Configure;
pub use configure_make::ConfigureMake;
pub use ide_only::IdeOnly;

use crate::builder::context::BuildContext;
use crate::builder::plan::{BuildPlan, CommandSpec, StrategyKind};
use crate::core::{BuildKind, BuildSpec, PlatformKey};

/// Platform segment of IDE configuration labels.
const IDE_PLATFORM: &str = "x64";

/// A way of building and harvesting an external project.
pub trait BuildStrategy {
    fn kind(&self) -> StrategyKind;

    /// Produce the ordered steps for `spec`.
    fn plan(&self, spec: &BuildSpec, ctx: &BuildContext) -> Result<BuildPlan>;
}

/// Pick the strategy for a spec on a platform.
///
/// CMake projects go through the IDE on Windows and through make
/// everywhere else.
pub fn select_strategy(spec: &BuildSpec, platform: PlatformKey) -> Box<dyn BuildStrategy> {
    match spec.kind {
        BuildKind::Cmake if platform.is_windows() => Box::new(CmakeIde),
        BuildKind::Cmake => Box::new(ConfigureMake),
        BuildKind::Configure => Box::new(Configure),
        BuildKind::Ide => Box::new(IdeOnly),
    }
}

/// `make -j <jobs>` in `cwd`.
fn make_command(ctx: &BuildContext, cwd: &Path) -> CommandSpec {
    CommandSpec::new(&ctx.tools.make, cwd).args(["-j".to_string(), ctx.jobs.to_string()])
}

/// `devenv <solution> /Build "<label>|x64" [/Project <project>]` in `cwd`.
fn devenv_build(
    ctx: &BuildContext,
    cwd: &Path,
    solution: &str,
    label: &str,
    project: Option<&str>,
) -> CommandSpec {
    let mut cmd = CommandSpec::new(&ctx.tools.devenv, cwd)
        .arg(solution)
        .arg("/Build")
        .arg(format!("{}|{}", label, IDE_PLATFORM));

    if let Some(project) = project {
        cmd = cmd.arg("/Project").arg(project);
    }

    cmd
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::IdeProject;

    #[test]
    fn test_select_strategy() {
        let cmake = BuildSpec::new("assimp", "external/assimp");
        assert_eq!(
            select_strategy(&cmake, PlatformKey::Linux).kind(),
            StrategyKind::ConfigureMake
        );
        assert_eq!(
            select_strategy(&cmake, PlatformKey::MacOs).kind(),
            StrategyKind::ConfigureMake
        );
        assert_eq!(
            select_strategy(&cmake, PlatformKey::Windows).kind(),
            StrategyKind::CmakeIde
        );

        let configure = BuildSpec::new("ffmpeg", "external/FFmpeg").kind(BuildKind::Configure);
        assert_eq!(
            select_strategy(&configure, PlatformKey::Windows).kind(),
            StrategyKind::Configure
        );

        let ide = BuildSpec::new("lz4", "external/lz4").ide(IdeProject::new("visual/VS2017/lz4"));
        assert_eq!(
            select_strategy(&ide, PlatformKey::Windows).kind(),
            StrategyKind::IdeOnly
        );
    }

    #[test]
    fn test_devenv_build_command() {
        let ctx = BuildContext::detached("/r", PlatformKey::Windows, 4);
        let cmd = devenv_build(&ctx, Path::new("/r/external/lz4"), "lz4.sln", "Debug", Some("liblz4"));

        assert_eq!(cmd.args, vec!["lz4.sln", "/Build", "Debug|x64", "/Project", "liblz4"]);
    }
}

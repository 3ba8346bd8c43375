//! cmake + make, one scratch directory per configuration.

use anyhow::Result;

use super::{make_command, BuildStrategy};
use crate::builder::context::BuildContext;
use crate::builder::plan::{BuildPlan, CommandSpec, Step, StrategyKind};
use crate::core::{BuildSpec, Configuration};

pub struct ConfigureMake;

impl ConfigureMake {
    /// Steps for a single configuration: configure, build, harvest.
    pub fn configuration_steps(
        spec: &BuildSpec,
        ctx: &BuildContext,
        config: Configuration,
    ) -> Vec<Step> {
        let build_dir = ctx.layout.scratch_dir(&spec.name, Some(config));

        let cmake = CommandSpec::new(&ctx.tools.cmake, &build_dir)
            .args(spec.args.iter().cloned())
            .arg(format!("-DCMAKE_BUILD_TYPE={}", config.cmake_build_type()))
            .arg(spec.source_path(ctx.layout.root()).display().to_string());

        vec![
            Step::CreateDir {
                path: build_dir.clone(),
            },
            Step::Run(cmake),
            Step::Run(make_command(ctx, &build_dir)),
            Step::Harvest {
                build_dir,
                configuration: config,
            },
        ]
    }
}

impl BuildStrategy for ConfigureMake {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ConfigureMake
    }

    fn plan(&self, spec: &BuildSpec, ctx: &BuildContext) -> Result<BuildPlan> {
        let mut plan = BuildPlan::new(&spec.name, self.kind());
        for config in Configuration::ALL {
            plan.steps.extend(Self::configuration_steps(spec, ctx, config));
        }
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlatformKey;
    use std::path::PathBuf;

    #[test]
    fn test_configure_make_plan() {
        let ctx = BuildContext::detached("/r", PlatformKey::Linux, 8);
        let spec = BuildSpec::new("assimp", "external/assimp").args(["-DBUILD_SHARED_LIBS=OFF"]);

        let plan = ConfigureMake.plan(&spec, &ctx).unwrap();

        assert_eq!(plan.steps.len(), 8);
        assert_eq!(
            plan.steps[0],
            Step::CreateDir {
                path: PathBuf::from("/r/.setup/assimp/Debug")
            }
        );
        let Step::Run(cmake) = &plan.steps[1] else {
            panic!("expected cmake step");
        };
        assert_eq!(cmake.program, PathBuf::from("cmake"));
        assert_eq!(
            cmake.args,
            vec![
                "-DBUILD_SHARED_LIBS=OFF".to_string(),
                "-DCMAKE_BUILD_TYPE=Debug".to_string(),
                PathBuf::from("/r/external/assimp").display().to_string(),
            ]
        );
        assert_eq!(cmake.cwd, PathBuf::from("/r/.setup/assimp/Debug"));

        let Step::Run(make) = &plan.steps[2] else {
            panic!("expected make step");
        };
        assert_eq!(make.args, vec!["-j", "8"]);

        let Step::Run(release_cmake) = &plan.steps[5] else {
            panic!("expected release cmake step");
        };
        assert!(release_cmake
            .args
            .contains(&"-DCMAKE_BUILD_TYPE=RelWithDebInfo".to_string()));
        assert_eq!(
            plan.harvested_configurations(),
            vec![Configuration::Debug, Configuration::Release]
        );
    }
}

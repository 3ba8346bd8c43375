//! Autoconf-style `configure` script followed by make.
//!
//! Configure builds are not split per configuration; the result is
//! harvested into the release tree.

use anyhow::Result;

use super::{make_command, BuildStrategy};
use crate::builder::context::BuildContext;
use crate::builder::plan::{BuildPlan, CommandSpec, Step, StrategyKind};
use crate::core::{BuildSpec, Configuration};

pub struct Configure;

impl BuildStrategy for Configure {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Configure
    }

    fn plan(&self, spec: &BuildSpec, ctx: &BuildContext) -> Result<BuildPlan> {
        let mut plan = BuildPlan::new(&spec.name, self.kind());
        let build_dir = ctx.layout.scratch_dir(&spec.name, None);
        let script = spec.source_path(ctx.layout.root()).join("configure");

        plan.push(Step::CreateDir {
            path: build_dir.clone(),
        });
        plan.push(Step::Run(
            CommandSpec::new(&ctx.tools.shell, &build_dir)
                .arg(script.display().to_string())
                .args(spec.args.iter().cloned()),
        ));
        plan.push(Step::Run(make_command(ctx, &build_dir)));
        plan.push(Step::Harvest {
            build_dir,
            configuration: Configuration::Release,
        });

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BuildKind, PlatformKey};
    use std::path::PathBuf;

    #[test]
    fn test_configure_plan() {
        let ctx = BuildContext::detached("/r", PlatformKey::Linux, 2);
        let spec = BuildSpec::new("ffmpeg", "external/FFmpeg")
            .kind(BuildKind::Configure)
            .args(["--disable-everything", "--enable-decoder=flac"]);

        let plan = Configure.plan(&spec, &ctx).unwrap();

        let Step::Run(configure) = &plan.steps[1] else {
            panic!("expected configure step");
        };
        assert_eq!(configure.program, PathBuf::from("sh"));
        assert_eq!(configure.cwd, PathBuf::from("/r/.setup/ffmpeg"));
        assert_eq!(
            configure.args,
            vec![
                PathBuf::from("/r/external/FFmpeg/configure").display().to_string(),
                "--disable-everything".to_string(),
                "--enable-decoder=flac".to_string(),
            ]
        );
        assert_eq!(plan.command_count(), 2);
        assert_eq!(plan.harvested_configurations(), vec![Configuration::Release]);
    }
}

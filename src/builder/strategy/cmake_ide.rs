//! cmake once, then the IDE builds each configuration of the generated
//! solution.

use anyhow::Result;

use super::{devenv_build, BuildStrategy};
use crate::builder::context::BuildContext;
use crate::builder::plan::{BuildPlan, CommandSpec, Step, StrategyKind};
use crate::core::{BuildSpec, Configuration};

pub struct CmakeIde;

impl BuildStrategy for CmakeIde {
    fn kind(&self) -> StrategyKind {
        StrategyKind::CmakeIde
    }

    fn plan(&self, spec: &BuildSpec, ctx: &BuildContext) -> Result<BuildPlan> {
        let mut plan = BuildPlan::new(&spec.name, self.kind());
        let build_dir = ctx.layout.scratch_dir(&spec.name, None);

        plan.push(Step::CreateDir {
            path: build_dir.clone(),
        });
        plan.push(Step::Run(
            CommandSpec::new(&ctx.tools.cmake, &build_dir)
                .args(spec.args.iter().cloned())
                .arg(spec.source_path(ctx.layout.root()).display().to_string()),
        ));

        if !spec.project_files.is_empty() {
            plan.push(Step::RewriteProjectFiles {
                files: spec
                    .project_files
                    .iter()
                    .map(|f| build_dir.join(f))
                    .collect(),
            });
        }

        let solution = format!("{}.sln", spec.solution_name());
        for config in Configuration::ALL {
            plan.push(Step::Run(devenv_build(
                ctx,
                &build_dir,
                &solution,
                config.cmake_build_type(),
                None,
            )));
            plan.push(Step::Harvest {
                build_dir: build_dir.clone(),
                configuration: config,
            });
        }

        Ok(plan)
    }
}

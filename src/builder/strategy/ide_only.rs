//! In-place build of a solution shipped with the library.

use anyhow::Result;

use super::{devenv_build, BuildStrategy};
use crate::builder::context::BuildContext;
use crate::builder::plan::{BuildPlan, CommandSpec, Step, StrategyKind};
use crate::core::{BuildSpec, Configuration};

pub struct IdeOnly;

impl BuildStrategy for IdeOnly {
    fn kind(&self) -> StrategyKind {
        StrategyKind::IdeOnly
    }

    fn plan(&self, spec: &BuildSpec, ctx: &BuildContext) -> Result<BuildPlan> {
        let ide = spec.ide_project()?;
        let mut plan = BuildPlan::new(&spec.name, self.kind());

        let source_dir = spec.source_path(ctx.layout.root());
        let mut solution = ide.solution.clone().into_os_string();
        solution.push(".sln");
        let solution = solution.to_string_lossy().into_owned();

        if ide.upgrade {
            plan.push(Step::Run(
                CommandSpec::new(&ctx.tools.devenv, &source_dir)
                    .arg(&solution)
                    .arg("/Upgrade"),
            ));
        }

        if !spec.project_files.is_empty() {
            plan.push(Step::RewriteProjectFiles {
                files: spec
                    .project_files
                    .iter()
                    .map(|f| source_dir.join(f))
                    .collect(),
            });
        }

        for (config, label) in [
            (Configuration::Debug, &ide.debug),
            (Configuration::Release, &ide.release),
        ] {
            plan.push(Step::Run(devenv_build(
                ctx,
                &source_dir,
                &solution,
                label,
                ide.project.as_deref(),
            )));
            plan.push(Step::Harvest {
                build_dir: source_dir.clone(),
                configuration: config,
            });
        }

        Ok(plan)
    }
}

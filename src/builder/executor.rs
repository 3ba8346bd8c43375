//! Sequential plan execution.

use anyhow::{Context, Result};

use crate::builder::context::BuildContext;
use crate::builder::harvest::{harvest, HarvestReport};
use crate::builder::plan::{BuildPlan, Step};
use crate::builder::project_file::rewrite_project_file;
use crate::core::BuildSpec;
use crate::util::fs::ensure_dir;
use crate::util::process::CommandRunner;

/// Runs the steps of a plan one after another.
///
/// The first failing step aborts the plan; nothing is retried or cleaned
/// up.
pub struct BuildExecutor<'a> {
    ctx: &'a BuildContext,
    runner: &'a dyn CommandRunner,
}

impl<'a> BuildExecutor<'a> {
    pub fn new(ctx: &'a BuildContext, runner: &'a dyn CommandRunner) -> Self {
        BuildExecutor { ctx, runner }
    }

    /// Execute `plan` for `spec`, returning one report per harvest step.
    pub fn execute(&self, spec: &BuildSpec, plan: &BuildPlan) -> Result<Vec<HarvestReport>> {
        let mut reports = Vec::new();

        for step in &plan.steps {
            match step {
                Step::CreateDir { path } => ensure_dir(path)?,
                Step::Run(cmd) => self.runner.run(&cmd.to_process())?,
                Step::RewriteProjectFiles { files } => {
                    for file in files {
                        rewrite_project_file(file)?;
                    }
                }
                Step::Harvest {
                    build_dir,
                    configuration,
                } => {
                    let report = harvest(
                        &self.ctx.layout,
                        build_dir,
                        &spec.includes,
                        &spec.libs,
                        *configuration,
                    )
                    .with_context(|| {
                        format!("failed to harvest `{}` ({})", spec.name, configuration)
                    })?;
                    tracing::info!(
                        "Harvested {} ({}): {} header(s), {} librar{}",
                        spec.name,
                        configuration,
                        report.copied.len(),
                        report.moved.len(),
                        if report.moved.len() == 1 { "y" } else { "ies" }
                    );
                    reports.push(report);
                }
            }
        }

        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::errors::BuildError;
    use crate::builder::strategy::{BuildStrategy, ConfigureMake};
    use crate::core::{ArtifactMapping, Configuration, PlatformKey};
    use crate::test_support::RecordingRunner;
    use std::fs;
    use tempfile::TempDir;

    fn foo_spec() -> BuildSpec {
        BuildSpec::new("foo", "external/foo")
            .includes(["include/foo"])
            .libs(ArtifactMapping::new().map("out/libfoo.a", "foo.a"))
    }

    #[test]
    fn test_execute_runs_steps_in_order() {
        let tmp = TempDir::new().unwrap();
        let ctx = BuildContext::detached(tmp.path(), PlatformKey::Linux, 4);
        let spec = foo_spec();
        let plan = ConfigureMake.plan(&spec, &ctx).unwrap();

        let runner = RecordingRunner::new().on_run("make", |cmd| {
            let out = cmd.get_cwd().unwrap().join("out");
            fs::create_dir_all(&out).unwrap();
            fs::write(out.join("libfoo.a"), "archive").unwrap();
        });

        let reports = BuildExecutor::new(&ctx, &runner).execute(&spec, &plan).unwrap();

        assert_eq!(runner.programs(), vec!["cmake", "make", "cmake", "make"]);
        assert_eq!(reports.len(), 2);
        for config in Configuration::ALL {
            let lib = ctx.layout.lib_dir(config).join("foo.a");
            assert_eq!(fs::read_to_string(lib).unwrap(), "archive");
            assert!(!ctx
                .layout
                .scratch_dir("foo", Some(config))
                .join("out/libfoo.a")
                .exists());
        }
    }

    #[test]
    fn test_failed_build_skips_harvest() {
        let tmp = TempDir::new().unwrap();
        let ctx = BuildContext::detached(tmp.path(), PlatformKey::Linux, 4);
        let spec = foo_spec();
        let plan = ConfigureMake.plan(&spec, &ctx).unwrap();

        // The artifact is already there, but make fails
        let build_dir = ctx.layout.scratch_dir("foo", Some(Configuration::Debug));
        fs::create_dir_all(build_dir.join("out")).unwrap();
        fs::write(build_dir.join("out/libfoo.a"), "stale").unwrap();

        let runner = RecordingRunner::new().fail_on("make", 2);
        let err = BuildExecutor::new(&ctx, &runner)
            .execute(&spec, &plan)
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<BuildError>(),
            Some(BuildError::CommandFailed { code: Some(2), .. })
        ));
        assert_eq!(runner.programs(), vec!["cmake", "make"]);
        assert!(build_dir.join("out/libfoo.a").exists());
        assert!(!ctx.layout.lib_root.exists());
    }

    #[test]
    fn test_rewrite_step_edits_project_files() {
        let tmp = TempDir::new().unwrap();
        let ctx = BuildContext::detached(tmp.path(), PlatformKey::Windows, 4);
        let project = tmp.path().join("code/foo.vcxproj");
        fs::create_dir_all(project.parent().unwrap()).unwrap();
        fs::write(&project, "WIN32;_DEBUG").unwrap();

        let mut plan = BuildPlan::new("foo", crate::builder::plan::StrategyKind::CmakeIde);
        plan.push(Step::RewriteProjectFiles {
            files: vec![project.clone()],
        });

        BuildExecutor::new(&ctx, &RecordingRunner::new())
            .execute(&foo_spec(), &plan)
            .unwrap();

        assert_eq!(
            fs::read_to_string(&project).unwrap(),
            "WIN32;_ITERATOR_DEBUG_LEVEL=1;_DEBUG"
        );
    }
}

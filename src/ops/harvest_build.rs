//! Implementation of `harvest build`.

use anyhow::{bail, Context, Result};

use crate::builder::{select_strategy, BuildContext, BuildExecutor, BuildPlan, HarvestReport};
use crate::core::BuildSpec;
use crate::libraries::Registry;
use crate::util::process::CommandRunner;

/// Options for the build command.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Libraries to build, in order
    pub libraries: Vec<String>,

    /// Build every known library
    pub all: bool,

    /// Only produce plans, run nothing
    pub plan_only: bool,
}

/// Outcome for one requested library.
#[derive(Debug, Clone)]
pub struct LibraryOutcome {
    pub library: String,
    /// `None` when the library has nothing to build on this platform
    pub plan: Option<BuildPlan>,
    /// One report per harvested configuration; empty for plan-only runs
    pub reports: Vec<HarvestReport>,
}

/// Plan the build of one spec with the strategy for the context's platform.
pub fn plan_library(spec: &BuildSpec, ctx: &BuildContext) -> Result<BuildPlan> {
    select_strategy(spec, ctx.platform).plan(spec, ctx)
}

/// Build and harvest one library: every configuration, strictly in order.
pub fn build_library(
    spec: &BuildSpec,
    ctx: &BuildContext,
    runner: &dyn CommandRunner,
) -> Result<Vec<HarvestReport>> {
    let plan = plan_library(spec, ctx)?;
    run_plan(spec, &plan, ctx, runner)
}

/// Execute an already computed plan for `spec`.
fn run_plan(
    spec: &BuildSpec,
    plan: &BuildPlan,
    ctx: &BuildContext,
    runner: &dyn CommandRunner,
) -> Result<Vec<HarvestReport>> {
    tracing::debug!(
        "Building {} with {} ({} command(s))",
        spec.name,
        plan.strategy,
        plan.command_count()
    );

    BuildExecutor::new(ctx, runner)
        .execute(spec, plan)
        .with_context(|| format!("failed to build `{}`", spec.name))
}

/// Build the requested libraries one after another, stopping at the first
/// failure.
pub fn build(
    registry: &Registry,
    ctx: &BuildContext,
    opts: &BuildOptions,
    runner: &dyn CommandRunner,
) -> Result<Vec<LibraryOutcome>> {
    let names: Vec<String> = if opts.all {
        registry.names().into_iter().map(String::from).collect()
    } else {
        opts.libraries.clone()
    };

    if names.is_empty() {
        bail!("no libraries selected\nhint: pass library names or `--all`");
    }

    // Resolve everything up front so a typo fails before anything is built
    let mut specs = Vec::with_capacity(names.len());
    for name in &names {
        specs.push((name, registry.find(name, ctx.platform)?));
    }

    let mut outcomes = Vec::with_capacity(specs.len());
    for (name, spec) in specs {
        let Some(spec) = spec else {
            tracing::info!("Nothing to build for {} on {}", name, ctx.platform);
            outcomes.push(LibraryOutcome {
                library: name.clone(),
                plan: None,
                reports: Vec::new(),
            });
            continue;
        };

        let plan = plan_library(spec, ctx)?;
        let reports = if opts.plan_only {
            Vec::new()
        } else {
            run_plan(spec, &plan, ctx, runner)?
        };

        outcomes.push(LibraryOutcome {
            library: name.clone(),
            plan: Some(plan),
            reports,
        });
    }

    Ok(outcomes)
}

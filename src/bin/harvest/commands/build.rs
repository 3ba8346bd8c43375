//! `harvest build` command

use anyhow::Result;
use harvest::ops::{build, BuildOptions};
use harvest::util::process::SystemRunner;

use super::GlobalOptions;
use crate::cli::BuildArgs;

pub fn execute(global: &GlobalOptions, args: BuildArgs) -> Result<()> {
    let session = global.session(args.jobs)?;

    let opts = BuildOptions {
        libraries: args.libraries,
        all: args.all,
        plan_only: args.plan,
    };

    if !args.plan {
        eprintln!(
            "    Building for {} ({} job(s)) in {}",
            session.ctx.platform,
            session.ctx.jobs,
            session.ctx.layout.root.display()
        );
    }

    let outcomes = build(&session.registry, &session.ctx, &opts, &SystemRunner)?;

    if args.plan {
        let plans: Vec<_> = outcomes.iter().filter_map(|o| o.plan.as_ref()).collect();
        println!("{}", serde_json::to_string_pretty(&plans)?);
        return Ok(());
    }

    for outcome in &outcomes {
        match &outcome.plan {
            Some(plan) => {
                let libs: usize = outcome.reports.iter().map(|r| r.moved.len()).sum();
                let headers: usize = outcome.reports.iter().map(|r| r.copied.len()).sum();
                eprintln!(
                    "    Finished {} via {}: {} librar{}, {} header path(s)",
                    outcome.library,
                    plan.strategy,
                    libs,
                    if libs == 1 { "y" } else { "ies" },
                    headers
                );
            }
            None => eprintln!(
                "     Skipped {} (nothing to build on {})",
                outcome.library, session.ctx.platform
            ),
        }
    }

    Ok(())
}

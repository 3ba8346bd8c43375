//! `harvest paths` command

use anyhow::Result;
use harvest::Configuration;

use super::GlobalOptions;
use crate::cli::PathsArgs;

pub fn execute(global: &GlobalOptions, args: PathsArgs) -> Result<()> {
    let session = global.session(None)?;
    let layout = &session.ctx.layout;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&session.ctx)?);
        return Ok(());
    }

    println!("platform  {}", session.ctx.platform);
    println!("root      {}", layout.root.display());
    println!("scratch   {}", layout.scratch_root.display());
    for config in Configuration::ALL {
        println!("include   {}", layout.include_dir(config).display());
        println!("lib       {}", layout.lib_dir(config).display());
    }

    Ok(())
}

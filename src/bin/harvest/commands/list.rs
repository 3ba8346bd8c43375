//! `harvest list` command

use anyhow::Result;
use harvest::builder::select_strategy;

use super::GlobalOptions;

pub fn execute(global: &GlobalOptions) -> Result<()> {
    let session = global.session(None)?;
    let platform = session.ctx.platform;

    for name in session.registry.names() {
        match session.registry.find(name, platform)? {
            Some(spec) => println!(
                "{:<16} {:<16} {}",
                name,
                select_strategy(spec, platform).kind(),
                spec.source_dir.display()
            ),
            None => println!("{:<16} {:<16} -", name, "(none)"),
        }
    }

    Ok(())
}

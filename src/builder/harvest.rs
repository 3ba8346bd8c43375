//! Harvesting build output into the third-party tree.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::{ArtifactMapping, Configuration, Layout};
use crate::util::fs::{copy_path, ensure_dir, move_path, remove_path_if_exists};

/// What a harvest did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestReport {
    /// Headers copied into the include tree
    pub copied: Vec<PathBuf>,
    /// Libraries moved into the lib tree
    pub moved: Vec<PathBuf>,
    /// Declared sources that did not exist
    pub skipped: Vec<PathBuf>,
}

impl HarvestReport {
    pub fn is_empty(&self) -> bool {
        self.copied.is_empty() && self.moved.is_empty()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Transfer {
    Copy,
    Move,
}

/// Copy declared includes and move declared library artifacts from
/// `build_dir` into the output directories for `config`.
///
/// Each destination is replaced wholesale. Declared sources that do not
/// exist are skipped, since most artifacts only exist for some platform and
/// toolchain combinations.
pub fn harvest(
    layout: &Layout,
    build_dir: &Path,
    includes: &[PathBuf],
    libs: &ArtifactMapping,
    config: Configuration,
) -> Result<HarvestReport> {
    let mut report = HarvestReport::default();

    let include_dir = layout.include_dir(config);
    for include in includes {
        let src = build_dir.join(include);
        let Some(name) = include.file_name() else {
            tracing::warn!("Ignoring include without a file name: {}", include.display());
            continue;
        };
        let dst = include_dir.join(name);
        transfer(&src, &dst, &include_dir, Transfer::Copy, &mut report)?;
    }

    let lib_dir = layout.lib_dir(config);
    for rule in libs.iter() {
        let src = build_dir.join(&rule.from);
        let dst = lib_dir.join(&rule.to);
        transfer(&src, &dst, &lib_dir, Transfer::Move, &mut report)?;
    }

    Ok(report)
}

fn transfer(
    src: &Path,
    dst: &Path,
    out_dir: &Path,
    mode: Transfer,
    report: &mut HarvestReport,
) -> Result<()> {
    if !src.exists() {
        tracing::debug!("Skipping missing {}", src.display());
        report.skipped.push(src.to_path_buf());
        return Ok(());
    }

    match mode {
        Transfer::Copy => tracing::info!("Copying {} to {}", src.display(), dst.display()),
        Transfer::Move => tracing::info!("Moving {} to {}", src.display(), dst.display()),
    }

    ensure_dir(out_dir)?;
    remove_path_if_exists(dst)?;

    match mode {
        Transfer::Copy => {
            copy_path(src, dst)?;
            report.copied.push(dst.to_path_buf());
        }
        Transfer::Move => {
            move_path(src, dst)?;
            report.moved.push(dst.to_path_buf());
        }
    }

    Ok(())
}

//! Debug runtime rewrite for Visual Studio project files.
//!
//! Debug builds of the harvested libraries must link against the same
//! iterator debug level as the engine, so every `_DEBUG` define is prefixed
//! with `_ITERATOR_DEBUG_LEVEL=1;`.

use std::borrow::Cow;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use crate::util::fs::{read_to_string, write_string};

const REWRITTEN_MARKER: &str = "_ITERATOR_DEBUG_LEVEL=1;_DEBUG";

// An existing prefix is matched together with its `_DEBUG` so reruns
// normalize the level instead of stacking prefixes. The trailing `\b` keeps
// the `_DEBUG` inside `_ITERATOR_DEBUG_LEVEL` itself from matching.
static DEBUG_DEFINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:_ITERATOR_DEBUG_LEVEL=\d+;)?_DEBUG\b").expect("valid debug define pattern")
});

/// Rewrite the debug defines in project file text.
pub fn rewrite_debug_runtime(text: &str) -> Cow<'_, str> {
    DEBUG_DEFINE.replace_all(text, REWRITTEN_MARKER)
}

/// Rewrite one project file in place. Returns whether the file changed.
pub fn rewrite_project_file(path: &Path) -> Result<bool> {
    let original = read_to_string(path)?;

    match rewrite_debug_runtime(&original) {
        Cow::Owned(rewritten) if rewritten != original => {
            tracing::info!("Rewriting debug runtime in {}", path.display());
            write_string(path, &rewritten)?;
            Ok(true)
        }
        _ => {
            tracing::debug!("{} already up to date", path.display());
            Ok(false)
        }
    }
}

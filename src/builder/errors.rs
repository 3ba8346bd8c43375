//! Build error types.

use std::path::PathBuf;

use thiserror::Error;

/// Typed failures of a build run.
#[derive(Debug, Error)]
pub enum BuildError {
    /// An external tool exited unsuccessfully. `code` is `None` when the
    /// process was terminated by a signal.
    #[error("`{command}` failed with exit code {}", .code.map(|c| c.to_string()).unwrap_or_else(|| "none".to_string()))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("unsupported host platform `{0}` (expected macos, linux or windows)")]
    UnsupportedPlatform(String),

    #[error("root directory `{}` is not valid UTF-8", .0.display())]
    NonUtf8Root(PathBuf),

    #[error("unknown library `{name}` (available: {})", .available.join(", "))]
    UnknownLibrary { name: String, available: Vec<String> },

    #[error("library `{library}` is built from an IDE solution but has no `[ide]` settings")]
    MissingIdeProject { library: String },
}

impl BuildError {
    /// Exit status the process should terminate with for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::CommandFailed { code: Some(code), .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}

/// Exit status for an arbitrary error chain.
///
/// A failed external tool propagates its own exit code; anything else exits
/// with 1.
pub fn exit_code_of(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<BuildError>())
        .map(BuildError::exit_code)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_code_propagates_tool_status() {
        let err = BuildError::CommandFailed {
            command: "make -j 8".to_string(),
            code: Some(2),
        };
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "`make -j 8` failed with exit code 2");
    }

    #[test]
    fn test_exit_code_through_context() {
        let err: anyhow::Error = Err::<(), _>(BuildError::CommandFailed {
            command: "cmake".to_string(),
            code: Some(7),
        })
        .context("failed to build `assimp`")
        .unwrap_err();

        assert_eq!(exit_code_of(&err), 7);
    }

    #[test]
    fn test_exit_code_defaults_to_one() {
        let signaled = BuildError::CommandFailed {
            command: "make".to_string(),
            code: None,
        };
        assert_eq!(signaled.exit_code(), 1);
        assert_eq!(exit_code_of(&anyhow::anyhow!("boom")), 1);
    }
}

//! Test utilities for Harvest unit tests.
//!
//! Provides a [`CommandRunner`] that records commands instead of spawning
//! them, so strategies and the executor can be tested without cmake, make
//! or Visual Studio installed.
//!
//! # Example
//!
//! ```rust,ignore
//! let runner = RecordingRunner::new()
//!     .on_run("make", |cmd| std::fs::write(cmd.get_cwd().unwrap().join("libfoo.a"), "").unwrap())
//!     .fail_on("devenv", 1);
//! ```

use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;

use crate::builder::errors::BuildError;
use crate::util::process::{CommandRunner, ProcessBuilder};

type Effect = Box<dyn Fn(&ProcessBuilder)>;

/// Records every command it is asked to run.
#[derive(Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<ProcessBuilder>>,
    effects: Vec<(String, Effect)>,
    failures: Vec<(String, i32)>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `effect` whenever `program` is invoked, e.g. to create the files
    /// a real build would produce.
    pub fn on_run(mut self, program: &str, effect: impl Fn(&ProcessBuilder) + 'static) -> Self {
        self.effects.push((program.to_string(), Box::new(effect)));
        self
    }

    /// Make `program` exit with `code`.
    pub fn fail_on(mut self, program: &str, code: i32) -> Self {
        self.failures.push((program.to_string(), code));
        self
    }

    /// All recorded commands, in order.
    pub fn calls(&self) -> Vec<ProcessBuilder> {
        self.calls.lock().unwrap().clone()
    }

    /// Short program names of all recorded commands, in order.
    pub fn programs(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|c| short_name(c.get_program()))
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, cmd: &ProcessBuilder) -> Result<()> {
        self.calls.lock().unwrap().push(cmd.clone());
        let name = short_name(cmd.get_program());

        if let Some((_, code)) = self.failures.iter().find(|(p, _)| *p == name) {
            return Err(BuildError::CommandFailed {
                command: cmd.display_command(),
                code: Some(*code),
            }
            .into());
        }

        for (program, effect) in &self.effects {
            if *program == name {
                effect(cmd);
            }
        }

        Ok(())
    }
}

/// Program name without directories or a `.exe`/`.com` suffix, on any host.
fn short_name(program: &Path) -> String {
    let display = program.display().to_string();
    let file = display.rsplit(&['/', '\\'][..]).next().unwrap_or(&display);
    file.trim_end_matches(".exe")
        .trim_end_matches(".com")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name() {
        assert_eq!(short_name(Path::new("cmake")), "cmake");
        assert_eq!(short_name(Path::new("/usr/bin/make")), "make");
        assert_eq!(
            short_name(Path::new(crate::builder::tools::DEFAULT_DEVENV)),
            "devenv"
        );
    }

    #[test]
    fn test_fail_on() {
        let runner = RecordingRunner::new().fail_on("make", 4);
        runner.run(&ProcessBuilder::new("cmake")).unwrap();
        assert!(runner.run(&ProcessBuilder::new("make")).is_err());
        assert_eq!(runner.programs(), vec!["cmake", "make"]);
    }
}

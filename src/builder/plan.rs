//! Build plans.
//!
//! A [`BuildPlan`] is the ordered list of steps one strategy takes to build
//! and harvest a library. Plans are pure data: they can be printed as JSON
//! with `harvest build --plan` or handed to the executor.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::Configuration;
use crate::util::process::ProcessBuilder;

/// The four ways a library gets built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// cmake + make, once per configuration
    ConfigureMake,
    /// cmake once, then the IDE per configuration
    CmakeIde,
    /// Existing IDE solution built in place
    IdeOnly,
    /// `configure` script + make, single configuration
    Configure,
}

impl StrategyKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::ConfigureMake => "configure-make",
            StrategyKind::CmakeIde => "cmake-ide",
            StrategyKind::IdeOnly => "ide-only",
            StrategyKind::Configure => "configure",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// An external command with its working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl CommandSpec {
    pub fn new(program: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        CommandSpec {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn to_process(&self) -> ProcessBuilder {
        ProcessBuilder::new(&self.program)
            .args(&self.args)
            .cwd(&self.cwd)
    }
}

/// A single step of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    /// Create a directory if it does not exist yet
    CreateDir { path: PathBuf },
    /// Run an external tool; a non-zero exit aborts the plan
    Run(CommandSpec),
    /// Rewrite debug runtime defines in IDE project files
    RewriteProjectFiles { files: Vec<PathBuf> },
    /// Copy headers and move libraries into the output tree
    Harvest {
        build_dir: PathBuf,
        configuration: Configuration,
    },
}

/// All steps to build one library, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPlan {
    pub library: String,
    pub strategy: StrategyKind,
    pub steps: Vec<Step>,
}

impl BuildPlan {
    pub fn new(library: impl Into<String>, strategy: StrategyKind) -> Self {
        BuildPlan {
            library: library.into(),
            strategy,
            steps: Vec::new(),
        }
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Number of external commands in the plan.
    pub fn command_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, Step::Run(_)))
            .count()
    }

    /// Configurations harvested by the plan, in order.
    pub fn harvested_configurations(&self) -> Vec<Configuration> {
        self.steps
            .iter()
            .filter_map(|s| match s {
                Step::Harvest { configuration, .. } => Some(*configuration),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_json_shape() {
        let step = Step::Run(CommandSpec::new("make", "/r/.setup/foo/Debug").args(["-j", "8"]));
        let json = serde_json::to_value(&step).unwrap();

        assert_eq!(json["type"], "run");
        assert_eq!(json["program"], "make");
        assert_eq!(json["args"][1], "8");
    }

    #[test]
    fn test_plan_counts() {
        let mut plan = BuildPlan::new("foo", StrategyKind::ConfigureMake);
        plan.push(Step::CreateDir { path: "/b".into() });
        plan.push(Step::Run(CommandSpec::new("cmake", "/b")));
        plan.push(Step::Run(CommandSpec::new("make", "/b")));
        plan.push(Step::Harvest {
            build_dir: "/b".into(),
            configuration: Configuration::Debug,
        });

        assert_eq!(plan.command_count(), 2);
        assert_eq!(plan.harvested_configurations(), vec![Configuration::Debug]);
    }
}

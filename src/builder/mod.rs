//! Building external projects and harvesting their output.
//!
//! A [`BuildSpec`](crate::core::BuildSpec) is turned into a [`BuildPlan`] by
//! the [`BuildStrategy`] selected for the host platform, and the plan is run
//! step by step by the [`BuildExecutor`].

pub mod context;
pub mod errors;
pub mod executor;
pub mod harvest;
pub mod plan;
pub mod project_file;
pub mod strategy;
pub mod tools;

pub use context::BuildContext;
pub use errors::BuildError;
pub use executor::BuildExecutor;
pub use self::harvest::{harvest, HarvestReport};
pub use plan::{BuildPlan, CommandSpec, Step, StrategyKind};
pub use strategy::{select_strategy, BuildStrategy};
pub use tools::ToolSet;

//! Harvest - builds third-party native libraries and collects their output
//!
//! Each library is described by a [`BuildSpec`]. The build strategy for the
//! host platform turns it into a plan of external tool invocations (CMake,
//! make, Visual Studio, configure scripts), and the headers and static
//! libraries it produces are harvested into `3rdparty/`, keyed by platform
//! and configuration.

pub mod builder;
pub mod core;
pub mod libraries;
pub mod ops;
pub mod util;

/// Test utilities for Harvest unit tests.
///
/// Only compiled for tests. Provides a command runner that records
/// invocations instead of spawning processes.
#[cfg(test)]
pub mod test_support;

pub use builder::{BuildContext, BuildError, BuildPlan, HarvestReport};
pub use crate::core::{ArtifactMapping, BuildSpec, Configuration, Layout, PlatformKey};
pub use libraries::Registry;
pub use util::config::Config;

//! High-level operations.

pub mod harvest_build;

pub use harvest_build::{build, build_library, plan_library, BuildOptions, LibraryOutcome};

//! Core data model: platforms, configurations, layout and build specs.

pub mod layout;
pub mod platform;
pub mod spec;

pub use layout::Layout;
pub use platform::{Configuration, PlatformKey};
pub use spec::{ArtifactMapping, ArtifactRule, BuildKind, BuildSpec, IdeProject};

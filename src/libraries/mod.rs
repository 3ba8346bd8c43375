//! Built-in library recipes and lookup.

mod assimp;
mod compressonator;
mod ffmpeg;
mod lz4;

use crate::builder::errors::BuildError;
use crate::core::{BuildSpec, PlatformKey};

/// All built-in recipes. A library may appear once per platform branch.
pub fn builtin() -> Vec<BuildSpec> {
    let mut specs = vec![assimp::spec()];
    specs.extend(compressonator::specs());
    specs.extend(ffmpeg::specs());
    specs.push(lz4::spec());
    specs
}

/// Known libraries: built-in recipes plus those declared in config.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    specs: Vec<BuildSpec>,
}

impl Registry {
    /// Built-in recipes shadowed by `extra` specs of the same name.
    pub fn new(extra: Vec<BuildSpec>) -> Self {
        let mut specs: Vec<BuildSpec> = builtin()
            .into_iter()
            .filter(|b| !extra.iter().any(|e| e.name == b.name))
            .collect();
        specs.extend(extra);
        Registry { specs }
    }

    /// Library names in declaration order, without duplicates.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for spec in &self.specs {
            if !names.contains(&spec.name.as_str()) {
                names.push(&spec.name);
            }
        }
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.specs.iter().any(|s| s.name == name)
    }

    /// The spec used for `name` on `platform`.
    ///
    /// `Ok(None)` means the library exists but has nothing to build on this
    /// platform.
    pub fn find(&self, name: &str, platform: PlatformKey) -> Result<Option<&BuildSpec>, BuildError> {
        if !self.contains(name) {
            return Err(BuildError::UnknownLibrary {
                name: name.to_string(),
                available: self.names().into_iter().map(String::from).collect(),
            });
        }

        Ok(self
            .specs
            .iter()
            .find(|s| s.name == name && s.applies_to(platform)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BuildKind;

    #[test]
    fn test_builtin_names() {
        let registry = Registry::new(Vec::new());
        assert_eq!(
            registry.names(),
            vec!["assimp", "compressonator", "ffmpeg", "lz4"]
        );
    }

    #[test]
    fn test_platform_branches() {
        let registry = Registry::new(Vec::new());

        let windows = registry.find("compressonator", PlatformKey::Windows).unwrap().unwrap();
        assert_eq!(windows.kind, BuildKind::Ide);

        let linux = registry.find("compressonator", PlatformKey::Linux).unwrap().unwrap();
        assert_eq!(linux.kind, BuildKind::Cmake);

        assert!(registry.find("lz4", PlatformKey::Windows).unwrap().is_some());
        assert!(registry.find("lz4", PlatformKey::MacOs).unwrap().is_none());
    }

    #[test]
    fn test_unknown_library() {
        let registry = Registry::new(Vec::new());
        let err = registry.find("openssl", PlatformKey::Linux).unwrap_err();
        assert!(err.to_string().contains("assimp, compressonator, ffmpeg, lz4"));
    }

    #[test]
    fn test_config_specs_shadow_builtins() {
        let custom = BuildSpec::new("lz4", "external/lz4/build/cmake");
        let registry = Registry::new(vec![custom.clone(), BuildSpec::new("zstd", "external/zstd")]);

        assert_eq!(registry.find("lz4", PlatformKey::Linux).unwrap(), Some(&custom));
        assert!(registry.contains("zstd"));
        assert_eq!(registry.names().len(), 5);
    }
}

//! Static Factory: hand out products by key, falling back to a default.
//!
//! The key-to-product table is metadata, normally read from a TOML file:
//!
//! ```toml
//! [modules]
//! moduleA = "ModuleA"
//! moduleB = "ModuleB"
//! ```
//!
//! The framework is an ordinary value built from that metadata, so callers
//! pass it around instead of reaching for a process-wide registry.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    Default,
    A,
    B,
}

impl Module {
    pub fn name(self) -> &'static str {
        match self {
            Module::Default => "DefaultModule",
            Module::A => "ModuleA",
            Module::B => "ModuleB",
        }
    }
}

impl FromStr for Module {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DefaultModule" => Ok(Module::Default),
            "ModuleA" => Ok(Module::A),
            "ModuleB" => Ok(Module::B),
            _ => Err(()),
        }
    }
}

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("failed to read metadata file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid metadata: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("key `{key}` maps to unknown module `{module}`")]
    UnknownModule { key: String, module: String },
}

#[derive(Deserialize)]
struct RawMetadata {
    #[serde(default)]
    modules: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    modules: HashMap<String, Module>,
}

impl Metadata {
    /// The table shipped with the crate.
    pub fn builtin() -> Self {
        let modules = [("moduleA", Module::A), ("moduleB", Module::B)]
            .into_iter()
            .map(|(key, module)| (key.to_string(), module))
            .collect();
        Self { modules }
    }

    pub fn from_toml_str(input: &str) -> Result<Self, MetadataError> {
        let raw: RawMetadata = toml::from_str(input)?;
        let mut modules = HashMap::with_capacity(raw.modules.len());
        for (key, name) in raw.modules {
            let module = name.parse().map_err(|_| MetadataError::UnknownModule {
                key: key.clone(),
                module: name.clone(),
            })?;
            modules.insert(key, module);
        }
        Ok(Self { modules })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, MetadataError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| MetadataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

pub struct ProviderFramework {
    metadata: Metadata,
}

impl ProviderFramework {
    pub fn new(metadata: Metadata) -> Self {
        Self { metadata }
    }

    /// Unknown keys get [`Module::Default`].
    pub fn instance(&self, key: &str) -> Module {
        match self.metadata.modules.get(key) {
            Some(module) => *module,
            None => {
                debug!("no module registered for `{}`, using default", key);
                Module::Default
            }
        }
    }
}

impl Default for ProviderFramework {
    fn default() -> Self {
        Self::new(Metadata::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_get_defined_instance() {
        let providers = ProviderFramework::default();
        assert_eq!(providers.instance("moduleA"), Module::A);
        assert_eq!(providers.instance("moduleB"), Module::B);
    }

    #[test]
    fn test_get_undefined_instance_returns_default() {
        let providers = ProviderFramework::default();
        assert_eq!(providers.instance("bogus"), Module::Default);
    }

    #[test]
    fn test_metadata_from_toml() {
        let metadata = Metadata::from_toml_str(
            r#"
            [modules]
            primary = "ModuleB"
            "#,
        )
        .unwrap();
        assert_eq!(metadata.len(), 1);

        let providers = ProviderFramework::new(metadata);
        assert_eq!(providers.instance("primary"), Module::B);
        assert_eq!(providers.instance("moduleA"), Module::Default);
    }

    #[test]
    fn test_metadata_without_modules_table_is_empty() {
        let metadata = Metadata::from_toml_str("").unwrap();
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_metadata_rejects_unknown_module() {
        let err = Metadata::from_toml_str("[modules]\nx = \"ModuleZ\"\n").unwrap_err();
        assert!(matches!(
            err,
            MetadataError::UnknownModule { ref key, ref module } if key == "x" && module == "ModuleZ"
        ));
    }

    #[test]
    fn test_metadata_rejects_malformed_toml() {
        let err = Metadata::from_toml_str("[modules\n").unwrap_err();
        assert!(matches!(err, MetadataError::Parse(_)));
    }

    #[test]
    fn test_metadata_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[modules]\nmoduleA = \"ModuleA\"").unwrap();

        let metadata = Metadata::load(file.path()).unwrap();
        assert_eq!(ProviderFramework::new(metadata).instance("moduleA"), Module::A);
    }

    #[test]
    fn test_metadata_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Metadata::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, MetadataError::Io { .. }));
    }

    #[test]
    fn test_module_names_round_trip() {
        for module in [Module::Default, Module::A, Module::B] {
            assert_eq!(module.name().parse::<Module>(), Ok(module));
        }
    }
}

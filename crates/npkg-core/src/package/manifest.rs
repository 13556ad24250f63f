use crate::core::{NpkgError, NpkgResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// The subset of package.json npkg cares about
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageJson {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub scripts: HashMap<String, String>,
    #[serde(default)]
    pub dependencies: HashMap<String, String>,
}

impl PackageJson {
    /// Parse package.json content
    pub fn parse(content: &str) -> NpkgResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// `name@version` for display, falling back to whatever is present
    pub fn id(&self) -> String {
        match (&self.name, &self.version) {
            (Some(name), Some(version)) => format!("{}@{}", name, version),
            (Some(name), None) => name.clone(),
            (None, Some(version)) => format!("@{}", version),
            (None, None) => String::new(),
        }
    }
}

/// Reads a package manifest from disk
pub trait ManifestReader {
    /// Read the manifest at `path` (the package.json file itself)
    fn read(&self, path: &Path) -> NpkgResult<PackageJson>;
}

/// Reads package.json files with serde_json
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonManifestReader;

impl ManifestReader for JsonManifestReader {
    fn read(&self, path: &Path) -> NpkgResult<PackageJson> {
        let content = fs::read_to_string(path)?;
        PackageJson::parse(&content).map_err(|e| {
            NpkgError::Package(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}

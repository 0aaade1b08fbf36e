//! Shared types for release-artifact generation

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ManifestError, Result};

/// A release unit inside the workspace.
///
/// Read-only to this crate: which packages are released, and in what order,
/// is decided by the surrounding orchestration layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Package name, unique within the workspace
    pub name: String,

    /// Semantic version string (already bumped for the upcoming release)
    pub version: String,

    /// Package directory
    pub location: PathBuf,

    /// Path to the package.json manifest
    pub manifest_location: PathBuf,

    /// Whether the manifest marks the package private
    pub private: bool,
}

impl Package {
    /// Create a package descriptor from known fields
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        location: impl Into<PathBuf>,
    ) -> Self {
        let location = location.into();
        let manifest_location = location.join("package.json");
        Self {
            name: name.into(),
            version: version.into(),
            location,
            manifest_location,
            private: false,
        }
    }

    /// Load a package descriptor from the package.json in `location`
    pub fn load(location: &Path) -> Result<Self> {
        let manifest_location = location.join("package.json");
        let manifest = PackageManifest::load(&manifest_location)?;

        semver::Version::parse(&manifest.version).map_err(|e| ManifestError::InvalidVersion {
            version: manifest.version.clone(),
            path: manifest_location.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            name: manifest.name,
            version: manifest.version,
            location: location.to_path_buf(),
            manifest_location,
            private: manifest.private.unwrap_or(false),
        })
    }

    /// Deterministic tarball filename produced by `npm pack`.
    ///
    /// Scoped names are flattened: `@scope/pkg` becomes `scope-pkg`.
    pub fn tarball_name(&self) -> String {
        let flat = self.name.trim_start_matches('@').replace('/', "-");
        format!("{}-{}.tgz", flat, self.version)
    }
}

/// Subset of package.json read for release purposes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    /// Package name
    pub name: String,

    /// Package version
    pub version: String,

    /// Whether package is private
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,

    /// Package description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Preserve other fields
    #[serde(flatten)]
    pub other: HashMap<String, serde_json::Value>,
}

impl PackageManifest {
    /// Load package.json from path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|_| ManifestError::NotFound(path.to_path_buf()))?;

        serde_json::from_str(&content)
            .map_err(|e| ManifestError::Parse(e.to_string()).into())
    }
}

/// How the workspace versions its packages for a release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseMode {
    /// Single-package repository released as one unit
    Root,
    /// All packages share one version in lockstep
    Fixed,
    /// Each package versions independently
    Independent,
}

impl std::fmt::Display for ReleaseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Root => write!(f, "root"),
            Self::Fixed => write!(f, "fixed"),
            Self::Independent => write!(f, "independent"),
        }
    }
}

/// Package-manager client used for publishing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NpmClient {
    /// The default client
    #[default]
    Npm,
    /// Alternate client; publish needs extra arguments to stay
    /// non-interactive
    Yarn,
}

impl NpmClient {
    /// Binary name to invoke
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
        }
    }
}

impl std::fmt::Display for NpmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_tarball_name() {
        let pkg = Package::new("widgets", "1.10.100", "/ws/widgets");
        assert_eq!(pkg.tarball_name(), "widgets-1.10.100.tgz");
    }

    #[test]
    fn test_tarball_name_scoped() {
        let pkg = Package::new("@acme/widgets", "2.0.0", "/ws/widgets");
        assert_eq!(pkg.tarball_name(), "acme-widgets-2.0.0.tgz");
    }

    #[test]
    fn test_load_from_manifest() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("package.json"),
            r#"{"name": "@acme/widgets", "version": "1.2.3", "private": true}"#,
        )
        .unwrap();

        let pkg = Package::load(temp.path()).unwrap();
        assert_eq!(pkg.name, "@acme/widgets");
        assert_eq!(pkg.version, "1.2.3");
        assert!(pkg.private);
        assert_eq!(pkg.manifest_location, temp.path().join("package.json"));
    }

    #[test]
    fn test_load_missing_manifest() {
        let temp = TempDir::new().unwrap();
        let err = Package::load(temp.path()).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_rejects_bad_version() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("package.json"),
            r#"{"name": "widgets", "version": "one.two"}"#,
        )
        .unwrap();

        assert!(Package::load(temp.path()).is_err());
    }

    #[test]
    fn test_manifest_preserves_extra_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.json");
        std::fs::write(
            &path,
            r#"{"name": "widgets", "version": "1.0.0", "customField": "value"}"#,
        )
        .unwrap();

        let manifest = PackageManifest::load(&path).unwrap();
        assert!(manifest.other.contains_key("customField"));
    }

    #[test]
    fn test_release_mode_display() {
        assert_eq!(ReleaseMode::Root.to_string(), "root");
        assert_eq!(ReleaseMode::Fixed.to_string(), "fixed");
        assert_eq!(ReleaseMode::Independent.to_string(), "independent");
    }

    #[test]
    fn test_npm_client() {
        assert_eq!(NpmClient::default(), NpmClient::Npm);
        assert_eq!(NpmClient::Yarn.as_str(), "yarn");
    }
}

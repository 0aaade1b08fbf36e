//! Preset configuration types

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Canonical, flat changelog preset configuration.
///
/// This is the only shape the rest of the pipeline sees; legacy preset
/// shapes are normalized into it by [`RawPreset::normalize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Commit type table: maps a conventional-commit type to its section
    pub types: BTreeMap<String, TypeConfig>,

    /// Include short commit hashes in rendered entries
    pub include_hashes: bool,

    /// Include commit authors in rendered entries
    pub include_authors: bool,

    /// Optional note rendered under the version heading
    pub header_note: Option<String>,

    /// Base commit-range options; per-package filters are layered on top
    pub commit_range: CommitRangeOptions,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        let mut types = BTreeMap::new();
        types.insert("feat".to_string(), TypeConfig::section("Features"));
        types.insert("fix".to_string(), TypeConfig::section("Bug Fixes"));
        types.insert(
            "perf".to_string(),
            TypeConfig::section("Performance Improvements"),
        );
        types.insert("docs".to_string(), TypeConfig::section("Documentation"));
        types.insert("chore".to_string(), TypeConfig::hidden());
        types.insert("refactor".to_string(), TypeConfig::hidden());

        Self {
            types,
            include_hashes: true,
            include_authors: false,
            header_note: None,
            commit_range: CommitRangeOptions::default(),
        }
    }
}

/// Section mapping for a single commit type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeConfig {
    /// Section title the type is grouped under
    pub section: String,

    /// Hidden types are omitted from generated entries
    pub hidden: bool,
}

impl TypeConfig {
    /// Visible type rendered under `section`
    pub fn section(title: impl Into<String>) -> Self {
        Self {
            section: title.into(),
            hidden: false,
        }
    }

    /// Type omitted from output
    pub fn hidden() -> Self {
        Self {
            section: String::new(),
            hidden: true,
        }
    }
}

impl Default for TypeConfig {
    fn default() -> Self {
        Self::hidden()
    }
}

/// Options steering which commits the transformer considers.
///
/// Passed to the transformer positionally, never folded into the transform
/// options: the transformer's internal config merge treats them as a
/// distinct layer and mixing the two corrupts it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitRangeOptions {
    /// Restrict the range to commits touching this directory
    pub path: Option<PathBuf>,

    /// Lower revision bound (exclusive)
    pub from: Option<String>,

    /// Upper revision bound (inclusive)
    pub to: Option<String>,
}

/// A preset in one of the two legacy on-disk shapes: fields flat at the top
/// level, or the same fields nested under a `conventional_changelog` key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawPreset {
    /// Nested shape, takes precedence when present
    pub conventional_changelog: Option<ChangelogConfig>,

    /// Flat shape
    #[serde(flatten)]
    pub flat: ChangelogConfig,
}

impl RawPreset {
    /// Normalize to the canonical flat shape.
    ///
    /// Always returns a new value and never mutates `self`: the transformer
    /// boundary is not contractually side-effect-free, so callers hand it a
    /// copy rather than a shared preset.
    pub fn normalize(&self) -> ChangelogConfig {
        match &self.conventional_changelog {
            Some(nested) => nested.clone(),
            None => self.flat.clone(),
        }
    }
}

/// Where a changelog preset comes from
#[derive(Debug, Clone, PartialEq)]
pub enum PresetSource {
    /// Built-in preset name or a preset file relative to the workspace root
    Name(String),
    /// Already-instantiated config object
    Config(RawPreset),
}

impl From<&str> for PresetSource {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

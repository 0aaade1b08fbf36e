//! Flotilla Core - shared model for release-artifact generation
//!
//! This crate provides the package model, the changelog preset
//! configuration with its resolver, the error taxonomy, and the diagnostic
//! event sink shared by the changelog and publish crates.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod types;

pub use config::{resolve_preset, ChangelogConfig, CommitRangeOptions, PresetSource, RawPreset};
pub use diagnostics::{CollectingSink, DiagnosticEvent, DiagnosticSink, TracingSink};
pub use error::{
    ChangelogError, ConfigError, FlotillaError, ManifestError, PublishError, Result,
};
pub use types::{NpmClient, Package, PackageManifest, ReleaseMode};

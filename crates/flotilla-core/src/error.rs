//! Error types for Flotilla

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using FlotillaError
pub type Result<T> = std::result::Result<T, FlotillaError>;

/// Main error type for Flotilla operations
#[derive(Debug, Error)]
pub enum FlotillaError {
    /// Preset/configuration resolution errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Changelog generation errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// Package manifest errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Publish/pack execution errors
    #[error(transparent)]
    Publish(#[from] PublishError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Preset/configuration resolution errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Preset name does not match a built-in preset or a preset file
    #[error("Unknown changelog preset: {0}")]
    UnknownPreset(String),

    /// Preset file exists but cannot be used
    #[error("Invalid preset at {path}: {reason}")]
    InvalidPreset { path: PathBuf, reason: String },

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error reading a preset file
    #[error("IO error reading preset: {0}")]
    Io(#[from] std::io::Error),
}

/// Changelog generation errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// The commit-to-markdown stream failed; nothing was written
    #[error("Failed to read commit history: {0}")]
    CommitHistory(String),

    /// IO error reading an existing changelog
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the merged changelog
    #[error("Failed to write changelog at {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },
}

/// Package manifest errors
#[derive(Debug, Error)]
pub enum ManifestError {
    /// package.json not found
    #[error("Package manifest not found at {0}")]
    NotFound(PathBuf),

    /// Failed to parse package.json
    #[error("Failed to parse manifest: {0}")]
    Parse(String),

    /// Manifest version is not valid semver
    #[error("Version '{version}' in {path} is not valid semver: {reason}")]
    InvalidVersion {
        version: String,
        path: PathBuf,
        reason: String,
    },
}

/// Publish/pack execution errors
#[derive(Debug, Error)]
pub enum PublishError {
    /// The package-manager command exited non-zero
    #[error("Publishing {package} failed: `{command}` exited with code {exit_code}: {stderr}")]
    ExecutionFailed {
        package: String,
        command: String,
        exit_code: i32,
        stderr: String,
    },

    /// The package-manager command could not be spawned
    #[error("Publishing {package} failed: could not spawn `{command}`: {reason}")]
    SpawnFailed {
        package: String,
        command: String,
        reason: String,
    },
}

impl FlotillaError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}

//! Commit-to-markdown transformer boundary
//!
//! Commit parsing and entry rendering live outside this crate. The
//! transformer is consumed through a single capability: given options,
//! context, and range, it yields a finite stream of markdown fragments for
//! the upcoming release.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::mpsc;

use flotilla_core::config::{ChangelogConfig, CommitRangeOptions};
use flotilla_core::Result;

/// Finite, non-restartable sequence of markdown fragments
pub type MarkdownStream = mpsc::Receiver<Result<String>>;

/// Release-wide context handed to the transformer.
///
/// Carries the upcoming version in root mode; empty otherwise, where the
/// transformer derives the version from the package manifest instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationContext {
    /// Upcoming release version (root mode only)
    pub version: Option<String>,
}

/// Per-invocation options for the transformer
#[derive(Debug, Clone, PartialEq)]
pub struct TransformOptions {
    /// Normalized preset config; always a fresh copy, the transformer is
    /// free to consume it destructively
    pub config: ChangelogConfig,

    /// Manifest path for per-package metadata (fixed/independent modes)
    pub package_manifest: Option<PathBuf>,

    /// Package name label for disambiguating headings (independent mode)
    pub package_label: Option<String>,
}

impl TransformOptions {
    /// Options carrying only a config
    pub fn new(config: ChangelogConfig) -> Self {
        Self {
            config,
            package_manifest: None,
            package_label: None,
        }
    }
}

/// External collaborator turning commit history into changelog markdown.
///
/// The three arguments must stay positionally separate: the transformer
/// layers `range` over its own config merge, and folding range fields into
/// `options` corrupts that merge.
#[async_trait]
pub trait CommitTransformer: Send + Sync {
    /// Produce the markdown fragment stream for the upcoming release
    async fn changelog_stream(
        &self,
        options: &TransformOptions,
        context: &GenerationContext,
        range: &CommitRangeOptions,
    ) -> Result<MarkdownStream>;
}

//! Changelog generation orchestration

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, instrument};

use flotilla_core::config::{resolve_preset, PresetSource};
use flotilla_core::{DiagnosticEvent, DiagnosticSink, Package, ReleaseMode, Result, TracingSink};

use crate::filter::{bump_only_filter, is_bump_only};
use crate::reader::read_existing_changelog;
use crate::transformer::{CommitTransformer, GenerationContext, MarkdownStream, TransformOptions};
use crate::writer::write_changelog;

/// Options for one changelog generation
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Preset governing entry formatting
    pub preset: PresetSource,

    /// Workspace root, used to resolve preset files
    pub root_path: PathBuf,

    /// Upcoming release version (passed as context in root mode)
    pub version: String,
}

/// Generates and merges a changelog entry per released package.
///
/// Wires the preset resolver, the external commit transformer, the
/// bump-only filter, and the reader/writer together. Each call is fully
/// independent; callers may generate for different packages concurrently
/// but must not run two generations against the same package at once.
pub struct ChangelogUpdater {
    transformer: Arc<dyn CommitTransformer>,
    sink: Arc<dyn DiagnosticSink>,
}

impl ChangelogUpdater {
    /// Create an updater around a commit transformer
    pub fn new(transformer: Arc<dyn CommitTransformer>) -> Self {
        Self {
            transformer,
            sink: Arc::new(TracingSink),
        }
    }

    /// Use a custom diagnostic sink
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Generate the entry for the upcoming release and merge it into the
    /// package's changelog file. Returns the written path.
    ///
    /// Nothing is written unless both the fragment stream and the existing
    /// changelog read succeed.
    #[instrument(skip(self, options), fields(package = %package.name, mode = %mode))]
    pub async fn generate_entry(
        &self,
        package: &Package,
        mode: ReleaseMode,
        options: &GenerateOptions,
    ) -> Result<PathBuf> {
        let config = resolve_preset(&options.preset, &options.root_path)?;

        let mut range = config.commit_range.clone();
        let mut transform = TransformOptions::new(config);

        let context = match mode {
            ReleaseMode::Root => GenerationContext {
                version: Some(options.version.clone()),
            },
            ReleaseMode::Fixed | ReleaseMode::Independent => {
                range.path = Some(package.location.clone());
                transform.package_manifest = Some(package.manifest_location.clone());
                if mode == ReleaseMode::Independent {
                    transform.package_label = Some(package.name.clone());
                }
                GenerationContext::default()
            }
        };

        self.sink.emit(&DiagnosticEvent::GenerationStarted {
            package: package.name.clone(),
            mode: mode.to_string(),
        });

        let stream = self
            .transformer
            .changelog_stream(&transform, &context, &range)
            .await?;

        // The fragment drain and the existing-changelog read have no data
        // dependency; issue both and join.
        let (entry, existing) = tokio::join!(
            self.drain_and_filter(stream, package),
            read_existing_changelog(package),
        );
        let entry = entry?;
        let (path, body) = existing?;

        debug!(entry_len = entry.len(), body_len = body.len(), "merging changelog");

        let path = write_changelog(&path, &entry, &body).await?;

        self.sink.emit(&DiagnosticEvent::ChangelogWritten {
            package: package.name.clone(),
            path: path.clone(),
        });

        Ok(path)
    }

    async fn drain_and_filter(
        &self,
        mut stream: MarkdownStream,
        package: &Package,
    ) -> Result<String> {
        let mut raw = String::new();
        while let Some(fragment) = stream.recv().await {
            raw.push_str(&fragment?);
        }

        if is_bump_only(&raw) {
            self.sink.emit(&DiagnosticEvent::BumpOnlyEntry {
                package: package.name.clone(),
                version: package.version.clone(),
            });
        }

        Ok(bump_only_filter(raw, package))
    }
}

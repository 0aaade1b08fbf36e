//! Diagnostic event emission
//!
//! Generation and publishing report progress through an injected sink
//! rather than a global logger, so callers (and tests) can observe
//! diagnostics without capturing log output.

use std::path::PathBuf;

/// Events emitted while generating changelogs and publishing packages
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEvent {
    /// Changelog generation is starting for a package
    GenerationStarted {
        package: String,
        mode: String,
    },
    /// The generated entry carried no substantive changes and was replaced
    /// with the version-bump placeholder
    BumpOnlyEntry {
        package: String,
        version: String,
    },
    /// The merged changelog was written
    ChangelogWritten {
        package: String,
        path: PathBuf,
    },
    /// A publish or pack command is about to run
    PublishStarted {
        package: String,
        command: String,
    },
    /// The publish or pack command succeeded
    PublishCompleted {
        package: String,
    },
}

/// Trait for receiving diagnostic events
pub trait DiagnosticSink: Send + Sync {
    /// Handle a diagnostic event
    fn emit(&self, event: &DiagnosticEvent);
}

/// Default sink that forwards events to tracing
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, event: &DiagnosticEvent) {
        match event {
            DiagnosticEvent::GenerationStarted { package, mode } => {
                tracing::debug!(package = %package, mode = %mode, "generating changelog entry");
            }
            DiagnosticEvent::BumpOnlyEntry { package, version } => {
                tracing::info!(package = %package, version = %version, "version bump only");
            }
            DiagnosticEvent::ChangelogWritten { package, path } => {
                tracing::info!(package = %package, path = %path.display(), "wrote changelog");
            }
            DiagnosticEvent::PublishStarted { package, command } => {
                tracing::info!(package = %package, command = %command, "publishing");
            }
            DiagnosticEvent::PublishCompleted { package } => {
                tracing::info!(package = %package, "published");
            }
        }
    }
}

/// Sink that collects events for later inspection (useful for testing)
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: std::sync::Mutex<Vec<DiagnosticEvent>>,
}

impl CollectingSink {
    /// Get all collected events
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, event: &DiagnosticEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

//! Flotilla Changelog - changelog synthesis and merge
//!
//! This crate turns commit-derived markdown into a merged, per-package
//! changelog file: it consumes an external commit-to-markdown transformer,
//! filters bump-only entries, reads the package's prior changelog, and
//! persists header + new entry + prior body in a single write.

pub mod filter;
pub mod generator;
pub mod reader;
pub mod transformer;
pub mod writer;

pub use filter::{bump_only_filter, is_bump_only};
pub use generator::{ChangelogUpdater, GenerateOptions};
pub use reader::{read_existing_changelog, DEFAULT_CHANGELOG_NAME};
pub use transformer::{CommitTransformer, GenerationContext, MarkdownStream, TransformOptions};
pub use writer::{write_changelog, CHANGELOG_HEADER};

//! Changelog preset configuration
//!
//! Presets govern how the external commit-to-markdown transformer formats
//! entries. A preset arrives either by name (built-in, or a TOML file
//! resolved relative to the workspace root) or as an already-instantiated
//! config object in one of two legacy shapes. Everything is normalized to
//! [`ChangelogConfig`] at this boundary.

mod resolver;
mod types;

pub use resolver::{load_preset_file, resolve_preset};
pub use types::{ChangelogConfig, CommitRangeOptions, PresetSource, RawPreset, TypeConfig};

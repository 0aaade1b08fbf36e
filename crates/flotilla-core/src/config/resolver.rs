//! Preset resolution

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ConfigError, Result};

use super::types::{ChangelogConfig, PresetSource, RawPreset, TypeConfig};

/// Resolve a preset source into a canonical config.
///
/// Names are checked against the built-in presets first, then against a
/// TOML preset file relative to `root_path` (exact name, then with `.toml`
/// appended). An already-instantiated config is normalized as-is. The
/// returned config is always a fresh value; downstream mutation cannot
/// reach a shared preset.
pub fn resolve_preset(source: &PresetSource, root_path: &Path) -> Result<ChangelogConfig> {
    match source {
        PresetSource::Config(raw) => {
            debug!("using instantiated preset config");
            Ok(raw.normalize())
        }
        PresetSource::Name(name) => {
            if let Some(config) = builtin_preset(name) {
                debug!(preset = %name, "resolved built-in preset");
                return Ok(config);
            }

            let path = find_preset_file(root_path, name)
                .ok_or_else(|| ConfigError::UnknownPreset(name.clone()))?;
            load_preset_file(&path)
        }
    }
}

/// Load and normalize a TOML preset file
pub fn load_preset_file(path: &Path) -> Result<ChangelogConfig> {
    info!(path = %path.display(), "loading preset file");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    let raw: RawPreset = toml::from_str(&content).map_err(|e| ConfigError::InvalidPreset {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(raw.normalize())
}

fn find_preset_file(root_path: &Path, name: &str) -> Option<PathBuf> {
    let exact = root_path.join(name);
    if exact.is_file() {
        return Some(exact);
    }

    let with_ext = root_path.join(format!("{name}.toml"));
    if with_ext.is_file() {
        return Some(with_ext);
    }

    None
}

fn builtin_preset(name: &str) -> Option<ChangelogConfig> {
    match name {
        "conventionalcommits" => Some(ChangelogConfig::default()),
        "angular" => {
            let mut config = ChangelogConfig::default();
            // Angular convention hides docs-only commits
            config
                .types
                .insert("docs".to_string(), TypeConfig::hidden());
            config.include_hashes = true;
            Some(config)
        }
        _ => None,
    }
}

//! Existing changelog lookup

use std::path::{Path, PathBuf};

use tracing::debug;

use flotilla_core::error::ChangelogError;
use flotilla_core::{Package, Result};

/// Accepted changelog filenames, first match wins. Matching is
/// case-insensitive against the actual directory entries.
const CHANGELOG_FILE_NAMES: [&str; 4] = ["CHANGELOG.md", "CHANGELOG", "HISTORY.md", "HISTORY"];

/// Target filename used when the package has no changelog yet
pub const DEFAULT_CHANGELOG_NAME: &str = "CHANGELOG.md";

/// Locate and load a package's prior changelog.
///
/// Returns the file path and the body with the leading header block
/// stripped, so only accumulated per-version entries remain. A missing
/// file is the normal case for a first release and yields the default
/// target path with an empty body.
pub async fn read_existing_changelog(package: &Package) -> Result<(PathBuf, String)> {
    let Some(path) = find_changelog_file(&package.location).await else {
        debug!(package = %package.name, "no existing changelog");
        return Ok((package.location.join(DEFAULT_CHANGELOG_NAME), String::new()));
    };

    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| ChangelogError::Io {
            path: path.clone(),
            source,
        })?;

    debug!(package = %package.name, path = %path.display(), "read existing changelog");
    Ok((path.clone(), strip_header(&content).to_string()))
}

async fn find_changelog_file(dir: &Path) -> Option<PathBuf> {
    let mut entries = Vec::new();
    let mut read_dir = tokio::fs::read_dir(dir).await.ok()?;
    while let Ok(Some(entry)) = read_dir.next_entry().await {
        if let Ok(name) = entry.file_name().into_string() {
            entries.push(name);
        }
    }

    for candidate in CHANGELOG_FILE_NAMES {
        if let Some(name) = entries.iter().find(|n| n.eq_ignore_ascii_case(candidate)) {
            return Some(dir.join(name));
        }
    }

    None
}

/// Strip the document's leading header block.
///
/// When the file opens with a level-1 title, the body begins at the first
/// version-level (`## `) heading; a file with no version headings yields
/// an empty body. Files without a title are taken verbatim.
fn strip_header(content: &str) -> &str {
    if !content.trim_start().starts_with("# ") {
        return content;
    }

    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        if line.starts_with("## ") {
            return &content[offset..];
        }
        offset += line.len();
    }

    ""
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn package_at(dir: &Path) -> Package {
        Package::new("widgets", "1.0.0", dir)
    }

    #[tokio::test]
    async fn test_missing_file_yields_default_path() {
        let temp = TempDir::new().unwrap();

        let (path, body) = read_existing_changelog(&package_at(temp.path())).await.unwrap();

        assert_eq!(path, temp.path().join("CHANGELOG.md"));
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_missing_directory_yields_default_path() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("not-here");

        let (path, body) = read_existing_changelog(&package_at(&gone)).await.unwrap();

        assert_eq!(path, gone.join("CHANGELOG.md"));
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_strips_header_block() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("CHANGELOG.md"),
            "# Change Log\n\nBoilerplate sentence.\n\n## 1.0.0\n\n* fix: x\n",
        )
        .unwrap();

        let (_, body) = read_existing_changelog(&package_at(temp.path())).await.unwrap();

        assert_eq!(body, "## 1.0.0\n\n* fix: x\n");
    }

    #[tokio::test]
    async fn test_header_only_file_yields_empty_body() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("CHANGELOG.md"),
            "# Change Log\n\nNothing released yet.\n",
        )
        .unwrap();

        let (_, body) = read_existing_changelog(&package_at(temp.path())).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_file_without_title_is_verbatim() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("CHANGELOG.md"), "## 0.1.0\n\n* feat: y\n").unwrap();

        let (_, body) = read_existing_changelog(&package_at(temp.path())).await.unwrap();
        assert_eq!(body, "## 0.1.0\n\n* feat: y\n");
    }

    #[tokio::test]
    async fn test_filename_priority() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("HISTORY.md"), "## 0.9.0\n").unwrap();
        std::fs::write(temp.path().join("CHANGELOG.md"), "## 1.0.0\n").unwrap();

        let (path, _) = read_existing_changelog(&package_at(temp.path())).await.unwrap();
        assert_eq!(path, temp.path().join("CHANGELOG.md"));
    }

    #[tokio::test]
    async fn test_case_insensitive_match() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("changelog.md"), "## 1.0.0\n").unwrap();

        let (path, body) = read_existing_changelog(&package_at(temp.path())).await.unwrap();

        // the on-disk casing is kept
        assert_eq!(path, temp.path().join("changelog.md"));
        assert_eq!(body, "## 1.0.0\n");
    }

    #[tokio::test]
    async fn test_history_fallback() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("History.md"), "## 0.9.0\n").unwrap();

        let (path, _) = read_existing_changelog(&package_at(temp.path())).await.unwrap();
        assert_eq!(path, temp.path().join("History.md"));
    }
}

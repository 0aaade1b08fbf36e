//! Changelog merge and persistence

use std::path::{Path, PathBuf};

use tracing::debug;

use flotilla_core::error::ChangelogError;
use flotilla_core::Result;

/// Fixed header block every written changelog starts with
pub const CHANGELOG_HEADER: &str = "# Change Log\n\nAll notable changes to this project will be documented in this file.\nSee [Conventional Commits](https://conventionalcommits.org) for commit guidelines.";

const BLANK_LINE: &str = "\n\n";

/// Merge header, new entry, and prior body, and persist in one write.
///
/// Content is header + entry + body joined by blank lines, trimmed of
/// incidental leading/trailing whitespace, terminated with exactly one
/// line break. The whole file is written in a single call, so a crash
/// cannot leave a dangling separator without its body. Entries are not
/// de-duplicated; callers must not re-merge an already-merged body.
pub async fn write_changelog(
    path: &Path,
    new_entry: &str,
    existing_body: &str,
) -> Result<PathBuf> {
    let content = [CHANGELOG_HEADER, new_entry, existing_body].join(BLANK_LINE);
    let content = format!("{}\n", content.trim());

    tokio::fs::write(path, content)
        .await
        .map_err(|e| ChangelogError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    debug!(path = %path.display(), "wrote changelog");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_written_file_starts_with_header() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");

        write_changelog(&path, "## 1.2.0\n* fix: x", "").await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(CHANGELOG_HEADER));
    }

    #[tokio::test]
    async fn test_merge_order_and_trailing_newline() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");

        write_changelog(&path, "## 1.2.0\n* fix: x", "## 1.1.0\n* feat: y")
            .await
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let new_idx = content.find("## 1.2.0").unwrap();
        let old_idx = content.find("## 1.1.0").unwrap();
        assert!(new_idx < old_idx);
        assert!(content.ends_with("* feat: y\n"));
        assert!(!content.ends_with("\n\n"));
    }

    #[tokio::test]
    async fn test_empty_body_has_no_dangling_separator() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");

        write_changelog(&path, "## 1.0.0\n* feat: first", "").await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with("* feat: first\n"));
    }

    #[tokio::test]
    async fn test_incidental_whitespace_is_trimmed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");

        write_changelog(&path, "\n\n## 1.2.0\n* fix: x\n\n", "\n## 1.1.0\n* feat: y\n\n\n")
            .await
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Change Log"));
        assert!(content.ends_with("* feat: y\n"));
    }

    #[tokio::test]
    async fn test_write_failure_carries_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing-dir").join("CHANGELOG.md");

        let err = write_changelog(&path, "## 1.0.0", "").await.unwrap_err();
        assert!(err.to_string().contains("CHANGELOG.md"));
    }
}

//! Bump-only entry filter

use flotilla_core::Package;

/// Whether a generated entry carries no substantive commit content.
///
/// The check is structural: an entry is substantive iff it contains at
/// least one markdown list-item line (first non-whitespace character `*`,
/// `-`, or `+` followed by a space). Heading-only and heading-plus-
/// whitespace entries both count as bump-only; short-but-real entries with
/// a single bullet do not.
pub fn is_bump_only(entry: &str) -> bool {
    !entry.lines().any(is_list_item)
}

fn is_list_item(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("* ") || trimmed.starts_with("- ") || trimmed.starts_with("+ ")
}

/// Replace a content-free entry with the canonical placeholder.
///
/// Packages whose version advanced solely because of a workspace-wide bump
/// still get a non-empty, well-formed entry: the generated heading (or a
/// synthesized one when the transformer emitted none) plus a fixed note.
/// Substantive entries pass through untouched.
pub fn bump_only_filter(entry: String, package: &Package) -> String {
    if !is_bump_only(&entry) {
        return entry;
    }

    let heading = entry
        .lines()
        .find(|line| line.trim_start().starts_with('#'))
        .map(|line| line.trim_end().to_string())
        .unwrap_or_else(|| format!("## {}", package.version));

    format!(
        "{heading}\n\n**Note:** Version bump only for package {}",
        package.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package() -> Package {
        Package::new("widgets", "1.2.0", "/ws/widgets")
    }

    #[test]
    fn test_substantive_entry_passes_through() {
        let entry = "## 1.2.0\n\n### Bug Fixes\n\n* fix: handle empty input\n".to_string();

        let out = bump_only_filter(entry.clone(), &package());
        assert_eq!(out, entry);
    }

    #[test]
    fn test_heading_only_entry_is_replaced() {
        let entry = "## 1.2.0 (2024-03-01)\n".to_string();

        let out = bump_only_filter(entry, &package());
        assert_eq!(
            out,
            "## 1.2.0 (2024-03-01)\n\n**Note:** Version bump only for package widgets"
        );
    }

    #[test]
    fn test_heading_plus_whitespace_is_replaced() {
        let entry = "## 1.2.0\n\n\n   \n".to_string();

        let out = bump_only_filter(entry, &package());
        assert!(out.contains("Version bump only for package widgets"));
    }

    #[test]
    fn test_empty_entry_synthesizes_heading() {
        let out = bump_only_filter(String::new(), &package());
        assert_eq!(
            out,
            "## 1.2.0\n\n**Note:** Version bump only for package widgets"
        );
    }

    #[test]
    fn test_dash_and_plus_bullets_are_substantive() {
        assert!(!is_bump_only("## 1.0.0\n\n- fix: a\n"));
        assert!(!is_bump_only("## 1.0.0\n\n+ fix: a\n"));
    }

    #[test]
    fn test_indented_bullet_is_substantive() {
        assert!(!is_bump_only("## 1.0.0\n\n  * nested change\n"));
    }

    #[test]
    fn test_emphasis_is_not_a_bullet() {
        // *emphasis* has no space after the marker
        assert!(is_bump_only("## 1.0.0\n\n*important* release notes\n"));
    }

    #[test]
    fn test_short_real_entry_is_not_a_false_positive() {
        // single terse bullet, shorter than many headings
        assert!(!is_bump_only("## 9.9.9\n* x\n"));
    }
}

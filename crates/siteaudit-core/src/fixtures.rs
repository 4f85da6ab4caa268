//! Demo data and JSON issue fixtures.
//!
//! Stands in for the audit backend: the built-in sets mirror the demo report
//! and dashboard, and [`load_issues`] reads the same shape from a file.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

use crate::audits::{AuditRow, ReportRow, Strategy};
use crate::issues::{Category, Issue, Priority, Resource};

const IMPACT_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

#[allow(clippy::too_many_arguments)]
fn issue(
    id: &str,
    title: &str,
    description: &str,
    priority: Priority,
    category: Category,
    impact: u8,
    remediation: &str,
    resources: &[(&str, &str)],
) -> Issue {
    Issue {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        priority,
        category,
        impact,
        remediation: remediation.to_string(),
        resources: resources
            .iter()
            .map(|(label, href)| Resource {
                label: label.to_string(),
                href: href.to_string(),
            })
            .collect(),
    }
}

/// The seven-issue demo report backlog (2×P0, 2×P1, 2×P2, 1×P3).
pub fn demo_issues() -> Vec<Issue> {
    vec![
        issue(
            "1",
            "Core Web Vitals: CLS above 0.25",
            "Critical layout shift hurts UX and SEO.",
            Priority::P0,
            Category::Tech,
            10,
            "Reserve space for images and banners; defer non-critical fonts; use content-visibility.",
            &[("Google guidance", "https://web.dev/cls/")],
        ),
        issue(
            "2",
            "No H1 on several pages",
            "Page meaning and SEO structure suffer.",
            Priority::P1,
            Category::Content,
            7,
            "Add a single H1 with the key topic of the page; avoid multiple H1s.",
            &[(
                "HTML headings",
                "https://developer.mozilla.org/docs/Web/HTML/Element/Heading_Elements",
            )],
        ),
        issue(
            "3",
            "Text contrast below 4.5:1",
            "Accessibility problem that hurts readability.",
            Priority::P1,
            Category::Ux,
            6,
            "Raise contrast to at least 4.5:1 for body text and 3:1 for large elements.",
            &[],
        ),
        issue(
            "4",
            "Product images missing alt text",
            "Image accessibility and SEO are degraded.",
            Priority::P2,
            Category::Content,
            4,
            "Add descriptive alt attributes with the key content, without keyword stuffing.",
            &[],
        ),
        issue(
            "5",
            "Slow search results page",
            "Visitors with search intent leave.",
            Priority::P0,
            Category::Tech,
            9,
            "Use SSR and caching; optimize queries; shrink the JS bundle.",
            &[],
        ),
        issue(
            "6",
            "Duplicate titles on product cards",
            "Lowers click-through from search and hinders indexing.",
            Priority::P2,
            Category::Seo,
            5,
            "Generate unique titles from a template: Name - Category - Brand.",
            &[],
        ),
        issue(
            "7",
            "Keyboard focus is not visible",
            "Violates WCAG 2.1 AA.",
            Priority::P3,
            Category::Ux,
            2,
            "Add a visible focus ring to interactive elements.",
            &[],
        ),
    ]
}

/// Recent audit runs shown on the dashboard.
pub fn demo_audits() -> Vec<AuditRow> {
    let row = |id: &str, url: &str, when: &str, score: u8, strategy: Strategy| AuditRow {
        id: id.to_string(),
        url: url.to_string(),
        when: when.to_string(),
        score,
        strategy,
    };
    vec![
        row("a1", "kachestvozhizni.ru", "Today 10:24", 82, Strategy::Mobile),
        row("a2", "ya.ru", "Yesterday 19:05", 91, Strategy::Desktop),
        row("a3", "bitrix.ru", "12.08 16:12", 74, Strategy::Mobile),
    ]
}

/// Generated reports shown on the dashboard.
pub fn demo_reports() -> Vec<ReportRow> {
    let row = |id: &str, title: &str, created: &str, size: &str| ReportRow {
        id: id.to_string(),
        title: title.to_string(),
        created: created.to_string(),
        size: size.to_string(),
    };
    vec![
        row("r1", "kachestvozhizni.ru - full report", "Today", "1.8 MB"),
        row("r2", "ya.ru - full report", "Yesterday", "1.2 MB"),
    ]
}

/// Reads a JSON array of issues from `path` and checks it.
pub fn load_issues(path: &Path) -> Result<Vec<Issue>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read issue fixture: {}", path.display()))?;
    let issues: Vec<Issue> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse issue fixture JSON: {}", path.display()))?;
    check_issues(&issues).with_context(|| format!("invalid issue fixture: {}", path.display()))?;
    tracing::debug!("loaded {} issues from {}", issues.len(), path.display());
    Ok(issues)
}

/// Ids must be non-empty and unique; impact must be within 1..=10.
pub fn check_issues(issues: &[Issue]) -> Result<()> {
    let mut seen = HashSet::new();
    for issue in issues {
        if issue.id.trim().is_empty() {
            anyhow::bail!("issue with empty id (title: {:?})", issue.title);
        }
        if !seen.insert(issue.id.as_str()) {
            anyhow::bail!("duplicate issue id: {}", issue.id);
        }
        if !IMPACT_RANGE.contains(&issue.impact) {
            anyhow::bail!(
                "issue {} has impact {} outside {}..={}",
                issue.id,
                issue.impact,
                IMPACT_RANGE.start(),
                IMPACT_RANGE.end()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_fixture(json: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(json.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn demo_sets_are_consistent() {
        check_issues(&demo_issues()).unwrap();
        assert_eq!(demo_issues().len(), 7);
        assert!(demo_issues()
            .iter()
            .any(|i| i.title.to_lowercase().contains("cls")));
        assert!(!demo_audits().is_empty());
        assert!(!demo_reports().is_empty());
    }

    #[test]
    fn load_issues_from_json() {
        let f = write_fixture(
            r#"[
                {
                    "id": "x1",
                    "title": "Mixed content on checkout",
                    "description": "HTTP assets on an HTTPS page.",
                    "priority": "P0",
                    "category": "Tech",
                    "impact": 8,
                    "remediation": "Serve every asset over HTTPS.",
                    "resources": [{ "label": "MDN", "href": "https://developer.mozilla.org/docs/Web/Security/Mixed_content" }]
                },
                {
                    "id": "x2",
                    "title": "Thin category text",
                    "description": "Category pages have no copy.",
                    "priority": "P3",
                    "category": "Content",
                    "impact": 1,
                    "remediation": "Add a short intro paragraph."
                }
            ]"#,
        );
        let issues = load_issues(f.path()).unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].resources.len(), 1);
        assert_eq!(issues[1].category, Category::Content);
    }

    #[test]
    fn load_issues_rejects_bad_impact() {
        let f = write_fixture(
            r#"[{ "id": "x", "title": "t", "description": "d", "priority": "P1",
                  "category": "UX", "impact": 11, "remediation": "r" }]"#,
        );
        let err = load_issues(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("impact 11"));
    }

    #[test]
    fn load_issues_rejects_empty_id() {
        let f = write_fixture(
            r#"[{ "id": "  ", "title": "Blank id", "description": "d", "priority": "P2",
                  "category": "SEO", "impact": 4, "remediation": "r" }]"#,
        );
        let err = load_issues(f.path()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("issue with empty id"), "{msg}");
        assert!(msg.contains("Blank id"), "{msg}");
    }

    #[test]
    fn load_issues_rejects_duplicate_ids() {
        let mut issues = demo_issues();
        issues[1].id = "1".to_string();
        let err = check_issues(&issues).unwrap_err();
        assert!(err.to_string().contains("duplicate issue id: 1"));
    }

    #[test]
    fn load_issues_rejects_unknown_priority() {
        let f = write_fixture(
            r#"[{ "id": "x", "title": "t", "description": "d", "priority": "P9",
                  "category": "UX", "impact": 3, "remediation": "r" }]"#,
        );
        assert!(load_issues(f.path()).is_err());
    }

    #[test]
    fn load_issues_missing_file() {
        assert!(load_issues(Path::new("/nonexistent/issues.json")).is_err());
    }
}

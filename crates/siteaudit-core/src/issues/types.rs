//! Issue record and its enums.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Severity of an audit issue. `P0` is the most severe.
///
/// Variant order is severity rank, so `Ord` sorts most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    P0,
    P1,
    P2,
    P3,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::P0, Priority::P1, Priority::P2, Priority::P3];

    /// Severity rank: P0 = 0 .. P3 = 3.
    pub fn rank(self) -> u8 {
        match self {
            Priority::P0 => 0,
            Priority::P1 => 1,
            Priority::P2 => 2,
            Priority::P3 => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::P0 => "P0",
            Priority::P1 => "P1",
            Priority::P2 => "P2",
            Priority::P3 => "P3",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownPriority(s.to_string()))
    }
}

/// Area of the site an issue belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Tech,
    Content,
    #[serde(rename = "UX")]
    Ux,
    #[serde(rename = "SEO")]
    Seo,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Tech, Category::Content, Category::Ux, Category::Seo];

    /// Display name; also the key for category sorting.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Tech => "Tech",
            Category::Content => "Content",
            Category::Ux => "UX",
            Category::Seo => "SEO",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownCategory(s.to_string()))
    }
}

/// External reading attached to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub label: String,
    pub href: String,
}

/// One finding in an audit report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique within a report.
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub category: Category,
    /// Expected effect of fixing the issue, 1..=10.
    pub impact: u8,
    /// How to fix it.
    pub remediation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Resource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_rank_matches_ord() {
        let mut ps = vec![Priority::P3, Priority::P0, Priority::P2, Priority::P1];
        ps.sort();
        assert_eq!(ps, Priority::ALL.to_vec());
        assert!(ps.windows(2).all(|w| w[0].rank() < w[1].rank()));
    }

    #[test]
    fn priority_from_str() {
        assert_eq!("P0".parse::<Priority>().unwrap(), Priority::P0);
        assert_eq!("p3".parse::<Priority>().unwrap(), Priority::P3);
        assert_eq!(
            "P4".parse::<Priority>(),
            Err(ParseError::UnknownPriority("P4".to_string()))
        );
    }

    #[test]
    fn category_from_str_and_display() {
        assert_eq!("ux".parse::<Category>().unwrap(), Category::Ux);
        assert_eq!("SEO".parse::<Category>().unwrap(), Category::Seo);
        assert_eq!(Category::Content.to_string(), "Content");
        assert!("design".parse::<Category>().is_err());
    }

    #[test]
    fn issue_json_shape() {
        let json = r#"{
            "id": "9",
            "title": "No sitemap.xml",
            "description": "Crawlers discover pages slowly.",
            "priority": "P2",
            "category": "SEO",
            "impact": 5,
            "remediation": "Publish sitemap.xml and reference it in robots.txt."
        }"#;
        let issue: Issue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.priority, Priority::P2);
        assert_eq!(issue.category, Category::Seo);
        assert!(issue.resources.is_empty());
    }
}

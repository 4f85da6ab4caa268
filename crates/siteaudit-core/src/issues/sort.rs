//! Backlog ordering.

use std::cmp::{Ordering, Reverse};
use std::fmt;
use std::str::FromStr;

use super::types::Issue;
use crate::error::ParseError;

/// Backlog sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Most severe first, then highest impact.
    #[default]
    Priority,
    /// Highest impact first, then most severe.
    Impact,
    /// Category name A..Z, then most severe.
    Category,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Priority => "priority",
            SortKey::Impact => "impact",
            SortKey::Category => "category",
        }
    }

    fn compare(self, a: &Issue, b: &Issue) -> Ordering {
        match self {
            SortKey::Priority => (a.priority.rank(), Reverse(a.impact))
                .cmp(&(b.priority.rank(), Reverse(b.impact))),
            SortKey::Impact => (Reverse(a.impact), a.priority.rank())
                .cmp(&(Reverse(b.impact), b.priority.rank())),
            SortKey::Category => (a.category.as_str(), a.priority.rank())
                .cmp(&(b.category.as_str(), b.priority.rank())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "priority" => Ok(SortKey::Priority),
            "impact" => Ok(SortKey::Impact),
            "category" => Ok(SortKey::Category),
            _ => Err(ParseError::UnknownSortKey(s.to_string())),
        }
    }
}

/// Stable sort of `issues` by `key`. Equal items keep their input order.
pub fn sort_issues<'a, I>(issues: I, key: SortKey) -> Vec<&'a Issue>
where
    I: IntoIterator<Item = &'a Issue>,
{
    let mut out: Vec<&Issue> = issues.into_iter().collect();
    out.sort_by(|a, b| key.compare(a, b));
    out
}

//! Report summary figures derived from the backlog.

use serde::Serialize;

use super::sort::{sort_issues, SortKey};
use super::types::{Issue, Priority};

/// Number of issues per priority (the report's KPI strip).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityCounts {
    pub p0: usize,
    pub p1: usize,
    pub p2: usize,
    pub p3: usize,
}

impl PriorityCounts {
    pub fn from_issues<'a, I>(issues: I) -> Self
    where
        I: IntoIterator<Item = &'a Issue>,
    {
        let mut counts = Self::default();
        for issue in issues {
            match issue.priority {
                Priority::P0 => counts.p0 += 1,
                Priority::P1 => counts.p1 += 1,
                Priority::P2 => counts.p2 += 1,
                Priority::P3 => counts.p3 += 1,
            }
        }
        counts
    }

    pub fn get(&self, p: Priority) -> usize {
        match p {
            Priority::P0 => self.p0,
            Priority::P1 => self.p1,
            Priority::P2 => self.p2,
            Priority::P3 => self.p3,
        }
    }

    pub fn total(&self) -> usize {
        self.p0 + self.p1 + self.p2 + self.p3
    }
}

/// The `n` most pressing issues in priority order (landing page teaser).
pub fn top_issues(issues: &[Issue], n: usize) -> Vec<&Issue> {
    let mut sorted = sort_issues(issues, SortKey::Priority);
    sorted.truncate(n);
    sorted
}

//! Backlog filter state and the issue filter predicate.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::sort::SortKey;
use super::types::{Category, Issue, Priority};
use crate::audits::{filter_audits, AuditRow, DeviceFilter};
use crate::error::ParseError;

/// Category tab: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.pad("all"),
            CategoryFilter::Only(c) => fmt::Display::fmt(c, f),
        }
    }
}

/// Everything the backlog and dashboard filter bars hold for one view.
///
/// The default selects all priorities, all categories, all devices, an empty
/// query and priority ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub priorities: BTreeSet<Priority>,
    pub category: CategoryFilter,
    /// Used by [`FilterState::audits`] only; issues carry no device.
    pub device: DeviceFilter,
    pub query: String,
    pub sort: SortKey,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            priorities: Priority::ALL.into_iter().collect(),
            category: CategoryFilter::All,
            device: DeviceFilter::All,
            query: String::new(),
            sort: SortKey::Priority,
        }
    }
}

impl FilterState {
    /// Adds `p` if absent, removes it if present.
    pub fn toggle_priority(&mut self, p: Priority) {
        if !self.priorities.remove(&p) {
            self.priorities.insert(p);
        }
    }

    /// Back to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The derived backlog: filtered by this state, then sorted by its key.
    pub fn view<'a>(&self, issues: &'a [Issue]) -> Vec<&'a Issue> {
        let kept = filter_issues(issues, self);
        let view = super::sort_issues(kept, self.sort);
        tracing::debug!(
            "backlog view: {} of {} issues (priorities={:?} category={} query={:?} sort={})",
            view.len(),
            issues.len(),
            self.priorities,
            self.category,
            self.query,
            self.sort
        );
        view
    }

    /// Dashboard audit rows kept by this state's device and query.
    /// Priorities, category and sort key do not apply to audit runs.
    pub fn audits<'a>(&self, rows: &'a [AuditRow]) -> Vec<&'a AuditRow> {
        filter_audits(rows, self.device, &self.query)
    }
}

/// Issues whose priority is selected, whose category matches, and whose title
/// or description contains the trimmed query (case-insensitive).
///
/// An empty priority set keeps nothing. Order follows the input; sorting is a
/// separate step.
pub fn filter_issues<'a>(issues: &'a [Issue], criteria: &FilterState) -> Vec<&'a Issue> {
    let needle = criteria.query.trim().to_lowercase();
    issues
        .iter()
        .filter(|i| criteria.priorities.contains(&i.priority))
        .filter(|i| criteria.category.matches(i.category))
        .filter(|i| needle.is_empty() || matches_query(i, &needle))
        .collect()
}

fn matches_query(issue: &Issue, needle: &str) -> bool {
    issue.title.to_lowercase().contains(needle) || issue.description.to_lowercase().contains(needle)
}

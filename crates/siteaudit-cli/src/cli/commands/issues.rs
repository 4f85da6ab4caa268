//! `siteaudit issues` – filtered, sorted backlog.

use anyhow::Result;
use siteaudit_core::issues::{CategoryFilter, FilterState, Issue, Priority, SortKey};
use std::path::Path;

/// Backlog options as given on the command line.
#[derive(Debug, Clone)]
pub struct IssueQuery {
    /// Empty means every priority.
    pub priorities: Vec<Priority>,
    pub category: CategoryFilter,
    pub query: String,
    pub sort: SortKey,
}

impl IssueQuery {
    fn filter_state(&self) -> FilterState {
        let mut state = FilterState {
            category: self.category,
            query: self.query.clone(),
            sort: self.sort,
            ..FilterState::default()
        };
        if !self.priorities.is_empty() {
            state.priorities = self.priorities.iter().copied().collect();
        }
        state
    }
}

fn render(view: &[&Issue]) -> String {
    if view.is_empty() {
        return "No issues match the current filters.".to_string();
    }
    let mut out = format!("{:<6} {:<4} {:<8} {:<6} {}", "ID", "PRIO", "CATEGORY", "IMPACT", "TITLE");
    for i in view {
        out.push_str(&format!(
            "\n{:<6} {:<4} {:<8} {:<6} {}",
            i.id, i.priority, i.category, i.impact, i.title
        ));
    }
    out
}

pub fn run_issues(q: &IssueQuery, fixture: Option<&Path>) -> Result<()> {
    let issues = super::load_backlog(fixture)?;
    let state = q.filter_state();
    let view = state.view(&issues);
    println!("{}", render(&view));
    Ok(())
}

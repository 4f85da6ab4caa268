//! Issue backlog: the report's list of findings and the queries over it.
//!
//! All operations borrow the source collection and return new `Vec<&Issue>`
//! views; nothing here mutates or reorders the issues themselves.

mod filter;
mod sort;
mod summary;
mod types;

pub use filter::{filter_issues, CategoryFilter, FilterState};
pub use sort::{sort_issues, SortKey};
pub use summary::{top_issues, PriorityCounts};
pub use types::{Category, Issue, Priority, Resource};

//! CLI command handlers, one file per command.

mod audits;
mod check;
mod config;
mod gate;
mod issues;
mod reports;
mod summary;

pub use audits::run_audits;
pub use check::run_check;
pub use config::run_config;
pub use gate::run_gate;
pub use issues::{run_issues, IssueQuery};
pub use reports::run_reports;
pub use summary::run_summary;

use anyhow::Result;
use siteaudit_core::fixtures;
use siteaudit_core::issues::Issue;
use std::path::Path;

/// Issues from `fixture` if given, else the built-in demo backlog.
fn load_backlog(fixture: Option<&Path>) -> Result<Vec<Issue>> {
    match fixture {
        Some(path) => fixtures::load_issues(path),
        None => Ok(fixtures::demo_issues()),
    }
}

//! `siteaudit summary` – KPI counts and top issues.

use anyhow::Result;
use siteaudit_core::config::AppConfig;
use siteaudit_core::issues::{top_issues, Priority, PriorityCounts};
use std::path::Path;

pub fn run_summary(cfg: &AppConfig, fixture: Option<&Path>, top: usize) -> Result<()> {
    let issues = super::load_backlog(fixture)?;
    let counts = PriorityCounts::from_issues(&issues);

    println!("{} - report summary", cfg.brand.name);
    let kpis: Vec<String> = Priority::ALL
        .iter()
        .map(|p| format!("{p}: {}", counts.get(*p)))
        .collect();
    println!("{}  (total {})", kpis.join("  "), counts.total());

    let top = top_issues(&issues, top);
    if !top.is_empty() {
        println!("Top issues:");
        for (n, i) in top.iter().enumerate() {
            println!("  {}. [{}] {}", n + 1, i.priority, i.title);
        }
    }
    Ok(())
}

//! `siteaudit reports` – generated reports with their web viewer paths.

use anyhow::Result;
use siteaudit_core::fixtures;

pub fn run_reports() -> Result<()> {
    let reports = fixtures::demo_reports();
    if reports.is_empty() {
        println!("No reports yet.");
        return Ok(());
    }
    println!("{:<4} {:<10} {:<8} {:<14} {}", "ID", "CREATED", "SIZE", "PATH", "TITLE");
    for r in &reports {
        println!(
            "{:<4} {:<10} {:<8} {:<14} {}",
            r.id,
            r.created,
            r.size,
            r.viewer_path(),
            r.title
        );
    }
    Ok(())
}

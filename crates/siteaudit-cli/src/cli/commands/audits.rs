//! `siteaudit audits` – recent audit runs, filtered by device and address.

use anyhow::Result;
use siteaudit_core::audits::{AuditRow, DeviceFilter};
use siteaudit_core::fixtures;
use siteaudit_core::issues::FilterState;

fn render(rows: &[&AuditRow]) -> String {
    if rows.is_empty() {
        return "No audits match the current filters.".to_string();
    }
    let mut out = format!("{:<4} {:<8} {:<5} {:<16} {}", "ID", "DEVICE", "SCORE", "WHEN", "URL");
    for r in rows {
        out.push_str(&format!(
            "\n{:<4} {:<8} {:<5} {:<16} {}",
            r.id, r.strategy, r.score, r.when, r.url
        ));
    }
    out
}

fn filter_state(device: DeviceFilter, query: &str) -> FilterState {
    FilterState {
        device,
        query: query.to_string(),
        ..FilterState::default()
    }
}

pub fn run_audits(device: DeviceFilter, query: &str) -> Result<()> {
    let rows = fixtures::demo_audits();
    let state = filter_state(device, query);
    let kept = state.audits(&rows);
    tracing::debug!("audits: {} of {} (device={})", kept.len(), rows.len(), state.device);
    println!("{}", render(&kept));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteaudit_core::audits::Strategy;

    #[test]
    fn render_desktop_only() {
        let rows = fixtures::demo_audits();
        let kept = filter_state(DeviceFilter::Only(Strategy::Desktop), "").audits(&rows);
        let out = render(&kept);
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("ya.ru"));
        assert!(!out.contains("bitrix.ru"));
    }

    #[test]
    fn render_no_match() {
        let rows = fixtures::demo_audits();
        let kept = filter_state(DeviceFilter::All, "nowhere.example").audits(&rows);
        assert_eq!(render(&kept), "No audits match the current filters.");
    }
}

//! `siteaudit gate` – feature verdicts for a role/plan pair.

use anyhow::Result;
use siteaudit_core::capability::{CapabilityTable, Feature, Plan, Role};
use siteaudit_core::config::AppConfig;

fn verdict(allowed: bool) -> &'static str {
    if allowed {
        "allowed"
    } else {
        "denied"
    }
}

fn render(table: &CapabilityTable, role: Role, plan: Plan, feature: Option<Feature>) -> String {
    match feature {
        Some(f) => format!("{f}: {}", verdict(table.allows(f, role, plan))),
        None => table
            .features_for(role, plan)
            .into_iter()
            .map(|(f, ok)| format!("{:<15} {}", f.as_str(), verdict(ok)))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

pub fn run_gate(cfg: &AppConfig, role: Role, plan: Plan, feature: Option<Feature>) -> Result<()> {
    let table = CapabilityTable::with_flags(&cfg.features);
    println!("role={role} plan={plan}");
    println!("{}", render(&table, role, plan, feature));
    Ok(())
}

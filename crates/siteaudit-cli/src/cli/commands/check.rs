//! `siteaudit check <url>` – normalize, canonicalize and validate a site address.

use anyhow::Result;
use siteaudit_core::config::RateLimits;
use siteaudit_core::intake::{self, AuditRequest};
use siteaudit_core::url_model::{self, CheckedUrl};

fn render(checked: &CheckedUrl) -> String {
    format!(
        "normalized: {}\ncanonical:  {}\nvalid:      {}",
        checked.normalized,
        checked.canonical,
        if checked.valid { "yes" } else { "no" }
    )
}

/// Prints every form of `raw`, then fails unless the request would be admitted.
/// The person at the terminal counts as a confirmed human.
pub fn run_check(raw: &str, limits: &RateLimits, recent_requests: u32) -> Result<()> {
    println!("{}", render(&url_model::check(raw)));
    let req = AuditRequest {
        url: raw,
        human_confirmed: true,
        recent_requests,
    };
    let checked = intake::admit(&req, limits)?;
    tracing::info!("check ok: {}", checked.canonical);
    Ok(())
}

//! Dashboard rows: past audit runs and generated reports.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// PageSpeed run target of an audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Mobile,
    Desktop,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Mobile => "mobile",
            Strategy::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Device selector of the dashboard filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceFilter {
    #[default]
    All,
    Only(Strategy),
}

impl DeviceFilter {
    pub fn matches(self, strategy: Strategy) -> bool {
        match self {
            DeviceFilter::All => true,
            DeviceFilter::Only(s) => s == strategy,
        }
    }
}

impl FromStr for DeviceFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(DeviceFilter::All),
            "mobile" => Ok(DeviceFilter::Only(Strategy::Mobile)),
            "desktop" => Ok(DeviceFilter::Only(Strategy::Desktop)),
            _ => Err(ParseError::UnknownDevice(s.to_string())),
        }
    }
}

impl fmt::Display for DeviceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceFilter::All => f.pad("all"),
            DeviceFilter::Only(s) => fmt::Display::fmt(s, f),
        }
    }
}

/// One audit run as listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRow {
    pub id: String,
    /// Site address as the user entered it.
    pub url: String,
    /// Human-readable run time.
    pub when: String,
    /// 0..=100.
    pub score: u8,
    pub strategy: Strategy,
}

/// A generated report available for download or web viewing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub id: String,
    pub title: String,
    pub created: String,
    pub size: String,
}

impl ReportRow {
    /// Path of the report in the web viewer.
    pub fn viewer_path(&self) -> String {
        format!("/reports/{}", self.id)
    }
}

/// Audit rows matching `device` whose url contains `query` (case-insensitive,
/// trimmed; empty matches everything). Input order is kept.
pub fn filter_audits<'a>(rows: &'a [AuditRow], device: DeviceFilter, query: &str) -> Vec<&'a AuditRow> {
    let needle = query.trim().to_lowercase();
    rows.iter()
        .filter(|r| device.matches(r.strategy))
        .filter(|r| needle.is_empty() || r.url.to_lowercase().contains(&needle))
        .collect()
}

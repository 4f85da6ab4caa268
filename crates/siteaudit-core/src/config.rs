use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::capability::Feature;

/// Branding shown in headers, footers and white-label reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    /// Product name.
    pub name: String,
    /// Public logo URL.
    pub logo_url: String,
    /// Legal entity printed in the footer.
    pub legal_name: String,
    pub support_email: String,
    /// Empty means "not shown".
    pub support_phone: String,
    pub address: String,
    pub footer_links: FooterLinks,
}

/// Footer link targets. `"#"` renders a link that goes nowhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLinks {
    pub terms: String,
    pub policy: String,
    pub contacts: String,
}

impl Default for FooterLinks {
    fn default() -> Self {
        Self {
            terms: "#".to_string(),
            policy: "#".to_string(),
            contacts: "#".to_string(),
        }
    }
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "Bitrix Audit".to_string(),
            logo_url: "https://cdn.example.com/logo.png".to_string(),
            legal_name: "Kachestvo Zhizni LLC".to_string(),
            support_email: "support@example.com".to_string(),
            support_phone: String::new(),
            address: String::new(),
            footer_links: FooterLinks::default(),
        }
    }
}

/// Anonymous audit request limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimits {
    /// Audit requests allowed per minute from a single client IP.
    pub requests_per_minute: u32,
}

impl Default for RateLimits {
    fn default() -> Self {
        Self {
            requests_per_minute: 30,
        }
    }
}

/// Global on/off switches for premium features. A disabled feature is denied
/// for every role and plan, regardless of the capability table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    pub export_csv: bool,
    pub export_pdf: bool,
    pub white_label: bool,
    pub multi_client: bool,
    pub compare_audits: bool,
    pub owner_checklist: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            export_csv: true,
            export_pdf: true,
            white_label: true,
            multi_client: true,
            compare_audits: true,
            owner_checklist: true,
        }
    }
}

impl FeatureFlags {
    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::ExportCsv => self.export_csv,
            Feature::ExportPdf => self.export_pdf,
            Feature::WhiteLabel => self.white_label,
            Feature::MultiClient => self.multi_client,
            Feature::CompareAudits => self.compare_audits,
            Feature::OwnerChecklist => self.owner_checklist,
        }
    }
}

/// Application configuration loaded from `~/.config/siteaudit/config.toml`.
///
/// Passed explicitly to whatever needs it; nothing reads configuration from
/// global state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub brand: BrandConfig,
    pub limits: RateLimits,
    pub features: FeatureFlags,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("siteaudit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from an explicit path. Missing keys take their defaults.
pub fn load_from(path: &Path) -> Result<AppConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let cfg: AppConfig = toml::from_str(&data)
        .with_context(|| format!("parse config file: {}", path.display()))?;
    Ok(cfg)
}

/// Pretty TOML rendering of `cfg`, as written to `config.toml`.
pub fn to_toml_string(cfg: &AppConfig) -> Result<String> {
    Ok(toml::to_string_pretty(cfg)?)
}

/// Write `cfg` to `path`, creating parent directories as needed.
pub fn save_to(path: &Path, cfg: &AppConfig) -> Result<()> {
    let toml = to_toml_string(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write config file: {}", path.display()))?;
    Ok(())
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AppConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AppConfig::default();
        save_to(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.brand.name, "Bitrix Audit");
        assert_eq!(cfg.brand.support_email, "support@example.com");
        assert!(cfg.brand.support_phone.is_empty());
        assert_eq!(cfg.limits.requests_per_minute, 30);
        assert!(cfg.features.export_csv);
        assert!(cfg.features.owner_checklist);
        assert_eq!(cfg.brand.footer_links.terms, "#");
        assert_eq!(cfg.brand.footer_links.contacts, "#");
    }

    #[test]
    fn config_toml_footer_links_partial() {
        let toml = r#"
            [brand.footer_links]
            policy = "https://example.com/privacy"
        "#;
        let cfg: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.brand.footer_links.policy, "https://example.com/privacy");
        assert_eq!(cfg.brand.footer_links.terms, "#");
        assert_eq!(cfg.brand.name, "Bitrix Audit");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = AppConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: AppConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_sections_keep_defaults() {
        let toml = r#"
            [brand]
            name = "Acme Audit"

            [features]
            export_csv = false
        "#;
        let cfg: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.brand.name, "Acme Audit");
        assert_eq!(cfg.brand.logo_url, "https://cdn.example.com/logo.png");
        assert_eq!(cfg.limits.requests_per_minute, 30);
        assert!(!cfg.features.export_csv);
        assert!(cfg.features.white_label);
    }

    #[test]
    fn config_toml_empty_is_default() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn feature_flags_map_to_features() {
        let flags = FeatureFlags {
            compare_audits: false,
            ..FeatureFlags::default()
        };
        assert!(!flags.is_enabled(Feature::CompareAudits));
        assert!(flags.is_enabled(Feature::ExportPdf));
    }

    #[test]
    fn save_then_load_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = AppConfig::default();
        cfg.limits.requests_per_minute = 5;
        cfg.brand.support_phone = "+7 (999) 000-00-00".to_string();
        save_to(&path, &cfg).unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn load_from_missing_file_errs() {
        let dir = tempdir().unwrap();
        let err = load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("absent.toml"));
    }
}

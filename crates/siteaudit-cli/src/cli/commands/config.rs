//! `siteaudit config` – print the effective configuration.

use anyhow::Result;
use siteaudit_core::config::{self, AppConfig};
use std::path::Path;

pub fn run_config(cfg: &AppConfig, path: &Path) -> Result<()> {
    println!("# {}", path.display());
    print!("{}", config::to_toml_string(cfg)?);
    Ok(())
}

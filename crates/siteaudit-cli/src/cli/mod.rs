//! CLI for the siteaudit tools.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use siteaudit_core::audits::DeviceFilter;
use siteaudit_core::capability::{Feature, Plan, Role};
use siteaudit_core::config::{self, AppConfig};
use siteaudit_core::issues::{CategoryFilter, Priority, SortKey};
use std::path::PathBuf;

use commands::{
    run_audits, run_check, run_config, run_gate, run_issues, run_reports, run_summary, IssueQuery,
};

/// Top-level CLI for siteaudit.
#[derive(Debug, Parser)]
#[command(name = "siteaudit")]
#[command(about = "siteaudit: site address checks, issue backlog queries and plan gating", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/siteaudit/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check a site address: normalized and canonical forms, and validity.
    Check {
        /// Address as a user would type it (e.g. ya.ru or https://example.com).
        url: String,

        /// Requests already made from this client in the current minute,
        /// checked against limits.requests_per_minute.
        #[arg(long, default_value = "0", value_name = "N")]
        recent: u32,
    },

    /// Show the issue backlog, filtered and sorted.
    Issues {
        /// Keep only these priorities (repeatable). Default: all.
        #[arg(long = "priority", short = 'p', value_name = "P")]
        priorities: Vec<Priority>,

        /// Category: tech, content, ux, seo or all.
        #[arg(long, default_value = "all")]
        category: CategoryFilter,

        /// Case-insensitive text to look for in title or description.
        #[arg(long, short = 'q', default_value = "")]
        query: String,

        /// Sort by priority, impact or category.
        #[arg(long, default_value = "priority")]
        sort: SortKey,

        /// JSON issue fixture to use instead of the demo backlog.
        #[arg(long, value_name = "FILE")]
        fixture: Option<PathBuf>,
    },

    /// Show recent audit runs.
    Audits {
        /// Device: all, mobile or desktop.
        #[arg(long, default_value = "all")]
        device: DeviceFilter,

        /// Case-insensitive text to look for in the site address.
        #[arg(long, short = 'q', default_value = "")]
        query: String,
    },

    /// Show generated reports and their web viewer paths.
    Reports,

    /// Show which features a role/plan pair may use.
    Gate {
        /// studio, seo, owner or agency.
        #[arg(long)]
        role: Role,

        /// Free, Pro or Agency.
        #[arg(long)]
        plan: Plan,

        /// Single feature to check (e.g. exportCSV). Default: all features.
        feature: Option<Feature>,
    },

    /// Per-priority issue counts and the top issues.
    Summary {
        /// JSON issue fixture to use instead of the demo backlog.
        #[arg(long, value_name = "FILE")]
        fixture: Option<PathBuf>,

        /// How many top issues to list.
        #[arg(long, default_value = "3", value_name = "N")]
        top: usize,
    },

    /// Print the effective configuration.
    Config,
}

impl Cli {
    fn load_config(&self) -> Result<(AppConfig, PathBuf)> {
        match &self.config {
            Some(path) => Ok((config::load_from(path)?, path.clone())),
            None => Ok((config::load_or_init()?, config::config_path()?)),
        }
    }

    pub fn run(self) -> Result<()> {
        let (cfg, cfg_path) = self.load_config()?;
        tracing::debug!("loaded config from {}: {:?}", cfg_path.display(), cfg);

        match self.command {
            CliCommand::Check { url, recent } => run_check(&url, &cfg.limits, recent)?,
            CliCommand::Issues {
                priorities,
                category,
                query,
                sort,
                fixture,
            } => {
                let q = IssueQuery {
                    priorities,
                    category,
                    query,
                    sort,
                };
                run_issues(&q, fixture.as_deref())?;
            }
            CliCommand::Audits { device, query } => run_audits(device, &query)?,
            CliCommand::Reports => run_reports()?,
            CliCommand::Gate {
                role,
                plan,
                feature,
            } => run_gate(&cfg, role, plan, feature)?,
            CliCommand::Summary { fixture, top } => run_summary(&cfg, fixture.as_deref(), top)?,
            CliCommand::Config => run_config(&cfg, &cfg_path)?,
        }

        Ok(())
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }
}

#[cfg(test)]
mod tests;

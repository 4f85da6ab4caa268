//! Declarative capability rules and their materialized table.

use std::collections::BTreeMap;

use super::types::{Feature, Plan, Role};
use crate::config::FeatureFlags;

/// A feature is granted when the plan is in `plans` and the role in `roles`.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub feature: Feature,
    pub plans: &'static [Plan],
    pub roles: &'static [Role],
}

impl Rule {
    pub fn grants(&self, role: Role, plan: Plan) -> bool {
        self.plans.contains(&plan) && self.roles.contains(&role)
    }
}

/// The product's gating rules, one per feature.
pub const RULES: &[Rule] = &[
    Rule {
        feature: Feature::ExportCsv,
        plans: &[Plan::Agency],
        roles: &Role::ALL,
    },
    Rule {
        feature: Feature::ExportPdf,
        plans: &[Plan::Pro, Plan::Agency],
        roles: &Role::ALL,
    },
    Rule {
        feature: Feature::WhiteLabel,
        plans: &[Plan::Pro, Plan::Agency],
        roles: &[Role::Agency, Role::Studio],
    },
    Rule {
        feature: Feature::MultiClient,
        plans: &Plan::ALL,
        roles: &[Role::Studio, Role::Agency],
    },
    Rule {
        feature: Feature::CompareAudits,
        plans: &Plan::ALL,
        roles: &[Role::Seo, Role::Agency],
    },
    Rule {
        feature: Feature::OwnerChecklist,
        plans: &Plan::ALL,
        roles: &[Role::Owner],
    },
];

pub(crate) fn rule_for(feature: Feature) -> Option<&'static Rule> {
    RULES.iter().find(|r| r.feature == feature)
}

/// Every `(role, plan, feature)` combination with its verdict.
///
/// Built once from [`RULES`], optionally masked by config feature flags.
/// Combinations missing from the table are denied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityTable {
    grants: BTreeMap<(Role, Plan, Feature), bool>,
}

impl Default for CapabilityTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl CapabilityTable {
    /// Table straight from [`RULES`].
    pub fn standard() -> Self {
        let mut grants = BTreeMap::new();
        for role in Role::ALL {
            for plan in Plan::ALL {
                for feature in Feature::ALL {
                    let allowed = rule_for(feature).is_some_and(|r| r.grants(role, plan));
                    grants.insert((role, plan, feature), allowed);
                }
            }
        }
        Self { grants }
    }

    /// Standard table with features disabled in `flags` denied everywhere.
    pub fn with_flags(flags: &FeatureFlags) -> Self {
        let mut table = Self::standard();
        for ((_, _, feature), allowed) in table.grants.iter_mut() {
            if !flags.is_enabled(*feature) {
                *allowed = false;
            }
        }
        let disabled: Vec<Feature> = Feature::ALL
            .into_iter()
            .filter(|f| !flags.is_enabled(*f))
            .collect();
        if !disabled.is_empty() {
            tracing::debug!("capability table: disabled by config: {:?}", disabled);
        }
        table
    }

    pub fn allows(&self, feature: Feature, role: Role, plan: Plan) -> bool {
        self.grants
            .get(&(role, plan, feature))
            .copied()
            .unwrap_or(false)
    }

    /// Verdict for every feature for one role/plan pair, in `Feature::ALL` order.
    pub fn features_for(&self, role: Role, plan: Plan) -> Vec<(Feature, bool)> {
        Feature::ALL
            .into_iter()
            .map(|f| (f, self.allows(f, role, plan)))
            .collect()
    }

    /// All rows of the table, ordered by role, plan, feature.
    pub fn entries(&self) -> impl Iterator<Item = (Role, Plan, Feature, bool)> + '_ {
        self.grants
            .iter()
            .map(|(&(role, plan, feature), &allowed)| (role, plan, feature, allowed))
    }
}

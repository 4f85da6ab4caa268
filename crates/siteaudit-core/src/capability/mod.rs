//! Role/plan feature gating.
//!
//! Gating is data, not code: [`RULES`] lists, per feature, which plans and
//! roles unlock it, and [`CapabilityTable`] expands that into an auditable
//! `(role, plan, feature) -> bool` map. Config feature flags can switch a
//! feature off for everyone.

mod table;
mod types;

pub use table::{CapabilityTable, Rule, RULES};
pub use types::{Feature, Plan, Role};

/// True if `role` on `plan` may use `feature`, per [`RULES`].
pub fn gate(feature: Feature, role: Role, plan: Plan) -> bool {
    table::rule_for(feature).is_some_and(|r| r.grants(role, plan))
}

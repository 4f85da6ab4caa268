//! Errors for parsing user-supplied enum names (CLI flags, fixture fields).

/// Returned by the `FromStr` impls of the domain enums.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown priority: {0} (expected P0, P1, P2 or P3)")]
    UnknownPriority(String),

    #[error("unknown category: {0} (expected tech, content, ux, seo or all)")]
    UnknownCategory(String),

    #[error("unknown sort key: {0} (expected priority, impact or category)")]
    UnknownSortKey(String),

    #[error("unknown device: {0} (expected all, mobile or desktop)")]
    UnknownDevice(String),

    #[error("unknown role: {0} (expected studio, seo, owner or agency)")]
    UnknownRole(String),

    #[error("unknown plan: {0} (expected Free, Pro or Agency)")]
    UnknownPlan(String),

    #[error("unknown feature: {0}")]
    UnknownFeature(String),
}

/// Why an audit request was turned away before any work was done.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("not a valid site address: {0:?} (expected e.g. https://ya.ru or ya.ru)")]
    InvalidUrl(String),

    #[error("confirm that you are not a robot")]
    NotConfirmed,

    #[error("limit of {limit} requests/minute exceeded; try again later or sign up")]
    RateLimited { limit: u32 },
}

//! Admission checks for an anonymous audit request.
//!
//! Checks run in a fixed order: the address first, then the human
//! confirmation, then the per-client rate limit. The first failure wins.

use crate::config::RateLimits;
use crate::error::IntakeError;
use crate::url_model::{self, CheckedUrl};

/// One submission of the landing page form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRequest<'a> {
    /// Address as typed.
    pub url: &'a str,
    /// The "I am not a robot" box was ticked.
    pub human_confirmed: bool,
    /// Requests already accepted from this client in the current minute.
    pub recent_requests: u32,
}

/// Returns the checked address if the request may proceed.
pub fn admit(req: &AuditRequest<'_>, limits: &RateLimits) -> Result<CheckedUrl, IntakeError> {
    let checked = url_model::check(req.url);
    if !checked.valid {
        return Err(IntakeError::InvalidUrl(req.url.to_string()));
    }
    if !req.human_confirmed {
        return Err(IntakeError::NotConfirmed);
    }
    if req.recent_requests >= limits.requests_per_minute {
        tracing::info!(
            "intake: rate limited {} ({} of {} per minute)",
            checked.canonical,
            req.recent_requests,
            limits.requests_per_minute
        );
        return Err(IntakeError::RateLimited {
            limit: limits.requests_per_minute,
        });
    }
    Ok(checked)
}

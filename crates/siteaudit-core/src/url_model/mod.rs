//! URL intake: normalization, canonicalization and validation of what a user
//! types into the "site address" field.
//!
//! Two string forms are kept apart on purpose:
//! - [`normalize`] only trims and defaults the scheme; safe to echo back into
//!   the input field.
//! - [`canonicalize`] is ASCII-only and is what goes to any network call.
//!
//! None of these functions fail; [`validate`] reports invalid input as `false`.

mod canonical;
mod hostname;

pub use canonical::{canonicalize, normalize};
pub use hostname::is_valid_hostname;

use url::Url;

/// True if `raw` designates a plausible public http(s) website.
pub fn validate(raw: &str) -> bool {
    let canonical = canonicalize(raw);
    let Ok(parsed) = Url::parse(&canonical) else {
        return false;
    };
    if !matches!(parsed.scheme(), "http" | "https") {
        return false;
    }
    parsed.host_str().is_some_and(is_valid_hostname)
}

/// All three views of one user input, computed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedUrl {
    pub normalized: String,
    pub canonical: String,
    pub valid: bool,
}

/// Runs [`normalize`], [`canonicalize`] and [`validate`] on `raw`.
pub fn check(raw: &str) -> CheckedUrl {
    let checked = CheckedUrl {
        normalized: normalize(raw),
        canonical: canonicalize(raw),
        valid: validate(raw),
    };
    tracing::debug!(
        "url check: raw={:?} canonical={} valid={}",
        raw,
        checked.canonical,
        checked.valid
    );
    checked
}

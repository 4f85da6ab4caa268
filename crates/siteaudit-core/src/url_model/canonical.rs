//! Scheme defaulting and ASCII re-serialization of user-typed URLs.

use url::Url;

const DEFAULT_SCHEME: &str = "https";

/// True if `s` starts with `http://` or `https://`, ignoring ASCII case.
fn has_http_scheme(s: &str) -> bool {
    ["http://", "https://"].iter().any(|prefix| {
        s.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

/// Trims `raw` and prefixes `https://` when no http(s) scheme is present.
///
/// Only empty input yields an empty string; whitespace-only input becomes a
/// bare `https://`. The host is left exactly as typed, so the result can be
/// shown back in an input field.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let s = raw.trim();
    if has_http_scheme(s) {
        s.to_string()
    } else {
        format!("{DEFAULT_SCHEME}://{s}")
    }
}

/// Network-safe form of `raw`: `scheme://host[:port]path[?query][#fragment]`
/// with the host in ASCII (punycode) form.
///
/// Non-http(s) schemes become `https`. If the scheme-defaulted string does not
/// parse as a URL it is returned unchanged.
pub fn canonicalize(raw: &str) -> String {
    let defaulted = normalize(raw);
    let parsed = match Url::parse(&defaulted) {
        Ok(u) => u,
        Err(e) => {
            tracing::debug!("canonicalize: keeping {:?} as typed ({})", defaulted, e);
            return defaulted;
        }
    };

    let scheme = match parsed.scheme() {
        "http" => "http",
        "https" => "https",
        other => {
            tracing::debug!("canonicalize: forcing scheme {} to {}", other, DEFAULT_SCHEME);
            DEFAULT_SCHEME
        }
    };

    let Some(host) = parsed.host_str() else {
        return defaulted;
    };

    let mut out = format!("{scheme}://{host}");
    if let Some(port) = parsed.port() {
        out.push(':');
        out.push_str(&port.to_string());
    }
    out.push_str(parsed.path());
    if let Some(query) = parsed.query() {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = parsed.fragment() {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

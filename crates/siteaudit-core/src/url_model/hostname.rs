//! Hostname plausibility check for public websites.

const MAX_LABEL_LEN: usize = 63;
const ACE_PREFIX: &str = "xn--";

/// True if `host` looks like a public DNS name or a dotted-quad IPv4 address.
///
/// Expects the ASCII form of the host (what `url::Url::host_str` returns);
/// raw Unicode labels are rejected.
///
/// - no empty string, trailing dot or empty label (`..`)
/// - any dotted-quad IPv4 is accepted, private ranges included
/// - otherwise at least two labels, each 1..=63 chars of `[A-Za-z0-9-]`,
///   not starting or ending with `-`
/// - the TLD is alphabetic (2+ chars) or an `xn--` ACE label
pub fn is_valid_hostname(host: &str) -> bool {
    if host.is_empty() || host.ends_with('.') || host.contains("..") {
        return false;
    }
    if is_dotted_quad(host) {
        return true;
    }

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    if !labels.iter().all(|l| is_valid_label(l)) {
        return false;
    }

    match labels.last() {
        Some(tld) => is_valid_tld(tld),
        None => false,
    }
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn is_valid_tld(tld: &str) -> bool {
    let alphabetic = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());
    let ace = tld
        .get(..ACE_PREFIX.len())
        .is_some_and(|p| p.eq_ignore_ascii_case(ACE_PREFIX));
    alphabetic || ace
}

/// Four dot-separated decimal octets, each 0..=255.
fn is_dotted_quad(host: &str) -> bool {
    let parts: Vec<&str> = host.split('.').collect();
    parts.len() == 4
        && parts.iter().all(|p| {
            !p.is_empty()
                && p.len() <= 3
                && p.bytes().all(|b| b.is_ascii_digit())
                && p.parse::<u16>().is_ok_and(|n| n <= 255)
        })
}

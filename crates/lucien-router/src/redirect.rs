//! One-time origin canonicalization.

/// Full-page redirect target for `www.`-prefixed hosts.
///
/// Checked once at bootstrap, before the router takes over. Returns the
/// bare-domain URL with path and query preserved when the host needs the
/// redirect, `None` when the origin is already canonical. The caller
/// performs the actual navigation; this is a real network round-trip, not
/// a history write.
#[must_use]
pub fn origin_redirect(host: &str, path_and_query: &str) -> Option<String> {
    let bare = host.strip_prefix("www.")?;
    Some(format!("https://{bare}{path_and_query}"))
}

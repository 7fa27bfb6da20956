use crate::domain::model::CanonicalDomain;

/// Reduce a raw domain or URL to its canonical host.
///
/// Returns `None` only when there is no input at all (absent or empty string).
/// Anything else yields a value, possibly empty: `"https:///"` normalizes to `""`.
pub fn normalize_domain(raw: Option<&str>) -> Option<CanonicalDomain> {
    let raw = raw.filter(|value| !value.is_empty())?;

    let cleaned = raw.trim().to_lowercase();
    let without_scheme = strip_http_scheme(&cleaned);
    let host = without_scheme
        .split('/')
        .next()
        .unwrap_or(without_scheme);

    Some(CanonicalDomain::from_normalized(host.to_string()))
}

// Input is already lowercased, so a plain prefix check covers HTTPS:// too.
fn strip_http_scheme(value: &str) -> &str {
    value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .unwrap_or(value)
}

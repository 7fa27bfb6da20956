use crate::domain::model::CanonicalDomain;
use regex::Regex;
use std::sync::LazyLock;

// Labels of letters, digits, dots and hyphens, then an alphabetic TLD of two or more letters.
static DOMAIN_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("domain pattern is valid")
});

/// Syntactic check only; says nothing about whether the domain resolves.
pub fn is_valid_domain(domain: &CanonicalDomain) -> bool {
    DOMAIN_SHAPE.is_match(domain.as_str())
}

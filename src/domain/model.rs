use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// One company/domain pair as supplied by the caller. Either field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLead {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
}

impl RawLead {
    pub fn new(name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            domain: Some(domain.into()),
        }
    }
}

/// Lowercased host with protocol, path and surrounding whitespace removed.
///
/// May hold an empty string when the raw input was nothing but a protocol
/// prefix; see [`CanonicalDomain::is_empty`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalDomain(String);

impl CanonicalDomain {
    pub(crate) fn from_normalized(host: String) -> Self {
        Self(host)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Keyword hit count for a homepage, always within `0..=AiScore::MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AiScore(u8);

impl AiScore {
    pub const MAX: u8 = 5;
    pub const ZERO: AiScore = AiScore(0);

    pub fn capped(hits: usize) -> Self {
        Self(hits.min(Self::MAX as usize) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for AiScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A lead after normalization, validation and scoring. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedLead {
    #[serde(rename = "Company")]
    pub company: Option<String>,
    #[serde(rename = "Domain")]
    pub domain: CanonicalDomain,
    #[serde(rename = "Domain Valid", serialize_with = "serialize_flag")]
    pub domain_valid: bool,
    #[serde(rename = "AI Score (0-5)")]
    pub ai_score: AiScore,
}

impl EnrichedLead {
    pub const COLUMNS: [&'static str; 4] = ["Company", "Domain", "Domain Valid", "AI Score (0-5)"];
}

// Matches the True/False spelling existing consumers of the report expect.
fn serialize_flag<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *flag { "True" } else { "False" })
}

/// Enriched leads with pairwise distinct domains, in first-seen input order.
///
/// The only way to build one is [`ReportRowSet::dedup_by_domain`], so the
/// uniqueness invariant holds for every value of this type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRowSet {
    rows: Vec<EnrichedLead>,
}

impl ReportRowSet {
    /// Keeps the first lead seen for each canonical domain and drops later ones entirely.
    pub fn dedup_by_domain(leads: Vec<EnrichedLead>) -> Self {
        let mut seen = std::collections::HashSet::with_capacity(leads.len());
        let rows = leads
            .into_iter()
            .filter(|lead| seen.insert(lead.domain.clone()))
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnrichedLead> {
        self.rows.iter()
    }

    pub fn as_slice(&self) -> &[EnrichedLead] {
        &self.rows
    }

    pub fn into_vec(self) -> Vec<EnrichedLead> {
        self.rows
    }
}

impl IntoIterator for ReportRowSet {
    type Item = EnrichedLead;
    type IntoIter = std::vec::IntoIter<EnrichedLead>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a ReportRowSet {
    type Item = &'a EnrichedLead;
    type IntoIter = std::slice::Iter<'a, EnrichedLead>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Raw result of a single page fetch. Any status is a page; judging it is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

/// Why a homepage produced no text to score.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    #[error("cannot build homepage URL: {0}")]
    InvalidUrl(String),

    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("unreadable response body: {0}")]
    Body(String),
}

use crate::core::scorer::RelevanceScorer;
use crate::domain::model::{CanonicalDomain, EnrichedLead, RawLead, ReportRowSet};
use crate::domain::ports::PageFetcher;
use crate::domain::services::{is_valid_domain, normalize_domain};
use futures::stream::{self, StreamExt};

/// What happens to a raw lead before any network work is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    Skip(SkipReason),
    Enrich {
        company: Option<String>,
        domain: CanonicalDomain,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Domain field absent or empty.
    MissingDomain,
    /// Domain had content but no host survived normalization, e.g. `"https:///"`.
    EmptyHost,
}

impl Disposition {
    pub fn of(lead: &RawLead) -> Self {
        match normalize_domain(lead.domain.as_deref()) {
            None => Disposition::Skip(SkipReason::MissingDomain),
            Some(domain) if domain.is_empty() => Disposition::Skip(SkipReason::EmptyHost),
            Some(domain) => Disposition::Enrich {
                company: lead.name.clone(),
                domain,
            },
        }
    }
}

/// Normalize → validate → score each lead, then dedup by canonical domain.
pub struct LeadProcessor<F: PageFetcher> {
    scorer: RelevanceScorer<F>,
    concurrency: usize,
}

impl<F: PageFetcher> LeadProcessor<F> {
    /// One homepage fetch at a time.
    pub fn new(fetcher: F) -> Self {
        Self::with_concurrency(fetcher, 1)
    }

    /// Up to `concurrency` homepage fetches in flight. Output order is unaffected.
    pub fn with_concurrency(fetcher: F, concurrency: usize) -> Self {
        Self {
            scorer: RelevanceScorer::new(fetcher),
            concurrency: concurrency.max(1),
        }
    }

    /// Never fails: bad domains become invalid rows and failed fetches score 0.
    pub async fn process(&self, leads: &[RawLead]) -> ReportRowSet {
        let candidates: Vec<(Option<String>, CanonicalDomain)> = leads
            .iter()
            .enumerate()
            .filter_map(|(index, lead)| match Disposition::of(lead) {
                Disposition::Skip(reason) => {
                    tracing::debug!(index, ?reason, name = ?lead.name, "skipping lead");
                    None
                }
                Disposition::Enrich { company, domain } => Some((company, domain)),
            })
            .collect();

        tracing::debug!(
            "{} of {} leads have a usable domain",
            candidates.len(),
            leads.len()
        );

        // `buffered` yields in input order, so dedup sees the same sequence at any concurrency.
        let enriched: Vec<EnrichedLead> = stream::iter(candidates)
            .map(|(company, domain)| self.enrich(company, domain))
            .buffered(self.concurrency)
            .collect()
            .await;

        let before = enriched.len();
        let rows = ReportRowSet::dedup_by_domain(enriched);
        if rows.len() < before {
            tracing::debug!("dropped {} duplicate domains", before - rows.len());
        }

        rows
    }

    async fn enrich(&self, company: Option<String>, domain: CanonicalDomain) -> EnrichedLead {
        let domain_valid = is_valid_domain(&domain);
        let ai_score = self.scorer.score(&domain).await;

        tracing::debug!(domain = %domain, domain_valid, ai_score = ai_score.value(), "lead enriched");

        EnrichedLead {
            company,
            domain,
            domain_valid,
            ai_score,
        }
    }
}

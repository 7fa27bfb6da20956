use crate::domain::model::{AiScore, CanonicalDomain, FetchFailure};
use crate::domain::ports::PageFetcher;
use scraper::{Html, Node};
use url::Url;

/// Phrases that count toward a homepage's AI score.
pub const AI_KEYWORDS: [&str; 5] = [
    "ai",
    "machine learning",
    "automation",
    "artificial intelligence",
    "data science",
];

// Elements whose text a browser never renders.
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Scores a domain by fetching its homepage once and counting keyword hits.
pub struct RelevanceScorer<F: PageFetcher> {
    fetcher: F,
}

impl<F: PageFetcher> RelevanceScorer<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Homepage score in `0..=5`. Every fetch or parse failure scores 0.
    pub async fn score(&self, domain: &CanonicalDomain) -> AiScore {
        match self.try_score(domain).await {
            Ok(score) => score,
            Err(failure) => {
                tracing::debug!(domain = %domain, reason = %failure, "homepage not scored");
                AiScore::ZERO
            }
        }
    }

    /// Like [`score`](Self::score), but keeps the reason a page could not be scored.
    pub async fn try_score(&self, domain: &CanonicalDomain) -> Result<AiScore, FetchFailure> {
        let text = self.page_text(domain).await?;
        Ok(count_keywords(&text))
    }

    async fn page_text(&self, domain: &CanonicalDomain) -> Result<String, FetchFailure> {
        let url = homepage_url(domain)?;
        let page = self.fetcher.fetch(&url).await?;

        if page.status != 200 {
            return Err(FetchFailure::Status(page.status));
        }

        Ok(visible_text(&page.body))
    }
}

pub fn homepage_url(domain: &CanonicalDomain) -> Result<Url, FetchFailure> {
    let url = Url::parse(&format!("https://{}", domain))
        .map_err(|e| FetchFailure::InvalidUrl(e.to_string()))?;

    if url.host_str().map_or(true, str::is_empty) {
        return Err(FetchFailure::InvalidUrl(format!("no host in '{}'", domain)));
    }

    Ok(url)
}

/// Text content of an HTML document, skipping script and style bodies.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);

    document
        .root_element()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => {
                let hidden = node.ancestors().any(|ancestor| {
                    ancestor
                        .value()
                        .as_element()
                        .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
                });
                (!hidden).then(|| &**text)
            }
            _ => None,
        })
        .collect()
}

/// Number of distinct keywords found anywhere in `text`, case-insensitively.
///
/// Matching is plain substring containment, so "domain" counts as a hit for "ai".
pub fn count_keywords(text: &str) -> AiScore {
    let lowered = text.to_lowercase();
    let hits = AI_KEYWORDS
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .count();
    AiScore::capped(hits)
}

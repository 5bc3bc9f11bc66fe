//! Keyword search over sections and subsections

use crate::document::Whitepaper;
use crate::scoring::QueryTerms;
use serde::Serialize;

/// A scored hit; `score` is always at least 1
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchResult {
    /// Section heading, or "section > subsection"
    pub label: String,
    pub content: String,
    pub score: u32,
}

/// Score every section and subsection against `query`
///
/// Results are sorted by score, highest first. Equal scores keep document
/// order, each section ahead of its own subsections. Blank queries return
/// nothing.
pub fn search(whitepaper: &Whitepaper, query: &str) -> Vec<SearchResult> {
    let terms = QueryTerms::parse(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();

    for section in whitepaper.sections() {
        let score = terms.score(&format!("{} {}", section.heading, section.content));
        if score > 0 {
            results.push(SearchResult {
                label: section.heading.clone(),
                content: section.content.clone(),
                score,
            });
        }

        for sub in &section.subsections {
            let score = terms.score(&format!("{} {}", sub.heading, sub.content));
            if score > 0 {
                results.push(SearchResult {
                    label: format!("{} > {}", section.heading, sub.heading),
                    content: sub.content.clone(),
                    score,
                });
            }
        }
    }

    // sort_by is stable: ties stay in document order
    results.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(query = %query, hits = results.len(), "Search complete");
    results
}

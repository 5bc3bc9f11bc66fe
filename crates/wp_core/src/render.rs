//! Text rendering of lookup and search results
//!
//! Responses are markdown-flavoured plain text meant to be read by an agent.

use crate::document::Whitepaper;
use crate::glossary::ConceptMatch;
use crate::search::SearchResult;
use crate::sections::SectionMatch;

/// Appended to content clipped by [`clip`]
pub const ELLIPSIS: &str = "...";

/// How many search results to show and how much of each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub max_results: usize,
    pub snippet_chars: usize,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            max_results: 5,
            snippet_chars: 1000,
        }
    }
}

/// Cut `content` to at most `max_chars` characters, marking the cut
pub fn clip(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}{}", &content[..idx], ELLIPSIS),
        None => content.to_string(),
    }
}

pub fn render_search(query: &str, results: &[SearchResult], presentation: &Presentation) -> String {
    if results.is_empty() {
        return format!(
            "No results found for \"{}\". Try a different search term or browse the sections.",
            query
        );
    }

    let shown = results
        .iter()
        .take(presentation.max_results)
        .map(|r| format!("**{}**\n{}", r.label, clip(&r.content, presentation.snippet_chars)))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("Found {} result(s) for \"{}\":\n\n{}", results.len(), query, shown)
}

/// A section with its subsections beneath it, or a single qualified subsection
pub fn render_section(found: &SectionMatch<'_>) -> String {
    match found {
        SectionMatch::Section(section) => {
            let mut text = format!("**{}**\n\n{}", section.heading, section.content);
            if !section.subsections.is_empty() {
                let subs = section
                    .subsections
                    .iter()
                    .map(|sub| format!("### {}\n\n{}", sub.heading, sub.content))
                    .collect::<Vec<_>>()
                    .join("\n\n");
                text.push_str("\n\n");
                text.push_str(&subs);
            }
            text
        }
        SectionMatch::Subsection { subsection, .. } => {
            format!("**{}**\n\n{}", found.label(), subsection.content)
        }
    }
}

/// Heading tree of the whole paper
pub fn render_outline(whitepaper: &Whitepaper) -> String {
    let tree = whitepaper
        .sections()
        .iter()
        .map(|section| {
            let mut entry = format!("- **{}**", section.heading);
            for sub in &section.subsections {
                entry.push_str(&format!("\n  - {}", sub.heading));
            }
            entry
        })
        .collect::<Vec<_>>()
        .join("\n");

    match byline(whitepaper) {
        Some(byline) => format!(
            "# {} Whitepaper Sections\n\n{}\n\n{}",
            whitepaper.subject(),
            byline,
            tree
        ),
        None => format!("# {} Whitepaper Sections\n\n{}", whitepaper.subject(), tree),
    }
}

/// `_Title_ by A, B`; omitted when the paper has no title
fn byline(whitepaper: &Whitepaper) -> Option<String> {
    let title = whitepaper.title().trim();
    if title.is_empty() {
        return None;
    }
    let mut line = format!("_{}_", title);
    if !whitepaper.authors().is_empty() {
        line.push_str(" by ");
        line.push_str(&whitepaper.authors().join(", "));
    }
    Some(line)
}

/// `query` is echoed back in suggestion lists so the caller sees what missed
pub fn render_concept(query: &str, found: &ConceptMatch<'_>) -> String {
    match found {
        ConceptMatch::Exact(concept) => format!("**{}**\n\n{}", concept.name, concept.explanation),
        ConceptMatch::Suggestions(similar) => {
            let list = similar
                .iter()
                .map(|c| format!("- {}", c.name))
                .collect::<Vec<_>>()
                .join("\n");
            format!(
                "Concept \"{}\" not found exactly. Did you mean one of these?\n\n{}\n\nUse the get_key_concepts tool with one of these exact terms.",
                query, list
            )
        }
    }
}

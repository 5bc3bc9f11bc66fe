//! Core engine for the whitepaper agent
//!
//! Holds the document store (whitepaper + concept glossary) and the
//! read-only services built on it: relevance scoring, search, section and
//! concept lookup, and the text rendering of their results.
//!
//! Everything here is immutable after load, so a [`KnowledgeBase`] can be
//! shared across threads behind an `Arc` without locking.

use std::path::Path;
use wp_common::Result;

pub mod content;
pub mod document;
pub mod glossary;
pub mod render;
pub mod scoring;
pub mod search;
pub mod sections;

pub use document::{Section, Subsection, Whitepaper};
pub use glossary::{get_concept, Concept, ConceptGlossary, ConceptMatch};
pub use render::Presentation;
pub use scoring::{score, QueryTerms};
pub use search::{search, SearchResult};
pub use sections::{get_section, SectionMatch};

/// The whitepaper and its glossary, loaded once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    whitepaper: Whitepaper,
    glossary: ConceptGlossary,
}

impl KnowledgeBase {
    pub fn new(whitepaper: Whitepaper, glossary: ConceptGlossary) -> Self {
        Self { whitepaper, glossary }
    }

    /// The compiled-in Succinct Network whitepaper
    pub fn builtin() -> Result<Self> {
        content::builtin()
    }

    /// Parse a content document (see [`content`] for the format)
    pub fn from_json_str(json: &str) -> Result<Self> {
        content::from_json_str(json)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        content::from_file(path)
    }

    pub fn whitepaper(&self) -> &Whitepaper {
        &self.whitepaper
    }

    pub fn glossary(&self) -> &ConceptGlossary {
        &self.glossary
    }
}

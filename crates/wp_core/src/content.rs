//! Content files and the built-in Succinct Network whitepaper

use crate::document::{Section, Whitepaper};
use crate::glossary::{Concept, ConceptGlossary};
use crate::KnowledgeBase;
use serde::Deserialize;
use std::path::Path;
use wp_common::{Result, WpError};

/// Built-in payload, in the same format as a `[content] path` file
pub const BUILTIN_JSON: &str = include_str!("../content/succinct_whitepaper.json");

/// On-disk shape of a knowledge base
#[derive(Debug, Deserialize)]
struct ContentFile {
    subject: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    authors: Vec<String>,
    sections: Vec<Section>,
    #[serde(default)]
    concepts: Vec<Concept>,
}

pub fn from_json_str(json: &str) -> Result<KnowledgeBase> {
    let file: ContentFile = serde_json::from_str(json)
        .map_err(|e| WpError::InvalidContent(format!("Failed to parse content: {}", e)))?;

    let whitepaper = Whitepaper::new(file.subject, file.title, file.authors, file.sections)?;
    let glossary = ConceptGlossary::new(file.concepts)?;
    Ok(KnowledgeBase::new(whitepaper, glossary))
}

#[tracing::instrument(skip_all, fields(path = ?path))]
pub fn from_file(path: &Path) -> Result<KnowledgeBase> {
    tracing::info!("Loading content from {:?}", path);
    let json = std::fs::read_to_string(path)?;
    from_json_str(&json)
}

pub fn builtin() -> Result<KnowledgeBase> {
    from_json_str(BUILTIN_JSON)
}

//! Concept glossary and concept lookup

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use wp_common::{Result, WpError};

/// One glossary entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Concept {
    pub name: String,
    pub explanation: String,
}

/// Name → explanation mapping with case-insensitively unique names
///
/// Entries keep their load order so suggestion lists are deterministic.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ConceptGlossary {
    concepts: Vec<Concept>,
}

/// Outcome of a successful [`get_concept`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConceptMatch<'a> {
    /// The name matched a glossary entry exactly (ignoring case)
    Exact(&'a Concept),
    /// No exact match; these names overlap the query and may be what was meant
    Suggestions(Vec<&'a Concept>),
}

impl ConceptGlossary {
    pub fn new(concepts: Vec<Concept>) -> Result<Self> {
        let mut seen = HashSet::new();
        for concept in &concepts {
            if concept.name.trim().is_empty() {
                return Err(WpError::InvalidContent("concept name must not be empty".to_string()));
            }
            if concept.explanation.trim().is_empty() {
                return Err(WpError::InvalidContent(format!(
                    "concept \"{}\" has no explanation",
                    concept.name
                )));
            }
            if !seen.insert(concept.name.to_lowercase()) {
                return Err(WpError::InvalidContent(format!(
                    "duplicate concept \"{}\"",
                    concept.name
                )));
            }
        }
        Ok(Self { concepts })
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Concept> {
        self.concepts.iter()
    }

    /// Case-insensitive exact lookup
    pub fn get(&self, name: &str) -> Option<&Concept> {
        let wanted = name.to_lowercase();
        self.concepts.iter().find(|c| c.name.to_lowercase() == wanted)
    }
}

/// Look up a concept by name, falling back to substring suggestions
///
/// Suggestions are the names that contain the query or are contained in it.
/// Very short queries can therefore suggest many names.
pub fn get_concept<'a>(glossary: &'a ConceptGlossary, name: &str) -> Result<ConceptMatch<'a>> {
    if name.is_empty() {
        return Err(WpError::MissingParameter("concept".to_string()));
    }

    if let Some(concept) = glossary.get(name) {
        return Ok(ConceptMatch::Exact(concept));
    }

    let wanted = name.to_lowercase();
    let similar: Vec<&Concept> = glossary
        .iter()
        .filter(|c| {
            let key = c.name.to_lowercase();
            key.contains(&wanted) || wanted.contains(&key)
        })
        .collect();

    if similar.is_empty() {
        tracing::debug!("No concept matches {:?}", name);
        Err(WpError::ConceptNotFound(name.to_string()))
    } else {
        Ok(ConceptMatch::Suggestions(similar))
    }
}

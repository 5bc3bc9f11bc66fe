//! Section lookup by heading

use crate::document::{Section, Subsection, Whitepaper};
use wp_common::{Result, WpError};

/// What a heading lookup resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionMatch<'a> {
    Section(&'a Section),
    Subsection {
        parent: &'a Section,
        subsection: &'a Subsection,
    },
}

impl SectionMatch<'_> {
    /// Heading as shown to the caller, qualified with the parent for subsections
    pub fn label(&self) -> String {
        match self {
            SectionMatch::Section(section) => section.heading.clone(),
            SectionMatch::Subsection { parent, subsection } => {
                format!("{} > {}", parent.heading, subsection.heading)
            }
        }
    }
}

/// Find a section, or failing that a subsection, by case-insensitive heading
///
/// Section headings win over subsection headings. Among subsections the
/// first in document order is returned.
pub fn get_section<'a>(whitepaper: &'a Whitepaper, name: &str) -> Result<SectionMatch<'a>> {
    if name.is_empty() {
        return Err(WpError::MissingParameter("section".to_string()));
    }

    let wanted = name.to_lowercase();

    if let Some(section) = whitepaper
        .sections()
        .iter()
        .find(|s| s.heading.to_lowercase() == wanted)
    {
        return Ok(SectionMatch::Section(section));
    }

    whitepaper
        .sections()
        .iter()
        .find_map(|parent| {
            parent
                .subsections
                .iter()
                .find(|sub| sub.heading.to_lowercase() == wanted)
                .map(|subsection| SectionMatch::Subsection { parent, subsection })
        })
        .ok_or_else(|| WpError::SectionNotFound(name.to_string()))
}

//! Document store: the whitepaper as ordered sections and subsections

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use wp_common::{Result, WpError};

/// A titled block of text nested one level under a [`Section`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subsection {
    pub heading: String,
    pub content: String,
}

/// A top-level titled block of the whitepaper
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub content: String,

    /// Ordered subsections, possibly empty
    #[serde(default)]
    pub subsections: Vec<Subsection>,
}

/// The whitepaper, immutable once built
///
/// Headings are unique case-insensitively: section headings across the
/// document, subsection headings within their parent.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Whitepaper {
    subject: String,
    title: String,
    authors: Vec<String>,
    sections: Vec<Section>,
}

impl Whitepaper {
    /// Build a whitepaper, rejecting empty or duplicate headings and empty content
    pub fn new(
        subject: impl Into<String>,
        title: impl Into<String>,
        authors: Vec<String>,
        sections: Vec<Section>,
    ) -> Result<Self> {
        let subject = subject.into();
        if subject.trim().is_empty() {
            return Err(WpError::InvalidContent("subject must not be empty".to_string()));
        }

        let mut seen = HashSet::new();
        for section in &sections {
            check_block(&section.heading, &section.content)?;
            if !seen.insert(section.heading.to_lowercase()) {
                return Err(WpError::InvalidContent(format!(
                    "duplicate section heading \"{}\"",
                    section.heading
                )));
            }

            let mut seen_sub = HashSet::new();
            for sub in &section.subsections {
                check_block(&sub.heading, &sub.content)?;
                if !seen_sub.insert(sub.heading.to_lowercase()) {
                    return Err(WpError::InvalidContent(format!(
                        "duplicate subsection heading \"{}\" in \"{}\"",
                        sub.heading, section.heading
                    )));
                }
            }
        }

        Ok(Self {
            subject,
            title: title.into(),
            authors,
            sections,
        })
    }

    /// Name of the system the paper describes, e.g. "Succinct Network"
    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// Sections in document order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

fn check_block(heading: &str, content: &str) -> Result<()> {
    if heading.trim().is_empty() {
        return Err(WpError::InvalidContent("heading must not be empty".to_string()));
    }
    if content.trim().is_empty() {
        return Err(WpError::InvalidContent(format!(
            "content of \"{}\" must not be empty",
            heading
        )));
    }
    Ok(())
}

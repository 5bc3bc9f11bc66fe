//! Keyword relevance scoring
//!
//! A text block earns:
//! - 10 if it contains the whole query,
//! - 2 per query token (longer than two characters) found anywhere in it,
//! - 3 more per such token that also matches as a whole word.
//!
//! Matching is case-insensitive. Repeated query tokens count each time.

use regex::Regex;

const PHRASE_MATCH: u32 = 10;
const TOKEN_MATCH: u32 = 2;
const WHOLE_WORD_BONUS: u32 = 3;

/// Tokens of this many characters or fewer are ignored
const MAX_NOISE_CHARS: usize = 2;

/// A query parsed once and scored against many text blocks
#[derive(Debug, Clone)]
pub struct QueryTerms {
    phrase: String,
    tokens: Vec<Token>,
}

#[derive(Debug, Clone)]
struct Token {
    text: String,
    word: Option<Regex>,
}

impl Token {
    fn new(text: &str) -> Self {
        let word = match Regex::new(&format!(r"\b{}\b", regex::escape(text))) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!("No whole-word matching for token {:?}: {}", text, e);
                None
            }
        };
        Self {
            text: text.to_string(),
            word,
        }
    }
}

impl QueryTerms {
    pub fn parse(query: &str) -> Self {
        let phrase = query.to_lowercase();
        let tokens = phrase
            .split_whitespace()
            .filter(|t| t.chars().count() > MAX_NOISE_CHARS)
            .map(Token::new)
            .collect();
        Self { phrase, tokens }
    }

    /// Empty and whitespace-only queries match nothing
    pub fn is_empty(&self) -> bool {
        self.phrase.trim().is_empty()
    }

    /// Tokens that survived the length filter, lower-cased
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.text.as_str())
    }

    pub fn score(&self, text: &str) -> u32 {
        if self.is_empty() {
            return 0;
        }

        let text = text.to_lowercase();
        let mut score = 0;

        if text.contains(&self.phrase) {
            score += PHRASE_MATCH;
        }

        for token in &self.tokens {
            if text.contains(&token.text) {
                score += TOKEN_MATCH;

                if token.word.as_ref().is_some_and(|re| re.is_match(&text)) {
                    score += WHOLE_WORD_BONUS;
                }
            }
        }

        score
    }
}

/// Score `text` against `query`
///
/// # Example
/// ```
/// // phrase (10) + "proof" substring (2) + whole word (3)
/// assert_eq!(wp_core::score("Every proof counts", "proof"), 15);
/// assert_eq!(wp_core::score("Every proof counts", "zk"), 0);
/// ```
pub fn score(text: &str, query: &str) -> u32 {
    QueryTerms::parse(query).score(text)
}

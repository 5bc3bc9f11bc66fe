//! Substitute content for tests
//!
//! The fixtures use the same JSON shape as a `[content] path` file so they
//! can be fed to the loader directly or written into a temp workspace.

use serde_json::Value;

/// A three-section paper with subsections and a small glossary
///
/// Layout (document order):
/// - Overview
/// - Consensus > Voting, Finality
/// - Fees > Refunds
pub const FIXTURE_JSON: &str = r#"{
  "subject": "Acme Ledger",
  "title": "Acme Ledger: A Toy Ledger",
  "authors": ["Ada Example"],
  "sections": [
    {
      "heading": "Overview",
      "content": "Acme Ledger is a toy ledger used to exercise search and lookup."
    },
    {
      "heading": "Consensus",
      "content": "Validators agree on blocks through consensus rounds.",
      "subsections": [
        { "heading": "Voting", "content": "Each validator casts one vote per round." },
        { "heading": "Finality", "content": "Blocks are final after two rounds of votes." }
      ]
    },
    {
      "heading": "Fees",
      "content": "Users pay fees in credits to submit transactions.",
      "subsections": [
        { "heading": "Refunds", "content": "Unused fees are refunded to users." }
      ]
    }
  ],
  "concepts": [
    { "name": "consensus rounds", "explanation": "Rounds in which validators vote on the next block." },
    { "name": "validator", "explanation": "A node that votes on blocks." },
    { "name": "fee market", "explanation": "The mechanism pricing block space in credits." }
  ]
}"#;

/// Breaks heading uniqueness: "Fees" and "fees" collide
pub const DUPLICATE_HEADINGS_JSON: &str = r#"{
  "subject": "Broken",
  "title": "Broken",
  "authors": [],
  "sections": [
    { "heading": "Fees", "content": "One." },
    { "heading": "fees", "content": "Two." }
  ],
  "concepts": []
}"#;

/// [`FIXTURE_JSON`] parsed into a JSON value
pub fn fixture_value() -> Value {
    serde_json::from_str(FIXTURE_JSON).expect("fixture JSON is valid")
}

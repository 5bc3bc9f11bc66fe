//! Loading substitute content from disk

use wp_common::WpError;
use wp_core::render::render_outline;
use wp_core::{search, KnowledgeBase};
use wp_test_helpers::prelude::*;

#[test]
fn test_load_fixture_from_file() {
    let workspace = workspace_with_files(&[("content/paper.json", FIXTURE_JSON)]);
    let kb = KnowledgeBase::from_file(&workspace.path().join("content/paper.json")).unwrap();

    assert_eq!(kb.whitepaper().subject(), "Acme Ledger");
    assert_eq!(kb.glossary().len(), 3);
    assert!(appears_before("Voting", "Finality").eval(&render_outline(kb.whitepaper())));
}

#[test]
fn test_fixture_search_order() {
    let kb = KnowledgeBase::from_json_str(FIXTURE_JSON).unwrap();
    let labels: Vec<_> = search(kb.whitepaper(), "rounds")
        .into_iter()
        .map(|r| r.label)
        .collect();

    // Consensus and Finality both contain "rounds" as a word; document order breaks the tie
    assert_eq!(labels, vec!["Consensus", "Consensus > Finality"]);
}

#[test]
fn test_duplicate_headings_rejected() {
    let err = KnowledgeBase::from_json_str(DUPLICATE_HEADINGS_JSON).unwrap_err();
    assert!(matches!(err, WpError::InvalidContent(_)));
}

#[test]
fn test_missing_file() {
    let workspace = temp_dir();
    let err = KnowledgeBase::from_file(&workspace.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, WpError::IoError(_)));
}

#[test]
fn test_edited_fixture_rejected() {
    init_test_logging("debug");

    let mut value = fixture_value();
    value["sections"][1]["subsections"][0]["content"] = "  ".into();
    let err = KnowledgeBase::from_json_str(&value.to_string()).unwrap_err();
    assert!(matches!(err, WpError::InvalidContent(_)));

    let mut value = fixture_value();
    value["concepts"][2]["name"] = "Validator".into();
    assert!(KnowledgeBase::from_json_str(&value.to_string()).is_err());
}

//! Behaviour of the services against the built-in Succinct Network paper

use wp_core::render::{render_concept, render_outline, render_search, render_section};
use wp_core::{get_concept, get_section, score, search, ConceptMatch, KnowledgeBase, Presentation};
use wp_common::WpError;

fn kb() -> KnowledgeBase {
    KnowledgeBase::builtin().expect("built-in content is valid")
}

#[test]
fn test_section_lookup_ignores_case() {
    let kb = kb();
    let upper = render_section(&get_section(kb.whitepaper(), "Abstract").unwrap());
    let lower = render_section(&get_section(kb.whitepaper(), "abstract").unwrap());

    assert_eq!(upper, lower);
    assert!(upper.starts_with("**Abstract**\n\nThe Succinct Network is a decentralized protocol"));
}

#[test]
fn test_section_includes_subsections() {
    let kb = kb();
    let text = render_section(&get_section(kb.whitepaper(), "Proof Contests").unwrap());

    let mechanism = text.find("### Mechanism Description").expect("first subsection");
    let analysis = text.find("### Analysis and Incentives").expect("second subsection");
    let pools = text.find("### Proving Pools").expect("third subsection");
    assert!(mechanism < analysis && analysis < pools);
}

#[test]
fn test_subsection_lookup_is_qualified() {
    let kb = kb();
    let text = render_section(&get_section(kb.whitepaper(), "proving pools").unwrap());

    assert!(text.starts_with("**Proof Contests > Proving Pools**\n\nIndividual provers"));
    assert!(!text.contains("###"));
}

#[test]
fn test_unknown_section() {
    let kb = kb();
    let err = get_section(kb.whitepaper(), "not-a-real-heading").unwrap_err();
    assert!(matches!(err, WpError::SectionNotFound(_)));
    assert_eq!(err.to_string(), "Section \"not-a-real-heading\" not found");
}

#[test]
fn test_concepts() {
    let kb = kb();

    match get_concept(kb.glossary(), "sp1").unwrap() {
        ConceptMatch::Exact(c) => assert!(c.explanation.starts_with("SP1 is a zkVM")),
        other => panic!("expected exact match, got {:?}", other),
    }

    match get_concept(kb.glossary(), "proof").unwrap() {
        ConceptMatch::Suggestions(list) => {
            assert!(list.iter().any(|c| c.name == "proof contests"));
        }
        other => panic!("expected suggestions, got {:?}", other),
    }

    let err = get_concept(kb.glossary(), "zzzznotaconcept").unwrap_err();
    assert!(matches!(err, WpError::ConceptNotFound(_)));
}

#[test]
fn test_outline_lists_every_heading_in_order() {
    let kb = kb();
    let expected = "# Succinct Network Whitepaper Sections\n\n\
_Succinct Network: Prove the World's Software_ by Uma Roy, John Guibas, Kshitij Kulkarni, Mallesh Pai, Dan Robinson\n\n\
- **Abstract**\n\
- **Introduction**\n\
- **Succinct Network**\n  - Market Structure\n\
- **Proof Contests**\n  - Mechanism Description\n  - Analysis and Incentives\n  - Proving Pools\n\
- **Network Architecture**\n  - Implementation Requirements\n  - Participation\n\
- **Proving the World's Software**\n  - Applications\n\
- **Conclusion**";

    assert_eq!(render_outline(kb.whitepaper()), expected);
}

#[test]
fn test_search_ranking() {
    let kb = kb();
    let results = search(kb.whitepaper(), "proving pools");

    assert_eq!(results[0].label, "Proof Contests > Proving Pools");
    assert_eq!(results[0].score, 20);
    assert!(results.iter().all(|r| r.score > 0));
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_blank_search() {
    let kb = kb();
    assert!(search(kb.whitepaper(), "").is_empty());
    assert!(search(kb.whitepaper(), "   ").is_empty());
}

#[test]
fn test_repeated_calls_are_identical() {
    let kb = kb();
    let presentation = Presentation::default();

    let first = render_search("proof contests", &search(kb.whitepaper(), "proof contests"), &presentation);
    let second = render_search("proof contests", &search(kb.whitepaper(), "proof contests"), &presentation);
    assert_eq!(first, second);

    let a = render_concept("proof", &get_concept(kb.glossary(), "proof").unwrap());
    let b = render_concept("proof", &get_concept(kb.glossary(), "proof").unwrap());
    assert_eq!(a, b);
}

#[test]
fn test_phrase_bonus_adds_to_token_scores() {
    let text = "Provers engage in proof contests";
    let proof = score(text, "proof") - 10;
    let contests = score(text, "contests") - 10;

    assert_eq!(score(text, "proof contests"), 10 + proof + contests);
    // Without the phrase present, only the tokens count
    assert_eq!(score(text, "contests proof"), proof + contests);
}

#[test]
fn test_unmatched_query_scores_zero() {
    let kb = kb();
    for section in kb.whitepaper().sections() {
        assert_eq!(score(&section.content, "qqqq xxzz"), 0);
    }
}

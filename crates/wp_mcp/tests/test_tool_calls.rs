use serde_json::{json, Value};
use std::sync::Arc;
use wp_config::Config;
use wp_core::KnowledgeBase;
use wp_mcp::{JsonRpcError, JsonRpcRequest, WhitepaperServer};
use wp_test_helpers::prelude::*;

fn builtin_server() -> WhitepaperServer {
    suppress_logs();
    WhitepaperServer::new(Arc::new(KnowledgeBase::builtin().unwrap()))
}

fn rpc(server: &WhitepaperServer, method: &str, params: Value) -> Result<Value, JsonRpcError> {
    let req = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        id: Some(json!(1)),
        method: method.to_string(),
        params: Some(params),
    };

    let resp = server.handle_request(req).expect("Requests with an id get a response");
    match (resp.result, resp.error) {
        (Some(result), None) => Ok(result),
        (None, Some(error)) => Err(error),
        other => panic!("Malformed response: {:?}", other),
    }
}

fn call_tool(server: &WhitepaperServer, name: &str, args: Value) -> Result<String, JsonRpcError> {
    let result = rpc(server, "tools/call", json!({ "name": name, "arguments": args }))?;
    assert_eq!(result["content"][0]["type"], "text");
    Ok(result["content"][0]["text"].as_str().unwrap().to_string())
}

#[test]
fn test_search_formats_top_results() {
    let server = builtin_server();
    let text = call_tool(&server, "search_whitepaper", json!({ "query": "proof contests" })).unwrap();

    assert!(text.starts_with("Found "));
    assert!(text.contains("result(s) for \"proof contests\":"));
    // At most five result headings
    assert!(text.matches("\n**").count() <= 5);
}

#[test]
fn test_search_without_hits() {
    let server = builtin_server();
    let text = call_tool(&server, "search_whitepaper", json!({ "query": "   " })).unwrap();
    assert_eq!(
        text,
        "No results found for \"   \". Try a different search term or browse the sections."
    );
}

#[test]
fn test_missing_arguments_are_invalid_params() {
    let server = builtin_server();

    for (tool, key) in [
        ("search_whitepaper", "query"),
        ("get_section", "section"),
        ("get_key_concepts", "concept"),
    ] {
        let err = call_tool(&server, tool, json!({})).unwrap_err();
        assert_eq!(err.code, -32602, "{} without {}", tool, key);
        assert_eq!(err.message, format!("Missing {} parameter", key));
    }
}

#[test]
fn test_get_section_case_insensitive() {
    let server = builtin_server();
    let a = call_tool(&server, "get_section", json!({ "section": "Abstract" })).unwrap();
    let b = call_tool(&server, "get_section", json!({ "section": "abstract" })).unwrap();
    assert_eq!(a, b);

    let err = call_tool(&server, "get_section", json!({ "section": "not-a-real-heading" })).unwrap_err();
    assert_eq!(err.code, -32602);
    assert_eq!(err.message, "Section \"not-a-real-heading\" not found");
}

#[test]
fn test_key_concepts() {
    let server = builtin_server();

    let exact = call_tool(&server, "get_key_concepts", json!({ "concept": "SP1" })).unwrap();
    assert!(exact.starts_with("**sp1**\n\nSP1 is a zkVM"));

    let suggestions = call_tool(&server, "get_key_concepts", json!({ "concept": "proof" })).unwrap();
    assert!(suggestions.starts_with("Concept \"proof\" not found exactly. Did you mean one of these?"));
    assert!(suggestions.contains("- proof contests"));

    let err = call_tool(&server, "get_key_concepts", json!({ "concept": "zzzznotaconcept" })).unwrap_err();
    assert_eq!(err.code, -32602);
    assert_eq!(err.data, Some(json!({ "term": "zzzznotaconcept" })));
}

#[test]
fn test_list_sections_and_unknown_tool() {
    let server = builtin_server();
    let outline = call_tool(&server, "list_sections", json!({})).unwrap();
    assert!(outline.starts_with("# Succinct Network Whitepaper Sections"));
    assert!(appears_before("- **Proof Contests**", "  - Proving Pools").eval(&outline));

    let err = call_tool(&server, "summarize", json!({})).unwrap_err();
    assert_eq!(err.code, -32601);
    assert_eq!(err.message, "Unknown tool: summarize");
}

#[test]
fn test_catalogs() {
    let server = builtin_server();

    let tools = rpc(&server, "tools/list", json!({})).unwrap();
    let names: Vec<_> = tools["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["search_whitepaper", "get_section", "list_sections", "get_key_concepts"]);

    let prompts = rpc(&server, "prompts/list", json!({})).unwrap();
    assert_eq!(prompts["prompts"].as_array().unwrap().len(), 4);

    let prompt = rpc(&server, "prompts/get", json!({ "name": "network_architecture" })).unwrap();
    assert!(prompt["messages"][0]["content"]["text"]
        .as_str()
        .unwrap()
        .starts_with("Describe the architecture of the Succinct Network"));

    let err = rpc(&server, "prompts/get", json!({ "name": "limerick" })).unwrap_err();
    assert_eq!(err.code, -32602);
}

#[test]
fn test_configured_presentation() {
    let mut config = Config::default();
    config.search.max_results = 1;
    config.search.snippet_chars = 10;

    let kb = KnowledgeBase::from_json_str(FIXTURE_JSON).unwrap();
    let server = WhitepaperServer::from_config(Arc::new(kb), &config);

    let text = call_tool(&server, "search_whitepaper", json!({ "query": "rounds" })).unwrap();
    assert_eq!(
        text,
        "Found 2 result(s) for \"rounds\":\n\n**Consensus**\nValidators..."
    );
}

#[test]
fn test_repeated_calls_identical() {
    let server = builtin_server();
    let args = json!({ "query": "decentralized provers" });
    let first = call_tool(&server, "search_whitepaper", args.clone()).unwrap();
    let second = call_tool(&server, "search_whitepaper", args).unwrap();
    assert_eq!(first, second);
}

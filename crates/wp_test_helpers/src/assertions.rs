//! Domain-specific assertions for whitepaper agent tests

use predicates::prelude::*;
use predicates::str::contains;

/// Assert that a string is a JSON-RPC response
///
/// Checks for basic JSON-RPC structure (jsonrpc field, id, result or error).
///
/// # Example
/// ```rust
/// use wp_test_helpers::assertions::valid_jsonrpc_response;
/// use predicates::prelude::*;
///
/// let response = r#"{"jsonrpc":"2.0","id":1,"result":{}}"#;
/// assert!(valid_jsonrpc_response().eval(response));
/// ```
pub fn valid_jsonrpc_response() -> impl Predicate<str> {
    contains("\"jsonrpc\"")
        .and(contains("\"id\""))
        .and(contains("\"result\"").or(contains("\"error\"")))
}

/// Assert that every line of stdout is a JSON-RPC response
///
/// stdout must carry nothing but protocol traffic in stdio mode.
pub fn only_jsonrpc_lines() -> impl Predicate<str> {
    predicate::function(|s: &str| {
        s.lines()
            .filter(|line| !line.trim().is_empty())
            .all(|line| valid_jsonrpc_response().eval(line))
    })
}

/// Assert that `first` appears before `second` in the string
pub fn appears_before(first: &str, second: &str) -> impl Predicate<str> {
    let first = first.to_string();
    let second = second.to_string();
    predicate::function(move |s: &str| match (s.find(&first), s.find(&second)) {
        (Some(a), Some(b)) => a < b,
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_jsonrpc_response() {
        let valid = r#"{"jsonrpc":"2.0","id":1,"result":{}}"#;
        assert!(valid_jsonrpc_response().eval(valid));

        let valid_error = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32600}}"#;
        assert!(valid_jsonrpc_response().eval(valid_error));

        let invalid = r#"{"data":"test"}"#;
        assert!(!valid_jsonrpc_response().eval(invalid));
    }

    #[test]
    fn test_only_jsonrpc_lines() {
        let stdout = "{\"jsonrpc\":\"2.0\",\"id\":1,\"result\":{}}\n\n{\"jsonrpc\":\"2.0\",\"id\":2,\"error\":{}}\n";
        assert!(only_jsonrpc_lines().eval(stdout));
        assert!(!only_jsonrpc_lines().eval("server starting\n"));
    }

    #[test]
    fn test_appears_before() {
        assert!(appears_before("Voting", "Finality").eval("- Voting\n- Finality"));
        assert!(!appears_before("Finality", "Voting").eval("- Voting\n- Finality"));
        assert!(!appears_before("Missing", "Voting").eval("- Voting"));
    }
}

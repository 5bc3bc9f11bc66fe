//! MCP (Model Context Protocol) server for the whitepaper agent
//!
//! This crate routes tool and prompt requests to the knowledge base and
//! exposes them over HTTP ([`http`]) and line-delimited JSON-RPC on stdio.
//!
//! CRITICAL: in stdio mode stdout is reserved EXCLUSIVELY for JSON-RPC responses.
//! All logs go to stderr.

pub mod http;
pub mod prompts;
pub mod tools;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use wp_common::{Result, WpError};
use wp_config::Config;
use wp_core::{KnowledgeBase, Presentation};

use crate::tools::{text_result, ToolCall};

/// MCP protocol revision answered by `initialize`
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC request
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    /// `None` when the member is absent; `"id": null` is `Some(Value::Null)`
    #[serde(default, deserialize_with = "present_id")]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

fn present_id<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl JsonRpcRequest {
    /// Notifications carry no id member and never get a response
    pub fn is_notification(&self) -> bool {
        self.id.is_none() || self.method.starts_with("notifications/")
    }
}

/// JSON-RPC response
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: Option<Value>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// JSON-RPC error object
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    /// Convert WpError to JSON-RPC error
    pub fn from_wp_error(err: &WpError) -> Self {
        // Not-found errors hand back the term so the caller can adjust and retry
        let data = err.term().map(|term| json!({ "term": term }));

        Self {
            code: err.kind().code(),
            message: err.to_string(),
            data,
        }
    }

    /// Error for a request line that is not valid JSON-RPC
    pub fn parse_error(detail: impl std::fmt::Display) -> Self {
        Self {
            code: wp_common::ErrorKind::ParseError.code(),
            message: format!("Parse error: {}", detail),
            data: None,
        }
    }
}

/// Name and version reported by `initialize`
#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

/// Request router over a shared, read-only knowledge base
#[derive(Debug, Clone)]
pub struct WhitepaperServer {
    kb: Arc<KnowledgeBase>,
    presentation: Presentation,
    info: ServerInfo,
}

impl WhitepaperServer {
    /// Server with default presentation and name
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self::from_config(kb, &Config::default())
    }

    pub fn from_config(kb: Arc<KnowledgeBase>, config: &Config) -> Self {
        Self {
            kb,
            presentation: Presentation {
                max_results: config.search.max_results,
                snippet_chars: config.search.snippet_chars,
            },
            info: ServerInfo {
                name: config.server.name.clone(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Handle a single JSON-RPC request
    ///
    /// Returns `None` for notifications.
    pub fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        // Log to stderr only
        tracing::info!(target: "mcp", method = %request.method, "Handling MCP request");

        let notification = request.is_notification();
        let result = self.dispatch(&request.method, request.params);

        if notification {
            if let Err(e) = result {
                tracing::debug!(target: "mcp", "Notification {} failed: {}", request.method, e);
            }
            return None;
        }

        Some(match result {
            Ok(value) => JsonRpcResponse::success(request.id, value),
            Err(e) => {
                tracing::warn!(target: "mcp", method = %request.method, "Request failed: {}", e);
                JsonRpcResponse::failure(request.id, JsonRpcError::from_wp_error(&e))
            }
        })
    }

    /// Route a method name and its params
    pub fn dispatch(&self, method: &str, params: Option<Value>) -> Result<Value> {
        let params = params.unwrap_or(Value::Null);

        match method {
            "initialize" => Ok(self.initialize()),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(self.list_tools()),
            "tools/call" => self.call_tool(
                params.get("name").and_then(Value::as_str),
                params.get("arguments"),
            ),
            "prompts/list" => Ok(prompts::list()),
            "prompts/get" => prompts::get(params.get("name").and_then(Value::as_str)),
            _ if method.starts_with("notifications/") => Ok(Value::Null),
            _ => Err(WpError::MethodNotFound {
                kind: "method",
                name: method.to_string(),
            }),
        }
    }

    fn initialize(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "serverInfo": self.info,
            "capabilities": {
                "resources": {},
                "tools": {},
                "prompts": {}
            }
        })
    }

    /// `tools/list` result
    pub fn list_tools(&self) -> Value {
        json!({ "tools": tools::catalog(self.kb.whitepaper().subject()) })
    }

    /// `tools/call` result
    pub fn call_tool(&self, name: Option<&str>, arguments: Option<&Value>) -> Result<Value> {
        let name = name.ok_or_else(|| WpError::MissingParameter("name".to_string()))?;
        let call = ToolCall::parse(name, arguments.unwrap_or(&Value::Null))?;

        tracing::info!(target: "mcp", tool = call.name(), "Calling tool");
        let text = call.execute(&self.kb, &self.presentation)?;
        Ok(text_result(text))
    }
}

//! HTTP transport
//!
//! Endpoints:
//! - `GET  /health`
//! - `POST /tools/list`, `POST /tools/call` (`{ name, arguments }`)
//! - `POST /prompts/list`, `POST /prompts/get` (`{ name }`)
//! - `POST /rpc` (full JSON-RPC envelope)

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::{TcpListener, ToSocketAddrs};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use wp_common::{ErrorKind, WpError};

use crate::{prompts, JsonRpcError, JsonRpcRequest, JsonRpcResponse, WhitepaperServer};

type AppState = Arc<WhitepaperServer>;

pub fn create_router(server: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/tools/list", post(tools_list))
        .route("/tools/call", post(tools_call))
        .route("/prompts/list", post(prompts_list))
        .route("/prompts/get", post(prompts_get))
        .route("/rpc", post(rpc))
        // Middleware (applied in reverse order)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(server)
}

/// Serve until Ctrl-C
pub async fn serve(server: AppState, addr: impl ToSocketAddrs) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, create_router(server))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

/// Error body: `{ "error": { code, message, data? } }`
pub struct ApiError {
    status: StatusCode,
    error: JsonRpcError,
}

impl From<WpError> for ApiError {
    fn from(err: WpError) -> Self {
        let status = match err.kind() {
            ErrorKind::InvalidParams | ErrorKind::ParseError => StatusCode::BAD_REQUEST,
            ErrorKind::MethodNotFound => StatusCode::NOT_FOUND,
            ErrorKind::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {}", err);
        }
        Self {
            status,
            error: JsonRpcError::from_wp_error(&err),
        }
    }
}

/// Unreadable bodies keep axum's status (400, 415, 422) with a parse error body
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        Self {
            status: rejection.status(),
            error: JsonRpcError::parse_error(rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.error }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
struct ToolCallBody {
    name: Option<String>,
    #[serde(default)]
    arguments: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct PromptGetBody {
    name: Option<String>,
}

async fn health_check(State(server): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": format!(
            "{} MCP Server is running",
            server.knowledge_base().whitepaper().subject()
        ),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn tools_list(State(server): State<AppState>) -> Json<Value> {
    Json(server.list_tools())
}

async fn tools_call(
    State(server): State<AppState>,
    body: Result<Json<ToolCallBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = body?;
    let result = server.call_tool(body.name.as_deref(), body.arguments.as_ref())?;
    Ok(Json(result))
}

async fn prompts_list() -> Json<Value> {
    Json(prompts::list())
}

async fn prompts_get(
    body: Result<Json<PromptGetBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = body?;
    Ok(Json(prompts::get(body.name.as_deref())?))
}

/// JSON-RPC errors, including parse errors, travel in a 200 response body
async fn rpc(
    State(server): State<AppState>,
    request: Result<Json<JsonRpcRequest>, JsonRejection>,
) -> Response {
    let request = match request {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::error!("Failed to parse request: {}", rejection.body_text());
            let error = JsonRpcError::parse_error(rejection.body_text());
            return Json(JsonRpcResponse::failure(None, error)).into_response();
        }
    };

    match server.handle_request(request) {
        Some(response) => Json(response).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

//! MCP Server Binary Entry Point
//!
//! Serves the whitepaper over HTTP by default, or JSON-RPC 2.0 over
//! stdin/stdout with `--stdio`.

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use wp_config::Config;
use wp_core::KnowledgeBase;
use wp_mcp::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, WhitepaperServer};

#[derive(Debug, Parser)]
#[command(name = "wp_mcp", version, about = "Whitepaper MCP server")]
struct Args {
    /// Config file (default: wp.toml in the current directory, or $WP_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Speak JSON-RPC on stdin/stdout instead of HTTP
    #[arg(long)]
    stdio: bool,

    /// Override [server] host
    #[arg(long)]
    host: Option<String>,

    /// Override [server] port
    #[arg(long)]
    port: Option<u16>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON log lines
    #[arg(long)]
    json_logs: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    // Initialize tracing to stderr only (stdout reserved for JSON-RPC)
    wp_common::telemetry::init_tracing(
        args.verbose || config.logging.verbose,
        args.json_logs || config.logging.json,
    );

    let kb = match config.content_path() {
        Some(path) => KnowledgeBase::from_file(&path)
            .with_context(|| format!("Failed to load content from {:?}", path))?,
        None => KnowledgeBase::builtin().context("Built-in content is invalid")?,
    };
    tracing::info!(
        subject = kb.whitepaper().subject(),
        sections = kb.whitepaper().sections().len(),
        concepts = kb.glossary().len(),
        "Knowledge base loaded"
    );

    let server = Arc::new(WhitepaperServer::from_config(Arc::new(kb), &config));

    if args.stdio {
        run_stdio(&server);
        return Ok(());
    }

    let host = args.host.unwrap_or(config.server.host);
    let port = args.port.unwrap_or(config.server.port);

    let rt = Runtime::new().context("Failed to create Tokio runtime")?;
    rt.block_on(wp_mcp::http::serve(server, (host.as_str(), port)))
        .with_context(|| format!("HTTP server on {}:{} failed", host, port))?;

    tracing::info!("Whitepaper MCP server shutting down");
    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let explicit = args
        .config
        .clone()
        .or_else(|| std::env::var_os("WP_CONFIG").map(PathBuf::from));

    let config = match explicit {
        Some(path) => Config::from_file(&path)?,
        None => Config::load(&std::env::current_dir()?)?,
    };
    Ok(config)
}

/// Line-delimited JSON-RPC loop; returns when stdin closes
fn run_stdio(server: &WhitepaperServer) {
    tracing::info!("Whitepaper MCP server reading JSON-RPC from stdin");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut stdout_lock = stdout.lock();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::error!("Error reading stdin: {}", e);
                break;
            }
        };

        // Skip empty lines
        if line.trim().is_empty() {
            continue;
        }

        tracing::debug!("Received: {}", line);

        let response = match serde_json::from_str::<JsonRpcRequest>(&line) {
            Ok(request) => server.handle_request(request),
            Err(e) => {
                tracing::error!("Failed to parse request: {}", e);
                Some(JsonRpcResponse::failure(None, JsonRpcError::parse_error(e)))
            }
        };

        // Notifications don't get responses
        let Some(resp) = response else {
            continue;
        };

        let response_json = match serde_json::to_string(&resp) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize response: {}", e);
                continue;
            }
        };

        tracing::debug!("Sending: {}", response_json);

        if let Err(e) = writeln!(stdout_lock, "{}", response_json).and_then(|_| stdout_lock.flush()) {
            tracing::error!("Failed to write response: {}", e);
            break;
        }
    }

    tracing::info!("Whitepaper MCP server shutting down");
}

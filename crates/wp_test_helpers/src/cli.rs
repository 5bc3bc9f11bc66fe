//! Binary command builders for tests
//!
//! Provides pre-configured command builders with clean environments
//! to prevent log pollution and ensure consistent test execution.

use assert_cmd::Command;

/// Get a Command for the `wp_mcp` binary with clean environment
///
/// This command is pre-configured with:
/// - `RUST_LOG=error` to suppress INFO/DEBUG logs in tests
/// - `WP_CONFIG` removed so a user's config does not leak in
pub fn wp_mcp_command() -> Command {
    command_for("wp_mcp")
}

/// Get a Command for a specific binary with clean environment
///
/// # Arguments
///
/// * `bin_name` - Name of the binary (e.g., "wp_mcp")
#[allow(deprecated)]
pub fn command_for(bin_name: &str) -> Command {
    let mut cmd = Command::cargo_bin(bin_name)
        .unwrap_or_else(|_| panic!("Failed to find {} binary", bin_name));
    cmd.env("RUST_LOG", "error");
    cmd.env_remove("WP_CONFIG");
    cmd
}

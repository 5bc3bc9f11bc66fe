//! Shared test utilities for the whitepaper agent test suites
//!
//! # Modules
//!
//! - [`fixtures`]: Small substitute knowledge bases in the content-file JSON format
//! - [`workspace`]: Temp workspaces holding `wp.toml` and content files
//! - [`cli`]: Command builders with pre-configured environments
//! - [`logging`]: Test logging configuration
//! - [`assertions`]: Domain-specific assertion helpers
//!
//! # Example
//!
//! ```rust
//! use wp_test_helpers::prelude::*;
//!
//! let workspace = workspace_with_files(&[("paper.json", FIXTURE_JSON)]);
//! assert!(workspace.path().join("paper.json").exists());
//! ```

pub mod assertions;
pub mod cli;
pub mod fixtures;
pub mod logging;
pub mod workspace;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::cli::{command_for, wp_mcp_command};
    pub use crate::fixtures::{fixture_value, DUPLICATE_HEADINGS_JSON, FIXTURE_JSON};
    pub use crate::logging::{capture_logs, init_test_logging, suppress_logs};
    pub use crate::workspace::{temp_dir, workspace_with_config, workspace_with_files};
    pub use predicates::prelude::Predicate;
}

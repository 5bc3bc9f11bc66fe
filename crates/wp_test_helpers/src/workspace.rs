//! Workspace initialization utilities for tests
//!
//! Provides temp directories populated with `wp.toml` and content files.

use assert_fs::TempDir;
use std::fs;

/// Create a temporary directory for testing
///
/// The directory will be automatically cleaned up when the `TempDir` is dropped.
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Create a workspace with the given files
///
/// # Arguments
///
/// * `files` - Array of tuples (relative path, content)
///
/// # Example
///
/// ```rust
/// use wp_test_helpers::workspace::workspace_with_files;
///
/// let workspace = workspace_with_files(&[("content/paper.json", "{}")]);
/// assert!(workspace.path().join("content/paper.json").exists());
/// ```
pub fn workspace_with_files(files: &[(&str, &str)]) -> TempDir {
    let workspace = temp_dir();

    for (name, content) in files {
        let file_path = workspace.path().join(name);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write workspace file");
    }

    workspace
}

/// Create a workspace holding only a `wp.toml` with the given content
pub fn workspace_with_config(config_toml: &str) -> TempDir {
    workspace_with_files(&[("wp.toml", config_toml)])
}

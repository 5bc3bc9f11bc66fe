//! Common types and errors for the whitepaper agent
//!
//! This crate provides the error type shared by every other crate in the
//! workspace, plus logging setup.

pub mod telemetry;

use thiserror::Error;

/// Core error type for whitepaper operations
#[derive(Error, Debug)]
pub enum WpError {
    #[error("Missing {0} parameter")]
    MissingParameter(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Section \"{0}\" not found")]
    SectionNotFound(String),

    #[error("Concept \"{0}\" not found. Try searching the whitepaper instead.")]
    ConceptNotFound(String),

    #[error("Unknown {kind}: {name}")]
    MethodNotFound { kind: &'static str, name: String },

    #[error("Invalid content: {0}")]
    InvalidContent(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Protocol-level classification of a [`WpError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidParams,
    MethodNotFound,
    ParseError,
    InternalError,
}

impl ErrorKind {
    /// JSON-RPC 2.0 error code
    pub fn code(self) -> i32 {
        match self {
            ErrorKind::InvalidParams => -32602,
            ErrorKind::MethodNotFound => -32601,
            ErrorKind::ParseError => -32700,
            ErrorKind::InternalError => -32603,
        }
    }
}

impl WpError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WpError::MissingParameter(_)
            | WpError::InvalidParams(_)
            | WpError::SectionNotFound(_)
            | WpError::ConceptNotFound(_) => ErrorKind::InvalidParams,
            WpError::MethodNotFound { .. } => ErrorKind::MethodNotFound,
            WpError::JsonError(_) => ErrorKind::ParseError,
            WpError::InvalidContent(_)
            | WpError::ConfigError(_)
            | WpError::Internal(_)
            | WpError::IoError(_) => ErrorKind::InternalError,
        }
    }

    /// The lookup term a not-found error was raised for, if any
    pub fn term(&self) -> Option<&str> {
        match self {
            WpError::SectionNotFound(term) | WpError::ConceptNotFound(term) => Some(term),
            _ => None,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, WpError>;

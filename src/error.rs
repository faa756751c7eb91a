// src/error.rs

//! Unified error handling for the catalog application.

use std::fmt;

use thiserror::Error;

use crate::services::loader::LoadError;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// HTML template rendering failed
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Writing formatted output failed
    #[error("Format error: {0}")]
    Format(#[from] std::fmt::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Catalog or course list could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Content editor rejected an operation
    #[error("Editor error: {0}")]
    Editor(String),

    /// Requested section or item does not exist
    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an editor error.
    pub fn editor(message: impl fmt::Display) -> Self {
        Self::Editor(message.to_string())
    }

    /// Create a not-found error for the given kind of entity.
    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }
}

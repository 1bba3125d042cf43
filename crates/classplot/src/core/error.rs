//! Core error types for class graph compilation
//!
//! Registration and compilation failures are raised synchronously and are
//! fatal to the offending call. Introspection heuristics never produce an
//! error; they degrade to empty or absent values instead.

use thiserror::Error;

/// Core error types for class graph compilation
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Invalid class reference: {message}")]
    InvalidClassReference { message: String },

    #[error("Invalid namespace entry '{scope}': {message}")]
    InvalidNamespaceEntry { scope: String, message: String },

    #[error("Malformed scope key '{key}': {message}")]
    MalformedScopeKey { key: String, message: String },

    #[error("Model error: {message}")]
    ModelError { message: String },

    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl DiagramError {
    /// Create a new invalid class reference error
    pub fn invalid_class_reference(message: impl Into<String>) -> Self {
        Self::InvalidClassReference {
            message: message.into(),
        }
    }

    /// Create a new invalid namespace entry error
    pub fn invalid_namespace_entry(scope: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidNamespaceEntry {
            scope: scope.into(),
            message: message.into(),
        }
    }

    /// Create a new malformed scope key error
    pub fn malformed_scope_key(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedScopeKey {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a new model error
    pub fn model_error(message: impl Into<String>) -> Self {
        Self::ModelError {
            message: message.into(),
        }
    }
}

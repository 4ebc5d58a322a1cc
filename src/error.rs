//! Error types for idmap
//!
//! The identity lookups themselves never fail; these errors surface on the
//! surrounding paths (configuration, account enumeration, CLI input).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for idmap operations
pub type IdmapResult<T> = Result<T, IdmapError>;

/// All errors that can occur in idmap
#[derive(Error, Debug)]
pub enum IdmapError {
    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown config key: {0}")]
    ConfigKeyUnknown(String),

    // Account database errors
    #[error("Failed to read account database {path}: {source}")]
    AccountDbRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed entry in {path} at line {line}")]
    AccountDbMalformed { path: PathBuf, line: usize },

    #[error("Host directory query failed: {query}: {reason}")]
    Directory { query: String, reason: String },

    // Input errors
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl IdmapError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a host directory error
    pub fn directory(query: impl Into<String>, reason: impl ToString) -> Self {
        Self::Directory {
            query: query.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::ConfigInvalid { .. } => Some("Run: idmap config init --force"),
            Self::ConfigKeyUnknown(_) => Some(
                "Valid keys: general.log_format, mapping.salt, mapping.seed_from_host, \
                 mapping.passwd_path, mapping.group_path",
            ),
            Self::AccountDbRead { .. } => {
                Some("Use --no-seed or set mapping.passwd_path / mapping.group_path")
            }
            _ => None,
        }
    }
}

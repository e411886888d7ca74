//! Custom error types for Glotter.
//!
//! Configuration problems (unknown schemes, malformed `.glotter.yml`
//! sections) and data-format problems (malformed `testinfo.yml` documents or
//! templates) are kept apart so callers can tell a bad settings file from a
//! corrupt source tree.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Glotter operations
#[derive(Error, Debug)]
pub enum GlotterError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Failed to load configuration
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {reason}")]
    InvalidConfig { field: String, reason: String },

    /// Naming scheme outside the known set
    #[error("Unknown naming scheme: \"{value}\"")]
    UnknownNamingScheme { value: String },

    /// Acronym scheme outside the known set
    #[error("Unknown acronym scheme: \"{value}\"")]
    UnknownAcronymScheme { value: String },

    // =========================================================================
    // Data Format Errors
    // =========================================================================
    /// Malformed testinfo document or template
    #[error("Data format error: {message}")]
    DataFormat {
        message: String,
        path: Option<PathBuf>,
    },

    // =========================================================================
    // Wrapped Errors
    // =========================================================================
    /// IO error wrapper
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GlotterError {
    // =========================================================================
    // Constructor helpers
    // =========================================================================

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error with path
    pub fn config_with_path(message: impl Into<String>, path: PathBuf) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a data format error
    pub fn data_format(message: impl Into<String>) -> Self {
        Self::DataFormat {
            message: message.into(),
            path: None,
        }
    }

    /// Create a data format error with path
    pub fn data_format_with_path(message: impl Into<String>, path: PathBuf) -> Self {
        Self::DataFormat {
            message: message.into(),
            path: Some(path),
        }
    }

    /// Attach a path to a data format error that does not carry one yet.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn at_path(self, at: PathBuf) -> Self {
        match self {
            Self::DataFormat {
                message,
                path: None,
            } => Self::DataFormat {
                message,
                path: Some(at),
            },
            other => other,
        }
    }

    // =========================================================================
    // Classification helpers
    // =========================================================================

    /// Check if this error was caused by configuration
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Config { .. }
                | Self::InvalidConfig { .. }
                | Self::UnknownNamingScheme { .. }
                | Self::UnknownAcronymScheme { .. }
        )
    }

    /// Check if this error was caused by malformed metadata
    pub fn is_data_format(&self) -> bool {
        matches!(self, Self::DataFormat { .. })
    }

    /// Path associated with the error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Config { path, .. } | Self::DataFormat { path, .. } => path.as_ref(),
            _ => None,
        }
    }
}

/// Type alias for Glotter results
pub type Result<T> = std::result::Result<T, GlotterError>;

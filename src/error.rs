//! Error types for config and catalog loading
//!
//! Derivations never fail: an empty result is a valid outcome. Errors only
//! surface at the edges where files are read and parsed:
//! - RequiresUserAction: missing or malformed files, bad timezone names
//! - Internal: IO failures

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration or entity catalogs
#[derive(Debug, Error)]
pub enum DeskError {
    #[error("Config file not found at {0}")]
    ConfigNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Catalog file not found at {0}")]
    CatalogNotFound(PathBuf),

    #[error("Failed to parse {what}: {reason}")]
    ParseError { what: String, reason: String },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl DeskError {
    pub(crate) fn parse(what: impl Into<String>, reason: impl ToString) -> Self {
        DeskError::ParseError {
            what: what.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns true if the user has to fix a file or a setting to resolve this
    pub fn requires_user_action(&self) -> bool {
        !matches!(self, DeskError::IoError(_))
    }

    /// Get a user-friendly recovery suggestion
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DeskError::ConfigNotFound(_) => {
                "Create ~/.projectdesk/config.json or pass --config with a valid path."
            }
            DeskError::ConfigurationError(_) => "Check the values in ~/.projectdesk/config.json",
            DeskError::CatalogNotFound(_) => {
                "Verify catalogPath in your config, or remove it to use the sample data."
            }
            DeskError::ParseError { .. } => "Check the file is valid JSON in the expected format.",
            DeskError::InvalidCatalog(_) => "Fix the listed record in the catalog file.",
            DeskError::InvalidTimezone(_) => {
                "Use an IANA timezone name such as \"America/New_York\"."
            }
            DeskError::IoError(_) => "Check file permissions and disk space.",
        }
    }
}

impl From<std::io::Error> for DeskError {
    fn from(err: std::io::Error) -> Self {
        DeskError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for DeskError {
    fn from(err: serde_json::Error) -> Self {
        DeskError::parse("JSON", err)
    }
}

/// Serializable error representation for the rendering boundary
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
    pub message: String,
    pub error_type: ErrorType,
    pub recovery_suggestion: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorType {
    RequiresUserAction,
    Internal,
}

impl From<&DeskError> for CommandError {
    fn from(err: &DeskError) -> Self {
        let error_type = if err.requires_user_action() {
            ErrorType::RequiresUserAction
        } else {
            ErrorType::Internal
        };

        CommandError {
            message: err.to_string(),
            error_type,
            recovery_suggestion: err.recovery_suggestion().to_string(),
        }
    }
}

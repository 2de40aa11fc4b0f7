//! Unified error type.

use std::path::PathBuf;
use thiserror::Error;

use super::category::ErrorCategory;
use super::lead::LeadCaptureError;

#[derive(Debug, Error)]
pub enum StudyError {
    /// Raw mode, alternate screen or draw failure
    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment value that could not be parsed
    #[error("Invalid value for {key}: '{value}'")]
    Config { key: String, value: String },

    /// Conventional image asset present but unreadable
    #[error("Failed to read asset {}: {message}", path.display())]
    Asset { path: PathBuf, message: String },

    /// Search submitted with an empty or whitespace-only query
    #[error("Query must not be empty")]
    EmptyQuery,

    #[error(transparent)]
    Lead(#[from] LeadCaptureError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StudyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StudyError::Lead(_) | StudyError::EmptyQuery => ErrorCategory::User,
            StudyError::Config { .. } => ErrorCategory::Configuration,
            StudyError::Terminal(_)
            | StudyError::Io(_)
            | StudyError::Asset { .. }
            | StudyError::Json(_) => ErrorCategory::System,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = StudyError::Config {
            key: "STUDY_MONK_SEARCH_DELAY_MS".to_string(),
            value: "soon".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for STUDY_MONK_SEARCH_DELAY_MS: 'soon'"
        );
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_lead_error_is_transparent() {
        let err: StudyError = LeadCaptureError::EmptyEmail.into();
        assert_eq!(err.to_string(), "Please fill out this field.");
    }

    #[test]
    fn test_terminal_error_is_system() {
        assert_eq!(
            StudyError::Terminal("raw mode".into()).category(),
            ErrorCategory::System
        );
    }

    #[test]
    fn test_asset_error_shows_path() {
        let err = StudyError::Asset {
            path: PathBuf::from("public/hero.png"),
            message: "bad header".to_string(),
        };
        assert!(err.to_string().contains("public/hero.png"));
    }
}

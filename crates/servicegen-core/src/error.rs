//! Unified error handling for service-gen core.
//!
//! Wraps domain and application errors behind one root type with a
//! category and user-actionable suggestions.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for service-gen core operations.
#[derive(Debug, Error, Clone)]
pub enum ServiceGenError {
    /// Errors from the domain layer (validation, template syntax).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// A domain rule was violated by a specific input document.
    #[error("{}: {source}", path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: DomainError,
    },

    /// Errors from the application layer (I/O, parsing, template loading).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ServiceGenError {
    /// Attach the offending input document to a domain error.
    pub fn document(path: impl Into<PathBuf>, source: DomainError) -> Self {
        Self::Document {
            path: path.into(),
            source,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Document { path, source } => {
                let mut out = vec![format!("Fix the document at {}", path.display())];
                out.extend(source.suggestions());
                out
            }
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec!["This appears to be a bug in service-gen".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) | Self::Document { source: e, .. } => e.category().into(),
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

impl From<crate::domain::ErrorCategory> for ErrorCategory {
    fn from(category: crate::domain::ErrorCategory) -> Self {
        match category {
            crate::domain::ErrorCategory::Validation => Self::Validation,
            crate::domain::ErrorCategory::Template => Self::Configuration,
        }
    }
}

/// Convenient result type alias.
pub type ServiceGenResult<T> = Result<T, ServiceGenError>;

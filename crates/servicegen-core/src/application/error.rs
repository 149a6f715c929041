//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not rule
//! violations. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving the generation pipeline.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The input directory does not exist.
    #[error("Input directory not found: {}", path.display())]
    InputDirectoryNotFound { path: PathBuf },

    /// The reserved metadata document is missing.
    #[error("Metadata document not found: {}", path.display())]
    MetadataNotFound { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// A document could not be deserialized.
    #[error("Failed to parse {}: {reason}", path.display())]
    ParseFailed { path: PathBuf, reason: String },

    /// A replacement template could not be loaded.
    #[error("Failed to load template {}: {reason}", path.display())]
    TemplateLoad { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InputDirectoryNotFound { path } => vec![
                format!("Directory does not exist: {}", path.display()),
                "Pass the directory holding _meta.yaml and the service files".into(),
            ],
            Self::MetadataNotFound { path } => vec![
                format!("Create {}", path.display()),
                "It must list the targets:  targets: [{name: web, description: ...}]".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read/write permissions".into(),
                "Ensure the output directory is writable".into(),
            ],
            Self::ParseFailed { path, .. } => vec![
                format!("{} is not a valid YAML document", path.display()),
                "Files ending in .service are copied as-is; every other file is parsed".into(),
            ],
            Self::TemplateLoad { path, .. } => vec![
                format!("Check the template file at {}", path.display()),
                "Remove the [templates] entry to use the built-in template".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InputDirectoryNotFound { .. } | Self::MetadataNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::ParseFailed { .. } => ErrorCategory::Validation,
            Self::TemplateLoad { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}

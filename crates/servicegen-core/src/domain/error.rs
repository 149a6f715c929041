// ============================================================================
// domain/error.rs - DOCUMENT AND TEMPLATE RULE VIOLATIONS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Document Validation Errors
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Field '{field}' cannot contain a period (.): '{value}'")]
    IdentifierContainsPeriod { field: &'static str, value: String },

    #[error("Target {target} does not exist")]
    UndeclaredTarget {
        target: String,
        declared: Vec<String>,
    },

    #[error("Target '{name}' is declared more than once")]
    DuplicateTarget { name: String },

    // ========================================================================
    // Template Errors
    // ========================================================================
    #[error("Invalid {name} template: {reason}")]
    InvalidTemplate { name: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRequiredField { field } => vec![
                format!("Add a non-empty '{}' key", field),
                "Service documents need: cmd, dir, target, description, after".into(),
            ],
            Self::IdentifierContainsPeriod { field, value } => {
                let stem = value.split('.').next().unwrap_or(value);
                vec![
                    format!("'{}' is a unit name without its suffix", field),
                    format!("Example: {}: {}", field, stem),
                ]
            }
            Self::UndeclaredTarget { target, declared } => {
                let mut out = vec![format!("Declare '{}' under targets in _meta.yaml", target)];
                if declared.is_empty() {
                    out.push("No targets are declared yet".into());
                } else {
                    out.push(format!("Declared targets: {}", declared.join(", ")));
                }
                out
            }
            Self::DuplicateTarget { name } => vec![
                format!("Remove the repeated '{}' entry", name),
                "Each target name produces one .target file".into(),
            ],
            Self::InvalidTemplate { .. } => vec![
                "Placeholders look like {{NAME}} and must be closed".into(),
                "Check the templates configured under [templates]".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidTemplate { .. } => ErrorCategory::Template,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undeclared_target_lists_known_names() {
        let err = DomainError::UndeclaredTarget {
            target: "database".into(),
            declared: vec!["web".into(), "batch".into()],
        };
        assert_eq!(err.to_string(), "Target database does not exist");
        assert!(err.suggestions().iter().any(|s| s.contains("web, batch")));
    }

    #[test]
    fn period_suggestion_strips_suffix() {
        let err = DomainError::IdentifierContainsPeriod {
            field: "after",
            value: "network.target".into(),
        };
        assert!(err.suggestions().iter().any(|s| s == "Example: after: network"));
    }

    #[test]
    fn template_category() {
        let err = DomainError::InvalidTemplate {
            name: "target".into(),
            reason: "x".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Template);
        assert_eq!(
            DomainError::DuplicateTarget { name: "a".into() }.category(),
            ErrorCategory::Validation
        );
    }
}

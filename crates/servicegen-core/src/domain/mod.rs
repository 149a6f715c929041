//! Core domain layer for service-gen.
//!
//! Pure logic only: document shapes, validation rules, template parsing and
//! output path rules. All I/O goes through the ports in the application layer.
//!
//! - **No I/O**: no filesystem or environment access
//! - **No async**: everything is synchronous
//! - **Immutable entities**: all domain objects are Clone + PartialEq

pub mod entities;
pub mod error;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    layout::OutputLayout,
    meta::{DeclaredTargets, META_FILE_NAME, MetaDocument, TargetEntry},
    service::{ServiceDefinition, ServiceDocument, ServiceEntry},
    template::{RenderContext, UnitKind, UnitTemplate},
};

pub use error::{DomainError, ErrorCategory};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> ServiceDefinition {
        ServiceDefinition {
            command: "/usr/bin/app".into(),
            directory: "/srv/app".into(),
            target: "web".into(),
            description: "App".into(),
            after: "network".into(),
        }
    }

    fn declared() -> DeclaredTargets {
        ["web"].into_iter().collect()
    }

    // ========================================================================
    // Metadata
    // ========================================================================

    #[test]
    fn meta_with_targets_is_valid() {
        let meta = MetaDocument::new(vec![
            TargetEntry::new("web", "Web services"),
            TargetEntry::new("batch", "Batch jobs"),
        ]);
        assert!(DomainValidator::validate_meta(&meta).is_ok());
        assert_eq!(meta.targets().len(), 2);
    }

    #[test]
    fn meta_without_targets_key_is_invalid() {
        let err = DomainValidator::validate_meta(&MetaDocument::default()).unwrap_err();
        assert_eq!(err, DomainError::MissingRequiredField { field: "targets" });
    }

    #[test]
    fn empty_target_list_is_accepted() {
        let meta = MetaDocument::new(vec![]);
        assert!(DomainValidator::validate_meta(&meta).is_ok());
        assert!(meta.targets().is_empty());
    }

    #[test]
    fn target_entry_requires_description() {
        let meta = MetaDocument::new(vec![TargetEntry::new("web", "")]);
        assert_eq!(
            DomainValidator::validate_meta(&meta).unwrap_err(),
            DomainError::MissingRequiredField {
                field: "description"
            }
        );
    }

    #[test]
    fn duplicate_target_names_are_rejected() {
        let meta = MetaDocument::new(vec![
            TargetEntry::new("web", "one"),
            TargetEntry::new("web", "two"),
        ]);
        assert_eq!(
            DomainValidator::validate_meta(&meta).unwrap_err(),
            DomainError::DuplicateTarget { name: "web".into() }
        );
    }

    // ========================================================================
    // Services
    // ========================================================================

    #[test]
    fn valid_service_passes() {
        assert!(DomainValidator::validate_service(&app(), &declared()).is_ok());
    }

    #[test]
    fn first_missing_field_is_reported() {
        let svc = ServiceDefinition {
            directory: String::new(),
            after: String::new(),
            ..app()
        };
        assert_eq!(
            DomainValidator::validate_service(&svc, &declared()).unwrap_err(),
            DomainError::MissingRequiredField { field: "dir" }
        );
    }

    #[test]
    fn period_in_target_checked_before_existence() {
        let svc = ServiceDefinition {
            target: "web.target".into(),
            ..app()
        };
        assert_eq!(
            DomainValidator::validate_service(&svc, &declared()).unwrap_err(),
            DomainError::IdentifierContainsPeriod {
                field: "target",
                value: "web.target".into()
            }
        );
    }

    #[test]
    fn period_in_after_checked_before_existence() {
        let svc = ServiceDefinition {
            target: "database".into(),
            after: "network.target".into(),
            ..app()
        };
        assert!(matches!(
            DomainValidator::validate_service(&svc, &declared()).unwrap_err(),
            DomainError::IdentifierContainsPeriod { field: "after", .. }
        ));
    }

    #[test]
    fn undeclared_target_is_rejected() {
        let svc = ServiceDefinition {
            target: "database".into(),
            ..app()
        };
        assert_eq!(
            DomainValidator::validate_service(&svc, &declared()).unwrap_err(),
            DomainError::UndeclaredTarget {
                target: "database".into(),
                declared: vec!["web".into()],
            }
        );
    }

    #[test]
    fn broken_document_is_disabled() {
        let doc = ServiceDocument {
            broken: true,
            ..ServiceDocument::default()
        };
        assert_eq!(ServiceEntry::from(doc), ServiceEntry::Disabled);
    }

    #[test]
    fn enabled_document_keeps_fields() {
        let doc = ServiceDocument {
            command: "/usr/bin/app".into(),
            directory: "/srv/app".into(),
            target: "web".into(),
            description: "App".into(),
            after: "network".into(),
            broken: false,
        };
        assert_eq!(ServiceEntry::from(doc), ServiceEntry::Active(app()));
    }

    #[test]
    fn declared_targets_track_insertions() {
        let mut names = DeclaredTargets::new();
        assert!(names.is_empty());
        assert!(names.insert("web"));
        assert!(!names.insert("web"));
        assert!(names.contains("web"));
        assert!(!names.contains("db"));
        assert_eq!(names.len(), 1);
    }
}

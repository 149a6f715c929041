use crate::domain::{
    entities::{
        meta::{DeclaredTargets, MetaDocument},
        service::ServiceDefinition,
    },
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_meta(meta: &MetaDocument) -> Result<(), DomainError> {
        meta.validate()
    }

    pub fn validate_service(
        service: &ServiceDefinition,
        declared: &DeclaredTargets,
    ) -> Result<(), DomainError> {
        service.validate(declared)
    }
}

//! Service documents: the raw on-disk shape and the validated definition.

use serde::{Deserialize, Serialize};

use crate::domain::{entities::meta::DeclaredTargets, error::DomainError};

/// A service document exactly as written on disk.
///
/// Every key defaults to empty so that a missing key is reported by
/// [`ServiceDefinition::validate`] instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceDocument {
    #[serde(rename = "cmd")]
    pub command: String,
    #[serde(rename = "dir")]
    pub directory: String,
    pub target: String,
    pub description: String,
    pub after: String,
    /// Marks a service that is known not to work.
    #[serde(alias = "disabled")]
    pub broken: bool,
}

/// Outcome of classifying a parsed document, decided before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceEntry {
    Active(ServiceDefinition),
    Disabled,
}

impl From<ServiceDocument> for ServiceEntry {
    fn from(doc: ServiceDocument) -> Self {
        if doc.broken {
            return ServiceEntry::Disabled;
        }
        ServiceEntry::Active(ServiceDefinition {
            command: doc.command,
            directory: doc.directory,
            target: doc.target,
            description: doc.description,
            after: doc.after,
        })
    }
}

/// An enabled service; maps one-to-one onto a `.service` unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceDefinition {
    /// `ExecStart=`
    pub command: String,
    /// `WorkingDirectory=`
    pub directory: String,
    /// `PartOf=<target>.target`
    pub target: String,
    /// `Description=`
    pub description: String,
    /// `After=<after>.target`
    pub after: String,
}

impl ServiceDefinition {
    /// Check required fields, then identifier syntax, then the target reference.
    pub(crate) fn validate(&self, declared: &DeclaredTargets) -> Result<(), DomainError> {
        let required = [
            ("cmd", &self.command),
            ("dir", &self.directory),
            ("target", &self.target),
            ("description", &self.description),
            ("after", &self.after),
        ];
        if let Some(&(field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(DomainError::MissingRequiredField { field });
        }

        reject_period("target", &self.target)?;
        reject_period("after", &self.after)?;

        if !declared.contains(&self.target) {
            return Err(DomainError::UndeclaredTarget {
                target: self.target.clone(),
                declared: declared.iter().map(str::to_owned).collect(),
            });
        }

        Ok(())
    }
}

fn reject_period(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.contains('.') {
        return Err(DomainError::IdentifierContainsPeriod {
            field,
            value: value.to_owned(),
        });
    }
    Ok(())
}

//! Metadata document (`_meta.yaml`) and the declared-target set derived from it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Reserved file name of the metadata document inside an input directory.
pub const META_FILE_NAME: &str = "_meta.yaml";

/// The single per-run document that declares every valid target.
///
/// `targets` is an `Option` so that a missing key can be told apart from an
/// explicitly empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaDocument {
    #[serde(default)]
    pub targets: Option<Vec<TargetEntry>>,
}

/// One entry of `targets:`; becomes `<name>.target`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetEntry {
    pub name: String,
    pub description: String,
}

impl TargetEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_empty() {
            return Err(DomainError::MissingRequiredField { field: "name" });
        }
        if self.description.is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "description",
            });
        }
        Ok(())
    }
}

impl MetaDocument {
    pub fn new(targets: Vec<TargetEntry>) -> Self {
        Self {
            targets: Some(targets),
        }
    }

    /// Declared targets in input order; empty when the key was absent.
    pub fn targets(&self) -> &[TargetEntry] {
        self.targets.as_deref().unwrap_or_default()
    }

    /// Required-field and uniqueness checks.
    ///
    /// An empty list is accepted; it simply declares no targets.
    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        let targets = self
            .targets
            .as_ref()
            .ok_or(DomainError::MissingRequiredField { field: "targets" })?;

        let mut seen = BTreeSet::new();
        for entry in targets {
            entry.validate()?;
            if !seen.insert(entry.name.as_str()) {
                return Err(DomainError::DuplicateTarget {
                    name: entry.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Names recorded while emitting targets; the only state carried from the
/// metadata phase into service processing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclaredTargets {
    names: BTreeSet<String>,
}

impl DeclaredTargets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a name. Returns `false` if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for DeclaredTargets {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

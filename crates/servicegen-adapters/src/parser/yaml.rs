//! YAML document parser built on `serde_yaml`.

use std::path::Path;

use serde::de::DeserializeOwned;
use servicegen_core::{
    application::{ApplicationError, ports::DocumentParser},
    domain::{MetaDocument, ServiceDocument},
    error::ServiceGenResult,
};
use tracing::trace;

/// Parses metadata and service documents from YAML.
///
/// Unknown keys are ignored. An empty document parses as a document with
/// every field missing, which validation then reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser;

impl YamlParser {
    pub fn new() -> Self {
        Self
    }

    fn parse<T: DeserializeOwned + Default>(source: &Path, bytes: &[u8]) -> ServiceGenResult<T> {
        trace!(path = %source.display(), bytes = bytes.len(), "Parsing YAML");

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(T::default());
        }

        serde_yaml::from_slice(bytes).map_err(|e| {
            ApplicationError::ParseFailed {
                path: source.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl DocumentParser for YamlParser {
    fn parse_meta(&self, source: &Path, bytes: &[u8]) -> ServiceGenResult<MetaDocument> {
        Self::parse(source, bytes)
    }

    fn parse_service(&self, source: &Path, bytes: &[u8]) -> ServiceGenResult<ServiceDocument> {
        Self::parse(source, bytes)
    }
}

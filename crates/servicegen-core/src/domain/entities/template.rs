//! Unit templates and the values substituted into them.
//!
//! Templates use `{{VARIABLE}}` placeholders. They are parsed once into
//! literal/placeholder segments, so a malformed template is rejected when it is
//! loaded instead of when the first document is rendered.
//!
//! ## Variables
//!
//! | Kind      | Variables                                          |
//! |-----------|----------------------------------------------------|
//! | `target`  | `NAME`, `DESCRIPTION`                              |
//! | `service` | `COMMAND`, `DIRECTORY`, `TARGET`, `DESCRIPTION`, `AFTER` |

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::domain::{
    entities::{meta::TargetEntry, service::ServiceDefinition},
    error::DomainError,
};

/// The two unit types this tool writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Service,
    Target,
}

impl UnitKind {
    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Target => "target",
        }
    }

    /// Placeholders a template of this kind may reference.
    pub fn variables(self) -> &'static [&'static str] {
        match self {
            Self::Service => &["COMMAND", "DIRECTORY", "TARGET", "DESCRIPTION", "AFTER"],
            Self::Target => &["NAME", "DESCRIPTION"],
        }
    }

    /// `<stem>.<extension>`
    pub fn file_name(self, stem: &str) -> String {
        format!("{stem}.{}", self.extension())
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Values available to a template while rendering one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<&'static str, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variable(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.variables.insert(key, value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }
}

impl From<&TargetEntry> for RenderContext {
    fn from(target: &TargetEntry) -> Self {
        Self::new()
            .with_variable("NAME", &target.name)
            .with_variable("DESCRIPTION", &target.description)
    }
}

impl From<&ServiceDefinition> for RenderContext {
    fn from(service: &ServiceDefinition) -> Self {
        Self::new()
            .with_variable("COMMAND", &service.command)
            .with_variable("DIRECTORY", &service.directory)
            .with_variable("TARGET", &service.target)
            .with_variable("DESCRIPTION", &service.description)
            .with_variable("AFTER", &service.after)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(&'static str),
}

/// A parsed, known-good unit template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitTemplate {
    segments: Vec<Segment>,
}

impl UnitTemplate {
    /// Parse `source`, rejecting unclosed or unknown placeholders.
    pub fn parse(kind: UnitKind, source: &str) -> Result<Self, DomainError> {
        let invalid = |reason: String| DomainError::InvalidTemplate {
            name: kind.to_string(),
            reason,
        };

        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(open) = rest.find("{{") {
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_owned()));
            }
            let after_open = &rest[open + 2..];
            let close = after_open.find("}}").ok_or_else(|| {
                invalid(format!("unclosed placeholder at byte {}", offset + open))
            })?;

            let key = after_open[..close].trim();
            let known = kind
                .variables()
                .iter()
                .find(|v| **v == key)
                .ok_or_else(|| invalid(format!("unknown placeholder '{{{{{key}}}}}'")))?;
            segments.push(Segment::Placeholder(*known));

            let consumed = open + 2 + close + 2;
            offset += consumed;
            rest = &rest[consumed..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_owned()));
        }

        Ok(Self { segments })
    }

    /// Substitute every placeholder. Values are inserted verbatim and never
    /// re-scanned for placeholders.
    pub fn render(&self, ctx: &RenderContext) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(key) => out.push_str(ctx.get(key).unwrap_or_default()),
            }
        }
        out
    }
}

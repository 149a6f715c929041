//! Resolves which template text the renderer uses.
//!
//! Each unit kind falls back to its built-in template unless a replacement
//! file is configured:
//!
//! ```toml
//! [templates]
//! service = "/etc/service-gen/service.tmpl"
//! target  = "/etc/service-gen/target.tmpl"
//! ```

use std::path::{Path, PathBuf};

use servicegen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ServiceGenError, ServiceGenResult},
};
use tracing::{debug, instrument};

use crate::{
    builtin_templates::{SERVICE_TEMPLATE, TARGET_TEMPLATE},
    renderer::SimpleRenderer,
};

/// Optional replacement template files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSources {
    pub target: Option<PathBuf>,
    pub service: Option<PathBuf>,
}

impl TemplateSources {
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Load the configured templates and build a renderer from them.
    ///
    /// Fails if a file cannot be read, is not UTF-8, or contains a malformed
    /// placeholder.
    #[instrument(skip_all)]
    pub fn load(&self, filesystem: &dyn Filesystem) -> ServiceGenResult<SimpleRenderer> {
        let target = load_or(filesystem, self.target.as_deref(), TARGET_TEMPLATE)?;
        let service = load_or(filesystem, self.service.as_deref(), SERVICE_TEMPLATE)?;
        SimpleRenderer::from_sources(&target, &service).map_err(ServiceGenError::Domain)
    }
}

fn load_or(
    filesystem: &dyn Filesystem,
    path: Option<&Path>,
    builtin: &'static str,
) -> ServiceGenResult<String> {
    let Some(path) = path else {
        return Ok(builtin.to_owned());
    };

    debug!(path = %path.display(), "Loading template override");
    let bytes = filesystem.read_file(path).map_err(|e| ApplicationError::TemplateLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| {
        ApplicationError::TemplateLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryFilesystem;
    use servicegen_core::{application::ports::UnitRenderer, domain::TargetEntry};

    #[test]
    fn builtin_needs_no_files() {
        let renderer = TemplateSources::builtin()
            .load(&MemoryFilesystem::new())
            .unwrap();
        let text = renderer
            .render_target(&TargetEntry::new("web", "Web"))
            .unwrap();
        assert!(text.starts_with("[Unit]\nDescription=Web\n"));
    }

    #[test]
    fn override_file_replaces_builtin() {
        let fs = MemoryFilesystem::new().with_file("tpl/target.tmpl", "T={{NAME}}\n");
        let sources = TemplateSources {
            target: Some("tpl/target.tmpl".into()),
            service: None,
        };
        let renderer = sources.load(&fs).unwrap();
        let text = renderer
            .render_target(&TargetEntry::new("web", "Web"))
            .unwrap();
        assert_eq!(text, "T=web\n");
    }

    #[test]
    fn missing_override_is_a_template_load_error() {
        let sources = TemplateSources {
            target: None,
            service: Some("nope.tmpl".into()),
        };
        let err = sources.load(&MemoryFilesystem::new()).unwrap_err();
        assert!(matches!(
            err,
            ServiceGenError::Application(ApplicationError::TemplateLoad { .. })
        ));
    }

    #[test]
    fn malformed_override_is_a_domain_error() {
        let fs = MemoryFilesystem::new().with_file("svc.tmpl", "ExecStart={{COMMAND");
        let sources = TemplateSources {
            target: None,
            service: Some("svc.tmpl".into()),
        };
        let err = sources.load(&fs).unwrap_err();
        assert!(matches!(err, ServiceGenError::Domain(_)));
    }
}

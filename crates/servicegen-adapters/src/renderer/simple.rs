//! Placeholder-substitution renderer.

use servicegen_core::{
    application::ports::UnitRenderer,
    domain::{DomainError, RenderContext, ServiceDefinition, TargetEntry, UnitKind, UnitTemplate},
    error::ServiceGenResult,
};
use tracing::instrument;

use crate::builtin_templates::{SERVICE_TEMPLATE, TARGET_TEMPLATE};

/// Renders units from two pre-parsed templates.
///
/// Both templates are parsed at construction, so a malformed template is a
/// startup failure and `render_*` cannot fail on template syntax.
#[derive(Debug, Clone)]
pub struct SimpleRenderer {
    target: UnitTemplate,
    service: UnitTemplate,
}

impl SimpleRenderer {
    /// Renderer using the built-in templates.
    pub fn new() -> Result<Self, DomainError> {
        Self::from_sources(TARGET_TEMPLATE, SERVICE_TEMPLATE)
    }

    /// Renderer using caller-supplied template text.
    pub fn from_sources(target: &str, service: &str) -> Result<Self, DomainError> {
        Ok(Self {
            target: UnitTemplate::parse(UnitKind::Target, target)?,
            service: UnitTemplate::parse(UnitKind::Service, service)?,
        })
    }
}

impl UnitRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(target = %target.name))]
    fn render_target(&self, target: &TargetEntry) -> ServiceGenResult<String> {
        Ok(self.target.render(&RenderContext::from(target)))
    }

    #[instrument(skip_all, fields(target = %service.target))]
    fn render_service(&self, service: &ServiceDefinition) -> ServiceGenResult<String> {
        Ok(self.service.render(&RenderContext::from(service)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_target_unit() {
        let text = SimpleRenderer::new()
            .unwrap()
            .render_target(&TargetEntry::new("web", "Web services"))
            .unwrap();
        assert_eq!(
            text,
            "[Unit]\nDescription=Web services\n\n[Install]\nWantedBy=multi-user.target\n"
        );
    }

    #[test]
    fn builtin_service_unit() {
        let service = ServiceDefinition {
            command: "/usr/bin/app".into(),
            directory: "/srv/app".into(),
            target: "web".into(),
            description: "App".into(),
            after: "network".into(),
        };
        let text = SimpleRenderer::new().unwrap().render_service(&service).unwrap();
        assert_eq!(
            text,
            "[Unit]\n\
             Description=App\n\
             After=network.target\n\
             PartOf=web.target\n\
             \n\
             [Service]\n\
             WorkingDirectory=/srv/app\n\
             ExecStart=/usr/bin/app\n\
             \n\
             [Install]\n\
             WantedBy=web.target\n"
        );
    }

    #[test]
    fn custom_sources_are_used() {
        let renderer = SimpleRenderer::from_sources("# {{NAME}}\n", SERVICE_TEMPLATE).unwrap();
        let text = renderer
            .render_target(&TargetEntry::new("web", "x"))
            .unwrap();
        assert_eq!(text, "# web\n");
    }

    #[test]
    fn malformed_custom_template_fails_at_construction() {
        let err = SimpleRenderer::from_sources(TARGET_TEMPLATE, "ExecStart={{CMD}}").unwrap_err();
        assert!(matches!(err, DomainError::InvalidTemplate { ref name, .. } if name == "service"));
    }
}

//! service-gen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for `service-gen`,
//! the tool that turns YAML service definitions into systemd unit files.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        servicegen-cli (service-gen)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (GenerateService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, DocumentParser, Renderer) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    servicegen-adapters (Infrastructure) │
//! │ (LocalFilesystem, YamlParser, Simple..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ServiceDefinition, MetaDocument, ...)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use servicegen_core::application::{GenerateRequest, GenerateService};
//!
//! let service = GenerateService::new(parser, renderer, filesystem);
//! let report = service.generate(&GenerateRequest::new("units/"))?;
//! println!("{} files written", report.written_count());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateRequest, GenerateService, GenerationReport, ReportEntry,
        ports::{DocumentParser, Filesystem, UnitRenderer},
    };
    pub use crate::domain::{
        DeclaredTargets, MetaDocument, OutputLayout, RenderContext, ServiceDefinition,
        ServiceDocument, ServiceEntry, TargetEntry, UnitKind, UnitTemplate,
    };
    pub use crate::error::{ServiceGenError, ServiceGenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

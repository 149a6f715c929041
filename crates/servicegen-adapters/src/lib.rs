//! Infrastructure adapters for service-gen.
//!
//! This crate implements the ports defined in
//! `servicegen-core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod parser;
pub mod renderer;
pub mod template_loader;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use parser::YamlParser;
pub use renderer::SimpleRenderer;
pub use template_loader::TemplateSources;

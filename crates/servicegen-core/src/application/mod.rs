//! Application layer for service-gen.
//!
//! This layer contains:
//! - **Services**: the generation pipeline (`GenerateService`)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer sequences the domain layer but holds no rules of its
//! own. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{GenerateRequest, GenerateService, GenerationReport, ReportEntry};

// Re-export port traits (for adapter implementation)
pub use ports::{DocumentParser, Filesystem, UnitRenderer};

pub use error::ApplicationError;

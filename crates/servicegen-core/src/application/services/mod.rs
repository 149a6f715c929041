//! Application services - orchestrate use cases.

pub mod generate_service;
pub mod report;

pub use generate_service::{GenerateRequest, GenerateService};
pub use report::{GenerationReport, ReportEntry};

//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `servicegen-adapters` implement
//! these.
//!
//! ## Driven (Output) Ports
//!
//! - `Filesystem`: reading inputs, listing the input directory, writing units
//! - `DocumentParser`: YAML (or any other syntax) into schema types
//! - `UnitRenderer`: schema types into unit-file text

pub mod output;

pub use output::{DocumentParser, Filesystem, UnitRenderer};

#[cfg(test)]
pub use output::{MockDocumentParser, MockFilesystem, MockUnitRenderer};

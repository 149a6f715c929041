//! Record of what a generation run did, in processing order.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// One processed input (or target entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ReportEntry {
    /// `<name>.target` rendered from the metadata document.
    Target { name: String, output: PathBuf },
    /// `<stem>.service` rendered from a service document.
    Service { source: PathBuf, output: PathBuf },
    /// A pre-rendered unit copied verbatim.
    Copied { source: PathBuf, output: PathBuf },
    /// A document marked broken/disabled.
    Skipped { source: PathBuf },
}

impl ReportEntry {
    /// Output path, if this entry produced one.
    pub fn output(&self) -> Option<&Path> {
        match self {
            Self::Target { output, .. }
            | Self::Service { output, .. }
            | Self::Copied { output, .. } => Some(output),
            Self::Skipped { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// `true` when nothing was written.
    pub dry_run: bool,
    pub entries: Vec<ReportEntry>,
}

impl GenerationReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
    }

    /// Number of files written (or that would be, for a dry run).
    pub fn written_count(&self) -> usize {
        self.entries.iter().filter(|e| e.output().is_some()).count()
    }

    pub fn skipped(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().filter_map(|e| match e {
            ReportEntry::Skipped { source } => Some(source.as_path()),
            _ => None,
        })
    }
}

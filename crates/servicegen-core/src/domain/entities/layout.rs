//! Output path rules.

use std::path::{Path, PathBuf};

use crate::domain::entities::template::UnitKind;

/// Decides where every generated or copied file lands.
///
/// Without an override, outputs sit beside their inputs in the input
/// directory. With an override, every output is `<override>/<file name>`
/// regardless of where the input directory is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    input_dir: PathBuf,
    output_dir: Option<PathBuf>,
}

impl OutputLayout {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: Option<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir,
        }
    }

    /// Directory all outputs are written into.
    pub fn base(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or(&self.input_dir)
    }

    pub fn is_overridden(&self) -> bool {
        self.output_dir.is_some()
    }

    /// `<base>/<name>.target`
    pub fn target_path(&self, name: &str) -> PathBuf {
        self.base().join(UnitKind::Target.file_name(name))
    }

    /// `<base>/<input stem>.service`
    pub fn service_path(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        self.base().join(UnitKind::Service.file_name(&stem))
    }

    /// `<base>/<input file name>`
    pub fn passthrough_path(&self, input: &Path) -> PathBuf {
        match input.file_name() {
            Some(name) => self.base().join(name),
            None => self.base().to_path_buf(),
        }
    }
}

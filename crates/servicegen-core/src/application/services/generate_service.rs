//! Generate Service - main application orchestrator.
//!
//! Runs the whole pipeline for one input directory:
//! 1. Load and validate the metadata document
//! 2. Render every target, collecting the declared names
//! 3. For every other file: copy pre-rendered units, skip disabled
//!    documents, validate and render the rest
//!
//! The first error aborts the run. Files already written stay on disk.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{DocumentParser, Filesystem, UnitRenderer},
        services::report::{GenerationReport, ReportEntry},
    },
    domain::{
        DeclaredTargets, DomainValidator as validator, META_FILE_NAME, MetaDocument,
        OutputLayout, ServiceEntry, UnitKind,
    },
    error::{ServiceGenError, ServiceGenResult},
};

/// Parameters of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub input_dir: PathBuf,
    /// When set, every output goes directly into this directory.
    pub output_dir: Option<PathBuf>,
    /// File name of the metadata document inside `input_dir`.
    pub meta_file: String,
    /// Validate and render without writing anything.
    pub dry_run: bool,
}

impl GenerateRequest {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: None,
            meta_file: META_FILE_NAME.to_owned(),
            dry_run: false,
        }
    }

    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        self.output_dir = output_dir;
        self
    }

    pub fn with_meta_file(mut self, meta_file: impl Into<String>) -> Self {
        self.meta_file = meta_file.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn meta_path(&self) -> PathBuf {
        self.input_dir.join(&self.meta_file)
    }

    pub fn layout(&self) -> OutputLayout {
        OutputLayout::new(&self.input_dir, self.output_dir.clone())
    }
}

/// State of a single run, threaded through the processing steps.
struct Run {
    layout: OutputLayout,
    dry_run: bool,
    report: GenerationReport,
}

/// Main generation service.
pub struct GenerateService {
    parser: Box<dyn DocumentParser>,
    renderer: Box<dyn UnitRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    pub fn new(
        parser: Box<dyn DocumentParser>,
        renderer: Box<dyn UnitRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            parser,
            renderer,
            filesystem,
        }
    }

    /// Generate every unit for `request.input_dir`.
    #[instrument(
        skip_all,
        fields(
            input = %request.input_dir.display(),
            dry_run = request.dry_run
        )
    )]
    pub fn generate(&self, request: &GenerateRequest) -> ServiceGenResult<GenerationReport> {
        if !self.filesystem.exists(&request.input_dir) {
            return Err(ApplicationError::InputDirectoryNotFound {
                path: request.input_dir.clone(),
            }
            .into());
        }

        let mut run = Run {
            layout: request.layout(),
            dry_run: request.dry_run,
            report: GenerationReport::new(request.dry_run),
        };

        info!("Creating metadata for services");
        let meta_path = request.meta_path();
        let meta = self.load_meta(&meta_path)?;
        validator::validate_meta(&meta)
            .map_err(|e| ServiceGenError::document(&meta_path, e))?;

        if meta.targets().is_empty() {
            warn!(path = %meta_path.display(), "No targets declared; every service will be rejected");
        }

        if run.layout.is_overridden() && !run.dry_run {
            self.filesystem.create_dir_all(run.layout.base())?;
        }

        let declared = self.emit_targets(&meta, &mut run)?;

        for input in self.list_inputs(request)? {
            self.process_input(&input, &declared, &mut run)?;
        }

        info!(
            written = run.report.written_count(),
            "Generation completed successfully"
        );
        Ok(run.report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn load_meta(&self, path: &Path) -> ServiceGenResult<MetaDocument> {
        if !self.filesystem.exists(path) {
            return Err(ApplicationError::MetadataNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        let bytes = self.filesystem.read_file(path)?;
        self.parser.parse_meta(path, &bytes)
    }

    /// Render targets in declaration order and return the names they declare.
    fn emit_targets(
        &self,
        meta: &MetaDocument,
        run: &mut Run,
    ) -> ServiceGenResult<DeclaredTargets> {
        let mut declared = DeclaredTargets::new();

        for target in meta.targets() {
            let text = self.renderer.render_target(target)?;
            let output = run.layout.target_path(&target.name);
            self.write(&output, text.as_bytes(), run.dry_run)?;
            info!(output = %output.display(), "Generated target");

            declared.insert(target.name.as_str());
            run.report.push(ReportEntry::Target {
                name: target.name.clone(),
                output,
            });
        }

        Ok(declared)
    }

    /// Every file in the input directory except the metadata document.
    fn list_inputs(&self, request: &GenerateRequest) -> ServiceGenResult<Vec<PathBuf>> {
        let files = self.filesystem.list_files(&request.input_dir)?;
        Ok(files
            .into_iter()
            .filter(|p| p.file_name().is_none_or(|n| n != request.meta_file.as_str()))
            .collect())
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    fn process_input(
        &self,
        path: &Path,
        declared: &DeclaredTargets,
        run: &mut Run,
    ) -> ServiceGenResult<()> {
        if is_unit_file(path) {
            return self.copy_through(path, run);
        }

        debug!("Generating service");
        let bytes = self.filesystem.read_file(path)?;
        let document = self.parser.parse_service(path, &bytes)?;

        let service = match ServiceEntry::from(document) {
            ServiceEntry::Disabled => {
                warn!("Ignoring broken service");
                run.report.push(ReportEntry::Skipped {
                    source: path.to_path_buf(),
                });
                return Ok(());
            }
            ServiceEntry::Active(service) => service,
        };

        validator::validate_service(&service, declared)
            .map_err(|e| ServiceGenError::document(path, e))?;

        let text = self.renderer.render_service(&service)?;
        let output = run.layout.service_path(path);
        self.write(&output, text.as_bytes(), run.dry_run)?;
        info!(output = %output.display(), "Generated service");

        run.report.push(ReportEntry::Service {
            source: path.to_path_buf(),
            output,
        });
        Ok(())
    }

    /// Copy a pre-rendered unit unchanged.
    fn copy_through(&self, path: &Path, run: &mut Run) -> ServiceGenResult<()> {
        let output = run.layout.passthrough_path(path);

        // A stale copy of a unit generated earlier in this run must not win.
        if run.report.entries.iter().any(|e| e.output() == Some(output.as_path())) {
            debug!(output = %output.display(), "Generated this run, not copying");
            return Ok(());
        }

        if output == path {
            debug!("Unit already in place");
        } else {
            let bytes = self.filesystem.read_file(path)?;
            self.write(&output, &bytes, run.dry_run)?;
            info!(output = %output.display(), "Copied (already a unit file)");
        }

        run.report.push(ReportEntry::Copied {
            source: path.to_path_buf(),
            output,
        });
        Ok(())
    }

    fn write(&self, path: &Path, content: &[u8], dry_run: bool) -> ServiceGenResult<()> {
        if dry_run {
            debug!(path = %path.display(), bytes = content.len(), "Dry run, not writing");
            return Ok(());
        }
        self.filesystem.write_file(path, content)
    }
}

/// Already-rendered units (`.service`, `.target`) are copied, never parsed.
fn is_unit_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| {
        [UnitKind::Service, UnitKind::Target]
            .iter()
            .any(|kind| ext == kind.extension())
    })
}

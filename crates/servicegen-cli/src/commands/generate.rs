//! Implementation of a `service-gen <INPUT_DIR>` run.
//!
//! Responsibility: translate CLI arguments and config into a
//! `GenerateRequest`, wire the adapters into the core service, and display
//! the report. No business logic lives here.

use std::path::PathBuf;

use tracing::{debug, instrument};

use servicegen_adapters::{LocalFilesystem, YamlParser};
use servicegen_core::application::{GenerateRequest, GenerateService};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute a generation run.
///
/// Dispatch sequence:
/// 1. Reject an empty input directory argument
/// 2. Load templates (a malformed template aborts before any document)
/// 3. Run the core pipeline
/// 4. Print the report
#[instrument(skip_all, fields(input = %args.input_dir))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if args.input_dir.is_empty() {
        return Err(CliError::Usage {
            message: "INPUT_DIR must not be empty".into(),
        });
    }

    let request = build_request(&args, &config);
    debug!(
        output_dir = ?request.output_dir,
        meta_file = %request.meta_file,
        dry_run = request.dry_run,
        "Request resolved"
    );

    let filesystem = LocalFilesystem::new();
    let renderer = config.template_sources().load(&filesystem)?;

    let service = GenerateService::new(
        Box::new(YamlParser::new()),
        Box::new(renderer),
        Box::new(filesystem),
    );

    if output.format() != OutputFormat::Json {
        output.header(&format!(
            "Generating units from {}",
            request.input_dir.display()
        ))?;
    }

    let report = service.generate(&request)?;
    output.report(&report)
}

/// Merge CLI arguments over config values.
///
/// An empty `--output-dir` / `OUTPUT_DIR` counts as unset.
fn build_request(args: &GenerateArgs, config: &AppConfig) -> GenerateRequest {
    let output_dir = args
        .output_dir
        .as_deref()
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| config.output_dir().map(PathBuf::from));

    let meta_file = args
        .meta_file
        .clone()
        .unwrap_or_else(|| config.generator.meta_file.clone());

    GenerateRequest::new(&args.input_dir)
        .with_output_dir(output_dir)
        .with_meta_file(meta_file)
        .with_dry_run(args.dry_run)
}

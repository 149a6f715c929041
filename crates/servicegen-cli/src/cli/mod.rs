//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "service-gen",
    bin_name = "service-gen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate systemd units from YAML service definitions",
    long_about = "service-gen reads _meta.yaml and every service document in \
                  INPUT_DIR and writes one .target per declared target and one \
                  .service per enabled service. Files already ending in .service \
                  or .target are copied unchanged.",
    after_help = "EXAMPLES:\n\
        \x20 service-gen ./units\n\
        \x20 OUTPUT_DIR=/etc/systemd/system service-gen ./units\n\
        \x20 service-gen ./units --dry-run --output-format json",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Logging and presentation flags.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// What to generate and where.
    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Arguments for a generation run.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Directory holding `_meta.yaml` and the service documents.
    ///
    /// Kept as a `String` so that an explicitly empty argument reaches the
    /// usage check instead of being rejected by the path parser.
    #[arg(value_name = "INPUT_DIR", help = "Directory with _meta.yaml and service files")]
    pub input_dir: String,

    /// Write every output into this directory instead of beside its input.
    #[arg(
        short = 'o',
        long = "output-dir",
        env = "OUTPUT_DIR",
        value_name = "DIR",
        help = "Directory to write units into"
    )]
    pub output_dir: Option<String>,

    /// Name of the metadata document inside INPUT_DIR.
    #[arg(
        long = "meta-file",
        value_name = "NAME",
        help = "Metadata file name [default: _meta.yaml]"
    )]
    pub meta_file: Option<String>,

    /// Validate and render without writing.
    #[arg(short = 'n', long = "dry-run", help = "Validate and render, write nothing")]
    pub dry_run: bool,
}

//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--output-dir` / `OUTPUT_DIR`, `--meta-file`), applied at
//!    the call-site
//! 2. `SERVICE_GEN_*` environment variables, `__` between nested keys
//!    (`SERVICE_GEN_GENERATOR__META_FILE=targets.yaml`)
//! 3. Config file (`--config FILE`, else the platform config dir)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use servicegen_adapters::TemplateSources;
use servicegen_core::domain::META_FILE_NAME;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Input and output locations.
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
    /// Replacement unit templates.
    #[serde(default)]
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Name of the metadata document inside the input directory.
    pub meta_file: String,
    /// Fallback output directory when neither `--output-dir` nor
    /// `OUTPUT_DIR` is set.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            meta_file: META_FILE_NAME.to_owned(),
            output_dir: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateConfig {
    #[serde(default)]
    pub service: Option<PathBuf>,
    #[serde(default)]
    pub target: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = GeneratorConfig::default();

        let file = match config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Self::config_path()).required(false),
        };

        Config::builder()
            .set_default("generator.meta_file", defaults.meta_file)?
            .set_default("output.no_color", false)?
            .add_source(file)
            .add_source(
                Environment::with_prefix("SERVICE_GEN")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.service-gen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "service-gen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".service-gen.toml"))
    }

    /// Replacement templates to hand to the renderer.
    pub fn template_sources(&self) -> TemplateSources {
        TemplateSources {
            target: self.templates.target.clone(),
            service: self.templates.service.clone(),
        }
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.generator.output_dir.as_deref()
    }
}

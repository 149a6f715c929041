//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use servicegen_core::application::{GenerationReport, ReportEntry};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliResult, IntoCli};

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Print the outcome of a generation run.
    ///
    /// JSON is written even in quiet mode; it is the requested output, not
    /// chatter.
    pub fn report(&self, report: &GenerationReport) -> CliResult<()> {
        if self.resolved_format == OutputFormat::Json {
            let json = serde_json::to_string_pretty(report)
                .with_cli_context(|| "Failed to serialize report")?;
            return self
                .term
                .write_line(&json)
                .with_cli_context(|| "Failed to write report to stdout");
        }

        for line in report_lines(report) {
            match line {
                Line::Done(msg) => self.success(&msg)?,
                Line::Skipped(msg) => self.warning(&msg)?,
            }
        }

        let verb = if report.dry_run { "would be written" } else { "written" };
        self.info(&format!("{} file(s) {verb}", report.written_count()))?;
        Ok(())
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

enum Line {
    Done(String),
    Skipped(String),
}

fn report_lines(report: &GenerationReport) -> Vec<Line> {
    let prefix = if report.dry_run { "Would write" } else { "Wrote" };
    report
        .entries
        .iter()
        .map(|entry| match entry {
            ReportEntry::Target { output, .. } | ReportEntry::Service { output, .. } => {
                Line::Done(format!("{prefix} {}", output.display()))
            }
            ReportEntry::Copied { source, output } if source == output => {
                Line::Done(format!("Kept {} (already a unit file)", source.display()))
            }
            ReportEntry::Copied { source, output } => Line::Done(format!(
                "{prefix} {} (copied from {})",
                output.display(),
                source.display()
            )),
            ReportEntry::Skipped { source } => {
                Line::Skipped(format!("Ignored broken service {}", source.display()))
            }
        })
        .collect()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn make_manager(quiet: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color: true,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn sample_report(dry_run: bool) -> GenerationReport {
        let mut report = GenerationReport::new(dry_run);
        report.push(ReportEntry::Target {
            name: "web".into(),
            output: PathBuf::from("units/web.target"),
        });
        report.push(ReportEntry::Service {
            source: PathBuf::from("units/app.yaml"),
            output: PathBuf::from("units/app.service"),
        });
        report.push(ReportEntry::Copied {
            source: PathBuf::from("units/legacy.service"),
            output: PathBuf::from("units/legacy.service"),
        });
        report.push(ReportEntry::Skipped {
            source: PathBuf::from("units/old.yaml"),
        });
        report
    }

    fn texts(lines: Vec<Line>) -> Vec<String> {
        lines
            .into_iter()
            .map(|l| match l {
                Line::Done(s) => format!("ok {s}"),
                Line::Skipped(s) => format!("skip {s}"),
            })
            .collect()
    }

    #[test]
    fn report_lines_follow_processing_order() {
        assert_eq!(
            texts(report_lines(&sample_report(false))),
            vec![
                "ok Wrote units/web.target",
                "ok Wrote units/app.service",
                "ok Kept units/legacy.service (already a unit file)",
                "skip Ignored broken service units/old.yaml",
            ]
        );
    }

    #[test]
    fn dry_run_lines_say_would_write() {
        let lines = texts(report_lines(&sample_report(true)));
        assert_eq!(lines[0], "ok Would write units/web.target");
    }

    #[test]
    fn quiet_plain_report_is_ok() {
        let out = make_manager(true, OutputFormat::Plain);
        assert!(out.report(&sample_report(false)).is_ok());
    }

    #[test]
    fn format_accessor_returns_resolved() {
        let out = make_manager(false, OutputFormat::Plain);
        assert_eq!(out.format(), OutputFormat::Plain);
    }
}

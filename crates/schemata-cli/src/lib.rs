//! Schemata CLI library
//!
//! This module contains the batch logic of the `schemata` command: it renders
//! a category of the Tourmate catalog into an output directory, one file per
//! diagram.

pub mod catalog;
pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Category, Format};
pub use error_adapter::{ErrorAdapter, render_report};

use std::path::{Path, PathBuf};

use log::{error, info};

use schemata::{DiagramRenderer, SchemataError, descriptor::Diagram, export::OutputFormat};

/// A diagram that could not be rendered.
#[derive(Debug)]
pub struct BatchFailure {
    name: String,
    path: PathBuf,
    error: SchemataError,
}

impl BatchFailure {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn error(&self) -> &SchemataError {
        &self.error
    }

    /// The miette report for this failure, headed by the diagram name.
    pub fn report(&self) -> String {
        format!(
            "Could not generate {}\n{}",
            self.name,
            render_report(&self.error)
        )
    }
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    succeeded: Vec<PathBuf>,
    failed: Vec<BatchFailure>,
}

impl BatchReport {
    /// Files written, in render order.
    pub fn succeeded(&self) -> &[PathBuf] {
        &self.succeeded
    }

    pub fn failed(&self) -> &[BatchFailure] {
        &self.failed
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// One line counting written and failed diagrams.
    pub fn summary(&self) -> String {
        let total = self.succeeded.len() + self.failed.len();
        if self.is_success() {
            format!("Generated {total} of {total} diagrams")
        } else {
            format!(
                "Generated {} of {total} diagrams, {} failed",
                self.succeeded.len(),
                self.failed.len()
            )
        }
    }
}

/// Renders every diagram to `<output_dir>/<name>.<format>`.
///
/// A failing diagram is logged and recorded in the report; the remaining
/// diagrams are still rendered.
pub fn run_batch(
    renderer: &DiagramRenderer,
    diagrams: &[Diagram],
    output_dir: &Path,
    format: OutputFormat,
) -> BatchReport {
    let mut report = BatchReport::default();

    for diagram in diagrams {
        let path = output_dir.join(format!("{}.{}", diagram.name(), format.extension()));
        match renderer.render_diagram(diagram, &path) {
            Ok(()) => {
                info!(name = diagram.name(), path:? = path; "Generated diagram");
                report.succeeded.push(path);
            }
            Err(err) => {
                error!(name = diagram.name(), err:err; "Failed to generate diagram");
                report.failed.push(BatchFailure {
                    name: diagram.name().to_string(),
                    path,
                    error: err,
                });
            }
        }
    }

    info!(
        succeeded = report.succeeded.len(),
        failed = report.failed.len();
        "Batch finished"
    );
    report
}

/// Run the Schemata CLI application
///
/// Loads the configuration and renders the selected catalog category into
/// `args.output_dir`.
///
/// # Errors
///
/// Returns [`SchemataError::Config`] if the configuration cannot be loaded.
/// Failures of individual diagrams are reported in the [`BatchReport`]
/// instead.
pub fn run(args: &Args) -> Result<BatchReport, SchemataError> {
    info!(
        category:? = args.category,
        output_dir = args.output_dir,
        format:? = args.format;
        "Generating diagrams"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let renderer = DiagramRenderer::new(app_config);
    let diagrams = catalog::diagrams(args.category);

    Ok(run_batch(
        &renderer,
        &diagrams,
        Path::new(&args.output_dir),
        args.format.into(),
    ))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::{NamedTempFile, tempdir};

    use schemata::descriptor::{ShapeDescriptor, ShapeKind};

    use super::*;

    fn sample(name: &str, width: f32) -> Diagram {
        Diagram::new(name, "Sample").with_shapes([ShapeDescriptor::new(
            ShapeKind::Process,
            0.0,
            0.0,
            width,
            0.8,
            "Step",
            "#4ECDC4",
        )])
    }

    #[test]
    fn test_batch_continues_after_failure() {
        let dir = tempdir().unwrap();
        let diagrams = [sample("broken", 0.0), sample("fine", 2.0)];

        let report = run_batch(
            &DiagramRenderer::default(),
            &diagrams,
            dir.path(),
            OutputFormat::Svg,
        );

        assert!(!report.is_success());
        assert_eq!(report.succeeded(), [dir.path().join("fine.svg")]);
        assert_eq!(report.failed().len(), 1);

        let failure = &report.failed()[0];
        assert_eq!(failure.name(), "broken");
        assert_eq!(failure.path(), dir.path().join("broken.svg"));
        assert!(matches!(
            failure.error(),
            SchemataError::InvalidShape { index: 0, .. }
        ));
        assert!(!failure.path().exists());
    }

    #[test]
    fn test_failure_report_and_summary() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        let diagrams = [sample("first", 2.0), sample("second", 2.0)];

        let report = run_batch(
            &DiagramRenderer::default(),
            &diagrams,
            &missing,
            OutputFormat::Svg,
        );

        assert_eq!(report.summary(), "Generated 0 of 2 diagrams, 2 failed");
        let text = report.failed()[1].report();
        assert!(text.starts_with("Could not generate second\n"));
        assert!(text.contains("writable"));
    }

    #[test]
    fn test_summary_for_successful_batch() {
        let dir = tempdir().unwrap();
        let report = run_batch(
            &DiagramRenderer::default(),
            &[sample("fine", 2.0)],
            dir.path(),
            OutputFormat::Svg,
        );

        assert_eq!(report.summary(), "Generated 1 of 1 diagrams");
    }

    #[test]
    fn test_run_renders_category() {
        let dir = tempdir().unwrap();
        let output_dir = dir.path().to_string_lossy().into_owned();
        let args = Args::try_parse_from([
            "schemata",
            "flowcharts",
            "--format",
            "svg",
            "--output-dir",
            &output_dir,
        ])
        .unwrap();

        let report = run(&args).unwrap();
        assert!(report.is_success(), "{:?}", report.failed());
        assert_eq!(report.succeeded().len(), 4);
        assert!(dir.path().join("authentication_flowchart.svg").exists());
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[canvas]\nscale = 0.0").unwrap();
        let config_path = file.path().to_string_lossy().into_owned();

        let args = Args::try_parse_from(["schemata", "--config", &config_path]).unwrap();
        let err = run(&args).unwrap_err();
        assert!(matches!(err, SchemataError::Config(_)));
    }
}

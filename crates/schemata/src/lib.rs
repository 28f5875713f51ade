//! Schemata - descriptor-driven rendering of flowcharts and architecture diagrams.
//!
//! A diagram is a declarative list of shapes, connectors and text. The
//! [`DiagramRenderer`] validates the descriptors, paints them onto a canvas
//! and writes one PNG or SVG file per call.

pub mod canvas;
pub mod config;
pub mod descriptor;
pub mod export;

mod error;

pub use schemata_core::{color, draw, geometry};

pub use error::SchemataError;

use std::{fs, path::Path};

use log::{debug, error, info, trace};

use canvas::Canvas;
use config::AppConfig;
use descriptor::{ConnectorDescriptor, Diagram, ShapeDescriptor};
use export::{Exporter, OutputFormat};

/// Renders diagram descriptors to image files.
///
/// # Examples
///
/// ```rust,no_run
/// use schemata::{
///     DiagramRenderer,
///     descriptor::{ConnectorDescriptor, ShapeDescriptor, ShapeKind},
/// };
///
/// let start = ShapeDescriptor::new(ShapeKind::Terminal, 0.0, 0.0, 2.0, 0.8, "START", "#FF6B6B");
/// let step = ShapeDescriptor::new(ShapeKind::Process, 0.0, -2.0, 2.0, 0.8, "Step", "#4ECDC4");
/// let arrow = ConnectorDescriptor::new((0.0, -0.4), (0.0, -1.6));
///
/// let renderer = DiagramRenderer::default();
/// renderer
///     .render(&[start, step], &[arrow], "Example", "example.png")
///     .expect("Failed to render");
/// ```
#[derive(Debug, Default)]
pub struct DiagramRenderer {
    config: AppConfig,
}

impl DiagramRenderer {
    /// Create a new renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Render shapes and connectors under `title` to `output_path`.
    ///
    /// The format follows the file extension (`.png` or `.svg`).
    ///
    /// # Errors
    ///
    /// See [`DiagramRenderer::render_diagram`].
    pub fn render(
        &self,
        shapes: &[ShapeDescriptor],
        connectors: &[ConnectorDescriptor],
        title: &str,
        output_path: impl AsRef<Path>,
    ) -> Result<(), SchemataError> {
        let output_path = output_path.as_ref();
        let name = output_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        let diagram = Diagram::new(name, title)
            .with_shapes(shapes.iter().cloned())
            .with_connectors(connectors.iter().cloned());

        self.render_diagram(&diagram, output_path)
    }

    /// Render a complete diagram to `output_path`.
    ///
    /// Every descriptor is validated before anything is drawn, and nothing is
    /// written unless rendering succeeds.
    ///
    /// # Errors
    ///
    /// - [`SchemataError::InvalidShape`] and the other descriptor variants for
    ///   bad input.
    /// - [`SchemataError::Render`] for an unsupported extension or a failed
    ///   export.
    /// - [`SchemataError::DependencyMissing`] for `.png` when the `png`
    ///   feature is disabled.
    /// - [`SchemataError::Io`] if the file cannot be written.
    pub fn render_diagram(
        &self,
        diagram: &Diagram,
        output_path: impl AsRef<Path>,
    ) -> Result<(), SchemataError> {
        let output_path = output_path.as_ref();
        let format = OutputFormat::from_path(output_path)?;

        info!(name = diagram.name(), format:% = format; "Rendering diagram");
        let bytes = self.render_bytes(diagram, format)?;

        debug!(path:? = output_path, bytes = bytes.len(); "Writing output file");
        fs::write(output_path, &bytes).map_err(|err| {
            error!(path:? = output_path, err:err; "Failed to write output file");
            SchemataError::Io {
                path: output_path.to_path_buf(),
                source: err,
            }
        })?;

        info!(path:? = output_path; "Diagram written");
        Ok(())
    }

    /// Render a diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns descriptor errors from validation.
    pub fn render_svg(&self, diagram: &Diagram) -> Result<String, SchemataError> {
        let document = self.build_document(diagram)?;
        Ok(document.to_string())
    }

    /// Render a diagram to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns descriptor errors from validation,
    /// [`SchemataError::DependencyMissing`] without the `png` feature, or
    /// [`SchemataError::Render`] if rasterizing fails.
    pub fn render_png(&self, diagram: &Diagram) -> Result<Vec<u8>, SchemataError> {
        self.render_bytes(diagram, OutputFormat::Png)
    }

    fn render_bytes(
        &self,
        diagram: &Diagram,
        format: OutputFormat,
    ) -> Result<Vec<u8>, SchemataError> {
        let exporter = self.exporter(format)?;
        let document = self.build_document(diagram)?;
        Ok(exporter.export_document(&document)?)
    }

    fn exporter(&self, format: OutputFormat) -> Result<Box<dyn Exporter>, SchemataError> {
        match format {
            OutputFormat::Svg => Ok(Box::new(export::svg::SvgExporter::new())),
            #[cfg(feature = "png")]
            OutputFormat::Png => Ok(Box::new(export::png::PngExporter::new(
                self.config.canvas().pixel_ratio(),
            ))),
            #[cfg(not(feature = "png"))]
            OutputFormat::Png => Err(SchemataError::DependencyMissing {
                backend: "png",
                feature: "png",
            }),
        }
    }

    fn build_document(&self, diagram: &Diagram) -> Result<svg::Document, SchemataError> {
        self.config.validate().map_err(SchemataError::Config)?;
        diagram.validate()?;
        debug!(
            shapes = diagram.shapes().len(),
            connectors = diagram.connectors().len(),
            annotations = diagram.annotations().len();
            "Descriptors validated"
        );

        let mut canvas = Canvas::new(&self.config)?;
        for (index, shape) in diagram.shapes().iter().enumerate() {
            canvas.draw_shape(index, shape)?;
        }
        for (index, connector) in diagram.connectors().iter().enumerate() {
            canvas.draw_connector(index, connector)?;
        }
        for (index, annotation) in diagram.annotations().iter().enumerate() {
            canvas.draw_annotation(index, annotation)?;
        }
        canvas.draw_legend(diagram.legend())?;
        canvas.draw_title(diagram.title());

        let bounds = canvas.document_bounds();
        trace!(bounds:?; "Canvas bounds");
        if !bounds.is_finite() {
            return Err(SchemataError::Render(format!(
                "document bounds {bounds:?} are not finite"
            )));
        }
        Ok(canvas.into_document())
    }
}

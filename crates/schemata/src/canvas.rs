//! The drawing surface a diagram is painted on.
//!
//! [`Canvas`] projects descriptors from Y-up diagram units into Y-down SVG
//! pixels, draws each one with the core primitives into a [`LayeredOutput`],
//! and tracks the bounds of everything drawn. [`Canvas::into_document`] grows
//! the bounds by the configured margin and assembles the final SVG document.

use std::rc::Rc;

use log::{debug, trace};
use svg::{self, node::element as svg_element};

use schemata_core::{
    color::Color,
    draw::{
        Arrow, ArrowWithText, ArrowWithTextDrawer, Drawable, LabelPosition, LayeredOutput,
        PositionedDrawable, RenderLayer, Shape, ShapeDefinition, ShapeWithText, StrokeDefinition,
        Text, TextAnchor, TextDefinition, shape::CircleDefinition,
    },
    geometry::{Bounds, Insets, Point, Size},
};

use crate::{
    SchemataError,
    config::AppConfig,
    descriptor::{
        ConnectorDescriptor, LabelAnchor, LegendEntry, ShapeDescriptor, TextAlign,
        TextAnnotation,
    },
};

/// Vertical and horizontal padding around connector labels, in pixels.
const CONNECTOR_LABEL_PADDING: (f32, f32) = (2.0, 4.0);
/// Opacity of the white box behind connector labels.
const CONNECTOR_LABEL_BACKGROUND_ALPHA: f32 = 0.8;
/// Gap between the content and the title, in pixels.
const TITLE_GAP: f32 = 16.0;

const LEGEND_FONT_SIZE: u16 = 9;
const LEGEND_SWATCH: f32 = 12.0;
const LEGEND_ROW_GAP: f32 = 6.0;
const LEGEND_PADDING: f32 = 8.0;
/// Gap between the legend frame and the content to its right, in pixels.
const LEGEND_GAP: f32 = 16.0;

/// Maps Y-up diagram units to Y-down SVG pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    scale: f32,
}

impl Projection {
    /// Creates a projection with `scale` pixels per unit.
    pub fn new(scale: f32) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Projects a point, flipping the Y axis. Also used for displacements.
    pub fn point(&self, point: Point) -> Point {
        Point::new(point.x() * self.scale, -point.y() * self.scale)
    }

    pub fn size(&self, size: Size) -> Size {
        size.scale(self.scale)
    }

    /// Projects an axis-aligned box; the top edge in units becomes `min_y`.
    pub fn bounds(&self, bounds: Bounds) -> Bounds {
        let top_left = self.point(Point::new(bounds.min_x(), bounds.max_y()));
        Bounds::new_from_top_left(top_left, self.size(bounds.to_size()))
    }
}

/// Everything the canvas takes from the configuration, parsed once.
#[derive(Debug, Clone)]
struct CanvasStyle {
    margin: f32,
    background: Color,
    font_family: String,
    mono_font_family: String,
    title_font_size: u16,
    connector_color: Color,
    connector_width: f32,
}

impl CanvasStyle {
    fn from_config(config: &AppConfig) -> Result<Self, SchemataError> {
        let canvas = config.canvas();
        let style = config.style();
        Ok(Self {
            margin: canvas.margin(),
            background: canvas.background_color().map_err(SchemataError::Config)?,
            font_family: style.font_family().to_string(),
            mono_font_family: style.mono_font_family().to_string(),
            title_font_size: style.title_font_size(),
            connector_color: style.connector_color().map_err(SchemataError::Config)?,
            connector_width: style.connector_width(),
        })
    }
}

/// The output surface of one render call.
///
/// Elements are drawn immediately; the canvas only keeps their SVG nodes, the
/// arrowhead markers they need and the running bounds in pixels.
#[derive(Debug)]
pub struct Canvas {
    projection: Projection,
    style: CanvasStyle,
    bounds: Option<Bounds>,
    output: LayeredOutput,
    arrows: ArrowWithTextDrawer,
}

impl Canvas {
    /// Creates an empty canvas.
    ///
    /// # Errors
    ///
    /// Returns [`SchemataError::Config`] if a configured color does not parse.
    pub fn new(config: &AppConfig) -> Result<Self, SchemataError> {
        Ok(Self {
            projection: Projection::new(config.canvas().scale()),
            style: CanvasStyle::from_config(config)?,
            bounds: None,
            output: LayeredOutput::new(),
            arrows: ArrowWithTextDrawer::new(),
        })
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Bounds of everything drawn so far, in pixels, without the margin.
    pub fn content_bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Bounds of the final document, in pixels: the content plus the margin.
    pub fn document_bounds(&self) -> Bounds {
        let content = self.bounds.unwrap_or_default();
        content.add_padding(Insets::uniform(self.style.margin * self.projection.scale()))
    }

    /// Draws a shape with its centered label.
    ///
    /// # Errors
    ///
    /// Returns [`SchemataError::InvalidShape`] if a color does not parse or the
    /// shape overflows the pixel range once scaled.
    pub fn draw_shape(
        &mut self,
        index: usize,
        shape: &ShapeDescriptor,
    ) -> Result<(), SchemataError> {
        let invalid = |reason: String| SchemataError::InvalidShape {
            index,
            label: shape.label().to_string(),
            reason,
        };

        let fill = Color::new(shape.fill_color()).map_err(&invalid)?;
        let border = Color::new(shape.border_color()).map_err(&invalid)?;
        let label_color = shape
            .label_style()
            .color()
            .map(Color::new)
            .transpose()
            .map_err(&invalid)?;

        let stroke = Rc::new(StrokeDefinition::new(border, shape.border_width()));
        let definition = shape
            .kind()
            .definition(self.projection.scale(), fill, stroke);
        let drawable = Shape::new(Rc::new(definition), self.projection.size(shape.size()));

        let style = shape.label_style();
        let mut text_def = TextDefinition::new();
        text_def.set_font_family(if style.monospace() {
            &self.style.mono_font_family
        } else {
            &self.style.font_family
        });
        text_def.set_font_size(style.font_size());
        text_def.set_bold(style.bold());
        text_def.set_color(label_color);

        let center = self.projection.point(shape.center());
        let text = (!shape.label().is_empty()).then(|| Text::new(&text_def, shape.label()));
        let label_bounds = text.as_ref().map(|text| text.bounds_at(center));

        let positioned =
            PositionedDrawable::new(ShapeWithText::new(drawable, text)).with_position(center);
        if !positioned.bounds().is_finite() || !label_bounds.is_none_or(Bounds::is_finite) {
            return Err(invalid(self.overflow_reason()));
        }

        trace!(index, kind:? = shape.kind(), bounds:? = positioned.bounds(); "Drawing shape");
        self.include(positioned.bounds());
        if let Some(label_bounds) = label_bounds {
            self.include(label_bounds);
        }
        self.output.merge(positioned.render_to_layers());

        Ok(())
    }

    /// Draws a directed connector and its optional label.
    ///
    /// # Errors
    ///
    /// Returns [`SchemataError::InvalidConnector`] if the color does not parse or
    /// the connector overflows the pixel range once scaled.
    pub fn draw_connector(
        &mut self,
        index: usize,
        connector: &ConnectorDescriptor,
    ) -> Result<(), SchemataError> {
        let color = connector
            .color()
            .map(Color::new)
            .transpose()
            .map_err(|reason| SchemataError::InvalidConnector { index, reason })?
            .unwrap_or(self.style.connector_color);
        let width = connector.width().unwrap_or(self.style.connector_width);
        let arrow = Arrow::new(Rc::new(StrokeDefinition::new(color, width)));

        let mut text_def = TextDefinition::new();
        text_def.set_font_family(&self.style.font_family);
        text_def.set_font_size(connector.label_font_size());
        text_def.set_color(Some(color));
        text_def.set_background_color(Some(
            Color::white().with_alpha(CONNECTOR_LABEL_BACKGROUND_ALPHA),
        ));
        let (pad_y, pad_x) = CONNECTOR_LABEL_PADDING;
        text_def.set_padding(Insets::new(pad_y, pad_x, pad_y, pad_x));

        let anchor = connector.anchor();
        let position = match anchor {
            LabelAnchor::Midpoint => LabelPosition::Midpoint,
            LabelAnchor::NearStart => LabelPosition::Start,
            LabelAnchor::NearEnd => LabelPosition::End,
        };
        let offset = self
            .projection
            .point(anchor.shift().add_point(connector.label_offset()));

        let text = connector.label().map(|label| Text::new(&text_def, label));
        let arrow_with_text = ArrowWithText::new(arrow, text.clone())
            .with_label_position(position)
            .with_label_offset(offset);

        let source = self.projection.point(connector.start());
        let destination = self.projection.point(connector.end());

        let label_bounds = text.as_ref().map(|text| {
            let label_center = arrow_with_text.calculate_text_position(source, destination);
            text.bounds_at(label_center)
        });
        if !source.is_finite()
            || !destination.is_finite()
            || !label_bounds.is_none_or(Bounds::is_finite)
        {
            return Err(SchemataError::InvalidConnector {
                index,
                reason: self.overflow_reason(),
            });
        }

        trace!(index, source:?, destination:?; "Drawing connector");
        self.include(Bounds::from_point(source));
        self.include(Bounds::from_point(destination));
        if let Some(label_bounds) = label_bounds {
            self.include(label_bounds);
        }

        let output = self
            .arrows
            .draw_arrow_with_text(&arrow_with_text, source, destination);
        self.output.merge(output);

        Ok(())
    }

    /// Draws a free-standing text annotation.
    ///
    /// # Errors
    ///
    /// Returns [`SchemataError::InvalidAnnotation`] if the color does not parse
    /// or the text overflows the pixel range once scaled.
    pub fn draw_annotation(
        &mut self,
        index: usize,
        annotation: &TextAnnotation,
    ) -> Result<(), SchemataError> {
        let color = Color::new(annotation.color())
            .map_err(|reason| SchemataError::InvalidAnnotation { index, reason })?;

        let style = annotation.style();
        let mut text_def = TextDefinition::new();
        text_def.set_font_family(if style.monospace() {
            &self.style.mono_font_family
        } else {
            &self.style.font_family
        });
        text_def.set_font_size(annotation.font_size());
        text_def.set_bold(style.bold());
        text_def.set_color(Some(color));
        text_def.set_anchor(match annotation.align() {
            TextAlign::Center => TextAnchor::Center,
            TextAlign::TopLeft => TextAnchor::TopLeft,
        });

        let position = self.projection.point(annotation.position());
        let text = Text::new(&text_def, annotation.text());
        let bounds = text.bounds_at(position);
        if !bounds.is_finite() {
            return Err(SchemataError::InvalidAnnotation {
                index,
                reason: self.overflow_reason(),
            });
        }

        trace!(index, style:? = style, position:?; "Drawing annotation");
        self.include(bounds);
        self.output.merge(text.render_to_layers(position));

        Ok(())
    }

    /// Draws the legend to the left of the content, aligned with its top.
    ///
    /// Does nothing for an empty legend.
    ///
    /// # Errors
    ///
    /// Returns [`SchemataError::InvalidLegend`] if a color does not parse.
    pub fn draw_legend(&mut self, entries: &[LegendEntry]) -> Result<(), SchemataError> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut text_def = TextDefinition::new();
        text_def.set_font_family(&self.style.font_family);
        text_def.set_font_size(LEGEND_FONT_SIZE);
        text_def.set_anchor(TextAnchor::Left);

        let labels: Vec<Text> = entries
            .iter()
            .map(|entry| Text::new(&text_def, entry.label()))
            .collect();
        let row_height = labels
            .iter()
            .map(|label| label.calculate_size().height())
            .fold(LEGEND_SWATCH, f32::max);
        let label_width = labels
            .iter()
            .map(|label| label.calculate_size().width())
            .fold(0.0, f32::max);

        let frame_size = Size::new(
            LEGEND_SWATCH + LEGEND_ROW_GAP + label_width,
            row_height * entries.len() as f32 + LEGEND_ROW_GAP * (entries.len() - 1) as f32,
        )
        .add_padding(Insets::uniform(LEGEND_PADDING));

        let content = self.bounds.unwrap_or_default();
        let frame_top_left = Point::new(
            content.min_x() - LEGEND_GAP - frame_size.width(),
            content.min_y(),
        );
        let frame = Bounds::new_from_top_left(frame_top_left, frame_size);

        let frame_rect = svg_element::Rectangle::new()
            .set("x", frame.min_x())
            .set("y", frame.min_y())
            .set("width", frame.width())
            .set("height", frame.height())
            .set("fill", "white")
            .set("stroke", "#CCCCCC")
            .set("stroke-width", 1)
            .set("rx", 4);
        self.output
            .add_to_layer(RenderLayer::Background, Box::new(frame_rect));

        let swatch_size = Size::new(LEGEND_SWATCH, LEGEND_SWATCH);
        for (index, (entry, label)) in entries.iter().zip(&labels).enumerate() {
            let color = Color::new(entry.color())
                .map_err(|reason| SchemataError::InvalidLegend { index, reason })?;

            let row_center_y = frame.min_y()
                + LEGEND_PADDING
                + index as f32 * (row_height + LEGEND_ROW_GAP)
                + row_height / 2.0;
            let swatch_center =
                Point::new(frame.min_x() + LEGEND_PADDING + LEGEND_SWATCH / 2.0, row_center_y);

            let mut swatch_def: Box<dyn ShapeDefinition> =
                Box::new(CircleDefinition::new(color));
            swatch_def.set_stroke(Rc::new(StrokeDefinition::new(color, 1.0)));
            let swatch = Shape::new(Rc::new(swatch_def), swatch_size);
            self.output.merge(swatch.render_to_layers(swatch_center));

            let label_position = Point::new(
                swatch_center.x() + LEGEND_SWATCH / 2.0 + LEGEND_ROW_GAP,
                row_center_y,
            );
            self.output.merge(label.render_to_layers(label_position));
        }

        debug!(entries = entries.len(); "Legend drawn");
        self.include(frame);
        Ok(())
    }

    /// Draws the title centered above everything drawn so far.
    ///
    /// An empty title draws nothing.
    pub fn draw_title(&mut self, title: &str) {
        if title.is_empty() {
            return;
        }

        let mut text_def = TextDefinition::new();
        text_def.set_font_family(&self.style.font_family);
        text_def.set_font_size(self.style.title_font_size);
        text_def.set_bold(true);

        let text = Text::new(&text_def, title);
        let size = text.calculate_size();
        let position = match self.bounds {
            Some(content) => Point::new(
                content.center().x(),
                content.min_y() - TITLE_GAP - size.height() / 2.0,
            ),
            None => Point::default(),
        };

        self.include(text.bounds_at(position));
        self.output.merge(text.render_to_layers(position));
    }

    /// Assembles the SVG document: background, arrowhead markers and every
    /// layer, translated so the padded bounds start at the origin.
    pub fn into_document(self) -> svg::Document {
        let bounds = self.document_bounds();
        let size = bounds.to_size();
        debug!(width = size.width(), height = size.height(); "Assembling SVG document");

        let background = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", self.style.background.to_string())
            .set("fill-opacity", self.style.background.alpha());

        let main_group = self.output.render().into_iter().fold(
            svg_element::Group::new().set(
                "transform",
                format!("translate({}, {})", -bounds.min_x(), -bounds.min_y()),
            ),
            |group, node| group.add(node),
        );

        svg::Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", size.width(), size.height()),
            )
            .set("width", size.width())
            .set("height", size.height())
            .add(background)
            .add(self.arrows.draw_marker_definitions())
            .add(main_group)
    }

    fn overflow_reason(&self) -> String {
        format!(
            "does not fit in finite pixel coordinates at a scale of {} pixels per unit",
            self.projection.scale()
        )
    }

    fn include(&mut self, bounds: Bounds) {
        self.bounds = Some(match self.bounds {
            Some(current) => current.merge(&bounds),
            None => bounds,
        });
    }
}

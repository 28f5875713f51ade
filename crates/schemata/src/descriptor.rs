//! Declarative diagram descriptors.
//!
//! A diagram is plain data: a list of [`ShapeDescriptor`]s, a list of
//! [`ConnectorDescriptor`]s, optional free-standing [`TextAnnotation`]s and
//! [`LegendEntry`]s, bundled in a [`Diagram`]. Nothing here knows how to draw;
//! the canvas interprets each descriptor's kind to pick a drawing routine.
//!
//! # Coordinate System
//!
//! Descriptors are authored in diagram *units* with the Y axis pointing up:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! # Example
//!
//! ```
//! use schemata::descriptor::{ConnectorDescriptor, ShapeDescriptor, ShapeKind};
//!
//! let start = ShapeDescriptor::new(ShapeKind::Terminal, 0.0, 0.0, 2.0, 0.8, "START", "#FF6B6B");
//! let step = ShapeDescriptor::new(ShapeKind::Process, 0.0, -2.0, 2.0, 0.8, "Step", "#4ECDC4");
//! let arrow = ConnectorDescriptor::between(&start, &step);
//!
//! assert!(arrow.start().y() < 0.0);
//! assert!(arrow.end().y() > -2.0);
//! ```

use std::rc::Rc;

use schemata_core::{
    color::Color,
    draw::{
        Shape, ShapeDefinition, StrokeDefinition,
        shape::{
            CircleDefinition, DiamondDefinition, OvalDefinition, ParallelogramDefinition,
            PredefinedDefinition, RectangleDefinition,
        },
    },
    geometry::{Bounds, Point, Size},
};

use crate::SchemataError;

/// Horizontal lean of an input/output parallelogram, in units.
const IO_SLANT: f32 = 0.2;
/// Gap between the outer and inner border of a predefined process, in units.
const PREDEFINED_INSET: f32 = 0.1;
/// Corner radius of a process box, in units.
const PROCESS_ROUNDING: f32 = 0.1;
/// Horizontal shift of near-start and near-end connector labels, in units.
const LABEL_ANCHOR_SHIFT: f32 = 0.3;

/// The drawing routine a shape is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Start/end oval.
    Terminal,
    /// Rounded rectangle.
    Process,
    /// Diamond.
    Decision,
    /// Parallelogram leaning right.
    InputOutput,
    /// Rectangle with a second, inner border.
    Predefined,
    /// Plain square-cornered rectangle.
    Box,
    /// Circle with a diameter of `min(width, height)`.
    Circle,
}

impl ShapeKind {
    /// Builds the drawing routine for this kind at `scale` pixels per unit.
    pub(crate) fn definition(
        self,
        scale: f32,
        fill: Color,
        stroke: Rc<StrokeDefinition>,
    ) -> Box<dyn ShapeDefinition> {
        let mut definition: Box<dyn ShapeDefinition> = match self {
            Self::Terminal => Box::new(OvalDefinition::new(fill)),
            Self::Process => {
                Box::new(RectangleDefinition::new(fill).with_rounded(PROCESS_ROUNDING * scale))
            }
            Self::Decision => Box::new(DiamondDefinition::new(fill)),
            Self::InputOutput => Box::new(ParallelogramDefinition::new(fill, IO_SLANT * scale)),
            Self::Predefined => Box::new(
                PredefinedDefinition::new(fill, PREDEFINED_INSET * scale)
                    .with_rounded(PROCESS_ROUNDING * scale),
            ),
            Self::Box => Box::new(RectangleDefinition::new(fill)),
            Self::Circle => Box::new(CircleDefinition::new(fill)),
        };
        definition.set_stroke(stroke);
        definition
    }
}

/// Font presets for a shape's label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    /// Size in points.
    font_size: u16,
    bold: bool,
    /// CSS color; `None` draws black.
    color: Option<String>,
    monospace: bool,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size: 9,
            bold: false,
            color: None,
            monospace: false,
        }
    }
}

impl LabelStyle {
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn bold(&self) -> bool {
        self.bold
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn monospace(&self) -> bool {
        self.monospace
    }
}

/// A shape to draw: kind, center, size, label and colors.
///
/// Multi-line labels use `\n` as the line separator and are centered on the
/// shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDescriptor {
    kind: ShapeKind,
    center: Point,
    width: f32,
    height: f32,
    label: String,
    fill_color: String,
    border_color: String,
    /// Border width in pixels.
    border_width: f32,
    label_style: LabelStyle,
}

impl ShapeDescriptor {
    /// Creates a shape centered on `(x, y)` with a black 2px border.
    pub fn new(
        kind: ShapeKind,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        label: impl Into<String>,
        fill_color: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            center: Point::new(x, y),
            width,
            height,
            label: label.into(),
            fill_color: fill_color.into(),
            border_color: "black".to_string(),
            border_width: 2.0,
            label_style: LabelStyle::default(),
        }
    }

    pub fn with_border(mut self, color: impl Into<String>, width: f32) -> Self {
        self.border_color = color.into();
        self.border_width = width;
        self
    }

    /// Sets the label size in points.
    pub fn with_font_size(mut self, size: u16) -> Self {
        self.label_style.font_size = size;
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.label_style.bold = bold;
        self
    }

    pub fn with_label_color(mut self, color: impl Into<String>) -> Self {
        self.label_style.color = Some(color.into());
        self
    }

    pub fn with_monospace(mut self, monospace: bool) -> Self {
        self.label_style.monospace = monospace;
        self
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns the `width` x `height` size in units.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn fill_color(&self) -> &str {
        &self.fill_color
    }

    pub fn border_color(&self) -> &str {
        &self.border_color
    }

    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    pub fn label_style(&self) -> &LabelStyle {
        &self.label_style
    }

    /// Axis-aligned bounding box in units.
    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_center(self.center, self.size())
    }

    /// Checks that the shape can be drawn.
    ///
    /// # Errors
    ///
    /// Returns [`SchemataError::InvalidShape`] for non-finite coordinates,
    /// non-positive or non-finite sizes, a negative border, a zero font size or
    /// any color that does not parse.
    pub fn validate(&self, index: usize) -> Result<(), SchemataError> {
        let invalid = |reason: String| SchemataError::InvalidShape {
            index,
            label: self.label.clone(),
            reason,
        };

        if !self.center.is_finite() {
            return Err(invalid(format!(
                "center must be finite, got ({}, {})",
                self.center.x(),
                self.center.y()
            )));
        }
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(invalid(format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(invalid(format!(
                "height must be positive, got {}",
                self.height
            )));
        }
        if !(self.border_width.is_finite() && self.border_width >= 0.0) {
            return Err(invalid(format!(
                "border width must not be negative, got {}",
                self.border_width
            )));
        }
        if self.label_style.font_size == 0 {
            return Err(invalid("label font size must be positive".to_string()));
        }

        Color::new(&self.fill_color).map_err(&invalid)?;
        Color::new(&self.border_color).map_err(&invalid)?;
        if let Some(color) = &self.label_style.color {
            Color::new(color).map_err(&invalid)?;
        }

        Ok(())
    }

    /// Geometry-only shape in a Y-down unit space, for outline clipping.
    fn outline(&self) -> Shape {
        let definition =
            self.kind
                .definition(1.0, Color::default(), Rc::new(StrokeDefinition::default()));
        Shape::new(Rc::new(definition), self.size())
    }
}

/// Where a connector's label sits along the connector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LabelAnchor {
    /// Midpoint of the segment.
    #[default]
    Midpoint,
    /// The start point shifted right by 0.3 units.
    NearStart,
    /// The end point shifted left by 0.3 units.
    NearEnd,
}

impl LabelAnchor {
    /// Displacement from the anchor's base point, in units.
    pub fn shift(self) -> Point {
        match self {
            Self::Midpoint => Point::default(),
            Self::NearStart => Point::new(LABEL_ANCHOR_SHIFT, 0.0),
            Self::NearEnd => Point::new(-LABEL_ANCHOR_SHIFT, 0.0),
        }
    }

    /// Returns the label center in units for a segment.
    pub fn anchor_point(self, start: Point, end: Point) -> Point {
        let base = match self {
            Self::Midpoint => start.midpoint(end),
            Self::NearStart => start,
            Self::NearEnd => end,
        };
        base.add_point(self.shift())
    }
}

/// A directed straight connector between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorDescriptor {
    start: Point,
    end: Point,
    label: Option<String>,
    anchor: LabelAnchor,
    /// Added to the anchor point, in units.
    label_offset: Point,
    color: Option<String>,
    /// Stroke width in pixels.
    width: Option<f32>,
    /// Label size in points.
    label_font_size: u16,
}

impl ConnectorDescriptor {
    /// Creates an unlabelled connector from `start` to `end`.
    ///
    /// Color and width default to the renderer's connector style.
    pub fn new(start: (f32, f32), end: (f32, f32)) -> Self {
        Self {
            start: Point::new(start.0, start.1),
            end: Point::new(end.0, end.1),
            label: None,
            anchor: LabelAnchor::default(),
            label_offset: Point::default(),
            color: None,
            width: None,
            label_font_size: 8,
        }
    }

    /// Connects the outlines of two shapes along the line between their
    /// centers.
    ///
    /// Falls back to the centers when the shapes overlap so much that an
    /// outline is not crossed.
    pub fn between(from: &ShapeDescriptor, to: &ShapeDescriptor) -> Self {
        // Outline math runs in Y-down space, so mirror the units first
        let flip = |p: Point| p.with_y(-p.y());
        let from_center = flip(from.center());
        let to_center = flip(to.center());

        let start = from.outline().find_intersection(from_center, to_center);
        let end = to.outline().find_intersection(to_center, from_center);

        let (start, end) = (flip(start), flip(end));
        Self::new((start.x(), start.y()), (end.x(), end.y()))
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_anchor(mut self, anchor: LabelAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Shifts the label away from its anchor, in units.
    pub fn with_label_offset(mut self, dx: f32, dy: f32) -> Self {
        self.label_offset = Point::new(dx, dy);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the stroke width in pixels.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_label_font_size(mut self, size: u16) -> Self {
        self.label_font_size = size;
        self
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn anchor(&self) -> LabelAnchor {
        self.anchor
    }

    pub fn label_offset(&self) -> Point {
        self.label_offset
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn width(&self) -> Option<f32> {
        self.width
    }

    pub fn label_font_size(&self) -> u16 {
        self.label_font_size
    }

    /// Label center in units, offset included.
    pub fn label_point(&self) -> Point {
        self.anchor
            .anchor_point(self.start, self.end)
            .add_point(self.label_offset)
    }

    /// Checks that the connector can be drawn.
    ///
    /// # Errors
    ///
    /// Returns [`SchemataError::InvalidConnector`] for non-finite endpoints or
    /// offsets, a non-positive width, a zero label size or a color that does
    /// not parse.
    pub fn validate(&self, index: usize) -> Result<(), SchemataError> {
        let invalid = |reason: String| SchemataError::InvalidConnector { index, reason };

        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(invalid(format!(
                "endpoints must be finite, got ({}, {}) -> ({}, {})",
                self.start.x(),
                self.start.y(),
                self.end.x(),
                self.end.y()
            )));
        }
        if !self.label_offset.is_finite() {
            return Err(invalid("label offset must be finite".to_string()));
        }
        if let Some(width) = self.width.filter(|w| !(w.is_finite() && *w > 0.0)) {
            return Err(invalid(format!("width must be positive, got {width}")));
        }
        if self.label_font_size == 0 {
            return Err(invalid("label font size must be positive".to_string()));
        }
        if let Some(color) = &self.color {
            Color::new(color).map_err(&invalid)?;
        }

        Ok(())
    }
}

/// Font preset of a free-standing text annotation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationStyle {
    /// Bold 12pt sans-serif.
    Heading,
    /// Regular 9pt sans-serif.
    #[default]
    Body,
    /// Regular 10pt monospace; whitespace is kept as written.
    Console,
}

impl AnnotationStyle {
    /// Default size in points.
    pub fn font_size(self) -> u16 {
        match self {
            Self::Heading => 12,
            Self::Body => 9,
            Self::Console => 10,
        }
    }

    pub fn bold(self) -> bool {
        matches!(self, Self::Heading)
    }

    pub fn monospace(self) -> bool {
        matches!(self, Self::Console)
    }
}

/// How an annotation's text block sits relative to its position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Block centered on the position.
    #[default]
    Center,
    /// Position is the block's top-left corner; lines are left-aligned.
    TopLeft,
}

/// Free text placed at a point, independent of any shape.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAnnotation {
    position: Point,
    text: String,
    style: AnnotationStyle,
    color: String,
    align: TextAlign,
    font_size: Option<u16>,
}

impl TextAnnotation {
    pub fn new(x: f32, y: f32, text: impl Into<String>, style: AnnotationStyle) -> Self {
        Self {
            position: Point::new(x, y),
            text: text.into(),
            style,
            color: "black".to_string(),
            align: TextAlign::default(),
            font_size: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Overrides the style's font size, in points.
    pub fn with_font_size(mut self, size: u16) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> AnnotationStyle {
        self.style
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn align(&self) -> TextAlign {
        self.align
    }

    /// Returns the effective size in points.
    pub fn font_size(&self) -> u16 {
        self.font_size.unwrap_or_else(|| self.style.font_size())
    }

    /// # Errors
    ///
    /// Returns [`SchemataError::InvalidAnnotation`] for a non-finite position,
    /// a zero font size or a color that does not parse.
    pub fn validate(&self, index: usize) -> Result<(), SchemataError> {
        let invalid = |reason: String| SchemataError::InvalidAnnotation { index, reason };

        if !self.position.is_finite() {
            return Err(invalid("position must be finite".to_string()));
        }
        if self.font_size() == 0 {
            return Err(invalid("font size must be positive".to_string()));
        }
        Color::new(&self.color).map_err(invalid)?;

        Ok(())
    }
}

/// One row of a diagram legend: a color swatch and its meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    label: String,
    color: String,
}

impl LegendEntry {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// # Errors
    ///
    /// Returns [`SchemataError::InvalidLegend`] if the color does not parse.
    pub fn validate(&self, index: usize) -> Result<(), SchemataError> {
        Color::new(&self.color)
            .map(|_| ())
            .map_err(|reason| SchemataError::InvalidLegend { index, reason })
    }
}

/// One complete diagram definition.
///
/// `name` is the file stem the diagram is written under by batch runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagram {
    name: String,
    title: String,
    shapes: Vec<ShapeDescriptor>,
    connectors: Vec<ConnectorDescriptor>,
    annotations: Vec<TextAnnotation>,
    legend: Vec<LegendEntry>,
}

impl Diagram {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_shapes(mut self, shapes: impl IntoIterator<Item = ShapeDescriptor>) -> Self {
        self.shapes.extend(shapes);
        self
    }

    pub fn with_connectors(
        mut self,
        connectors: impl IntoIterator<Item = ConnectorDescriptor>,
    ) -> Self {
        self.connectors.extend(connectors);
        self
    }

    pub fn with_annotations(
        mut self,
        annotations: impl IntoIterator<Item = TextAnnotation>,
    ) -> Self {
        self.annotations.extend(annotations);
        self
    }

    pub fn with_legend(mut self, entries: impl IntoIterator<Item = LegendEntry>) -> Self {
        self.legend.extend(entries);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn shapes(&self) -> &[ShapeDescriptor] {
        &self.shapes
    }

    pub fn connectors(&self) -> &[ConnectorDescriptor] {
        &self.connectors
    }

    pub fn annotations(&self) -> &[TextAnnotation] {
        &self.annotations
    }

    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    /// Validates every descriptor, shapes first.
    ///
    /// # Errors
    ///
    /// Returns the first descriptor error found.
    pub fn validate(&self) -> Result<(), SchemataError> {
        for (index, shape) in self.shapes.iter().enumerate() {
            shape.validate(index)?;
        }
        for (index, connector) in self.connectors.iter().enumerate() {
            connector.validate(index)?;
        }
        for (index, annotation) in self.annotations.iter().enumerate() {
            annotation.validate(index)?;
        }
        for (index, entry) in self.legend.iter().enumerate() {
            entry.validate(index)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn process(x: f32, y: f32) -> ShapeDescriptor {
        ShapeDescriptor::new(ShapeKind::Process, x, y, 2.0, 0.8, "Step", "#4ECDC4")
    }

    #[test]
    fn test_shape_defaults() {
        let shape = process(1.0, 2.0);
        assert_eq!(shape.border_color(), "black");
        assert_eq!(shape.border_width(), 2.0);
        assert_eq!(shape.label_style(), &LabelStyle::default());
        assert_eq!(shape.label_style().font_size(), 9);

        let bounds = shape.bounds();
        assert_approx_eq!(f32, bounds.min_x(), 0.0);
        assert_approx_eq!(f32, bounds.max_x(), 2.0);
        assert_approx_eq!(f32, bounds.min_y(), 1.6);
        assert_approx_eq!(f32, bounds.max_y(), 2.4);
    }

    #[test]
    fn test_shape_validate_sizes() {
        assert!(process(0.0, 0.0).validate(0).is_ok());

        let zero = ShapeDescriptor::new(ShapeKind::Box, 0.0, 0.0, 0.0, 1.0, "Zero", "white");
        let err = zero.validate(3).unwrap_err();
        assert!(matches!(
            err,
            SchemataError::InvalidShape { index: 3, ref label, ref reason }
                if label == "Zero" && reason.contains("width")
        ));

        let negative = ShapeDescriptor::new(ShapeKind::Box, 0.0, 0.0, 1.0, -1.0, "Neg", "white");
        assert!(matches!(
            negative.validate(0),
            Err(SchemataError::InvalidShape { ref reason, .. }) if reason.contains("height")
        ));

        let nan = ShapeDescriptor::new(ShapeKind::Box, f32::NAN, 0.0, 1.0, 1.0, "NaN", "white");
        assert!(matches!(
            nan.validate(0),
            Err(SchemataError::InvalidShape { ref reason, .. }) if reason.contains("center")
        ));

        let infinite =
            ShapeDescriptor::new(ShapeKind::Box, 0.0, 0.0, f32::INFINITY, 1.0, "Inf", "white");
        assert!(infinite.validate(0).is_err());
    }

    #[test]
    fn test_shape_validate_colors() {
        let bad_fill = ShapeDescriptor::new(ShapeKind::Box, 0.0, 0.0, 1.0, 1.0, "A", "nope");
        assert!(bad_fill.validate(0).is_err());

        let bad_border = process(0.0, 0.0).with_border("#12", 1.0);
        assert!(bad_border.validate(0).is_err());

        let bad_label = process(0.0, 0.0).with_label_color("transparent-ish");
        assert!(bad_label.validate(0).is_err());

        let zero_font = process(0.0, 0.0).with_font_size(0);
        assert!(zero_font.validate(0).is_err());
    }

    #[test]
    fn test_label_anchor_points() {
        let start = Point::new(1.0, 1.0);
        let end = Point::new(3.0, 5.0);

        assert_eq!(
            LabelAnchor::Midpoint.anchor_point(start, end),
            Point::new(2.0, 3.0)
        );
        let near_start = LabelAnchor::NearStart.anchor_point(start, end);
        assert_approx_eq!(f32, near_start.x(), 1.3);
        assert_approx_eq!(f32, near_start.y(), 1.0);

        let near_end = LabelAnchor::NearEnd.anchor_point(start, end);
        assert_approx_eq!(f32, near_end.x(), 2.7);
        assert_approx_eq!(f32, near_end.y(), 5.0);
    }

    #[test]
    fn test_connector_label_point_with_offset() {
        let connector = ConnectorDescriptor::new((0.0, 0.0), (2.0, 0.0))
            .with_label("Raw Input")
            .with_label_offset(0.0, 0.2);
        let point = connector.label_point();
        assert_approx_eq!(f32, point.x(), 1.0);
        assert_approx_eq!(f32, point.y(), 0.2);
        assert_eq!(connector.label(), Some("Raw Input"));
        assert_eq!(connector.label_font_size(), 8);
    }

    #[test]
    fn test_connector_validate() {
        assert!(ConnectorDescriptor::new((0.0, 0.0), (1.0, 1.0)).validate(0).is_ok());

        let err = ConnectorDescriptor::new((f32::NAN, 0.0), (1.0, 1.0))
            .validate(4)
            .unwrap_err();
        assert!(matches!(err, SchemataError::InvalidConnector { index: 4, .. }));

        let zero_width = ConnectorDescriptor::new((0.0, 0.0), (1.0, 1.0)).with_width(0.0);
        assert!(zero_width.validate(0).is_err());

        let bad_color = ConnectorDescriptor::new((0.0, 0.0), (1.0, 1.0)).with_color("bleu");
        assert!(bad_color.validate(0).is_err());
    }

    #[test]
    fn test_between_vertical_boxes() {
        let upper = ShapeDescriptor::new(ShapeKind::Box, 0.0, 0.0, 2.0, 0.8, "START", "white");
        let lower = ShapeDescriptor::new(ShapeKind::Box, 0.0, -2.0, 2.0, 0.8, "Step", "white");

        let connector = ConnectorDescriptor::between(&upper, &lower);

        assert_approx_eq!(f32, connector.start().x(), 0.0);
        assert_approx_eq!(f32, connector.start().y(), -0.4, epsilon = 1e-4);
        assert_approx_eq!(f32, connector.end().x(), 0.0);
        assert_approx_eq!(f32, connector.end().y(), -1.6, epsilon = 1e-4);
    }

    #[test]
    fn test_between_circles_clips_at_radius() {
        let left = ShapeDescriptor::new(ShapeKind::Circle, 0.0, 0.0, 1.6, 1.6, "A", "red");
        let right = ShapeDescriptor::new(ShapeKind::Circle, 4.0, 0.0, 1.6, 1.6, "B", "blue");

        let connector = ConnectorDescriptor::between(&left, &right);

        assert_approx_eq!(f32, connector.start().x(), 0.8, epsilon = 1e-4);
        assert_approx_eq!(f32, connector.end().x(), 3.2, epsilon = 1e-4);
        assert_approx_eq!(f32, connector.start().y(), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_between_wide_circle_clips_at_inscribed_radius() {
        // The circle is drawn in the 1.0 x 1.0 square inscribed in its box
        let left = ShapeDescriptor::new(ShapeKind::Circle, 0.0, 0.0, 3.0, 1.0, "A", "red");
        let right = ShapeDescriptor::new(ShapeKind::Box, 4.0, 0.0, 1.0, 1.0, "B", "blue");

        let connector = ConnectorDescriptor::between(&left, &right);

        assert_approx_eq!(f32, connector.start().x(), 0.5, epsilon = 1e-4);
        assert_approx_eq!(f32, connector.end().x(), 3.5, epsilon = 1e-4);
    }

    #[test]
    fn test_predefined_definition_is_rounded() {
        let definition = ShapeKind::Predefined.definition(
            80.0,
            Color::white(),
            Rc::new(StrokeDefinition::default()),
        );
        let rendered = definition
            .render_to_svg(Size::new(160.0, 64.0), Point::default())
            .to_string();

        assert_eq!(rendered.matches(r#"rx="8""#).count(), 2);
    }

    #[test]
    fn test_annotation_style_presets() {
        let heading = TextAnnotation::new(0.0, 0.0, "Title", AnnotationStyle::Heading);
        assert_eq!(heading.font_size(), 12);
        assert!(heading.style().bold());

        let console = TextAnnotation::new(0.0, 0.0, "1. Exit", AnnotationStyle::Console)
            .with_font_size(9)
            .with_align(TextAlign::TopLeft);
        assert_eq!(console.font_size(), 9);
        assert!(console.style().monospace());
        assert_eq!(console.align(), TextAlign::TopLeft);

        let bad = TextAnnotation::new(0.0, 0.0, "x", AnnotationStyle::Body).with_color("??");
        assert!(matches!(
            bad.validate(1),
            Err(SchemataError::InvalidAnnotation { index: 1, .. })
        ));
    }

    #[test]
    fn test_diagram_validate_reports_first_error() {
        let diagram = Diagram::new("sample", "Sample")
            .with_shapes([process(0.0, 0.0), process(0.0, -2.0)])
            .with_connectors([ConnectorDescriptor::new((0.0, -0.4), (0.0, -1.6))])
            .with_legend([LegendEntry::new("Main", "#FF6B6B")]);
        assert!(diagram.validate().is_ok());

        let diagram = diagram.with_legend([LegendEntry::new("Broken", "#XYZXYZ")]);
        assert!(matches!(
            diagram.validate(),
            Err(SchemataError::InvalidLegend { index: 1, .. })
        ));
    }
}

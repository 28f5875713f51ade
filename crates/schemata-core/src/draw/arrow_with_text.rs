use crate::{
    draw::{Arrow, ArrowDrawer, Drawable, LayeredOutput, RenderLayer, Text},
    geometry::Point,
};

/// Which point of a connector its label is attached to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LabelPosition {
    #[default]
    Midpoint,
    Start,
    End,
}

/// An arrow with an optional label.
///
/// The label is placed at the [`LabelPosition`] base point plus a pixel
/// offset.
#[derive(Debug, Clone)]
pub struct ArrowWithText<'a> {
    arrow: Arrow,
    text: Option<Text<'a>>,
    label_position: LabelPosition,
    label_offset: Point,
}

impl<'a> ArrowWithText<'a> {
    pub fn new(arrow: Arrow, text: Option<Text<'a>>) -> Self {
        Self {
            arrow,
            text,
            label_position: LabelPosition::default(),
            label_offset: Point::default(),
        }
    }

    pub fn with_label_position(mut self, position: LabelPosition) -> Self {
        self.label_position = position;
        self
    }

    pub fn with_label_offset(mut self, offset: Point) -> Self {
        self.label_offset = offset;
        self
    }

    /// Calculates where the label is centered for a given arrow.
    pub fn calculate_text_position(&self, source: Point, destination: Point) -> Point {
        let base = match self.label_position {
            LabelPosition::Midpoint => source.midpoint(destination),
            LabelPosition::Start => source,
            LabelPosition::End => destination,
        };
        base.add_point(self.label_offset)
    }

    /// Renders the arrow with optional text to layered output.
    pub fn render_to_layers(
        &self,
        arrow_drawer: &mut ArrowDrawer,
        source: Point,
        destination: Point,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let rendered_arrow = arrow_drawer.draw_arrow(&self.arrow, source, destination);
        output.add_to_layer(RenderLayer::Arrow, rendered_arrow);

        if let Some(text) = &self.text {
            let text_pos = self.calculate_text_position(source, destination);
            output.merge(text.render_to_layers(text_pos));
        }

        output
    }
}

/// Draws labelled arrows and emits the arrowhead markers they need.
#[derive(Debug, Default)]
pub struct ArrowWithTextDrawer(ArrowDrawer);

impl ArrowWithTextDrawer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw_arrow_with_text(
        &mut self,
        arrow_with_text: &ArrowWithText,
        source: Point,
        destination: Point,
    ) -> LayeredOutput {
        arrow_with_text.render_to_layers(&mut self.0, source, destination)
    }

    /// Generates SVG marker definitions for all arrows drawn so far
    pub fn draw_marker_definitions(&self) -> Box<dyn svg::Node> {
        self.0.draw_marker_definitions()
    }
}

//! Shape-with-label composite drawable.

use crate::{
    draw::{Drawable, LayeredOutput, Shape, Text},
    geometry::{Point, Size},
};

/// A shape with an optional label centered on it.
///
/// Unlike a content container, the shape keeps its own size; long labels may
/// overflow the outline.
#[derive(Debug, Clone)]
pub struct ShapeWithText<'a> {
    shape: Shape,
    text: Option<Text<'a>>,
}

impl<'a> ShapeWithText<'a> {
    pub fn new(shape: Shape, text: Option<Text<'a>>) -> Self {
        Self { shape, text }
    }
}

impl Drawable for ShapeWithText<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = self.shape.render_to_layers(position);

        if let Some(text) = &self.text {
            output.merge(text.render_to_layers(position));
        }

        output
    }

    fn size(&self) -> Size {
        self.shape.size()
    }
}

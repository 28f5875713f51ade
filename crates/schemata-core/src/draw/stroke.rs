//! Stroke definitions for outlines and connector lines.
//!
//! [`StrokeDefinition`] bundles color and width; the
//! [`apply_stroke!`](crate::apply_stroke!) macro writes both onto an SVG
//! element in one go.
//!
//! ```
//! use schemata_core::draw::StrokeDefinition;
//! use schemata_core::color::Color;
//! use svg::node::element as svg_element;
//!
//! let mut stroke = StrokeDefinition::new(Color::new("#2C3E50").unwrap(), 2.0);
//! stroke.set_width(1.0);
//!
//! let line = svg_element::Path::new().set("d", "M 0 0 L 10 10");
//! let line = schemata_core::apply_stroke!(line, &stroke);
//! ```

use crate::color::Color;

/// A stroke for shape outlines and connector lines.
///
/// Width is in SVG pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }
}

impl Default for StrokeDefinition {
    /// Black, 2px, the outline every diagram shape starts with.
    fn default() -> Self {
        Self::new(Color::default(), 2.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets `stroke`, `stroke-opacity` and `stroke-width`.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 2.0);
        assert_eq!(stroke.color().to_string(), "black");
    }

    #[test]
    fn test_stroke_set_width() {
        let mut stroke = StrokeDefinition::new(Color::new("blue").unwrap(), 1.5);
        assert_eq!(stroke.width(), 1.5);

        stroke.set_width(2.5);

        assert_eq!(stroke.color().to_string(), "blue");
        assert_eq!(stroke.width(), 2.5);
    }

    #[test]
    fn test_apply_stroke_sets_attributes() {
        let stroke = StrokeDefinition::new(Color::new("red").unwrap(), 3.0);
        let path = svg::node::element::Path::new().set("d", "M 0 0 L 1 1");
        let rendered = crate::apply_stroke!(path, &stroke).to_string();

        assert!(rendered.contains(r#"stroke="red""#));
        assert!(rendered.contains(r#"stroke-width="3""#));
        assert!(!rendered.contains("stroke-linecap"));
    }
}

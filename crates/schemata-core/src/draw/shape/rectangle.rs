use std::rc::Rc;

use svg::{self, node::element as svg_element};

use super::{ShapeDefinition, apply_fill};
use crate::{
    apply_stroke,
    color::Color,
    draw::StrokeDefinition,
    geometry::{Point, Size},
};

/// Rectangle with optional rounded corners.
///
/// Square corners draw plain boxes; rounded corners draw process steps and
/// layer bands.
#[derive(Debug, Clone)]
pub struct RectangleDefinition {
    fill_color: Color,
    stroke: Rc<StrokeDefinition>,
    rounded: f32,
}

impl RectangleDefinition {
    pub fn new(fill_color: Color) -> Self {
        Self {
            fill_color,
            stroke: Rc::new(StrokeDefinition::default()),
            rounded: 0.0,
        }
    }

    /// Returns this definition with the given corner radius in pixels.
    pub fn with_rounded(mut self, radius: f32) -> Self {
        self.rounded = radius;
        self
    }

    /// Builds the outline element, shared with [`super::PredefinedDefinition`].
    pub(super) fn rect_element(
        size: Size,
        position: Point,
        rounded: f32,
    ) -> svg_element::Rectangle {
        let bounds = position.to_bounds(size);
        // Radius may not exceed half of the shorter side
        let radius = rounded.min(size.width() / 2.0).min(size.height() / 2.0);

        svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", size.width())
            .set("height", size.height())
            .set("rx", radius)
    }
}

impl ShapeDefinition for RectangleDefinition {
    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        let rect = Self::rect_element(size, position, self.rounded);
        let rect = apply_fill!(rect, self.fill_color);
        apply_stroke!(rect, self.stroke).into()
    }

    fn clone_box(&self) -> Box<dyn ShapeDefinition> {
        Box::new(self.clone())
    }

    fn set_stroke(&mut self, stroke: Rc<StrokeDefinition>) {
        self.stroke = stroke;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_render_square() {
        let rect = RectangleDefinition::new(Color::new("#E8F5E8").unwrap());
        let rendered = rect
            .render_to_svg(Size::new(100.0, 50.0), Point::new(100.0, 100.0))
            .to_string();

        assert!(rendered.starts_with("<rect"));
        assert!(rendered.contains(r#"x="50""#));
        assert!(rendered.contains(r#"y="75""#));
        assert!(rendered.contains(r#"rx="0""#));
    }

    #[test]
    fn test_rectangle_rounded_is_clamped() {
        let rect = RectangleDefinition::new(Color::white()).with_rounded(40.0);
        let rendered = rect
            .render_to_svg(Size::new(100.0, 20.0), Point::new(0.0, 0.0))
            .to_string();
        assert!(rendered.contains(r#"rx="10""#));
    }

    #[test]
    fn test_rectangle_set_stroke() {
        let mut rect = RectangleDefinition::new(Color::white());
        let stroke = Rc::new(StrokeDefinition::new(Color::new("red").unwrap(), 1.0));
        rect.set_stroke(stroke);

        let rendered = rect
            .render_to_svg(Size::new(10.0, 10.0), Point::default())
            .to_string();
        assert!(rendered.contains(r#"stroke="red""#));
        assert!(rendered.contains(r#"stroke-width="1""#));
    }
}

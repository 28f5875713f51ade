use std::rc::Rc;

use svg::{self, node::element as svg_element};

use super::{RectangleDefinition, ShapeDefinition, apply_fill};
use crate::{
    apply_stroke,
    color::Color,
    draw::StrokeDefinition,
    geometry::{Point, Size},
};

/// Rounded rectangle with a second, thinner border inside it, used for
/// predefined-process symbols.
#[derive(Debug, Clone)]
pub struct PredefinedDefinition {
    fill_color: Color,
    stroke: Rc<StrokeDefinition>,
    inset: f32,
    rounded: f32,
}

impl PredefinedDefinition {
    pub fn new(fill_color: Color, inset: f32) -> Self {
        Self {
            fill_color,
            stroke: Rc::new(StrokeDefinition::default()),
            inset,
            rounded: 0.0,
        }
    }

    /// Returns this definition with the given corner radius in pixels, applied
    /// to both borders.
    pub fn with_rounded(mut self, radius: f32) -> Self {
        self.rounded = radius;
        self
    }

    /// The inset actually applied for a given size, so that the inner border
    /// never collapses or turns inside out.
    pub fn effective_inset(&self, size: Size) -> f32 {
        self.inset
            .clamp(0.0, size.width().min(size.height()) / 4.0)
    }
}

impl ShapeDefinition for PredefinedDefinition {
    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        let outer = RectangleDefinition::rect_element(size, position, self.rounded);
        let outer = apply_fill!(outer, self.fill_color);
        let outer = apply_stroke!(outer, self.stroke);

        let inset = self.effective_inset(size);
        let inner_size = Size::new(size.width() - 2.0 * inset, size.height() - 2.0 * inset);
        let mut inner_stroke = StrokeDefinition::clone(&self.stroke);
        inner_stroke.set_width(self.stroke.width() / 2.0);

        let inner = RectangleDefinition::rect_element(inner_size, position, self.rounded)
            .set("fill", "none");
        let inner = apply_stroke!(inner, inner_stroke);

        svg_element::Group::new().add(outer).add(inner).into()
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
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_predefined_renders_two_borders() {
        let shape = PredefinedDefinition::new(Color::new("#FFB3BA").unwrap(), 8.0);
        let rendered = shape
            .render_to_svg(Size::new(160.0, 64.0), Point::new(80.0, 32.0))
            .to_string();

        assert_eq!(rendered.matches("<rect").count(), 2);
        assert!(rendered.contains(r#"fill="none""#));
        assert!(rendered.contains(r#"width="144""#));
        assert!(rendered.contains(r#"stroke-width="1""#));
    }

    #[test]
    fn test_predefined_rounded_corners() {
        let shape = PredefinedDefinition::new(Color::white(), 8.0).with_rounded(6.0);
        let rendered = shape
            .render_to_svg(Size::new(160.0, 64.0), Point::new(80.0, 32.0))
            .to_string();

        assert_eq!(rendered.matches(r#"rx="6""#).count(), 2);
    }

    #[test]
    fn test_predefined_inset_is_clamped() {
        let shape = PredefinedDefinition::new(Color::white(), 8.0);
        assert_approx_eq!(f32, shape.effective_inset(Size::new(160.0, 64.0)), 8.0);
        assert_approx_eq!(f32, shape.effective_inset(Size::new(160.0, 12.0)), 3.0);
        assert_approx_eq!(f32, shape.effective_inset(Size::new(1.0, 1.0)), 0.25);
    }
}

use std::rc::Rc;

use svg::{self, node::element as svg_element};

use super::{ShapeDefinition, apply_fill, find_polygon_intersection, polygon_points};
use crate::{
    apply_stroke,
    color::Color,
    draw::StrokeDefinition,
    geometry::{Point, Size},
};

/// Parallelogram leaning right, used for input/output symbols.
///
/// The top edge is shifted right and the bottom edge left by `slant` pixels;
/// the slant is clamped to a quarter of the width.
#[derive(Debug, Clone)]
pub struct ParallelogramDefinition {
    fill_color: Color,
    stroke: Rc<StrokeDefinition>,
    slant: f32,
}

impl ParallelogramDefinition {
    pub fn new(fill_color: Color, slant: f32) -> Self {
        Self {
            fill_color,
            stroke: Rc::new(StrokeDefinition::default()),
            slant,
        }
    }

    /// The slant actually applied for a given size.
    pub fn effective_slant(&self, size: Size) -> f32 {
        self.slant.clamp(0.0, size.width() / 4.0)
    }

    fn vertices(&self, size: Size, position: Point) -> [Point; 4] {
        let bounds = position.to_bounds(size);
        let slant = self.effective_slant(size);
        [
            Point::new(bounds.min_x() + slant, bounds.min_y()),
            Point::new(bounds.max_x(), bounds.min_y()),
            Point::new(bounds.max_x() - slant, bounds.max_y()),
            Point::new(bounds.min_x(), bounds.max_y()),
        ]
    }
}

impl ShapeDefinition for ParallelogramDefinition {
    fn find_intersection(&self, a: Point, b: Point, a_size: Size) -> Point {
        find_polygon_intersection(a, b, &self.vertices(a_size, a))
    }

    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        let polygon = svg_element::Polygon::new()
            .set("points", polygon_points(&self.vertices(size, position)));
        let polygon = apply_fill!(polygon, self.fill_color);
        apply_stroke!(polygon, self.stroke).into()
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
    fn test_parallelogram_render_points() {
        let shape = ParallelogramDefinition::new(Color::new("#95E1D3").unwrap(), 16.0);
        let rendered = shape
            .render_to_svg(Size::new(200.0, 64.0), Point::new(100.0, 32.0))
            .to_string();

        assert!(rendered.contains(r#"points="16,0 200,0 184,64 0,64""#));
    }

    #[test]
    fn test_parallelogram_slant_is_clamped() {
        let shape = ParallelogramDefinition::new(Color::white(), 16.0);
        assert_approx_eq!(f32, shape.effective_slant(Size::new(200.0, 10.0)), 16.0);
        assert_approx_eq!(f32, shape.effective_slant(Size::new(40.0, 10.0)), 10.0);
    }

    #[test]
    fn test_parallelogram_intersection_vertical() {
        let shape = ParallelogramDefinition::new(Color::white(), 16.0);
        let p = shape.find_intersection(
            Point::new(0.0, 0.0),
            Point::new(0.0, 100.0),
            Size::new(200.0, 64.0),
        );
        assert_approx_eq!(f32, p.x(), 0.0, epsilon = 0.001);
        assert_approx_eq!(f32, p.y(), 32.0, epsilon = 0.001);
    }
}

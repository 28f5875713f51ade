use std::rc::Rc;

use svg::{self, node::element as svg_element};

use super::{ShapeDefinition, apply_fill, polygon_points};
use crate::{
    apply_stroke,
    color::Color,
    draw::StrokeDefinition,
    geometry::{Point, Size},
};

/// Diamond with its corners on the midpoints of the bounding box edges,
/// used for decision symbols.
#[derive(Debug, Clone)]
pub struct DiamondDefinition {
    fill_color: Color,
    stroke: Rc<StrokeDefinition>,
}

impl DiamondDefinition {
    pub fn new(fill_color: Color) -> Self {
        Self {
            fill_color,
            stroke: Rc::new(StrokeDefinition::default()),
        }
    }
}

impl ShapeDefinition for DiamondDefinition {
    fn find_intersection(&self, a: Point, b: Point, a_size: Size) -> Point {
        let half_width = a_size.width() / 2.0;
        let half_height = a_size.height() / 2.0;
        let dist = b.sub_point(a);

        if dist.hypot() < 0.001 || half_width <= 0.0 || half_height <= 0.0 {
            return b;
        }

        // Outline satisfies |x|/hw + |y|/hh = 1
        let t = 1.0 / (dist.x().abs() / half_width + dist.y().abs() / half_height);
        if !t.is_finite() || t > 1.0 {
            return b;
        }

        a.add_point(dist.scale(t))
    }

    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        let half_width = size.width() / 2.0;
        let half_height = size.height() / 2.0;
        let points = [
            position.with_y(position.y() - half_height),
            position.with_x(position.x() + half_width),
            position.with_y(position.y() + half_height),
            position.with_x(position.x() - half_width),
        ];

        let polygon = svg_element::Polygon::new().set("points", polygon_points(&points));
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
    fn test_diamond_render_points() {
        let diamond = DiamondDefinition::new(Color::new("#FFE66D").unwrap());
        let rendered = diamond
            .render_to_svg(Size::new(180.0, 60.0), Point::new(100.0, 100.0))
            .to_string();

        assert!(rendered.starts_with("<polygon"));
        assert!(rendered.contains(r#"points="100,70 190,100 100,130 10,100""#));
    }

    #[test]
    fn test_diamond_intersection_hits_corner_and_edge() {
        let diamond = DiamondDefinition::new(Color::white());
        let size = Size::new(180.0, 60.0);
        let a = Point::new(0.0, 0.0);

        let right = diamond.find_intersection(a, Point::new(400.0, 0.0), size);
        assert_approx_eq!(f32, right.x(), 90.0, epsilon = 0.001);

        let diagonal = diamond.find_intersection(a, Point::new(300.0, 300.0), size);
        let value = diagonal.x().abs() / 90.0 + diagonal.y().abs() / 30.0;
        assert_approx_eq!(f32, value, 1.0, epsilon = 0.001);
    }
}

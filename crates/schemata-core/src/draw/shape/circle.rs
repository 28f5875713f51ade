use std::rc::Rc;

use svg::{self, node::element as svg_element};

use super::{ShapeDefinition, apply_fill};
use crate::{
    apply_stroke,
    color::Color,
    draw::StrokeDefinition,
    geometry::{Point, Size},
};

/// Circle whose diameter is the shorter side of its bounding box.
#[derive(Debug, Clone)]
pub struct CircleDefinition {
    fill_color: Color,
    stroke: Rc<StrokeDefinition>,
}

impl CircleDefinition {
    pub fn new(fill_color: Color) -> Self {
        Self {
            fill_color,
            stroke: Rc::new(StrokeDefinition::default()),
        }
    }
}

impl ShapeDefinition for CircleDefinition {
    fn find_intersection(&self, a: Point, b: Point, a_size: Size) -> Point {
        let radius = a_size.width().min(a_size.height()) / 2.0;
        let dist = b.sub_point(a);
        let length = dist.hypot();
        if length < 0.001 || radius > length {
            return b;
        }

        a.add_point(dist.scale(radius / length))
    }

    fn footprint(&self, size: Size) -> Size {
        let diameter = size.width().min(size.height());
        Size::new(diameter, diameter)
    }

    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        let circle = svg_element::Circle::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("r", size.width().min(size.height()) / 2.0);

        let circle = apply_fill!(circle, self.fill_color);
        apply_stroke!(circle, self.stroke).into()
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
    fn test_circle_uses_shorter_side() {
        let circle = CircleDefinition::new(Color::new("#45B7D1").unwrap());
        assert_eq!(
            circle.footprint(Size::new(96.0, 80.0)),
            Size::new(80.0, 80.0)
        );

        let rendered = circle
            .render_to_svg(Size::new(96.0, 80.0), Point::new(0.0, 0.0))
            .to_string();
        assert!(rendered.contains(r#"r="40""#));
    }

    #[test]
    fn test_circle_intersection_is_at_radius() {
        let circle = CircleDefinition::new(Color::white());
        let p = circle.find_intersection(
            Point::new(10.0, 10.0),
            Point::new(110.0, 110.0),
            Size::new(40.0, 40.0),
        );

        assert_approx_eq!(f32, p.sub_point(Point::new(10.0, 10.0)).hypot(), 20.0, epsilon = 0.001);
    }
}

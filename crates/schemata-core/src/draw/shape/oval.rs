use std::rc::Rc;

use svg::{self, node::element as svg_element};

use super::{ShapeDefinition, apply_fill};
use crate::{
    apply_stroke,
    color::Color,
    draw::StrokeDefinition,
    geometry::{Point, Size},
};

/// Ellipse filling its bounding box, used for terminal (start/end) symbols.
#[derive(Debug, Clone)]
pub struct OvalDefinition {
    fill_color: Color,
    stroke: Rc<StrokeDefinition>,
}

impl OvalDefinition {
    pub fn new(fill_color: Color) -> Self {
        Self {
            fill_color,
            stroke: Rc::new(StrokeDefinition::default()),
        }
    }
}

impl ShapeDefinition for OvalDefinition {
    fn find_intersection(&self, a: Point, b: Point, a_size: Size) -> Point {
        let half_width = a_size.width() / 2.0;
        let half_height = a_size.height() / 2.0;

        let dist = b.sub_point(a);

        let length = dist.hypot();
        if length < 0.001 {
            return b;
        }

        let dx_norm = dist.x() / length;
        let dy_norm = dist.y() / length;

        // r = (a*b) / sqrt((b*cos(θ))² + (a*sin(θ))²)
        let radius = (half_width * half_height) / (half_height * dx_norm).hypot(half_width * dy_norm);
        if !radius.is_finite() || radius > length {
            return b;
        }

        Point::new(
            dx_norm.mul_add(radius, a.x()),
            dy_norm.mul_add(radius, a.y()),
        )
    }

    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        let ellipse = svg_element::Ellipse::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("rx", size.width() / 2.0)
            .set("ry", size.height() / 2.0);

        let ellipse = apply_fill!(ellipse, self.fill_color);
        apply_stroke!(ellipse, self.stroke).into()
    }

    fn clone_box(&self) -> Box<dyn ShapeDefinition> {
        Box::new(self.clone())
    }

    fn set_stroke(&mut self, stroke: Rc<StrokeDefinition>) {
        self.stroke = stroke;
    }
}

//! Shape definitions and rendering traits.
//!
//! This module provides the [`ShapeDefinition`] trait, one implementation per
//! diagram symbol, and the [`Shape`] wrapper that pairs a definition with the
//! size it is drawn at.

use std::rc::Rc;

use crate::{
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
};

mod circle;
mod diamond;
mod oval;
mod parallelogram;
mod predefined;
mod rectangle;

pub use circle::CircleDefinition;
pub use diamond::DiamondDefinition;
pub use oval::OvalDefinition;
pub use parallelogram::ParallelogramDefinition;
pub use predefined::PredefinedDefinition;
pub use rectangle::RectangleDefinition;

/// A stateless drawing routine for one kind of shape.
///
/// Implementations are asked to draw themselves centered on a position with a
/// given bounding size; they never store geometry of their own.
pub trait ShapeDefinition: std::fmt::Debug {
    /// Find the point where the segment from `a` (this shape's center) towards
    /// `b` leaves the outline of a shape of `a_size`.
    ///
    /// Returns `b` when no intersection exists, e.g. when `b` is inside the
    /// shape or coincides with `a`.
    fn find_intersection(&self, a: Point, b: Point, a_size: Size) -> Point {
        find_rectangle_intersection(a, b, a_size)
    }

    /// The area actually painted for a requested bounding `size`.
    ///
    /// Most shapes fill their bounding box; a circle only uses the square
    /// inscribed in it.
    fn footprint(&self, size: Size) -> Size {
        size
    }

    /// Renders this shape to an SVG node centered on `position`.
    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node>;

    /// Creates a boxed clone of this shape definition.
    fn clone_box(&self) -> Box<dyn ShapeDefinition>;

    /// Set stroke definition using Rc.
    fn set_stroke(&mut self, stroke: Rc<StrokeDefinition>);
}

impl Clone for Box<dyn ShapeDefinition> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// A shape definition drawn at a fixed bounding size.
#[derive(Debug, Clone)]
pub struct Shape {
    definition: Rc<Box<dyn ShapeDefinition>>,
    size: Size,
}

impl Shape {
    pub fn new(definition: Rc<Box<dyn ShapeDefinition>>, size: Size) -> Self {
        Self { definition, size }
    }

    /// Find where the segment from this shape's center at `center` towards
    /// `target` crosses the outline.
    pub fn find_intersection(&self, center: Point, target: Point) -> Point {
        self.definition
            .find_intersection(center, target, self.footprint())
    }

    /// The painted area of this shape.
    pub fn footprint(&self) -> Size {
        self.definition.footprint(self.size)
    }
}

impl Drawable for Shape {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let node = self.definition.render_to_svg(self.size, position);
        output.add_to_layer(RenderLayer::Content, node);
        output
    }

    fn size(&self) -> Size {
        self.size
    }
}

/// Formats a closed polygon as an SVG `points` attribute.
fn polygon_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x(), p.y()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Applies fill color and opacity to any SVG element.
macro_rules! apply_fill {
    ($element:expr, $color:expr) => {{
        $element
            .set("fill", $color.to_string())
            .set("fill-opacity", $color.alpha())
    }};
}
pub(crate) use apply_fill;

fn find_rectangle_intersection(a: Point, b: Point, a_size: Size) -> Point {
    let half_width = a_size.width() / 2.0;
    let half_height = a_size.height() / 2.0;

    let dist = b.sub_point(a);

    let length = dist.hypot();
    if length < 0.001 {
        return b;
    }

    let dx_norm = dist.x() / length;
    let dy_norm = dist.y() / length;

    // Ray parameter at which each edge line is reached
    let t_top = -half_height / dy_norm;
    let t_bottom = half_height / dy_norm;
    let t_left = -half_width / dx_norm;
    let t_right = half_width / dx_norm;

    let mut t = f32::MAX;

    for t_edge in [t_top, t_bottom] {
        if t_edge.is_finite() && t_edge > 0.0 && t_edge < t {
            let x = dx_norm.mul_add(t_edge, a.x());
            if x >= a.x() - half_width && x <= a.x() + half_width {
                t = t_edge;
            }
        }
    }

    for t_edge in [t_left, t_right] {
        if t_edge.is_finite() && t_edge > 0.0 && t_edge < t {
            let y = dy_norm.mul_add(t_edge, a.y());
            if y >= a.y() - half_height && y <= a.y() + half_height {
                t = t_edge;
            }
        }
    }

    if t == f32::MAX || !t.is_finite() || t > length {
        return b;
    }

    Point::new(dx_norm.mul_add(t, a.x()), dy_norm.mul_add(t, a.y()))
}

/// Intersects the ray from `a` towards `b` with the edges of a convex polygon
/// that contains `a`.
fn find_polygon_intersection(a: Point, b: Point, vertices: &[Point]) -> Point {
    let dir = b.sub_point(a);
    if dir.hypot() < 0.001 {
        return b;
    }

    let mut best_t = f32::MAX;
    for (i, start) in vertices.iter().enumerate() {
        let end = vertices[(i + 1) % vertices.len()];
        let edge = end.sub_point(*start);

        let denom = dir.x() * edge.y() - dir.y() * edge.x();
        if denom.abs() < f32::EPSILON {
            continue;
        }

        let offset = start.sub_point(a);
        // t along the ray, u along the edge
        let t = (offset.x() * edge.y() - offset.y() * edge.x()) / denom;
        let u = (offset.x() * dir.y() - offset.y() * dir.x()) / denom;

        if t > 0.0 && (-0.0001..=1.0001).contains(&u) && t < best_t {
            best_t = t;
        }
    }

    if best_t > 1.0 {
        return b;
    }

    a.add_point(dir.scale(best_t))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::color::Color;

    fn assert_point_eq(actual: Point, expected: Point) {
        assert_approx_eq!(f32, actual.x(), expected.x(), epsilon = 0.001);
        assert_approx_eq!(f32, actual.y(), expected.y(), epsilon = 0.001);
    }

    #[test]
    fn test_rectangle_intersection_axes() {
        let a = Point::new(100.0, 100.0);
        let size = Size::new(40.0, 40.0);

        let cases = [
            (Point::new(200.0, 100.0), Point::new(120.0, 100.0)),
            (Point::new(0.0, 100.0), Point::new(80.0, 100.0)),
            (Point::new(100.0, 200.0), Point::new(100.0, 120.0)),
            (Point::new(100.0, 0.0), Point::new(100.0, 80.0)),
        ];
        for (target, expected) in cases {
            assert_point_eq(find_rectangle_intersection(a, target, size), expected);
        }
    }

    #[test]
    fn test_rectangle_intersection_diagonal() {
        let a = Point::new(100.0, 100.0);
        let b = Point::new(200.0, 200.0);
        let result = find_rectangle_intersection(a, b, Size::new(40.0, 40.0));
        assert_point_eq(result, Point::new(120.0, 120.0));
    }

    #[test]
    fn test_rectangle_intersection_fallbacks() {
        let a = Point::new(100.0, 100.0);
        let size = Size::new(40.0, 40.0);

        // Same point
        assert_point_eq(find_rectangle_intersection(a, a, size), a);

        // Target inside the rectangle
        let inside = Point::new(110.0, 100.0);
        assert_point_eq(find_rectangle_intersection(a, inside, size), inside);

        // Degenerate rectangle
        let b = Point::new(200.0, 100.0);
        assert_point_eq(find_rectangle_intersection(a, b, Size::default()), b);
    }

    #[test]
    fn test_polygon_intersection_square() {
        let square = [
            Point::new(-10.0, -10.0),
            Point::new(10.0, -10.0),
            Point::new(10.0, 10.0),
            Point::new(-10.0, 10.0),
        ];
        let result = find_polygon_intersection(Point::default(), Point::new(50.0, 0.0), &square);
        assert_point_eq(result, Point::new(10.0, 0.0));

        let result = find_polygon_intersection(Point::default(), Point::new(0.0, -30.0), &square);
        assert_point_eq(result, Point::new(0.0, -10.0));
    }

    #[test]
    fn test_polygon_intersection_target_inside() {
        let triangle = [
            Point::new(0.0, -10.0),
            Point::new(10.0, 10.0),
            Point::new(-10.0, 10.0),
        ];
        let target = Point::new(0.0, 2.0);
        let result = find_polygon_intersection(Point::default(), target, &triangle);
        assert_point_eq(result, target);
    }

    #[test]
    fn test_polygon_points_format() {
        let points = [Point::new(0.0, 1.5), Point::new(2.0, 3.0)];
        assert_eq!(polygon_points(&points), "0,1.5 2,3");
    }

    #[test]
    fn test_shape_footprint_and_size() {
        let definition: Rc<Box<dyn ShapeDefinition>> =
            Rc::new(Box::new(CircleDefinition::new(Color::white())));
        let shape = Shape::new(definition, Size::new(100.0, 60.0));

        assert_eq!(shape.size(), Size::new(100.0, 60.0));
        assert_eq!(shape.footprint(), Size::new(60.0, 60.0));
    }

    #[test]
    fn test_shape_renders_on_content_layer() {
        let definition: Rc<Box<dyn ShapeDefinition>> =
            Rc::new(Box::new(RectangleDefinition::new(Color::white())));
        let shape = Shape::new(definition, Size::new(10.0, 10.0));

        let rendered = shape.render_to_layers(Point::new(5.0, 5.0)).render();
        assert_eq!(rendered.len(), 1);
        assert!(rendered[0].to_string().contains(r#"data-layer="content""#));
    }
}

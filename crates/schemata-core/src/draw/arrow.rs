//! Directed connector lines and their SVG arrowhead markers.

use std::{collections::BTreeMap, rc::Rc};

use svg::{self, node::element as svg_element};

use crate::{color::Color, draw::StrokeDefinition, geometry::Point};

/// A straight directed line with an open arrowhead at its end.
#[derive(Debug, Clone)]
pub struct Arrow {
    stroke: Rc<StrokeDefinition>,
}

impl Arrow {
    pub fn new(stroke: Rc<StrokeDefinition>) -> Self {
        Self { stroke }
    }

    /// Gets the arrow stroke definition
    pub fn stroke(&self) -> &Rc<StrokeDefinition> {
        &self.stroke
    }

    fn render_to_svg(&self, source: Point, destination: Point) -> Box<dyn svg::Node> {
        let path = svg_element::Path::new()
            .set("d", Self::create_path_data_from_points(source, destination))
            .set("fill", "none");

        let path = crate::apply_stroke!(path, self.stroke)
            .set("marker-end", format!("url(#{})", Self::marker_id(self.stroke.color())));

        Box::new(path)
    }

    fn marker_id(color: Color) -> String {
        format!("arrow-head-{}", color.to_id_safe_string())
    }

    /// Create a path data string from two points
    pub fn create_path_data_from_points(start: Point, end: Point) -> String {
        format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y())
    }

    fn create_arrow_head(color: Color) -> svg_element::Marker {
        svg_element::Marker::new()
            .set("id", Self::marker_id(color))
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                svg_element::Path::new()
                    .set("d", "M 1 1 L 9 5 L 1 9")
                    .set("fill", "none")
                    .set("stroke", color.to_string())
                    .set("stroke-opacity", color.alpha())
                    .set("stroke-width", 1.5)
                    .set("stroke-linecap", "round")
                    .set("stroke-linejoin", "round"),
            )
    }
}

/// Draws arrows and remembers which arrowhead markers they reference.
///
/// One marker is emitted per distinct color. Markers are kept sorted by id so
/// the `<defs>` block is identical between runs.
#[derive(Debug, Default)]
pub struct ArrowDrawer {
    heads: BTreeMap<String, Color>,
}

impl ArrowDrawer {
    /// Draws an arrow and registers its marker color.
    pub fn draw_arrow(
        &mut self,
        arrow: &Arrow,
        source: Point,
        destination: Point,
    ) -> Box<dyn svg::Node> {
        let color = arrow.stroke.color();
        self.heads.insert(Arrow::marker_id(color), color);
        arrow.render_to_svg(source, destination)
    }

    /// Generates SVG marker definitions for all registered colors
    pub fn draw_marker_definitions(&self) -> Box<dyn svg::Node> {
        let mut defs = svg_element::Definitions::new();
        for color in self.heads.values() {
            defs = defs.add(Arrow::create_arrow_head(*color));
        }
        defs.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_arrow(color: &str) -> Arrow {
        Arrow::new(Rc::new(StrokeDefinition::new(Color::new(color).unwrap(), 2.0)))
    }

    #[test]
    fn test_create_path_data_from_points() {
        let path = Arrow::create_path_data_from_points(
            Point::new(10.0, 20.0),
            Point::new(100.0, 50.5),
        );
        assert_eq!(path, "M 10 20 L 100 50.5");
    }

    #[test]
    fn test_arrow_references_marker() {
        let mut drawer = ArrowDrawer::default();
        let arrow = create_arrow("gray");
        let rendered = drawer
            .draw_arrow(&arrow, Point::new(0.0, 0.0), Point::new(10.0, 0.0))
            .to_string();

        assert!(rendered.contains("marker-end=\"url(#arrow-head-gray)\""));
        assert!(rendered.contains(r#"fill="none""#));
    }

    #[test]
    fn test_marker_definitions_are_deduplicated_and_sorted() {
        let mut drawer = ArrowDrawer::default();
        for color in ["gray", "blue", "gray", "blue"] {
            drawer.draw_arrow(&create_arrow(color), Point::default(), Point::new(5.0, 5.0));
        }

        let defs = drawer.draw_marker_definitions().to_string();
        assert_eq!(defs.matches("<marker").count(), 2);

        let blue = defs.find("arrow-head-blue").unwrap();
        let gray = defs.find("arrow-head-gray").unwrap();
        assert!(blue < gray);
    }

    #[test]
    fn test_marker_definitions_empty() {
        let drawer = ArrowDrawer::default();
        let defs = drawer.draw_marker_definitions().to_string();
        assert!(!defs.contains("<marker"));
    }
}

//! Drawing primitives that turn positioned elements into SVG nodes.
//!
//! Every element that can appear on a canvas implements [`Drawable`] and emits
//! its SVG nodes into a [`LayeredOutput`], which keeps z-ordering stable no
//! matter in which order elements are visited.

mod arrow;
mod arrow_with_text;
mod layer;
mod positioned;
pub mod shape;
mod shape_with_text;
mod stroke;
mod text;

pub use arrow::{Arrow, ArrowDrawer};
pub use arrow_with_text::{ArrowWithText, ArrowWithTextDrawer, LabelPosition};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use positioned::PositionedDrawable;
pub use shape::{Shape, ShapeDefinition};
pub use shape_with_text::ShapeWithText;
pub use stroke::StrokeDefinition;
pub use text::{Text, TextAnchor, TextDefinition};

use crate::geometry::{Point, Size};

/// Something that can be rendered at a position.
///
/// `position` is the anchor of the drawable in SVG pixel space; for shapes and
/// centered text it is the center point.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable into layered SVG nodes.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// Returns the size occupied by this drawable.
    fn size(&self) -> Size;
}

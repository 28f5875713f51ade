//! Text rendering for labels, annotations and titles.
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - A renderable text element combining content with a [`TextDefinition`]
//!
//! ```
//! # use schemata_core::draw::{TextDefinition, Text};
//! let mut style = TextDefinition::new();
//! style.set_font_size(9);
//! style.set_bold(true);
//!
//! let text = Text::new(&style, "Initialize System");
//! let size = text.calculate_size();
//! assert!(size.width() > 0.0);
//! ```
//!
//! Multi-line content is split on `\n` and rendered as one `<tspan>` per line.
//! Text measurement goes through a process-wide `cosmic-text` font system that
//! is created on first use.

use std::sync::{Mutex, OnceLock, PoisonError};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight};
use log::info;
use svg::{self, node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Bounds, Insets, Point, Size},
};

/// Points to pixels at 96 DPI.
const PT_TO_PX: f32 = 1.33;
const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Where the render position sits relative to the text block.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Position is the center of the block; lines are centered.
    #[default]
    Center,
    /// Position is the middle of the block's left edge; lines are left-aligned.
    Left,
    /// Position is the top-left corner of the block; lines are left-aligned.
    TopLeft,
}

impl TextAnchor {
    fn svg_text_anchor(self) -> &'static str {
        match self {
            Self::Center => "middle",
            Self::Left | Self::TopLeft => "start",
        }
    }

    /// Bounds of a block of `size` placed at `position` under this anchor.
    fn block_bounds(self, position: Point, size: Size) -> Bounds {
        match self {
            Self::Center => position.to_bounds(size),
            Self::Left => Bounds::new_from_top_left(
                position.with_y(position.y() - size.height() / 2.0),
                size,
            ),
            Self::TopLeft => Bounds::new_from_top_left(position, size),
        }
    }
}

/// Visual style for text elements.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `12` pt |
/// | Bold | `false` |
/// | Text color | `None` (SVG default, black) |
/// | Background color | `None` |
/// | Padding | Zero on all sides |
/// | Anchor | [`TextAnchor::Center`] |
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    bold: bool,
    color: Option<Color>,
    background_color: Option<Color>,
    padding: Insets,
    anchor: TextAnchor,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family.
    ///
    /// The generic names `sans-serif`, `serif` and `monospace` are resolved
    /// to whatever the system provides for them.
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    /// Sets the text color. `None` leaves the SVG default (black).
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Sets a background color.
    ///
    /// When set, a rounded rectangle covering the text plus its padding is
    /// drawn on the [`RenderLayer::Label`] layer, above connectors.
    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.background_color = color;
    }

    /// Sets the padding around the text content.
    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    pub fn set_anchor(&mut self, anchor: TextAnchor) {
        self.anchor = anchor;
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Font size in SVG pixels.
    pub fn font_size_px(&self) -> f32 {
        f32::from(self.font_size) * PT_TO_PX
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn bold(&self) -> bool {
        self.bold
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    fn background_color(&self) -> Option<&Color> {
        self.background_color.as_ref()
    }

    fn padding(&self) -> Insets {
        self.padding
    }

    fn cosmic_family(&self) -> Family<'_> {
        match self.font_family.as_str() {
            "sans-serif" => Family::SansSerif,
            "serif" => Family::Serif,
            "monospace" => Family::Monospace,
            name => Family::Name(name),
        }
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 12,
            bold: false,
            color: None,
            background_color: None,
            padding: Insets::default(),
            anchor: TextAnchor::default(),
        }
    }
}

/// A renderable text element combining content with styling.
///
/// ```
/// # use schemata_core::draw::{TextDefinition, Text};
/// let style = TextDefinition::new();
/// let text = Text::new(&style, "Authentication\nRequired?");
///
/// assert_eq!(text.content(), "Authentication\nRequired?");
/// assert!(text.calculate_size().height() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    /// Returns the text content of this element.
    pub fn content(&self) -> &str {
        self.content
    }

    /// Total size required to display this text, including padding.
    pub fn calculate_size(&self) -> Size {
        self.calculate_size_without_padding()
            .add_padding(self.definition.padding())
    }

    /// Bounds of the rendered block, padding included, for a given position.
    pub fn bounds_at(&self, position: Point) -> Bounds {
        self.definition
            .anchor()
            .block_bounds(position, self.calculate_size_without_padding())
            .add_padding(self.definition.padding())
    }

    fn calculate_size_without_padding(&self) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(self.content, self.definition)
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        if self.content.is_empty() {
            return output;
        }

        let definition = self.definition;
        let lines: Vec<&str> = self.content.split('\n').collect();

        let content_size = self.calculate_size_without_padding();
        let line_height = content_size.height() / lines.len() as f32;
        let block = definition.anchor().block_bounds(position, content_size);

        // Each tspan advances by one line; the first lands on the middle of line one
        let y_start = block.min_y() - line_height / 2.0;

        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", y_start)
            .set("text-anchor", definition.anchor().svg_text_anchor())
            .set("dominant-baseline", "central")
            .set("font-family", definition.font_family())
            .set("font-size", definition.font_size_px())
            .set("xml:space", "preserve");

        if definition.bold() {
            rendered_text = rendered_text.set("font-weight", "bold");
        }

        if let Some(color) = definition.color() {
            rendered_text = rendered_text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        for line in lines {
            let tspan = svg_element::TSpan::new("")
                .set("x", position.x())
                .set("dy", line_height)
                .add(SvgText::new(line));
            rendered_text = rendered_text.add(tspan);
        }

        if let Some(bg_color) = definition.background_color() {
            let bg_bounds = block.add_padding(definition.padding());

            let bg = svg_element::Rectangle::new()
                .set("x", bg_bounds.min_x())
                .set("y", bg_bounds.min_y())
                .set("width", bg_bounds.width())
                .set("height", bg_bounds.height())
                .set("fill", bg_color.to_string())
                .set("fill-opacity", bg_color.alpha())
                .set("rx", 3.0);

            output.add_to_layer(RenderLayer::Label, Box::new(bg));
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }

    fn size(&self) -> Size {
        self.calculate_size()
    }
}

/// Shared font system used for text measurement.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Measures `text` in pixels using real font metrics and shaping.
    ///
    /// Falls back to a character-count estimate when no font could shape the
    /// text (for example on a machine without any installed fonts).
    fn calculate_text_size(&self, text: &str, text_def: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let font_size_px = text_def.font_size_px();
        let line_height = font_size_px * LINE_HEIGHT_FACTOR;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let mut attrs = Attrs::new().family(text_def.cosmic_family());
        if text_def.bold() {
            attrs = attrs.weight(Weight::BOLD);
        }

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
        }

        let line_count = text.split('\n').count();
        if max_width <= 0.0 {
            let longest = text
                .split('\n')
                .map(|line| line.chars().count())
                .max()
                .unwrap_or_default();
            max_width = longest as f32 * font_size_px * 0.55;
        }

        Size::new(max_width, line_count as f32 * line_height)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

//! Text labels: style, measurement and SVG output.
//!
//! Label sizes are measured with cosmic-text so that canvas bounds can
//! account for annotation text. A single `FontSystem` is shared behind a
//! `OnceLock` because loading system fonts is expensive.
//!
//! ```
//! # use optika_core::draw::{Text, TextDefinition};
//! let mut style = TextDefinition::new();
//! style.set_font_size(12);
//!
//! let label = Text::new(&style, "780 nm");
//! assert!(label.calculate_size().width() > 0.0);
//! ```

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;
use svg::node::{Text as SvgText, element as svg_element};

use crate::{
    color::Color,
    draw::{LayeredOutput, RenderLayer},
    geometry::{Bounds, Insets, Point, Size},
};

/// Visual style of a label.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `10` |
/// | Text color | `None` (SVG default, black) |
/// | Background color | `None` |
/// | Padding | 2px on all sides |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    color: Option<Color>,
    background_color: Option<Color>,
    padding: Insets,
}

impl TextDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the text fill; `None` falls back to the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Sets the fill of the rounded box drawn behind the label; `None`
    /// draws no box.
    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.background_color = color;
    }

    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    pub fn background_color(&self) -> Option<&Color> {
        self.background_color.as_ref()
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 10,
            color: None,
            background_color: None,
            padding: Insets::uniform(2.0),
        }
    }
}

/// A label string paired with its style.
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

    pub fn content(&self) -> &str {
        self.content
    }

    /// Size in pixels including padding.
    pub fn calculate_size(&self) -> Size {
        self.calculate_size_without_padding()
            .add_padding(self.definition.padding())
    }

    fn calculate_size_without_padding(&self) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(self.content, self.definition)
    }

    /// Renders the label centered on `center`, given in SVG pixel space.
    ///
    /// The text goes to the [`RenderLayer::Text`] layer and the optional
    /// background box to [`RenderLayer::Annotation`], so the box sits over
    /// beams and glyphs but under every label.
    pub fn render_to_layers(&self, center: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let lines: Vec<&str> = self.content.lines().collect();
        let content_size = self.calculate_size_without_padding();
        let line_height = if lines.is_empty() {
            0.0
        } else {
            content_size.height() / lines.len() as f64
        };
        let first_baseline = -(content_size.height() + line_height) / 2.0;

        let mut rendered = svg_element::Text::new("")
            .set("x", center.x())
            .set("y", center.y() + first_baseline)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        if let Some(color) = self.definition.color() {
            rendered = rendered
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        for line in lines {
            let tspan = svg_element::TSpan::new("")
                .set("x", center.x())
                .set("dy", line_height)
                .add(SvgText::new(line));
            rendered = rendered.add(tspan);
        }

        if let Some(background) = self.definition.background_color() {
            let bounds = Bounds::new_from_center(center, self.calculate_size());
            let rect = svg_element::Rectangle::new()
                .set("x", bounds.min_x())
                .set("y", bounds.min_y())
                .set("width", bounds.width())
                .set("height", bounds.height())
                .set("fill", background.to_string())
                .set("fill-opacity", background.alpha())
                .set("rx", 2.0);
            output.add_to_layer(RenderLayer::Annotation, Box::new(rect));
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered));
        output
    }
}

/// Owns the shared `FontSystem` used for measuring labels.
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

    /// Shapes `text` and returns its extent in pixels.
    ///
    /// Falls back to an average-advance estimate when no font produced a
    /// layout run.
    fn calculate_text_size(&self, text: &str, text_def: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        // Points to pixels at 96 DPI
        let font_size_px = f32::from(text_def.font_size()) * 1.33;
        let metrics = Metrics::new(font_size_px, font_size_px * 1.15);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);
        let attrs = Attrs::new().family(Family::Name(text_def.font_family()));
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;
        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
        }

        if total_height == 0.0 {
            let widest = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
            let line_count = text.lines().count().max(1);
            max_width = widest as f32 * font_size_px * 0.55;
            total_height = line_count as f32 * metrics.line_height;
        }

        Size::new(f64::from(max_width), f64::from(total_height))
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_text_definition_defaults() {
        let def = TextDefinition::default();
        assert_eq!(def.font_size(), 10);
        assert_eq!(def.font_family(), "sans-serif");
        assert!(def.color().is_none());
        assert!(def.background_color().is_none());
        assert_approx_eq!(f64, def.padding().top(), 2.0);
    }

    #[test]
    fn test_text_definition_setters() {
        let mut def = TextDefinition::new();
        def.set_font_size(14);
        def.set_font_family("monospace");
        def.set_color(Some(Color::new("navy").unwrap()));
        def.set_background_color(Some(Color::new("white").unwrap()));
        def.set_padding(Insets::uniform(0.0));

        assert_eq!(def.font_size(), 14);
        assert_eq!(def.font_family(), "monospace");
        assert!(def.color().is_some());
        assert!(def.background_color().is_some());
        assert_approx_eq!(f64, def.padding().left(), 0.0);
    }

    #[test]
    fn test_empty_text_is_only_padding() {
        let def = TextDefinition::default();
        let size = Text::new(&def, "").calculate_size();
        assert_approx_eq!(f64, size.width(), 4.0);
        assert_approx_eq!(f64, size.height(), 4.0);
    }

    #[test]
    fn test_longer_text_is_wider() {
        let def = TextDefinition::default();
        let short = Text::new(&def, "PBS").calculate_size();
        let long = Text::new(&def, "polarizing beam splitter").calculate_size();
        assert!(long.width() > short.width());
    }

    #[test]
    fn test_multiline_text_is_taller() {
        let def = TextDefinition::default();
        let single = Text::new(&def, "EOM").calculate_size();
        let double = Text::new(&def, "EOM\n10 MHz").calculate_size();
        assert!(double.height() > single.height());
    }

    #[test]
    fn test_render_without_background() {
        let def = TextDefinition::default();
        let output = Text::new(&def, "label").render_to_layers(Point::new(10.0, 10.0));
        assert_eq!(output.len(), 1);
    }

    #[test]
    fn test_render_with_background() {
        let mut def = TextDefinition::default();
        def.set_background_color(Some(Color::new("white").unwrap()));
        let output = Text::new(&def, "label").render_to_layers(Point::new(10.0, 10.0));
        assert_eq!(output.len(), 2);
        assert_eq!(output.render().len(), 2);
    }
}

//! Text annotations and free-standing arrows.
//!
//! Both are overlays: they are drawn after every beam, component and route,
//! in the order they were added, and their positions are [`Anchor`]s that
//! are resolved only when the board is resolved.

use optika_core::{
    color::Color,
    draw::{StrokeDefinition, TextDefinition},
    geometry::Point,
};

use crate::anchor::Anchor;

/// Stroke width of arrows and leader lines, in pixels.
pub const DEFAULT_ARROW_WIDTH: f64 = 1.5;

/// A text label at an anchor.
///
/// Without a text offset the label is centered on the anchor. With one, the
/// label moves by that offset and, when the leader is enabled, an arrow
/// runs from the label back to the anchor.
///
/// ```
/// # use optika::{anchor::Anchor, annotation::Annotation};
/// # use optika_core::geometry::Point;
/// let label = Annotation::new("532 nm", Anchor::on_beam("pump", 0.5))
///     .with_leader(Point::new(0.3, 0.4));
/// assert!(label.has_leader());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    text: String,
    anchor: Anchor,
    text_offset: Option<Point>,
    leader: bool,
    text_definition: TextDefinition,
    leader_stroke: StrokeDefinition,
}

impl Annotation {
    pub fn new(text: impl Into<String>, anchor: impl Into<Anchor>) -> Self {
        Self {
            text: text.into(),
            anchor: anchor.into(),
            text_offset: None,
            leader: false,
            text_definition: TextDefinition::default(),
            leader_stroke: StrokeDefinition::solid(Color::default(), DEFAULT_ARROW_WIDTH),
        }
    }

    /// Places the text `offset` scene units away from the anchor.
    pub fn with_text_offset(mut self, offset: Point) -> Self {
        self.text_offset = Some(offset);
        self
    }

    /// Places the text `offset` away and draws a leader arrow to the anchor.
    pub fn with_leader(mut self, offset: Point) -> Self {
        self.text_offset = Some(offset);
        self.leader = true;
        self
    }

    pub fn with_text_definition(mut self, definition: TextDefinition) -> Self {
        self.text_definition = definition;
        self
    }

    /// Sets the color of both the text and the leader.
    pub fn with_color(mut self, color: Color) -> Self {
        self.text_definition.set_color(Some(color));
        self.leader_stroke.set_color(color);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn anchor(&self) -> &Anchor {
        &self.anchor
    }

    pub fn text_offset(&self) -> Option<Point> {
        self.text_offset
    }

    /// Returns `true` when a leader arrow is drawn.
    pub fn has_leader(&self) -> bool {
        self.leader && self.text_offset.is_some()
    }

    pub fn text_definition(&self) -> &TextDefinition {
        &self.text_definition
    }

    pub fn leader_stroke(&self) -> &StrokeDefinition {
        &self.leader_stroke
    }
}

/// A straight arrow between two anchors, with the head at `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    start: Anchor,
    end: Anchor,
    stroke: StrokeDefinition,
}

impl Arrow {
    pub fn new(start: impl Into<Anchor>, end: impl Into<Anchor>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            stroke: StrokeDefinition::solid(Color::default(), DEFAULT_ARROW_WIDTH),
        }
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn start(&self) -> &Anchor {
        &self.start
    }

    pub fn end(&self) -> &Anchor {
        &self.end
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }
}

/// An entry in a board's overlay list.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Annotation(Annotation),
    Arrow(Arrow),
}

impl Overlay {
    /// Every anchor the overlay needs resolved.
    pub fn anchors(&self) -> Vec<&Anchor> {
        match self {
            Self::Annotation(annotation) => vec![annotation.anchor()],
            Self::Arrow(arrow) => vec![arrow.start(), arrow.end()],
        }
    }
}

impl From<Annotation> for Overlay {
    fn from(annotation: Annotation) -> Self {
        Self::Annotation(annotation)
    }
}

impl From<Arrow> for Overlay {
    fn from(arrow: Arrow) -> Self {
        Self::Arrow(arrow)
    }
}

#[cfg(test)]
mod tests {
    use optika_core::identifier::Id;

    use super::*;

    #[test]
    fn test_plain_label_has_no_leader() {
        let label = Annotation::new("M1", Point::new(1.0, 1.0));
        assert!(!label.has_leader());
        assert_eq!(label.text_offset(), None);
        assert_eq!(label.text_definition().font_size(), 10);

        let offset_only = label.with_text_offset(Point::new(0.0, 0.3));
        assert!(!offset_only.has_leader());
    }

    #[test]
    fn test_color_applies_to_text_and_leader() {
        let red = Color::new("red").unwrap();
        let label = Annotation::new("PBS", Anchor::point(0.0, 0.0))
            .with_leader(Point::new(0.5, 0.5))
            .with_color(red);
        assert_eq!(label.text_definition().color(), Some(&red));
        assert_eq!(label.leader_stroke().color(), red);
    }

    #[test]
    fn test_arrow_defaults() {
        let arrow = Arrow::new(Anchor::point(0.0, 0.0), Anchor::on_beam("probe", 1.0));
        assert_eq!(arrow.stroke().width(), DEFAULT_ARROW_WIDTH);
        assert_eq!(arrow.end().target(), Some(Id::new("probe")));
    }

    #[test]
    fn test_overlay_anchors() {
        let arrow: Overlay = Arrow::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0)).into();
        assert_eq!(arrow.anchors().len(), 2);

        let label: Overlay = Annotation::new("L1", Anchor::on_beam("b", 0.2)).into();
        assert_eq!(label.anchors().len(), 1);
    }
}

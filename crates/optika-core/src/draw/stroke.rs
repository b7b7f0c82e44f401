//! Stroke definitions shared by beams, component outlines, routes and arrows.
//!
//! A [`StrokeDefinition`] bundles color, width, dash pattern, cap and join.
//! Widths are in output pixels so that line weights stay constant however
//! the scene is scaled onto the canvas.
//!
//! | Property | SVG attribute |
//! |----------|---------------|
//! | `color` | `stroke`, `stroke-opacity` |
//! | `width` | `stroke-width` |
//! | `style` | `stroke-dasharray` |
//! | `cap` | `stroke-linecap` |
//! | `join` | `stroke-linejoin` |
//!
//! ```
//! use optika_core::color::Color;
//! use optika_core::draw::{StrokeCap, StrokeDefinition};
//!
//! let beam = StrokeDefinition::solid(Color::new("#00ff00").unwrap(), 2.0)
//!     .with_cap(StrokeCap::Round);
//! assert_eq!(beam.width(), 2.0);
//! ```

use crate::color::Color;

/// Dash pattern of a stroke.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    #[default]
    Solid,
    /// 5px dash, 5px gap
    Dashed,
}

impl StrokeStyle {
    /// SVG dasharray, or `None` for solid lines.
    pub fn to_svg_value(&self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5"),
        }
    }
}

/// How open line ends are drawn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl StrokeCap {
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// How polyline corners are drawn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl StrokeJoin {
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

/// A complete stroke: color, width in pixels, dash style, cap and join.
///
/// The default is a 1px solid black line with butt caps and miter joins.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f64,
    style: StrokeStyle,
    cap: StrokeCap,
    join: StrokeJoin,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width.
    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            ..Self::default()
        }
    }

    /// Same as [`StrokeDefinition::new`], named for symmetry with
    /// [`StrokeDefinition::dashed`].
    pub fn solid(color: Color, width: f64) -> Self {
        Self::new(color, width)
    }

    pub fn dashed(color: Color, width: f64) -> Self {
        Self::new(color, width).with_style(StrokeStyle::Dashed)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    pub fn join(&self) -> StrokeJoin {
        self.join
    }

    /// Recolors the stroke in place.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_join(mut self, join: StrokeJoin) -> Self {
        self.join = join;
        self
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            style: StrokeStyle::default(),
            cap: StrokeCap::default(),
            join: StrokeJoin::default(),
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// ```
/// use optika_core::color::Color;
/// use optika_core::draw::StrokeDefinition;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::dashed(Color::new("gray").unwrap(), 1.0);
/// let path = svg_element::Path::new().set("d", "M 0 0 L 10 0");
/// let path = optika_core::apply_stroke!(path, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", $stroke.cap().to_svg_value())
            .set("stroke-linejoin", $stroke.join().to_svg_value());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

use optika_core::geometry::Point;

use super::{Glyph, Paint, Primitive};
use crate::component::SizeParams;

/// Beam-splitter cube: a filled square with the coated diagonal running
/// from the top-left to the bottom-right corner.
pub(super) fn cube(size: &SizeParams) -> Glyph {
    let (half_w, half_h) = (size.width() / 2.0, size.height() / 2.0);

    let mut glyph = Glyph::new();
    glyph
        .push(
            Paint::Body,
            Primitive::centered_rectangle(Point::default(), size.width(), size.height()),
        )
        .push(
            Paint::Outline,
            Primitive::line(Point::new(-half_w, half_h), Point::new(half_w, -half_h)),
        );
    glyph
}

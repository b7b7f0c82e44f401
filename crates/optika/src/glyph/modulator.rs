use optika_core::geometry::Point;

use super::{Glyph, Paint, Primitive};
use crate::component::SizeParams;

/// Free-space EOM: a crystal body between two electrode caps.
///
/// Each cap is `factor` of the height; the body fills what is left.
pub(super) fn eom(size: &SizeParams) -> Glyph {
    let (width, height) = (size.width(), size.height());
    let cap = height * size.factor().min(0.5);
    let body = height - 2.0 * cap;
    let left = -width / 2.0;

    let mut glyph = Glyph::new();
    if body > 0.0 {
        glyph.push(
            Paint::Body,
            Primitive::centered_rectangle(Point::default(), width, body),
        );
    }
    if cap > 0.0 {
        glyph
            .push(
                Paint::Accent,
                Primitive::rectangle(Point::new(left, body / 2.0), width, cap),
            )
            .push(
                Paint::Accent,
                Primitive::rectangle(Point::new(left, -height / 2.0), width, cap),
            );
    }
    glyph
}

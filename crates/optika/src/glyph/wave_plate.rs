use optika_core::geometry::Point;

use super::{Glyph, Paint, Primitive};
use crate::component::SizeParams;

/// A thin filled slab; half- and quarter-wave plates differ only in color.
pub(super) fn plate(size: &SizeParams) -> Glyph {
    let mut glyph = Glyph::new();
    glyph.push(
        Paint::Body,
        Primitive::centered_rectangle(Point::default(), size.width(), size.height()),
    );
    glyph
}

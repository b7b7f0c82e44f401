//! Flat and dichroic mirrors.

use optika_core::geometry::Point;

use super::{Glyph, Paint, Primitive};
use crate::component::SizeParams;

/// Substrate of `width` x `height` with a dark bar along the back (+x) side.
///
/// The bar takes `factor` of the thickness.
pub(super) fn mirror(size: &SizeParams) -> Glyph {
    let (thickness, height) = (size.width(), size.height());
    let bar = thickness * size.factor().min(1.0);

    let mut glyph = Glyph::new();
    glyph.push(
        Paint::Body,
        Primitive::centered_rectangle(Point::default(), thickness, height),
    );
    if bar > 0.0 {
        glyph.push(
            Paint::Accent,
            Primitive::rectangle(
                Point::new(thickness / 2.0 - bar, -height / 2.0),
                bar,
                height,
            ),
        );
    }
    glyph
}

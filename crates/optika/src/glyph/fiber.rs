//! Fiber-domain housings: collimator, beam-splitter, dichroic and EOM.

use optika_core::geometry::Point;

use super::{Glyph, Paint, Primitive};
use crate::component::SizeParams;

/// Widths of the collimator's three blocks (lens housing, body, fiber boot),
/// left to right, for a collimator `width` wide.
pub(crate) fn collimator_blocks(width: f64) -> (f64, f64, f64) {
    let block = width * 5.668_000_2 / 23.427_979;
    let left = block * 1.2;
    (left, left * 1.5, block * 0.7)
}

/// Three blocks laid left to right from the free-space end at `-width / 2`.
pub(super) fn collimator(size: &SizeParams) -> Glyph {
    let (width, height) = (size.width(), size.height());
    let (left_w, center_w, right_w) = collimator_blocks(width);

    let mut x = -width / 2.0;
    let mut glyph = Glyph::new();
    for (block_w, block_h) in [
        (left_w, height * 1.3),
        (center_w, height * 1.1),
        (right_w, height * 0.25),
    ] {
        glyph.push(
            Paint::Body,
            Primitive::rectangle(Point::new(x, -block_h / 2.0), block_w, block_h),
        );
        x += block_w;
    }
    glyph
}

/// Housing with a crossed coupler mark.
pub(super) fn beam_splitter(size: &SizeParams) -> Glyph {
    let (half_w, quarter_h) = (size.width() / 2.0, size.height() / 4.0);
    let mut glyph = housing(size);
    glyph
        .push(
            Paint::Outline,
            Primitive::line(
                Point::new(-half_w, quarter_h),
                Point::new(half_w, -quarter_h),
            ),
        )
        .push(
            Paint::Outline,
            Primitive::line(
                Point::new(-half_w, -quarter_h),
                Point::new(half_w, quarter_h),
            ),
        );
    glyph
}

/// Housing with a tilted filter mark.
pub(super) fn dichroic(size: &SizeParams) -> Glyph {
    let (quarter_w, half_h) = (size.width() / 4.0, size.height() / 2.0);
    let mut glyph = housing(size);
    glyph.push(
        Paint::Outline,
        Primitive::line(
            Point::new(-quarter_w, -half_h),
            Point::new(quarter_w, half_h),
        ),
    );
    glyph
}

/// Housing with the waveguide drawn through its middle.
pub(super) fn eom(size: &SizeParams) -> Glyph {
    let half_w = size.width() / 2.0;
    let mut glyph = housing(size);
    glyph.push(
        Paint::Outline,
        Primitive::line(Point::new(-half_w, 0.0), Point::new(half_w, 0.0)),
    );
    glyph
}

fn housing(size: &SizeParams) -> Glyph {
    let mut glyph = Glyph::new();
    glyph.push(
        Paint::Body,
        Primitive::centered_rectangle(Point::default(), size.width(), size.height()),
    );
    glyph
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::component::ComponentKind;

    #[test]
    fn test_collimator_blocks_scale_with_width() {
        let (left, center, right) = collimator_blocks(2.0);
        let (left_1, center_1, right_1) = collimator_blocks(1.0);
        assert_approx_eq!(f64, left, 2.0 * left_1, epsilon = 1e-12);
        assert_approx_eq!(f64, center, 1.5 * left, epsilon = 1e-12);
        assert_approx_eq!(f64, right, 2.0 * right_1, epsilon = 1e-12);
    }

    #[test]
    fn test_collimator_starts_at_free_space_end() {
        let glyph = collimator(&SizeParams::for_kind(ComponentKind::FiberCollimator));
        assert_eq!(glyph.elements().len(), 3);

        let bounds = glyph.bounds().unwrap();
        assert_approx_eq!(f64, bounds.min_x(), -0.5, epsilon = 1e-12);
        // The lens housing is the tallest block
        assert_approx_eq!(f64, bounds.height(), 0.45 * 1.3, epsilon = 1e-12);
    }

    #[test]
    fn test_housings_share_one_body() {
        let size = SizeParams::for_kind(ComponentKind::FiberEom);
        for glyph in [beam_splitter(&size), dichroic(&size), eom(&size)] {
            let bodies = glyph
                .elements()
                .iter()
                .filter(|element| element.paint() == Paint::Body)
                .count();
            assert_eq!(bodies, 1);

            let bounds = glyph.bounds().unwrap();
            assert_approx_eq!(f64, bounds.width(), 0.9, epsilon = 1e-12);
            assert_approx_eq!(f64, bounds.height(), 0.4, epsilon = 1e-12);
        }
    }
}

//! Convex, concave and plano-convex lenses.
//!
//! Lens bodies are single closed contours traced clockwise from the top-left
//! corner. Curved faces are circular arcs fitted through the face's corners
//! with the sagitta set by the thickness ratio; a face whose sagitta
//! vanishes is drawn straight.

use optika_core::geometry::{Arc, Point};

use super::{Glyph, Paint, Primitive, Segment, sagitta_arc};
use crate::component::SizeParams;

/// Biconvex lens with edge thickness `width` and center thickness
/// `width * factor`.
pub(super) fn convex(size: &SizeParams) -> Glyph {
    let (edge, height) = (size.width(), size.height());
    let center = edge * size.factor();
    let corners = Corners::new(edge, height);

    let (right, left) = match sagitta_arc(height / 2.0, (center - edge) / 2.0) {
        Some((radius, half_angle)) => (
            Segment::ArcTo(Arc::new(
                Point::new(center / 2.0 - radius, 0.0),
                radius,
                half_angle,
                -2.0 * half_angle,
            )),
            Segment::ArcTo(Arc::new(
                Point::new(radius - center / 2.0, 0.0),
                radius,
                180.0 + half_angle,
                -2.0 * half_angle,
            )),
        ),
        None => (
            Segment::LineTo(corners.right_bottom),
            Segment::LineTo(corners.left_top),
        ),
    };

    body(
        corners.left_top,
        vec![
            Segment::LineTo(corners.right_top),
            right,
            Segment::LineTo(corners.left_bottom),
            left,
        ],
    )
}

/// Biconcave lens with edge thickness `width` and waist `width * factor`.
pub(super) fn concave(size: &SizeParams) -> Glyph {
    let (edge, height) = (size.width(), size.height());
    let waist = edge * size.factor();
    let corners = Corners::new(edge, height);

    let (right, left) = match sagitta_arc(height / 2.0, (edge - waist) / 2.0) {
        Some((radius, half_angle)) => (
            Segment::ArcTo(Arc::new(
                Point::new(waist / 2.0 + radius, 0.0),
                radius,
                180.0 - half_angle,
                2.0 * half_angle,
            )),
            Segment::ArcTo(Arc::new(
                Point::new(-waist / 2.0 - radius, 0.0),
                radius,
                -half_angle,
                2.0 * half_angle,
            )),
        ),
        None => (
            Segment::LineTo(corners.right_bottom),
            Segment::LineTo(corners.left_top),
        ),
    };

    body(
        corners.left_top,
        vec![
            Segment::LineTo(corners.right_top),
            right,
            Segment::LineTo(corners.left_bottom),
            left,
        ],
    )
}

/// Flat on the front (-x) face, convex on the back with center thickness
/// `width * factor` measured as for [`convex`].
pub(super) fn plano_convex(size: &SizeParams) -> Glyph {
    let (edge, height) = (size.width(), size.height());
    let center = edge * size.factor();
    let corners = Corners::new(edge, height);

    let right = match sagitta_arc(height / 2.0, (center - edge) / 2.0) {
        Some((radius, half_angle)) => Segment::ArcTo(Arc::new(
            Point::new(center / 2.0 - radius, 0.0),
            radius,
            half_angle,
            -2.0 * half_angle,
        )),
        None => Segment::LineTo(corners.right_bottom),
    };

    body(
        corners.left_top,
        vec![
            Segment::LineTo(corners.right_top),
            right,
            Segment::LineTo(corners.left_bottom),
            Segment::LineTo(corners.left_top),
        ],
    )
}

struct Corners {
    left_top: Point,
    right_top: Point,
    right_bottom: Point,
    left_bottom: Point,
}

impl Corners {
    fn new(edge: f64, height: f64) -> Self {
        let (x, y) = (edge / 2.0, height / 2.0);
        Self {
            left_top: Point::new(-x, y),
            right_top: Point::new(x, y),
            right_bottom: Point::new(x, -y),
            left_bottom: Point::new(-x, -y),
        }
    }
}

fn body(start: Point, segments: Vec<Segment>) -> Glyph {
    let mut glyph = Glyph::new();
    glyph.push(
        Paint::Body,
        Primitive::Contour {
            start,
            segments,
            closed: true,
        },
    );
    glyph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentKind;

    fn arcs(glyph: &Glyph) -> Vec<Arc> {
        let Primitive::Contour { segments, .. } = glyph.elements()[0].primitive() else {
            return Vec::new();
        };
        segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::ArcTo(arc) => Some(*arc),
                Segment::LineTo(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_convex_arcs_meet_the_corners() {
        let glyph = convex(&SizeParams::for_kind(ComponentKind::ConvexLens));
        let arcs = arcs(&glyph);
        assert_eq!(arcs.len(), 2);

        let corners = Corners::new(0.05, 1.2);
        assert!(arcs[0].start_point().approx_eq(corners.right_top, 1e-9));
        assert!(arcs[0].end_point().approx_eq(corners.right_bottom, 1e-9));
        assert!(arcs[1].start_point().approx_eq(corners.left_bottom, 1e-9));
        assert!(arcs[1].end_point().approx_eq(corners.left_top, 1e-9));
    }

    #[test]
    fn test_concave_arcs_curve_inwards() {
        let glyph = concave(&SizeParams::for_kind(ComponentKind::ConcaveLens));
        let arcs = arcs(&glyph);
        assert_eq!(arcs.len(), 2);

        // Mid-points of both faces sit on the waist, 0.6 * 0.45 wide
        let right_mid = arcs[0].point_at(180.0);
        let left_mid = arcs[1].point_at(0.0);
        assert!(right_mid.approx_eq(Point::new(0.135, 0.0), 1e-9));
        assert!(left_mid.approx_eq(Point::new(-0.135, 0.0), 1e-9));
    }

    #[test]
    fn test_plano_convex_has_one_curved_face() {
        let glyph = plano_convex(&SizeParams::for_kind(ComponentKind::PlanoConvexLens));
        assert_eq!(arcs(&glyph).len(), 1);
    }
}

//! Glyph catalog: the local-frame drawing of every component kind.
//!
//! A [`Glyph`] is an ordered list of primitives, each tagged with a
//! [`Paint`] role that decides how the component's style is applied. Glyphs
//! are authored around the optical center at the local origin with the
//! optical face along the local y axis; placement is applied afterwards with
//! [`Glyph::transformed`].
//!
//! Each kind has its own pure generator function in a submodule;
//! [`glyph_for`] only validates the size and dispatches.

use optika_core::geometry::{Arc, Bounds, EPSILON, Point, Transform, bounding_box};

use crate::{
    Error,
    component::{ComponentKind, SizeParams},
};

mod fiber;
mod lens;
mod mirror;
mod modulator;
mod splitter;
mod wave_plate;

pub(crate) use fiber::collimator_blocks;

/// How a primitive is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Stroke only
    Outline,
    /// Filled with the body fill and stroked
    Body,
    /// Filled with the accent fill and stroked
    Accent,
}

/// One step of a [`Primitive::Contour`].
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    LineTo(Point),
    /// Arc whose start point is the current contour point.
    ArcTo(Arc),
}

impl Segment {
    #[cfg(test)]
    fn end_point(&self) -> Point {
        match self {
            Self::LineTo(point) => *point,
            Self::ArcTo(arc) => arc.end_point(),
        }
    }

    fn transformed(&self, transform: &Transform) -> Self {
        match self {
            Self::LineTo(point) => Self::LineTo(transform.apply(*point)),
            Self::ArcTo(arc) => Self::ArcTo(transform.apply_arc(arc)),
        }
    }
}

/// A drawable shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Polyline { points: Vec<Point>, closed: bool },
    Arc(Arc),
    /// A path of line and arc segments starting at `start`.
    Contour {
        start: Point,
        segments: Vec<Segment>,
        closed: bool,
    },
}

impl Primitive {
    /// Closed axis-aligned rectangle.
    pub fn rectangle(min: Point, width: f64, height: f64) -> Self {
        let (x0, y0) = (min.x(), min.y());
        let (x1, y1) = (x0 + width, y0 + height);
        Self::Polyline {
            points: vec![
                Point::new(x0, y0),
                Point::new(x1, y0),
                Point::new(x1, y1),
                Point::new(x0, y1),
            ],
            closed: true,
        }
    }

    /// Closed rectangle centered on `center`.
    pub fn centered_rectangle(center: Point, width: f64, height: f64) -> Self {
        Self::rectangle(
            Point::new(center.x() - width / 2.0, center.y() - height / 2.0),
            width,
            height,
        )
    }

    /// Open two-point line.
    pub fn line(from: Point, to: Point) -> Self {
        Self::Polyline {
            points: vec![from, to],
            closed: false,
        }
    }

    pub fn transformed(&self, transform: &Transform) -> Self {
        match self {
            Self::Polyline { points, closed } => Self::Polyline {
                points: transform.apply_all(points),
                closed: *closed,
            },
            Self::Arc(arc) => Self::Arc(transform.apply_arc(arc)),
            Self::Contour {
                start,
                segments,
                closed,
            } => Self::Contour {
                start: transform.apply(*start),
                segments: segments
                    .iter()
                    .map(|segment| segment.transformed(transform))
                    .collect(),
                closed: *closed,
            },
        }
    }

    /// Points whose bounding box is the bounding box of the primitive.
    pub fn extreme_points(&self) -> Vec<Point> {
        match self {
            Self::Polyline { points, .. } => points.clone(),
            Self::Arc(arc) => arc.extreme_points(),
            Self::Contour {
                start, segments, ..
            } => {
                let mut points = vec![*start];
                for segment in segments {
                    match segment {
                        Segment::LineTo(point) => points.push(*point),
                        Segment::ArcTo(arc) => points.extend(arc.extreme_points()),
                    }
                }
                points
            }
        }
    }
}

/// A primitive with its paint role.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    paint: Paint,
    primitive: Primitive,
}

impl Element {
    pub fn new(paint: Paint, primitive: Primitive) -> Self {
        Self { paint, primitive }
    }

    pub fn paint(&self) -> Paint {
        self.paint
    }

    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }
}

/// The drawing of one component, in draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Glyph {
    elements: Vec<Element>,
}

impl Glyph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a primitive, drawn over everything already in the glyph.
    pub fn push(&mut self, paint: Paint, primitive: Primitive) -> &mut Self {
        self.elements.push(Element::new(paint, primitive));
        self
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The same glyph with every primitive mapped through `transform`.
    pub fn transformed(&self, transform: &Transform) -> Self {
        Self {
            elements: self
                .elements
                .iter()
                .map(|element| Element::new(element.paint, element.primitive.transformed(transform)))
                .collect(),
        }
    }

    /// Every point that contributes to the bounds, arcs by their extremes.
    pub fn points(&self) -> Vec<Point> {
        self.elements
            .iter()
            .flat_map(|element| element.primitive.extreme_points())
            .collect()
    }

    /// Axis-aligned bounds of the drawing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGeometry`] for a glyph with no primitives.
    pub fn bounds(&self) -> Result<Bounds, Error> {
        Ok(bounding_box(self.points())?)
    }
}

/// Builds the local-frame glyph of `kind`.
///
/// Identical inputs always produce identical glyphs.
///
/// # Errors
///
/// Returns [`Error::InvalidSize`] when the width or height is not finite and
/// positive, or the shape factor is not finite and non-negative.
///
/// ```
/// # use optika::component::{ComponentKind, SizeParams};
/// # use optika::glyph::glyph_for;
/// let kind = ComponentKind::ConvexLens;
/// let glyph = glyph_for(kind, &SizeParams::for_kind(kind)).unwrap();
/// let bounds = glyph.bounds().unwrap();
/// assert!((bounds.height() - 1.2).abs() < 1e-9);
/// ```
pub fn glyph_for(kind: ComponentKind, size: &SizeParams) -> Result<Glyph, Error> {
    validate(kind, size)?;
    let glyph = match kind {
        ComponentKind::FlatMirror | ComponentKind::DichroicMirror => mirror::mirror(size),
        ComponentKind::ConvexLens => lens::convex(size),
        ComponentKind::ConcaveLens => lens::concave(size),
        ComponentKind::PlanoConvexLens => lens::plano_convex(size),
        ComponentKind::Pbs | ComponentKind::Npbs => splitter::cube(size),
        ComponentKind::Eom => modulator::eom(size),
        ComponentKind::HalfWavePlate | ComponentKind::QuarterWavePlate => wave_plate::plate(size),
        ComponentKind::FiberCollimator => fiber::collimator(size),
        ComponentKind::FiberBeamSplitter => fiber::beam_splitter(size),
        ComponentKind::FiberDichroic => fiber::dichroic(size),
        ComponentKind::FiberEom => fiber::eom(size),
    };
    Ok(glyph)
}

fn validate(kind: ComponentKind, size: &SizeParams) -> Result<(), Error> {
    let positive = |value: f64| value.is_finite() && value > 0.0;
    if !positive(size.width()) || !positive(size.height()) {
        return Err(Error::InvalidSize(format!(
            "{kind} needs a positive width and height, got {} x {}",
            size.width(),
            size.height()
        )));
    }
    if !(size.factor().is_finite() && size.factor() >= 0.0) {
        return Err(Error::InvalidSize(format!(
            "{kind} shape factor must be finite and non-negative, got {}",
            size.factor()
        )));
    }
    Ok(())
}

/// Radius and half-angle (degrees) of the circle through a chord of
/// half-length `half_chord` whose arc bulges `sagitta` from the chord.
///
/// The half-angle exceeds 90° when the sagitta is longer than the half
/// chord, i.e. the arc is more than a half circle. Returns `None` for a
/// sagitta too small to draw as an arc.
fn sagitta_arc(half_chord: f64, sagitta: f64) -> Option<(f64, f64)> {
    if sagitta < EPSILON {
        return None;
    }
    let radius = half_chord.mul_add(half_chord, sagitta * sagitta) / (2.0 * sagitta);
    let half_angle = half_chord.atan2(radius - sagitta).to_degrees();
    Some((radius, half_angle))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use optika_core::geometry::compose_transform;

    use super::*;

    fn default_glyph(kind: ComponentKind) -> Glyph {
        glyph_for(kind, &SizeParams::for_kind(kind)).unwrap()
    }

    #[test]
    fn test_every_kind_draws() {
        for kind in ComponentKind::ALL {
            let glyph = default_glyph(kind);
            assert!(!glyph.is_empty(), "{kind} drew nothing");
            assert!(glyph.bounds().is_ok());
        }
    }

    #[test]
    fn test_glyphs_are_deterministic() {
        for kind in ComponentKind::ALL {
            assert_eq!(default_glyph(kind), default_glyph(kind));
        }
    }

    #[test]
    fn test_invalid_sizes_rejected() {
        let kind = ComponentKind::FlatMirror;
        for size in [
            SizeParams::new(0.0, 1.2, 0.285),
            SizeParams::new(0.22, -1.0, 0.285),
            SizeParams::new(f64::NAN, 1.2, 0.285),
            SizeParams::new(0.22, 1.2, f64::INFINITY),
            SizeParams::new(0.22, 1.2, -0.5),
        ] {
            assert!(matches!(glyph_for(kind, &size), Err(Error::InvalidSize(_))));
        }
    }

    #[test]
    fn test_empty_glyph_has_no_bounds() {
        assert!(matches!(Glyph::new().bounds(), Err(Error::EmptyGeometry)));
    }

    #[test]
    fn test_mirror_bounds() {
        let bounds = default_glyph(ComponentKind::FlatMirror).bounds().unwrap();
        assert_approx_eq!(f64, bounds.min_x(), -0.11, epsilon = 1e-12);
        assert_approx_eq!(f64, bounds.max_x(), 0.11, epsilon = 1e-12);
        assert_approx_eq!(f64, bounds.height(), 1.2, epsilon = 1e-12);
    }

    #[test]
    fn test_convex_lens_bulges_to_center_thickness() {
        // Center thickness is 0.05 * 6
        let bounds = default_glyph(ComponentKind::ConvexLens).bounds().unwrap();
        assert_approx_eq!(f64, bounds.max_x(), 0.15, epsilon = 1e-9);
        assert_approx_eq!(f64, bounds.min_x(), -0.15, epsilon = 1e-9);
        assert_approx_eq!(f64, bounds.height(), 1.2, epsilon = 1e-9);
    }

    #[test]
    fn test_concave_lens_is_bounded_by_edges() {
        let bounds = default_glyph(ComponentKind::ConcaveLens).bounds().unwrap();
        assert_approx_eq!(f64, bounds.width(), 0.6, epsilon = 1e-9);
        assert_approx_eq!(f64, bounds.height(), 1.2, epsilon = 1e-9);
    }

    #[test]
    fn test_plano_convex_is_flat_on_the_left() {
        let bounds = default_glyph(ComponentKind::PlanoConvexLens).bounds().unwrap();
        assert_approx_eq!(f64, bounds.min_x(), -0.025, epsilon = 1e-9);
        assert_approx_eq!(f64, bounds.max_x(), 0.3, epsilon = 1e-9);
    }

    #[test]
    fn test_flat_lens_degrades_to_lines() {
        let size = SizeParams::for_kind(ComponentKind::ConvexLens).with_factor(1.0);
        let glyph = glyph_for(ComponentKind::ConvexLens, &size).unwrap();
        let Primitive::Contour { segments, .. } = glyph.elements()[0].primitive() else {
            panic!("lens body is a contour");
        };
        assert!(
            segments
                .iter()
                .all(|segment| matches!(segment, Segment::LineTo(_)))
        );
    }

    #[test]
    fn test_lens_contours_close_on_their_start() {
        for kind in [
            ComponentKind::ConvexLens,
            ComponentKind::ConcaveLens,
            ComponentKind::PlanoConvexLens,
        ] {
            let glyph = default_glyph(kind);
            let Primitive::Contour {
                start, segments, ..
            } = glyph.elements()[0].primitive()
            else {
                panic!("{kind} body is a contour");
            };
            let end = segments.last().unwrap().end_point();
            assert!(end.approx_eq(*start, 1e-9), "{kind} contour is open");
        }
    }

    #[test]
    fn test_rotated_mirror_keeps_its_center() {
        let local = default_glyph(ComponentKind::FlatMirror);
        let position = Point::new(2.0, 2.0);

        let upright = local.transformed(&compose_transform(position, 0.0));
        let tilted = local.transformed(&compose_transform(position, 45.0));
        let upright = upright.bounds().unwrap();
        let tilted = tilted.bounds().unwrap();

        assert!(!upright.approx_eq(&tilted, 1e-6));
        assert!(upright.center().approx_eq(position, 1e-9));
        assert!(tilted.center().approx_eq(position, 1e-9));
    }

    #[test]
    fn test_arc_bounds_follow_rotation() {
        let local = default_glyph(ComponentKind::ConvexLens);
        let turned = local.transformed(&compose_transform(Point::default(), 90.0));
        let bounds = turned.bounds().unwrap();
        assert_approx_eq!(f64, bounds.width(), 1.2, epsilon = 1e-9);
        assert_approx_eq!(f64, bounds.height(), 0.3, epsilon = 1e-9);
    }

    #[test]
    fn test_sagitta_arc() {
        assert!(sagitta_arc(0.6, 0.0).is_none());
        assert!(sagitta_arc(0.6, -0.1).is_none());

        // A half circle: sagitta equals the half chord
        let (radius, half_angle) = sagitta_arc(1.0, 1.0).unwrap();
        assert_approx_eq!(f64, radius, 1.0, epsilon = 1e-12);
        assert_approx_eq!(f64, half_angle, 90.0, epsilon = 1e-9);

        // Deeper than a half circle
        let (radius, half_angle) = sagitta_arc(1.0, 2.0).unwrap();
        assert_approx_eq!(f64, radius, 1.25, epsilon = 1e-12);
        assert_approx_eq!(f64, half_angle, 180.0 - 0.8f64.asin().to_degrees(), epsilon = 1e-9);
    }

    #[test]
    fn test_deep_convex_lens_meets_its_corners() {
        let size = SizeParams::for_kind(ComponentKind::ConvexLens).with_factor(30.0);
        let glyph = glyph_for(ComponentKind::ConvexLens, &size).unwrap();
        let Primitive::Contour { start, segments, .. } = glyph.elements()[0].primitive() else {
            panic!("convex lens body is a contour");
        };

        // Right face arc starts at the top-right corner and ends at the bottom-right one
        let Segment::ArcTo(right) = &segments[1] else {
            panic!("right face is an arc");
        };
        assert!(right.start_point().approx_eq(Point::new(0.025, 0.6), 1e-9));
        assert!(right.end_point().approx_eq(Point::new(0.025, -0.6), 1e-9));
        assert!(segments.last().unwrap().end_point().approx_eq(*start, 1e-9));

        // Center thickness is the requested 1.5
        let bounds = glyph.bounds().unwrap();
        assert_approx_eq!(f64, bounds.width(), 1.5, epsilon = 1e-9);
    }
}

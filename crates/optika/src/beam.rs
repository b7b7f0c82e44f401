//! Beams: wavelength-tagged polylines authored directly in scene space.
//!
//! A [`Beam`] is built append-only. The path is whatever the caller says it
//! is; no reflection or refraction is computed. Branches (e.g. the second
//! output of a beam-splitter) are separate beams started from a point on the
//! parent with [`Beam::branch`].

use log::{debug, trace};

use optika_core::{
    color::Color,
    geometry::{Bounds, EPSILON, Point},
    identifier::Id,
};

use crate::Error;

/// Default stroke width of a beam, in pixels.
pub const DEFAULT_BEAM_WIDTH: f64 = 2.0;

/// A light path with a wavelength.
///
/// Invariants: at least one point, and no two consecutive points coincide.
/// A point equal to the current end is dropped on append.
///
/// # Examples
///
/// ```
/// # use optika::beam::Beam;
/// # use optika_core::geometry::Point;
/// let mut beam = Beam::new("pump", 532.0, Point::new(0.0, 0.0)).unwrap();
/// beam.line_to(Point::new(2.0, 0.0))
///     .line_to(Point::new(2.0, 2.0));
///
/// assert_eq!(beam.points().len(), 3);
/// assert_eq!(beam.length(), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Beam {
    id: Id,
    wavelength_nm: f64,
    points: Vec<Point>,
    color: Option<Color>,
    width: f64,
    show_arrow: bool,
}

impl Beam {
    /// Starts a beam at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWavelength`] unless the wavelength is finite
    /// and positive.
    pub fn new(id: impl Into<Id>, wavelength_nm: f64, start: Point) -> Result<Self, Error> {
        if !(wavelength_nm.is_finite() && wavelength_nm > 0.0) {
            return Err(Error::InvalidWavelength(wavelength_nm));
        }
        Ok(Self {
            id: id.into(),
            wavelength_nm,
            points: vec![start],
            color: None,
            width: DEFAULT_BEAM_WIDTH,
            show_arrow: true,
        })
    }

    /// Builds a beam from a complete point sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGeometry`] for an empty sequence and
    /// [`Error::InvalidWavelength`] for a bad wavelength.
    pub fn from_points<I>(id: impl Into<Id>, wavelength_nm: f64, points: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points = points.into_iter();
        let start = points.next().ok_or(Error::EmptyGeometry)?;
        let mut beam = Self::new(id, wavelength_nm, start)?;
        beam.extend(points);
        Ok(beam)
    }

    /// Starts a new beam at `at` that inherits this beam's wavelength and
    /// style. `at` is usually one of this beam's points.
    pub fn branch(&self, id: impl Into<Id>, at: Point) -> Self {
        Self {
            id: id.into(),
            points: vec![at],
            ..self.clone()
        }
    }

    /// Appends a segment ending at `point`.
    pub fn line_to(&mut self, point: Point) -> &mut Self {
        let last = self.end();
        if last.approx_eq(point, EPSILON) {
            debug!(beam = self.id.to_string(), x = point.x(), y = point.y(); "Collapsing duplicate beam point");
            return self;
        }
        trace!(beam = self.id.to_string(), x = point.x(), y = point.y(); "Beam segment added");
        self.points.push(point);
        self
    }

    /// Appends every point in order, as repeated [`Beam::line_to`] calls.
    pub fn extend<I>(&mut self, points: I) -> &mut Self
    where
        I: IntoIterator<Item = Point>,
    {
        for point in points {
            self.line_to(point);
        }
        self
    }

    /// Overrides the wavelength-derived color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the stroke width in pixels.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Enables or disables the arrowhead at the end of the beam.
    pub fn with_arrow(mut self, show_arrow: bool) -> Self {
        self.show_arrow = show_arrow;
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn wavelength_nm(&self) -> f64 {
        self.wavelength_nm
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn show_arrow(&self) -> bool {
        self.show_arrow
    }

    /// The explicit color override, if any.
    pub fn color_override(&self) -> Option<Color> {
        self.color
    }

    /// Color to draw with: the override, else the spectral color, else
    /// `fallback` for wavelengths outside the visible band.
    pub fn color(&self, fallback: Color) -> Color {
        self.color
            .or_else(|| Color::from_wavelength(self.wavelength_nm))
            .unwrap_or(fallback)
    }

    /// The last segment, used to orient the arrowhead.
    pub fn last_segment(&self) -> Option<(Point, Point)> {
        match self.points.as_slice() {
            [.., from, to] => Some((*from, *to)),
            _ => None,
        }
    }

    /// Total path length in scene units.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }

    /// Point at fraction `t` of the path length, or `None` when `t` is not
    /// within `[0, 1]`.
    ///
    /// Interpolation is by arc length, so unevenly spaced points do not
    /// skew the result.
    pub fn point_at(&self, t: f64) -> Option<Point> {
        if !(0.0..=1.0).contains(&t) {
            return None;
        }
        let total = self.length();
        if total == 0.0 || t == 0.0 {
            return Some(self.start());
        }
        if t == 1.0 {
            return Some(self.end());
        }

        let target = t * total;
        let mut travelled = 0.0;
        for pair in self.points.windows(2) {
            let segment = pair[0].distance(pair[1]);
            if travelled + segment >= target {
                return Some(pair[0].lerp(pair[1], (target - travelled) / segment));
            }
            travelled += segment;
        }
        Some(self.end())
    }

    /// Axis-aligned bounds of every point.
    pub fn bounds(&self) -> Bounds {
        self.points
            .iter()
            .fold(Bounds::from_point(self.start()), |bounds, point| {
                bounds.include_point(*point)
            })
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn l_shaped() -> Beam {
        Beam::from_points(
            "probe",
            780.0,
            [
                Point::new(0.0, 0.0),
                Point::new(4.0, 0.0),
                Point::new(4.0, 3.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_invalid_wavelengths() {
        for wavelength in [0.0, -532.0, f64::NAN, f64::INFINITY] {
            let result = Beam::new("beam", wavelength, Point::default());
            assert!(matches!(result, Err(Error::InvalidWavelength(_))));
        }
    }

    #[test]
    fn test_from_points_requires_a_point() {
        let result = Beam::from_points("beam", 532.0, Vec::new());
        assert!(matches!(result, Err(Error::EmptyGeometry)));
    }

    #[test]
    fn test_duplicate_points_collapse() {
        let mut beam = Beam::new("beam", 532.0, Point::new(1.0, 1.0)).unwrap();
        beam.line_to(Point::new(1.0, 1.0))
            .line_to(Point::new(2.0, 1.0))
            .line_to(Point::new(2.0, 1.0));
        assert_eq!(beam.points(), &[Point::new(1.0, 1.0), Point::new(2.0, 1.0)]);
    }

    #[test]
    fn test_length() {
        assert_approx_eq!(f64, l_shaped().length(), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_point_at_uses_arc_length() {
        let beam = l_shaped();
        assert_eq!(beam.point_at(0.0), Some(Point::new(0.0, 0.0)));
        assert_eq!(beam.point_at(1.0), Some(Point::new(4.0, 3.0)));

        let mid = beam.point_at(0.5).unwrap();
        assert_approx_eq!(f64, mid.x(), 3.5);
        assert_approx_eq!(f64, mid.y(), 0.0);

        let on_second_leg = beam.point_at(5.0 / 7.0).unwrap();
        assert_approx_eq!(f64, on_second_leg.x(), 4.0, epsilon = 1e-9);
        assert_approx_eq!(f64, on_second_leg.y(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_point_at_uneven_spacing() {
        // Extra vertex near the start must not shift the midpoint
        let beam = Beam::from_points(
            "uneven",
            532.0,
            [
                Point::new(0.0, 0.0),
                Point::new(0.5, 0.0),
                Point::new(10.0, 0.0),
            ],
        )
        .unwrap();
        let mid = beam.point_at(0.5).unwrap();
        assert_approx_eq!(f64, mid.x(), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_point_at_out_of_range() {
        let beam = l_shaped();
        assert!(beam.point_at(-0.01).is_none());
        assert!(beam.point_at(1.01).is_none());
        assert!(beam.point_at(f64::NAN).is_none());
    }

    #[test]
    fn test_single_point_beam() {
        let beam = Beam::new("dot", 633.0, Point::new(3.0, 4.0)).unwrap();
        assert_eq!(beam.point_at(0.7), Some(Point::new(3.0, 4.0)));
        assert!(beam.last_segment().is_none());
        assert_eq!(beam.bounds().width(), 0.0);
    }

    #[test]
    fn test_color_selection() {
        let fallback = Color::new("gray").unwrap();

        let green = Beam::new("green", 532.0, Point::default()).unwrap();
        assert_eq!(green.color(fallback), Color::from_wavelength(532.0).unwrap());

        let infrared = Beam::new("ir", 1064.0, Point::default()).unwrap();
        assert_eq!(infrared.color(fallback), fallback);

        let red = Color::new("red").unwrap();
        let overridden = Beam::new("ir", 1064.0, Point::default())
            .unwrap()
            .with_color(red);
        assert_eq!(overridden.color(fallback), red);
    }

    #[test]
    fn test_branch_inherits_style() {
        let parent = l_shaped().with_width(3.0).with_arrow(false);
        let branch = parent.branch("reflected", Point::new(4.0, 0.0));

        assert_eq!(branch.id(), Id::new("reflected"));
        assert_eq!(branch.points(), &[Point::new(4.0, 0.0)]);
        assert_eq!(branch.wavelength_nm(), 780.0);
        assert_eq!(branch.width(), 3.0);
        assert!(!branch.show_arrow());
    }

    #[test]
    fn test_bounds() {
        let bounds = l_shaped().bounds();
        assert_eq!(bounds.min_point(), Point::new(0.0, 0.0));
        assert_eq!(bounds.max_point(), Point::new(4.0, 3.0));
    }

    proptest! {
        #[test]
        fn prop_point_at_stays_in_bounds(
            coords in prop::collection::vec((-20.0f64..20.0, -20.0f64..20.0), 1..10),
            t in 0.0f64..=1.0,
        ) {
            let beam = Beam::from_points(
                "random",
                650.0,
                coords.into_iter().map(Point::from),
            ).unwrap();
            let point = beam.point_at(t).unwrap();
            prop_assert!(beam.bounds().contains(point));
        }
    }
}

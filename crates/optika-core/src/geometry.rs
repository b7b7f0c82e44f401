//! Geometric primitives and the affine placement kernel.
//!
//! This module provides the fundamental geometric types used throughout Optika
//! for placing component glyphs, measuring beams and accumulating scene bounds.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate (or vector) in scene space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned bounding box
//! - [`Insets`] - Padding values for four sides
//! - [`Arc`] - A circular arc given by center, radius and angular sweep
//! - [`Transform`] - Rotate-then-translate placement of local geometry
//!
//! The free functions [`rotate`], [`translate`], [`compose_transform`],
//! [`bounding_box`] and [`union_bounds`] form the stateless kernel every other
//! module builds on.
//!
//! # Coordinate System
//!
//! Scene space follows the usual optics-bench convention:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases upward
//! - **Angles**: Degrees, measured counter-clockwise from +X
//!
//! The SVG surface flips the y-axis when it maps scene units to pixels; no
//! other code needs to know about SVG's downward y-axis.

use thiserror::Error;

/// Tolerance used when comparing scene coordinates.
pub const EPSILON: f64 = 1e-9;

/// Errors raised by the geometry kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A bounding box was requested for zero points.
    #[error("cannot compute the bounding box of empty geometry")]
    EmptyGeometry,

    /// A section ratio `m:n` with `m + n == 0` has no division point.
    #[error("section ratio must not sum to zero")]
    DegenerateRatio,
}

/// A 2D point representing a position (or a displacement) in scene space.
///
/// # Examples
///
/// ```
/// # use optika_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f64 {
        other.sub_point(self).hypot()
    }

    /// Multiplies both coordinates by the given factor.
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(self, other: Point, t: f64) -> Self {
        Self {
            x: (other.x - self.x).mul_add(t, self.x),
            y: (other.y - self.y).mul_add(t, self.y),
        }
    }

    /// Returns the unit vector pointing in the same direction, or `None`
    /// for a (near) zero vector.
    pub fn normalized(self) -> Option<Self> {
        let length = self.hypot();
        if length < EPSILON {
            None
        } else {
            Some(self.scale(1.0 / length))
        }
    }

    /// Returns this vector rotated by +90°.
    pub fn perpendicular(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    /// Returns `true` if both coordinates are within `tolerance` of `other`.
    pub fn approx_eq(self, other: Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    /// Returns the section point dividing `self → other` in the ratio `m:n`.
    ///
    /// Both ratios positive gives an internal division. A single negative
    /// ratio gives an external division point on the corresponding side,
    /// e.g. `a.divide(b, -1.0, 2.0)` lies outside the segment near `a`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateRatio`] when `m + n` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use optika_core::geometry::Point;
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(4.0, 0.0);
    /// assert_eq!(a.divide(b, 1.0, 1.0).unwrap(), Point::new(2.0, 0.0));
    /// assert_eq!(a.divide(b, 1.0, 3.0).unwrap(), Point::new(1.0, 0.0));
    /// ```
    pub fn divide(self, other: Point, m: f64, n: f64) -> Result<Self, GeometryError> {
        let denom = m + n;
        if denom.abs() < 1e-12 {
            return Err(GeometryError::DegenerateRatio);
        }
        Ok(Self {
            x: (n * self.x + m * other.x) / denom,
            y: (n * self.y + m * other.y) / denom,
        })
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f64 {
        self.height
    }

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Returns a new Size with padding added to both width and height
    pub fn add_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }

    /// Multiplies both dimensions by the given factor
    pub fn scale(self, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// An axis-aligned bounding box defined by its minimum and maximum corners.
///
/// Bounds are never "empty": the absence of geometry is modelled as
/// `Option<Bounds>::None`, which is the identity of [`union_bounds`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Creates bounds spanning the two corner points, in any order.
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Creates degenerate bounds containing a single point.
    pub fn from_point(point: Point) -> Self {
        Self::new(point, point)
    }

    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f64 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f64 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f64 {
        self.max_y
    }

    /// Returns the `(min_x, min_y)` corner
    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Returns the `(max_x, max_y)` corner
    pub fn max_point(self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use optika_core::geometry::{Bounds, Point};
    /// let beam = Bounds::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0));
    /// let mirror = Bounds::new(Point::new(1.5, -0.5), Point::new(2.5, 0.5));
    ///
    /// let scene = beam.merge(&mirror);
    /// assert_eq!(scene.min_point(), Point::new(0.0, -0.5));
    /// assert_eq!(scene.max_point(), Point::new(2.5, 2.0));
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Returns bounds grown just enough to contain `point`.
    pub fn include_point(&self, point: Point) -> Self {
        self.merge(&Self::from_point(point))
    }

    /// Returns `true` if `point` lies inside or on the boundary.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x - EPSILON
            && point.x <= self.max_x + EPSILON
            && point.y >= self.min_y - EPSILON
            && point.y <= self.max_y + EPSILON
    }

    /// Moves the bounds by the specified offset.
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }

    /// Grows the bounds by `margin` on every side.
    pub fn add_margin(&self, margin: f64) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }

    /// Returns `true` if every edge is within `tolerance` of `other`.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.min_point().approx_eq(other.min_point(), tolerance)
            && self.max_point().approx_eq(other.max_point(), tolerance)
    }
}

/// Represents spacing around an element (padding, margin, etc.)
/// with potentially different values for each side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f64,
    right: f64,
    bottom: f64,
    left: f64,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns the top inset value
    pub fn top(self) -> f64 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f64 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f64 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f64 {
        self.left
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> f64 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets
    pub fn vertical_sum(self) -> f64 {
        self.top + self.bottom
    }
}

/// A circular arc.
///
/// The arc starts at `start_deg` and sweeps `sweep_deg` degrees; a positive
/// sweep runs counter-clockwise. Angles are not normalized so that a
/// transformed arc keeps its exact sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    center: Point,
    radius: f64,
    start_deg: f64,
    sweep_deg: f64,
}

impl Arc {
    pub fn new(center: Point, radius: f64, start_deg: f64, sweep_deg: f64) -> Self {
        Self {
            center,
            radius,
            start_deg,
            sweep_deg,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn start_deg(&self) -> f64 {
        self.start_deg
    }

    pub fn sweep_deg(&self) -> f64 {
        self.sweep_deg
    }

    /// Point on the circle at the given absolute angle.
    pub fn point_at(&self, angle_deg: f64) -> Point {
        let (sin, cos) = sin_cos_degrees(angle_deg);
        Point::new(
            self.radius.mul_add(cos, self.center.x),
            self.radius.mul_add(sin, self.center.y),
        )
    }

    pub fn start_point(&self) -> Point {
        self.point_at(self.start_deg)
    }

    pub fn end_point(&self) -> Point {
        self.point_at(self.start_deg + self.sweep_deg)
    }

    /// Returns `true` when the sweep exceeds a half turn (SVG's large-arc flag).
    pub fn is_large(&self) -> bool {
        self.sweep_deg.abs() > 180.0
    }

    /// Points that determine the arc's bounding box: both end points plus
    /// every axis crossing (0°, 90°, 180°, 270°) inside the sweep.
    pub fn extreme_points(&self) -> Vec<Point> {
        let mut points = vec![self.start_point(), self.end_point()];
        for axis in [0.0, 90.0, 180.0, 270.0] {
            if self.sweeps_through(axis) {
                points.push(self.point_at(axis));
            }
        }
        points
    }

    fn sweeps_through(&self, angle_deg: f64) -> bool {
        let span = self.sweep_deg.abs();
        if span >= 360.0 {
            return true;
        }
        let relative = if self.sweep_deg >= 0.0 {
            normalize_degrees(angle_deg - self.start_deg)
        } else {
            normalize_degrees(self.start_deg - angle_deg)
        };
        relative <= span
    }
}

/// A rigid placement: rotate about the local origin, then translate.
///
/// The composition order is fixed. Glyphs are authored around their optical
/// center at the local origin, so rotating first keeps that center pinned to
/// the placed position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    translation: Point,
    rotation_deg: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// The transform that leaves every point unchanged.
    pub fn identity() -> Self {
        Self {
            translation: Point::default(),
            rotation_deg: 0.0,
        }
    }

    pub fn translation(&self) -> Point {
        self.translation
    }

    /// Rotation in degrees, normalized to `[0, 360)`.
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    /// Maps a local point to scene space.
    pub fn apply(&self, point: Point) -> Point {
        let rotated = rotate(point, self.rotation_deg, Point::default());
        translate(rotated, self.translation.x, self.translation.y)
    }

    /// Maps a local direction to scene space (rotation only).
    pub fn apply_vector(&self, vector: Point) -> Point {
        rotate(vector, self.rotation_deg, Point::default())
    }

    pub fn apply_all(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|point| self.apply(*point)).collect()
    }

    pub fn apply_arc(&self, arc: &Arc) -> Arc {
        Arc::new(
            self.apply(arc.center),
            arc.radius,
            arc.start_deg + self.rotation_deg,
            arc.sweep_deg,
        )
    }
}

/// Normalizes an angle in degrees to `[0, 360)`.
///
/// ```
/// # use optika_core::geometry::normalize_degrees;
/// assert_eq!(normalize_degrees(370.0), 10.0);
/// assert_eq!(normalize_degrees(-45.0), 315.0);
/// assert_eq!(normalize_degrees(360.0), 0.0);
/// ```
pub fn normalize_degrees(angle_deg: f64) -> f64 {
    let normalized = angle_deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if normalized >= 360.0 { 0.0 } else { normalized }
}

/// Sine and cosine of an angle in degrees, exact on the quadrant angles.
fn sin_cos_degrees(angle_deg: f64) -> (f64, f64) {
    let normalized = normalize_degrees(angle_deg);
    if normalized == 0.0 {
        (0.0, 1.0)
    } else if normalized == 90.0 {
        (1.0, 0.0)
    } else if normalized == 180.0 {
        (0.0, -1.0)
    } else if normalized == 270.0 {
        (-1.0, 0.0)
    } else {
        normalized.to_radians().sin_cos()
    }
}

/// Rotates `point` counter-clockwise by `angle_deg` around `around`.
///
/// ```
/// # use optika_core::geometry::{rotate, Point};
/// let p = rotate(Point::new(1.0, 0.0), 90.0, Point::default());
/// assert!(p.approx_eq(Point::new(0.0, 1.0), 1e-12));
/// ```
pub fn rotate(point: Point, angle_deg: f64, around: Point) -> Point {
    let (sin, cos) = sin_cos_degrees(angle_deg);
    let offset = point.sub_point(around);
    Point::new(
        offset.x.mul_add(cos, -offset.y * sin) + around.x,
        offset.x.mul_add(sin, offset.y * cos) + around.y,
    )
}

/// Moves `point` by `(dx, dy)`.
pub fn translate(point: Point, dx: f64, dy: f64) -> Point {
    Point::new(point.x + dx, point.y + dy)
}

/// Builds the placement transform of an item positioned at `translation`
/// and rotated by `rotation_deg` about its local origin.
pub fn compose_transform(translation: Point, rotation_deg: f64) -> Transform {
    Transform {
        translation,
        rotation_deg: normalize_degrees(rotation_deg),
    }
}

/// Computes the smallest bounds containing every point.
///
/// # Errors
///
/// Returns [`GeometryError::EmptyGeometry`] when `points` yields nothing.
pub fn bounding_box<I>(points: I) -> Result<Bounds, GeometryError>
where
    I: IntoIterator<Item = Point>,
{
    points
        .into_iter()
        .fold(None, |acc: Option<Bounds>, point| {
            Some(match acc {
                Some(bounds) => bounds.include_point(point),
                None => Bounds::from_point(point),
            })
        })
        .ok_or(GeometryError::EmptyGeometry)
}

/// Smallest bounds containing both inputs; `None` is the identity.
pub fn union_bounds(a: Option<Bounds>, b: Option<Bounds>) -> Option<Bounds> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.merge(&b)),
        (Some(bounds), None) | (None, Some(bounds)) => Some(bounds),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_default() {
        let point = Point::default();
        assert!(point.is_zero());
    }

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(1.0, 2.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.add_point(p2), Point::new(4.0, 6.0));
        assert_eq!(p2.sub_point(p1), Point::new(2.0, 2.0));
    }

    #[test]
    fn test_point_distance() {
        assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_point_lerp() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 2.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Point::new(2.0, 1.0));
    }

    #[test]
    fn test_point_normalized() {
        let unit = Point::new(3.0, 4.0).normalized().unwrap();
        assert_approx_eq!(f64, unit.x(), 0.6);
        assert_approx_eq!(f64, unit.y(), 0.8);
        assert!(Point::default().normalized().is_none());
    }

    #[test]
    fn test_point_divide_internal_and_external() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 0.0);

        assert_eq!(a.divide(b, 1.0, 1.0).unwrap(), Point::new(2.0, 0.0));

        // External division on a's side
        let outside = a.divide(b, -1.0, 2.0).unwrap();
        assert_approx_eq!(f64, outside.x(), -4.0);

        assert_eq!(
            a.divide(b, 1.0, -1.0).unwrap_err(),
            GeometryError::DegenerateRatio
        );
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(405.0), 45.0);
        assert_eq!(normalize_degrees(-1e-20), 0.0);
    }

    #[test]
    fn test_rotate_quadrants_are_exact() {
        let p = Point::new(2.0, 1.0);
        let origin = Point::default();
        assert_eq!(rotate(p, 90.0, origin), Point::new(-1.0, 2.0));
        assert_eq!(rotate(p, 180.0, origin), Point::new(-2.0, -1.0));
        assert_eq!(rotate(p, 270.0, origin), Point::new(1.0, -2.0));
        assert_eq!(rotate(p, 360.0, origin), p);
    }

    #[test]
    fn test_rotate_around_pivot() {
        let rotated = rotate(Point::new(3.0, 2.0), 90.0, Point::new(2.0, 2.0));
        assert!(rotated.approx_eq(Point::new(2.0, 3.0), TOLERANCE));
    }

    #[test]
    fn test_rotate_45() {
        let rotated = rotate(Point::new(1.0, 0.0), 45.0, Point::default());
        let half_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
        assert!(rotated.approx_eq(Point::new(half_sqrt2, half_sqrt2), TOLERANCE));
    }

    #[test]
    fn test_translate() {
        assert_eq!(
            translate(Point::new(1.0, 1.0), 2.0, -3.0),
            Point::new(3.0, -2.0)
        );
    }

    #[test]
    fn test_compose_transform_rotates_then_translates() {
        let transform = compose_transform(Point::new(10.0, 0.0), 90.0);
        // Rotate (1, 0) to (0, 1), then translate by (10, 0)
        assert_eq!(transform.apply(Point::new(1.0, 0.0)), Point::new(10.0, 1.0));
        // The local origin always lands on the translation
        assert_eq!(transform.apply(Point::default()), Point::new(10.0, 0.0));
    }

    #[test]
    fn test_compose_transform_normalizes_rotation() {
        let transform = compose_transform(Point::default(), -90.0);
        assert_eq!(transform.rotation_deg(), 270.0);
    }

    #[test]
    fn test_transform_apply_vector_ignores_translation() {
        let transform = compose_transform(Point::new(5.0, 5.0), 90.0);
        assert_eq!(
            transform.apply_vector(Point::new(1.0, 0.0)),
            Point::new(0.0, 1.0)
        );
    }

    #[test]
    fn test_bounding_box() {
        let bounds = bounding_box(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 3.0),
        ])
        .unwrap();
        assert_eq!(bounds.min_point(), Point::new(0.0, 0.0));
        assert_eq!(bounds.max_point(), Point::new(4.0, 3.0));
        assert_eq!(bounds.width(), 4.0);
        assert_eq!(bounds.height(), 3.0);
    }

    #[test]
    fn test_bounding_box_empty_fails() {
        let result = bounding_box(Vec::new());
        assert_eq!(result.unwrap_err(), GeometryError::EmptyGeometry);
    }

    #[test]
    fn test_union_bounds_identity() {
        let bounds = Bounds::new(Point::new(1.0, 1.0), Point::new(2.0, 2.0));
        assert_eq!(union_bounds(None, Some(bounds)), Some(bounds));
        assert_eq!(union_bounds(Some(bounds), None), Some(bounds));
        assert_eq!(union_bounds(None, None), None);
    }

    #[test]
    fn test_union_bounds_merges() {
        let a = Bounds::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0));
        let b = Bounds::new(Point::new(1.0, -1.0), Point::new(3.0, 1.0));
        let merged = union_bounds(Some(a), Some(b)).unwrap();
        assert_eq!(merged.min_point(), Point::new(0.0, -1.0));
        assert_eq!(merged.max_point(), Point::new(3.0, 2.0));
    }

    #[test]
    fn test_bounds_new_orders_corners() {
        let bounds = Bounds::new(Point::new(3.0, -1.0), Point::new(-1.0, 2.0));
        assert_eq!(bounds.min_point(), Point::new(-1.0, -1.0));
        assert_eq!(bounds.max_point(), Point::new(3.0, 2.0));
    }

    #[test]
    fn test_bounds_add_margin_and_contains() {
        let bounds = Bounds::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0)).add_margin(0.5);
        assert_eq!(bounds.min_point(), Point::new(-0.5, -0.5));
        assert!(bounds.contains(Point::new(1.5, 1.5)));
        assert!(!bounds.contains(Point::new(1.6, 0.0)));
    }

    #[test]
    fn test_bounds_new_from_center() {
        let bounds = Bounds::new_from_center(Point::new(50.0, 60.0), Size::new(20.0, 30.0));
        assert_eq!(bounds.min_point(), Point::new(40.0, 45.0));
        assert_eq!(bounds.max_point(), Point::new(60.0, 75.0));
        assert_eq!(bounds.center(), Point::new(50.0, 60.0));
    }

    #[test]
    fn test_size_add_padding() {
        let padded = Size::new(10.0, 20.0).add_padding(Insets::uniform(5.0));
        assert_eq!(padded.width(), 20.0);
        assert_eq!(padded.height(), 30.0);
    }

    #[test]
    fn test_arc_end_points() {
        let arc = Arc::new(Point::new(1.0, 1.0), 2.0, 0.0, 90.0);
        assert_eq!(arc.start_point(), Point::new(3.0, 1.0));
        assert_eq!(arc.end_point(), Point::new(1.0, 3.0));
        assert!(!arc.is_large());
    }

    #[test]
    fn test_arc_extreme_points_include_axis_crossings() {
        // Half circle through the top
        let arc = Arc::new(Point::default(), 1.0, 0.0, 180.0);
        let bounds = bounding_box(arc.extreme_points()).unwrap();
        assert_approx_eq!(f64, bounds.max_y(), 1.0);
        assert_approx_eq!(f64, bounds.min_y(), 0.0);
        assert_approx_eq!(f64, bounds.min_x(), -1.0);
        assert_approx_eq!(f64, bounds.max_x(), 1.0);
    }

    #[test]
    fn test_arc_extreme_points_negative_sweep() {
        // Clockwise from 45° to -45° passes through 0°
        let arc = Arc::new(Point::default(), 1.0, 45.0, -90.0);
        let bounds = bounding_box(arc.extreme_points()).unwrap();
        assert_approx_eq!(f64, bounds.max_x(), 1.0);
    }

    #[test]
    fn test_arc_extreme_points_small_sweep_has_no_crossing() {
        let arc = Arc::new(Point::default(), 1.0, 10.0, 20.0);
        assert_eq!(arc.extreme_points().len(), 2);
    }

    #[test]
    fn test_transform_apply_arc() {
        let arc = Arc::new(Point::new(1.0, 0.0), 1.0, 0.0, 90.0);
        let transform = compose_transform(Point::new(0.0, 5.0), 90.0);
        let moved = transform.apply_arc(&arc);
        assert_eq!(moved.center(), Point::new(0.0, 6.0));
        assert_eq!(moved.start_deg(), 90.0);
        assert!(
            moved
                .start_point()
                .approx_eq(transform.apply(arc.start_point()), TOLERANCE)
        );
        assert!(
            moved
                .end_point()
                .approx_eq(transform.apply(arc.end_point()), TOLERANCE)
        );
    }

    proptest! {
        #[test]
        fn prop_rotate_full_turn_is_identity(
            x in -1000.0f64..1000.0,
            y in -1000.0f64..1000.0,
            px in -100.0f64..100.0,
            py in -100.0f64..100.0,
        ) {
            let point = Point::new(x, y);
            let pivot = Point::new(px, py);
            let zero = rotate(point, 0.0, pivot);
            let full = rotate(point, 360.0, pivot);
            prop_assert!(zero.approx_eq(full, 1e-9));
            prop_assert!(zero.approx_eq(point, 1e-9));
        }

        #[test]
        fn prop_rotation_preserves_distance_to_pivot(
            x in -100.0f64..100.0,
            y in -100.0f64..100.0,
            angle in -720.0f64..720.0,
        ) {
            let point = Point::new(x, y);
            let pivot = Point::new(1.0, -2.0);
            let rotated = rotate(point, angle, pivot);
            prop_assert!((rotated.distance(pivot) - point.distance(pivot)).abs() < 1e-9);
        }

        #[test]
        fn prop_bounding_box_contains_all_points(
            coords in prop::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 1..20),
        ) {
            let points: Vec<Point> = coords.into_iter().map(Point::from).collect();
            let bounds = bounding_box(points.clone()).unwrap();
            for point in points {
                prop_assert!(bounds.contains(point));
            }
        }
    }
}

//! Fiber and wire routes.
//!
//! A [`Route`] runs from `start` through its pins to `end`. Corners are
//! rounded with quadratic Bézier fillets before drawing, so the drawn path
//! only approaches each pin. Wires mark their pins with small dots.

use log::trace;

use optika_core::{
    color::Color,
    draw::{StrokeCap, StrokeDefinition, StrokeJoin},
    geometry::{Bounds, EPSILON, Point, bounding_box},
    identifier::Id,
};

/// Samples per corner fillet, counting both fillet ends as one each.
const FILLET_SAMPLES: usize = 6;

/// Radius of the dots drawn on wire pins, in pixels.
pub const PIN_DOT_RADIUS: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// Optical fiber, drawn thick and yellow.
    Fiber,
    /// Electrical (RF) wire, drawn thin and dark with pin dots.
    Wire,
}

impl RouteKind {
    /// Default corner fillet radius in scene units.
    pub fn fillet_radius(self) -> f64 {
        match self {
            Self::Fiber => 0.3,
            Self::Wire => 0.15,
        }
    }

    fn default_stroke(self) -> StrokeDefinition {
        match self {
            Self::Fiber => StrokeDefinition::solid(Color::from_unit_rgb(1.0, 0.85, 0.0), 2.0)
                .with_cap(StrokeCap::Square)
                .with_join(StrokeJoin::Round),
            Self::Wire => StrokeDefinition::solid(
                Color::new("#444444").expect("wire color is a valid CSS color"),
                1.6,
            )
            .with_cap(StrokeCap::Round)
            .with_join(StrokeJoin::Round),
        }
    }
}

/// A filleted fiber or wire.
///
/// ```
/// # use optika::route::Route;
/// # use optika_core::geometry::Point;
/// let mut fiber = Route::fiber("patch", Point::new(0.0, 0.0), Point::new(2.0, 2.0));
/// fiber.add_pin(Point::new(2.0, 0.0));
///
/// let path = fiber.path();
/// assert_eq!(path.first(), Some(&Point::new(0.0, 0.0)));
/// assert_eq!(path.last(), Some(&Point::new(2.0, 2.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    id: Id,
    kind: RouteKind,
    start: Point,
    end: Point,
    pins: Vec<Point>,
    fillet_radius: f64,
    stroke: StrokeDefinition,
}

impl Route {
    pub fn new(id: impl Into<Id>, kind: RouteKind, start: Point, end: Point) -> Self {
        Self {
            id: id.into(),
            kind,
            start,
            end,
            pins: Vec::new(),
            fillet_radius: kind.fillet_radius(),
            stroke: kind.default_stroke(),
        }
    }

    pub fn fiber(id: impl Into<Id>, start: Point, end: Point) -> Self {
        Self::new(id, RouteKind::Fiber, start, end)
    }

    pub fn wire(id: impl Into<Id>, start: Point, end: Point) -> Self {
        Self::new(id, RouteKind::Wire, start, end)
    }

    /// Adds a waypoint before `end`.
    pub fn add_pin(&mut self, pin: Point) -> &mut Self {
        trace!(route = self.id.to_string(), x = pin.x(), y = pin.y(); "Route pin added");
        self.pins.push(pin);
        self
    }

    pub fn with_pin(mut self, pin: Point) -> Self {
        self.add_pin(pin);
        self
    }

    pub fn with_fillet_radius(mut self, radius: f64) -> Self {
        self.fillet_radius = radius;
        self
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn kind(&self) -> RouteKind {
        self.kind
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn pins(&self) -> &[Point] {
        &self.pins
    }

    pub fn fillet_radius(&self) -> f64 {
        self.fillet_radius
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    /// Start, pins and end, in order.
    pub fn waypoints(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.pins.len() + 2);
        points.push(self.start);
        points.extend_from_slice(&self.pins);
        points.push(self.end);
        points
    }

    /// The drawn path: waypoints with every corner filleted.
    pub fn path(&self) -> Vec<Point> {
        fillet_polyline(&self.waypoints(), self.fillet_radius)
    }

    /// Points that get a pin dot; wires only.
    pub fn pin_dots(&self) -> &[Point] {
        match self.kind {
            RouteKind::Wire => &self.pins,
            RouteKind::Fiber => &[],
        }
    }

    /// Bounds of the drawn path.
    pub fn bounds(&self) -> Bounds {
        // The path always holds the start point, so this never fails
        bounding_box(self.path()).unwrap_or_else(|_| Bounds::from_point(self.start))
    }
}

/// Rounds every interior corner of `points` with a quadratic Bézier.
///
/// The fillet of a corner starts and ends `radius` away from it along the
/// incoming and outgoing segments, capped at half of either segment so
/// neighbouring fillets never overlap. The corner point itself is the
/// control point. End points are kept; fewer than three points are returned
/// unchanged.
pub fn fillet_polyline(points: &[Point], radius: f64) -> Vec<Point> {
    let [first, .., last] = points else {
        return points.to_vec();
    };
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut out = vec![*first];
    for window in points.windows(3) {
        let (prev, corner, next) = (window[0], window[1], window[2]);
        let incoming = corner.sub_point(prev);
        let outgoing = next.sub_point(corner);
        let (Some(u_in), Some(u_out)) = (incoming.normalized(), outgoing.normalized()) else {
            out.push(corner);
            continue;
        };

        let cut = radius.min(0.5 * incoming.hypot()).min(0.5 * outgoing.hypot());
        let a = corner.sub_point(u_in.scale(cut));
        let b = corner.add_point(u_out.scale(cut));

        if out.last().is_none_or(|last| last.distance(a) > EPSILON) {
            out.push(a);
        }
        for k in 1..FILLET_SAMPLES {
            let t = k as f64 / FILLET_SAMPLES as f64;
            out.push(quadratic_bezier(a, corner, b, t));
        }
        out.push(b);
    }
    out.push(*last);
    out
}

fn quadratic_bezier(a: Point, control: Point, b: Point, t: f64) -> Point {
    let s = 1.0 - t;
    a.scale(s * s)
        .add_point(control.scale(2.0 * s * t))
        .add_point(b.scale(t * t))
}

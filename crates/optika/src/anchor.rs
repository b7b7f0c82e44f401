//! Anchors: late-bound positions for annotations and arrows.
//!
//! An [`Anchor`] names *where* something goes relative to a beam or a
//! component by id. Nothing is looked up when the anchor is built; the
//! position is computed by [`resolve_anchor`] during
//! [`Board::resolve`](crate::board::Board::resolve), so the referenced item
//! may be added to the board before or after the anchor that uses it.

use log::trace;

use optika_core::{
    geometry::{Bounds, Point},
    identifier::Id,
};

use crate::{Error, board::Board, component::Component};

/// A face of a component's local bounding box.
///
/// Faces are named in the component's local frame, where the beam arrives
/// along +x, and follow the component when it is rotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// The face a beam meets first (-x).
    Front,
    /// The face opposite the front (+x).
    Back,
    /// +y
    Top,
    /// -y
    Bottom,
    /// The optical center; the offset is ignored.
    #[default]
    Center,
}

impl Side {
    /// Face midpoint and outward unit normal in the local frame.
    fn face(self, bounds: Bounds) -> (Point, Point) {
        let center = bounds.center();
        match self {
            Self::Front => (center.with_x(bounds.min_x()), Point::new(-1.0, 0.0)),
            Self::Back => (center.with_x(bounds.max_x()), Point::new(1.0, 0.0)),
            Self::Top => (center.with_y(bounds.max_y()), Point::new(0.0, 1.0)),
            Self::Bottom => (center.with_y(bounds.min_y()), Point::new(0.0, -1.0)),
            Self::Center => (center, Point::default()),
        }
    }
}

/// A position rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Anchor {
    /// A fixed scene point.
    Point(Point),
    /// The point at arc-length fraction `t` along a beam.
    Beam { beam: Id, t: f64 },
    /// `offset` scene units out from a face of a component.
    Component {
        component: Id,
        side: Side,
        offset: f64,
    },
    /// Another anchor moved by a constant scene-space vector.
    Shifted { anchor: Box<Anchor>, offset: Point },
}

impl Anchor {
    pub fn point(x: f64, y: f64) -> Self {
        Self::Point(Point::new(x, y))
    }

    pub fn on_beam(beam: impl Into<Id>, t: f64) -> Self {
        Self::Beam {
            beam: beam.into(),
            t,
        }
    }

    pub fn on_component(component: impl Into<Id>, side: Side, offset: f64) -> Self {
        Self::Component {
            component: component.into(),
            side,
            offset,
        }
    }

    /// Moves the resolved position by `offset`.
    ///
    /// ```
    /// # use optika::anchor::Anchor;
    /// # use optika_core::geometry::Point;
    /// let label = Anchor::on_beam("pump", 0.5).shifted(Point::new(0.0, 0.2));
    /// assert!(matches!(label, Anchor::Shifted { .. }));
    /// ```
    pub fn shifted(self, offset: Point) -> Self {
        match self {
            Self::Shifted {
                anchor,
                offset: inner,
            } => Self::Shifted {
                anchor,
                offset: inner.add_point(offset),
            },
            anchor => Self::Shifted {
                anchor: Box::new(anchor),
                offset,
            },
        }
    }

    /// The item this anchor depends on, if any.
    pub fn target(&self) -> Option<Id> {
        match self {
            Self::Point(_) => None,
            Self::Beam { beam, .. } => Some(*beam),
            Self::Component { component, .. } => Some(*component),
            Self::Shifted { anchor, .. } => anchor.target(),
        }
    }
}

impl From<Point> for Anchor {
    fn from(point: Point) -> Self {
        Self::Point(point)
    }
}

/// Resolves `anchor` against the items currently on `board`.
///
/// # Errors
///
/// - [`Error::DanglingAnchor`] when the referenced beam or component is not
///   on the board.
/// - [`Error::AnchorOutOfRange`] when a beam fraction is outside `[0, 1]`
///   or NaN.
/// - Any error from building the component's glyph.
pub fn resolve_anchor(anchor: &Anchor, board: &Board) -> Result<Point, Error> {
    let point = match anchor {
        Anchor::Point(point) => *point,
        Anchor::Beam { beam: id, t } => {
            let beam = board.beam(*id).ok_or(Error::DanglingAnchor(*id))?;
            beam.point_at(*t)
                .ok_or(Error::AnchorOutOfRange { beam: *id, t: *t })?
        }
        Anchor::Component {
            component: id,
            side,
            offset,
        } => {
            let component = board.component(*id).ok_or(Error::DanglingAnchor(*id))?;
            component_face_point(component, *side, *offset)?
        }
        Anchor::Shifted { anchor, offset } => resolve_anchor(anchor, board)?.add_point(*offset),
    };
    trace!(anchor:?, x = point.x(), y = point.y(); "Anchor resolved");
    Ok(point)
}

/// Scene position `offset` units out from `side` of the component's local
/// glyph bounds.
fn component_face_point(component: &Component, side: Side, offset: f64) -> Result<Point, Error> {
    let bounds = component.local_glyph()?.bounds()?;
    let (face, normal) = side.face(bounds);
    Ok(component
        .transform()
        .apply(face.add_point(normal.scale(offset))))
}

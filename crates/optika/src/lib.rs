//! Optika - optical setup diagrams as code.
//!
//! Beams are polylines tagged with a wavelength, components are glyphs from a
//! fixed catalog placed by position and angle, and fibers and wires are
//! filleted routes between points. Everything is collected on a
//! [`board::Board`], which resolves anchors and bounds at render time and
//! writes the result as SVG or PNG.
//!
//! # Examples
//!
//! ```
//! use optika::{
//!     annotation::Annotation,
//!     anchor::Anchor,
//!     beam::Beam,
//!     board::Board,
//!     component::Component,
//!     geometry::Point,
//! };
//!
//! let mut beam = Beam::new("probe", 635.0, Point::new(0.0, 0.0))?;
//! beam.line_to(Point::new(2.0, 0.0)).line_to(Point::new(2.0, 2.0));
//!
//! let mut mirror = Component::flat_mirror("m1").with_angle(-45.0);
//! mirror.align_contact_to(Point::new(2.0, 0.0));
//!
//! let mut board = Board::default();
//! board
//!     .add_beam(beam)
//!     .add(mirror)
//!     .add_annotation(Annotation::new("M1", Anchor::on_beam("probe", 0.5)));
//!
//! let svg = board.to_svg_string()?;
//! assert!(svg.contains("data-layer=\"text\""));
//! # Ok::<(), optika::Error>(())
//! ```

pub mod anchor;
pub mod annotation;
pub mod beam;
pub mod board;
pub mod component;
pub mod config;
pub mod export;
pub mod glyph;
pub mod render;
pub mod route;

mod error;

pub use optika_core::{color, draw, geometry, identifier};

pub use error::Error;

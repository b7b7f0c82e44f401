//! The board: an ordered scene of beams, components, routes and overlays.
//!
//! Building a diagram is two-phase. Items and overlays are appended to a
//! [`Board`] in any order; nothing is validated or resolved while building.
//! [`Board::resolve`] then produces a [`Scene`] with absolute geometry,
//! resolved anchors and bounds, and the render and export methods draw that
//! scene. Resolution never mutates the board, so a board can be rendered
//! any number of times and a failure leaves it intact.
//!
//! ```
//! # use optika::{board::Board, beam::Beam, component::Component};
//! # use optika_core::geometry::Point;
//! let mut beam = Beam::new("pump", 532.0, Point::new(0.0, 0.0)).unwrap();
//! beam.line_to(Point::new(2.0, 0.0)).line_to(Point::new(2.0, 2.0));
//!
//! let mirror = Component::flat_mirror("m1")
//!     .with_position(Point::new(2.0, 0.0))
//!     .with_angle(45.0);
//!
//! let mut board = Board::default();
//! board.add_beam(beam).add(mirror);
//!
//! let svg = board.to_svg_string().unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

use std::{path::Path, rc::Rc};

use log::{debug, info, trace};

use optika_core::{
    draw::{StrokeDefinition, Text, TextDefinition},
    geometry::{Bounds, Point, bounding_box, union_bounds},
    identifier::Id,
};

use crate::{
    Error,
    anchor::resolve_anchor,
    annotation::{Annotation, Arrow, Overlay},
    beam::Beam,
    component::Component,
    config::AppConfig,
    export::{self, OutputFormat, SvgSurface},
    glyph::Glyph,
    render::{Surface, render_scene},
    route::Route,
};

/// An item on the board, shared with the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardItem {
    Beam(Rc<Beam>),
    Component(Rc<Component>),
    Route(Rc<Route>),
}

impl BoardItem {
    pub fn id(&self) -> Id {
        match self {
            Self::Beam(beam) => beam.id(),
            Self::Component(component) => component.id(),
            Self::Route(route) => route.id(),
        }
    }
}

/// Scene container.
///
/// Items keep their insertion order, which is also their draw order.
/// Overlays (annotations and arrows) are kept in a separate list and always
/// drawn after every item.
///
/// Items are held as [`Rc`], so a board is neither `Send` nor `Sync` and is
/// meant to be built and rendered on one thread. Independent boards share
/// no state.
#[derive(Debug, Default)]
pub struct Board {
    config: AppConfig,
    items: Vec<BoardItem>,
    overlays: Vec<Overlay>,
}

impl Board {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
            overlays: Vec::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Appends a beam. Accepts either a `Beam` or an `Rc<Beam>` the caller
    /// keeps a handle to.
    pub fn add_beam(&mut self, beam: impl Into<Rc<Beam>>) -> &mut Self {
        let beam = beam.into();
        trace!(beam = beam.id().to_string(), points = beam.points().len(); "Beam added");
        self.items.push(BoardItem::Beam(beam));
        self
    }

    /// Appends a component.
    pub fn add(&mut self, component: impl Into<Rc<Component>>) -> &mut Self {
        let component = component.into();
        trace!(component = component.id().to_string(), kind = component.kind().name(); "Component added");
        self.items.push(BoardItem::Component(component));
        self
    }

    /// Appends a fiber or wire route.
    pub fn add_route(&mut self, route: impl Into<Rc<Route>>) -> &mut Self {
        let route = route.into();
        trace!(route = route.id().to_string(); "Route added");
        self.items.push(BoardItem::Route(route));
        self
    }

    /// Appends an annotation. Its anchor is not checked until resolution.
    pub fn add_annotation(&mut self, annotation: Annotation) -> &mut Self {
        self.overlays.push(Overlay::Annotation(annotation));
        self
    }

    /// Appends a free-standing arrow.
    pub fn add_arrow(&mut self, arrow: Arrow) -> &mut Self {
        self.overlays.push(Overlay::Arrow(arrow));
        self
    }

    pub fn items(&self) -> &[BoardItem] {
        &self.items
    }

    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    /// Returns `true` when the board has neither items nor overlays.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.overlays.is_empty()
    }

    /// The first beam added with `id`.
    pub fn beam(&self, id: Id) -> Option<&Beam> {
        self.items.iter().find_map(|item| match item {
            BoardItem::Beam(beam) if beam.id() == id => Some(beam.as_ref()),
            _ => None,
        })
    }

    /// The first component added with `id`.
    pub fn component(&self, id: Id) -> Option<&Component> {
        self.items.iter().find_map(|item| match item {
            BoardItem::Component(component) if component.id() == id => Some(component.as_ref()),
            _ => None,
        })
    }

    /// Computes absolute geometry, anchor positions and scene bounds.
    ///
    /// # Errors
    ///
    /// Fails on the first item or overlay that cannot be resolved, e.g.
    /// [`Error::DanglingAnchor`] or [`Error::AnchorOutOfRange`]. The board is
    /// left as it was.
    pub fn resolve(&self) -> Result<Scene, Error> {
        let mut items = Vec::with_capacity(self.items.len());
        let mut bounds = None;

        for item in &self.items {
            let resolved = match item {
                BoardItem::Beam(beam) => {
                    bounds = union_bounds(bounds, Some(beam.bounds()));
                    SceneItem::Beam(Rc::clone(beam))
                }
                BoardItem::Component(component) => {
                    let glyph = component.absolute_glyph()?;
                    bounds = union_bounds(bounds, Some(glyph.bounds()?));
                    SceneItem::Component {
                        component: Rc::clone(component),
                        glyph,
                    }
                }
                BoardItem::Route(route) => {
                    let path = route.path();
                    bounds = union_bounds(bounds, Some(bounding_box(path.iter().copied())?));
                    SceneItem::Route {
                        route: Rc::clone(route),
                        path,
                    }
                }
            };
            items.push(resolved);
        }

        let overlays = self
            .overlays
            .iter()
            .map(|overlay| self.resolve_overlay(overlay))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            items = items.len(),
            overlays = overlays.len(),
            bounds:?;
            "Board resolved"
        );
        Ok(Scene {
            items,
            overlays,
            bounds,
        })
    }

    fn resolve_overlay(&self, overlay: &Overlay) -> Result<ResolvedOverlay, Error> {
        match overlay {
            Overlay::Annotation(annotation) => {
                let target = resolve_anchor(annotation.anchor(), self)?;
                let position = target.add_point(annotation.text_offset().unwrap_or_default());
                Ok(ResolvedOverlay::Annotation {
                    text: annotation.text().to_string(),
                    position,
                    target,
                    leader: annotation
                        .has_leader()
                        .then(|| annotation.leader_stroke().clone()),
                    definition: annotation.text_definition().clone(),
                })
            }
            Overlay::Arrow(arrow) => Ok(ResolvedOverlay::Arrow {
                start: resolve_anchor(arrow.start(), self)?,
                end: resolve_anchor(arrow.end(), self)?,
                stroke: arrow.stroke().clone(),
            }),
        }
    }

    /// Resolves the board and draws it onto `surface`.
    ///
    /// Nothing is drawn unless the whole board resolves.
    ///
    /// # Errors
    ///
    /// Same as [`Board::resolve`], plus [`Error::Config`] for an invalid
    /// fallback beam color.
    pub fn render<S>(&self, surface: &mut S) -> Result<Scene, Error>
    where
        S: Surface + ?Sized,
    {
        info!(items = self.items.len(), overlays = self.overlays.len(); "Rendering board");
        let scene = self.resolve()?;
        let fallback = self.config.style().fallback_beam_color()?;
        render_scene(&scene, surface, fallback);
        info!("Board rendered");
        Ok(scene)
    }

    /// Renders the board to an SVG document string.
    ///
    /// # Errors
    ///
    /// Same as [`Board::render`], plus [`Error::Config`] for an invalid
    /// canvas or background color.
    pub fn to_svg_string(&self) -> Result<String, Error> {
        info!(items = self.items.len(), overlays = self.overlays.len(); "Rendering board to SVG");
        self.config.validate()?;
        let scene = self.resolve()?;
        let style = self.config.style();
        let fallback = style.fallback_beam_color()?;
        let background = style.background_color()?;

        let canvas = self.config.canvas();
        let mut surface = SvgSurface::new(scene.canvas_bounds(canvas.pixels_per_unit()), canvas, background);
        render_scene(&scene, &mut surface, fallback);
        let size = surface.size();
        let svg = surface.into_string();

        info!(width = size.width(), height = size.height(); "SVG rendered");
        Ok(svg)
    }

    /// Renders the board and writes it to `path`.
    ///
    /// The format comes from the file extension: `svg`, or `png` for the
    /// same document rasterized. The document is fully rendered before the
    /// file is created, and written through a temporary file, so a failure
    /// at any step leaves no partial file behind.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedFormat`] for any other extension, or none.
    /// - [`Error::Raster`] if the PNG image cannot be produced.
    /// - [`Error::IoFailure`] if the file cannot be written.
    /// - Any error from [`Board::to_svg_string`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let format = export::format_for_path(path)?;
        info!(path = path.display().to_string(), format:?; "Saving board");

        let svg = self.to_svg_string()?;
        let content = match format {
            OutputFormat::Svg => svg.into_bytes(),
            OutputFormat::Png => export::rasterize(&svg)?,
        };
        export::write_document(path, &content)?;

        info!(path = path.display().to_string(); "Board saved");
        Ok(())
    }
}

/// A resolved item, in board order.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneItem {
    Beam(Rc<Beam>),
    /// A component with its glyph placed in scene space.
    Component {
        component: Rc<Component>,
        glyph: Glyph,
    },
    /// A route with its filleted path.
    Route { route: Rc<Route>, path: Vec<Point> },
}

/// An overlay with its anchors resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedOverlay {
    Annotation {
        text: String,
        /// Where the text is centered.
        position: Point,
        /// The resolved anchor.
        target: Point,
        /// Leader stroke, when a leader is drawn from `position` to `target`.
        leader: Option<StrokeDefinition>,
        definition: TextDefinition,
    },
    Arrow {
        start: Point,
        end: Point,
        stroke: StrokeDefinition,
    },
}

impl ResolvedOverlay {
    /// Regions the overlay covers in scene space.
    fn extents(&self, pixels_per_unit: f64) -> [Bounds; 2] {
        match self {
            Self::Annotation {
                text,
                position,
                target,
                definition,
                ..
            } => {
                let label = Text::new(definition, text).calculate_size();
                [
                    Bounds::new_from_center(*position, label.scale(pixels_per_unit.recip())),
                    Bounds::from_point(*target),
                ]
            }
            Self::Arrow { start, end, .. } => [Bounds::from_point(*start), Bounds::from_point(*end)],
        }
    }
}

/// The result of [`Board::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    items: Vec<SceneItem>,
    overlays: Vec<ResolvedOverlay>,
    bounds: Option<Bounds>,
}

impl Scene {
    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    pub fn overlays(&self) -> &[ResolvedOverlay] {
        &self.overlays
    }

    /// Union of every beam, component glyph and route path; `None` for a
    /// board without items. Overlays do not count.
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Scene bounds grown to include every overlay.
    ///
    /// Labels count with their measured box, converted to scene units at
    /// `pixels_per_unit`, so text near the edge is not clipped.
    pub fn canvas_bounds(&self, pixels_per_unit: f64) -> Option<Bounds> {
        self.overlays
            .iter()
            .flat_map(|overlay| overlay.extents(pixels_per_unit))
            .fold(self.bounds, |bounds, extent| union_bounds(bounds, Some(extent)))
    }
}

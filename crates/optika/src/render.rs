//! Drawing a resolved [`Scene`] onto a [`Surface`].
//!
//! This module decides what is drawn, in which order, on which layer and
//! with which colors. Surfaces only receive scene-space geometry and styles;
//! how that geometry becomes pixels or file content is up to the surface.

use log::{debug, trace};

use optika_core::{
    color::Color,
    draw::{RenderLayer, StrokeDefinition, TextDefinition},
    geometry::{Arc, Point},
};

use crate::{
    board::{ResolvedOverlay, Scene, SceneItem},
    component::Component,
    glyph::{Glyph, Paint, Primitive, Segment},
    route::PIN_DOT_RADIUS,
};

/// How a closed shape is filled.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Color),
    /// Color ramp along the line from `from` to `to`, in scene space. Stop
    /// offsets are in `[0, 1]`; the end colors extend past either end.
    Linear {
        from: Point,
        to: Point,
        stops: Vec<(f64, Color)>,
    },
}

/// A 2D drawing target.
///
/// All coordinates are scene space (y up). Stroke widths, dot radii and
/// arrowhead lengths are in output pixels.
pub trait Surface {
    /// Strokes a polyline, filling its interior with `fill` when given.
    fn stroke_polyline(
        &mut self,
        layer: RenderLayer,
        points: &[Point],
        closed: bool,
        stroke: &StrokeDefinition,
        fill: Option<&Fill>,
    );

    /// Strokes a circular arc.
    fn draw_arc(&mut self, layer: RenderLayer, arc: &Arc, stroke: &StrokeDefinition);

    /// Strokes a path of line and arc segments, filling it when given.
    fn draw_contour(
        &mut self,
        layer: RenderLayer,
        start: Point,
        segments: &[Segment],
        closed: bool,
        stroke: &StrokeDefinition,
        fill: Option<&Fill>,
    );

    /// Draws a filled arrowhead whose tip is at `tip`, pointing along
    /// `direction`.
    fn draw_arrowhead(
        &mut self,
        layer: RenderLayer,
        tip: Point,
        direction: Point,
        length: f64,
        color: Color,
    );

    /// Draws a filled dot.
    fn draw_dot(&mut self, layer: RenderLayer, center: Point, radius: f64, color: Color);

    /// Places a label centered on `position`.
    fn place_text(&mut self, position: Point, text: &str, definition: &TextDefinition);
}

/// Arrowhead length for a line of the given stroke width.
pub fn arrowhead_length(stroke_width: f64) -> f64 {
    3.0f64.mul_add(stroke_width, 6.0)
}

/// Draws `scene` onto `surface`.
///
/// Items are drawn in board insertion order on the content layer. Overlays
/// follow in their own order; their lines go on the annotation layer and
/// their text on the text layer, so they always sit above the items.
/// Beams whose wavelength has no visible color use `fallback_beam_color`.
pub fn render_scene<S>(scene: &Scene, surface: &mut S, fallback_beam_color: Color)
where
    S: Surface + ?Sized,
{
    debug!(
        items = scene.items().len(),
        overlays = scene.overlays().len();
        "Rendering scene"
    );

    for item in scene.items() {
        match item {
            SceneItem::Beam(beam) => {
                trace!(beam = beam.id().to_string(); "Drawing beam");
                let color = beam.color(fallback_beam_color);
                let stroke = StrokeDefinition::solid(color, beam.width());
                surface.stroke_polyline(RenderLayer::Content, beam.points(), false, &stroke, None);
                if let (true, Some((from, to))) = (beam.show_arrow(), beam.last_segment()) {
                    surface.draw_arrowhead(
                        RenderLayer::Content,
                        to,
                        to.sub_point(from),
                        arrowhead_length(beam.width()),
                        color,
                    );
                }
            }
            SceneItem::Component { component, glyph } => {
                trace!(component = component.id().to_string(), kind = component.kind().name(); "Drawing component");
                draw_glyph(surface, component, glyph);
            }
            SceneItem::Route { route, path } => {
                trace!(route = route.id().to_string(); "Drawing route");
                let stroke = route.stroke();
                surface.stroke_polyline(RenderLayer::Content, path, false, stroke, None);
                for pin in route.pin_dots() {
                    surface.draw_dot(RenderLayer::Content, *pin, PIN_DOT_RADIUS, stroke.color());
                }
            }
        }
    }

    for overlay in scene.overlays() {
        match overlay {
            ResolvedOverlay::Annotation {
                text,
                position,
                target,
                leader,
                definition,
            } => {
                if let Some(stroke) = leader {
                    draw_arrow(surface, *position, *target, stroke);
                }
                surface.place_text(*position, text, definition);
            }
            ResolvedOverlay::Arrow { start, end, stroke } => {
                draw_arrow(surface, *start, *end, stroke);
            }
        }
    }
}

fn draw_glyph<S>(surface: &mut S, component: &Component, glyph: &Glyph)
where
    S: Surface + ?Sized,
{
    let style = component.style();
    let stroke = style.stroke();
    for element in glyph.elements() {
        let fill = match element.paint() {
            Paint::Outline => None,
            Paint::Body => body_fill(component, element.primitive()),
            Paint::Accent => Some(Fill::Solid(style.accent_fill())),
        };
        let fill = fill.as_ref();
        match element.primitive() {
            Primitive::Polyline { points, closed } => {
                surface.stroke_polyline(RenderLayer::Content, points, *closed, stroke, fill);
            }
            Primitive::Arc(arc) => surface.draw_arc(RenderLayer::Content, arc, stroke),
            Primitive::Contour {
                start,
                segments,
                closed,
            } => {
                surface.draw_contour(RenderLayer::Content, *start, segments, *closed, stroke, fill);
            }
        }
    }
}

/// Body fill of `component` for one placed primitive.
///
/// A body gradient is stretched over the primitive's extent along the
/// gradient direction, turned with the component.
fn body_fill(component: &Component, primitive: &Primitive) -> Option<Fill> {
    let style = component.style();
    let solid = style.body_fill().map(Fill::Solid);
    let Some(gradient) = style.body_gradient() else {
        return solid;
    };
    let Some(direction) = component
        .transform()
        .apply_vector(gradient.direction())
        .normalized()
    else {
        return solid;
    };

    let center = component.position();
    let (low, high) = primitive
        .extreme_points()
        .into_iter()
        .map(|point| {
            let offset = point.sub_point(center);
            offset.x().mul_add(direction.x(), offset.y() * direction.y())
        })
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), projection| {
            (low.min(projection), high.max(projection))
        });
    if !(low.is_finite() && high.is_finite()) {
        return solid;
    }

    Some(Fill::Linear {
        from: center.add_point(direction.scale(low)),
        to: center.add_point(direction.scale(high)),
        stops: gradient.stops().to_vec(),
    })
}

fn draw_arrow<S>(surface: &mut S, start: Point, end: Point, stroke: &StrokeDefinition)
where
    S: Surface + ?Sized,
{
    surface.stroke_polyline(RenderLayer::Annotation, &[start, end], false, stroke, None);
    let direction = end.sub_point(start);
    if direction.normalized().is_some() {
        surface.draw_arrowhead(
            RenderLayer::Annotation,
            end,
            direction,
            arrowhead_length(stroke.width()),
            stroke.color(),
        );
    }
}

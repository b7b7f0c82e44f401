//! SVG drawing surface.
//!
//! Scene space is y-up and measured in scene units; SVG is y-down and
//! measured in pixels. [`SvgSurface`] owns that mapping and is the only
//! place that builds `svg` documents.

use log::debug;
use svg::{
    Document,
    node::element::{Circle, Definitions, LinearGradient, Path, Rectangle, Stop},
};

use optika_core::{
    apply_stroke,
    color::Color,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition, Text, TextDefinition},
    geometry::{Arc, Bounds, Point, Size},
};

use crate::{
    config::CanvasConfig,
    glyph::Segment,
    render::{Fill, Surface},
};

/// Renders scene geometry into a layered SVG document.
///
/// The canvas covers the given content bounds plus the configured margin,
/// and is never smaller than the configured minimum size; extra space is
/// split evenly around the content.
#[derive(Debug)]
pub struct SvgSurface {
    /// Scene point drawn at the top-left pixel.
    origin: Point,
    pixels_per_unit: f64,
    size: Size,
    background: Option<Color>,
    /// Gradients referenced as `url(#gradient-N)`, N being the index.
    gradients: Vec<LinearGradient>,
    output: LayeredOutput,
}

impl SvgSurface {
    pub fn new(content: Option<Bounds>, canvas: &CanvasConfig, background: Option<Color>) -> Self {
        let scale = canvas.pixels_per_unit();
        let (center, content_size) = match content {
            Some(bounds) => {
                let bounds = bounds.add_margin(canvas.margin());
                (bounds.center(), bounds.to_size().scale(scale))
            }
            None => (Point::default(), Size::default()),
        };
        let size = content_size.max(Size::new(canvas.min_width(), canvas.min_height()));
        let origin = Point::new(
            center.x() - size.width() / (2.0 * scale),
            center.y() + size.height() / (2.0 * scale),
        );
        debug!(
            width = size.width(),
            height = size.height(),
            origin_x = origin.x(),
            origin_y = origin.y();
            "SVG canvas"
        );

        Self {
            origin,
            pixels_per_unit: scale,
            size,
            background,
            gradients: Vec::new(),
            output: LayeredOutput::new(),
        }
    }

    /// Canvas size in pixels.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Maps a scene point to SVG pixel coordinates.
    pub fn to_pixels(&self, point: Point) -> Point {
        Point::new(
            (point.x() - self.origin.x()) * self.pixels_per_unit,
            (self.origin.y() - point.y()) * self.pixels_per_unit,
        )
    }

    /// Builds the document, layers bottom to top.
    pub fn into_document(mut self) -> Document {
        if let Some(background) = self.background {
            let rect = Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", self.size.width())
                .set("height", self.size.height())
                .set("fill", background.to_string())
                .set("fill-opacity", background.alpha());
            self.output.add_to_layer(RenderLayer::Background, Box::new(rect));
        }

        let mut document = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", self.size.width(), self.size.height()),
            )
            .set("width", self.size.width())
            .set("height", self.size.height());
        if !self.gradients.is_empty() {
            let defs = self
                .gradients
                .drain(..)
                .fold(Definitions::new(), |defs, gradient| defs.add(gradient));
            document = document.add(defs);
        }

        self.output
            .render()
            .into_iter()
            .fold(document, |document, node| document.add(node))
    }

    pub fn into_string(self) -> String {
        self.into_document().to_string()
    }

    fn move_to(&self, data: &mut String, point: Point) {
        let p = self.to_pixels(point);
        data.push_str(&format!("M {} {}", fmt_px(p.x()), fmt_px(p.y())));
    }

    fn line_to(&self, data: &mut String, point: Point) {
        let p = self.to_pixels(point);
        data.push_str(&format!(" L {} {}", fmt_px(p.x()), fmt_px(p.y())));
    }

    /// Appends elliptical-arc commands from the arc's start to its end.
    ///
    /// A counter-clockwise scene arc is counter-clockwise on screen too,
    /// which is SVG's negative sweep direction once y is flipped. Sweeps of
    /// a full turn or more are split in two, since an SVG arc cannot end
    /// where it starts.
    fn arc_to(&self, data: &mut String, arc: &Arc) {
        let radius = fmt_px(arc.radius() * self.pixels_per_unit);
        let sweep_flag = u8::from(arc.sweep_deg() < 0.0);

        let pieces = if arc.sweep_deg().abs() >= 360.0 { 2 } else { 1 };
        let step = arc.sweep_deg() / f64::from(pieces);
        for piece in 1..=pieces {
            let end = self.to_pixels(arc.point_at(arc.start_deg() + step * f64::from(piece)));
            let large_arc = u8::from(step.abs() > 180.0);
            data.push_str(&format!(
                " A {radius} {radius} 0 {large_arc} {sweep_flag} {} {}",
                fmt_px(end.x()),
                fmt_px(end.y())
            ));
        }
    }

    /// Registers a gradient in pixel space and returns its fill reference.
    fn add_gradient(&mut self, from: Point, to: Point, stops: &[(f64, Color)]) -> String {
        let id = format!("gradient-{}", self.gradients.len());
        let (from, to) = (self.to_pixels(from), self.to_pixels(to));
        let gradient = stops.iter().fold(
            LinearGradient::new()
                .set("id", id.as_str())
                .set("gradientUnits", "userSpaceOnUse")
                .set("x1", fmt_px(from.x()))
                .set("y1", fmt_px(from.y()))
                .set("x2", fmt_px(to.x()))
                .set("y2", fmt_px(to.y())),
            |gradient, (offset, color)| {
                gradient.add(
                    Stop::new()
                        .set("offset", *offset)
                        .set("stop-color", color.to_string())
                        .set("stop-opacity", color.alpha()),
                )
            },
        );
        self.gradients.push(gradient);
        format!("url(#{id})")
    }

    fn add_path(
        &mut self,
        layer: RenderLayer,
        data: String,
        stroke: &StrokeDefinition,
        fill: Option<&Fill>,
    ) {
        let path = Path::new().set("d", data);
        let path = match fill {
            Some(Fill::Solid(color)) => path
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha()),
            Some(Fill::Linear { from, to, stops }) => {
                path.set("fill", self.add_gradient(*from, *to, stops))
            }
            None => path.set("fill", "none"),
        };
        let path = apply_stroke!(path, stroke);
        self.output.add_to_layer(layer, Box::new(path));
    }
}

impl Surface for SvgSurface {
    fn stroke_polyline(
        &mut self,
        layer: RenderLayer,
        points: &[Point],
        closed: bool,
        stroke: &StrokeDefinition,
        fill: Option<&Fill>,
    ) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut data = String::new();
        self.move_to(&mut data, *first);
        for point in rest {
            self.line_to(&mut data, *point);
        }
        if closed {
            data.push_str(" Z");
        }
        self.add_path(layer, data, stroke, fill);
    }

    fn draw_arc(&mut self, layer: RenderLayer, arc: &Arc, stroke: &StrokeDefinition) {
        let mut data = String::new();
        self.move_to(&mut data, arc.start_point());
        self.arc_to(&mut data, arc);
        self.add_path(layer, data, stroke, None);
    }

    fn draw_contour(
        &mut self,
        layer: RenderLayer,
        start: Point,
        segments: &[Segment],
        closed: bool,
        stroke: &StrokeDefinition,
        fill: Option<&Fill>,
    ) {
        let mut data = String::new();
        self.move_to(&mut data, start);
        for segment in segments {
            match segment {
                Segment::LineTo(point) => self.line_to(&mut data, *point),
                Segment::ArcTo(arc) => self.arc_to(&mut data, arc),
            }
        }
        if closed {
            data.push_str(" Z");
        }
        self.add_path(layer, data, stroke, fill);
    }

    fn draw_arrowhead(
        &mut self,
        layer: RenderLayer,
        tip: Point,
        direction: Point,
        length: f64,
        color: Color,
    ) {
        // Screen-space direction: flip y
        let Some(unit) = Point::new(direction.x(), -direction.y()).normalized() else {
            return;
        };
        let tip = self.to_pixels(tip);
        let base = tip.sub_point(unit.scale(length));
        let half_width = unit.perpendicular().scale(length * 0.4);
        let (left, right) = (base.add_point(half_width), base.sub_point(half_width));

        let data = format!(
            "M {} {} L {} {} L {} {} Z",
            fmt_px(tip.x()),
            fmt_px(tip.y()),
            fmt_px(left.x()),
            fmt_px(left.y()),
            fmt_px(right.x()),
            fmt_px(right.y())
        );
        let path = Path::new()
            .set("d", data)
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha())
            .set("stroke", "none");
        self.output.add_to_layer(layer, Box::new(path));
    }

    fn draw_dot(&mut self, layer: RenderLayer, center: Point, radius: f64, color: Color) {
        let center = self.to_pixels(center);
        let dot = Circle::new()
            .set("cx", fmt_px(center.x()))
            .set("cy", fmt_px(center.y()))
            .set("r", radius)
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha());
        self.output.add_to_layer(layer, Box::new(dot));
    }

    fn place_text(&mut self, position: Point, text: &str, definition: &TextDefinition) {
        let center = self.to_pixels(position);
        let label = Text::new(definition, text);
        self.output.merge(label.render_to_layers(center));
    }
}

/// Pixel coordinate with three decimals and no trailing zeros.
fn fmt_px(value: f64) -> String {
    let formatted = format!("{value:.3}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        _ => trimmed.to_string(),
    }
}

//! Placed optical components.
//!
//! A [`Component`] is a [`ComponentKind`] from a closed catalog, placed at a
//! position and rotated about its optical center. Its shape comes from the
//! glyph catalog ([`crate::glyph`]); this module only owns placement, size
//! parameters, styling and the contact ports used to snap components onto
//! beams, fibers and RF wires.

use std::{fmt, str::FromStr};

use optika_core::{
    color::Color,
    draw::StrokeDefinition,
    geometry::{Point, Transform, compose_transform, normalize_degrees},
    identifier::Id,
};

use crate::{Error, glyph::{self, Glyph}};

/// Every component the catalog can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    FlatMirror,
    DichroicMirror,
    ConvexLens,
    ConcaveLens,
    PlanoConvexLens,
    /// Polarizing beam-splitter cube
    Pbs,
    /// Non-polarizing beam-splitter cube
    Npbs,
    /// Free-space electro-optic modulator
    Eom,
    HalfWavePlate,
    QuarterWavePlate,
    FiberCollimator,
    FiberBeamSplitter,
    FiberDichroic,
    FiberEom,
}

impl ComponentKind {
    /// All kinds, in catalog order.
    pub const ALL: [ComponentKind; 14] = [
        Self::FlatMirror,
        Self::DichroicMirror,
        Self::ConvexLens,
        Self::ConcaveLens,
        Self::PlanoConvexLens,
        Self::Pbs,
        Self::Npbs,
        Self::Eom,
        Self::HalfWavePlate,
        Self::QuarterWavePlate,
        Self::FiberCollimator,
        Self::FiberBeamSplitter,
        Self::FiberDichroic,
        Self::FiberEom,
    ];

    /// Snake-case name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::FlatMirror => "flat_mirror",
            Self::DichroicMirror => "dichroic_mirror",
            Self::ConvexLens => "convex_lens",
            Self::ConcaveLens => "concave_lens",
            Self::PlanoConvexLens => "plano_convex_lens",
            Self::Pbs => "pbs",
            Self::Npbs => "npbs",
            Self::Eom => "eom",
            Self::HalfWavePlate => "half_wave_plate",
            Self::QuarterWavePlate => "quarter_wave_plate",
            Self::FiberCollimator => "fiber_collimator",
            Self::FiberBeamSplitter => "fiber_beam_splitter",
            Self::FiberDichroic => "fiber_dichroic",
            Self::FiberEom => "fiber_eom",
        }
    }

    /// Returns `true` for kinds drawn as fixed fiber-domain housings.
    pub fn is_fiber(self) -> bool {
        matches!(
            self,
            Self::FiberCollimator | Self::FiberBeamSplitter | Self::FiberDichroic | Self::FiberEom
        )
    }

    /// Rotation a freshly constructed component gets. Beam-splitter cubes
    /// start at 45°, standing on a corner.
    pub fn default_angle(self) -> f64 {
        match self {
            Self::Pbs | Self::Npbs => 45.0,
            _ => 0.0,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComponentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat_mirror" | "mirror" => Ok(Self::FlatMirror),
            "dichroic_mirror" | "dichroic" => Ok(Self::DichroicMirror),
            "convex_lens" => Ok(Self::ConvexLens),
            "concave_lens" => Ok(Self::ConcaveLens),
            "plano_convex_lens" => Ok(Self::PlanoConvexLens),
            "pbs" => Ok(Self::Pbs),
            "npbs" => Ok(Self::Npbs),
            "eom" => Ok(Self::Eom),
            "half_wave_plate" | "hwp" => Ok(Self::HalfWavePlate),
            "quarter_wave_plate" | "qwp" => Ok(Self::QuarterWavePlate),
            "fiber_collimator" => Ok(Self::FiberCollimator),
            "fiber_beam_splitter" | "fiber_bs" => Ok(Self::FiberBeamSplitter),
            "fiber_dichroic" => Ok(Self::FiberDichroic),
            "fiber_eom" => Ok(Self::FiberEom),
            _ => Err(Error::UnknownComponentKind(s.to_string())),
        }
    }
}

/// Kind-specific dimensions in scene units.
///
/// `width` is the extent along the local x axis (the beam direction at 0°)
/// and `height` along the local y axis (the face). `factor` is a shape ratio
/// whose meaning depends on the kind:
///
/// | Kind | `width` | `height` | `factor` |
/// |------|---------|----------|----------|
/// | mirrors | thickness 0.22 | 1.2 | back bar fraction of the thickness, 0.285 |
/// | convex lens | edge thickness 0.05 | 1.2 | center thickness / edge thickness, 6 |
/// | plano-convex lens | edge thickness 0.05 | 1.2 | center thickness / edge thickness, 12 |
/// | concave lens | edge thickness 0.6 | 1.2 | center thickness / edge thickness, 0.45 |
/// | beam-splitter cubes | 0.8 | 0.8 | unused |
/// | EOM | 0.8 | 0.6 | electrode cap height / height, 0.24 |
/// | wave plates | 0.18 | 1.2 | unused |
/// | fiber collimator | 1.0 | 0.45 | unused |
/// | fiber housings | 0.9 | 0.4 | unused |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeParams {
    width: f64,
    height: f64,
    factor: f64,
}

impl SizeParams {
    pub fn new(width: f64, height: f64, factor: f64) -> Self {
        Self {
            width,
            height,
            factor,
        }
    }

    /// Documented defaults for `kind`.
    pub fn for_kind(kind: ComponentKind) -> Self {
        use ComponentKind::*;
        match kind {
            FlatMirror | DichroicMirror => Self::new(0.22, 1.2, 0.285),
            ConvexLens => Self::new(0.05, 1.2, 6.0),
            PlanoConvexLens => Self::new(0.05, 1.2, 12.0),
            ConcaveLens => Self::new(0.6, 1.2, 0.45),
            Pbs | Npbs => Self::new(0.8, 0.8, 0.0),
            Eom => Self::new(0.8, 0.6, 0.24),
            HalfWavePlate | QuarterWavePlate => Self::new(0.18, 1.2, 0.0),
            FiberCollimator => Self::new(1.0, 0.45, 0.0),
            FiberBeamSplitter | FiberDichroic | FiberEom => Self::new(0.9, 0.4, 0.0),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn with_factor(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }
}

/// A linear color ramp across a component body.
///
/// `direction` is given in the component's local frame and turns with the
/// component. The ramp spans the body's full extent along that direction;
/// stop offsets run from 0 at the trailing edge to 1 at the leading one.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyGradient {
    direction: Point,
    stops: Vec<(f64, Color)>,
}

impl BodyGradient {
    pub fn new(direction: Point, stops: Vec<(f64, Color)>) -> Self {
        Self { direction, stops }
    }

    /// Light center between two `edge` bands, across the thickness (local x).
    pub fn banded(edge: Color, center: Color) -> Self {
        Self::new(
            Point::new(1.0, 0.0),
            vec![(0.0, edge), (0.5, center), (1.0, edge)],
        )
    }

    pub fn direction(&self) -> Point {
        self.direction
    }

    pub fn stops(&self) -> &[(f64, Color)] {
        &self.stops
    }
}

/// How a component glyph is stroked and filled.
///
/// Body primitives are filled with `body_gradient` when set, otherwise with
/// `body_fill` (none when unset); accent primitives with `accent_fill`.
/// Every primitive is stroked with `stroke`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentStyle {
    stroke: StrokeDefinition,
    body_fill: Option<Color>,
    body_gradient: Option<BodyGradient>,
    accent_fill: Color,
}

impl ComponentStyle {
    pub fn new(stroke: StrokeDefinition, body_fill: Option<Color>, accent_fill: Color) -> Self {
        Self {
            stroke,
            body_fill,
            body_gradient: None,
            accent_fill,
        }
    }

    /// Default look of each kind.
    ///
    /// Splitter cubes shade diagonally from white at the top-left corner;
    /// dichroic mirrors and wave plates carry a light band down their middle.
    pub fn for_kind(kind: ComponentKind) -> Self {
        use ComponentKind::*;
        // (stroke color, stroke width, body fill, body opacity, accent fill)
        let (stroke, width, body, opacity, accent) = match kind {
            FlatMirror => ("black", 1.2, "#9fb8c4", 1.0, "black"),
            DichroicMirror => ("black", 1.2, "#7fd67a", 1.0, "black"),
            ConvexLens | ConcaveLens => ("black", 2.0, "#bfe6fb", 0.6, "black"),
            PlanoConvexLens => ("black", 1.0, "#bfe6fb", 0.6, "black"),
            Pbs => ("black", 1.0, "#89a4b6", 0.7, "black"),
            Npbs => ("black", 1.0, "#c4d2db", 0.7, "black"),
            Eom => ("black", 1.0, "#ffff58", 1.0, "#8a644a"),
            HalfWavePlate => ("black", 1.0, "#9ecbf0", 1.0, "black"),
            QuarterWavePlate => ("black", 1.0, "#8fdc8a", 1.0, "black"),
            FiberCollimator => ("black", 1.0, "#8c8c8c", 1.0, "#3a3a3a"),
            FiberBeamSplitter => ("#1f5fa8", 1.2, "#dce9f7", 1.0, "#1f5fa8"),
            FiberDichroic => ("#2f8a3a", 1.2, "#dff3dc", 1.0, "#2f8a3a"),
            FiberEom => ("#b2641a", 1.2, "#f8e7d6", 1.0, "#b2641a"),
        };
        let body_fill = css(body).with_alpha(opacity);
        let body_gradient = match kind {
            Pbs | Npbs => Some(BodyGradient::new(
                Point::new(1.0, -1.0),
                vec![(0.0, css("white").with_alpha(opacity)), (1.0, body_fill)],
            )),
            DichroicMirror => Some(BodyGradient::banded(css("#2fab3a"), css("#d9ffd0"))),
            QuarterWavePlate => Some(BodyGradient::banded(css("#2fab3a"), css("#e7ffdc"))),
            HalfWavePlate => Some(BodyGradient::banded(css("#3f7fc0"), css("#e3f1ff"))),
            _ => None,
        };
        Self {
            stroke: StrokeDefinition::solid(css(stroke), width),
            body_fill: Some(body_fill),
            body_gradient,
            accent_fill: css(accent),
        }
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn body_fill(&self) -> Option<Color> {
        self.body_fill
    }

    pub fn body_gradient(&self) -> Option<&BodyGradient> {
        self.body_gradient.as_ref()
    }

    pub fn accent_fill(&self) -> Color {
        self.accent_fill
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_body_fill(mut self, fill: Option<Color>) -> Self {
        self.body_fill = fill;
        self
    }

    pub fn with_body_gradient(mut self, gradient: Option<BodyGradient>) -> Self {
        self.body_gradient = gradient;
        self
    }

    pub fn with_accent_fill(mut self, fill: Color) -> Self {
        self.accent_fill = fill;
        self
    }
}

fn css(color: &str) -> Color {
    Color::new(color).expect("built-in component colors are valid CSS colors")
}

/// Named points where other items attach to a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Port {
    /// Where the free-space beam meets the component.
    Beam,
    /// Where a fiber attaches; fiber-domain kinds only.
    Fiber,
    /// Upper RF electrode; modulators only.
    RfTop,
    /// Lower RF electrode; modulators only.
    RfBottom,
}

/// An optical component placed in the scene.
///
/// # Examples
///
/// ```
/// # use optika::component::Component;
/// # use optika_core::geometry::Point;
/// let mut mirror = Component::flat_mirror("m1").with_angle(45.0);
/// mirror.align_contact_to(Point::new(2.0, 0.0));
///
/// let contact = mirror.beam_contact_point();
/// assert!(contact.approx_eq(Point::new(2.0, 0.0), 1e-9));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    id: Id,
    kind: ComponentKind,
    position: Point,
    angle_deg: f64,
    size: SizeParams,
    style: ComponentStyle,
}

macro_rules! kind_constructors {
    ($($(#[$doc:meta])* $name:ident => $kind:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(id: impl Into<Id>) -> Self {
                Self::new(id, ComponentKind::$kind)
            }
        )*
    };
}

impl Component {
    /// Creates a component at the origin with the kind's default angle,
    /// size and style.
    pub fn new(id: impl Into<Id>, kind: ComponentKind) -> Self {
        Self {
            id: id.into(),
            kind,
            position: Point::default(),
            angle_deg: kind.default_angle(),
            size: SizeParams::for_kind(kind),
            style: ComponentStyle::for_kind(kind),
        }
    }

    /// Creates a component from a kind name such as `"convex_lens"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownComponentKind`] for names outside the catalog.
    pub fn from_kind_name(id: impl Into<Id>, kind: &str) -> Result<Self, Error> {
        Ok(Self::new(id, kind.parse()?))
    }

    kind_constructors! {
        flat_mirror => FlatMirror,
        dichroic_mirror => DichroicMirror,
        convex_lens => ConvexLens,
        concave_lens => ConcaveLens,
        plano_convex_lens => PlanoConvexLens,
        /// Polarizing beam-splitter cube, rotated 45° by default.
        pbs => Pbs,
        /// Non-polarizing beam-splitter cube, rotated 45° by default.
        npbs => Npbs,
        eom => Eom,
        half_wave_plate => HalfWavePlate,
        quarter_wave_plate => QuarterWavePlate,
        fiber_collimator => FiberCollimator,
        fiber_beam_splitter => FiberBeamSplitter,
        fiber_dichroic => FiberDichroic,
        fiber_eom => FiberEom,
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Sets the rotation, normalized to `[0, 360)`.
    pub fn with_angle(mut self, angle_deg: f64) -> Self {
        self.angle_deg = normalize_degrees(angle_deg);
        self
    }

    pub fn with_size(mut self, size: SizeParams) -> Self {
        self.size = size;
        self
    }

    pub fn with_style(mut self, style: ComponentStyle) -> Self {
        self.style = style;
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    pub fn size(&self) -> &SizeParams {
        &self.size
    }

    pub fn style(&self) -> &ComponentStyle {
        &self.style
    }

    /// Moves the optical center to `position`, keeping the rotation.
    pub fn relocate(&mut self, position: Point) -> &mut Self {
        self.position = position;
        self
    }

    /// Moves the component so its beam port lands on `point`.
    pub fn align_contact_to(&mut self, point: Point) -> &mut Self {
        let contact = self.beam_contact_point();
        self.position = self.position.add_point(point.sub_point(contact));
        self
    }

    /// Moves the component so `port` lands on `point`.
    ///
    /// Returns `false` and leaves the component in place when the kind has
    /// no such port.
    pub fn align_port_to(&mut self, port: Port, point: Point) -> bool {
        match self.port_point(port) {
            Some(current) => {
                self.position = self.position.add_point(point.sub_point(current));
                true
            }
            None => false,
        }
    }

    /// Placement transform: rotate about the local origin, then translate
    /// to the position.
    pub fn transform(&self) -> Transform {
        compose_transform(self.position, self.angle_deg)
    }

    /// Glyph in the component's local frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] when the size parameters cannot form
    /// the kind's shape.
    pub fn local_glyph(&self) -> Result<Glyph, Error> {
        glyph::glyph_for(self.kind, &self.size)
    }

    /// Glyph placed in scene space.
    ///
    /// # Errors
    ///
    /// Same as [`Component::local_glyph`].
    pub fn absolute_glyph(&self) -> Result<Glyph, Error> {
        Ok(self.local_glyph()?.transformed(&self.transform()))
    }

    /// Scene position of `port`, or `None` when the kind lacks it.
    pub fn port_point(&self, port: Port) -> Option<Point> {
        self.local_port(port).map(|local| self.transform().apply(local))
    }

    /// Scene position of the beam port.
    pub fn beam_contact_point(&self) -> Point {
        self.transform().apply(self.local_beam_contact())
    }

    pub fn fiber_contact_point(&self) -> Option<Point> {
        self.port_point(Port::Fiber)
    }

    pub fn rf_contact_top(&self) -> Option<Point> {
        self.port_point(Port::RfTop)
    }

    pub fn rf_contact_bottom(&self) -> Option<Point> {
        self.port_point(Port::RfBottom)
    }

    fn local_beam_contact(&self) -> Point {
        match self.kind {
            // Mirrors meet the beam on the reflective face, not the center
            ComponentKind::FlatMirror => Point::new(-self.size.width / 2.0, 0.0),
            ComponentKind::FiberCollimator => Point::new(-self.size.width / 2.0, 0.0),
            _ => Point::default(),
        }
    }

    fn local_port(&self, port: Port) -> Option<Point> {
        let SizeParams {
            width,
            height,
            factor,
        } = self.size;
        match (port, self.kind) {
            (Port::Beam, _) => Some(self.local_beam_contact()),
            (Port::Fiber, ComponentKind::FiberCollimator) => {
                let (left_block, _, _) = glyph::collimator_blocks(width);
                let nudge = width.min(height) * 0.003;
                Some(Point::new(-width / 2.0 + 2.5 * left_block + nudge, 0.0))
            }
            (Port::Fiber, kind) if kind.is_fiber() => Some(Point::default()),
            (Port::RfTop, ComponentKind::Eom) => {
                Some(Point::new(0.0, height / 2.0 - height * factor / 2.0))
            }
            (Port::RfBottom, ComponentKind::Eom) => {
                Some(Point::new(0.0, -(height / 2.0 - height * factor / 2.0)))
            }
            (Port::RfTop, ComponentKind::FiberEom) => Some(Point::new(0.0, height / 2.0)),
            (Port::RfBottom, ComponentKind::FiberEom) => Some(Point::new(0.0, -height / 2.0)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in ComponentKind::ALL {
            assert_eq!(kind.name().parse::<ComponentKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_aliases() {
        assert_eq!("hwp".parse::<ComponentKind>().unwrap(), ComponentKind::HalfWavePlate);
        assert_eq!("dichroic".parse::<ComponentKind>().unwrap(), ComponentKind::DichroicMirror);
    }

    #[test]
    fn test_unknown_kind() {
        let err = "prism".parse::<ComponentKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownComponentKind(name) if name == "prism"));

        let err = Component::from_kind_name("x", "Flat_Mirror").unwrap_err();
        assert!(matches!(err, Error::UnknownComponentKind(_)));
    }

    #[test]
    fn test_defaults() {
        let mirror = Component::flat_mirror("m");
        assert_eq!(mirror.size().height(), 1.2);
        assert_eq!(mirror.size().width(), 0.22);
        assert_eq!(mirror.angle_deg(), 0.0);

        let lens = Component::convex_lens("l");
        assert_eq!(lens.size().factor(), 6.0);

        let cube = Component::pbs("bs");
        assert_eq!(cube.angle_deg(), 45.0);
        assert_eq!(cube.size().width(), 0.8);
    }

    #[test]
    fn test_angle_normalized() {
        assert_eq!(Component::flat_mirror("m").with_angle(-45.0).angle_deg(), 315.0);
        assert_eq!(Component::flat_mirror("m").with_angle(720.0).angle_deg(), 0.0);
    }

    #[test]
    fn test_mirror_contact_on_face() {
        let mirror = Component::flat_mirror("m").with_position(Point::new(1.0, 1.0));
        assert!(
            mirror
                .beam_contact_point()
                .approx_eq(Point::new(0.89, 1.0), 1e-12)
        );

        // Rotating by 90° moves the face below the center
        let rotated = mirror.with_angle(90.0);
        assert!(
            rotated
                .beam_contact_point()
                .approx_eq(Point::new(1.0, 0.89), 1e-12)
        );
    }

    #[test]
    fn test_align_contact_to() {
        let mut mirror = Component::flat_mirror("m").with_angle(135.0);
        mirror.align_contact_to(Point::new(2.0, 4.0));
        assert!(
            mirror
                .beam_contact_point()
                .approx_eq(Point::new(2.0, 4.0), 1e-12)
        );

        let mut lens = Component::convex_lens("l");
        lens.align_contact_to(Point::new(1.0, 0.0));
        assert_eq!(lens.position(), Point::new(1.0, 0.0));
    }

    #[test]
    fn test_collimator_ports() {
        let collimator = Component::fiber_collimator("c").with_angle(180.0);
        let beam = collimator.beam_contact_point();
        assert_approx_eq!(f64, beam.x(), 0.5, epsilon = 1e-12);
        assert_approx_eq!(f64, beam.y(), 0.0, epsilon = 1e-12);

        let fiber = collimator.fiber_contact_point().unwrap();
        assert!(fiber.x() < 0.0);
        assert_approx_eq!(f64, fiber.y(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_align_port_to() {
        let mut collimator = Component::fiber_collimator("c");
        assert!(collimator.align_port_to(Port::Fiber, Point::new(5.0, 5.0)));
        assert!(
            collimator
                .fiber_contact_point()
                .unwrap()
                .approx_eq(Point::new(5.0, 5.0), 1e-12)
        );

        let mut lens = Component::convex_lens("l");
        assert!(!lens.align_port_to(Port::Fiber, Point::new(5.0, 5.0)));
        assert_eq!(lens.position(), Point::default());
    }

    #[test]
    fn test_eom_rf_contacts() {
        let eom = Component::eom("eom");
        let top = eom.rf_contact_top().unwrap();
        let bottom = eom.rf_contact_bottom().unwrap();
        // h / 2 - cap / 2 = 0.3 - 0.072
        assert_approx_eq!(f64, top.y(), 0.228, epsilon = 1e-12);
        assert_approx_eq!(f64, bottom.y(), -0.228, epsilon = 1e-12);

        assert!(Component::convex_lens("l").rf_contact_top().is_none());
    }

    #[test]
    fn test_relocate() {
        let mut lens = Component::concave_lens("l").with_angle(30.0);
        lens.relocate(Point::new(-1.0, 2.0));
        assert_eq!(lens.position(), Point::new(-1.0, 2.0));
        assert_eq!(lens.angle_deg(), 30.0);
    }

    #[test]
    fn test_styles_fill_bodies() {
        for kind in ComponentKind::ALL {
            let style = ComponentStyle::for_kind(kind);
            assert!(style.body_fill().is_some(), "{kind} has no body fill");
            assert!(style.stroke().width() > 0.0);
        }
    }

    #[test]
    fn test_shaded_kinds_have_gradients() {
        let pbs = ComponentStyle::for_kind(ComponentKind::Pbs);
        let gradient = pbs.body_gradient().unwrap();
        assert_eq!(gradient.direction(), Point::new(1.0, -1.0));
        assert_eq!(gradient.stops().len(), 2);

        for kind in [
            ComponentKind::DichroicMirror,
            ComponentKind::HalfWavePlate,
            ComponentKind::QuarterWavePlate,
        ] {
            let style = ComponentStyle::for_kind(kind);
            let gradient = style.body_gradient().unwrap();
            assert_eq!(gradient.direction(), Point::new(1.0, 0.0), "{kind}");
            assert_eq!(gradient.stops()[0].1, gradient.stops()[2].1, "{kind}");
        }

        assert!(ComponentStyle::for_kind(ComponentKind::FlatMirror).body_gradient().is_none());
        let plain = ComponentStyle::for_kind(ComponentKind::Pbs).with_body_gradient(None);
        assert!(plain.body_gradient().is_none());
    }
}

//! A folded 635 nm beam with mirrors, a splitter, a lens, a wave plate and
//! an EOM, fed from a fiber collimator.
//!
//! Writes `mirror_and_lenses.svg` to the current directory, or to the path
//! given as the first argument.

use std::env;

use optika::{
    Error,
    anchor::{Anchor, Side},
    annotation::Annotation,
    beam::Beam,
    board::Board,
    component::Component,
    geometry::Point,
    route::Route,
};

fn build_board() -> Result<Board, Error> {
    let unit = 2.0;
    let p1 = Point::new(0.0, 0.0);
    let p2 = Point::new(unit, 0.0);
    let p3 = Point::new(unit, unit);
    let p4 = Point::new(unit, 2.0 * unit);
    let p5 = Point::new(2.0 * unit, 2.0 * unit);
    let p6 = Point::new(2.0 * unit, 3.0 * unit);

    let beam = Beam::from_points("probe", 635.0, [p1, p2, p3, p4, p5, p6])?;
    let mut branch = beam.branch("probe_reflected", p3);
    branch
        .line_to(Point::new(2.0 * unit, unit))
        .line_to(Point::new(2.0 * unit, 0.0));
    let p7 = Point::new(2.0 * unit, unit);

    let placed = |mut component: Component, angle: f64, at: Point| {
        component = component.with_angle(angle);
        component.align_contact_to(at);
        component
    };

    let collimator = placed(Component::fiber_collimator("c1"), 180.0, p1);
    let eom = placed(Component::eom("eom"), -90.0, p3.divide(p4, 1.0, 1.0)?);

    let mut board = Board::default();
    board
        .add_beam(beam)
        .add_beam(branch)
        .add(placed(Component::flat_mirror("m1"), -45.0, p2))
        .add(placed(Component::npbs("d1"), 90.0, p3))
        .add(placed(Component::flat_mirror("m2"), 135.0, p4))
        .add(placed(Component::flat_mirror("m3"), -45.0, p5))
        .add(placed(Component::flat_mirror("m4"), 45.0, p7))
        .add(placed(Component::plano_convex_lens("l1"), 180.0, p1.divide(p2, 1.0, 1.0)?))
        .add(placed(Component::quarter_wave_plate("qwp"), -90.0, p2.divide(p3, 1.0, 1.0)?));

    if let Some(top) = eom.rf_contact_top() {
        board.add_route(Route::wire("rf", top, top.add_point(Point::new(1.0, 0.0))));
    }
    if let Some(contact) = collimator.fiber_contact_point() {
        let mut fiber = Route::fiber("fiber", contact, contact.add_point(Point::new(-3.0, 0.0)));
        fiber
            .add_pin(contact.add_point(Point::new(-1.0, 0.0)))
            .add_pin(contact.add_point(Point::new(-1.0, 1.0)))
            .add_pin(contact.add_point(Point::new(-2.0, 1.0)));
        board.add_route(fiber);
    }
    board.add(collimator).add(eom);

    board
        .add_annotation(
            Annotation::new("635 nm", Anchor::on_beam("probe", 0.1)).with_text_offset(Point::new(0.0, -0.4)),
        )
        .add_annotation(
            Annotation::new("EOM", Anchor::on_component("eom", Side::Top, 0.2))
                .with_leader(Point::new(-1.0, 0.4)),
        );

    Ok(board)
}

fn main() -> Result<(), Error> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "mirror_and_lenses.svg".to_string());

    let board = build_board()?;
    board.save(&path)?;
    println!("Saved demo to {path}");
    Ok(())
}

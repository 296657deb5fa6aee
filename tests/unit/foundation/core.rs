use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn angle_views_round_trip() {
    let a = Angle::from_degrees(180.0);
    assert!(approx(a.radians(), std::f64::consts::PI));

    let b = Angle::from_radians(std::f64::consts::FRAC_PI_2);
    assert!(approx(b.degrees(), 90.0));

    let c = Angle::from_degrees(30.0) + Angle::from_degrees(60.0) - Angle::from_degrees(10.0);
    assert!(approx(c.degrees(), 80.0));
    assert!(approx((-c).abs().degrees(), 80.0));
}

#[test]
fn point_on_circle_follows_canvas_orientation() {
    let center = Point::new(100.0, 100.0);

    let top = point_on_circle(center, Angle::TWELVE_O_CLOCK, 50.0);
    assert!(approx(top.x, 100.0));
    assert!(approx(top.y, 50.0));

    let right = point_on_circle(center, Angle::ZERO, 50.0);
    assert!(approx(right.x, 150.0));
    assert!(approx(right.y, 100.0));

    // Clockwise on screen: +90° is six o'clock.
    let bottom = point_on_circle(center, Angle::from_degrees(90.0), 50.0);
    assert!(approx(bottom.x, 100.0));
    assert!(approx(bottom.y, 150.0));
}

#[test]
fn arc_length_is_radius_times_sweep() {
    assert!(approx(
        arc_length(10.0, Angle::FULL_TURN),
        2.0 * std::f64::consts::PI * 10.0
    ));
    assert!(approx(arc_length(4.0, Angle::from_degrees(90.0)), 2.0 * std::f64::consts::PI));
    assert!(arc_length(4.0, Angle::from_degrees(-90.0)) < 0.0);
}

#[test]
fn premultiply_rounds_like_the_rasterizer() {
    assert_eq!(Rgba8::BLACK.premultiplied(), [0, 0, 0, 255]);
    assert_eq!(Rgba8::new(255, 128, 0, 128).premultiplied(), [128, 64, 0, 128]);
    assert_eq!(Rgba8::TRANSPARENT.premultiplied(), [0, 0, 0, 0]);
}

use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn clockwise_sweeps_follow_canvas_rules() {
    let d = Angle::from_degrees;
    assert!(approx(canvas_sweep(d(-90.0), d(0.0), false), TAU / 4.0));
    assert!(approx(canvas_sweep(d(10.0), d(10.0), false), 0.0));
    // Going backward clockwise wraps the long way round.
    assert!(approx(canvas_sweep(d(90.0), d(0.0), false), 3.0 * TAU / 4.0));
    // A full turn or more is a closed circle.
    assert!(approx(canvas_sweep(d(0.0), d(720.0), false), TAU));
}

#[test]
fn anticlockwise_sweeps_are_negative() {
    let d = Angle::from_degrees;
    assert!(approx(canvas_sweep(d(0.0), d(-90.0), true), -TAU / 4.0));
    assert!(approx(canvas_sweep(d(0.0), d(90.0), true), -3.0 * TAU / 4.0));
    assert!(approx(canvas_sweep(d(0.0), d(-400.0), true), -TAU));
}

#[test]
fn stroke_style_defaults_and_partial_json() {
    let s = StrokeStyle::default();
    assert_eq!(s.color, Rgba8::BLACK);
    assert_eq!(s.width, 3.0);
    assert_eq!(s.background, None);

    let parsed: StrokeStyle = serde_json::from_str(r#"{ "width": 5 }"#).unwrap();
    assert_eq!(parsed.width, 5.0);
    assert_eq!(parsed.color, Rgba8::BLACK);
}

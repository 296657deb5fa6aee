use super::*;

#[test]
fn clear_drops_commands_and_counts() {
    let mut s = RecordingSurface::square(10.0);
    s.stroke_line(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
    s.stroke_arc(Point::new(5.0, 5.0), 2.0, Angle::ZERO, Angle::FULL_TURN, false);
    assert_eq!(s.lines().count(), 1);
    assert_eq!(s.arcs().collect::<Vec<_>>(), vec![(2.0, Angle::ZERO, Angle::FULL_TURN)]);

    s.clear();
    assert!(s.commands().is_empty());
    assert_eq!(s.clear_count(), 1);
    assert_eq!(s.size(), Size::new(10.0, 10.0));
}

#[test]
fn commands_serialize_with_an_op_tag() {
    let mut s = RecordingSurface::square(10.0);
    s.stroke_arc(Point::new(5.0, 5.0), 2.0, Angle::ZERO, Angle::from_degrees(90.0), false);
    let json: serde_json::Value = serde_json::from_str(&s.to_json().unwrap()).unwrap();
    assert_eq!(json[0]["op"], "arc");
    assert_eq!(json[0]["end"], 90.0);
    assert_eq!(json[0]["center"]["x"], 5.0);
}

#[test]
fn factory_counts_lifecycle_and_can_refuse() {
    let mut f = RecordingFactory::new();
    let s = f.create(64).unwrap();
    assert_eq!(s.size(), Size::new(64.0, 64.0));
    f.destroy(s);
    assert_eq!((f.created(), f.destroyed()), (1, 1));

    f.refuse_surfaces(true);
    let err = f.create(64).unwrap_err();
    assert!(err.to_string().starts_with("surface error:"));
    assert_eq!(f.created(), 1);
}

use super::*;
use crate::foundation::core::Rgba8;

#[test]
fn rejects_degenerate_sizes() {
    assert!(CpuSurface::new(0, 10, StrokeStyle::default()).is_err());
    assert!(CpuSurface::new(70_000, 10, StrokeStyle::default()).is_err());
}

#[test]
fn zero_sweep_arcs_are_skipped_and_clear_resets() {
    let mut s = CpuSurface::new(32, 32, StrokeStyle::default()).unwrap();
    s.stroke_arc(Point::new(16.0, 16.0), 8.0, Angle::ZERO, Angle::ZERO, false);
    assert_eq!(s.path_count(), 0);

    s.stroke_arc(Point::new(16.0, 16.0), 8.0, Angle::ZERO, Angle::FULL_TURN, false);
    s.stroke_line(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    assert_eq!(s.path_count(), 2);

    s.clear();
    assert_eq!(s.path_count(), 0);
}

#[test]
fn strokes_leave_ink_and_empty_surfaces_do_not() {
    let mut s = CpuSurface::new(32, 32, StrokeStyle::default()).unwrap();
    let blank = s.render().unwrap();
    assert_eq!(blank.data.len(), 32 * 32 * 4);
    assert!(!blank.has_ink(Rgba8::TRANSPARENT));

    s.stroke_line(Point::new(2.0, 16.0), Point::new(30.0, 16.0));
    let inked = s.render().unwrap();
    assert!(inked.has_ink(Rgba8::TRANSPARENT));
}

#[test]
fn background_fills_the_surface() {
    let style = StrokeStyle {
        background: Some(Rgba8::WHITE),
        ..StrokeStyle::default()
    };
    let mut s = CpuSurface::new(8, 8, style).unwrap();
    let frame = s.render().unwrap();
    assert_eq!(&frame.data[..4], &[255, 255, 255, 255]);
}

use super::*;

#[test]
fn manual_clock_moves_only_when_told() {
    let c = ManualClock::new();
    assert_eq!(c.now(), Duration::ZERO);
    c.advance(Duration::from_millis(16));
    c.advance(Duration::from_millis(16));
    assert_eq!(c.now(), Duration::from_millis(32));
    c.set(Duration::from_secs(5));
    assert_eq!(c.now(), Duration::from_secs(5));
}

#[test]
fn system_clock_is_monotonic() {
    let c = SystemClock::new();
    let a = c.now();
    let b = c.now();
    assert!(b >= a);
}

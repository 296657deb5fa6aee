use super::*;
use crate::animation::ease::Interpolation;
use crate::render::recording::RecordingSurface;
use crate::runtime::clock::ManualClock;
use crate::runtime::scheduler::{FrameQueue, FrameScheduler};

fn animated() -> CipherOptions {
    CipherOptions::default()
}

fn static_only() -> CipherOptions {
    CipherOptions {
        animations_enabled: false,
        ..CipherOptions::default()
    }
}

fn glyph(options: CipherOptions) -> Cipher<RecordingSurface> {
    Cipher::new(Some(RecordingSurface::square(400.0)), options)
}

/// Jump past the transition and deliver the pending frame.
fn finish(c: &mut Cipher<RecordingSurface>, q: &mut FrameQueue, clock: &ManualClock) {
    clock.advance(c.options().duration());
    for handle in q.take_due() {
        let mut ctx = FrameCtx::new(&mut *q, clock);
        c.on_frame(handle, &mut ctx);
    }
    assert!(!c.is_animating());
}

fn static_commands(word: &str) -> Vec<crate::render::recording::DrawCmd> {
    let mut s = RecordingSurface::square(400.0);
    RingLayout::centered(s.size(), 50.0, 20.0).draw_static(&mut s, word, true);
    s.commands().to_vec()
}

#[test]
fn adding_a_letter_is_incremental() {
    let plan = classify("a", "ab").unwrap();
    assert_eq!(plan.kind, TransitionKind::Incremental);
    assert_eq!(plan.base, "a");
    assert_eq!(plan.animated, "b");
    assert!(!plan.reverse);
}

#[test]
fn removing_a_letter_plays_backward() {
    let plan = classify("cab", "ca").unwrap();
    assert_eq!(plan.kind, TransitionKind::Incremental);
    assert_eq!(plan.base, "ca");
    assert_eq!(plan.animated, "b");
    assert!(plan.reverse);
}

#[test]
fn multi_letter_jumps_rebuild() {
    let plan = classify("a", "hello").unwrap();
    assert_eq!(plan.kind, TransitionKind::FullRebuild);
    assert_eq!(plan.base, "");
    assert_eq!(plan.animated, "hello");
    assert!(!plan.reverse);

    assert_eq!(classify("hello", "").unwrap().kind, TransitionKind::FullRebuild);
}

#[test]
fn unchanged_and_same_length_words() {
    assert_eq!(classify("abc", "abc"), None);
    assert_eq!(classify("", ""), None);

    let plan = classify("ab", "ac").unwrap();
    assert_eq!(plan.base, "ac");
    assert_eq!(plan.animated, "b");
    assert!(plan.reverse);
}

#[test]
fn disabled_animations_draw_immediately() {
    let mut q = FrameQueue::new();
    let clock = ManualClock::new();
    let mut c = glyph(static_only());

    c.update("ab", &mut FrameCtx::new(&mut q, &clock));
    assert!(!c.is_animating());
    assert!(q.is_empty());
    let surface = c.surface().unwrap();
    assert_eq!(surface.clear_count(), 1);
    assert_eq!(surface.commands(), static_commands("ab").as_slice());
}

#[test]
fn animation_runs_until_duration_then_settles_static() {
    let mut q = FrameQueue::new();
    let clock = ManualClock::new();
    let mut c = glyph(animated());

    c.update("a", &mut FrameCtx::new(&mut q, &clock));
    assert!(c.is_animating());
    assert_eq!(q.pending(), 1);
    // First frame at progress 0: nothing of the new glyph is visible yet.
    assert!(c.surface().unwrap().commands().is_empty());

    clock.advance(Duration::from_millis(500));
    let handle = q.take_due()[0];
    assert!(c.on_frame(handle, &mut FrameCtx::new(&mut q, &clock)));
    assert!(c.is_animating());
    assert!(!c.surface().unwrap().commands().is_empty());

    finish(&mut c, &mut q, &clock);
    assert!(q.is_empty());
    assert_eq!(
        c.surface().unwrap().commands(),
        static_commands("a").as_slice()
    );
}

#[test]
fn new_word_supersedes_running_transition() {
    let mut q = FrameQueue::new();
    let clock = ManualClock::new();
    let mut c = glyph(animated());

    c.update("a", &mut FrameCtx::new(&mut q, &clock));
    let stale = c.scheduled_frame().unwrap();

    clock.advance(Duration::from_millis(200));
    c.update("ab", &mut FrameCtx::new(&mut q, &clock));
    let current = c.scheduled_frame().unwrap();
    assert_ne!(stale, current);
    // The superseded frame was cancelled; only one is in flight.
    assert_eq!(q.take_due(), vec![current]);

    assert!(!c.on_frame(stale, &mut FrameCtx::new(&mut q, &clock)));
    assert!(q.is_empty());
    assert_eq!(c.transition().unwrap().base, "a");
    assert_eq!(c.prev_word(), "a");
}

#[test]
fn removal_starts_from_the_longer_glyph() {
    let mut q = FrameQueue::new();
    let clock = ManualClock::new();
    let mut c = glyph(animated());
    c.update("ab", &mut FrameCtx::new(&mut q, &clock));
    finish(&mut c, &mut q, &clock);

    c.update("a", &mut FrameCtx::new(&mut q, &clock));
    assert!(c.transition().unwrap().reverse);
    let s = c.surface().unwrap();
    // Same strokes as the static "ab" glyph: inner circle, two arcs, three connectors.
    assert_eq!(s.arcs().count(), 3);
    assert_eq!(s.lines().count(), 3);

    finish(&mut c, &mut q, &clock);
    assert_eq!(
        c.surface().unwrap().commands(),
        static_commands("a").as_slice()
    );
}

#[test]
fn words_are_normalized_before_comparison() {
    let mut q = FrameQueue::new();
    let clock = ManualClock::new();
    let mut c = glyph(static_only());
    c.update("Ab!", &mut FrameCtx::new(&mut q, &clock));
    assert_eq!(c.word(), "ab");

    let clears = c.surface().unwrap().clear_count();
    c.update("AB", &mut FrameCtx::new(&mut q, &clock));
    assert_eq!(c.surface().unwrap().clear_count(), clears);
}

#[test]
fn zero_duration_finishes_at_once() {
    let mut q = FrameQueue::new();
    let clock = ManualClock::new();
    let mut c = glyph(CipherOptions {
        animation_duration: 0.0,
        animation_type: Interpolation::EaseOutIn,
        ..CipherOptions::default()
    });
    c.update("xyz", &mut FrameCtx::new(&mut q, &clock));
    assert!(!c.is_animating());
    assert!(q.is_empty());
    assert_eq!(
        c.surface().unwrap().commands(),
        static_commands("xyz").as_slice()
    );
}

#[test]
fn missing_surface_tracks_word_without_frames() {
    let mut q = FrameQueue::new();
    let clock = ManualClock::new();
    let mut c: Cipher<RecordingSurface> = Cipher::new(None, animated());
    c.update("hello", &mut FrameCtx::new(&mut q, &clock));
    assert_eq!(c.word(), "hello");
    assert!(!c.is_animating());
    assert!(q.is_empty());
}

#[test]
fn teardown_cancels_the_pending_frame() {
    let mut q = FrameQueue::new();
    let clock = ManualClock::new();
    let mut c = glyph(animated());
    c.update("a", &mut FrameCtx::new(&mut q, &clock));
    assert_eq!(q.pending(), 1);

    let surface = c.teardown(&mut FrameCtx::new(&mut q, &clock));
    assert!(surface.is_some());
    assert!(q.is_empty());

    // Unrelated handles still flow.
    let h = q.request_frame();
    assert_eq!(q.take_due(), vec![h]);
}

#[test]
fn redraw_abandons_the_transition_and_draws_statically() {
    let mut q = FrameQueue::new();
    let clock = ManualClock::new();
    let mut c = glyph(animated());
    c.update("ab", &mut FrameCtx::new(&mut q, &clock));
    assert!(c.is_animating());
    assert_eq!(q.pending(), 1);

    c.redraw(&mut FrameCtx::new(&mut q, &clock));
    assert!(!c.is_animating());
    assert_eq!(c.scheduled_frame(), None);
    assert!(q.is_empty());
    assert_eq!(
        c.surface().unwrap().commands(),
        static_commands("ab").as_slice()
    );
}

#[test]
fn rebuilding_to_an_empty_word_clears_at_once() {
    let mut q = FrameQueue::new();
    let clock = ManualClock::new();
    let mut c = glyph(animated());
    c.update("hello", &mut FrameCtx::new(&mut q, &clock));
    finish(&mut c, &mut q, &clock);
    let clears = c.surface().unwrap().clear_count();

    c.update("", &mut FrameCtx::new(&mut q, &clock));
    assert_eq!(c.word(), "");
    assert!(!c.is_animating());
    assert!(q.is_empty());
    let s = c.surface().unwrap();
    assert_eq!(s.clear_count(), clears + 1);
    assert!(s.commands().is_empty());
}

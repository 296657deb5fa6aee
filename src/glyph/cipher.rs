//! One animated glyph.
//!
//! A [`Cipher`] is either idle (its word fully drawn) or transitioning: an [`AnimationGroup`]
//! built once when the word changed is replayed every frame against elapsed clock time until
//! the transition's duration has passed. A new word always supersedes the running transition;
//! the pending frame is cancelled before the next one is requested, so a glyph never has more
//! than one frame in flight.

use std::time::Duration;

use tracing::{debug, trace};

use crate::animation::ease::lerp;
use crate::animation::group::AnimationGroup;
use crate::glyph::layout::{GlyphPart, RingLayout, normalize_word};
use crate::glyph::options::CipherOptions;
use crate::render::surface::DrawSurface;
use crate::runtime::scheduler::{FrameCtx, FrameHandle};

/// How a word change is played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionKind {
    /// Two or more letters changed at once: clear and animate the whole word in.
    FullRebuild,
    /// One letter added or removed: keep the base and animate the single letter.
    Incremental,
}

/// Outcome of comparing an old word to a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPlan {
    /// Transition class.
    pub kind: TransitionKind,
    /// Prefix drawn statically under the animation.
    pub base: String,
    /// Letters grown (or shrunk) on top of `base`.
    pub animated: String,
    /// Play the animated letters backward (a removal).
    pub reverse: bool,
}

/// Decide how `old` turns into `new`; `None` when nothing changed.
///
/// An edit that keeps the length falls into the removal branch: the new word is the base and
/// the old word's last letter shrinks away.
pub fn classify(old: &str, new: &str) -> Option<TransitionPlan> {
    if old == new {
        return None;
    }

    let old_len = old.chars().count();
    let new_len = new.chars().count();

    if old_len.abs_diff(new_len) >= 2 {
        return Some(TransitionPlan {
            kind: TransitionKind::FullRebuild,
            base: String::new(),
            animated: new.to_owned(),
            reverse: false,
        });
    }

    let last = |w: &str| w.chars().last().map(String::from).unwrap_or_default();
    let plan = if new_len > old_len {
        TransitionPlan {
            kind: TransitionKind::Incremental,
            base: old.to_owned(),
            animated: last(new),
            reverse: false,
        }
    } else {
        TransitionPlan {
            kind: TransitionKind::Incremental,
            base: new.to_owned(),
            animated: last(old),
            reverse: true,
        }
    };
    Some(plan)
}

struct Transition {
    plan: TransitionPlan,
    started: Duration,
    group: AnimationGroup<GlyphPart>,
}

/// A word rendered as a ring glyph onto its own surface.
///
/// Without a surface the glyph still tracks its word but draws nothing and never requests
/// frames.
pub struct Cipher<S: DrawSurface + 'static> {
    word: String,
    prev_word: String,
    surface: Option<S>,
    options: CipherOptions,
    active: Option<Transition>,
    scheduled: Option<FrameHandle>,
}

impl<S: DrawSurface + 'static> Cipher<S> {
    /// Empty glyph drawing into `surface`.
    pub fn new(surface: Option<S>, options: CipherOptions) -> Self {
        Self {
            word: String::new(),
            prev_word: String::new(),
            surface,
            options,
            active: None,
            scheduled: None,
        }
    }

    /// Current (normalized) word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Word before the last change; empty after a full rebuild.
    pub fn prev_word(&self) -> &str {
        &self.prev_word
    }

    /// Options the glyph was built with.
    pub fn options(&self) -> &CipherOptions {
        &self.options
    }

    /// Drawing surface, if any.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Mutable drawing surface, if any.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Return `true` while a transition is running.
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Plan of the running transition.
    pub fn transition(&self) -> Option<&TransitionPlan> {
        self.active.as_ref().map(|t| &t.plan)
    }

    /// Frame this glyph is waiting for.
    pub fn scheduled_frame(&self) -> Option<FrameHandle> {
        self.scheduled
    }

    /// Show `new_word`, animating the change when enabled.
    pub fn update(&mut self, new_word: &str, ctx: &mut FrameCtx<'_>) {
        let new_word = normalize_word(new_word);
        let Some(plan) = classify(&self.word, &new_word) else {
            return;
        };
        debug!(
            from = %self.word,
            to = %new_word,
            kind = ?plan.kind,
            base = %plan.base,
            animated = %plan.animated,
            reverse = plan.reverse,
            "glyph transition"
        );

        self.prev_word = match plan.kind {
            TransitionKind::FullRebuild => String::new(),
            TransitionKind::Incremental => std::mem::take(&mut self.word),
        };
        self.word = new_word;

        let Some(surface) = self.surface.as_ref() else {
            self.cancel_scheduled(ctx);
            self.active = None;
            trace!(word = %self.word, "no surface; skipping draw");
            return;
        };

        // An empty animated word has nothing to play.
        if !self.options.animations_enabled
            || self.options.duration().is_zero()
            || plan.animated.is_empty()
        {
            self.redraw(ctx);
            return;
        }

        let layout = layout_for(surface, &self.options);
        let group = AnimationGroup::new(
            layout.animated_parts(&plan.base, &plan.animated),
            self.options.animation_type,
        );
        self.cancel_scheduled(ctx);
        self.active = Some(Transition {
            plan,
            started: ctx.clock.now(),
            group,
        });
        self.step(ctx);
    }

    /// Run the frame identified by `handle`. Returns `false` for a stale handle.
    pub fn on_frame(&mut self, handle: FrameHandle, ctx: &mut FrameCtx<'_>) -> bool {
        if self.scheduled != Some(handle) {
            return false;
        }
        self.scheduled = None;
        self.step(ctx);
        true
    }

    /// Clear and draw the current word statically, abandoning any transition.
    pub fn redraw(&mut self, ctx: &mut FrameCtx<'_>) {
        self.cancel_scheduled(ctx);
        self.active = None;
        if let Some(surface) = self.surface.as_mut() {
            surface.clear();
            layout_for(surface, &self.options).draw_static(surface, &self.word, true);
        }
    }

    /// Stop animating and hand back the surface.
    pub fn teardown(mut self, ctx: &mut FrameCtx<'_>) -> Option<S> {
        self.cancel_scheduled(ctx);
        self.surface.take()
    }

    fn cancel_scheduled(&mut self, ctx: &mut FrameCtx<'_>) {
        if let Some(handle) = self.scheduled.take() {
            ctx.scheduler.cancel_frame(handle);
        }
    }

    fn step(&mut self, ctx: &mut FrameCtx<'_>) {
        let Some(active) = self.active.as_ref() else {
            return;
        };
        let Some(surface) = self.surface.as_mut() else {
            self.active = None;
            return;
        };
        let layout = layout_for(surface, &self.options);

        let duration = self.options.duration();
        let elapsed = ctx.clock.now().saturating_sub(active.started);
        let fraction = if duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f64() / duration.as_secs_f64()
        };

        surface.clear();
        if fraction >= 1.0 {
            layout.draw_static(surface, &self.word, true);
            self.active = None;
            trace!(word = %self.word, "transition complete");
            return;
        }

        layout.draw_static(surface, &active.plan.base, false);
        let progress = lerp(0.0, 1.0, fraction);
        let progress = if active.plan.reverse { 1.0 - progress } else { progress };
        trace!(fraction, progress, "transition frame");
        active.group.update(progress, surface);

        self.scheduled = Some(ctx.scheduler.request_frame());
    }
}

fn layout_for<S: DrawSurface + ?Sized>(surface: &S, options: &CipherOptions) -> RingLayout {
    RingLayout::centered(surface.size(), options.radius, options.gap)
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/cipher.rs"]
mod tests;

//! Deterministic host loop for a [`CipherStream`].
//!
//! The player owns the frame queue and a manual clock, so playback advances only when told
//! to. Tests and the CLI use it to step through transitions frame by frame.

use std::time::Duration;

use tracing::trace;

use crate::foundation::error::{GlyphError, GlyphResult};
use crate::glyph::options::{StreamOptions, StreamOptionsUpdate};
use crate::glyph::stream::CipherStream;
use crate::render::surface::SurfaceFactory;
use crate::runtime::clock::{Clock, ManualClock};
use crate::runtime::scheduler::{FrameCtx, FrameQueue};

/// Upper bound on frames run by [`Player::run_until_idle`] before giving up.
const MAX_FRAMES: usize = 1_000_000;

/// Drives a stream with its own frame queue and clock.
pub struct Player<F: SurfaceFactory> {
    stream: CipherStream<F>,
    queue: FrameQueue,
    clock: ManualClock,
}

impl<F: SurfaceFactory> Player<F> {
    /// Player over an empty stream.
    pub fn new(factory: F, options: StreamOptions) -> Self {
        Self {
            stream: CipherStream::new(factory, options),
            queue: FrameQueue::new(),
            clock: ManualClock::new(),
        }
    }

    /// The driven stream.
    pub fn stream(&self) -> &CipherStream<F> {
        &self.stream
    }

    /// The driven stream, for reading back surfaces.
    pub fn stream_mut(&mut self) -> &mut CipherStream<F> {
        &mut self.stream
    }

    /// Current clock reading.
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Show `text`, one glyph per space-separated word.
    ///
    /// Splits on single spaces and keeps empty words, so `"a  b"` has three glyphs.
    pub fn set_text(&mut self, text: &str) {
        let words: Vec<&str> = text.split(' ').collect();
        let mut ctx = FrameCtx::new(&mut self.queue, &self.clock);
        self.stream.update(&words, &mut ctx);
    }

    /// Merge options into the stream (rebuilds every glyph).
    pub fn set_options(&mut self, update: &StreamOptionsUpdate) {
        let mut ctx = FrameCtx::new(&mut self.queue, &self.clock);
        self.stream.update_options(update, &mut ctx);
    }

    /// Move the clock by `dt` and run every frame that was due. Returns how many ran.
    pub fn advance(&mut self, dt: Duration) -> usize {
        self.clock.advance(dt);
        let due = self.queue.take_due();
        let mut ran = 0;
        for handle in due {
            let mut ctx = FrameCtx::new(&mut self.queue, &self.clock);
            if self.stream.on_frame(handle, &mut ctx) {
                ran += 1;
            }
        }
        trace!(now = ?self.clock.now(), ran, "frame tick");
        ran
    }

    /// Return `true` when no frame is pending.
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Tick every `frame_dt` until no frame is pending, calling `on_frame` after each tick.
    ///
    /// Returns the number of ticks.
    pub fn run_until_idle(
        &mut self,
        frame_dt: Duration,
        mut on_frame: impl FnMut(&mut CipherStream<F>) -> GlyphResult<()>,
    ) -> GlyphResult<usize> {
        if frame_dt.is_zero() {
            return Err(GlyphError::validation("frame interval must be > 0"));
        }
        let mut ticks = 0;
        while !self.is_idle() {
            if ticks == MAX_FRAMES {
                return Err(GlyphError::render(format!(
                    "playback did not settle after {MAX_FRAMES} frames"
                )));
            }
            self.advance(frame_dt);
            on_frame(&mut self.stream)?;
            ticks += 1;
        }
        Ok(ticks)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/player.rs"]
mod tests;

use crate::runtime::clock::Clock;

/// Token for one requested animation frame.
///
/// Handles are never reused, so a stale handle can always be told apart from the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameHandle(pub u64);

/// Schedules "run me on the next frame" callbacks.
///
/// The callback itself is not stored here: whoever owns the handle (a [`crate::Cipher`]) is
/// invoked with it by the loop driving the scheduler.
pub trait FrameScheduler {
    /// Request one frame; the returned handle is delivered on the next tick.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a pending frame. Cancelling an unknown or delivered handle is a no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Everything a glyph needs from its host loop.
pub struct FrameCtx<'a> {
    /// Frame scheduler.
    pub scheduler: &'a mut dyn FrameScheduler,
    /// Time source.
    pub clock: &'a dyn Clock,
}

impl<'a> FrameCtx<'a> {
    /// Bundle a scheduler and a clock.
    pub fn new(scheduler: &'a mut dyn FrameScheduler, clock: &'a dyn Clock) -> Self {
        Self { scheduler, clock }
    }
}

/// In-process scheduler: requested handles are collected and handed out by [`FrameQueue::take_due`].
#[derive(Debug, Default)]
pub struct FrameQueue {
    next: u64,
    pending: Vec<FrameHandle>,
}

impl FrameQueue {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles requested and not cancelled since the last call, in request order.
    pub fn take_due(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending)
    }

    /// Number of pending frames.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Return `true` when no frame is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        self.next += 1;
        let h = FrameHandle(self.next);
        self.pending.push(h);
        h
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|&h| h != handle);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/scheduler.rs"]
mod tests;

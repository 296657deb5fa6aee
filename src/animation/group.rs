use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::animation::ease::Interpolation;

/// Normalized progress in `[0, 1]`.
pub type Progress = f64;

/// One independently drawable unit of a composed animation.
///
/// `update` must be a pure function of `progress` and the geometry captured at construction:
/// calling it twice with the same value draws the same thing, regardless of earlier calls.
pub trait AnimationPart {
    /// What the part draws into (usually `dyn DrawSurface`).
    type Target: ?Sized;

    /// Physical length of the part. Only used to allot its share of the timeline.
    fn weight(&self) -> f64;

    /// Draw the part at local `progress`.
    fn update(&self, progress: Progress, target: &mut Self::Target);
}

impl<P: AnimationPart + ?Sized> AnimationPart for Box<P> {
    type Target = P::Target;

    fn weight(&self) -> f64 {
        (**self).weight()
    }

    fn update(&self, progress: Progress, target: &mut Self::Target) {
        (**self).update(progress, target);
    }
}

/// Closure-backed [`AnimationPart`]; see [`part`].
pub struct FnPart<T: ?Sized, F> {
    weight: f64,
    f: F,
    _target: PhantomData<fn(&mut T)>,
}

/// Wrap a closure as an [`AnimationPart`] of the given weight.
pub fn part<T, F>(weight: f64, f: F) -> FnPart<T, F>
where
    T: ?Sized,
    F: Fn(Progress, &mut T),
{
    FnPart {
        weight,
        f,
        _target: PhantomData,
    }
}

impl<T: ?Sized, F: Fn(Progress, &mut T)> AnimationPart for FnPart<T, F> {
    type Target = T;

    fn weight(&self) -> f64 {
        self.weight
    }

    fn update(&self, progress: Progress, target: &mut T) {
        (self.f)(progress, target);
    }
}

/// Closed progress interval `[start, end]` during which a part is active.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    /// Group progress at which the part starts drawing.
    pub start: Progress,
    /// Group progress at which the part is fully drawn.
    pub end: Progress,
}

impl Span {
    /// Return `true` when `progress` lies inside `[start, end]`.
    pub fn contains(self, progress: Progress) -> bool {
        self.start <= progress && progress <= self.end
    }

    /// Zero-length span (zero-weight part).
    pub fn is_degenerate(self) -> bool {
        self.end <= self.start
    }

    /// Remap group progress into this span. Degenerate spans count as complete.
    pub fn local(self, progress: Progress) -> Progress {
        if self.is_degenerate() {
            return 1.0;
        }
        ((progress - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }

    fn cmp_progress(self, progress: Progress) -> Ordering {
        // Containment first: spans, not scalar keys, are being searched.
        if self.contains(progress) {
            Ordering::Equal
        } else if self.start < progress {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

struct Scheduled<P> {
    part: P,
    span: Span,
}

/// Plays an ordered list of weighted parts as one seamless animation.
///
/// Each part owns a slice of the group timeline proportional to its weight. The cumulative
/// weight fraction is passed through the chosen [`Interpolation`], so easing shapes the group as
/// a whole rather than each part separately.
///
/// The group is immutable after construction and stateless with respect to time: any progress
/// value (forward, backward, repeated) produces the frame for exactly that progress.
pub struct AnimationGroup<P> {
    parts: Vec<Scheduled<P>>,
}

impl<P: AnimationPart> AnimationGroup<P> {
    /// Partition `[0, 1]` among `parts` by weight.
    ///
    /// Negative or non-finite weights count as zero. If every weight is zero the parts share the
    /// timeline equally.
    pub fn new(parts: impl IntoIterator<Item = P>, interpolation: Interpolation) -> Self {
        let parts: Vec<P> = parts.into_iter().collect();
        let weights: Vec<f64> = parts.iter().map(|p| sanitize_weight(p.weight())).collect();
        let mut total: f64 = weights.iter().sum();
        let equal_shares = total <= 0.0;
        if equal_shares {
            total = parts.len() as f64;
        }

        let interp = interpolation.as_fn();
        let mut cumulative = 0.0;
        let mut start = interp(0.0, 1.0, 0.0);
        let parts = parts
            .into_iter()
            .zip(weights)
            .map(|(part, weight)| {
                cumulative += if equal_shares { 1.0 } else { weight };
                let end = interp(0.0, 1.0, cumulative / total);
                let span = Span { start, end };
                start = end;
                Scheduled { part, span }
            })
            .collect();

        Self { parts }
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Return `true` when the group has no parts; updates are then no-ops.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Computed spans, in part order.
    pub fn spans(&self) -> impl ExactSizeIterator<Item = Span> + '_ {
        self.parts.iter().map(|s| s.span)
    }

    /// Index of the part whose span contains `progress` (clamped to `[0, 1]`).
    ///
    /// `None` for an empty group or a NaN progress.
    pub fn active_index(&self, progress: Progress) -> Option<usize> {
        if self.parts.is_empty() || progress.is_nan() {
            return None;
        }
        let progress = progress.clamp(0.0, 1.0);
        self.parts
            .binary_search_by(|s| s.span.cmp_progress(progress))
            .ok()
    }

    /// Draw the frame for group `progress`.
    ///
    /// Parts before the active one are drawn complete, the active one at its local progress,
    /// and the rest at zero.
    pub fn update(&self, progress: Progress, target: &mut P::Target) {
        if self.parts.is_empty() {
            return;
        }

        let Some(index) = self.active_index(progress) else {
            tracing::warn!(progress, parts = self.parts.len(), "progress outside group partition");
            debug_assert!(
                progress.is_nan(),
                "progress {progress} fell outside the group partition"
            );
            return;
        };
        let progress = progress.clamp(0.0, 1.0);

        for s in &self.parts[..index] {
            s.part.update(1.0, target);
        }

        let active = &self.parts[index];
        active.part.update(active.span.local(progress), target);

        for s in &self.parts[index + 1..] {
            s.part.update(0.0, target);
        }
    }
}

fn sanitize_weight(w: f64) -> f64 {
    if w.is_finite() && w > 0.0 { w } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/group.rs"]
mod tests;

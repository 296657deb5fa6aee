//! Ring geometry: how letters become arcs and connectors.
//!
//! Each letter sweeps `n * 360 / 26` degrees (`a = 1 .. z = 26`). Sweeps are laid end to end from
//! twelve o'clock, the `i`-th letter on ring `radius + gap * i`. A radial connector joins
//! consecutive rings at each arc boundary, and the last ring's free end connects back to the
//! first earlier ring that closes a full turn.

use crate::animation::ease::lerp;
use crate::animation::group::{AnimationPart, Progress};
use crate::foundation::core::{Angle, Point, Size, arc_length, point_on_circle};
use crate::render::surface::DrawSurface;

const ALPHABET_LEN: u32 = 26;

/// Lower-case `word` and drop everything outside `a..=z`.
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// 1-based alphabet position of an ASCII letter (`'a' = 1`, `'z' = 26`).
///
/// Anything else maps to 0 (no sweep).
pub fn char_number(c: char) -> u32 {
    let c = c.to_ascii_lowercase();
    if c.is_ascii_lowercase() {
        u32::from(c) - u32::from('a') + 1
    } else {
        0
    }
}

/// Angular sweep of one letter.
pub fn letter_sweep(c: char) -> Angle {
    Angle::from_degrees((f64::from(char_number(c)) * 360.0) / f64::from(ALPHABET_LEN))
}

/// Sweeps of every letter in `word`, in order.
pub fn word_sweeps(word: &str) -> Vec<Angle> {
    word.chars().map(letter_sweep).collect()
}

/// A word starting with `z` is already a closed circle and gets no inner circle.
pub fn has_inner_circle(word: &str) -> bool {
    word.chars().next().is_some_and(|c| char_number(c) != ALPHABET_LEN)
}

/// Ring placement for one glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingLayout {
    /// Glyph center.
    pub center: Point,
    /// Radius of the first letter ring.
    pub radius: f64,
    /// Distance between rings.
    pub gap: f64,
}

impl RingLayout {
    /// Layout centered on a surface of `size`.
    pub fn centered(size: Size, radius: f64, gap: f64) -> Self {
        Self {
            center: Point::new(size.width / 2.0, size.height / 2.0),
            radius,
            gap,
        }
    }

    /// Radius of ring `index` (0-based letter position).
    pub fn ring_radius(&self, index: usize) -> f64 {
        self.radius + self.gap * index as f64
    }

    /// Radius of the inner completion circle.
    pub fn inner_radius(&self) -> f64 {
        self.radius - self.gap
    }

    /// Where the last ring's free end connects to.
    ///
    /// Scans backward from the last letter, accumulating sweeps; the first letter at which the
    /// total reaches a full turn names the ring. With no such letter the end connects to the
    /// inner circle.
    pub fn closing_radius(&self, word: &str) -> f64 {
        let mut total = 0.0;
        for (i, sweep) in word_sweeps(word).iter().enumerate().rev() {
            total += sweep.degrees();
            if total >= 360.0 {
                return self.ring_radius(i);
            }
        }
        self.inner_radius()
    }

    /// Angle at which the last letter of `word` ends.
    pub fn end_angle(&self, word: &str) -> Angle {
        word_sweeps(word)
            .into_iter()
            .fold(Angle::TWELVE_O_CLOCK, |acc, s| acc + s)
    }

    fn connector(&self, angle: Angle, from_radius: f64, to_radius: f64, reverse: bool) -> GlyphPart {
        GlyphPart::Line {
            from: point_on_circle(self.center, angle, from_radius),
            to: point_on_circle(self.center, angle, to_radius),
            reverse,
        }
    }

    fn ring_arc(&self, radius: f64, start: Angle, end: Angle) -> GlyphPart {
        GlyphPart::Arc {
            center: self.center,
            radius,
            start,
            end,
            reverse: false,
        }
    }

    /// Every stroke of the static glyph for `word`, in drawing order.
    ///
    /// `connect_last` adds the closing connector; the animated path leaves it out of the base
    /// because the animation owns it.
    pub fn static_parts(&self, word: &str, connect_last: bool) -> Vec<GlyphPart> {
        let sweeps = word_sweeps(word);
        let mut parts = Vec::with_capacity(sweeps.len() * 2 + 2);
        if sweeps.is_empty() {
            return parts;
        }

        let mut angle = Angle::TWELVE_O_CLOCK;
        if has_inner_circle(word) {
            parts.push(self.ring_arc(self.inner_radius(), Angle::ZERO, Angle::FULL_TURN));
            parts.push(self.connector(angle, self.inner_radius(), self.radius, false));
        }

        for (i, &sweep) in sweeps.iter().enumerate() {
            let ring = self.ring_radius(i);
            let end = angle + sweep;
            parts.push(self.ring_arc(ring, angle, end));
            angle = end;
            if i + 1 < sweeps.len() {
                parts.push(self.connector(angle, ring, ring + self.gap, false));
            }
        }

        if connect_last {
            let last = self.ring_radius(sweeps.len() - 1);
            parts.push(self.connector(angle, last, self.closing_radius(word), false));
        }
        parts
    }

    /// Draw `word` statically; returns the angle where its last letter ends.
    pub fn draw_static(&self, surface: &mut dyn DrawSurface, word: &str, connect_last: bool) -> Angle {
        for part in self.static_parts(word, connect_last) {
            part.draw(1.0, surface);
        }
        self.end_angle(word)
    }

    /// Parts that grow `word` out of an already drawn `base`.
    ///
    /// Played forward they take the glyph from `base` (without its closing connector) to
    /// `base + word`; played backward they shrink it back.
    pub fn animated_parts(&self, base: &str, word: &str) -> Vec<GlyphPart> {
        let sweeps = word_sweeps(word);
        let mut parts = Vec::with_capacity(sweeps.len() * 2 + 4);
        if sweeps.is_empty() {
            return parts;
        }

        let mut angle = self.end_angle(base);
        if base.is_empty() && has_inner_circle(word) {
            parts.push(self.ring_arc(self.inner_radius(), Angle::ZERO, Angle::FULL_TURN));
            parts.push(self.connector(angle, self.inner_radius(), self.radius, false));
        }

        let offset = base.chars().count();
        if offset > 0 {
            let last = self.ring_radius(offset - 1);
            // Retract the base's closing connector, then reach out to the new ring.
            parts.push(self.connector(angle, last, self.closing_radius(base), true));
            parts.push(self.connector(angle, last, last + self.gap, false));
        }

        for (i, &sweep) in sweeps.iter().enumerate() {
            let ring = self.ring_radius(offset + i);
            let end = angle + sweep;
            parts.push(self.ring_arc(ring, angle, end));
            angle = end;
            if i + 1 < sweeps.len() {
                parts.push(self.connector(angle, ring, ring + self.gap, false));
            }
        }

        let full = format!("{base}{word}");
        let last = self.ring_radius(offset + sweeps.len() - 1);
        parts.push(self.connector(angle, last, self.closing_radius(&full), false));
        parts
    }
}

/// One stroke of a glyph: a ring arc or a straight connector.
///
/// As an [`AnimationPart`] it grows from its start toward its end with local progress, or
/// retracts when `reverse` is set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GlyphPart {
    /// Clockwise arc.
    Arc {
        /// Ring center.
        center: Point,
        /// Ring radius.
        radius: f64,
        /// Start angle.
        start: Angle,
        /// End angle.
        end: Angle,
        /// Retract instead of grow.
        reverse: bool,
    },
    /// Straight connector.
    Line {
        /// Anchored end.
        from: Point,
        /// Growing end.
        to: Point,
        /// Retract instead of grow.
        reverse: bool,
    },
}

impl GlyphPart {
    /// Stroke the part at local `progress`. Nothing is drawn while it has zero extent.
    pub fn draw(&self, progress: Progress, surface: &mut dyn DrawSurface) {
        let reverse = match *self {
            Self::Arc { reverse, .. } | Self::Line { reverse, .. } => reverse,
        };
        let t = if reverse { 1.0 - progress } else { progress };
        if t <= 0.0 {
            return;
        }

        match *self {
            Self::Arc {
                center,
                radius,
                start,
                end,
                ..
            } => {
                let tip = Angle::from_degrees(lerp(start.degrees(), end.degrees(), t));
                surface.stroke_arc(center, radius, start, tip, false);
            }
            Self::Line { from, to, .. } => {
                let tip = Point::new(lerp(from.x, to.x, t), lerp(from.y, to.y, t));
                surface.stroke_line(from, tip);
            }
        }
    }
}

impl AnimationPart for GlyphPart {
    type Target = dyn DrawSurface;

    fn weight(&self) -> f64 {
        match *self {
            Self::Arc {
                radius, start, end, ..
            } => arc_length(radius, end - start).abs(),
            Self::Line { from, to, .. } => from.distance(to),
        }
    }

    fn update(&self, progress: Progress, surface: &mut Self::Target) {
        self.draw(progress, surface);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/layout.rs"]
mod tests;

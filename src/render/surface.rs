use std::f64::consts::TAU;

use crate::foundation::core::{Angle, Point, Rgba8, Size};
use crate::foundation::error::GlyphResult;

/// Stroke-only drawing surface a glyph renders into.
///
/// The four operations mirror a 2D canvas: clear, arc, line, and the surface size (the glyph
/// centers itself on it). Pixel format, color and stroke width are surface configuration.
pub trait DrawSurface {
    /// Surface dimensions in pixels.
    fn size(&self) -> Size;

    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Stroke a circular arc from `start` to `end`.
    ///
    /// Follows canvas `arc()` semantics: the sweep runs clockwise unless `anticlockwise` is set,
    /// and a difference of a full turn or more draws the whole circle.
    fn stroke_arc(&mut self, center: Point, radius: f64, start: Angle, end: Angle, anticlockwise: bool);

    /// Stroke a straight segment.
    fn stroke_line(&mut self, from: Point, to: Point);
}

impl<S: DrawSurface + ?Sized> DrawSurface for Box<S> {
    fn size(&self) -> Size {
        (**self).size()
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn stroke_arc(&mut self, center: Point, radius: f64, start: Angle, end: Angle, anticlockwise: bool) {
        (**self).stroke_arc(center, radius, start, end, anticlockwise);
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        (**self).stroke_line(from, to);
    }
}

/// Creates and tears down the per-glyph surfaces of a stream (its "containers").
pub trait SurfaceFactory {
    /// Surface type handed to each glyph.
    type Surface: DrawSurface + 'static;

    /// Create a fresh square surface of `canvas_size` pixels.
    fn create(&mut self, canvas_size: u32) -> GlyphResult<Self::Surface>;

    /// Release a surface whose glyph was removed.
    fn destroy(&mut self, surface: Self::Surface) {
        drop(surface);
    }
}

/// Static stroke configuration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StrokeStyle {
    /// Stroke color.
    pub color: Rgba8,
    /// Stroke width in pixels.
    pub width: f64,
    /// Fill applied on clear; `None` leaves the surface transparent.
    pub background: Option<Rgba8>,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Rgba8::BLACK,
            width: 3.0,
            background: None,
        }
    }
}

/// Signed sweep (radians) that a canvas `arc(start, end, anticlockwise)` call draws.
pub fn canvas_sweep(start: Angle, end: Angle, anticlockwise: bool) -> f64 {
    let d = end.radians() - start.radians();
    if anticlockwise {
        if -d >= TAU { -TAU } else { -((-d).rem_euclid(TAU)) }
    } else if d >= TAU {
        TAU
    } else {
        d.rem_euclid(TAU)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;

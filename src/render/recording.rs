use crate::foundation::core::{Angle, Point, Size};
use crate::foundation::error::{GlyphError, GlyphResult};
use crate::render::surface::{DrawSurface, SurfaceFactory};

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCmd {
    /// `stroke_arc` call.
    Arc {
        /// Arc center.
        center: Point,
        /// Arc radius.
        radius: f64,
        /// Start angle.
        start: Angle,
        /// End angle.
        end: Angle,
        /// Sweep direction flag.
        anticlockwise: bool,
    },
    /// `stroke_line` call.
    Line {
        /// Segment start.
        from: Point,
        /// Segment end.
        to: Point,
    },
}

/// Surface that records calls instead of rasterizing them.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    commands: Vec<DrawCmd>,
    clears: usize,
}

impl RecordingSurface {
    /// Empty recording surface of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
            clears: 0,
        }
    }

    /// Square surface of `side` pixels.
    pub fn square(side: f64) -> Self {
        Self::new(Size::new(side, side))
    }

    /// Calls recorded since the last clear.
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    /// Number of `clear` calls so far.
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Recorded arcs as `(radius, start, end)` tuples.
    pub fn arcs(&self) -> impl Iterator<Item = (f64, Angle, Angle)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCmd::Arc {
                radius, start, end, ..
            } => Some((radius, start, end)),
            DrawCmd::Line { .. } => None,
        })
    }

    /// Recorded lines as `(from, to)` tuples.
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCmd::Line { from, to } => Some((from, to)),
            DrawCmd::Arc { .. } => None,
        })
    }

    /// Serialize the current commands as pretty JSON.
    pub fn to_json(&self) -> GlyphResult<String> {
        serde_json::to_string_pretty(&self.commands)
            .map_err(|e| GlyphError::serde(format!("encode draw commands: {e}")))
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn stroke_arc(&mut self, center: Point, radius: f64, start: Angle, end: Angle, anticlockwise: bool) {
        self.commands.push(DrawCmd::Arc {
            center,
            radius,
            start,
            end,
            anticlockwise,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        self.commands.push(DrawCmd::Line { from, to });
    }
}

/// Factory handing out [`RecordingSurface`]s and counting their lifecycle.
#[derive(Debug, Default)]
pub struct RecordingFactory {
    created: usize,
    destroyed: usize,
    refuse: bool,
}

impl RecordingFactory {
    /// New factory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `create` fail (exercises the no-surface degraded mode).
    pub fn refuse_surfaces(&mut self, refuse: bool) {
        self.refuse = refuse;
    }

    /// Surfaces created so far.
    pub fn created(&self) -> usize {
        self.created
    }

    /// Surfaces destroyed so far.
    pub fn destroyed(&self) -> usize {
        self.destroyed
    }
}

impl SurfaceFactory for RecordingFactory {
    type Surface = RecordingSurface;

    fn create(&mut self, canvas_size: u32) -> GlyphResult<RecordingSurface> {
        if self.refuse {
            return Err(GlyphError::surface("recording factory is refusing surfaces"));
        }
        self.created += 1;
        Ok(RecordingSurface::square(f64::from(canvas_size)))
    }

    fn destroy(&mut self, surface: RecordingSurface) {
        self.destroyed += 1;
        drop(surface);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/recording.rs"]
mod tests;

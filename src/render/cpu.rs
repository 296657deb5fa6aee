use kurbo::Shape;

use crate::foundation::core::{Angle, BezPath, Point, Size, Vec2};
use crate::foundation::error::{GlyphError, GlyphResult};
use crate::render::frame::FrameRGBA;
use crate::render::surface::{DrawSurface, StrokeStyle, SurfaceFactory, canvas_sweep};

const ARC_TOLERANCE: f64 = 0.05;

/// Raster surface backed by `vello_cpu`.
///
/// Strokes accumulate as paths until the next `clear`; [`CpuSurface::render`] rasterizes them.
pub struct CpuSurface {
    width: u16,
    height: u16,
    style: StrokeStyle,
    paths: Vec<BezPath>,
}

impl CpuSurface {
    /// Create a surface of `width x height` pixels.
    pub fn new(width: u32, height: u32, style: StrokeStyle) -> GlyphResult<Self> {
        let w: u16 = width
            .try_into()
            .map_err(|_| GlyphError::surface(format!("surface width {width} exceeds u16")))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| GlyphError::surface(format!("surface height {height} exceeds u16")))?;
        if w == 0 || h == 0 {
            return Err(GlyphError::surface("surface dimensions must be non-zero"));
        }
        Ok(Self {
            width: w,
            height: h,
            style,
            paths: Vec::new(),
        })
    }

    /// Number of stroked paths since the last clear.
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Rasterize the current strokes.
    pub fn render(&self) -> GlyphResult<FrameRGBA> {
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);

        if let Some(bg) = self.style.background {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(self.width),
                f64::from(self.height),
            ));
        }

        let c = self.style.color;
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
        ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(self.style.width).with_caps(vello_cpu::kurbo::Cap::Butt),
        );
        for path in &self.paths {
            ctx.stroke_path(&bezpath_to_cpu(path));
        }
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

impl DrawSurface for CpuSurface {
    fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    fn clear(&mut self) {
        self.paths.clear();
    }

    fn stroke_arc(&mut self, center: Point, radius: f64, start: Angle, end: Angle, anticlockwise: bool) {
        let sweep = canvas_sweep(start, end, anticlockwise);
        if sweep == 0.0 || radius <= 0.0 {
            return;
        }
        let arc = kurbo::Arc::new(center, Vec2::new(radius, radius), start.radians(), sweep, 0.0);
        self.paths.push(arc.to_path(ARC_TOLERANCE));
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        let mut path = BezPath::new();
        path.move_to(from);
        path.line_to(to);
        self.paths.push(path);
    }
}

/// Factory producing square [`CpuSurface`]s that share one stroke style.
#[derive(Clone, Debug, Default)]
pub struct CpuFactory {
    style: StrokeStyle,
}

impl CpuFactory {
    /// Factory with the given stroke style.
    pub fn new(style: StrokeStyle) -> Self {
        Self { style }
    }

    /// Style applied to every created surface.
    pub fn style(&self) -> StrokeStyle {
        self.style
    }
}

impl SurfaceFactory for CpuFactory {
    type Surface = CpuSurface;

    fn create(&mut self, canvas_size: u32) -> GlyphResult<CpuSurface> {
        CpuSurface::new(canvas_size, canvas_size, self.style)
    }
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;

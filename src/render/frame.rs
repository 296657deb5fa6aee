use crate::foundation::core::Rgba8;
use crate::foundation::error::{GlyphError, GlyphResult};

/// A rendered frame as RGBA8 pixels.
///
/// Frames coming out of [`crate::CpuSurface`] are **premultiplied alpha**; the `premultiplied`
/// flag makes that explicit at API boundaries.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Frame filled with a single color.
    pub fn solid(width: u32, height: u32, color: Rgba8) -> Self {
        let px = color.premultiplied();
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..(width as usize * height as usize) {
            data.extend_from_slice(&px);
        }
        Self {
            width,
            height,
            data,
            premultiplied: true,
        }
    }

    /// Straight-alpha copy of the pixels, as PNG encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = (((u16::from(*c) * 255) + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    /// Return `true` when any pixel differs from `background` (premultiplied comparison).
    pub fn has_ink(&self, background: Rgba8) -> bool {
        let bg = background.premultiplied();
        self.data.chunks_exact(4).any(|px| px != bg)
    }
}

/// Lay frames out left to right, top-aligned, separated by `gap` pixels of `background`.
///
/// This is the stream's container row: one glyph surface per word.
pub fn compose_row(frames: &[FrameRGBA], gap: u32, background: Rgba8) -> GlyphResult<FrameRGBA> {
    if frames.is_empty() {
        return Err(GlyphError::render("cannot compose an empty row"));
    }
    if frames.iter().any(|f| !f.premultiplied) {
        return Err(GlyphError::render("compose_row expects premultiplied frames"));
    }

    let width = frames.iter().map(|f| f.width).sum::<u32>() + gap * (frames.len() as u32 - 1);
    let height = frames.iter().map(|f| f.height).max().unwrap_or(0);
    let mut out = FrameRGBA::solid(width, height, background);

    let row_bytes = width as usize * 4;
    let mut x0 = 0usize;
    for f in frames {
        let expected = f.width as usize * f.height as usize * 4;
        if f.data.len() != expected {
            return Err(GlyphError::render("frame buffer size mismatch"));
        }
        let src_row = f.width as usize * 4;
        for y in 0..f.height as usize {
            let src = &f.data[y * src_row..(y + 1) * src_row];
            let dst_start = y * row_bytes + x0 * 4;
            out.data[dst_start..dst_start + src_row].copy_from_slice(src);
        }
        x0 += f.width as usize + gap as usize;
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;

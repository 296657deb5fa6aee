use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use crate::animation::ease::Interpolation;
use crate::foundation::error::{GlyphError, GlyphResult};

/// Per-glyph options.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CipherOptions {
    /// Animate transitions; when off every change redraws statically.
    pub animations_enabled: bool,
    /// Radius of the first letter ring.
    pub radius: f64,
    /// Distance between consecutive rings.
    pub gap: f64,
    /// Time warp applied across a whole transition.
    pub animation_type: Interpolation,
    /// Transition length in milliseconds.
    pub animation_duration: f64,
}

impl Default for CipherOptions {
    fn default() -> Self {
        Self {
            animations_enabled: true,
            radius: 50.0,
            gap: 20.0,
            animation_type: Interpolation::Linear,
            animation_duration: 1000.0,
        }
    }
}

impl CipherOptions {
    /// Transition length; negative or non-finite values count as zero.
    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.animation_duration / 1000.0).unwrap_or(Duration::ZERO)
    }

    /// Reject values no glyph can be drawn with.
    pub fn validate(&self) -> GlyphResult<()> {
        if !self.radius.is_finite() || !self.gap.is_finite() {
            return Err(GlyphError::validation("radius and gap must be finite"));
        }
        if !self.animation_duration.is_finite() || self.animation_duration < 0.0 {
            return Err(GlyphError::validation(
                "animationDuration must be a non-negative number of milliseconds",
            ));
        }
        Ok(())
    }
}

/// Partial [`CipherOptions`]; `None` keeps the current value.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CipherOptionsUpdate {
    /// See [`CipherOptions::animations_enabled`].
    pub animations_enabled: Option<bool>,
    /// See [`CipherOptions::radius`].
    pub radius: Option<f64>,
    /// See [`CipherOptions::gap`].
    pub gap: Option<f64>,
    /// See [`CipherOptions::animation_type`].
    pub animation_type: Option<Interpolation>,
    /// See [`CipherOptions::animation_duration`].
    pub animation_duration: Option<f64>,
}

impl CipherOptionsUpdate {
    /// Overwrite every field that is set.
    pub fn apply_to(&self, opts: &mut CipherOptions) {
        if let Some(v) = self.animations_enabled {
            opts.animations_enabled = v;
        }
        if let Some(v) = self.radius {
            opts.radius = v;
        }
        if let Some(v) = self.gap {
            opts.gap = v;
        }
        if let Some(v) = self.animation_type {
            opts.animation_type = v;
        }
        if let Some(v) = self.animation_duration {
            opts.animation_duration = v;
        }
    }
}

/// Options for a whole [`crate::CipherStream`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StreamOptions {
    /// Side length of each glyph surface, in pixels.
    pub canvas_size: u32,
    /// Options handed to every glyph.
    pub individual_options: CipherOptions,
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            canvas_size: 400,
            individual_options: CipherOptions::default(),
        }
    }
}

impl StreamOptions {
    /// Merge `update` over these options.
    ///
    /// Top-level keys are replaced; the nested `individualOptions` group is merged one level
    /// deep, so a partial glyph update keeps the unspecified glyph fields.
    pub fn merge(&mut self, update: &StreamOptionsUpdate) {
        if let Some(size) = update.canvas_size {
            self.canvas_size = size;
        }
        if let Some(individual) = &update.individual_options {
            individual.apply_to(&mut self.individual_options);
        }
    }

    /// Reject values no stream can be drawn with.
    pub fn validate(&self) -> GlyphResult<()> {
        if self.canvas_size == 0 {
            return Err(GlyphError::validation("canvasSize must be > 0"));
        }
        self.individual_options.validate()
    }
}

/// Partial [`StreamOptions`], as loaded from an options file.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StreamOptionsUpdate {
    /// See [`StreamOptions::canvas_size`].
    pub canvas_size: Option<u32>,
    /// Partial glyph options.
    pub individual_options: Option<CipherOptionsUpdate>,
}

impl StreamOptionsUpdate {
    /// Parse an update from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> GlyphResult<Self> {
        serde_json::from_reader(r).map_err(|e| GlyphError::serde(format!("parse options JSON: {e}")))
    }

    /// Parse an update from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> GlyphResult<Self> {
        let f = File::open(path)?;
        Self::from_reader(BufReader::new(f))
    }

    /// Update that only touches glyph options.
    pub fn individual(update: CipherOptionsUpdate) -> Self {
        Self {
            canvas_size: None,
            individual_options: Some(update),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/options.rs"]
mod tests;

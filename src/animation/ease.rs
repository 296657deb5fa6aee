/// Linear interpolation. Defined for any `t`; callers clamp where monotonicity matters.
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + t * (end - start)
}

/// Quadratic (accelerating) interpolation.
pub fn quadin(start: f64, end: f64, t: f64) -> f64 {
    lerp(start, end, t * t)
}

/// Piecewise "ease-out-in": [`quadin`] up to the midpoint, then the same curve mirrored.
///
/// `slerp(a, b, 0) == a`, `slerp(a, b, 1) == b`, `slerp(a, b, 0.5)` is the midpoint, and both
/// branches agree at `t = 0.5`.
pub fn slerp(start: f64, end: f64, t: f64) -> f64 {
    let mid = (start + end) / 2.0;
    if t <= 0.5 {
        return quadin(start, mid, 2.0 * t);
    }
    end + mid - quadin(mid, end, 2.0 * (1.0 - t))
}

/// Interpolation strategy used to warp cumulative progress inside an
/// [`crate::AnimationGroup`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Interpolation {
    /// Uniform time mapping.
    #[default]
    #[serde(rename = "linear", alias = "lerp")]
    Linear,
    /// Ease-out-in, see [`slerp`].
    #[serde(rename = "ease-out-in", alias = "slerp")]
    EaseOutIn,
}

impl Interpolation {
    /// Interpolate between `start` and `end` at `t`.
    pub fn apply(self, start: f64, end: f64, t: f64) -> f64 {
        match self {
            Self::Linear => lerp(start, end, t),
            Self::EaseOutIn => slerp(start, end, t),
        }
    }

    /// Resolve to a plain function pointer, once per group.
    pub fn as_fn(self) -> fn(f64, f64, f64) -> f64 {
        match self {
            Self::Linear => lerp,
            Self::EaseOutIn => slerp,
        }
    }

    /// Stable tag used in options files.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseOutIn => "ease-out-in",
        }
    }
}

impl std::str::FromStr for Interpolation {
    type Err = crate::GlyphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "linear" | "lerp" => Ok(Self::Linear),
            "ease-out-in" | "slerp" => Ok(Self::EaseOutIn),
            other => Err(crate::GlyphError::validation(format!(
                "unknown animation type '{other}' (expected 'linear' or 'ease-out-in')"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;

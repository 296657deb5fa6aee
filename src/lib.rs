//! Ringglyph renders words as animated ring glyphs.
//!
//! Every letter becomes an arc on a growing set of concentric rings, joined by radial
//! connectors. Word changes are animated by morphing the strokes rather than snapping:
//!
//! - [`AnimationGroup`] plays weighted [`AnimationPart`]s as one seamless animation
//! - [`Cipher`] classifies a word change and drives one glyph's transition frame by frame
//! - [`CipherStream`] keeps one glyph per word of a phrase
//! - [`Player`] steps a stream deterministically against a manual clock
//!
//! Drawing goes through [`DrawSurface`]; [`RecordingSurface`] captures calls and
//! [`CpuSurface`] rasterizes them into a [`FrameRGBA`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Animation composition engine.
pub mod animation;
/// Glyph geometry, transitions and streams.
pub mod glyph;
/// Drawing surfaces and frames.
pub mod render;
/// Frame scheduling, clocks and playback.
pub mod runtime;

pub use crate::foundation::core::{
    Angle, BezPath, Point, Rgba8, Size, Vec2, arc_length, degrees_to_radians, point_on_circle,
    radians_to_degrees,
};
pub use crate::foundation::error::{GlyphError, GlyphResult};

pub use crate::animation::ease::{Interpolation, lerp, quadin, slerp};
pub use crate::animation::group::{AnimationGroup, AnimationPart, FnPart, Progress, Span, part};
pub use crate::glyph::cipher::{Cipher, TransitionKind, TransitionPlan, classify};
pub use crate::glyph::layout::{GlyphPart, RingLayout, normalize_word};
pub use crate::glyph::options::{
    CipherOptions, CipherOptionsUpdate, StreamOptions, StreamOptionsUpdate,
};
pub use crate::glyph::stream::CipherStream;
pub use crate::render::cpu::{CpuFactory, CpuSurface};
pub use crate::render::frame::{FrameRGBA, compose_row};
pub use crate::render::recording::{DrawCmd, RecordingFactory, RecordingSurface};
pub use crate::render::surface::{DrawSurface, StrokeStyle, SurfaceFactory};
pub use crate::runtime::clock::{Clock, ManualClock, SystemClock};
pub use crate::runtime::player::Player;
pub use crate::runtime::scheduler::{FrameCtx, FrameHandle, FrameQueue, FrameScheduler};

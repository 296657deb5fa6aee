//! Drawing surfaces.
//!
//! Glyphs draw through [`surface::DrawSurface`]. [`recording`] captures the calls for tests and
//! tracing; [`cpu`] rasterizes them with `vello_cpu`.

/// CPU rasterizing surface.
pub mod cpu;
/// Rendered frame type and row composition.
pub mod frame;
/// Call-recording surface.
pub mod recording;
/// Surface and factory traits.
pub mod surface;

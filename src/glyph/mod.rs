//! Word glyphs: ring geometry, the per-word transition state machine, and the word stream.

/// Per-word glyph and its transition classification.
pub mod cipher;
/// Letter-to-ring geometry.
pub mod layout;
/// Glyph and stream options.
pub mod options;
/// Row of glyphs aligned with a word list.
pub mod stream;

/// Geometry primitives, angles and colors.
pub mod core;
/// Crate error type.
pub mod error;

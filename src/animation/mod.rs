//! Weighted animation composition.
//!
//! An [`group::AnimationGroup`] plays many independently drawn parts as one animation driven by
//! a single progress value; [`ease`] holds the interpolation curves it can be warped with.

/// Interpolation functions.
pub mod ease;
/// Weight-partitioned animation groups.
pub mod group;

/// Time sources.
pub mod clock;
/// Deterministic stream driver.
pub mod player;
/// Frame scheduling.
pub mod scheduler;

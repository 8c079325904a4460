//! Small shared utilities.

/// Frame pacing and FPS tracking.
pub mod frame_timing;

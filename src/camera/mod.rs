//! Camera system for 3D scene viewing.
//!
//! A first-person camera (eye, look direction, up) driven by keyboard pan,
//! mouse-drag rotation and scroll zoom, with a switchable perspective or
//! orthographic projection.

/// First-person camera controller managing pan, rotation, zoom and reset.
pub mod controller;
/// Core camera struct, projection parameters and GPU uniform types.
pub mod core;

pub use controller::{CameraController, PanDirection};
pub use core::{Camera, CameraUniform, ProjectionMode};

//! The viewer's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a mouse
//! gesture or a programmatic call, is a [`ViewerCommand`]. Consumers build
//! commands and pass them to
//! [`SceneEngine::execute`](super::SceneEngine::execute).

use glam::Vec2;

pub use crate::camera::PanDirection;

/// A single viewer operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerCommand {
    // ── Display ─────────────────────────────────────────────────────
    /// Show or hide the ground grid.
    ToggleGrid,

    /// Switch between shaded surfaces and a line wireframe.
    ToggleWireframe,

    /// Start or stop the animation loop.
    ToggleAnimation,

    // ── Camera ──────────────────────────────────────────────────────
    /// Move the eye one pan step.
    Pan {
        /// Along or across the look direction.
        direction: PanDirection,
    },

    /// Switch between perspective and orthographic projection.
    ToggleProjection,

    /// Restore the default camera pose and zoom.
    ResetCamera,

    /// Rotate the look direction by `delta` pixels of mouse movement.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount in wheel notches.
        delta: f32,
    },

    // ── Session ─────────────────────────────────────────────────────
    /// Close the viewer.
    Quit,
}

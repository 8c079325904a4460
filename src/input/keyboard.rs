use serde::{Deserialize, Serialize};

use crate::engine::command::{PanDirection, ViewerCommand};

/// Viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_grid = "Digit1"
/// quit = "Escape"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Show/hide the ground grid.
    ToggleGrid,
    /// Switch between shaded and wireframe drawing.
    ToggleWireframe,
    /// Start/stop the animation loop.
    ToggleAnimation,
    /// Move the eye along the look direction.
    PanForward,
    /// Move the eye against the look direction.
    PanBackward,
    /// Move the eye sideways to the left.
    StrafeLeft,
    /// Move the eye sideways to the right.
    StrafeRight,
    /// Switch between perspective and orthographic projection.
    ToggleProjection,
    /// Restore the default camera.
    ResetCamera,
    /// Close the viewer.
    Quit,
}

impl KeyAction {
    /// The parameterless command this key triggers.
    #[must_use]
    pub fn to_command(self) -> ViewerCommand {
        match self {
            Self::ToggleGrid => ViewerCommand::ToggleGrid,
            Self::ToggleWireframe => ViewerCommand::ToggleWireframe,
            Self::ToggleAnimation => ViewerCommand::ToggleAnimation,
            Self::PanForward => ViewerCommand::Pan {
                direction: PanDirection::Forward,
            },
            Self::PanBackward => ViewerCommand::Pan {
                direction: PanDirection::Backward,
            },
            Self::StrafeLeft => ViewerCommand::Pan {
                direction: PanDirection::Left,
            },
            Self::StrafeRight => ViewerCommand::Pan {
                direction: PanDirection::Right,
            },
            Self::ToggleProjection => ViewerCommand::ToggleProjection,
            Self::ResetCamera => ViewerCommand::ResetCamera,
            Self::Quit => ViewerCommand::Quit,
        }
    }
}

/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`ViewerCommand`](crate::engine::command::ViewerCommand)
/// values.
///
/// # Example
///
/// ```ignore
/// let cmd = input_processor.handle_event(
///     InputEvent::CursorMoved { x: 100.0, y: 200.0 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel, in notches (positive = away from the user).
    Scroll {
        /// Scroll amount; one wheel notch is 1.0.
        delta: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Back, forward or any extra button.
    Other,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Other,
        }
    }
}

#[cfg(all(test, feature = "viewer"))]
mod tests {
    use super::*;

    #[test]
    fn side_buttons_are_not_the_primary_button() {
        use winit::event::MouseButton as Winit;

        assert_eq!(MouseButton::from(Winit::Left), MouseButton::Left);
        assert_eq!(MouseButton::from(Winit::Right), MouseButton::Right);
        for extra in [Winit::Back, Winit::Forward, Winit::Other(8)] {
            assert_eq!(MouseButton::from(extra), MouseButton::Other);
        }
    }
}

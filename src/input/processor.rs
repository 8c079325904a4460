//! Converts raw platform events into viewer commands.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! drag anchor, button state) and the key-binding map. It is the only thing
//! that sits between raw window events and
//! [`ViewState::apply`](crate::engine::view_state::ViewState::apply).

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::engine::command::ViewerCommand;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`ViewerCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("KeyW") {
///     engine.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Last known cursor position in physical pixels.
    cursor: Vec2,
    /// Position the current drag delta is measured from. Moves with the
    /// cursor on every rotate step.
    drag_anchor: Vec2,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            cursor: Vec2::ZERO,
            drag_anchor: Vec2::ZERO,
            mouse_pressed: false,
            key_bindings,
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Replace the key bindings (after an options reload).
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
    }

    /// Look up a key press and return the corresponding command, if bound.
    ///
    /// Key strings use the `winit::keyboard::KeyCode` debug format:
    /// `"KeyW"`, `"Digit1"`, `"Escape"`, etc.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ViewerCommand> {
        self.key_bindings.lookup(key).map(|action| action.to_command())
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ViewerCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed);
                None
            }
            InputEvent::Scroll { delta } => {
                (delta != 0.0).then_some(ViewerCommand::Zoom { delta })
            }
        }
    }

    /// Cursor moved: rotate while the left button is held.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<ViewerCommand> {
        self.cursor = Vec2::new(x, y);
        if !self.mouse_pressed {
            return None;
        }

        let delta = self.cursor - self.drag_anchor;
        self.drag_anchor = self.cursor;
        (delta != Vec2::ZERO).then_some(ViewerCommand::RotateCamera { delta })
    }

    /// Track the left button; pressing anchors the drag at the cursor.
    fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if button != MouseButton::Left {
            return;
        }
        self.mouse_pressed = pressed;
        if pressed {
            self.drag_anchor = self.cursor;
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::command::PanDirection;

    fn press_left(p: &mut InputProcessor) {
        let _ = p.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
    }

    #[test]
    fn hover_without_button_produces_nothing() {
        let mut p = InputProcessor::new();
        assert_eq!(
            p.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 }),
            None
        );
        assert_eq!(p.cursor(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn drag_deltas_are_measured_from_last_position() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(InputEvent::CursorMoved { x: 100.0, y: 100.0 });
        press_left(&mut p);

        let first = p.handle_event(InputEvent::CursorMoved { x: 110.0, y: 95.0 });
        assert_eq!(
            first,
            Some(ViewerCommand::RotateCamera {
                delta: Vec2::new(10.0, -5.0)
            })
        );

        let second =
            p.handle_event(InputEvent::CursorMoved { x: 112.0, y: 95.0 });
        assert_eq!(
            second,
            Some(ViewerCommand::RotateCamera {
                delta: Vec2::new(2.0, 0.0)
            })
        );
    }

    #[test]
    fn release_stops_rotation() {
        let mut p = InputProcessor::new();
        press_left(&mut p);
        let _ = p.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        });
        assert!(!p.mouse_pressed());
        assert_eq!(
            p.handle_event(InputEvent::CursorMoved { x: 50.0, y: 50.0 }),
            None
        );
    }

    #[test]
    fn right_button_does_not_rotate() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        assert_eq!(
            p.handle_event(InputEvent::CursorMoved { x: 5.0, y: 5.0 }),
            None
        );
    }

    #[test]
    fn side_button_drag_does_not_rotate() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(InputEvent::MouseButton {
            button: MouseButton::Other,
            pressed: true,
        });
        assert!(!p.mouse_pressed());
        assert_eq!(
            p.handle_event(InputEvent::CursorMoved { x: 30.0, y: 40.0 }),
            None
        );
    }

    #[test]
    fn scroll_maps_to_zoom() {
        let mut p = InputProcessor::new();
        assert_eq!(
            p.handle_event(InputEvent::Scroll { delta: -1.0 }),
            Some(ViewerCommand::Zoom { delta: -1.0 })
        );
        assert_eq!(p.handle_event(InputEvent::Scroll { delta: 0.0 }), None);
    }

    #[test]
    fn default_keys_map_to_commands() {
        let p = InputProcessor::new();
        assert_eq!(
            p.handle_key_press("KeyW"),
            Some(ViewerCommand::Pan {
                direction: PanDirection::Forward
            })
        );
        assert_eq!(
            p.handle_key_press("KeyA"),
            Some(ViewerCommand::Pan {
                direction: PanDirection::Left
            })
        );
        assert_eq!(p.handle_key_press("Digit2"), Some(ViewerCommand::ToggleWireframe));
        assert_eq!(p.handle_key_press("KeyP"), Some(ViewerCommand::ToggleProjection));
        assert_eq!(p.handle_key_press("KeyQ"), Some(ViewerCommand::Quit));
        assert_eq!(p.handle_key_press("F13"), None);
    }
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ToggleGrid` → `"Digit1"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

fn default_bindings() -> HashMap<KeyAction, String> {
    HashMap::from([
        (KeyAction::ToggleGrid, "Digit1".into()),
        (KeyAction::ToggleWireframe, "Digit2".into()),
        (KeyAction::ToggleAnimation, "Digit3".into()),
        (KeyAction::PanForward, "KeyW".into()),
        (KeyAction::PanBackward, "KeyS".into()),
        (KeyAction::StrafeLeft, "KeyA".into()),
        (KeyAction::StrafeRight, "KeyD".into()),
        (KeyAction::ToggleProjection, "KeyP".into()),
        (KeyAction::ResetCamera, "KeyR".into()),
        (KeyAction::Quit, "KeyQ".into()),
    ])
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let mut opts = Self {
            bindings: default_bindings(),
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Bind every action the user's file left out to its default key, then
    /// rebuild the reverse map. A default key already claimed by another
    /// action is not reused.
    pub fn fill_missing_defaults(&mut self) {
        for (action, key) in default_bindings() {
            let taken = self.bindings.values().any(|k| *k == key);
            if !self.bindings.contains_key(&action) && !taken {
                let _ = self.bindings.insert(action, key);
            }
        }
        self.rebuild_reverse_map();
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}

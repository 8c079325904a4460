//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (display toggles, camera defaults, lighting,
//! animation, texture paths, keybindings) are consolidated here. Options
//! serialize to/from TOML so a viewer session can be configured from a file.

mod animation;
mod camera;
mod display;
mod keybindings;
mod lighting;
mod textures;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use keybindings::KeybindingOptions;
pub use lighting::LightingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use textures::TextureOptions;

use crate::error::ViewerError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Overlay toggles and colors.
    pub display: DisplayOptions,
    /// Camera defaults and sensitivities.
    pub camera: CameraOptions,
    /// Directional light parameters.
    pub lighting: LightingOptions,
    /// Frame-counter animation.
    pub animation: AnimationOptions,
    /// Texture image paths.
    #[schemars(skip)]
    pub textures: TextureOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults and
    /// unbound actions keep their default keys.
    pub fn from_toml_str(content: &str) -> Result<Self, ViewerError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))?;
        opts.keybindings.fill_missing_defaults();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let content = std::fs::read_to_string(path).map_err(ViewerError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Render the options as pretty-printed TOML.
    pub fn to_toml_string(&self) -> Result<String, ViewerError> {
        toml::to_string_pretty(self)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ViewerError> {
        let content = self.to_toml_string()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ViewerError::Io)?;
        }
        std::fs::write(path, content).map_err(ViewerError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = opts.to_toml_string().unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
fovy = 60.0
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.camera.fovy, 60.0);
        // Everything else should be default
        assert_eq!(opts.camera.eye, [0.0, 5.0, 15.0]);
        assert_eq!(opts.animation.frames, 600);
        assert!(!opts.display.show_grid);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("Digit1"),
            Some(KeyAction::ToggleGrid)
        );
        assert_eq!(opts.keybindings.lookup("KeyQ"), Some(KeyAction::Quit));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn rebinding_one_key_keeps_the_others() {
        let toml_str = r#"
[keybindings.bindings]
quit = "Escape"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Quit));
        assert_eq!(opts.keybindings.lookup("KeyQ"), None);
        assert_eq!(
            opts.keybindings.lookup("KeyW"),
            Some(KeyAction::PanForward)
        );
    }

    #[test]
    fn texture_paths_come_from_config() {
        let toml_str = r#"
[textures]
base_dir = "/data/astro"
earth = "blue_marble.png"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(
            opts.textures.earth_path(),
            Some(std::path::PathBuf::from("/data/astro/blue_marble.png"))
        );
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[camera\nfovy = ").unwrap_err();
        assert!(matches!(err, ViewerError::OptionsParse(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("display"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("lighting"));
        assert!(props.contains_key("animation"));

        // Skipped sections should be absent
        assert!(!props.contains_key("textures"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("eye").is_none());
    }
}

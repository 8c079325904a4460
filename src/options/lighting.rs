use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Single directional light.
pub struct LightingOptions {
    /// Direction *towards* the light, world space. Need not be normalized.
    #[schemars(skip)]
    pub direction: [f32; 3],
    #[schemars(title = "Ambient", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    /// Ambient term added to every lit fragment.
    pub ambient: f32,
    #[schemars(title = "Diffuse", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    /// Lambert term scale.
    pub diffuse: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            direction: [0.0, 100.0, 100.0],
            ambient: 0.2,
            diffuse: 0.8,
        }
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Frame-counter animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
pub struct AnimationOptions {
    /// Frames in one loop before the counter wraps to 0.
    #[schemars(title = "Loop Frames", range(min = 1, max = 6000))]
    pub frames: u32,
    /// Start with the animation running.
    #[schemars(title = "Run On Start")]
    pub run_on_start: bool,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            frames: 600,
            run_on_start: false,
        }
    }
}

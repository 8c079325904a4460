use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Overlay toggles and flat colors.
pub struct DisplayOptions {
    /// Draw the ground grid on the y = 0 plane.
    #[schemars(title = "Show Grid")]
    pub show_grid: bool,
    /// Draw the scene as unlit lines instead of shaded surfaces.
    #[schemars(title = "Wireframe")]
    pub show_wireframe: bool,
    /// Grid lines on each side of the origin.
    #[schemars(title = "Grid Size", range(min = 1, max = 50))]
    pub grid_half_lines: u32,
    /// RGB grid color (emissive).
    #[schemars(skip)]
    pub grid_color: [f32; 3],
    /// RGB wireframe color.
    #[schemars(skip)]
    pub wireframe_color: [f32; 3],
    /// RGB framebuffer clear color.
    #[schemars(skip)]
    pub clear_color: [f32; 3],
    /// Frame rate cap; also the animation speed in frames per second.
    /// 0 renders as fast as the surface allows.
    #[schemars(title = "Target FPS", range(min = 0, max = 240))]
    pub target_fps: u32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_grid: false,
            show_wireframe: false,
            grid_half_lines: 3,
            grid_color: [1.0, 0.0, 1.0],
            wireframe_color: [1.0, 0.0, 0.0],
            clear_color: [0.0, 0.0, 0.0],
            target_fps: 60,
        }
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera defaults and control sensitivities.
///
/// The pose fields double as the target of a camera reset.
pub struct CameraOptions {
    /// Initial eye position in world space.
    #[schemars(skip)]
    pub eye: [f32; 3],
    /// Initial look direction (not a point).
    #[schemars(skip)]
    pub forward: [f32; 3],
    /// Up vector. Must never be parallel to `forward`.
    #[schemars(skip)]
    pub up: [f32; 3],
    /// Start in orthographic instead of perspective projection.
    #[schemars(title = "Orthographic")]
    pub orthographic: bool,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 10.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance (scaled by 5 when projecting).
    #[schemars(skip)]
    pub zfar: f32,
    /// Half-width of the orthographic view volume; also the reset extent.
    #[schemars(title = "Ortho Extent", range(min = 1.0, max = 50.0), extend("step" = 0.5))]
    pub ortho_extent: f32,
    /// Distance moved per pan key press.
    #[schemars(title = "Pan Step", range(min = 0.05, max = 5.0), extend("step" = 0.05))]
    pub pan_step: f32,
    /// Field-of-view change per scroll notch, in degrees.
    #[schemars(title = "Zoom Step", range(min = 1.0, max = 20.0), extend("step" = 1.0))]
    pub zoom_step: f32,
    /// Degrees of rotation per pixel of mouse drag.
    #[schemars(title = "Rotate Speed", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub rotate_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            eye: [0.0, 5.0, 15.0],
            forward: [0.0, 0.0, -1.0],
            up: [0.0, 1.0, 0.0],
            orthographic: false,
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            ortho_extent: 15.0,
            pan_step: 0.5,
            zoom_step: 5.0,
            rotate_speed: 0.1,
        }
    }
}

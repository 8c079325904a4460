use glam::{Mat4, Vec3};

/// Factor applied to the configured far plane when building either
/// projection, so the sky sphere stays inside the view volume.
pub const FAR_PLANE_SCALE: f32 = 5.0;

/// Look-at camera defined by an eye position and a look *direction*.
///
/// Invariant: `up` and `center` are never parallel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look direction. The target point is `eye + center`.
    pub center: Vec3,
    /// Up direction vector.
    pub up: Vec3,
}

impl Camera {
    /// View matrix looking from `eye` towards `eye + center`.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.eye + self.center, self.up)
    }
}

/// Which projection the next frame uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    /// Field-of-view projection.
    #[default]
    Perspective,
    /// Parallel projection.
    Orthographic,
}

impl ProjectionMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Perspective => Self::Orthographic,
            Self::Orthographic => Self::Perspective,
        }
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perspective {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance (before [`FAR_PLANE_SCALE`]).
    pub zfar: f32,
}

impl Perspective {
    /// Projection matrix with a [0,1] depth range (wgpu convention).
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar * FAR_PLANE_SCALE,
        )
    }
}

/// Orthographic projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orthographic {
    /// Half-size of the longer viewport axis, in world units. Always > 0.
    pub extent: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance (before [`FAR_PLANE_SCALE`]).
    pub zfar: f32,
    /// Extent restored by a camera reset.
    pub zoom_factor: f32,
}

impl Orthographic {
    /// Projection matrix for the given viewport aspect ratio. The extent
    /// spans the wider axis; the other axis is shrunk by the aspect.
    #[must_use]
    pub fn matrix(&self, aspect: f32) -> Mat4 {
        let e = self.extent;
        let (half_w, half_h) = if aspect > 1.0 {
            (e, e / aspect)
        } else {
            (e * aspect, e)
        };
        Mat4::orthographic_rh(
            -half_w,
            half_w,
            -half_h,
            half_h,
            self.znear,
            self.zfar * FAR_PLANE_SCALE,
        )
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view and projection matrices.
pub struct CameraUniform {
    /// World → view matrix.
    pub view: [[f32; 4]; 4],
    /// View → clip matrix.
    pub projection: [[f32; 4]; 4],
    /// Camera world-space position (w unused).
    pub eye: [f32; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Identity matrices, eye at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            eye: [0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Update uniform fields from freshly computed matrices.
    pub fn update(&mut self, camera: &Camera, projection: Mat4) {
        self.view = camera.view_matrix().to_cols_array_2d();
        self.projection = projection.to_cols_array_2d();
        self.eye = camera.eye.extend(1.0).to_array();
    }
}

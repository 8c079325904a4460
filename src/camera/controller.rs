use glam::{Mat4, Quat, Vec2, Vec3};

use crate::camera::core::{
    Camera, CameraUniform, Orthographic, Perspective, ProjectionMode,
};
use crate::options::CameraOptions;

/// Narrowest perspective field of view, in degrees.
pub const MIN_FOVY: f32 = 10.0;
/// Widest perspective field of view, in degrees.
pub const MAX_FOVY: f32 = 120.0;
/// Orthographic extent used when zooming in would reach zero or below.
pub const MIN_ORTHO_EXTENT: f32 = 1.0e-4;
/// Upper bound on the orthographic extent so repeated zoom-out stays finite.
pub const MAX_ORTHO_EXTENT: f32 = 1.0e6;
/// Wheel rotation per scroll notch, in degrees.
const DEGREES_PER_NOTCH: f32 = 15.0;
/// `|center × up|²` below this counts as parallel.
const PARALLEL_EPSILON: f32 = 1.0e-6;

/// Direction of a keyboard pan step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    /// Along the look direction.
    Forward,
    /// Against the look direction.
    Backward,
    /// Sideways, `-(center × Y)`.
    Left,
    /// Sideways, `center × Y`.
    Right,
}

/// First-person camera controller: keyboard pan, drag rotation, scroll zoom,
/// and a switchable perspective/orthographic projection.
///
/// Matrices are never cached; [`view_matrix`](Self::view_matrix) and
/// [`projection_matrix`](Self::projection_matrix) recompute from the current
/// state on every call.
pub struct CameraController {
    /// Current eye/look/up.
    pub camera: Camera,
    /// Perspective parameters (kept even while orthographic is active).
    pub perspective: Perspective,
    /// Orthographic parameters (kept even while perspective is active).
    pub orthographic: Orthographic,
    /// Projection used for the next frame.
    pub mode: ProjectionMode,

    rotation: Quat,
    rotation_axis: Vec3,
    defaults: CameraOptions,
}

/// Camera pose described by the options, falling back to the built-in
/// default when the configured look direction is parallel to up.
fn pose_from_options(opts: &CameraOptions) -> Camera {
    let camera = Camera {
        eye: Vec3::from(opts.eye),
        center: Vec3::from(opts.forward).normalize_or_zero(),
        up: Vec3::from(opts.up).normalize_or_zero(),
    };
    if camera.center.cross(camera.up).length_squared() < PARALLEL_EPSILON {
        log::warn!(
            "camera forward {:?} is parallel to up {:?}; using defaults",
            opts.forward,
            opts.up
        );
        return pose_from_options(&CameraOptions::default());
    }
    camera
}

impl CameraController {
    /// Controller posed at the configured defaults.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let mode = if options.orthographic {
            ProjectionMode::Orthographic
        } else {
            ProjectionMode::Perspective
        };
        Self {
            camera: pose_from_options(options),
            perspective: Perspective {
                fovy: options.fovy.clamp(MIN_FOVY, MAX_FOVY),
                aspect,
                znear: options.znear,
                zfar: options.zfar,
            },
            orthographic: Orthographic {
                extent: options.ortho_extent.max(MIN_ORTHO_EXTENT),
                znear: options.znear,
                zfar: options.zfar,
                zoom_factor: options.ortho_extent.max(MIN_ORTHO_EXTENT),
            },
            mode,
            rotation: Quat::IDENTITY,
            rotation_axis: Vec3::ZERO,
            defaults: options.clone(),
        }
    }

    /// Adopt new sensitivities, clip planes, and reset targets without
    /// moving the camera.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.perspective.znear = options.znear;
        self.perspective.zfar = options.zfar;
        self.orthographic.znear = options.znear;
        self.orthographic.zfar = options.zfar;
        self.orthographic.zoom_factor = options.ortho_extent.max(MIN_ORTHO_EXTENT);
        self.defaults = options.clone();
    }

    /// Distance moved per pan key press.
    #[must_use]
    pub fn pan_step(&self) -> f32 {
        self.defaults.pan_step
    }

    /// Accumulated drag orientation.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Move the eye by `amount` along the look direction or sideways.
    pub fn pan(&mut self, direction: PanDirection, amount: f32) {
        let forward = self.camera.center;
        let strafe = forward.cross(Vec3::Y);
        self.camera.eye += match direction {
            PanDirection::Forward => forward * amount,
            PanDirection::Backward => -forward * amount,
            PanDirection::Right => strafe * amount,
            PanDirection::Left => -strafe * amount,
        };
    }

    /// Rotate the look direction by a mouse drag of `delta` pixels.
    ///
    /// The drag turns about an axis perpendicular to it in screen space, by
    /// `|delta| * rotate_speed` degrees. Axis and orientation accumulate
    /// across drags; the look direction is rebuilt from the base forward
    /// vector each time, so rounding never drifts its length.
    pub fn rotate(&mut self, delta: Vec2) {
        let speed = delta.length() * self.defaults.rotate_speed;
        if !speed.is_finite() || speed <= 0.0 {
            return;
        }

        let n = Vec3::new(delta.y, delta.x, 0.0).normalize();
        let axis = (self.rotation_axis + n * speed).normalize_or_zero();
        if axis == Vec3::ZERO {
            return;
        }

        let rotation =
            (Quat::from_axis_angle(axis, speed.to_radians()) * self.rotation)
                .normalize();
        // Row-vector convention: forward * R, i.e. the conjugate applied.
        let center = rotation.inverse() * self.base_forward();
        if center.cross(self.camera.up).length_squared() < PARALLEL_EPSILON {
            return;
        }

        self.rotation_axis = axis;
        self.rotation = rotation;
        self.camera.center = center;
    }

    /// Zoom by `notches` of scroll wheel (positive = zoom in).
    ///
    /// Both projections respond so switching modes keeps a similar framing:
    /// the field of view steps by `zoom_step` within
    /// [`MIN_FOVY`]..=[`MAX_FOVY`], the orthographic extent shrinks in
    /// proportion to itself and never reaches zero.
    pub fn zoom(&mut self, notches: f32) {
        if !notches.is_finite() || notches == 0.0 {
            return;
        }

        let step = if notches > 0.0 {
            -self.defaults.zoom_step
        } else {
            self.defaults.zoom_step
        };
        self.perspective.fovy =
            (self.perspective.fovy + step).clamp(MIN_FOVY, MAX_FOVY);

        let degrees = notches * DEGREES_PER_NOTCH;
        let extent = self.orthographic.extent;
        let next = extent - degrees * extent / 180.0;
        self.orthographic.extent = if next <= 0.0 {
            MIN_ORTHO_EXTENT
        } else {
            next.min(MAX_ORTHO_EXTENT)
        };
    }

    /// Restore pose and projection parameters to the configured defaults
    /// and clear the accumulated rotation. The projection mode is kept.
    pub fn reset(&mut self) {
        self.camera = pose_from_options(&self.defaults);
        self.rotation = Quat::IDENTITY;
        self.rotation_axis = Vec3::ZERO;
        self.perspective.fovy = self.defaults.fovy.clamp(MIN_FOVY, MAX_FOVY);
        self.perspective.znear = self.defaults.znear;
        self.perspective.zfar = self.defaults.zfar;
        self.orthographic.znear = self.defaults.znear;
        self.orthographic.zfar = self.defaults.zfar;
        self.orthographic.extent = self.orthographic.zoom_factor;
    }

    /// Switch between perspective and orthographic projection.
    pub fn toggle_projection(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Track the viewport size. A zero height is treated as 1.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.perspective.aspect = width as f32 / height.max(1) as f32;
    }

    /// View matrix for the current pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    /// Projection matrix for the active mode.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        match self.mode {
            ProjectionMode::Perspective => self.perspective.matrix(),
            ProjectionMode::Orthographic => {
                self.orthographic.matrix(self.perspective.aspect)
            }
        }
    }

    /// Fresh GPU uniform for the current state.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update(&self.camera, self.projection_matrix());
        uniform
    }

    fn base_forward(&self) -> Vec3 {
        pose_from_options(&self.defaults).center
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn controller() -> CameraController {
        CameraController::new(&CameraOptions::default(), 16.0 / 9.0)
    }

    #[test]
    fn pan_moves_along_center_and_strafe_axis() {
        let mut c = controller();
        c.pan(PanDirection::Forward, 0.5);
        assert_eq!(c.camera.eye, Vec3::new(0.0, 5.0, 14.5));
        c.pan(PanDirection::Backward, 0.5);
        assert_eq!(c.camera.eye, Vec3::new(0.0, 5.0, 15.0));

        // (0,0,-1) × (0,1,0) = (1,0,0)
        c.pan(PanDirection::Right, 0.5);
        assert_eq!(c.camera.eye, Vec3::new(0.5, 5.0, 15.0));
        c.pan(PanDirection::Left, 1.0);
        assert_eq!(c.camera.eye, Vec3::new(-0.5, 5.0, 15.0));
    }

    #[test]
    fn horizontal_drag_turns_about_vertical_axis() {
        let mut c = controller();
        c.rotate(Vec2::new(100.0, 0.0));
        // 100 px * 0.1 = 10 degrees about +Y, applied as the conjugate.
        let expected = Quat::from_rotation_y(-10.0_f32.to_radians()) * Vec3::NEG_Z;
        assert!(c.camera.center.abs_diff_eq(expected, 1e-5));
        assert!((c.camera.center.length() - 1.0).abs() < 1e-5);
        assert!(c.camera.center.y.abs() < 1e-6);
    }

    #[test]
    fn zero_drag_is_ignored() {
        let mut c = controller();
        c.rotate(Vec2::ZERO);
        assert_eq!(c.camera.center, Vec3::NEG_Z);
        assert_eq!(c.rotation(), Quat::IDENTITY);
    }

    #[test]
    fn drag_never_aligns_center_with_up() {
        let mut c = controller();
        // 900 px vertical = 90 degrees: would look straight up or down.
        c.rotate(Vec2::new(0.0, 900.0));
        assert!(c.camera.center.cross(c.camera.up).length_squared() > 1e-6);
    }

    #[test]
    fn zoom_in_narrows_fov_and_shrinks_extent() {
        let mut c = controller();
        c.zoom(1.0);
        assert_eq!(c.perspective.fovy, 40.0);
        // 15 - 15 * 15 / 180
        assert!((c.orthographic.extent - 13.75).abs() < 1e-5);

        c.zoom(-1.0);
        assert_eq!(c.perspective.fovy, 45.0);
    }

    #[test]
    fn fov_clamps_at_both_ends() {
        let mut c = controller();
        for _ in 0..50 {
            c.zoom(1.0);
        }
        assert_eq!(c.perspective.fovy, MIN_FOVY);
        for _ in 0..50 {
            c.zoom(-1.0);
        }
        assert_eq!(c.perspective.fovy, MAX_FOVY);
    }

    #[test]
    fn ortho_extent_never_reaches_zero() {
        let mut c = controller();
        // 12 notches = 180 degrees would subtract the whole extent.
        c.zoom(12.0);
        assert_eq!(c.orthographic.extent, MIN_ORTHO_EXTENT);
        c.zoom(100.0);
        assert_eq!(c.orthographic.extent, MIN_ORTHO_EXTENT);
    }

    #[test]
    fn reset_keeps_projection_mode() {
        let mut c = controller();
        c.toggle_projection();
        c.reset();
        assert_eq!(c.mode, ProjectionMode::Orthographic);
    }

    #[test]
    fn resize_with_zero_height_is_finite() {
        let mut c = controller();
        c.resize(800, 0);
        assert_eq!(c.perspective.aspect, 800.0);
        assert!(c.projection_matrix().is_finite());
    }

    #[test]
    fn parallel_forward_option_falls_back_to_default_pose() {
        let opts = CameraOptions {
            forward: [0.0, 1.0, 0.0],
            ..CameraOptions::default()
        };
        let c = CameraController::new(&opts, 1.0);
        assert_eq!(c.camera.center, Vec3::NEG_Z);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Pan(PanDirection, f32),
        Rotate(Vec2),
        Zoom(f32),
        Toggle,
    }

    fn op() -> impl Strategy<Value = Op> {
        let direction = prop_oneof![
            Just(PanDirection::Forward),
            Just(PanDirection::Backward),
            Just(PanDirection::Left),
            Just(PanDirection::Right),
        ];
        prop_oneof![
            (direction, -10.0f32..10.0).prop_map(|(d, a)| Op::Pan(d, a)),
            (-500.0f32..500.0, -500.0f32..500.0)
                .prop_map(|(x, y)| Op::Rotate(Vec2::new(x, y))),
            (-50.0f32..50.0).prop_map(Op::Zoom),
            Just(Op::Toggle),
        ]
    }

    fn run(c: &mut CameraController, ops: &[Op]) {
        for op in ops {
            match op {
                Op::Pan(d, a) => c.pan(*d, *a),
                Op::Rotate(delta) => c.rotate(*delta),
                Op::Zoom(n) => c.zoom(*n),
                Op::Toggle => c.toggle_projection(),
            }
        }
    }

    proptest! {
        #[test]
        fn zoom_keeps_projection_in_range(ops in prop::collection::vec(op(), 0..64)) {
            let mut c = controller();
            run(&mut c, &ops);
            prop_assert!((MIN_FOVY..=MAX_FOVY).contains(&c.perspective.fovy));
            prop_assert!(c.orthographic.extent > 0.0);
            prop_assert!(c.orthographic.extent.is_finite());
        }

        #[test]
        fn center_stays_unit_and_off_the_up_axis(ops in prop::collection::vec(op(), 0..64)) {
            let mut c = controller();
            run(&mut c, &ops);
            prop_assert!((c.camera.center.length() - 1.0).abs() < 1e-3);
            prop_assert!(c.camera.center.cross(c.camera.up).length_squared() >= PARALLEL_EPSILON);
            prop_assert!(c.view_matrix().is_finite());
        }

        #[test]
        fn reset_restores_exact_defaults(ops in prop::collection::vec(op(), 0..64)) {
            let defaults = CameraOptions::default();
            let mut c = controller();
            run(&mut c, &ops);
            c.reset();

            prop_assert_eq!(c.camera.eye, Vec3::from(defaults.eye));
            prop_assert_eq!(c.camera.center, Vec3::from(defaults.forward));
            prop_assert_eq!(c.camera.up, Vec3::from(defaults.up));
            prop_assert_eq!(c.perspective.fovy, defaults.fovy);
            prop_assert_eq!(c.perspective.znear, defaults.znear);
            prop_assert_eq!(c.perspective.zfar, defaults.zfar);
            prop_assert_eq!(c.orthographic.extent, defaults.ortho_extent);
            prop_assert_eq!(c.rotation(), Quat::IDENTITY);
        }
    }
}

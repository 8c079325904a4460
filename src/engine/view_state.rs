//! GPU-free viewer state: camera, overlay toggles and the animation clock.
//!
//! Everything a [`ViewerCommand`] can change lives here, so command handling
//! is testable without a device.

use super::command::ViewerCommand;
use crate::animation::{AnimationClock, Pose};
use crate::camera::CameraController;
use crate::options::Options;

/// Whether the viewer should keep running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewFlow {
    /// Keep going.
    Continue,
    /// Close the viewer.
    Exit,
}

/// Mutable view state driven by commands and frame ticks.
pub struct ViewState {
    /// Camera pose and projection.
    pub camera: CameraController,
    /// Animation frame counter.
    pub clock: AnimationClock,
    show_grid: bool,
    show_wireframe: bool,
}

impl ViewState {
    /// State initialized from `options` for a viewport of the given aspect
    /// ratio.
    #[must_use]
    pub fn new(options: &Options, aspect: f32) -> Self {
        Self {
            camera: CameraController::new(&options.camera, aspect),
            clock: AnimationClock::new(&options.animation),
            show_grid: options.display.show_grid,
            show_wireframe: options.display.show_wireframe,
        }
    }

    /// Whether the ground grid is drawn.
    #[must_use]
    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    /// Whether objects are drawn as wireframe.
    #[must_use]
    pub fn show_wireframe(&self) -> bool {
        self.show_wireframe
    }

    /// Pose for the current animation frame.
    #[must_use]
    pub fn pose(&self) -> Pose {
        Pose::at(self.clock.time(), self.clock.frames())
    }

    /// Apply one command.
    pub fn apply(&mut self, command: ViewerCommand) -> ViewFlow {
        log::trace!("apply {command:?}");
        match command {
            ViewerCommand::ToggleGrid => self.show_grid = !self.show_grid,
            ViewerCommand::ToggleWireframe => {
                self.show_wireframe = !self.show_wireframe;
            }
            ViewerCommand::ToggleAnimation => self.clock.toggle(),
            ViewerCommand::Pan { direction } => {
                let step = self.camera.pan_step();
                self.camera.pan(direction, step);
            }
            ViewerCommand::ToggleProjection => {
                self.camera.toggle_projection();
                log::info!("projection: {:?}", self.camera.mode);
            }
            ViewerCommand::ResetCamera => self.camera.reset(),
            ViewerCommand::RotateCamera { delta } => self.camera.rotate(delta),
            ViewerCommand::Zoom { delta } => self.camera.zoom(delta),
            ViewerCommand::Quit => return ViewFlow::Exit,
        }
        ViewFlow::Continue
    }

    /// Advance the animation clock by one frame.
    pub fn tick(&mut self) -> bool {
        self.clock.tick()
    }

    /// Adopt reloaded options. Toggles and the camera pose are kept;
    /// sensitivities, reset targets and the loop length change.
    pub fn apply_options(&mut self, options: &Options) {
        self.camera.apply_options(&options.camera);
        self.clock.set_frames(options.animation.frames);
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;
    use crate::camera::{PanDirection, ProjectionMode};

    fn state() -> ViewState {
        ViewState::new(&Options::default(), 1.5)
    }

    #[test]
    fn toggles_flip() {
        let mut s = state();
        assert!(!s.show_grid());
        assert_eq!(s.apply(ViewerCommand::ToggleGrid), ViewFlow::Continue);
        assert!(s.show_grid());
        let _ = s.apply(ViewerCommand::ToggleWireframe);
        assert!(s.show_wireframe());
        let _ = s.apply(ViewerCommand::ToggleWireframe);
        assert!(!s.show_wireframe());
    }

    #[test]
    fn pan_uses_configured_step() {
        let mut s = state();
        let _ = s.apply(ViewerCommand::Pan {
            direction: PanDirection::Forward,
        });
        assert_eq!(s.camera.camera.eye, Vec3::new(0.0, 5.0, 14.5));
    }

    #[test]
    fn animation_runs_only_when_toggled() {
        let mut s = state();
        assert!(!s.tick());
        let _ = s.apply(ViewerCommand::ToggleAnimation);
        assert!(s.tick());
        assert_eq!(s.clock.time(), 1);
        assert_ne!(s.pose(), Pose::REST);
    }

    #[test]
    fn reset_after_navigation() {
        let mut s = state();
        let _ = s.apply(ViewerCommand::RotateCamera {
            delta: Vec2::new(40.0, 10.0),
        });
        let _ = s.apply(ViewerCommand::Zoom { delta: 2.0 });
        let _ = s.apply(ViewerCommand::ToggleProjection);
        let _ = s.apply(ViewerCommand::ResetCamera);
        assert_eq!(s.camera.camera.center, Vec3::NEG_Z);
        assert_eq!(s.camera.perspective.fovy, 45.0);
        assert_eq!(s.camera.mode, ProjectionMode::Orthographic);
    }

    #[test]
    fn quit_exits() {
        assert_eq!(state().apply(ViewerCommand::Quit), ViewFlow::Exit);
    }

    #[test]
    fn reloaded_options_change_pan_step() {
        let mut s = state();
        let mut opts = Options::default();
        opts.camera.pan_step = 2.0;
        s.apply_options(&opts);
        let _ = s.apply(ViewerCommand::Pan {
            direction: PanDirection::Backward,
        });
        assert_eq!(s.camera.camera.eye, Vec3::new(0.0, 5.0, 17.0));
    }
}

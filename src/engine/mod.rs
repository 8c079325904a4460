//! The scene engine and the GPU-free state it drives.

pub mod command;
pub mod view_state;

use self::command::ViewerCommand;
use self::view_state::{ViewFlow, ViewState};
use crate::error::ViewerError;
use crate::gpu::render_context::RenderContext;
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;
use crate::renderer::{FramePlan, Overlays, SceneRenderer};
use crate::scene::{self, SceneObjects, TransformStack};
use crate::util::frame_timing::FrameTiming;

/// The scene engine: owns the GPU context, the static scene and all view
/// state, and turns one frame tick into one presented image.
///
/// # Frame loop
///
/// Call [`render`](Self::render) every time the window asks for a redraw and
/// [`resize`](Self::resize) when the window size changes. Input is forwarded
/// via [`handle_input`](Self::handle_input) and
/// [`handle_key`](Self::handle_key); both report whether the viewer should
/// keep running.
///
/// # Frame order
///
/// Each rendered frame advances the animation clock (when running),
/// composes the scene on the transform stack, plans instance batches and
/// hands them to the renderer. Frames requested faster than the configured
/// target rate are skipped, so the animation advances at that rate.
pub struct SceneEngine {
    /// Core wgpu device, queue, and surface.
    pub context: RenderContext,
    renderer: SceneRenderer,
    objects: SceneObjects,
    /// Camera, overlay toggles and animation clock.
    pub view: ViewState,
    input: InputProcessor,
    stack: TransformStack,
    options: Options,
    frame_timing: FrameTiming,
}

impl SceneEngine {
    /// Bring up the GPU, build every primitive and upload it.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError`] if GPU initialization or mesh generation
    /// fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, ViewerError> {
        let context = RenderContext::new(window, size).await?;
        Self::from_context(context, options)
    }

    /// Engine from a pre-built [`RenderContext`].
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError`] if a scene primitive cannot be generated.
    pub fn from_context(
        context: RenderContext,
        options: Options,
    ) -> Result<Self, ViewerError> {
        let objects = SceneObjects::standard()?;
        let renderer = SceneRenderer::new(&context, &objects, &options);
        let view = ViewState::new(&options, context.aspect());
        let input = InputProcessor::with_key_bindings(options.keybindings.clone());
        let frame_timing = FrameTiming::new(options.display.target_fps);

        log::info!(
            "scene engine ready: {}x{}, {:?}",
            context.size().0,
            context.size().1,
            context.format()
        );

        Ok(Self {
            context,
            renderer,
            objects,
            view,
            input,
            stack: TransformStack::new(),
            options,
            frame_timing,
        })
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options and push every derived value (camera defaults,
    /// light, clear color, grid size, key bindings, frame rate, textures)
    /// to the components that use it.
    pub fn set_options(&mut self, options: Options) {
        if options.textures != self.options.textures {
            self.renderer.load_textures(&self.context, &options.textures);
        }
        self.view.apply_options(&options);
        self.renderer.apply_options(&self.context, &options);
        self.input.set_key_bindings(options.keybindings.clone());
        self.frame_timing.set_target_fps(options.display.target_fps);
        self.options = options;
    }

    /// Measured frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }

    /// Whether an FPS report is due, given the reporting interval.
    pub fn fps_report_due(&mut self, interval: web_time::Duration) -> bool {
        self.frame_timing.report_due(interval)
    }

    /// Resize the surface, depth buffer and projection. Zero sizes (a
    /// minimized window) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context.resize(width, height);
        self.renderer.resize(&self.context.device, width, height);
        self.view.camera.resize(width, height);
    }

    /// Apply one command.
    pub fn execute(&mut self, command: ViewerCommand) -> ViewFlow {
        self.view.apply(command)
    }

    /// Feed a pointer event through the input processor.
    pub fn handle_input(&mut self, event: InputEvent) -> ViewFlow {
        match self.input.handle_event(event) {
            Some(command) => self.execute(command),
            None => ViewFlow::Continue,
        }
    }

    /// Feed a key press (a `KeyCode` debug string such as `"KeyW"`).
    pub fn handle_key(&mut self, key: &str) -> ViewFlow {
        match self.input.handle_key_press(key) {
            Some(command) => self.execute(command),
            None => ViewFlow::Continue,
        }
    }

    /// Plan the current frame without touching the GPU.
    #[must_use]
    pub fn plan_frame(&mut self) -> FramePlan {
        let pose = self.view.pose();
        let draws = scene::compose_with(&mut self.stack, &self.objects, &pose);
        let overlays = Overlays {
            grid: self.view.show_grid(),
            wireframe: self.view.show_wireframe(),
        };
        FramePlan::build(
            &draws,
            &self.objects,
            &self.options.display,
            overlays,
            |slot| self.renderer.has_texture(slot),
        )
    }

    /// Advance, draw and present one frame.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the next swapchain image cannot be
    /// acquired.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        if !self.frame_timing.should_render() {
            return Ok(());
        }

        let _ = self.view.tick();
        let plan = self.plan_frame();
        let camera = self.view.camera.uniform();

        let frame = self.context.next_frame()?;
        let target = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.renderer.render(&self.context, &target, &camera, &plan);
        frame.present();

        self.frame_timing.end_frame();
        Ok(())
    }
}

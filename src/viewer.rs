//! Standalone viewer window backed by winit.
//!
//! ```no_run
//! # use astroview::Viewer;
//! Viewer::builder()
//!     .with_title("Solar figure")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use web_time::Duration;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    engine::view_state::ViewFlow, error::ViewerError, options::Options,
    InputEvent, MouseButton, SceneEngine,
};

/// How often the FPS readout in the title bar refreshes.
const FPS_REPORT_INTERVAL: Duration = Duration::from_millis(250);

/// Initial window size in logical pixels.
const DEFAULT_SIZE: (u32, u32) = (1280, 720);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: None,
            title: "Astroview".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window showing the scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed or a quit key is pressed.
    ///
    /// # Errors
    ///
    /// [`ViewerError::Viewer`] if the event loop cannot be created or
    /// exits abnormally.
    pub fn run(self) -> Result<(), ViewerError> {
        let event_loop =
            EventLoop::new().map_err(|e| ViewerError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            options: Some(self.options),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| ViewerError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<SceneEngine>,
    /// Options waiting for the engine to be created.
    options: Option<Options>,
    title: String,
}

fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ViewerApp {
    fn redraw(&self) {
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    /// Stop the loop when a command asked to quit.
    fn follow(flow: ViewFlow, event_loop: &ActiveEventLoop) {
        if flow == ViewFlow::Exit {
            log::info!("quit requested");
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                DEFAULT_SIZE.0,
                DEFAULT_SIZE.1,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let options = self.options.take().unwrap_or_default();
        let size = viewport_size(window.inner_size());
        let engine = match pollster::block_on(SceneEngine::new(
            window.clone(),
            size,
            options,
        )) {
            Ok(e) => e,
            Err(e) => {
                log::error!("Failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        let Some(engine) = &mut self.engine else {
            return;
        };

        match event {
            WindowEvent::Resized(event_size) => {
                let (w, h) = viewport_size(event_size);
                engine.resize(w, h);
            }

            WindowEvent::RedrawRequested => {
                match engine.render() {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                        if let Some(w) = &self.window {
                            let (vp_w, vp_h) = viewport_size(w.inner_size());
                            engine.resize(vp_w, vp_h);
                        }
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("surface out of memory, exiting");
                        event_loop.exit();
                        return;
                    }
                    Err(e) => log::warn!("render error: {e:?}"),
                }

                if engine.fps_report_due(FPS_REPORT_INTERVAL) {
                    if let Some(w) = &self.window {
                        w.set_title(&format!("{} ({:.0} fps)", self.title, engine.fps()));
                    }
                }
                self.redraw();
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let flow = engine.handle_input(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
                Self::follow(flow, event_loop);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let flow = engine.handle_input(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
                Self::follow(flow, event_loop);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                let flow = engine.handle_input(InputEvent::Scroll {
                    delta: scroll_delta,
                });
                Self::follow(flow, event_loop);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let flow = engine.handle_key(&format!("{code:?}"));
                Self::follow(flow, event_loop);
            }

            _ => (),
        }
    }
}

use std::fmt;

/// Errors that can occur while bringing up the GPU.
#[derive(Debug)]
pub enum RenderContextError {
    /// The window handle could not be turned into a surface.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No adapter can present to the surface.
    AdapterRequest(wgpu::RequestAdapterError),
    /// The adapter refused the device (limits or features).
    DeviceRequest(wgpu::RequestDeviceError),
    /// The adapter offers no configuration for the surface.
    UnsupportedSurface,
}

impl fmt::Display for RenderContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceCreation(e) => write!(f, "cannot create surface: {e}"),
            Self::AdapterRequest(e) => write!(f, "no usable GPU adapter: {e}"),
            Self::DeviceRequest(e) => write!(f, "device request failed: {e}"),
            Self::UnsupportedSurface => {
                write!(f, "surface is not supported by the adapter")
            }
        }
    }
}

impl std::error::Error for RenderContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SurfaceCreation(e) => Some(e),
            Self::AdapterRequest(e) => Some(e),
            Self::DeviceRequest(e) => Some(e),
            Self::UnsupportedSurface => None,
        }
    }
}

/// Device, queue and the window surface with its configuration.
pub struct RenderContext {
    /// Logical device.
    pub device: wgpu::Device,
    /// Command queue.
    pub queue: wgpu::Queue,
    /// Presentation surface.
    pub surface: wgpu::Surface<'static>,
    /// Current surface configuration.
    pub config: wgpu::SurfaceConfiguration,
}

impl RenderContext {
    /// Open a device that can present to `window` at `initial_size`.
    ///
    /// Prefers an sRGB surface format so the shaders can write linear
    /// colors.
    ///
    /// # Errors
    ///
    /// [`RenderContextError`] if any step of the bring-up fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        initial_size: (u32, u32),
    ) -> Result<Self, RenderContextError> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .map_err(RenderContextError::SurfaceCreation)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                power_preference: wgpu::PowerPreference::default(),
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::AdapterRequest)?;
        log::info!("using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Viewer Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults()
                    .using_resolution(adapter.limits()),
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::DeviceRequest)?;

        let (width, height) = (initial_size.0.max(1), initial_size.1.max(1));
        let mut config = surface
            .get_default_config(&adapter, width, height)
            .ok_or(RenderContextError::UnsupportedSurface)?;
        let caps = surface.get_capabilities(&adapter);
        if let Some(srgb) = caps.formats.iter().copied().find(wgpu::TextureFormat::is_srgb) {
            config.format = srgb;
        }
        config.present_mode = wgpu::PresentMode::AutoVsync;
        surface.configure(&device, &config);

        Ok(Self {
            device,
            queue,
            surface,
            config,
        })
    }

    /// Surface texture format.
    #[must_use]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Surface size in physical pixels.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Width over height of the surface.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.config.width as f32 / self.config.height.max(1) as f32
    }

    /// Reconfigure for a new window size. Zero-sized dimensions (minimized
    /// windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Acquire the next swapchain texture.
    ///
    /// # Errors
    ///
    /// [`wgpu::SurfaceError`] if the surface is lost, outdated or timed out.
    pub fn next_frame(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    /// New command encoder.
    #[must_use]
    pub fn create_encoder(&self) -> wgpu::CommandEncoder {
        self.device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            })
    }

    /// Finish `encoder` and submit it.
    pub fn submit(&self, encoder: wgpu::CommandEncoder) {
        let _ = self.queue.submit(std::iter::once(encoder.finish()));
    }
}

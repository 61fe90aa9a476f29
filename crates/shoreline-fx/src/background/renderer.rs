use super::init::*;
use super::render::render_aurora_pass;
use crate::error::FxError;
use crate::state::fit_surface_size;
use crate::uniforms::AuroraUniforms;

/// wgpu renderer bound to one canvas
pub struct AuroraRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    max_dimension: u32,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    pipeline: wgpu::RenderPipeline,
}

impl AuroraRenderer {
    /// Create a renderer drawing into `canvas`
    ///
    /// The canvas backing size (`width`/`height` attributes) is used as the
    /// initial surface size.
    pub async fn new(
        canvas: web_sys::HtmlCanvasElement,
        initial: &AuroraUniforms,
    ) -> Result<Self, FxError> {
        let (instance, surface, width, height) = Self::create_surface(canvas)?;

        let (device, queue, adapter) = create_device(&instance, &surface).await?;
        let (surface_config, surface_format) =
            configure_surface(&surface, &adapter, &device, width, height)?;
        let (uniform_buffer, bind_group_layout, bind_group) =
            create_uniform_resources(&device, initial);
        let pipeline = create_pipeline(&device, &bind_group_layout, surface_format);
        let max_dimension = device.limits().max_texture_dimension_2d;

        Ok(Self {
            device,
            queue,
            surface,
            surface_config,
            max_dimension,
            bind_group,
            uniform_buffer,
            pipeline,
        })
    }

    /// Create the wgpu instance and surface from canvas
    #[cfg(target_arch = "wasm32")]
    fn create_surface(
        canvas: web_sys::HtmlCanvasElement,
    ) -> Result<(wgpu::Instance, wgpu::Surface<'static>, u32, u32), FxError> {
        let width = canvas.width();
        let height = canvas.height();

        // WebGL2 only: the mount probes for it and releases it on unmount
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(|e| FxError::Gpu(format!("Failed to create surface: {}", e)))?;

        Ok((instance, surface, width, height))
    }

    /// Create the wgpu instance and surface from canvas (non-WASM stub)
    #[cfg(not(target_arch = "wasm32"))]
    fn create_surface(
        _canvas: web_sys::HtmlCanvasElement,
    ) -> Result<(wgpu::Instance, wgpu::Surface<'static>, u32, u32), FxError> {
        Err(FxError::Unsupported(
            "AuroraRenderer only supports WASM targets".to_string(),
        ))
    }

    /// Current surface size in device pixels
    pub fn size(&self) -> (u32, u32) {
        (self.surface_config.width, self.surface_config.height)
    }

    /// Resize the surface (device pixels) and return the size actually used
    ///
    /// Sizes above the device limit are scaled down to fit. Zero or
    /// unchanged sizes leave the surface as is.
    pub fn resize(&mut self, width: u32, height: u32) -> (u32, u32) {
        if width == 0 || height == 0 {
            return self.size();
        }
        let (width, height) = fit_surface_size(width, height, self.max_dimension);
        if (width, height) == self.size() {
            return self.size();
        }

        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
        (width, height)
    }

    /// Upload `uniforms` and draw one frame
    pub fn render(&mut self, uniforms: &AuroraUniforms) -> Result<(), FxError> {
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[*uniforms]));

        let output = self.get_surface_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Aurora Encoder"),
            });

        render_aurora_pass(&mut encoder, &self.pipeline, &self.bind_group, &view);

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get surface texture with error handling
    fn get_surface_texture(&mut self) -> Result<wgpu::SurfaceTexture, FxError> {
        match self.surface.get_current_texture() {
            Ok(texture) => Ok(texture),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.surface_config);
                Err(FxError::FrameSkipped)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                Err(FxError::Gpu("Out of GPU memory".to_string()))
            }
            Err(wgpu::SurfaceError::Timeout) => Err(FxError::FrameSkipped),
        }
    }
}

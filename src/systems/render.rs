//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Line pipeline
//! - Frame presentation

use std::sync::Arc;
use winit::window::Window;
use hyperwire_render::{
    context::{ContextError, RenderContext},
    pipeline::{to_wgpu_color, LinePipeline},
    LineBatch,
};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    line_pipeline: LinePipeline,
}

impl RenderSystem {
    /// Create render system for a window
    pub fn new(window: Arc<Window>, vsync: bool) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let line_pipeline = LinePipeline::new(&context.device, context.config.format);
        line_pipeline.update_screen(&context.queue, context.config.width, context.config.height);

        log::info!(
            "Render surface {}x{} ({:?})",
            context.config.width,
            context.config.height,
            context.config.format
        );

        Ok(Self {
            context,
            line_pipeline,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.line_pipeline.update_screen(
            &self.context.queue,
            self.context.config.width,
            self.context.config.height,
        );
    }

    /// Reconfigure the surface after it was lost
    pub fn recover(&mut self) {
        log::warn!("Surface lost, reconfiguring");
        self.context.reconfigure();
    }

    /// Upload a frame's lines and present them
    pub fn render_frame(&mut self, batch: &LineBatch) -> Result<(), RenderError> {
        self.line_pipeline
            .upload_lines(&self.context.device, &self.context.queue, batch);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Create command encoder
        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.line_pipeline
            .render(&mut encoder, &view, to_wgpu_color(batch.clear_color));

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.config.width, self.context.config.height)
    }
}

//=========================================================================
// Presenter
//=========================================================================
//
// Owns the GPU side of the window: a wgpu surface, an egui context fed
// by egui-winit, and the egui-wgpu renderer.
//
// Per frame:
// ```text
//   acquire surface texture
//     → egui pass: paint Batch on the background layer
//     → tessellate → upload textures and buffers
//     → render pass (clear + egui primitives) → present
// ```
//
// Lost or outdated surfaces are reconfigured and the frame is retried on
// the next redraw. A zero-sized window (minimized) skips the frame.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::sync::Arc;

//=== External Crates =====================================================

use egui::{LayerId, ViewportId};
use egui_wgpu::{Renderer, ScreenDescriptor};
use log::{debug, info, warn};
use winit::{event::WindowEvent, window::Window};

//=== Internal Dependencies ===============================================

use super::batch::Batch;
use super::paint::paint_batch;
use crate::config::Color;
use crate::core::PlatformError;

//=== Presenter ===========================================================

pub(crate) struct Presenter {
    window: Arc<Window>,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,
    renderer: Renderer,
}

impl Presenter {
    //--- Construction -----------------------------------------------------

    /// Binds a GPU surface and an egui renderer to `window`.
    ///
    /// Blocks until the adapter and device are ready.
    pub(crate) fn new(window: Arc<Window>) -> Result<Self, PlatformError> {
        futures::executor::block_on(Self::init(window))
    }

    async fn init(window: Arc<Window>) -> Result<Self, PlatformError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .map_err(|e| PlatformError::Surface(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await
            .ok_or_else(|| PlatformError::Graphics("no adapter can draw to this window".into()))?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("noughts_crosses"),
                    ..Default::default()
                },
                None,
            )
            .await
            .map_err(|e| PlatformError::Graphics(e.to_string()))?;

        info!(target: "platform", "Using adapter: {}", adapter.get_info().name);

        // egui-wgpu expects a non-sRGB framebuffer.
        let capabilities = surface.get_capabilities(&adapter);
        let format = capabilities
            .formats
            .iter()
            .copied()
            .find(|format| !format.is_srgb())
            .or_else(|| capabilities.formats.first().copied())
            .ok_or_else(|| PlatformError::Surface("surface reports no formats".into()))?;

        let size = window.inner_size();
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            desired_maximum_frame_latency: 2,
            alpha_mode: capabilities
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: Vec::new(),
        };
        surface.configure(&device, &surface_config);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            ViewportId::ROOT,
            &*window,
            Some(window.scale_factor() as f32),
            None,
            Some(device.limits().max_texture_dimension_2d as usize),
        );
        let renderer = Renderer::new(&device, format, None, 1, false);

        debug!(target: "platform", "Surface configured: {:?} {}x{}", format, size.width, size.height);

        Ok(Self {
            window,
            egui_ctx,
            egui_state,
            surface,
            device,
            queue,
            surface_config,
            renderer,
        })
    }

    //--- Window Events ----------------------------------------------------

    /// Keeps egui's view of the window (size, scale factor) current.
    pub(crate) fn on_window_event(&mut self, event: &WindowEvent) {
        let _ = self.egui_state.on_window_event(&self.window, event);
    }

    /// Reconfigures the surface for a new drawable size.
    pub(crate) fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        debug!(target: "platform", "Resizing surface to {}x{}", width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    //--- Frame ------------------------------------------------------------

    /// Draws `batch` over `background` and shows it.
    pub(crate) fn present(&mut self, batch: &Batch, background: Color) -> Result<(), PlatformError> {
        let size = self.window.inner_size();
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }

        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                debug!(target: "platform", "Surface lost, reconfiguring");
                self.surface.configure(&self.device, &self.surface_config);
                self.window.request_redraw();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                warn!(target: "platform", "Surface timed out, skipping frame");
                return Ok(());
            }
            Err(e) => return Err(PlatformError::Surface(e.to_string())),
        };

        let raw_input = self.egui_state.take_egui_input(&self.window);
        let output = self.egui_ctx.run(raw_input, |ctx| {
            let painter = ctx.layer_painter(LayerId::background());
            paint_batch(&painter, batch, background, ctx.pixels_per_point());
        });
        self.egui_state
            .handle_platform_output(&self.window, output.platform_output);

        let primitives = self.egui_ctx.tessellate(output.shapes, output.pixels_per_point);
        let screen = ScreenDescriptor {
            size_in_pixels: [self.surface_config.width, self.surface_config.height],
            pixels_per_point: output.pixels_per_point,
        };

        for (id, delta) in &output.textures_delta.set {
            self.renderer.update_texture(&self.device, &self.queue, *id, delta);
        }

        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("frame") });
        let prepared = self.renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &primitives,
            &screen,
        );

        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("board"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                })
                .forget_lifetime();
            self.renderer.render(&mut pass, &primitives, &screen);
        }

        for id in &output.textures_delta.free {
            self.renderer.free_texture(id);
        }

        self.queue
            .submit(prepared.into_iter().chain(std::iter::once(encoder.finish())));
        frame.present();
        Ok(())
    }
}

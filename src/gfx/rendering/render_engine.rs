//! WGPU-based rendering engine for the RayBuilder viewport
//!
//! Owns the surface, device and queue, the depth buffer, the camera uniform
//! and the two viewport pipelines. Each frame uploads a [`DrawList`] and
//! draws its triangle stream followed by its line stream, then hands the
//! encoder to an optional UI overlay callback.

use std::sync::Arc;
use wgpu::{Device, TextureFormat};

use crate::{
    error::EditorError,
    gfx::{
        camera::camera_utils::CameraUniform,
        draw_list::DrawList,
        resources::{
            global_bindings::{GlobalBindings, GlobalUBO},
            texture_resource::TextureResource,
        },
    },
    wgpu_utils::uniform_buffer::VertexStream,
};

use super::{
    pipeline_manager::{PipelineConfig, PipelineManager},
    vertex::ColorVertex,
};

const SOLID_PIPELINE: &str = "Solid";
const WIREFRAME_PIPELINE: &str = "Wireframe";

/// High-level response after a surface error
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigure,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}

impl SurfaceErrorAction {
    pub fn for_error(err: &wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => Self::Reconfigure,
            wgpu::SurfaceError::OutOfMemory => Self::Fatal,
            wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => Self::SkipFrame,
        }
    }
}

/// What happened to a frame handed to [`RenderEngine::render_frame`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    Presented,
    Skipped,
}

/// Core rendering engine managing GPU resources and draw calls
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,
    format: TextureFormat,
    clear_color: wgpu::Color,
    pipeline_manager: PipelineManager,
    global_ubo: GlobalUBO,
    global_bindings: GlobalBindings,
    triangles: VertexStream<ColorVertex>,
    lines: VertexStream<ColorVertex>,
}

impl RenderEngine {
    /// Creates a new render engine for the given window
    ///
    /// # Arguments
    /// * `window` - Window surface target for rendering
    /// * `width` - Initial surface width in pixels
    /// * `height` - Initial surface height in pixels
    /// * `clear_color` - Viewport background
    ///
    /// # Errors
    /// Fails when no surface, adapter or device can be created
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
        clear_color: wgpu::Color,
    ) -> Result<RenderEngine, EditorError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        log::info!("Using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits {
                    max_texture_dimension_2d: 4096,
                    ..wgpu::Limits::downlevel_defaults()
                },
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_capabilities.formats.first().copied())
            .ok_or(EditorError::UnsupportedSurface)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_capabilities
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, "depth_texture");

        let global_ubo = GlobalUBO::new(&device);
        let global_bindings = GlobalBindings::new(&device, &global_ubo);

        let device_handle: Arc<Device> = device.into();
        let queue_handle: Arc<wgpu::Queue> = queue.into();
        let mut pipeline_manager = PipelineManager::new(device_handle.clone());

        pipeline_manager.load_shader("color", include_str!("shader.wgsl"));

        let base = PipelineConfig::default()
            .with_shader("color")
            .with_color_format(format)
            .with_bind_group_layouts(vec![global_bindings.bind_group_layout().clone()]);

        pipeline_manager.register_pipeline(
            SOLID_PIPELINE,
            base.clone()
                .with_label("SOLID")
                .with_cull_mode(None)
                .with_depth(TextureResource::DEPTH_FORMAT, wgpu::CompareFunction::Less),
        );

        // LessEqual keeps wire edges visible on top of coplanar faces.
        pipeline_manager.register_pipeline(
            WIREFRAME_PIPELINE,
            base.with_label("WIREFRAME")
                .with_cull_mode(None)
                .with_primitive_topology(wgpu::PrimitiveTopology::LineList)
                .with_depth(
                    TextureResource::DEPTH_FORMAT,
                    wgpu::CompareFunction::LessEqual,
                ),
        );

        pipeline_manager.create_all_pipelines()?;

        Ok(RenderEngine {
            device: device_handle,
            config,
            format,
            surface,
            queue: queue_handle,
            depth_texture,
            clear_color,
            pipeline_manager,
            global_bindings,
            global_ubo,
            triangles: VertexStream::new("Triangle Stream"),
            lines: VertexStream::new("Line Stream"),
        })
    }

    /// Renders one frame of `draw_list` with an optional UI overlay
    ///
    /// # Arguments
    /// * `draw_list` - Geometry recorded for this frame
    /// * `ui_callback` - Optional function that renders UI elements
    ///
    /// # Errors
    /// Returns [`EditorError::OutOfMemory`] when the surface cannot allocate
    /// a frame; every other surface error skips the frame.
    pub fn render_frame<F>(
        &mut self,
        draw_list: &DrawList,
        ui_callback: Option<F>,
    ) -> Result<FrameOutcome, EditorError>
    where
        F: FnOnce(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView),
    {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(err) => {
                return match SurfaceErrorAction::for_error(&err) {
                    SurfaceErrorAction::Reconfigure => {
                        log::warn!("Surface {err}; reconfiguring");
                        self.surface.configure(&self.device, &self.config);
                        Ok(FrameOutcome::Skipped)
                    }
                    SurfaceErrorAction::SkipFrame => {
                        log::warn!("Surface {err}; skipping frame");
                        Ok(FrameOutcome::Skipped)
                    }
                    SurfaceErrorAction::Fatal => Err(EditorError::OutOfMemory),
                };
            }
        };

        self.triangles
            .upload(&self.device, &self.queue, draw_list.triangle_vertices());
        self.lines
            .upload(&self.device, &self.queue, draw_list.line_vertices());

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_bind_group(0, self.global_bindings.bind_group(), &[]);

            let passes = [
                (SOLID_PIPELINE, &self.triangles),
                (WIREFRAME_PIPELINE, &self.lines),
            ];
            for (name, stream) in passes {
                let (Some(pipeline), Some(slice)) =
                    (self.pipeline_manager.get_pipeline(name), stream.slice())
                else {
                    continue;
                };
                render_pass.set_pipeline(pipeline);
                render_pass.set_vertex_buffer(0, slice);
                render_pass.draw(0..stream.len(), 0..1);
            }
        }

        if let Some(ui_callback) = ui_callback {
            ui_callback(
                &self.device,
                &self.queue,
                &mut encoder,
                &surface_texture_view,
            );
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        Ok(FrameOutcome::Presented)
    }

    /// Uploads the camera uniform for the next frame
    pub fn update(&mut self, camera_uniform: CameraUniform) {
        self.global_ubo.update_content(&self.queue, camera_uniform);
    }

    /// Resizes the surface and recreates the depth buffer
    ///
    /// Zero-sized requests (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);

        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "depth_texture");
    }

    /// Returns current surface dimensions
    pub fn get_surface_size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Returns the surface texture format
    ///
    /// Used for creating compatible render targets and UI systems.
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.format
    }
}

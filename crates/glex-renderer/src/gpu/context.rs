use std::sync::Arc;

use winit::window::Window;

use crate::context::{
    ClearBuffers, ClearColor, ContextError, ContextState, DisplayList, GraphicsContext,
    ListRegistry, MatrixMode, Viewport,
};
use crate::matrix::Mat4;
use crate::sphere::Face;

use super::pipeline::{create_depth_texture, ListPipeline};
use super::types::{list_vertices, PhysicalSize, RendererError};
use super::uniforms::{fit_viewport, DrawUniforms};

/// Uploaded display list. Shared with in-flight frames so a list released
/// mid-frame still draws.
struct GpuList {
    vertex_buffer: Option<wgpu::Buffer>,
    vertex_count: u32,
}

struct RecordedDraw {
    list: Arc<GpuList>,
    _uniforms: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    viewport: [f32; 4],
}

/// A render pass in the making. Every clear opens a new one.
struct RecordedPass {
    color_load: wgpu::LoadOp<wgpu::Color>,
    depth_load: wgpu::LoadOp<f32>,
    draws: Vec<RecordedDraw>,
}

struct Frame {
    texture: wgpu::SurfaceTexture,
    view: wgpu::TextureView,
    passes: Vec<RecordedPass>,
}

/// wgpu-backed [`GraphicsContext`] drawing into a window surface.
///
/// State calls work at any time. `clear` and `call_list` are recorded
/// between [`begin_frame`](Self::begin_frame) and
/// [`end_frame`](Self::end_frame) and fail with
/// [`ContextError::NotCurrent`] outside a frame.
pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub surface_config: wgpu::SurfaceConfiguration,
    pub size: PhysicalSize,
    pipeline: ListPipeline,
    depth_texture: wgpu::Texture,
    depth_view: wgpu::TextureView,
    state: ContextState,
    lists: ListRegistry<Arc<GpuList>>,
    frame: Option<Frame>,
}

impl GpuContext {
    /// Initialize wgpu: create instance, surface, adapter, device, and configure
    /// the surface for rendering.
    pub async fn new(window: Arc<Window>) -> Result<Self, RendererError> {
        let inner_size = window.inner_size();
        let width = inner_size.width.max(1);
        let height = inner_size.height.max(1);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await;

        let adapter = match adapter {
            Some(a) => a,
            None => {
                tracing::warn!("No hardware GPU adapter found, trying software fallback");
                instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::LowPower,
                        force_fallback_adapter: true,
                        compatible_surface: Some(&surface),
                    })
                    .await
                    .ok_or(RendererError::AdapterNotFound)?
            }
        };

        let adapter_info = adapter.get_info();
        tracing::info!(
            "GPU adapter: {} ({:?}, {:?})",
            adapter_info.name,
            adapter_info.device_type,
            adapter_info.backend,
        );

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("glex-renderer device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .first()
            .copied()
            .unwrap_or(wgpu::TextureFormat::Bgra8UnormSrgb);
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        tracing::info!("Surface format: {format:?}, alpha mode: {alpha_mode:?}");

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            desired_maximum_frame_latency: 2,
            alpha_mode,
            view_formats: vec![],
        };
        surface.configure(&device, &surface_config);

        let pipeline = ListPipeline::new(&device, format);
        let (depth_texture, depth_view) = create_depth_texture(&device, width, height);

        Ok(Self {
            device,
            queue,
            surface,
            surface_config,
            size: PhysicalSize { width, height },
            pipeline,
            depth_texture,
            depth_view,
            state: ContextState::new(width, height),
            lists: ListRegistry::new(),
            frame: None,
        })
    }

    /// Reconfigure the surface and depth buffer after a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        let width = width.max(1);
        let height = height.max(1);

        self.size = PhysicalSize { width, height };
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
        let (depth_texture, depth_view) = create_depth_texture(&self.device, width, height);
        self.depth_texture = depth_texture;
        self.depth_view = depth_view;
        tracing::debug!(
            width,
            height,
            depth = ?self.depth_texture.size(),
            "Surface resized"
        );
    }

    /// Acquire the next surface texture and start recording.
    ///
    /// A lost or outdated surface is reconfigured and acquired once more.
    pub fn begin_frame(&mut self) -> Result<(), ContextError> {
        if self.frame.is_some() {
            tracing::warn!("begin_frame called with a frame in progress; discarding it");
            self.frame = None;
        }

        let texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.surface_config);
                self.surface
                    .get_current_texture()
                    .map_err(surface_to_context_error)?
            }
            Err(e) => return Err(surface_to_context_error(e)),
        };

        let view = texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.frame = Some(Frame {
            texture,
            view,
            passes: Vec::new(),
        });
        Ok(())
    }

    /// Encode every recorded pass, submit, and present.
    pub fn end_frame(&mut self) -> Result<(), ContextError> {
        let frame = self.frame.take().ok_or(ContextError::NotCurrent)?;

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("glex frame encoder"),
            });

        for recorded in &frame.passes {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("glex pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: recorded.color_load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: recorded.depth_load,
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_pipeline(&self.pipeline.pipeline);
            for draw in &recorded.draws {
                let Some(buffer) = &draw.list.vertex_buffer else {
                    continue;
                };
                let [x, y, w, h] = draw.viewport;
                pass.set_viewport(x, y, w, h, 0.0, 1.0);
                pass.set_bind_group(0, &draw.bind_group, &[]);
                pass.set_vertex_buffer(0, buffer.slice(..));
                pass.draw(0..draw.list.vertex_count, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.texture.present();
        Ok(())
    }

    fn frame_mut(&mut self) -> Result<&mut Frame, ContextError> {
        self.lists.collect_released();
        self.frame.as_mut().ok_or(ContextError::NotCurrent)
    }
}

fn surface_to_context_error(e: wgpu::SurfaceError) -> ContextError {
    match e {
        wgpu::SurfaceError::OutOfMemory => ContextError::OutOfMemory,
        other => ContextError::Surface(other.to_string()),
    }
}

fn to_wgpu_color(c: ClearColor) -> wgpu::Color {
    wgpu::Color {
        r: c.r as f64,
        g: c.g as f64,
        b: c.b as f64,
        a: c.a as f64,
    }
}

impl GraphicsContext for GpuContext {
    fn set_viewport(&mut self, viewport: Viewport) -> Result<(), ContextError> {
        self.lists.collect_released();
        self.state.viewport = viewport;
        Ok(())
    }

    fn viewport(&self) -> Viewport {
        self.state.viewport
    }

    fn load_matrix(&mut self, mode: MatrixMode, matrix: &Mat4) -> Result<(), ContextError> {
        *self.state.matrix_mut(mode) = *matrix;
        Ok(())
    }

    fn matrix(&self, mode: MatrixMode) -> Mat4 {
        *self.state.matrix(mode)
    }

    fn set_clear_color(&mut self, color: ClearColor) -> Result<(), ContextError> {
        self.state.clear_color = color;
        Ok(())
    }

    fn clear(&mut self, buffers: ClearBuffers) -> Result<(), ContextError> {
        let color = to_wgpu_color(self.state.clear_color);
        let frame = self.frame_mut()?;
        frame.passes.push(RecordedPass {
            color_load: if buffers.color {
                wgpu::LoadOp::Clear(color)
            } else {
                wgpu::LoadOp::Load
            },
            depth_load: if buffers.depth {
                wgpu::LoadOp::Clear(crate::context::DEFAULT_CLEAR_DEPTH)
            } else {
                wgpu::LoadOp::Load
            },
            draws: Vec::new(),
        });
        Ok(())
    }

    fn create_list(&mut self, faces: &[Face]) -> Result<DisplayList, ContextError> {
        use wgpu::util::DeviceExt;

        self.lists.collect_released();
        let vertices = list_vertices(faces);
        let vertex_buffer = (!vertices.is_empty()).then(|| {
            self.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("display list vertices"),
                    contents: bytemuck::cast_slice(&vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                })
        });

        let list = self.lists.insert(
            Arc::new(GpuList {
                vertex_buffer,
                vertex_count: vertices.len() as u32,
            }),
            faces.len(),
        );
        tracing::debug!(
            list = list.id().index(),
            vertices = vertices.len(),
            "uploaded display list"
        );
        Ok(list)
    }

    fn call_list(&mut self, list: &DisplayList) -> Result<(), ContextError> {
        if self.frame.is_none() {
            return Err(ContextError::NotCurrent);
        }
        self.lists.collect_released();
        let gpu_list = Arc::clone(self.lists.get(list)?);

        let Some(fitted) = fit_viewport(self.state.viewport, self.size) else {
            tracing::trace!("viewport outside the surface, skipping draw");
            return Ok(());
        };
        let uniforms = DrawUniforms::new(
            &self.state.projection,
            &self.state.model_view,
            &fitted.correction,
        );
        let (buffer, bind_group) = self.pipeline.draw_bindings(&self.device, &uniforms);
        let draw = RecordedDraw {
            list: gpu_list,
            _uniforms: buffer,
            bind_group,
            viewport: fitted.rect,
        };

        let frame = self.frame_mut()?;
        if frame.passes.is_empty() {
            frame.passes.push(RecordedPass {
                color_load: wgpu::LoadOp::Load,
                depth_load: wgpu::LoadOp::Load,
                draws: Vec::new(),
            });
        }
        if let Some(pass) = frame.passes.last_mut() {
            pass.draws.push(draw);
        }
        Ok(())
    }
}

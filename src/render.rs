use crate::constants::*;
use glam::Vec3;
use skyrun_core::{Camera, CubeFaces, SceneSnapshot};
use web_sys as web;

mod boxes;
mod helpers;
mod skybox;
mod targets;
use boxes::{create_box_resources, BoxInstanceRaw, BoxResources, SceneUniforms};
use skybox::{create_skybox_resources, SkyUniforms, SkyboxResources};
use targets::DepthTarget;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static SKYBOX_WGSL: &str = include_str!("../shaders/skybox.wgsl");

/// Direction from the origin towards a light placed at `pos`, plus intensity.
fn light_vec4(pos: [f32; 3], intensity: f32) -> [f32; 4] {
    let d = Vec3::from_array(pos).normalize_or_zero();
    [d.x, d.y, d.z, intensity]
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    boxes: BoxResources,
    skybox: SkyboxResources,
    depth: DepthTarget,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    overflow_logged: bool,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, sky: &CubeFaces) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} {:?}", width, height, format);

        let boxes = create_box_resources(&device, format, MAX_BOX_INSTANCES);
        let skybox = create_skybox_resources(&device, &queue, format, sky);
        let depth = DepthTarget::new(&device, width, height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            boxes,
            skybox,
            depth,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_RGB[0],
                g: CLEAR_RGB[1],
                b: CLEAR_RGB[2],
                a: 1.0,
            },
            overflow_logged: false,
        })
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    pub fn render(&mut self, camera: &Camera, scene: &SceneSnapshot) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                self.surface.get_current_texture()?
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let sky = SkyUniforms {
            inv_view_proj: camera.sky_inv_view_proj().to_cols_array_2d(),
        };
        self.queue
            .write_buffer(&self.skybox.uniform_buffer, 0, bytemuck::bytes_of(&sky));
        let su = SceneUniforms {
            view_proj: camera.view_proj().to_cols_array_2d(),
            ambient: [AMBIENT_RGB[0], AMBIENT_RGB[1], AMBIENT_RGB[2], 1.0],
            key_light: light_vec4(KEY_LIGHT_POS, KEY_LIGHT_INTENSITY),
            fill_light: light_vec4(FILL_LIGHT_POS, FILL_LIGHT_INTENSITY),
        };
        self.queue
            .write_buffer(&self.boxes.uniform_buffer, 0, bytemuck::bytes_of(&su));

        let overflowing = scene.len() > self.boxes.max_instances;
        if overflowing && !self.overflow_logged {
            log::warn!(
                "[gpu] {} boxes exceed capacity {}, extra boxes not drawn",
                scene.len(),
                self.boxes.max_instances
            );
        }
        self.overflow_logged = overflowing;
        let instances: Vec<BoxInstanceRaw> = scene
            .boxes
            .iter()
            .take(self.boxes.max_instances)
            .map(|b| BoxInstanceRaw {
                center: b.center.to_array(),
                half_extents: b.half_extents.to_array(),
                color: b.color,
            })
            .collect();
        if !instances.is_empty() {
            self.queue.write_buffer(
                &self.boxes.instance_vb,
                0,
                bytemuck::cast_slice(&instances),
            );
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.skybox.pipeline);
            rpass.set_bind_group(0, &self.skybox.bind_group, &[]);
            rpass.draw(0..3, 0..1);

            if !instances.is_empty() {
                rpass.set_pipeline(&self.boxes.pipeline);
                rpass.set_bind_group(0, &self.boxes.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.boxes.cube_vb.slice(..));
                rpass.set_vertex_buffer(1, self.boxes.instance_vb.slice(..));
                rpass.draw(0..self.boxes.cube_vertex_count, 0..instances.len() as u32);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

//! Forward renderer for the composed scene.
//!
//! Two pipelines share one shader: filled triangles for shaded objects and
//! a line list for wireframe edges and the ground grid. Meshes are uploaded
//! once; each frame only the camera uniform and the instance buffer change.

pub mod frame_plan;
mod gpu_mesh;
pub mod lighting;

use std::collections::HashMap;

pub use frame_plan::{Batch, DrawStyle, FramePlan, Geometry, InstanceRaw, Overlays};

use self::gpu_mesh::GpuMesh;
use self::lighting::FrameUniforms;
use crate::camera::CameraUniform;
use crate::gpu::dynamic_buffer::DynamicBuffer;
use crate::gpu::pipeline_helpers;
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::{self, Texture};
use crate::mesh;
use crate::options::{Options, TextureOptions};
use crate::scene::{SceneObjects, TextureSlot};

/// A sampled texture and the bind group exposing it at group 1.
struct BoundTexture {
    _texture: Texture,
    bind_group: wgpu::BindGroup,
}

impl BoundTexture {
    fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        texture: Texture,
    ) -> Self {
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Surface Texture Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });
        Self {
            _texture: texture,
            bind_group,
        }
    }
}

fn create_pipeline(
    context: &RenderContext,
    label: &str,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    topology: mesh::Topology,
) -> wgpu::RenderPipeline {
    context
        .device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[mesh::vertex_buffer_layout(), InstanceRaw::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &pipeline_helpers::color_target(context.format()),
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: topology.to_wgpu(),
                // The sky sphere is seen from inside.
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(pipeline_helpers::depth_stencil_state()),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
}

/// Owns every GPU resource needed to draw the scene.
pub struct SceneRenderer {
    solid_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    uniforms: FrameUniforms,
    texture_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    white: BoundTexture,
    textures: HashMap<TextureSlot, BoundTexture>,
    meshes: Vec<GpuMesh>,
    grid: GpuMesh,
    grid_half_lines: u32,
    instances: DynamicBuffer,
    depth: Texture,
    clear_color: wgpu::Color,
}

impl SceneRenderer {
    /// Build pipelines, upload every object mesh and load the configured
    /// textures. Unloadable textures are logged and left unbound.
    #[must_use]
    pub fn new(context: &RenderContext, objects: &SceneObjects, options: &Options) -> Self {
        let device = &context.device;
        let shader =
            device.create_shader_module(wgpu::include_wgsl!("../../assets/shaders/scene.wgsl"));

        let uniforms = FrameUniforms::new(device, &options.lighting);
        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Surface Texture Layout"),
            entries: &[
                pipeline_helpers::texture_2d(0),
                pipeline_helpers::filtering_sampler(1),
            ],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&uniforms.layout, &texture_layout],
            push_constant_ranges: &[],
        });
        let solid_pipeline = create_pipeline(
            context,
            "Solid Pipeline",
            &shader,
            &pipeline_layout,
            mesh::Topology::TriangleList,
        );
        let line_pipeline = create_pipeline(
            context,
            "Line Pipeline",
            &shader,
            &pipeline_layout,
            mesh::Topology::LineList,
        );

        let sampler = texture::surface_sampler(device);
        let white = BoundTexture::new(
            device,
            &texture_layout,
            &sampler,
            Texture::white(device, &context.queue),
        );

        let meshes = objects
            .iter()
            .map(|(id, object)| {
                GpuMesh::upload(device, &format!("{id:?}"), object.primitive.mesh())
            })
            .collect();
        let grid_half_lines = options.display.grid_half_lines;
        let grid = GpuMesh::upload(device, "Grid", &mesh::grid(grid_half_lines));

        let (width, height) = context.size();
        let mut renderer = Self {
            solid_pipeline,
            line_pipeline,
            uniforms,
            texture_layout,
            sampler,
            white,
            textures: HashMap::new(),
            meshes,
            grid,
            grid_half_lines,
            instances: DynamicBuffer::new(
                device,
                "Instance Buffer",
                std::mem::size_of::<InstanceRaw>() * 16,
                wgpu::BufferUsages::VERTEX,
            ),
            depth: Texture::depth(device, width, height),
            clear_color: clear_color(options.display.clear_color),
        };
        renderer.load_textures(context, &options.textures);
        renderer
    }

    /// (Re)load every configured texture slot.
    pub fn load_textures(&mut self, context: &RenderContext, textures: &TextureOptions) {
        self.textures.clear();
        let slots = [
            (TextureSlot::Sky, textures.sky_path()),
            (TextureSlot::Earth, textures.earth_path()),
            (TextureSlot::Sun, textures.sun_path()),
        ];
        for (slot, path) in slots {
            let Some(path) = path else {
                continue;
            };
            match Texture::from_path(&context.device, &context.queue, &path) {
                Ok(texture) => {
                    log::info!("loaded {slot:?} texture from {}", path.display());
                    let bound = BoundTexture::new(
                        &context.device,
                        &self.texture_layout,
                        &self.sampler,
                        texture,
                    );
                    let _ = self.textures.insert(slot, bound);
                }
                Err(e) => log::warn!(
                    "{slot:?} texture {} unavailable ({e}); using flat color",
                    path.display()
                ),
            }
        }
    }

    /// Whether `slot` has a loaded image.
    #[must_use]
    pub fn has_texture(&self, slot: TextureSlot) -> bool {
        self.textures.contains_key(&slot)
    }

    /// Apply display and lighting options that affect GPU state.
    pub fn apply_options(&mut self, context: &RenderContext, options: &Options) {
        self.uniforms.write_light(&context.queue, &options.lighting);
        self.clear_color = clear_color(options.display.clear_color);
        if options.display.grid_half_lines != self.grid_half_lines {
            self.grid_half_lines = options.display.grid_half_lines;
            self.grid = GpuMesh::upload(
                &context.device,
                "Grid",
                &mesh::grid(self.grid_half_lines),
            );
        }
    }

    /// Recreate the depth attachment for a new surface size.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth = Texture::depth(device, width, height);
    }

    /// Record and submit one frame into `target`.
    pub fn render(
        &mut self,
        context: &RenderContext,
        target: &wgpu::TextureView,
        camera: &CameraUniform,
        plan: &FramePlan,
    ) {
        self.uniforms.write_camera(&context.queue, camera);
        let _ = self
            .instances
            .write(&context.device, &context.queue, &plan.instances);

        let mut encoder = context.create_encoder();
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    depth_slice: None,
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

            pass.set_bind_group(0, &self.uniforms.bind_group, &[]);
            pass.set_vertex_buffer(1, self.instances.buffer().slice(..));
            for batch in &plan.batches {
                self.draw_batch(&mut pass, batch);
            }
        }
        context.submit(encoder);
    }

    fn draw_batch(&self, pass: &mut wgpu::RenderPass<'_>, batch: &Batch) {
        let mesh = match batch.geometry {
            Geometry::Object(id) => &self.meshes[id.index()],
            Geometry::Grid => &self.grid,
        };
        let (pipeline, indices) = match batch.style {
            DrawStyle::Solid => match &mesh.triangles {
                Some(triangles) => (&self.solid_pipeline, triangles),
                None => return,
            },
            DrawStyle::Lines => (&self.line_pipeline, &mesh.lines),
        };
        if indices.count == 0 {
            return;
        }
        let texture = batch
            .texture
            .and_then(|slot| self.textures.get(&slot))
            .unwrap_or(&self.white);

        pass.set_pipeline(pipeline);
        pass.set_bind_group(1, &texture.bind_group, &[]);
        pass.set_vertex_buffer(0, mesh.vertices.buffer().slice(..));
        pass.set_index_buffer(indices.buffer.buffer().slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..indices.count, 0, batch.instance..batch.instance + 1);
    }
}

fn clear_color([r, g, b]: [f32; 3]) -> wgpu::Color {
    wgpu::Color {
        r: f64::from(r),
        g: f64::from(g),
        b: f64::from(b),
        a: 1.0,
    }
}

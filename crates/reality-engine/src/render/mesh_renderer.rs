use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::mesh::{Mesh, Vertex2D};
use crate::paint::Color;

use super::shader::{WgslShader, FRAGMENT_ENTRY, VERTEX_ENTRY};
use super::{RenderCtx, RenderTarget};

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ColorUniform {
    rgba: [f32; 4],
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex2D>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}

fn color_ubo_min_binding_size() -> Option<std::num::NonZeroU64> {
    std::num::NonZeroU64::new(std::mem::size_of::<ColorUniform>() as u64)
}

/// New vertex-buffer capacity, or `None` when the current buffer still fits.
///
/// Grows to the next power of two, never below 4 vertices.
fn grown_vertex_capacity(current: Option<usize>, required: usize) -> Option<usize> {
    match current {
        Some(capacity) if required <= capacity => None,
        _ => Some(required.next_power_of_two().max(4)),
    }
}

/// Whether the index buffer must be rebuilt for `indices`.
fn index_upload_needed(uploaded: Option<&[u16]>, indices: &[u16]) -> bool {
    uploaded != Some(indices)
}

/// Draws one indexed mesh in a single flat color.
///
/// GPU resources are created lazily on first use and rebuilt only when the
/// surface format (pipeline) or index list (index buffer) changes. Vertices and
/// the color uniform are rewritten every frame.
pub struct MeshRenderer {
    shader: WgslShader,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    color_ubo: Option<wgpu::Buffer>,

    vbo: Option<wgpu::Buffer>,
    vertex_capacity: usize,

    ibo: Option<wgpu::Buffer>,
    uploaded_indices: Vec<u16>,
}

impl MeshRenderer {
    pub fn new(shader: WgslShader) -> Self {
        Self {
            shader,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            color_ubo: None,
            vbo: None,
            vertex_capacity: 0,
            ibo: None,
            uploaded_indices: Vec::new(),
        }
    }

    /// Uploads `mesh` and `color`, then records one indexed draw into `target`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        mesh: &Mesh,
        color: Color,
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        self.ensure_vertex_capacity(ctx, mesh.vertices().len());
        self.ensure_index_buffer(ctx, mesh.indices());

        let Some(color_ubo) = self.color_ubo.as_ref() else { return };
        let Some(vbo) = self.vbo.as_ref() else { return };

        let uniform = ColorUniform { rgba: color.to_array() };
        ctx.queue.write_buffer(color_ubo, 0, bytemuck::bytes_of(&uniform));
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(mesh.vertices()));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(ibo) = self.ibo.as_ref() else { return };

        let vertex_bytes = std::mem::size_of_val(mesh.vertices()) as u64;

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("reality mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..vertex_bytes));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..self.uploaded_indices.len() as u32, 0, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = self.shader.create_module(ctx.device);

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("reality mesh bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: color_ubo_min_binding_size(),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("reality mesh pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("reality mesh pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(VERTEX_ENTRY),
                compilation_options: Default::default(),
                buffers: &[vertex_layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(FRAGMENT_ENTRY),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!(
            "mesh pipeline built for {:?} using {}",
            ctx.surface_format,
            self.shader.label()
        );

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.color_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.color_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let color_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("reality color ubo"),
            size: std::mem::size_of::<ColorUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("reality mesh bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: color_ubo.as_entire_binding(),
            }],
        });

        self.color_ubo = Some(color_ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        let current = self.vbo.as_ref().map(|_| self.vertex_capacity);
        let Some(capacity) = grown_vertex_capacity(current, required) else { return };

        self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("reality mesh vbo"),
            size: (capacity * std::mem::size_of::<Vertex2D>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vertex_capacity = capacity;
    }

    fn ensure_index_buffer(&mut self, ctx: &RenderCtx<'_>, indices: &[u16]) {
        let uploaded = self.ibo.as_ref().map(|_| self.uploaded_indices.as_slice());
        if !index_upload_needed(uploaded, indices) {
            return;
        }

        // create_buffer_init pads to COPY_BUFFER_ALIGNMENT, so odd u16 counts are fine.
        self.ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("reality mesh ibo"),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        }));
        self.uploaded_indices = indices.to_vec();
    }
}

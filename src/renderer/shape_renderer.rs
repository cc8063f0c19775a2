//! GPU side of [`Draw`]: uploads a frame's batch and draws it.

use crate::context::WgpuContext;
use crate::core::buffer::{DynamicVertexBuffer, RawUniformBuffer};
use crate::core::pipeline::{shader_module, PipelineBuilder};
use crate::core::render_states::BlendState;
use crate::core::vertex::Vertex2D;
use crate::renderer::draw::Draw;
use crate::renderer::viewer::CameraUniform;
use glam::Mat4;

/// Renders [`Draw`] batches with one pipeline per topology.
pub struct ShapeRenderer {
    fill_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    camera_buffer: RawUniformBuffer,
    camera_bind_group: wgpu::BindGroup,
    triangles: DynamicVertexBuffer,
    lines: DynamicVertexBuffer,
}

impl ShapeRenderer {
    /// Create the pipelines for a surface of the given `format`.
    pub fn new(ctx: &WgpuContext, format: wgpu::TextureFormat) -> Self {
        let shader = shader_module(ctx, "shape shader", include_str!("../shaders/shape.wgsl"));

        let camera_bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("shape camera bind group layout"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    }],
                });

        let pipeline = |label: &'static str, topology: wgpu::PrimitiveTopology| {
            PipelineBuilder::new(ctx, &shader)
                .label(label)
                .vertex_layout(Vertex2D::layout())
                .bind_group_layout(&camera_bind_group_layout)
                .color_format(format)
                .blend(BlendState::Alpha)
                .topology(topology)
                .build()
        };
        let fill_pipeline = pipeline("shape fill pipeline", wgpu::PrimitiveTopology::TriangleList);
        let line_pipeline = pipeline("shape line pipeline", wgpu::PrimitiveTopology::LineList);

        let camera_buffer = RawUniformBuffer::new(
            ctx,
            std::mem::size_of::<CameraUniform>() as u64,
            Some("shape camera uniform"),
        );

        let camera_bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("shape camera bind group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.buffer().as_entire_binding(),
            }],
        });

        let vertex_bytes = 1024 * std::mem::size_of::<Vertex2D>() as u64;
        Self {
            fill_pipeline,
            line_pipeline,
            camera_buffer,
            camera_bind_group,
            triangles: DynamicVertexBuffer::new(ctx, vertex_bytes, Some("shape triangles")),
            lines: DynamicVertexBuffer::new(ctx, vertex_bytes, Some("shape lines")),
        }
    }

    /// Upload the camera and the batch. Call before [`render`](Self::render).
    pub fn prepare(&mut self, ctx: &WgpuContext, view_proj: Mat4, draw: &Draw) {
        self.camera_buffer.write(ctx, &CameraUniform::new(view_proj));
        self.triangles.write(ctx, draw.triangles());
        self.lines.write(ctx, draw.lines());
    }

    /// Draw the prepared batch: fills first, lines on top.
    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_bind_group(0, &self.camera_bind_group, &[]);

        for (pipeline, buffer) in [
            (&self.fill_pipeline, &self.triangles),
            (&self.line_pipeline, &self.lines),
        ] {
            if buffer.count() == 0 {
                continue;
            }
            pass.set_pipeline(pipeline);
            pass.set_vertex_buffer(0, buffer.buffer().slice(..));
            pass.draw(0..buffer.count(), 0..1);
        }
    }
}

//! Render pipelines for flat 2D geometry
//!
//! A shader module is compiled once with [`shader_module`] and shared by
//! every pipeline built from it; pipelines differ only in topology and
//! blending.

use crate::context::WgpuContext;
use crate::core::render_states::BlendState;

const VERTEX_ENTRY: &str = "vs_main";
const FRAGMENT_ENTRY: &str = "fs_main";

/// Compile WGSL `source`. It must define `vs_main` and `fs_main`.
pub fn shader_module(ctx: &WgpuContext, label: &str, source: &str) -> wgpu::ShaderModule {
    ctx.device
        .create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        })
}

/// Builds a depthless, unculled pipeline over a compiled shader.
pub struct PipelineBuilder<'a> {
    ctx: &'a WgpuContext,
    shader: &'a wgpu::ShaderModule,
    label: Option<&'a str>,
    vertex_layouts: Vec<wgpu::VertexBufferLayout<'a>>,
    bind_group_layouts: Vec<&'a wgpu::BindGroupLayout>,
    color_format: wgpu::TextureFormat,
    blend: BlendState,
    topology: wgpu::PrimitiveTopology,
}

impl<'a> PipelineBuilder<'a> {
    pub fn new(ctx: &'a WgpuContext, shader: &'a wgpu::ShaderModule) -> Self {
        Self {
            ctx,
            shader,
            label: None,
            vertex_layouts: Vec::new(),
            bind_group_layouts: Vec::new(),
            color_format: wgpu::TextureFormat::Bgra8UnormSrgb,
            blend: BlendState::Opaque,
            topology: wgpu::PrimitiveTopology::TriangleList,
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Add a vertex buffer layout, bound to the next slot.
    pub fn vertex_layout(mut self, layout: wgpu::VertexBufferLayout<'a>) -> Self {
        self.vertex_layouts.push(layout);
        self
    }

    /// Add a bind group layout, bound to the next group index.
    pub fn bind_group_layout(mut self, layout: &'a wgpu::BindGroupLayout) -> Self {
        self.bind_group_layouts.push(layout);
        self
    }

    /// Format of the surface the pipeline draws into.
    pub fn color_format(mut self, format: wgpu::TextureFormat) -> Self {
        self.color_format = format;
        self
    }

    pub fn blend(mut self, blend: BlendState) -> Self {
        self.blend = blend;
        self
    }

    pub fn topology(mut self, topology: wgpu::PrimitiveTopology) -> Self {
        self.topology = topology;
        self
    }

    pub fn build(self) -> wgpu::RenderPipeline {
        let device = &self.ctx.device;

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: self.label,
            bind_group_layouts: &self.bind_group_layouts,
            immediate_size: 0,
        });

        let targets = [Some(wgpu::ColorTargetState {
            format: self.color_format,
            blend: self.blend.to_wgpu(),
            write_mask: wgpu::ColorWrites::ALL,
        })];

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: self.label,
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: self.shader,
                entry_point: Some(VERTEX_ENTRY),
                buffers: &self.vertex_layouts,
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: self.shader,
                entry_point: Some(FRAGMENT_ENTRY),
                targets: &targets,
                compilation_options: Default::default(),
            }),
            // Mirrored model matrices flip winding, so nothing is culled.
            primitive: wgpu::PrimitiveState {
                topology: self.topology,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        })
    }
}

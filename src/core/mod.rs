//! Core rendering abstractions
//!
//! Thin wrappers over the wgpu primitives the 2D renderer needs.

pub mod buffer;
pub mod pipeline;
pub mod render_states;
pub mod render_target;
pub mod vertex;

pub use buffer::{DynamicVertexBuffer, RawUniformBuffer};
pub use pipeline::{shader_module, PipelineBuilder};
pub use render_states::{BlendState, ClearState};
pub use render_target::RenderTarget;
pub use vertex::Vertex2D;

//! Pencil Physics
//!
//! A 2D sandbox: sketch static polylines with the mouse, spawn circles and
//! boxes from the keyboard, and drag bodies around with a spring joint.
//! Rigid-body dynamics come from rapier2d; drawing goes through wgpu.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! 1. **context** - Core wgpu wrapper (Device, Queue)
//! 2. **core** - GPU primitives (buffers, pipelines, render targets)
//! 3. **renderer** - 2D camera, draw batches and the shape renderer
//! 4. **physics** - rapier2d world and the mouse joint
//! 5. **shapes** - Circle, box and polyline wrappers around rigid bodies
//! 6. **sandbox** - The sandbox state and its operations
//! 7. **ui** - Mouse and keyboard control (feature = "window")
//! 8. **window** - Window management with winit (feature = "window")
//! 9. **engine** - The paced game loop (feature = "engine")

pub mod context;
pub mod core;
pub mod error;
pub mod physics;
pub mod renderer;
pub mod sandbox;
pub mod shapes;

#[cfg(feature = "window")]
pub mod ui;

#[cfg(feature = "window")]
pub mod window;

#[cfg(feature = "engine")]
pub mod engine;

// Re-export commonly used types
pub use context::WgpuContext;

pub use core::{
    BlendState, ClearState, DynamicVertexBuffer, PipelineBuilder, RawUniformBuffer, RenderTarget,
    Vertex2D,
};

pub use error::{Result, SandboxError};

pub use physics::{
    BodyHandle, BodyKind, BodyPose, ColliderMaterial, ColliderShape, MouseJoint, MouseJointDef,
    PhysicsConfig, PhysicsWorld,
};

pub use renderer::{Camera2D, CameraUniform, Draw, ShapeRenderer, Viewport};

pub use sandbox::{Palette, PencilPhysics, SandboxConfig};

pub use shapes::{BoxShape, Circle, Polyline, Shape};

#[cfg(feature = "window")]
pub use ui::{Interaction, UiHelper};

#[cfg(feature = "window")]
pub use window::{
    screen_target, Event, FrameInput, FrameOutput, FramePacer, Key, Modifiers, MouseButton,
    Window, WindowSettings,
};

#[cfg(feature = "engine")]
pub use engine::{run_sandbox, GameLoopConfig};

// Re-export glam for convenience
pub use glam;

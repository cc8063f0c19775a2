//! 2D rendering
//!
//! - [`viewer`]: camera framing the world rectangle, screen/world mapping
//! - [`draw`]: CPU batch of circles, rectangles, polylines and axes
//! - [`shape_renderer`]: GPU upload and draw of a batch

pub mod draw;
pub mod shape_renderer;
pub mod viewer;

pub use draw::{Draw, CIRCLE_SEGMENTS};
pub use shape_renderer::ShapeRenderer;
pub use viewer::{Camera2D, CameraUniform, Viewport};

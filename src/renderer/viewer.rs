//! 2D camera and viewport
//!
//! Maps a rectangle of world space onto the viewport and back.

use glam::{Mat4, Vec2};

/// Viewport information, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Viewport at the origin with the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Get the aspect ratio. Degenerate sizes are treated as one pixel.
    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }
}

/// Orthographic camera showing a fixed world rectangle.
///
/// The rectangle is fit into the viewport without distortion: when the
/// aspect ratios differ, extra world space becomes visible along the longer
/// axis, centered on the rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    world_min: Vec2,
    world_max: Vec2,
}

impl Camera2D {
    /// Create a camera framing `[world_min, world_max]`.
    pub fn new(world_min: Vec2, world_max: Vec2) -> Self {
        Self {
            world_min: world_min.min(world_max),
            world_max: world_min.max(world_max),
        }
    }

    /// The framed world rectangle.
    pub fn world_bounds(&self) -> (Vec2, Vec2) {
        (self.world_min, self.world_max)
    }

    /// The world rectangle actually visible in `viewport`.
    pub fn visible_bounds(&self, viewport: Viewport) -> (Vec2, Vec2) {
        let size = self.world_max - self.world_min;
        let center = (self.world_min + self.world_max) * 0.5;
        let aspect = viewport.aspect();

        let half = if aspect > size.x / size.y {
            Vec2::new(size.y * aspect, size.y) * 0.5
        } else {
            Vec2::new(size.x, size.x / aspect) * 0.5
        };

        (center - half, center + half)
    }

    /// Orthographic view-projection matrix for `viewport`.
    pub fn view_projection(&self, viewport: Viewport) -> Mat4 {
        let (lo, hi) = self.visible_bounds(viewport);
        Mat4::orthographic_rh(lo.x, hi.x, lo.y, hi.y, -1.0, 1.0)
    }

    /// Convert a cursor position (pixels, origin top-left, y down) to world
    /// coordinates.
    pub fn screen_to_world(&self, position: (f32, f32), viewport: Viewport) -> Vec2 {
        let (lo, hi) = self.visible_bounds(viewport);
        let u = (position.0 - viewport.x as f32) / viewport.width.max(1) as f32;
        let v = (position.1 - viewport.y as f32) / viewport.height.max(1) as f32;
        Vec2::new(lo.x + u * (hi.x - lo.x), hi.y - v * (hi.y - lo.y))
    }
}

/// Camera uniform data for GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// View-projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new(view_proj: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
        }
    }
}

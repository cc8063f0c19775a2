//! Immediate-mode 2D drawing
//!
//! [`Draw`] collects colored vertices on the CPU. Each primitive takes a
//! model matrix, so shapes can be drawn in their body's local frame and
//! placed with the transform the physics world reports.

use crate::core::vertex::Vertex2D;
use glam::{Mat4, Vec2};

/// Number of triangles used to approximate a filled circle.
pub const CIRCLE_SEGMENTS: u32 = 32;

/// X axis color (red).
pub const AXIS_X_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
/// Y axis color (green).
pub const AXIS_Y_COLOR: [f32; 3] = [0.0, 1.0, 0.0];

/// A batch of filled triangles and line segments for one frame.
#[derive(Debug, Default, Clone)]
pub struct Draw {
    triangles: Vec<Vertex2D>,
    lines: Vec<Vertex2D>,
}

impl Draw {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filled circle of `radius` around `center`, in the frame of `model`.
    pub fn circle(&mut self, model: Mat4, center: Vec2, radius: f32, color: [f32; 3]) {
        let c = transform(model, center);
        let rim = |i: u32| {
            let theta = std::f32::consts::TAU * i as f32 / CIRCLE_SEGMENTS as f32;
            transform(model, center + radius * Vec2::new(theta.cos(), theta.sin()))
        };

        let mut previous = rim(0);
        for i in 1..=CIRCLE_SEGMENTS {
            let next = rim(i);
            self.triangle(c, previous, next, color);
            previous = next;
        }
    }

    /// Filled axis-aligned rectangle of `size` centered on `center`, in the
    /// frame of `model`.
    pub fn rect(&mut self, model: Mat4, center: Vec2, size: Vec2, color: [f32; 3]) {
        let half = size * 0.5;
        let corners = [
            transform(model, center + Vec2::new(-half.x, -half.y)),
            transform(model, center + Vec2::new(half.x, -half.y)),
            transform(model, center + Vec2::new(half.x, half.y)),
            transform(model, center + Vec2::new(-half.x, half.y)),
        ];
        self.triangle(corners[0], corners[1], corners[2], color);
        self.triangle(corners[0], corners[2], corners[3], color);
    }

    /// Open polyline through `vertices`. Fewer than two vertices draws nothing.
    pub fn polyline(&mut self, model: Mat4, vertices: &[Vec2], color: [f32; 3]) {
        for pair in vertices.windows(2) {
            self.segment(transform(model, pair[0]), transform(model, pair[1]), color);
        }
    }

    /// X (red) and Y (green) axes of length `size` at the origin of `model`.
    pub fn axes(&mut self, model: Mat4, size: f32) {
        let origin = transform(model, Vec2::ZERO);
        self.segment(origin, transform(model, Vec2::new(size, 0.0)), AXIS_X_COLOR);
        self.segment(origin, transform(model, Vec2::new(0.0, size)), AXIS_Y_COLOR);
    }

    /// Vertices of the filled primitives, three per triangle.
    pub fn triangles(&self) -> &[Vertex2D] {
        &self.triangles
    }

    /// Vertices of the line primitives, two per segment.
    pub fn lines(&self) -> &[Vertex2D] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty() && self.lines.is_empty()
    }

    /// Drop everything recorded so far, keeping the allocations.
    pub fn clear(&mut self) {
        self.triangles.clear();
        self.lines.clear();
    }

    fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: [f32; 3]) {
        self.triangles.extend([
            Vertex2D::from_rgb(a, color),
            Vertex2D::from_rgb(b, color),
            Vertex2D::from_rgb(c, color),
        ]);
    }

    fn segment(&mut self, a: Vec2, b: Vec2, color: [f32; 3]) {
        self.lines
            .extend([Vertex2D::from_rgb(a, color), Vertex2D::from_rgb(b, color)]);
    }
}

fn transform(model: Mat4, point: Vec2) -> Vec2 {
    model.transform_point3(point.extend(0.0)).truncate()
}

use super::Shape;
use crate::physics::{BodyHandle, BodyKind, ColliderShape, PhysicsWorld};
use glam::Vec2;

/// A disk.
#[derive(Debug, Clone)]
pub struct Circle {
    center: Vec2,
    radius: f32,
    handle: BodyHandle,
}

impl Circle {
    /// Create a body at `center` rotated by `angle`, with a ball collider.
    pub fn new(
        world: &mut PhysicsWorld,
        center: Vec2,
        radius: f32,
        kind: BodyKind,
        angle: f32,
    ) -> Self {
        let handle = world.create_body(kind, center, angle, &ColliderShape::Ball { radius });
        Self {
            center,
            radius,
            handle,
        }
    }

    /// Where the circle was spawned. Use [`Shape::pose`] for where it is now.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Shape for Circle {
    fn handle(&self) -> BodyHandle {
        self.handle
    }

    fn contains_local(&self, local: Vec2) -> bool {
        local.length() <= self.radius
    }
}

//! Shape wrappers
//!
//! Each shape keeps the parameters it was created with and owns the handle of
//! its rigid body. Position and angle always come from the physics world; a
//! shape never caches where its body is.

pub mod box_shape;
pub mod circle;
pub mod polyline;

pub use box_shape::BoxShape;
pub use circle::Circle;
pub use polyline::Polyline;

use crate::physics::{BodyHandle, BodyPose, PhysicsWorld};
use glam::{Mat4, Vec2};

/// A drawable object backed by a single rigid body.
pub trait Shape {
    /// The body and collider this shape owns.
    fn handle(&self) -> BodyHandle;

    /// Containment test in the body's local frame. `local` is already relative
    /// to the body origin and unrotated.
    fn contains_local(&self, _local: Vec2) -> bool {
        false
    }

    /// Current pose of the body, or None if it was removed from the world.
    fn pose(&self, world: &PhysicsWorld) -> Option<BodyPose> {
        world.pose(self.handle())
    }

    /// Model matrix: translation by the body position, then rotation by its
    /// angle.
    fn transformation(&self, world: &PhysicsWorld) -> Option<Mat4> {
        self.pose(world).map(|pose| pose.matrix())
    }

    /// Whether the world-space `point` lies inside the shape.
    fn contains(&self, world: &PhysicsWorld, point: Vec2) -> bool {
        self.pose(world)
            .is_some_and(|pose| self.contains_local(pose.to_local(point)))
    }

    /// Remove the body, its collider and any joint attached to it.
    fn destroy(self, world: &mut PhysicsWorld) -> bool
    where
        Self: Sized,
    {
        world.remove_body(self.handle())
    }
}

//! Spring-like joint pulling a grabbed body toward the cursor.
//!
//! Rapier has no dedicated mouse joint, so one is assembled from a generic
//! impulse joint with every axis free and a position motor on each linear
//! axis. Anchor 1 sits on a fixed reference body at the target point;
//! anchor 2 is the grab point on the dragged body. The acceleration-based
//! motors make the spring independent of the body's mass, parameterized by
//! frequency and damping ratio with the force capped at `max_force`.

use std::f32::consts::TAU;

use glam::Vec2;
use nalgebra::Point2;
use rapier2d::dynamics::{
    GenericJointBuilder, ImpulseJointHandle, JointAxesMask, JointAxis, MotorModel,
    RigidBodyHandle,
};

use super::PhysicsWorld;
use crate::error::{Result, SandboxError};

/// Parameters of a mouse joint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseJointDef {
    /// Upper bound on the force the joint applies.
    pub max_force: f32,
    /// Spring frequency in Hz.
    pub frequency_hz: f32,
    /// 0 = undamped, 1 = critically damped.
    pub damping_ratio: f32,
    /// Whether the grabbed body still collides with the reference body.
    pub collide_connected: bool,
}

impl Default for MouseJointDef {
    fn default() -> Self {
        Self {
            max_force: 100.0,
            frequency_hz: 2.0,
            damping_ratio: 0.5,
            collide_connected: true,
        }
    }
}

impl MouseJointDef {
    /// Motor stiffness, `omega^2`.
    pub fn stiffness(&self) -> f32 {
        let omega = TAU * self.frequency_hz;
        omega * omega
    }

    /// Motor damping, `2 * zeta * omega`.
    pub fn damping(&self) -> f32 {
        2.0 * self.damping_ratio * TAU * self.frequency_hz
    }
}

/// A live mouse joint. Dropping it does not remove it from the world; hand it
/// back to [`PhysicsWorld::destroy_mouse_joint`].
#[derive(Debug)]
pub struct MouseJoint {
    handle: ImpulseJointHandle,
    anchor: RigidBodyHandle,
    body: RigidBodyHandle,
    target: Vec2,
}

impl MouseJoint {
    /// The world point the body is pulled toward.
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// The dragged body.
    pub fn body(&self) -> RigidBodyHandle {
        self.body
    }

    /// The fixed reference body.
    pub fn anchor(&self) -> RigidBodyHandle {
        self.anchor
    }
}

impl PhysicsWorld {
    /// Attach `body` to the fixed `anchor` body, pulling the point of `body`
    /// currently under `target` toward `target`.
    pub fn create_mouse_joint(
        &mut self,
        anchor: RigidBodyHandle,
        body: RigidBodyHandle,
        target: Vec2,
        def: &MouseJointDef,
    ) -> Result<MouseJoint> {
        let anchor_pose = self.body_pose(anchor).ok_or(SandboxError::MissingBody)?;
        let body_pose = self.body_pose(body).ok_or(SandboxError::MissingBody)?;

        let local_anchor1 = anchor_pose.to_local(target);
        let local_anchor2 = body_pose.to_local(target);
        let (stiffness, damping) = (def.stiffness(), def.damping());

        let mut builder = GenericJointBuilder::new(JointAxesMask::empty())
            .local_anchor1(Point2::new(local_anchor1.x, local_anchor1.y))
            .local_anchor2(Point2::new(local_anchor2.x, local_anchor2.y))
            .contacts_enabled(def.collide_connected);
        for axis in [JointAxis::LinX, JointAxis::LinY] {
            builder = builder
                .motor_model(axis, MotorModel::AccelerationBased)
                .motor_position(axis, 0.0, stiffness, damping)
                .motor_max_force(axis, def.max_force);
        }

        let handle = self
            .impulse_joints
            .insert(anchor, body, builder.build(), true);

        Ok(MouseJoint {
            handle,
            anchor,
            body,
            target,
        })
    }

    /// Move the joint's target point, waking the dragged body.
    pub fn set_mouse_target(&mut self, joint: &mut MouseJoint, target: Vec2) {
        joint.target = target;

        let Some(anchor_pose) = self.body_pose(joint.anchor) else {
            return;
        };
        let local = anchor_pose.to_local(target);
        if let Some(j) = self.impulse_joints.get_mut(joint.handle, true) {
            j.data.set_local_anchor1(Point2::new(local.x, local.y));
        }
    }

    /// Remove the joint. Returns false if it was already gone, e.g. because
    /// one of its bodies was removed.
    pub fn destroy_mouse_joint(&mut self, joint: MouseJoint) -> bool {
        self.impulse_joints.remove(joint.handle, true).is_some()
    }

    /// Current target of the joint as stored in the simulation, in world space.
    pub fn mouse_joint_anchor(&self, joint: &MouseJoint) -> Option<Vec2> {
        let j = self.impulse_joints.get(joint.handle)?;
        let anchor_pose = self.body_pose(joint.anchor)?;
        let local = j.data.local_anchor1();
        Some(anchor_pose.to_world(Vec2::new(local.x, local.y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{BodyHandle, BodyKind, ColliderShape, PhysicsConfig};

    fn world_with_floor() -> (PhysicsWorld, BodyHandle) {
        let mut world = PhysicsWorld::new(PhysicsConfig::default());
        let floor = world.create_body(
            BodyKind::Static,
            Vec2::ZERO,
            0.0,
            &ColliderShape::Chain {
                vertices: vec![
                    Vec2::new(-8.0, 9.0),
                    Vec2::new(-8.0, 0.0),
                    Vec2::new(8.0, 0.0),
                    Vec2::new(8.0, 9.0),
                ],
            },
        );
        (world, floor)
    }

    fn ball(world: &mut PhysicsWorld, at: Vec2) -> BodyHandle {
        world.create_body(
            BodyKind::Dynamic,
            at,
            0.0,
            &ColliderShape::Ball { radius: 0.5 },
        )
    }

    #[test]
    fn test_default_def() {
        let def = MouseJointDef::default();
        assert_eq!(def.max_force, 100.0);
        assert_eq!(def.frequency_hz, 2.0);
        assert_eq!(def.damping_ratio, 0.5);
        assert!(def.collide_connected);
    }

    #[test]
    fn test_spring_coefficients() {
        let def = MouseJointDef::default();
        let omega = TAU * 2.0;
        assert!((def.stiffness() - omega * omega).abs() < 1e-3);
        assert!((def.damping() - omega).abs() < 1e-4);
    }

    #[test]
    fn test_create_and_destroy() {
        let (mut world, floor) = world_with_floor();
        let b = ball(&mut world, Vec2::new(0.0, 3.0));

        let joint = world
            .create_mouse_joint(floor.body, b.body, Vec2::new(0.0, 3.0), &MouseJointDef::default())
            .unwrap();
        assert_eq!(world.joint_count(), 1);
        assert_eq!(joint.body(), b.body);
        assert_eq!(joint.anchor(), floor.body);

        assert!(world.destroy_mouse_joint(joint));
        assert_eq!(world.joint_count(), 0);
    }

    #[test]
    fn test_missing_body_is_an_error() {
        let (mut world, floor) = world_with_floor();
        let b = ball(&mut world, Vec2::new(0.0, 3.0));
        world.remove_body(b);

        let result =
            world.create_mouse_joint(floor.body, b.body, Vec2::ZERO, &MouseJointDef::default());
        assert!(matches!(result, Err(SandboxError::MissingBody)));
    }

    #[test]
    fn test_set_target_moves_anchor() {
        let (mut world, floor) = world_with_floor();
        let b = ball(&mut world, Vec2::new(0.0, 3.0));
        let mut joint = world
            .create_mouse_joint(floor.body, b.body, Vec2::new(0.0, 3.0), &MouseJointDef::default())
            .unwrap();

        world.set_mouse_target(&mut joint, Vec2::new(2.0, 5.0));
        assert_eq!(joint.target(), Vec2::new(2.0, 5.0));
        let anchor = world.mouse_joint_anchor(&joint).unwrap();
        assert!((anchor - Vec2::new(2.0, 5.0)).length() < 1e-5);
    }

    #[test]
    fn test_drag_lifts_body_toward_target() {
        let (mut world, floor) = world_with_floor();
        let b = ball(&mut world, Vec2::new(0.0, 0.5));

        // Let it settle on the floor first.
        for _ in 0..30 {
            world.step();
        }
        let start = world.pose(b).unwrap().position;

        let mut joint = world
            .create_mouse_joint(floor.body, b.body, start, &MouseJointDef::default())
            .unwrap();
        world.set_mouse_target(&mut joint, Vec2::new(0.0, 4.0));

        for _ in 0..180 {
            world.step();
        }

        let end = world.pose(b).unwrap().position;
        assert!(
            end.y > start.y + 1.5,
            "Body should have been lifted: start = {}, end = {}",
            start.y,
            end.y
        );
    }

    #[test]
    fn test_removing_body_drops_joint() {
        let (mut world, floor) = world_with_floor();
        let b = ball(&mut world, Vec2::new(0.0, 3.0));
        let joint = world
            .create_mouse_joint(floor.body, b.body, Vec2::new(0.0, 3.0), &MouseJointDef::default())
            .unwrap();

        world.remove_body(b);
        assert_eq!(world.joint_count(), 0);
        assert!(!world.destroy_mouse_joint(joint));
    }
}

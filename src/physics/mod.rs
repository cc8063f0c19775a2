//! Rigid-body simulation backed by rapier2d.
//!
//! The sandbox never integrates or resolves contacts itself. [`PhysicsWorld`]
//! owns the rapier sets and pipeline, builds bodies from simple shape
//! descriptors, steps the simulation and reports body poses.
//!
//! # Step
//!
//! Each call to [`PhysicsWorld::step`] advances exactly one fixed timestep.
//! There is no accumulator: the frame loop calls it once per frame.

pub mod mouse_joint;

pub use mouse_joint::{MouseJoint, MouseJointDef};

use std::num::NonZeroUsize;

use glam::{Mat2, Mat4, Vec2, Vec3};
use nalgebra::{Point2, Vector2};
use rapier2d::dynamics::{
    CCDSolver, ImpulseJointSet, IntegrationParameters, IslandManager, MultibodyJointSet,
    RigidBodyBuilder, RigidBodyHandle, RigidBodySet, RigidBodyType,
};
use rapier2d::geometry::{
    BroadPhaseMultiSap, ColliderBuilder, ColliderHandle, ColliderSet, NarrowPhase,
};
use rapier2d::pipeline::{PhysicsPipeline, QueryPipeline};

/// Configuration for the physics simulation.
#[derive(Debug, Clone)]
pub struct PhysicsConfig {
    /// Gravity vector. Default: (0, -9.8).
    pub gravity: Vec2,
    /// Timestep of a single [`PhysicsWorld::step`] in seconds. Default: 1/60.
    pub fixed_timestep: f32,
    /// Number of constraint solver iterations. Default: 8.
    pub solver_iterations: usize,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, -9.8),
            fixed_timestep: 1.0 / 60.0,
            solver_iterations: 8,
        }
    }
}

/// Whether a body moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Fixed in place, zero density.
    Static,
    /// Simulated, unit density.
    Dynamic,
}

impl BodyKind {
    fn to_rapier(self) -> RigidBodyType {
        match self {
            BodyKind::Static => RigidBodyType::Fixed,
            BodyKind::Dynamic => RigidBodyType::Dynamic,
        }
    }

    /// Collider density for this kind of body.
    pub fn density(self) -> f32 {
        match self {
            BodyKind::Static => 0.0,
            BodyKind::Dynamic => 1.0,
        }
    }
}

/// Collision geometry, expressed in the body's local frame.
#[derive(Debug, Clone, PartialEq)]
pub enum ColliderShape {
    /// Disk centered on the body origin.
    Ball { radius: f32 },
    /// Rectangle centered on the body origin.
    Cuboid { half_extents: Vec2 },
    /// Open chain of segments through the vertices.
    Chain { vertices: Vec<Vec2> },
}

impl ColliderShape {
    fn builder(&self) -> ColliderBuilder {
        match self {
            ColliderShape::Ball { radius } => ColliderBuilder::ball(*radius),
            ColliderShape::Cuboid { half_extents } => {
                ColliderBuilder::cuboid(half_extents.x, half_extents.y)
            }
            ColliderShape::Chain { vertices } => ColliderBuilder::polyline(
                vertices.iter().map(|v| Point2::new(v.x, v.y)).collect(),
                None,
            ),
        }
    }
}

/// Surface properties shared by every collider the sandbox creates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderMaterial {
    pub friction: f32,
    pub restitution: f32,
}

impl Default for ColliderMaterial {
    fn default() -> Self {
        Self {
            friction: 0.2,
            restitution: 0.0,
        }
    }
}

/// A rigid body and its single collider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyHandle {
    pub body: RigidBodyHandle,
    pub collider: ColliderHandle,
}

/// Position and rotation of a body as reported by the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPose {
    pub position: Vec2,
    /// Counter-clockwise rotation in radians.
    pub angle: f32,
}

impl BodyPose {
    /// Model matrix: translate to the position, then rotate about Z.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(self.position.x, self.position.y, 0.0))
            * Mat4::from_rotation_z(self.angle)
    }

    /// Express a world-space point in the body's local frame.
    pub fn to_local(&self, world_point: Vec2) -> Vec2 {
        Mat2::from_angle(-self.angle) * (world_point - self.position)
    }

    /// Express a local point in world space.
    pub fn to_world(&self, local_point: Vec2) -> Vec2 {
        self.position + Mat2::from_angle(self.angle) * local_point
    }
}

/// The rapier simulation and everything it owns.
pub struct PhysicsWorld {
    config: PhysicsConfig,
    gravity: Vector2<f32>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: BroadPhaseMultiSap,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
    material: ColliderMaterial,
}

impl PhysicsWorld {
    /// Create an empty world.
    pub fn new(config: PhysicsConfig) -> Self {
        let mut integration_parameters = IntegrationParameters {
            dt: config.fixed_timestep,
            ..Default::default()
        };
        integration_parameters.num_solver_iterations =
            NonZeroUsize::new(config.solver_iterations).unwrap_or(NonZeroUsize::MIN);

        Self {
            gravity: Vector2::new(config.gravity.x, config.gravity.y),
            config,
            integration_parameters,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhaseMultiSap::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            material: ColliderMaterial::default(),
        }
    }

    /// Use `material` for colliders created from now on.
    pub fn with_material(mut self, material: ColliderMaterial) -> Self {
        self.material = material;
        self
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Create a body at `position` rotated by `angle`, with one collider.
    pub fn create_body(
        &mut self,
        kind: BodyKind,
        position: Vec2,
        angle: f32,
        shape: &ColliderShape,
    ) -> BodyHandle {
        let rb = RigidBodyBuilder::new(kind.to_rapier())
            .translation(Vector2::new(position.x, position.y))
            .rotation(angle)
            .build();
        let body = self.bodies.insert(rb);

        let collider = shape
            .builder()
            .density(kind.density())
            .friction(self.material.friction)
            .restitution(self.material.restitution)
            .build();
        let collider = self
            .colliders
            .insert_with_parent(collider, body, &mut self.bodies);

        tracing::trace!(?kind, ?position, angle, "created body");
        BodyHandle { body, collider }
    }

    /// Remove a body, its collider and any joint attached to it.
    ///
    /// Returns false if the body was already gone.
    pub fn remove_body(&mut self, handle: BodyHandle) -> bool {
        self.bodies
            .remove(
                handle.body,
                &mut self.islands,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            )
            .is_some()
    }

    /// Current pose of a body, or None if it no longer exists.
    pub fn pose(&self, handle: BodyHandle) -> Option<BodyPose> {
        self.body_pose(handle.body)
    }

    pub(crate) fn body_pose(&self, body: RigidBodyHandle) -> Option<BodyPose> {
        let rb = self.bodies.get(body)?;
        let t = rb.translation();
        Some(BodyPose {
            position: Vec2::new(t.x, t.y),
            angle: rb.rotation().angle(),
        })
    }

    /// Linear velocity of a body, or None if it no longer exists.
    pub fn linear_velocity(&self, handle: BodyHandle) -> Option<Vec2> {
        let v = self.bodies.get(handle.body)?.linvel();
        Some(Vec2::new(v.x, v.y))
    }

    /// Whether the body is simulated (as opposed to fixed).
    pub fn is_dynamic(&self, handle: BodyHandle) -> bool {
        self.bodies
            .get(handle.body)
            .is_some_and(|rb| rb.is_dynamic())
    }

    /// Advance the simulation by one fixed timestep.
    pub fn step(&mut self) {
        self.step_by(self.config.fixed_timestep);
    }

    /// Advance the simulation by `dt` seconds in a single step.
    pub fn step_by(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;

        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    pub fn joint_count(&self) -> usize {
        self.impulse_joints.len()
    }
}

use super::Shape;
use crate::error::{Result, SandboxError};
use crate::physics::{BodyHandle, BodyKind, ColliderShape, PhysicsWorld};
use glam::Vec2;

/// An open chain of segments. Polylines are never grabbed, so containment
/// keeps the default of always false.
#[derive(Debug, Clone)]
pub struct Polyline {
    vertices: Vec<Vec2>,
    handle: BodyHandle,
}

impl Polyline {
    /// Create a body at the origin with a chain collider through `vertices`.
    ///
    /// Fails with [`SandboxError::DegeneratePolyline`] for fewer than two
    /// vertices.
    pub fn new(world: &mut PhysicsWorld, vertices: Vec<Vec2>, kind: BodyKind) -> Result<Self> {
        if vertices.len() < 2 {
            return Err(SandboxError::DegeneratePolyline(vertices.len()));
        }

        let handle = world.create_body(
            kind,
            Vec2::ZERO,
            0.0,
            &ColliderShape::Chain {
                vertices: vertices.clone(),
            },
        );

        Ok(Self { vertices, handle })
    }

    /// Vertices in the body's local frame.
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }
}

impl Shape for Polyline {
    fn handle(&self) -> BodyHandle {
        self.handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::PhysicsConfig;

    #[test]
    fn test_too_few_vertices() {
        let mut world = PhysicsWorld::new(PhysicsConfig::default());

        let err = Polyline::new(&mut world, vec![Vec2::ONE], BodyKind::Static).unwrap_err();
        assert!(matches!(err, SandboxError::DegeneratePolyline(1)));
        assert!(Polyline::new(&mut world, Vec::new(), BodyKind::Static).is_err());
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn test_never_contains() {
        let mut world = PhysicsWorld::new(PhysicsConfig::default());
        let line = Polyline::new(
            &mut world,
            vec![Vec2::new(-1.0, 1.0), Vec2::new(1.0, 1.0)],
            BodyKind::Static,
        )
        .unwrap();

        assert_eq!(line.vertices().len(), 2);
        assert!(!line.contains(&world, Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn test_catches_falling_ball() {
        let mut world = PhysicsWorld::new(PhysicsConfig::default());
        Polyline::new(
            &mut world,
            vec![Vec2::new(-2.0, 3.0), Vec2::new(0.0, 2.0), Vec2::new(2.0, 3.0)],
            BodyKind::Static,
        )
        .unwrap();
        let ball = world.create_body(
            BodyKind::Dynamic,
            Vec2::new(0.0, 5.0),
            0.0,
            &ColliderShape::Ball { radius: 0.5 },
        );

        for _ in 0..180 {
            world.step();
        }

        let y = world.pose(ball).unwrap().position.y;
        assert!(y > 2.0, "Ball should be held by the polyline: y = {}", y);
    }
}

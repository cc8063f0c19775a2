use super::Shape;
use crate::physics::{BodyHandle, BodyKind, ColliderShape, PhysicsWorld};
use glam::Vec2;

/// A rectangle. Called `BoxShape` to stay clear of `std::boxed::Box`.
#[derive(Debug, Clone)]
pub struct BoxShape {
    center: Vec2,
    size: Vec2,
    handle: BodyHandle,
}

impl BoxShape {
    /// Create a body at `center` rotated by `angle`, with a cuboid collider of
    /// full extents `size`.
    pub fn new(
        world: &mut PhysicsWorld,
        center: Vec2,
        size: Vec2,
        kind: BodyKind,
        angle: f32,
    ) -> Self {
        let handle = world.create_body(
            kind,
            center,
            angle,
            &ColliderShape::Cuboid {
                half_extents: size * 0.5,
            },
        );
        Self {
            center,
            size,
            handle,
        }
    }

    /// Where the box was spawned.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Full width and height.
    pub fn size(&self) -> Vec2 {
        self.size
    }
}

impl Shape for BoxShape {
    fn handle(&self) -> BodyHandle {
        self.handle
    }

    fn contains_local(&self, local: Vec2) -> bool {
        let half = self.size * 0.5;
        local.x.abs() <= half.x && local.y.abs() <= half.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::PhysicsConfig;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn test_contains_axis_aligned() {
        let mut world = PhysicsWorld::new(PhysicsConfig::default());
        let b = BoxShape::new(
            &mut world,
            Vec2::new(5.0, 2.0),
            Vec2::new(0.9, 0.9),
            BodyKind::Static,
            0.0,
        );

        assert!(b.contains(&world, Vec2::new(5.0, 2.0)));
        assert!(b.contains(&world, Vec2::new(5.4, 1.6)));
        assert!(!b.contains(&world, Vec2::new(5.5, 2.0)));
        assert!(!b.contains(&world, Vec2::new(5.0, 2.5)));
    }

    #[test]
    fn test_contains_after_rotation() {
        let mut world = PhysicsWorld::new(PhysicsConfig::default());
        let b = BoxShape::new(
            &mut world,
            Vec2::new(0.0, 5.0),
            Vec2::new(1.0, 1.0),
            BodyKind::Static,
            FRAC_PI_4,
        );

        // Inside the axis-aligned square but outside the rotated one.
        assert!(!b.contains(&world, Vec2::new(0.45, 5.45)));
        // Outside the axis-aligned square but inside the rotated diamond.
        assert!(b.contains(&world, Vec2::new(0.6, 5.0)));
        assert!(b.contains(&world, Vec2::new(0.2, 5.2)));
    }

    #[test]
    fn test_collider_matches_size() {
        let mut world = PhysicsWorld::new(PhysicsConfig::default());
        world.create_body(
            BodyKind::Static,
            Vec2::ZERO,
            0.0,
            &ColliderShape::Chain {
                vertices: vec![Vec2::new(-8.0, 0.0), Vec2::new(8.0, 0.0)],
            },
        );
        let b = BoxShape::new(
            &mut world,
            Vec2::new(0.0, 2.0),
            Vec2::new(1.2, 0.6),
            BodyKind::Dynamic,
            0.0,
        );

        for _ in 0..180 {
            world.step();
        }

        // Resting on its long side, the center sits half the height up.
        let pose = b.pose(&world).unwrap();
        assert!(
            (pose.position.y - 0.3).abs() < 0.1,
            "Box should rest on the floor: y = {}",
            pose.position.y
        );
        assert_eq!(b.size(), Vec2::new(1.2, 0.6));
    }
}

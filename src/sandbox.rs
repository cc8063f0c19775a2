//! The Pencil Physics sandbox
//!
//! [`PencilPhysics`] owns the physics world and every shape in it: the walls
//! framing the world rectangle, two static props, and the circles, boxes and
//! polylines the user adds. It also holds the single optional mouse joint used
//! for dragging.
//!
//! A frame is `advance_state` followed by `draw_graphics`; input arrives
//! through the `add_*`, `clear` and `*_mouse` operations.

use glam::{Mat4, Vec2, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::physics::{
    BodyKind, ColliderMaterial, MouseJoint, MouseJointDef, PhysicsConfig, PhysicsWorld,
};
use crate::renderer::Draw;
use crate::shapes::{BoxShape, Circle, Polyline, Shape};

/// Colors used when drawing the sandbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Clear color. Default: light grey.
    pub background: [f32; 4],
    /// In-progress sketch. Default: mid grey.
    pub sketch: [f32; 3],
    /// The static circle. Default: red.
    pub static_circle: [f32; 3],
    /// The static box. Default: white.
    pub static_box: [f32; 3],
    /// User circles, boxes and polylines. Default: black.
    pub user_shapes: [f32; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [0.8, 0.8, 0.8, 1.0],
            sketch: [0.6, 0.6, 0.6],
            static_circle: [1.0, 0.0, 0.0],
            static_box: [1.0, 1.0, 1.0],
            user_shapes: [0.0, 0.0, 0.0],
        }
    }
}

/// Configuration of the sandbox contents.
#[derive(Debug, Clone)]
pub struct SandboxConfig {
    /// Lower-left corner of the walled area. Default: (-8, 0).
    pub world_min: Vec2,
    /// Upper-right corner of the walled area. Default: (8, 9).
    pub world_max: Vec2,
    pub physics: PhysicsConfig,
    pub material: ColliderMaterial,
    /// Where new circles and boxes appear. Default: (-5, 7).
    pub spawn_point: Vec2,
    /// Maximum offset from the spawn point on each axis. Default: 0.5.
    pub spawn_jitter: f32,
    /// Radius of spawned circles. Default: 0.5.
    pub circle_radius: f32,
    /// Size of spawned boxes. Default: 1.2 x 0.6.
    pub box_size: Vec2,
    pub mouse_joint: MouseJointDef,
    /// Minimum distance between consecutive sketch points. Default: 0.1.
    pub sketch_min_segment: f32,
    /// Length of the gizmo drawn at the mouse joint target. Default: 0.1.
    pub target_axes_size: f32,
    pub palette: Palette,
    /// Seed for the spawn jitter. None seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            world_min: Vec2::new(-8.0, 0.0),
            world_max: Vec2::new(8.0, 9.0),
            physics: PhysicsConfig::default(),
            material: ColliderMaterial::default(),
            spawn_point: Vec2::new(-5.0, 7.0),
            spawn_jitter: 0.5,
            circle_radius: 0.5,
            box_size: Vec2::new(1.2, 0.6),
            mouse_joint: MouseJointDef::default(),
            sketch_min_segment: 0.1,
            target_axes_size: 0.1,
            palette: Palette::default(),
            seed: None,
        }
    }
}

impl SandboxConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the walled world rectangle.
    pub fn bounds(mut self, world_min: Vec2, world_max: Vec2) -> Self {
        self.world_min = world_min;
        self.world_max = world_max;
        self
    }

    pub fn physics(mut self, physics: PhysicsConfig) -> Self {
        self.physics = physics;
        self
    }

    pub fn mouse_joint(mut self, def: MouseJointDef) -> Self {
        self.mouse_joint = def;
        self
    }

    /// Make spawn positions reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// The sandbox: a physics world and the shapes living in it.
pub struct PencilPhysics {
    config: SandboxConfig,
    world: PhysicsWorld,
    walls: Polyline,
    red_circle: Circle,
    white_box: BoxShape,
    circles: Vec<Circle>,
    boxes: Vec<BoxShape>,
    polylines: Vec<Polyline>,
    mouse_joint: Option<MouseJoint>,
    rng: SmallRng,
}

impl PencilPhysics {
    /// Create the world with its walls and the two static props.
    pub fn new(config: SandboxConfig) -> Result<Self> {
        let mut world = PhysicsWorld::new(config.physics.clone()).with_material(config.material);

        let (lo, hi) = (config.world_min, config.world_max);
        let walls = Polyline::new(
            &mut world,
            vec![
                Vec2::new(lo.x, hi.y),
                Vec2::new(lo.x, lo.y),
                Vec2::new(hi.x, lo.y),
                Vec2::new(hi.x, hi.y),
            ],
            BodyKind::Static,
        )?;
        let red_circle = Circle::new(&mut world, Vec2::new(-5.0, 2.0), 0.5, BodyKind::Static, 0.0);
        let white_box = BoxShape::new(
            &mut world,
            Vec2::new(5.0, 2.0),
            Vec2::new(0.9, 0.9),
            BodyKind::Static,
            0.0,
        );

        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        tracing::info!(
            min = ?config.world_min,
            max = ?config.world_max,
            gravity = ?config.physics.gravity,
            "sandbox created"
        );

        Ok(Self {
            config,
            world,
            walls,
            red_circle,
            white_box,
            circles: Vec::new(),
            boxes: Vec::new(),
            polylines: Vec::new(),
            mouse_joint: None,
            rng,
        })
    }

    fn spawn_position(&mut self) -> Vec2 {
        let r = Vec2::new(
            self.rng.gen_range(-1.0..=1.0),
            self.rng.gen_range(-1.0..=1.0),
        );
        self.config.spawn_point + self.config.spawn_jitter * r
    }

    /// Spawn a dynamic circle near the spawn point.
    pub fn add_circle(&mut self) {
        let position = self.spawn_position();
        let circle = Circle::new(
            &mut self.world,
            position,
            self.config.circle_radius,
            BodyKind::Dynamic,
            0.0,
        );
        self.circles.push(circle);
        tracing::debug!(?position, count = self.circles.len(), "added circle");
    }

    /// Spawn a dynamic box near the spawn point.
    pub fn add_box(&mut self) {
        let position = self.spawn_position();
        let b = BoxShape::new(
            &mut self.world,
            position,
            self.config.box_size,
            BodyKind::Dynamic,
            0.0,
        );
        self.boxes.push(b);
        tracing::debug!(?position, count = self.boxes.len(), "added box");
    }

    /// Add a static polyline through `vertices`, given in world space.
    pub fn add_polyline(&mut self, vertices: Vec<Vec2>) -> Result<()> {
        let polyline = Polyline::new(&mut self.world, vertices, BodyKind::Static)?;
        tracing::debug!(vertices = polyline.vertices().len(), "added polyline");
        self.polylines.push(polyline);
        Ok(())
    }

    /// Remove every user circle, box and polyline. The walls and the static
    /// props stay. A held body is released first.
    pub fn clear(&mut self) {
        self.detach_mouse();

        let removed = self.circles.len() + self.boxes.len() + self.polylines.len();
        for circle in self.circles.drain(..) {
            circle.destroy(&mut self.world);
        }
        for b in self.boxes.drain(..) {
            b.destroy(&mut self.world);
        }
        for polyline in self.polylines.drain(..) {
            polyline.destroy(&mut self.world);
        }
        tracing::debug!(removed, "cleared sandbox");
    }

    /// Grab the first circle, then the first box, containing `point`.
    ///
    /// Returns true if a body was grabbed. Any joint already held is released
    /// first; a miss leaves the current state untouched.
    pub fn attach_mouse(&mut self, point: Vec2) -> bool {
        let hit = self
            .circles
            .iter()
            .find(|c| c.contains(&self.world, point))
            .map(Shape::handle)
            .or_else(|| {
                self.boxes
                    .iter()
                    .find(|b| b.contains(&self.world, point))
                    .map(Shape::handle)
            });
        let Some(target) = hit else {
            return false;
        };

        self.detach_mouse();
        let anchor = self.walls.handle().body;
        match self
            .world
            .create_mouse_joint(anchor, target.body, point, &self.config.mouse_joint)
        {
            Ok(joint) => {
                tracing::debug!(?point, "grabbed body");
                self.mouse_joint = Some(joint);
                true
            }
            Err(e) => {
                tracing::warn!("Failed to grab body: {}", e);
                false
            }
        }
    }

    /// Move the target of the held joint. No-op when nothing is held.
    pub fn move_mouse(&mut self, point: Vec2) {
        if let Some(joint) = self.mouse_joint.as_mut() {
            self.world.set_mouse_target(joint, point);
        }
    }

    /// Release the held joint. No-op when nothing is held.
    pub fn detach_mouse(&mut self) {
        if let Some(joint) = self.mouse_joint.take() {
            self.world.destroy_mouse_joint(joint);
            tracing::debug!("released body");
        }
    }

    /// Advance the simulation by one step of `dt` seconds.
    pub fn advance_state(&mut self, dt: f32) {
        self.world.step_by(dt);
    }

    /// Record the frame into `draw`. `sketch` is the polyline being drawn, in
    /// world space.
    pub fn draw_graphics(&self, draw: &mut Draw, sketch: &[Vec2]) {
        let palette = &self.config.palette;

        if sketch.len() >= 2 {
            draw.polyline(Mat4::IDENTITY, sketch, palette.sketch);
        }

        if let Some(m) = self.model(&self.red_circle) {
            draw.circle(m, Vec2::ZERO, self.red_circle.radius(), palette.static_circle);
        }
        if let Some(m) = self.model(&self.white_box) {
            draw.rect(m, Vec2::ZERO, self.white_box.size(), palette.static_box);
        }

        for circle in &self.circles {
            if let Some(m) = self.model(circle) {
                draw.circle(m, Vec2::ZERO, circle.radius(), palette.user_shapes);
            }
        }
        for b in &self.boxes {
            if let Some(m) = self.model(b) {
                draw.rect(m, Vec2::ZERO, b.size(), palette.user_shapes);
            }
        }
        for polyline in &self.polylines {
            if let Some(m) = self.model(polyline) {
                draw.polyline(m, polyline.vertices(), palette.user_shapes);
            }
        }

        if let Some(joint) = &self.mouse_joint {
            let target = joint.target();
            let m = Mat4::from_translation(Vec3::new(target.x, target.y, 0.0));
            draw.axes(m, self.config.target_axes_size);
        }
    }

    fn model(&self, shape: &impl Shape) -> Option<Mat4> {
        let m = shape.transformation(&self.world);
        if m.is_none() {
            tracing::warn!(handle = ?shape.handle(), "shape has no body, skipping");
        }
        m
    }

    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn boxes(&self) -> &[BoxShape] {
        &self.boxes
    }

    pub fn polylines(&self) -> &[Polyline] {
        &self.polylines
    }

    pub fn red_circle(&self) -> &Circle {
        &self.red_circle
    }

    pub fn white_box(&self) -> &BoxShape {
        &self.white_box
    }

    pub fn mouse_joint(&self) -> Option<&MouseJoint> {
        self.mouse_joint.as_ref()
    }

    pub fn is_grabbing(&self) -> bool {
        self.mouse_joint.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SandboxError;
    use crate::renderer::CIRCLE_SEGMENTS;

    fn sandbox() -> PencilPhysics {
        PencilPhysics::new(SandboxConfig::default().seed(7)).unwrap()
    }

    fn step(sandbox: &mut PencilPhysics, frames: usize) {
        let dt = sandbox.config().physics.fixed_timestep;
        for _ in 0..frames {
            sandbox.advance_state(dt);
        }
    }

    fn position(sandbox: &PencilPhysics, shape: &impl Shape) -> Vec2 {
        shape.pose(sandbox.world()).unwrap().position
    }

    #[test]
    fn test_initial_world() {
        let sandbox = sandbox();
        // Walls, red circle, white box.
        assert_eq!(sandbox.world().body_count(), 3);
        assert!(sandbox.circles().is_empty());
        assert!(sandbox.boxes().is_empty());
        assert!(sandbox.polylines().is_empty());
        assert!(!sandbox.is_grabbing());
        assert_eq!(sandbox.red_circle().center(), Vec2::new(-5.0, 2.0));
        assert_eq!(sandbox.white_box().size(), Vec2::new(0.9, 0.9));
    }

    #[test]
    fn test_spawn_within_jitter() {
        let mut sandbox = sandbox();
        for _ in 0..10 {
            sandbox.add_circle();
            sandbox.add_box();
        }

        for c in sandbox.circles() {
            let offset = c.center() - Vec2::new(-5.0, 7.0);
            assert!(offset.x.abs() <= 0.5 && offset.y.abs() <= 0.5);
            assert_eq!(c.radius(), 0.5);
        }
        for b in sandbox.boxes() {
            let offset = b.center() - Vec2::new(-5.0, 7.0);
            assert!(offset.x.abs() <= 0.5 && offset.y.abs() <= 0.5);
            assert_eq!(b.size(), Vec2::new(1.2, 0.6));
        }
        assert_eq!(sandbox.world().body_count(), 23);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let mut a = sandbox();
        let mut b = sandbox();
        a.add_circle();
        b.add_circle();
        assert_eq!(a.circles()[0].center(), b.circles()[0].center());
    }

    #[test]
    fn test_dynamic_circle_falls_static_props_stay() {
        let mut sandbox = sandbox();
        sandbox.add_circle();
        let start = sandbox.circles()[0].center();

        step(&mut sandbox, 30);

        let now = position(&sandbox, &sandbox.circles()[0]);
        assert!(now.y < start.y - 0.5, "Circle should fall: y = {}", now.y);
        assert_eq!(position(&sandbox, sandbox.red_circle()), Vec2::new(-5.0, 2.0));
        assert_eq!(position(&sandbox, sandbox.white_box()), Vec2::new(5.0, 2.0));
    }

    #[test]
    fn test_walls_contain_bodies() {
        let mut sandbox = sandbox();
        sandbox.add_box();

        step(&mut sandbox, 300);

        let p = position(&sandbox, &sandbox.boxes()[0]);
        assert!(p.y > 0.0 && p.x > -8.0 && p.x < 8.0, "Box escaped: {:?}", p);
    }

    #[test]
    fn test_add_polyline() {
        let mut sandbox = sandbox();
        sandbox
            .add_polyline(vec![Vec2::new(-2.0, 4.0), Vec2::new(2.0, 3.0)])
            .unwrap();
        assert_eq!(sandbox.polylines().len(), 1);

        let err = sandbox.add_polyline(vec![Vec2::ZERO]).unwrap_err();
        assert!(matches!(err, SandboxError::DegeneratePolyline(1)));
        assert_eq!(sandbox.polylines().len(), 1);
    }

    #[test]
    fn test_attach_miss_keeps_state() {
        let mut sandbox = sandbox();
        sandbox.add_circle();

        assert!(!sandbox.attach_mouse(Vec2::new(6.0, 8.0)));
        assert!(!sandbox.is_grabbing());
        assert_eq!(sandbox.world().joint_count(), 0);
    }

    #[test]
    fn test_static_props_are_not_grabbable() {
        let mut sandbox = sandbox();
        assert!(!sandbox.attach_mouse(Vec2::new(-5.0, 2.0)));
        assert!(!sandbox.attach_mouse(Vec2::new(5.0, 2.0)));
    }

    fn stacked_sandbox() -> PencilPhysics {
        let mut config = SandboxConfig::default().seed(7);
        config.spawn_jitter = 0.0;
        PencilPhysics::new(config).unwrap()
    }

    #[test]
    fn test_circle_shadows_box() {
        let mut sandbox = stacked_sandbox();
        sandbox.add_box();
        sandbox.add_circle();
        let point = Vec2::new(-5.0, 7.0);
        assert!(sandbox.boxes()[0].contains(sandbox.world(), point));

        assert!(sandbox.attach_mouse(point));
        let circle_body = sandbox.circles()[0].handle().body;
        assert_eq!(sandbox.mouse_joint().unwrap().body(), circle_body);
    }

    #[test]
    fn test_box_grabbed_when_no_circle_matches() {
        let mut sandbox = stacked_sandbox();
        sandbox.add_circle();
        sandbox.add_box();
        // Inside the 1.2 wide box, outside the 0.5 radius circle.
        let point = Vec2::new(-4.45, 7.0);

        assert!(sandbox.attach_mouse(point));
        let box_body = sandbox.boxes()[0].handle().body;
        assert_eq!(sandbox.mouse_joint().unwrap().body(), box_body);
    }

    #[test]
    fn test_first_circle_in_order_wins() {
        let mut sandbox = stacked_sandbox();
        sandbox.add_circle();
        sandbox.add_circle();

        assert!(sandbox.attach_mouse(Vec2::new(-5.0, 7.0)));
        let first = sandbox.circles()[0].handle().body;
        assert_eq!(sandbox.mouse_joint().unwrap().body(), first);
    }

    #[test]
    fn test_at_most_one_joint() {
        let mut sandbox = sandbox();
        sandbox.add_circle();
        let point = sandbox.circles()[0].center();

        assert!(sandbox.attach_mouse(point));
        assert!(sandbox.attach_mouse(point));
        assert_eq!(sandbox.world().joint_count(), 1);
    }

    #[test]
    fn test_move_and_detach() {
        let mut sandbox = sandbox();
        sandbox.add_circle();
        let point = sandbox.circles()[0].center();

        // No joint yet: both are no-ops.
        sandbox.move_mouse(Vec2::ZERO);
        sandbox.detach_mouse();

        assert!(sandbox.attach_mouse(point));
        sandbox.move_mouse(Vec2::new(0.0, 5.0));
        assert_eq!(sandbox.mouse_joint().unwrap().target(), Vec2::new(0.0, 5.0));

        sandbox.detach_mouse();
        assert!(!sandbox.is_grabbing());
        assert_eq!(sandbox.world().joint_count(), 0);
    }

    #[test]
    fn test_drag_moves_body_toward_target() {
        let mut sandbox = sandbox();
        sandbox.add_circle();
        let point = sandbox.circles()[0].center();

        assert!(sandbox.attach_mouse(point));
        let target = Vec2::new(2.0, 5.0);
        sandbox.move_mouse(target);
        step(&mut sandbox, 240);

        let p = position(&sandbox, &sandbox.circles()[0]);
        assert!(
            (p - target).length() < 1.5,
            "Circle should hang near the target: {:?}",
            p
        );
    }

    #[test]
    fn test_clear_releases_joint_first() {
        let mut sandbox = sandbox();
        sandbox.add_circle();
        sandbox.add_box();
        sandbox
            .add_polyline(vec![Vec2::new(-1.0, 1.0), Vec2::new(1.0, 1.0)])
            .unwrap();
        let point = sandbox.circles()[0].center();
        assert!(sandbox.attach_mouse(point));

        sandbox.clear();

        assert!(!sandbox.is_grabbing());
        assert_eq!(sandbox.world().joint_count(), 0);
        assert!(sandbox.circles().is_empty());
        assert!(sandbox.boxes().is_empty());
        assert!(sandbox.polylines().is_empty());
        assert_eq!(sandbox.world().body_count(), 3);
    }

    #[test]
    fn test_draw_graphics_contents() {
        let mut sandbox = sandbox();
        let mut draw = Draw::new();

        // Props only: one circle fan and one quad.
        sandbox.draw_graphics(&mut draw, &[]);
        let props = 3 * CIRCLE_SEGMENTS as usize + 6;
        assert_eq!(draw.triangles().len(), props);
        assert!(draw.lines().is_empty());

        sandbox.add_circle();
        sandbox.add_box();
        sandbox
            .add_polyline(vec![Vec2::ZERO, Vec2::X, Vec2::ONE])
            .unwrap();
        draw.clear();
        sandbox.draw_graphics(&mut draw, &[Vec2::ZERO, Vec2::Y]);
        assert_eq!(draw.triangles().len(), 2 * props);
        // Sketch segment plus two polyline segments.
        assert_eq!(draw.lines().len(), 2 * 3);
        assert_eq!(draw.lines()[0].color, [0.6, 0.6, 0.6, 1.0]);

        let point = sandbox.circles()[0].center();
        assert!(sandbox.attach_mouse(point));
        draw.clear();
        sandbox.draw_graphics(&mut draw, &[]);
        // Polyline plus the two axes at the target.
        assert_eq!(draw.lines().len(), 2 * 4);
    }

    #[test]
    fn test_draw_follows_simulated_pose() {
        let mut sandbox = sandbox();
        sandbox.add_circle();
        step(&mut sandbox, 30);

        let mut draw = Draw::new();
        sandbox.draw_graphics(&mut draw, &[]);

        // The fan of the first dynamic circle starts after both props.
        let first = 3 * CIRCLE_SEGMENTS as usize + 6;
        let fan_center = Vec2::from(draw.triangles()[first].position);
        let circle = &sandbox.circles()[0];
        let pose = circle.pose(sandbox.world()).unwrap();
        assert!((fan_center - pose.position).length() < 1e-4);
        assert!((fan_center - circle.center()).length() > 0.1);
    }

    #[test]
    fn test_draw_skips_shape_without_body() {
        let mut sandbox = sandbox();
        sandbox.add_circle();
        sandbox.add_box();
        let handle = sandbox.circles()[0].handle();
        assert!(sandbox.world.remove_body(handle));

        let mut draw = Draw::new();
        sandbox.draw_graphics(&mut draw, &[]);

        // Props plus the box quad; the orphaned circle is left out.
        let props = 3 * CIRCLE_SEGMENTS as usize + 6;
        assert_eq!(draw.triangles().len(), props + 6);
        assert_eq!(sandbox.circles().len(), 1);
    }

    #[test]
    fn test_single_point_sketch_not_drawn() {
        let sandbox = sandbox();
        let mut draw = Draw::new();
        sandbox.draw_graphics(&mut draw, &[Vec2::ONE]);
        assert!(draw.lines().is_empty());
    }
}

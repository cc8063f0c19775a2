//! Mouse and keyboard control of the sandbox
//!
//! [`UiHelper`] turns window events into sandbox operations. The left button
//! either grabs a body or, when nothing is under the cursor, sketches a new
//! polyline that is committed on release.

use glam::Vec2;

use crate::renderer::viewer::{Camera2D, Viewport};
use crate::sandbox::PencilPhysics;
use crate::window::event::{Event, Key, MouseButton};

/// What the left mouse button is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// Dragging a body through the mouse joint.
    Grabbing,
    /// Drawing a polyline.
    Sketching,
}

/// Event handler for the sandbox.
pub struct UiHelper {
    camera: Camera2D,
    /// Minimum world-space distance between consecutive sketch points.
    pub min_segment: f32,

    interaction: Interaction,
    sketch: Vec<Vec2>,
    quit_requested: bool,
}

impl UiHelper {
    /// Create a handler mapping the cursor through `camera`.
    pub fn new(camera: Camera2D, min_segment: f32) -> Self {
        Self {
            camera,
            min_segment,
            interaction: Interaction::Idle,
            sketch: Vec::new(),
            quit_requested: false,
        }
    }

    /// Create a handler matching the sandbox's world bounds and settings.
    pub fn for_sandbox(sandbox: &PencilPhysics) -> Self {
        let config = sandbox.config();
        Self::new(
            Camera2D::new(config.world_min, config.world_max),
            config.sketch_min_segment,
        )
    }

    /// Apply the unhandled `events` to `sandbox`, marking those consumed.
    pub fn handle_events(
        &mut self,
        sandbox: &mut PencilPhysics,
        events: &mut [Event],
        viewport: Viewport,
    ) {
        for event in events.iter_mut() {
            if event.is_handled() {
                continue;
            }
            if self.handle_event(sandbox, event, viewport) {
                event.set_handled();
            }
        }
    }

    /// Apply one event. Returns true if it was consumed.
    pub fn handle_event(
        &mut self,
        sandbox: &mut PencilPhysics,
        event: &Event,
        viewport: Viewport,
    ) -> bool {
        match *event {
            Event::MousePress {
                button: MouseButton::Left,
                position,
                ..
            } => {
                // No release since the last press: drop the earlier grab.
                self.cancel(sandbox);
                let point = self.camera.screen_to_world(position, viewport);
                if sandbox.attach_mouse(point) {
                    self.interaction = Interaction::Grabbing;
                } else {
                    self.interaction = Interaction::Sketching;
                    self.sketch.clear();
                    self.sketch.push(point);
                }
                true
            }
            Event::MouseMotion { position, .. } => {
                let point = self.camera.screen_to_world(position, viewport);
                match self.interaction {
                    Interaction::Grabbing => sandbox.move_mouse(point),
                    Interaction::Sketching => self.extend_sketch(point),
                    Interaction::Idle => return false,
                }
                true
            }
            Event::MouseRelease {
                button: MouseButton::Left,
                ..
            } => {
                match std::mem::take(&mut self.interaction) {
                    Interaction::Grabbing => sandbox.detach_mouse(),
                    Interaction::Sketching => self.commit_sketch(sandbox),
                    Interaction::Idle => return false,
                }
                true
            }
            Event::KeyPress { key, .. } => {
                match key {
                    Key::C => sandbox.add_circle(),
                    Key::B => sandbox.add_box(),
                    Key::Backspace | Key::Delete => sandbox.clear(),
                    Key::Escape => self.quit_requested = true,
                }
                true
            }
            Event::FocusLost { .. } => self.cancel(sandbox),
            _ => false,
        }
    }

    /// Drop whatever the left button was doing: release a held body and
    /// discard an uncommitted sketch. Returns true if anything was active.
    pub fn cancel(&mut self, sandbox: &mut PencilPhysics) -> bool {
        self.sketch.clear();
        match std::mem::take(&mut self.interaction) {
            Interaction::Grabbing => {
                sandbox.detach_mouse();
                true
            }
            Interaction::Sketching => true,
            Interaction::Idle => false,
        }
    }

    fn extend_sketch(&mut self, point: Vec2) {
        let far_enough = self
            .sketch
            .last()
            .map_or(true, |last| last.distance(point) >= self.min_segment);
        if far_enough {
            self.sketch.push(point);
        }
    }

    fn commit_sketch(&mut self, sandbox: &mut PencilPhysics) {
        let vertices = std::mem::take(&mut self.sketch);
        if vertices.len() < 2 {
            return;
        }
        if let Err(e) = sandbox.add_polyline(vertices) {
            tracing::warn!("Discarded sketch: {}", e);
        }
    }

    /// The polyline being drawn, in world space. Empty when not sketching.
    pub fn sketch(&self) -> &[Vec2] {
        &self.sketch
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Whether Escape was pressed.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn camera(&self) -> &Camera2D {
        &self.camera
    }
}

//! Sandbox game loop
//!
//! Wraps [`Window::render_loop`] and runs, once per paced frame:
//! 1. input: window events through [`UiHelper`]
//! 2. one fixed physics step, with no accumulator or catch-up
//! 3. recording the frame with [`PencilPhysics::draw_graphics`]
//! 4. upload and draw through [`ShapeRenderer`], then present

use crate::core::ClearState;
use crate::physics::PhysicsConfig;
use crate::renderer::{Draw, ShapeRenderer};
use crate::sandbox::{PencilPhysics, SandboxConfig};
use crate::ui::UiHelper;
use crate::window::{screen_target, FrameOutput, Window, WindowSettings};

/// Game loop configuration.
#[derive(Debug, Clone, Default)]
pub struct GameLoopConfig {
    /// Simulated time per frame (seconds). `None` uses
    /// [`PhysicsConfig::fixed_timestep`].
    pub fixed_timestep: Option<f32>,
}

impl GameLoopConfig {
    /// Override the physics timestep for each frame.
    pub fn fixed_timestep(mut self, dt: f32) -> Self {
        self.fixed_timestep = Some(dt);
        self
    }

    /// The step taken per frame, given the sandbox's physics settings.
    pub fn timestep(&self, physics: &PhysicsConfig) -> f32 {
        self.fixed_timestep.unwrap_or(physics.fixed_timestep)
    }
}

struct LoopState {
    sandbox: PencilPhysics,
    ui: UiHelper,
    draw: Draw,
    renderer: Option<ShapeRenderer>,
    config: GameLoopConfig,
}

/// Open a window and run the sandbox until it is closed or Escape is pressed.
pub fn run_sandbox(
    settings: WindowSettings,
    config: GameLoopConfig,
    sandbox_config: SandboxConfig,
) -> anyhow::Result<()> {
    let sandbox = PencilPhysics::new(sandbox_config)?;
    let ui = UiHelper::for_sandbox(&sandbox);
    let window = Window::new(settings)?;

    let state = LoopState {
        sandbox,
        ui,
        draw: Draw::new(),
        renderer: None,
        config,
    };

    window.render_loop(state, |state, mut frame| {
        let ctx = frame.ctx;

        // The renderer needs the surface format, known once the window exists.
        let renderer = state
            .renderer
            .get_or_insert_with(|| ShapeRenderer::new(ctx, frame.surface_format));

        state
            .ui
            .handle_events(&mut state.sandbox, &mut frame.events, frame.viewport);

        let dt = state.config.timestep(&state.sandbox.config().physics);
        state.sandbox.advance_state(dt);

        state.draw.clear();
        state.sandbox.draw_graphics(&mut state.draw, state.ui.sketch());

        let view_proj = state.ui.camera().view_projection(frame.viewport);
        renderer.prepare(ctx, view_proj, &state.draw);

        let background = state.sandbox.config().palette.background;
        let target = screen_target(&frame);
        let mut encoder = ctx.create_encoder(Some("sandbox frame"));
        {
            let mut pass = target.begin_render_pass(&mut encoder, ClearState::color(background));
            renderer.render(&mut pass);
        }
        ctx.submit([encoder.finish()]);

        if state.ui.quit_requested() {
            tracing::info!("quit requested");
            FrameOutput::exit()
        } else {
            FrameOutput::new()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestep_defaults_to_physics() {
        let physics = PhysicsConfig {
            fixed_timestep: 1.0 / 120.0,
            ..Default::default()
        };
        let config = GameLoopConfig::default();
        assert!(config.fixed_timestep.is_none());
        assert_eq!(config.timestep(&physics), 1.0 / 120.0);
        assert_eq!(config.timestep(&PhysicsConfig::default()), 1.0 / 60.0);
    }

    #[test]
    fn test_timestep_override_wins() {
        let config = GameLoopConfig::default().fixed_timestep(0.01);
        assert_eq!(config.timestep(&PhysicsConfig::default()), 0.01);
    }
}

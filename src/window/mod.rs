//! Window management module
//!
//! A thin layer over winit: opens the window, owns the surface, collects
//! input events and drives a paced render loop.

pub mod event;
pub mod frame_io;
pub mod pacer;
pub mod settings;

pub use event::{Event, Key, Modifiers, MouseButton};
pub use frame_io::{FrameInput, FrameOutput, Viewport};
pub use pacer::FramePacer;
pub use settings::WindowSettings;

use crate::context::WgpuContext;
use crate::core::RenderTarget;
use anyhow::Context as _;
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

/// A window with GPU rendering context.
pub struct Window {
    settings: WindowSettings,
}

impl Window {
    /// Create a new window with the given settings.
    pub fn new(settings: WindowSettings) -> anyhow::Result<Self> {
        Ok(Self { settings })
    }

    /// Run the render loop with a callback.
    ///
    /// The callback receives a `FrameInput` once per paced frame and returns a
    /// `FrameOutput`.
    pub fn render_loop<F, S>(self, state_init: S, callback: F) -> anyhow::Result<()>
    where
        F: FnMut(&mut S, FrameInput<'_>) -> FrameOutput + 'static,
        S: 'static,
    {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = App {
            pacer: FramePacer::new(self.settings.frame_rate),
            settings: self.settings,
            state: state_init,
            callback,
            graphics: None,
            events: Vec::new(),
            start_time: Instant::now(),
            last_frame_time: Instant::now(),
            mouse_position: (0.0, 0.0),
            modifiers: Modifiers::default(),
        };

        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

struct Graphics {
    window: Arc<winit::window::Window>,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    ctx: WgpuContext,
}

impl Graphics {
    fn new(event_loop: &ActiveEventLoop, settings: &WindowSettings) -> anyhow::Result<Self> {
        let mut window_attrs = winit::window::WindowAttributes::default()
            .with_title(&settings.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                settings.size.0,
                settings.size.1,
            ))
            .with_resizable(settings.resizable)
            .with_maximized(settings.maximized);
        if settings.fullscreen {
            window_attrs =
                window_attrs.with_fullscreen(Some(winit::window::Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .context("Failed to create window")?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("Failed to create surface")?;

        let (ctx, adapter) = WgpuContext::for_surface_blocking(&instance, &surface)
            .context("Failed to initialize GPU device")?;

        let size = window.inner_size();
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or(caps.formats.first())
            .copied()
            .context("Surface reports no supported formats")?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: if settings.vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&ctx.device, &config);

        tracing::info!(
            width = config.width,
            height = config.height,
            ?format,
            "window ready"
        );

        Ok(Self {
            window,
            surface,
            config,
            ctx,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.ctx.device, &self.config);
        }
    }
}

struct App<S, F> {
    settings: WindowSettings,
    state: S,
    callback: F,
    graphics: Option<Graphics>,
    events: Vec<Event>,
    pacer: FramePacer,
    start_time: Instant,
    last_frame_time: Instant,
    mouse_position: (f32, f32),
    modifiers: Modifiers,
}

impl<S, F> App<S, F>
where
    F: FnMut(&mut S, FrameInput<'_>) -> FrameOutput + 'static,
    S: 'static,
{
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(graphics) = &mut self.graphics else {
            return;
        };

        let now = Instant::now();
        self.pacer.begin_frame(now);
        let elapsed_time = (now - self.start_time).as_secs_f64();
        let delta_time = (now - self.last_frame_time).as_secs_f64();
        self.last_frame_time = now;

        let surface_texture = match graphics.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::warn!("Surface lost, reconfiguring");
                graphics
                    .surface
                    .configure(&graphics.ctx.device, &graphics.config);
                return;
            }
            Err(e) => {
                tracing::error!("Surface error: {:?}", e);
                return;
            }
        };

        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let frame_input = FrameInput {
            events: std::mem::take(&mut self.events),
            elapsed_time,
            delta_time,
            viewport: Viewport::new(graphics.config.width, graphics.config.height),
            ctx: &graphics.ctx,
            surface_view: &view,
            surface_format: graphics.config.format,
        };

        let output = (self.callback)(&mut self.state, frame_input);

        graphics.window.pre_present_notify();
        surface_texture.present();

        if output.exit {
            event_loop.exit();
        }
    }
}

impl<S, F> ApplicationHandler for App<S, F>
where
    F: FnMut(&mut S, FrameInput<'_>) -> FrameOutput + 'static,
    S: 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }

        match Graphics::new(event_loop, &self.settings) {
            Ok(graphics) => self.graphics = Some(graphics),
            Err(e) => {
                tracing::error!("Failed to set up graphics: {:#}", e);
                event_loop.exit();
                return;
            }
        }

        self.start_time = Instant::now();
        self.last_frame_time = self.start_time;
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.graphics.is_none() {
            return;
        }
        let modifiers = self.modifiers;

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(graphics) = &mut self.graphics {
                    graphics.resize(size.width, size.height);
                }
                self.events.push(Event::Resize {
                    width: size.width,
                    height: size.height,
                });
            }
            WindowEvent::ModifiersChanged(state) => {
                self.modifiers = Modifiers::from_winit(state.state());
            }
            WindowEvent::CursorMoved { position, .. } => {
                let old_position = self.mouse_position;
                self.mouse_position = (position.x as f32, position.y as f32);
                let delta = (
                    self.mouse_position.0 - old_position.0,
                    self.mouse_position.1 - old_position.1,
                );
                self.events.push(Event::MouseMotion {
                    delta,
                    position: self.mouse_position,
                    modifiers,
                    handled: false,
                });
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = match button {
                    winit::event::MouseButton::Left => MouseButton::Left,
                    winit::event::MouseButton::Right => MouseButton::Right,
                    winit::event::MouseButton::Middle => MouseButton::Middle,
                    _ => return,
                };
                let position = self.mouse_position;
                self.events.push(match state {
                    winit::event::ElementState::Pressed => Event::MousePress {
                        button,
                        position,
                        modifiers,
                        handled: false,
                    },
                    winit::event::ElementState::Released => Event::MouseRelease {
                        button,
                        position,
                        modifiers,
                        handled: false,
                    },
                });
            }
            WindowEvent::KeyboardInput {
                event: key_event, ..
            } => {
                if key_event.state != winit::event::ElementState::Pressed {
                    return;
                }
                if let Some(key) = Key::from_winit(&key_event.logical_key) {
                    self.events.push(Event::KeyPress {
                        key,
                        modifiers,
                        handled: false,
                    });
                }
            }
            WindowEvent::Focused(false) => {
                self.modifiers = Modifiers::default();
                self.events.push(Event::FocusLost { handled: false });
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(graphics) = &self.graphics else {
            return;
        };

        if self.pacer.is_due(Instant::now()) {
            graphics.window.request_redraw();
            event_loop.set_control_flow(ControlFlow::Wait);
        } else if let Some(deadline) = self.pacer.deadline() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        }
    }
}

/// Create a render target from frame input.
pub fn screen_target<'a>(input: &'a FrameInput<'a>) -> RenderTarget<'a> {
    RenderTarget::new(
        input.surface_view,
        input.viewport.width,
        input.viewport.height,
        input.surface_format,
    )
}

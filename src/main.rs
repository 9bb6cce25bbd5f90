//! Driftscape - a drifting low-poly plane under a starfield
//!
//! Hover the plane to make its faces flash; click (or press Enter) to dive
//! past it into the stars.

use clap::Parser;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use driftscape::cli::Args;
use driftscape::error::Error;
use driftscape::params::{PlaneConfig, RenderConfig};
use driftscape::rendering::RenderSystem;
use driftscape::scene::Scene;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    scene: Scene,
    render_config: RenderConfig,

    // Frame timing for tweens and delays
    last_frame: Instant,

    // Set when startup fails inside the event loop
    fatal: Option<Error>,
}

impl App {
    fn new(scene: Scene, render_config: RenderConfig) -> Self {
        Self {
            window: None,
            render_system: None,
            scene,
            render_config,
            last_frame: Instant::now(),
            fatal: None,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Error> {
        let window_attributes = Window::default_attributes()
            .with_title("Driftscape")
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attributes)?);
        let size = window.inner_size();
        self.scene.resize(size.width, size.height);

        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.scene,
            self.render_config.clone(),
        ))?;

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.last_frame = Instant::now();
        Ok(())
    }

    fn regenerate_plane(&mut self, config: PlaneConfig) {
        match self.scene.regenerate_plane(config) {
            Ok(previous) => {
                drop(previous);
                if let Some(render_system) = &mut self.render_system {
                    render_system.replace_plane(&self.scene.plane);
                }
            }
            Err(e) => log::warn!("plane not regenerated: {}", e),
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, code: KeyCode) {
        match code {
            KeyCode::Escape => event_loop.exit(),
            KeyCode::Enter | KeyCode::Space => {
                self.scene.trigger();
            }
            KeyCode::KeyR => {
                let config = self.scene.plane.config().clone();
                self.regenerate_plane(config);
            }
            KeyCode::Equal | KeyCode::NumpadAdd => {
                let config = self.scene.plane.config().with_segment_delta(1);
                self.regenerate_plane(config);
            }
            KeyCode::Minus | KeyCode::NumpadSubtract => {
                let config = self.scene.plane.config().with_segment_delta(-1);
                self.regenerate_plane(config);
            }
            _ => {}
        }
    }

    /// Render a single frame, then advance the scene
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_system) = &mut self.render_system else {
            return;
        };

        let now = Instant::now();
        let dt_s = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        if self.scene.plane.take_dirty() {
            render_system.update_plane_vertices(&self.scene.plane.vertices);
        }
        render_system.update_uniforms(&self.scene);

        match render_system.render(self.scene.overlay.is_visible()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (width, height) = render_system.size();
                render_system.resize(width, height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
                return;
            }
            Err(e) => log::warn!("render error: {:?}", e),
        }

        self.scene.tick(dt_s);
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        if let Err(e) = self.init_graphics(event_loop) {
            log::error!("startup failed: {}", e);
            self.fatal = Some(e);
            event_loop.exit();
            return;
        }

        log::info!("running: move the pointer over the plane, click or press Enter to fly");
        log::info!("keys: R regenerate, +/- subdivisions, Esc quit");
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        repeat: false,
                        ..
                    },
                ..
            } => self.handle_key(event_loop, code),
            WindowEvent::Resized(size) => {
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(size.width, size.height);
                }
                self.scene.resize(size.width, size.height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(window) = &self.window {
                    let size = window.inner_size();
                    self.scene
                        .set_pointer_from_pixels(position.x, position.y, size.width, size.height);
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.scene.trigger();
            }
            WindowEvent::RedrawRequested => self.render_frame(event_loop),
            _ => {}
        }
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let args = Args::parse();
    let params = args.scene_params()?;
    let render_config = args.render_config()?;
    log::info!("Driftscape - initializing (seed: {:?})", args.seed);

    let scene = Scene::new(params, render_config.aspect_ratio(), args.seed)?;
    let mut app = App::new(scene, render_config);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut app)?;

    match app.fatal.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

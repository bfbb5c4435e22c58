//! hyperwire - n-dimensional hypercube viewer
//!
//! Draws the wireframe of a hypercube projected down to the screen and
//! lets the keyboard translate, rotate and refocus it.

mod input;
mod systems;

use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use hyperwire::config::AppConfig;
use hyperwire_input::ViewController;
use hyperwire_render::{
    draw_wireframe, Hypercube, LineBatch, LineCanvas, ViewState, WireframeShape,
};

use input::{InputAction, InputMapper};
use systems::{FrameClock, RenderError, RenderSystem, WindowSystem};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    /// The solid being viewed, built once
    solid: Hypercube,
    /// Accumulated view parameters, changed by held keys every frame
    view: ViewState,
    controller: ViewController,
    /// Lines of the current frame
    batch: LineBatch,
    clock: FrameClock,
    /// Initialization failure to report once the loop exits
    fatal: Option<Box<dyn std::error::Error>>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let solid = Hypercube::new(config.solid.origin_point(), config.solid.edge_length);
        log::info!(
            "Built {}-cube: {} vertices, {} edges",
            solid.dimension(),
            solid.vertex_count(),
            solid.edge_count()
        );
        if config.debug.dump_solid {
            log::info!("Vertices: {:?}", solid.vertices());
            log::info!("Edges: {:?}", solid.edges());
        }

        let view = ViewState::new(solid.dimension(), config.view.focal_length);

        let controller = ViewController::new()
            .with_step(config.view.step)
            .with_focal_step(config.view.focal_step);

        let batch = LineBatch::with_capacity(solid.edge_count());
        let clock = FrameClock::new(config.view.frame_rate);

        Self {
            config,
            window: None,
            render: None,
            solid,
            view,
            controller,
            batch,
            clock,
            fatal: None,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn std::error::Error>> {
        let window = WindowSystem::create(event_loop, &self.config.window)?;
        log::info!("Window created: {}x{}", self.config.window.width, self.config.window.height);

        let render = RenderSystem::new(window.window().clone(), self.config.window.vsync)?;

        self.window = Some(window);
        self.render = Some(render);
        Ok(())
    }

    /// Draw the current view, then apply this frame's input
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render) = self.render.as_mut() else {
            return;
        };

        self.batch.clear(self.config.rendering.background_color);
        draw_wireframe(
            &self.solid,
            &self.view,
            render.size(),
            self.config.rendering.line_color,
            &mut self.batch,
        );

        if self.controller.is_active() {
            self.controller.apply(&mut self.view);
            if let Some(window) = &self.window {
                window.update_title(&self.view, self.controller.is_rotating());
            }
        }

        match render.render_frame(&self.batch) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => render.recover(),
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("{}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init_graphics(event_loop) {
            log::error!("Failed to initialize graphics: {}", e);
            self.fatal = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(render) = &mut self.render {
                    render.resize(size.width, size.height);
                }
            }

            WindowEvent::Focused(false) => {
                self.controller.release_all();
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state,
                        ..
                    },
                ..
            } => {
                if let Some(InputAction::Exit) = InputMapper::map_keyboard(key, state) {
                    log::info!("Exit requested");
                    event_loop.exit();
                    return;
                }
                // The title shows the mode, which the modifier switches
                if self.controller.process_keyboard(key, state) {
                    if let Some(window) = &self.window {
                        window.update_title(&self.view, self.controller.is_rotating());
                    }
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.clock.tick(Instant::now()) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_deadline()));
    }
}

/// Load configuration, falling back to defaults when no file parses
fn load_config() -> (AppConfig, Option<hyperwire::config::ConfigError>) {
    match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, load_error) = load_config();

    // Initialize logging; RUST_LOG wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting hyperwire");

    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    config.validate()?;

    // Create event loop
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    // Create and run application
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.fatal.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

//! Window management system
//!
//! Handles window creation, redraw requests, and title updates.

use std::sync::Arc;
use winit::{event_loop::ActiveEventLoop, window::Window};
use hyperwire::config::WindowConfig;
use hyperwire_render::ViewState;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    ///
    /// The size is in physical pixels so that screen-space coordinates
    /// match the configured size on any display scale.
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::PhysicalSize::new(
                config.width,
                config.height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Update window title with view state info
    pub fn update_title(&self, view: &ViewState, rotating: bool) {
        self.window.set_title(&format_title(&self.base_title, view, rotating));
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

fn format_title(base: &str, view: &ViewState, rotating: bool) -> String {
    let offset: Vec<String> = view
        .translation
        .coords()
        .iter()
        .map(|x| format!("{:.0}", x))
        .collect();
    let mode = if rotating { "rotate" } else { "move" };
    format!(
        "{} - ({}) f:{:.0} [{}]",
        base,
        offset.join(", "),
        view.focal_length,
        mode
    )
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_formatting_move() {
        let mut view = ViewState::new(4, 600.0);
        view.translation[0] = 15.0;
        let title = format_title("Test", &view, false);
        assert_eq!(title, "Test - (15, 0, 0, 0) f:600 [move]");
    }

    #[test]
    fn test_title_formatting_rotate() {
        let view = ViewState::new(3, 601.0);
        let title = format_title("Test", &view, true);
        assert!(title.contains("f:601"));
        assert!(title.ends_with("[rotate]"));
    }

    #[test]
    fn test_window_error_display() {
        let err = WindowError::CreationFailed("no display".to_string());
        assert_eq!(format!("{}", err), "Window creation failed: no display");
    }
}

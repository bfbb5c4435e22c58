//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod frame_clock;
mod render;
mod window;

pub use frame_clock::FrameClock;
pub use render::{RenderError, RenderSystem};
pub use window::WindowSystem;

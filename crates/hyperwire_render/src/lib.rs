//! Wireframe Rendering Library
//!
//! This crate turns an n-dimensional wireframe into line segments on
//! screen and draws them with wgpu.
//!
//! ## Key Components
//!
//! - [`view_state::ViewState`] - Accumulated translation, rotation and focal length
//! - [`wireframe`] - Per-vertex transform pipeline and edge drawing
//! - [`canvas::LineCanvas`] - The "draw a 2D line" capability
//! - [`canvas::LineBatch`] - CPU-side canvas collecting line vertices
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::LinePipeline`] - Draws a line batch in pixel coordinates

pub mod context;
pub mod view_state;
pub mod canvas;
pub mod wireframe;
pub mod pipeline;

// Re-export math types for convenience
pub use hyperwire_math::{PointN, Hypercube, WireframeShape, Edge};

pub use view_state::ViewState;
pub use canvas::{LineCanvas, LineBatch};
pub use wireframe::{transform_vertex, screen_points, draw_wireframe};

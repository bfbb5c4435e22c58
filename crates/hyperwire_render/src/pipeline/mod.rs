//! Rendering pipeline components
//!
//! This module contains the GPU types and the render pipeline that draws
//! a frame's line batch.

pub mod types;
pub mod line_pipeline;

// Re-export types
pub use types::{LineVertex, ScreenUniforms, INITIAL_LINE_CAPACITY};

// Re-export pipelines
pub use line_pipeline::{LinePipeline, to_wgpu_color};

//! Line drawing capability
//!
//! The frame pipeline only needs two things from a display: wipe it, and
//! draw a straight line between two screen points. [`LineCanvas`] is that
//! capability; [`LineBatch`] implements it on the CPU by collecting line
//! vertices that the GPU pipeline uploads once per frame.

use crate::pipeline::LineVertex;

/// Something 2D lines can be drawn on
///
/// Points are in pixels with the origin at the top-left corner and y
/// growing downwards.
pub trait LineCanvas {
    /// Discard everything drawn so far and fill with `color`
    fn clear(&mut self, color: [f32; 4]);

    /// Draw a line from `from` to `to`
    fn draw_line(&mut self, from: [f32; 2], to: [f32; 2], color: [f32; 4]);
}

/// Lines collected for one frame
#[derive(Clone, Debug)]
pub struct LineBatch {
    /// Two vertices per line
    pub vertices: Vec<LineVertex>,
    /// Color the frame is cleared to
    pub clear_color: [f32; 4],
}

impl LineBatch {
    /// Create an empty batch cleared to black
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Create an empty batch with room for `line_capacity` lines
    pub fn with_capacity(line_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(line_capacity * 2),
            ..Self::new()
        }
    }

    /// Get the number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.vertices.len() / 2
    }

    /// Get the number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterate over lines as endpoint pairs
    pub fn lines(&self) -> impl Iterator<Item = ([f32; 2], [f32; 2])> + '_ {
        self.vertices
            .chunks_exact(2)
            .map(|pair| (pair[0].position, pair[1].position))
    }
}

impl Default for LineBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl LineCanvas for LineBatch {
    fn clear(&mut self, color: [f32; 4]) {
        self.vertices.clear();
        self.clear_color = color;
    }

    fn draw_line(&mut self, from: [f32; 2], to: [f32; 2], color: [f32; 4]) {
        self.vertices.push(LineVertex::new(from, color));
        self.vertices.push(LineVertex::new(to, color));
    }
}

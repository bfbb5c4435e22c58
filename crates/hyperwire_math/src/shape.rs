//! Shape traits and primitives for wireframe geometry
//!
//! Shapes are pure geometric data - no colors or rendering info.

use serde::{Serialize, Deserialize};

use crate::PointN;

/// An undirected edge between two vertices, by index
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Index of the first endpoint
    pub a: usize,
    /// Index of the second endpoint
    pub b: usize,
}

impl Edge {
    /// Create a new edge between vertices `a` and `b`
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Endpoints as a sorted pair
    ///
    /// Useful for deduplication and comparison.
    pub fn canonical(&self) -> (usize, usize) {
        (self.a.min(self.b), self.a.max(self.b))
    }
}

/// Trait for shapes drawn as a wireframe
///
/// A WireframeShape provides the data needed to draw it:
/// - Vertices: the points that define the shape, all of one dimension
/// - Edges: index pairs into the vertex list
pub trait WireframeShape {
    /// Get the vertices of this shape
    fn vertices(&self) -> &[PointN];

    /// Get the edges of this shape
    fn edges(&self) -> &[Edge];

    /// Get the number of vertices
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Get the number of edges
    #[inline]
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Dimension of the space the vertices live in
    fn dimension(&self) -> usize {
        self.vertices().first().map(PointN::dimension).unwrap_or(0)
    }
}

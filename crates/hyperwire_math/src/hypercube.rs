//! Hypercube (n-cube) geometry
//!
//! An n-cube has 2^n vertices and n * 2^(n-1) edges. Vertex `i` sits at
//! the corner whose j-th coordinate is bit j of `i` (least significant
//! first), so two vertices share an edge exactly when their indices
//! differ in a single bit.

use crate::{PointN, shape::{WireframeShape, Edge}};

/// Largest dimension [`Hypercube::new`] accepts
///
/// 2^16 vertices and about half a million edges.
pub const MAX_DIMENSION: usize = 16;

/// An axis-aligned hypercube - pure geometry without colors
#[derive(Clone, Debug)]
pub struct Hypercube {
    /// Corner with every bit clear
    origin: PointN,
    /// Side length
    edge_length: f32,
    /// The 2^n corners
    vertices: Vec<PointN>,
    /// Edges in divide-and-conquer order
    edges: Vec<Edge>,
}

impl Hypercube {
    /// Create a hypercube with its first corner at `origin`
    ///
    /// The dimension is the dimension of `origin`. Every other corner adds
    /// `edge_length` along a subset of the axes.
    ///
    /// # Arguments
    /// * `origin` - Position of vertex 0
    /// * `edge_length` - The side length of the cube
    ///
    /// # Panics
    /// If the dimension of `origin` exceeds [`MAX_DIMENSION`].
    pub fn new(origin: PointN, edge_length: f32) -> Self {
        let dimension = origin.dimension();
        assert!(
            dimension <= MAX_DIMENSION,
            "hypercube dimension {} exceeds the maximum of {}",
            dimension,
            MAX_DIMENSION
        );
        let vertex_count = 1usize << dimension;

        let vertices = (0..vertex_count)
            .map(|i| {
                Self::unit_vertex(i, dimension)
                    .scaled(edge_length)
                    .translate(&origin)
            })
            .collect();

        let edges = if vertex_count >= 2 {
            cube_edges(vertex_count, 0)
        } else {
            Vec::new()
        };

        Self {
            origin,
            edge_length,
            vertices,
            edges,
        }
    }

    /// The corner of the unit cube {0,1}^n with index `index`
    ///
    /// Coordinate j is bit j of `index`, least significant first, so
    /// `unit_vertex(3, 3)` is `(1, 1, 0)`.
    pub fn unit_vertex(index: usize, dimension: usize) -> PointN {
        PointN::new(
            (0..dimension)
                .map(|bit| ((index >> bit) & 1) as f32)
                .collect(),
        )
    }

    /// Position of vertex 0
    #[inline]
    pub fn origin(&self) -> &PointN {
        &self.origin
    }

    /// Side length
    #[inline]
    pub fn edge_length(&self) -> f32 {
        self.edge_length
    }
}

impl WireframeShape for Hypercube {
    fn vertices(&self) -> &[PointN] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn dimension(&self) -> usize {
        self.origin.dimension()
    }
}

/// Edges of the cube made of vertices `start .. start + order`
///
/// A cube of order k (k vertices) is two cubes of order k/2, one per half
/// of the index range, plus k/2 edges joining index i of the first half to
/// index i + k/2 of the second. The smallest cube is a single edge.
///
/// `order` must be a power of two, at least 2.
pub fn cube_edges(order: usize, start: usize) -> Vec<Edge> {
    debug_assert!(order >= 2 && order.is_power_of_two());

    if order == 2 {
        return vec![Edge::new(start, start + 1)];
    }

    let half = order / 2;
    let mut edges = cube_edges(half, start);
    edges.extend(cube_edges(half, start + half));
    edges.extend((start..start + half).map(|i| Edge::new(i, i + half)));
    edges
}

/// Whether vertices `i` and `j` of a hypercube are joined by an edge
///
/// True exactly when the indices differ in one bit.
#[inline]
pub fn is_cube_edge(i: usize, j: usize) -> bool {
    (i ^ j).is_power_of_two()
}

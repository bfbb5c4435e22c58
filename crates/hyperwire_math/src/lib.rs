//! n-Dimensional Mathematics Library
//!
//! This crate provides the geometry engine behind the hyperwire viewer:
//! points of arbitrary dimension, plane rotations, perspective projection
//! and the hypercube wireframe itself.
//!
//! ## Core Types
//!
//! - [`PointN`] - A point with any number of coordinates
//! - [`AxisPair`] - A coordinate plane used for rotation
//!
//! ## Shape Types
//!
//! - [`WireframeShape`] - Trait for shapes made of vertices and edges
//! - [`Edge`] - An undirected pair of vertex indices
//! - [`Hypercube`] - An axis-aligned n-cube

mod point;
pub mod rotation;
pub mod projection;
pub mod shape;
pub mod hypercube;

pub use point::PointN;
pub use rotation::{AxisPair, rotate_in_plane, rotate_about, rotation_pair_count, ANGLE_UNITS_PER_RADIAN};
pub use projection::{project_once, project_to_plane};
pub use shape::{WireframeShape, Edge};
pub use hypercube::{Hypercube, MAX_DIMENSION};

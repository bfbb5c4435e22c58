//! hyperwire - n-dimensional hypercube wireframe viewer
//!
//! The geometry lives in `hyperwire_math`, input handling in
//! `hyperwire_input` and drawing in `hyperwire_render`. This crate holds
//! the application configuration shared by the binary and its tests.

pub mod config;

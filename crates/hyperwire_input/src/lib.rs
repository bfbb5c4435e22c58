//! Keyboard input for the hyperwire viewer
//!
//! This crate tracks which keys are held and turns them into per-frame
//! changes of the view: translation, plane rotation and focal length.

mod bindings;
mod view_controller;

pub use bindings::{KeyPair, ROTATION_MODIFIER, TRANSLATION_KEYS, ROTATION_KEYS, FOCAL_INCREASE, FOCAL_DECREASE};
pub use view_controller::{ViewController, ViewControl};

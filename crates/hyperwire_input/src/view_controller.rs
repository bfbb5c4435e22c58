//! View controller for held-key input handling
//!
//! Key events only update the set of held keys. Once per frame,
//! [`ViewController::apply`] reads that set and nudges the view by a fixed
//! step for every held key, so holding a key moves the view at a constant
//! rate per frame.

use std::collections::HashSet;

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::bindings::{
    is_bound, KeyPair, FOCAL_DECREASE, FOCAL_INCREASE, ROTATION_KEYS, ROTATION_MODIFIER,
    TRANSLATION_KEYS,
};

/// View controller for handling keyboard input
pub struct ViewController {
    held: HashSet<KeyCode>,

    // Configuration
    pub step: f32,
    pub focal_step: f32,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewController {
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
            step: 5.0,
            focal_step: 1.0,
        }
    }

    /// Process keyboard input
    ///
    /// Returns true if the key is part of the view layout.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        match state {
            ElementState::Pressed => self.held.insert(key),
            ElementState::Released => self.held.remove(&key),
        };
        is_bound(key)
    }

    /// Forget every held key
    ///
    /// Release events are lost while the window is unfocused.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Check whether a key is currently held
    #[inline]
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Check whether the rotation modifier is held
    #[inline]
    pub fn is_rotating(&self) -> bool {
        self.is_held(ROTATION_MODIFIER)
    }

    /// Apply one frame of held-key input to `view`
    ///
    /// With the rotation modifier held the movement keys change plane
    /// angles, otherwise they change the translation. Focal length keys
    /// work in both modes.
    pub fn apply<V: ViewControl>(&self, view: &mut V) {
        if self.is_rotating() {
            for (plane, pair) in ROTATION_KEYS.iter().enumerate() {
                let delta = self.pair_delta(pair, self.step);
                if delta != 0.0 {
                    view.rotate_plane(plane, delta);
                }
            }
        } else {
            for (axis, pair) in TRANSLATION_KEYS.iter().enumerate() {
                let delta = self.pair_delta(pair, self.step);
                if delta != 0.0 {
                    view.translate_axis(axis, delta);
                }
            }
        }

        let focal = self.pair_delta(&KeyPair::new(FOCAL_INCREASE, FOCAL_DECREASE), self.focal_step);
        if focal != 0.0 {
            view.adjust_focal_length(focal);
        }
    }

    /// Check if any key of the layout is held
    pub fn is_active(&self) -> bool {
        self.held.iter().any(|&key| is_bound(key))
    }

    fn pair_delta(&self, pair: &KeyPair, step: f32) -> f32 {
        let mut delta = 0.0;
        if self.is_held(pair.increase) {
            delta += step;
        }
        if self.is_held(pair.decrease) {
            delta -= step;
        }
        delta
    }

    /// Builder: set translation and rotation step per frame
    pub fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Builder: set focal length step per frame
    pub fn with_focal_step(mut self, step: f32) -> Self {
        self.focal_step = step;
        self
    }
}

/// Trait for view control
/// Allows the controller to drive any view state implementation
pub trait ViewControl {
    /// Shift the view along `axis`
    fn translate_axis(&mut self, axis: usize, delta: f32);
    /// Change the angle of rotation plane `plane`, in hundredths of a radian
    fn rotate_plane(&mut self, plane: usize, delta: f32);
    fn adjust_focal_length(&mut self, delta: f32);
}

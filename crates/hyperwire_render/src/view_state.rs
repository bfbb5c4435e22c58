//! Accumulated view parameters
//!
//! The view state holds everything the keyboard changes between frames:
//! - A translation offset per axis
//! - One rotation angle per coordinate plane, in hundredths of a radian
//! - The focal length used by every projection step
//!
//! It is owned by the frame loop and handed to the frame pipeline by
//! reference each frame.

use hyperwire_input::ViewControl;
use hyperwire_math::{rotation_pair_count, PointN};

/// View parameters for an n-dimensional scene
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    /// Offset added after rotation
    pub translation: PointN,
    /// One angle per plane, in [`hyperwire_math::AxisPair::all`] order
    pub rotation: Vec<f32>,
    /// Projection distance
    pub focal_length: f32,
}

impl ViewState {
    /// Create an untransformed view of n-dimensional space
    pub fn new(dimension: usize, focal_length: f32) -> Self {
        Self {
            translation: PointN::zeros(dimension),
            rotation: vec![0.0; rotation_pair_count(dimension)],
            focal_length,
        }
    }

    /// Dimension of the space being viewed
    #[inline]
    pub fn dimension(&self) -> usize {
        self.translation.dimension()
    }

    /// Point the rotation turns around
    #[inline]
    pub fn rotation_center(&self) -> PointN {
        PointN::zeros(self.dimension())
    }
}

impl ViewControl for ViewState {
    fn translate_axis(&mut self, axis: usize, delta: f32) {
        if axis < self.dimension() {
            self.translation[axis] += delta;
        }
    }

    fn rotate_plane(&mut self, plane: usize, delta: f32) {
        if let Some(angle) = self.rotation.get_mut(plane) {
            *angle += delta;
        }
    }

    fn adjust_focal_length(&mut self, delta: f32) {
        self.focal_length += delta;
        log::debug!("Focal length: {}", self.focal_length);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_state_new() {
        let view = ViewState::new(4, 600.0);
        assert_eq!(view.translation, PointN::zeros(4));
        assert_eq!(view.rotation.len(), 6);
        assert!(view.rotation.iter().all(|&a| a == 0.0));
        assert_eq!(view.focal_length, 600.0);
        assert_eq!(view.dimension(), 4);
    }

    #[test]
    fn test_view_control() {
        let mut view = ViewState::new(4, 600.0);
        view.translate_axis(2, 5.0);
        view.rotate_plane(5, -5.0);
        view.adjust_focal_length(1.0);
        assert_eq!(view.translation[2], 5.0);
        assert_eq!(view.rotation[5], -5.0);
        assert_eq!(view.focal_length, 601.0);
    }

    #[test]
    fn test_out_of_range_controls_ignored() {
        // A 3-d view has 3 planes; the fixed layout reaches axis 3 and plane 5
        let mut view = ViewState::new(3, 600.0);
        view.translate_axis(3, 5.0);
        view.rotate_plane(5, 5.0);
        assert_eq!(view, ViewState::new(3, 600.0));
    }

    #[test]
    fn test_rotation_center_is_origin() {
        let view = ViewState::new(5, 600.0);
        assert_eq!(view.rotation_center(), PointN::zeros(5));
    }
}

//! Perspective projection from n dimensions down to the plane
//!
//! One step divides every remaining coordinate by the distance along the
//! last axis:
//!
//! ```text
//!              f
//! x' = x * -------
//!           f + z
//! ```
//!
//! Repeating the step removes one axis at a time, always the last one,
//! until two coordinates are left.

use crate::PointN;

/// Project `point` one dimension down, dropping its last coordinate
///
/// Points with a non-positive last coordinate are behind the viewer. They
/// lose their last coordinate without any division, which keeps the
/// result finite and avoids the sign flip of a negative denominator.
///
/// # Panics
/// If `point` has no coordinates.
pub fn project_once(point: &PointN, focal_length: f32) -> PointN {
    let z = point
        .last()
        .expect("cannot project a zero-dimensional point");

    let rest = point.drop_last();
    if z <= 0.0 {
        return rest;
    }

    PointN::new(
        rest.coords()
            .iter()
            .map(|x| x * focal_length / (focal_length + z))
            .collect(),
    )
}

/// Project `point` all the way down to two dimensions
///
/// # Panics
/// If `point` has fewer than two coordinates.
pub fn project_to_plane(point: &PointN, focal_length: f32) -> [f32; 2] {
    assert!(
        point.dimension() >= 2,
        "cannot project a {}-d point to the plane",
        point.dimension()
    );

    let mut current = point.clone();
    while current.dimension() > 2 {
        current = project_once(&current, focal_length);
    }
    [current[0], current[1]]
}

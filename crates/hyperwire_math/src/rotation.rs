//! Rotations in coordinate planes
//!
//! In n dimensions, rotations happen in planes rather than around axes.
//! Every unordered pair of coordinate axes spans one such plane, giving
//! n*(n-1)/2 planes in total (6 in 4D: XY, XZ, XW, YZ, YW, ZW).
//!
//! The composed rotation walks those planes in lexicographic order and
//! consumes one angle per plane. Plane rotations do not commute, so the
//! order is part of the contract.

use crate::PointN;

/// Angles are stored in hundredths of a radian
pub const ANGLE_UNITS_PER_RADIAN: f32 = 100.0;

/// A coordinate plane spanned by axes `a` and `b`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AxisPair {
    /// First axis (rotated towards `b` for positive angles)
    pub a: usize,
    /// Second axis
    pub b: usize,
}

impl AxisPair {
    /// Create an axis pair
    #[inline]
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// All planes of n-dimensional space with `a < b`, sorted by `a`
    /// then by `b`
    pub fn all(dimension: usize) -> impl Iterator<Item = AxisPair> {
        (0..dimension).flat_map(move |a| ((a + 1)..dimension).map(move |b| AxisPair::new(a, b)))
    }
}

/// Number of coordinate planes in n-dimensional space
#[inline]
pub const fn rotation_pair_count(dimension: usize) -> usize {
    dimension * dimension.saturating_sub(1) / 2
}

/// Rotate `point` by `radians` in the plane of `pair`
///
/// Only coordinates `a` and `b` change:
/// `a' = a*cos - b*sin`, `b' = a*sin + b*cos`.
pub fn rotate_in_plane(point: &PointN, radians: f32, pair: AxisPair) -> PointN {
    let x = point[pair.a];
    let y = point[pair.b];
    let (sin, cos) = radians.sin_cos();

    let mut result = point.clone();
    result[pair.a] = x * cos - y * sin;
    result[pair.b] = x * sin + y * cos;
    result
}

/// Rotate `point` around `center` through every coordinate plane
///
/// `angles` holds one angle per plane, in hundredths of a radian, in the
/// order produced by [`AxisPair::all`].
///
/// # Panics
/// If `angles` does not hold exactly one angle per plane.
pub fn rotate_about(point: &PointN, angles: &[f32], center: &PointN) -> PointN {
    let dimension = point.dimension();
    assert_eq!(
        angles.len(),
        rotation_pair_count(dimension),
        "{}-d rotation needs {} angles, got {}",
        dimension,
        rotation_pair_count(dimension),
        angles.len()
    );

    let local = point - center;
    let rotated = AxisPair::all(dimension)
        .zip(angles)
        .fold(local, |p, (pair, &angle)| {
            rotate_in_plane(&p, angle / ANGLE_UNITS_PER_RADIAN, pair)
        });
    rotated.translate(center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-4;

    fn assert_close(a: &PointN, b: &PointN) {
        assert_eq!(a.dimension(), b.dimension());
        for (x, y) in a.coords().iter().zip(b.coords()) {
            assert!((x - y).abs() < EPSILON, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_axis_pairs_lexicographic() {
        let pairs: Vec<_> = AxisPair::all(4).map(|p| (p.a, p.b)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn test_pair_count() {
        assert_eq!(rotation_pair_count(0), 0);
        assert_eq!(rotation_pair_count(1), 0);
        assert_eq!(rotation_pair_count(2), 1);
        assert_eq!(rotation_pair_count(3), 3);
        assert_eq!(rotation_pair_count(4), 6);
        for n in 0..8 {
            assert_eq!(AxisPair::all(n).count(), rotation_pair_count(n));
        }
    }

    #[test]
    fn test_rotate_in_plane_quarter_turn() {
        let p = PointN::from([1.0, 0.0, 7.0]);
        let r = rotate_in_plane(&p, FRAC_PI_2, AxisPair::new(0, 1));
        assert_close(&r, &PointN::from([0.0, 1.0, 7.0]));
    }

    #[test]
    fn test_rotate_in_plane_leaves_other_axes() {
        let p = PointN::from([1.0, 2.0, 3.0, 4.0]);
        let r = rotate_in_plane(&p, 0.7, AxisPair::new(1, 3));
        assert_eq!(r[0], 1.0);
        assert_eq!(r[2], 3.0);
        // Length in the rotated plane is preserved
        let before = 2.0f32.hypot(4.0);
        let after = r[1].hypot(r[3]);
        assert!((before - after).abs() < EPSILON);
    }

    #[test]
    fn test_zero_angles_is_identity() {
        let centers = [PointN::zeros(4), PointN::from([3.0, -8.0, 0.5, 100.0])];
        let p = PointN::from([-50.0, 450.0, 50.0, -50.0]);
        for center in &centers {
            let r = rotate_about(&p, &[0.0; 6], center);
            assert_close(&r, &p);
        }
    }

    #[test]
    fn test_angle_units_are_hundredths() {
        // 157.0796 hundredths of a radian is a quarter turn in the first plane
        let angle = FRAC_PI_2 * ANGLE_UNITS_PER_RADIAN;
        let p = PointN::from([1.0, 0.0, 0.0, 0.0]);
        let r = rotate_about(&p, &[angle, 0.0, 0.0, 0.0, 0.0, 0.0], &PointN::zeros(4));
        assert_close(&r, &PointN::from([0.0, 1.0, 0.0, 0.0]));
    }

    #[test]
    fn test_angles_consumed_in_plane_order() {
        // Each slot rotates only its own plane: slot 5 is the ZW plane
        let angle = FRAC_PI_2 * ANGLE_UNITS_PER_RADIAN;
        let p = PointN::from([0.0, 0.0, 1.0, 0.0]);
        let mut angles = [0.0; 6];
        angles[5] = angle;
        let r = rotate_about(&p, &angles, &PointN::zeros(4));
        assert_close(&r, &PointN::from([0.0, 0.0, 0.0, 1.0]));

        // Slot 2 is the XW plane and leaves a Z-only point alone
        let mut angles = [0.0; 6];
        angles[2] = angle;
        let r = rotate_about(&p, &angles, &PointN::zeros(4));
        assert_close(&r, &p);
    }

    #[test]
    fn test_composition_order_matters() {
        // XY then XZ differs from applying XZ first
        let q = FRAC_PI_2 * ANGLE_UNITS_PER_RADIAN;
        let p = PointN::from([1.0, 0.0, 0.0]);
        let composed = rotate_about(&p, &[q, q, 0.0], &PointN::zeros(3));
        // XY sends x to y, then XZ leaves y alone
        assert_close(&composed, &PointN::from([0.0, 1.0, 0.0]));

        let reversed = rotate_in_plane(
            &rotate_in_plane(&p, FRAC_PI_2, AxisPair::new(0, 2)),
            FRAC_PI_2,
            AxisPair::new(0, 1),
        );
        assert_close(&reversed, &PointN::from([0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_rotation_about_center() {
        let center = PointN::from([10.0, 10.0]);
        let p = PointN::from([11.0, 10.0]);
        let q = FRAC_PI_2 * ANGLE_UNITS_PER_RADIAN;
        let r = rotate_about(&p, &[q], &center);
        assert_close(&r, &PointN::from([10.0, 11.0]));
        // The center itself is a fixed point
        assert_close(&rotate_about(&center, &[q], &center), &center);
    }

    #[test]
    #[should_panic(expected = "needs 6 angles")]
    fn test_wrong_angle_count_panics() {
        let _ = rotate_about(&PointN::zeros(4), &[0.0; 4], &PointN::zeros(4));
    }
}

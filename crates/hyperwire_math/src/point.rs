//! n-dimensional point type

use serde::{Serialize, Deserialize};

/// A point in n-dimensional space
///
/// The dimension is the number of coordinates. Operations combining two
/// points require both to have the same dimension and panic otherwise,
/// the same way slice indexing panics on a bad index.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointN {
    coords: Vec<f32>,
}

impl PointN {
    /// Create a point from its coordinates
    #[inline]
    pub fn new(coords: Vec<f32>) -> Self {
        Self { coords }
    }

    /// The origin of n-dimensional space
    #[inline]
    pub fn zeros(dimension: usize) -> Self {
        Self { coords: vec![0.0; dimension] }
    }

    /// Number of coordinates
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// Coordinates as a slice
    #[inline]
    pub fn coords(&self) -> &[f32] {
        &self.coords
    }

    /// The last coordinate, if any
    #[inline]
    pub fn last(&self) -> Option<f32> {
        self.coords.last().copied()
    }

    /// Component-wise addition of `offset`
    ///
    /// Translating by `-offset` afterwards undoes the translation.
    pub fn translate(&self, offset: &PointN) -> PointN {
        assert_dimensions_match(self, offset);
        PointN::new(
            self.coords
                .iter()
                .zip(&offset.coords)
                .map(|(x, o)| x + o)
                .collect(),
        )
    }

    /// Copy of this point without its last coordinate
    pub fn drop_last(&self) -> PointN {
        let keep = self.coords.len().saturating_sub(1);
        PointN::new(self.coords[..keep].to_vec())
    }

    /// Multiply every coordinate by `scalar`
    pub fn scaled(&self, scalar: f32) -> PointN {
        PointN::new(self.coords.iter().map(|x| x * scalar).collect())
    }
}

fn assert_dimensions_match(a: &PointN, b: &PointN) {
    assert_eq!(
        a.dimension(),
        b.dimension(),
        "dimension mismatch: {}-d point combined with {}-d point",
        a.dimension(),
        b.dimension()
    );
}

impl From<Vec<f32>> for PointN {
    fn from(coords: Vec<f32>) -> Self {
        Self::new(coords)
    }
}

impl From<&[f32]> for PointN {
    fn from(coords: &[f32]) -> Self {
        Self::new(coords.to_vec())
    }
}

impl<const N: usize> From<[f32; N]> for PointN {
    fn from(coords: [f32; N]) -> Self {
        Self::new(coords.to_vec())
    }
}

// Operator overloads

impl std::ops::Index<usize> for PointN {
    type Output = f32;
    #[inline]
    fn index(&self, axis: usize) -> &f32 {
        &self.coords[axis]
    }
}

impl std::ops::IndexMut<usize> for PointN {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut f32 {
        &mut self.coords[axis]
    }
}

impl std::ops::Add<&PointN> for &PointN {
    type Output = PointN;
    #[inline]
    fn add(self, other: &PointN) -> PointN {
        self.translate(other)
    }
}

impl std::ops::Add for PointN {
    type Output = PointN;
    #[inline]
    fn add(self, other: PointN) -> PointN {
        self.translate(&other)
    }
}

impl std::ops::AddAssign<&PointN> for PointN {
    fn add_assign(&mut self, other: &PointN) {
        assert_dimensions_match(self, other);
        for (x, o) in self.coords.iter_mut().zip(&other.coords) {
            *x += o;
        }
    }
}

impl std::ops::Sub<&PointN> for &PointN {
    type Output = PointN;
    #[inline]
    fn sub(self, other: &PointN) -> PointN {
        self.translate(&-other)
    }
}

impl std::ops::Sub for PointN {
    type Output = PointN;
    #[inline]
    fn sub(self, other: PointN) -> PointN {
        &self - &other
    }
}

impl std::ops::Neg for &PointN {
    type Output = PointN;
    #[inline]
    fn neg(self) -> PointN {
        PointN::new(self.coords.iter().map(|x| -x).collect())
    }
}

impl std::ops::Neg for PointN {
    type Output = PointN;
    #[inline]
    fn neg(self) -> PointN {
        -&self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &PointN, b: &PointN) {
        assert_eq!(a.dimension(), b.dimension());
        for (x, y) in a.coords().iter().zip(b.coords()) {
            assert!((x - y).abs() < 1e-4, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_new() {
        let p = PointN::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(p.dimension(), 4);
        assert_eq!(p[0], 1.0);
        assert_eq!(p[3], 4.0);
        assert_eq!(p.last(), Some(4.0));
    }

    #[test]
    fn test_zeros() {
        let p = PointN::zeros(5);
        assert_eq!(p.dimension(), 5);
        assert!(p.coords().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_translate() {
        let p = PointN::from([1.0, 2.0, 3.0]);
        let moved = p.translate(&PointN::from([10.0, -2.0, 0.5]));
        assert_eq!(moved, PointN::from([11.0, 0.0, 3.5]));
    }

    #[test]
    fn test_translate_round_trip() {
        let points = [
            PointN::from([1.5, -2.25, 3.0, 400.0]),
            PointN::from([-50.0, -50.0, 50.0, -50.0]),
            PointN::from([0.1, 0.2]),
        ];
        let offsets = [
            PointN::from([0.3, 7.0, -11.0, 123.456]),
            PointN::from([5.0, 10.0, -15.0, 20.0]),
            PointN::from([-0.7, 1e3]),
        ];
        for (p, o) in points.iter().zip(&offsets) {
            let back = p.translate(o).translate(&-o);
            assert_close(&back, p);
        }
    }

    #[test]
    fn test_drop_last() {
        let p = PointN::from([1.0, 2.0, 3.0]);
        assert_eq!(p.drop_last(), PointN::from([1.0, 2.0]));
        assert_eq!(PointN::zeros(0).drop_last().dimension(), 0);
    }

    #[test]
    fn test_operators() {
        let a = PointN::from([1.0, 2.0]);
        let b = PointN::from([3.0, 5.0]);
        assert_eq!(&a + &b, PointN::from([4.0, 7.0]));
        assert_eq!(&b - &a, PointN::from([2.0, 3.0]));
        assert_eq!(-a.clone(), PointN::from([-1.0, -2.0]));

        let mut c = a.clone();
        c += &b;
        assert_eq!(c, PointN::from([4.0, 7.0]));
        c[1] = 0.0;
        assert_eq!(c[1], 0.0);
    }

    #[test]
    fn test_scaled() {
        let p = PointN::from([1.0, 0.0, 1.0]);
        assert_eq!(p.scaled(500.0), PointN::from([500.0, 0.0, 500.0]));
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn test_mismatched_dimensions_panic() {
        let _ = PointN::zeros(3).translate(&PointN::zeros(4));
    }
}

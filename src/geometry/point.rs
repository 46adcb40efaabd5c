use crate::math::Matrix;

/// Point in n-dimensional space.
///
/// A point is a 1×N matrix with positional semantics only; every matrix
/// operation is available on it. The difference of two points is a
/// displacement, see [`Vector::between`](super::Vector::between).
pub type Point<T, const N: usize> = Matrix<T, 1, N>;

/// 3D point with `f64` coordinates.
pub type Point3 = Point<f64, 3>;

/// Creates a 3D point from its coordinates.
#[must_use]
pub fn point3(x: f64, y: f64, z: f64) -> Point3 {
    Point3::from_rows([[x, y, z]])
}

use std::ops::Neg;

use crate::error::Result;
use crate::math::{to_f64, Matrix, Promote, Scalar};

use super::point::Point;

/// Mathematical vector in n-dimensional space.
///
/// A thin directional wrapper over a 1×N matrix, adding length and
/// normalization on top of the matrix arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<T: Scalar, const N: usize> {
    data: Matrix<T, 1, N>,
}

/// 3D vector with `f64` components.
pub type Vector3 = Vector<f64, 3>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Creates a vector from its components.
    #[must_use]
    pub fn new(components: [T; N]) -> Self {
        Self {
            data: Matrix::from_rows([components]),
        }
    }

    /// The all-zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            data: Matrix::new(),
        }
    }

    /// Component at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index >= N`.
    pub fn coord(&self, index: usize) -> Result<T> {
        self.data.at(0, index)
    }

    /// The underlying 1×N matrix.
    #[must_use]
    pub fn as_matrix(&self) -> &Matrix<T, 1, N> {
        &self.data
    }

    /// Mutable access to the underlying 1×N matrix.
    pub fn as_matrix_mut(&mut self) -> &mut Matrix<T, 1, N> {
        &mut self.data
    }

    /// Iterates the components in order.
    pub fn iter(&self) -> std::iter::Flatten<std::slice::Iter<'_, [T; N]>> {
        self.data.iter()
    }

    /// Component-wise negation.
    #[must_use]
    pub fn negated(&self) -> Self
    where
        T: Neg<Output = T>,
    {
        Self { data: -self.data }
    }
}

impl<T, const N: usize> Vector<T, N>
where
    T: Scalar + Promote<T, Output = T>,
{
    /// The displacement between two points, computed as `from - to`.
    ///
    /// The orientation matters: rotation and shift math downstream relies
    /// on the difference pointing from `to` towards `from`.
    #[must_use]
    pub fn between(from: &Point<T, N>, to: &Point<T, N>) -> Self {
        Self { data: *from - *to }
    }

    /// The Euclidean length, the square root of `self · selfᵀ`.
    #[must_use]
    pub fn length(&self) -> f64 {
        let square = (self.data * self.data.transposed()).into_scalar();
        to_f64(square).sqrt()
    }

    /// A unit-length vector with the same direction.
    ///
    /// Returns the zero vector, not an error, when the length is exactly
    /// zero.
    #[must_use]
    pub fn normalize(&self) -> Vector<f64, N> {
        let len = self.length();
        if len == 0.0 {
            return Vector::zero();
        }
        let components = self.data.as_slice();
        Vector {
            data: Matrix::from_fn(|_, col| to_f64(components[col]) / len),
        }
    }
}

impl<T: Scalar, const N: usize> From<Matrix<T, 1, N>> for Vector<T, N> {
    fn from(data: Matrix<T, 1, N>) -> Self {
        Self { data }
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

pub mod matrix;
pub mod scalar;

pub use matrix::{dot, ColumnIter, ColumnLane, Lane, Matrix, RowLane};
pub use scalar::{to_f64, Promote, Scalar};

/// 3x3 transformation matrix.
pub type Matrix3 = Matrix<f64, 3, 3>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

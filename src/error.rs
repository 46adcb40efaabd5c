use thiserror::Error;

/// Top-level error type for the Geomat toolkit.
#[derive(Debug, Error)]
pub enum GeomatError {
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error(transparent)]
    Polyline(#[from] PolylineError),
}

/// Errors related to matrix construction and access.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatrixError {
    #[error("index [{row}, {col}] is out of bounds for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("row index {index} is out of bounds for a {rows}x{cols} matrix")]
    RowOutOfBounds {
        index: usize,
        rows: usize,
        cols: usize,
    },

    #[error("column index {index} is out of bounds for a {rows}x{cols} matrix")]
    ColumnOutOfBounds {
        index: usize,
        rows: usize,
        cols: usize,
    },

    #[error("source of {got} elements exceeds matrix capacity {capacity}")]
    TooManyElements { got: usize, capacity: usize },
}

/// Errors related to polyline storage and access.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolylineError {
    #[error("point index {index} is out of range for a polyline of {size} points")]
    PointOutOfRange { index: usize, size: usize },

    #[error("cannot allocate storage for {requested} points")]
    AllocationFailed { requested: usize },
}

/// Convenience type alias for results using [`GeomatError`].
pub type Result<T> = std::result::Result<T, GeomatError>;

pub mod point;
pub mod polyline;
pub mod vector;

pub use point::{point3, Point, Point3};
pub use polyline::{choose_merge_strategy, MergeStrategy, Polyline, Vertex};
pub use vector::{Vector, Vector3};

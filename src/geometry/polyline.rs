use std::mem;

use crate::error::{PolylineError, Result};
use crate::math::{to_f64, Matrix3, Promote, Scalar};

use super::point::Point;
use super::vector::Vector;

/// Fixed growth increment for the backing buffer.
const CHUNK: usize = 5;

/// One stored vertex: a 3D point and its single-character label.
///
/// Point and label live in the same record, so the two can never disagree
/// in count when the buffer is resized or copied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex<T: Scalar> {
    pub point: Point<T, 3>,
    pub label: char,
}

impl<T: Scalar> Vertex<T> {
    fn filler() -> Self {
        Self {
            point: Point::new(),
            label: '\0',
        }
    }
}

/// Storage strategy for a move-based merge, chosen by relative spare
/// capacity before any mutation happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// The destination already has room for the incoming points.
    AppendInPlace,
    /// The source buffer can hold the combined sequence; adopt it.
    AdoptOtherBuffer,
    /// Neither buffer is large enough; allocate a combined one.
    Reallocate,
}

/// Picks the cheapest storage strategy for merging `incoming` points into
/// a polyline with `self_spare` unused slots, given that the source buffer
/// holds `other_capacity` slots and the merged sequence needs `combined`.
#[must_use]
pub fn choose_merge_strategy(
    self_spare: usize,
    other_capacity: usize,
    incoming: usize,
    combined: usize,
) -> MergeStrategy {
    if self_spare >= incoming {
        MergeStrategy::AppendInPlace
    } else if other_capacity >= combined {
        MergeStrategy::AdoptOtherBuffer
    } else {
        MergeStrategy::Reallocate
    }
}

/// Ordered sequence of labeled 3D points defining connected line segments.
///
/// The polyline manages its own backing storage: one buffer of [`Vertex`]
/// records whose length is the capacity, with the live points in the
/// prefix. The buffer grows by a fixed increment of 5 slots, not
/// geometrically. Point order is significant; consecutive points define
/// the segments measured by [`length`](Polyline::length).
#[derive(Debug)]
pub struct Polyline<T: Scalar> {
    buf: Box<[Vertex<T>]>,
    len: usize,
}

impl<T: Scalar> Polyline<T> {
    /// Creates an empty polyline with no allocated storage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: Box::new([]),
            len: 0,
        }
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the polyline holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of points the current buffer can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Builds a zero-initialized buffer of `capacity` vertex slots.
    #[allow(clippy::cast_sign_loss)]
    fn alloc_buffer(capacity: usize) -> std::result::Result<Box<[Vertex<T>]>, PolylineError> {
        let bytes = capacity.checked_mul(mem::size_of::<Vertex<T>>());
        if bytes.is_none_or(|b| b > isize::MAX as usize) {
            return Err(PolylineError::AllocationFailed {
                requested: capacity,
            });
        }
        Ok(std::iter::repeat_with(Vertex::filler)
            .take(capacity)
            .collect())
    }

    /// Replaces the buffer with one of `new_capacity` slots, carrying the
    /// live prefix over. The new buffer is fully built before the old one
    /// is released, so a failed growth leaves the polyline untouched.
    fn grow(&mut self, new_capacity: usize) -> std::result::Result<(), PolylineError> {
        if new_capacity == self.buf.len() {
            return Ok(());
        }
        let mut fresh = Self::alloc_buffer(new_capacity)?;
        fresh[..self.len].copy_from_slice(&self.buf[..self.len]);
        self.buf = fresh;
        Ok(())
    }

    /// Appends a labeled point, growing the buffer by the fixed increment
    /// when full. Amortized O(1).
    ///
    /// # Errors
    ///
    /// Returns an error if the grown buffer would not be representable.
    pub fn add_point(&mut self, point: Point<T, 3>, label: char) -> Result<()> {
        if self.len == self.buf.len() {
            self.grow(self.buf.len() + CHUNK)?;
        }
        self.buf[self.len] = Vertex { point, label };
        self.len += 1;
        Ok(())
    }

    /// Label of the point at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index >= len`.
    pub fn get_point_name(&self, index: usize) -> Result<char> {
        if index >= self.len {
            return Err(PolylineError::PointOutOfRange {
                index,
                size: self.len,
            }
            .into());
        }
        Ok(self.buf[index].label)
    }

    /// Appends all of `other`'s points after this polyline's own, copying
    /// them and growing the buffer if the headroom is insufficient.
    ///
    /// # Errors
    ///
    /// Returns an error if the grown buffer would not be representable.
    pub fn merge_line(&mut self, other: &Self) -> Result<()> {
        if other.len == 0 {
            return Ok(());
        }
        let combined = self.len + other.len;
        if self.buf.len() < combined {
            self.grow(self.buf.len() + other.len)?;
        }
        self.buf[self.len..combined].copy_from_slice(&other.buf[..other.len]);
        self.len = combined;
        Ok(())
    }

    /// Appends all of `other`'s points after this polyline's own,
    /// consuming `other` so its storage can be reused.
    ///
    /// The strategy comes from [`choose_merge_strategy`]: append into
    /// existing headroom, adopt the source's larger buffer, or reallocate
    /// once for the combined sequence. Every branch keeps this polyline's
    /// points first, followed by `other`'s in order.
    ///
    /// # Errors
    ///
    /// Returns an error if a combined buffer would not be representable;
    /// the polyline is left unchanged in that case.
    pub fn merge_line_owned(&mut self, mut other: Self) -> Result<()> {
        if other.len == 0 {
            return Ok(());
        }
        let combined = self.len + other.len;
        let spare = self.buf.len() - self.len;
        match choose_merge_strategy(spare, other.buf.len(), other.len, combined) {
            MergeStrategy::AppendInPlace => {
                self.buf[self.len..combined].copy_from_slice(&other.buf[..other.len]);
            }
            MergeStrategy::AdoptOtherBuffer => {
                // Shift the source's content to the tail first; the ranges
                // overlap, so the copy runs back to front.
                other.buf.copy_within(..other.len, self.len);
                other.buf[..self.len].copy_from_slice(&self.buf[..self.len]);
                mem::swap(&mut self.buf, &mut other.buf);
            }
            MergeStrategy::Reallocate => {
                let mut fresh = Self::alloc_buffer(combined)?;
                fresh[..self.len].copy_from_slice(&self.buf[..self.len]);
                fresh[self.len..combined].copy_from_slice(&other.buf[..other.len]);
                self.buf = fresh;
            }
        }
        self.len = combined;
        Ok(())
    }

    /// Iterates the points in insertion order.
    pub fn points(&self) -> impl DoubleEndedIterator<Item = &Point<T, 3>> + '_ {
        self.buf[..self.len].iter().map(|v| &v.point)
    }

    /// Iterates the point labels in insertion order.
    pub fn labels(&self) -> impl DoubleEndedIterator<Item = char> + '_ {
        self.buf[..self.len].iter().map(|v| v.label)
    }

    /// Iterates the stored vertices in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Vertex<T>> {
        self.buf[..self.len].iter()
    }
}

impl<T> Polyline<T>
where
    T: Scalar + Promote<T, Output = T>,
{
    /// Total length: the sum of Euclidean distances between consecutive
    /// points. Zero for fewer than two points.
    #[must_use]
    pub fn length(&self) -> f64 {
        if self.len <= 1 {
            return 0.0;
        }
        self.buf[..self.len]
            .windows(2)
            .map(|pair| Vector::between(&pair[0].point, &pair[1].point).length())
            .sum()
    }

    /// Translates every point by `diff`, in place.
    pub fn shift(&mut self, diff: &Vector<T, 3>) {
        for vertex in &mut self.buf[..self.len] {
            vertex.point = vertex.point + *diff.as_matrix();
        }
    }

    /// Rotates every point around `axis` by `angle` radians, in place.
    ///
    /// The axis is normalized internally and the points are
    /// right-multiplied by the Rodrigues rotation matrix for the
    /// axis/angle pair. A zero-length axis divides to NaN, and the NaN
    /// flows silently through every rotated coordinate; no error is
    /// reported.
    pub fn rotate(&mut self, axis: &Vector<T, 3>, angle: f64)
    where
        T: Promote<f64, Output = T>,
    {
        let len = axis.length();
        let coords = axis.as_matrix().as_slice();
        let x = to_f64(coords[0]) / len;
        let y = to_f64(coords[1]) / len;
        let z = to_f64(coords[2]) / len;
        let (sin, cos) = angle.sin_cos();
        let t = 1.0 - cos;

        let rotation = Matrix3::from_rows([
            [cos + x * x * t, y * x * t + z * sin, z * x * t - y * sin],
            [x * y * t - z * sin, cos + y * y * t, z * y * t + x * sin],
            [x * z * t + y * sin, y * z * t - x * sin, cos + z * z * t],
        ]);

        for vertex in &mut self.buf[..self.len] {
            vertex.point = vertex.point * rotation;
        }
    }

    /// Removes the point that is farthest from its nearest neighbor, a
    /// rough local-outlier measure. No-op for fewer than three points.
    ///
    /// Interior points score the minimum of the distances to their two
    /// neighbors; the endpoints score the distance to their single
    /// neighbor. Interior points are scanned first and the earliest
    /// strict maximum wins; each endpoint then overrides only on a
    /// strictly greater score.
    pub fn remove_most_isolated_point(&mut self) {
        if self.len <= 2 {
            return;
        }

        let last = self.len - 1;
        let verts = &self.buf[..self.len];
        let gap = |a: usize, b: usize| Vector::between(&verts[a].point, &verts[b].point).length();

        let mut best_score = 0.0_f64;
        let mut index = 0;
        for i in 1..last {
            let score = gap(i - 1, i).min(gap(i, i + 1));
            if score > best_score {
                best_score = score;
                index = i;
            }
        }
        if gap(0, 1) > best_score {
            best_score = gap(0, 1);
            index = 0;
        }
        if gap(last - 1, last) > best_score {
            index = last;
        }

        self.buf.copy_within(index + 1..self.len, index);
        self.len -= 1;
    }
}

impl<T: Scalar> Default for Polyline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Clone for Polyline<T> {
    /// Clones with capacity trimmed to the live point count.
    fn clone(&self) -> Self {
        Self {
            buf: self.buf[..self.len].iter().copied().collect(),
            len: self.len,
        }
    }
}

/// Polylines are equal iff they hold the same points in the same order;
/// labels are not compared.
impl<T: Scalar> PartialEq for Polyline<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.point == b.point)
    }
}

impl<'a, T: Scalar> IntoIterator for &'a Polyline<T> {
    type Item = &'a Vertex<T>;
    type IntoIter = std::slice::Iter<'a, Vertex<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

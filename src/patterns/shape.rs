//! Named sets of offsets with value semantics.

use super::error::ShapeError;
use super::transform::{Matrix, Transform, apply_matrix};
use super::Offset;
use serde::Serialize;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use tracing::instrument;

/// A geometric template: a named, immutable set of unique offsets.
///
/// Identity is the offset set alone. Two shapes with the same offsets are
/// equal and hash identically regardless of their names, so any hashed
/// collection deduplicates them.
///
/// Every offset lies within `±MAX_EXTENT` and the shape spans at most
/// `MAX_EXTENT` on each axis, so transforming and normalizing can never
/// overflow.
#[derive(Debug, Clone, Serialize)]
pub struct Shape {
    name: String,
    offsets: BTreeSet<Offset>,
}

impl Shape {
    /// Largest absolute offset, and largest width or height, a shape may have.
    pub const MAX_EXTENT: i32 = i32::MAX / 2;

    /// Creates a shape from any collection of offsets. Duplicates collapse.
    ///
    /// # Errors
    ///
    /// Fails if an offset or the overall span exceeds [`Self::MAX_EXTENT`].
    pub fn new(
        name: impl Into<String>,
        offsets: impl IntoIterator<Item = Offset>,
    ) -> Result<Self, ShapeError> {
        let shape = Self::bounded(name.into(), offsets.into_iter().collect());
        shape.check_bounds()?;
        Ok(shape)
    }

    /// Creates a shape from `(dx, dy)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`Shape::new`].
    pub fn from_pairs(name: impl Into<String>, pairs: &[(i32, i32)]) -> Result<Self, ShapeError> {
        Self::new(name, pairs.iter().copied().map(Offset::from))
    }

    /// Three cells in a row: `(0,0) (1,0) (2,0)`.
    pub fn horizontal_line() -> Self {
        Self::seed("Horizontal", &[(0, 0), (1, 0), (2, 0)])
    }

    /// Three cells on the main diagonal: `(0,0) (1,1) (2,2)`.
    pub fn diagonal_line() -> Self {
        Self::seed("Slash", &[(0, 0), (1, 1), (2, 2)])
    }

    fn seed(name: &str, pairs: &[(i32, i32)]) -> Self {
        Self::bounded(name.to_string(), pairs.iter().copied().map(Offset::from).collect())
    }

    // Callers guarantee the offsets are within bounds.
    fn bounded(name: String, offsets: BTreeSet<Offset>) -> Self {
        Self { name, offsets }
    }

    fn check_bounds(&self) -> Result<(), ShapeError> {
        let limit = -Self::MAX_EXTENT..=Self::MAX_EXTENT;
        if let Some(o) = self
            .offsets
            .iter()
            .find(|o| !limit.contains(&o.dx) || !limit.contains(&o.dy))
        {
            return Err(ShapeError::OffsetOutOfRange { dx: o.dx, dy: o.dy });
        }

        let width = span(self.offsets.iter().map(|o| o.dx));
        let height = span(self.offsets.iter().map(|o| o.dy));
        if width > i64::from(Self::MAX_EXTENT) || height > i64::from(Self::MAX_EXTENT) {
            return Err(ShapeError::SpanTooLarge { width, height });
        }
        Ok(())
    }

    /// The shape's name, including the transforms it was derived through.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The offsets, in ascending order.
    pub fn offsets(&self) -> &BTreeSet<Offset> {
        &self.offsets
    }

    /// Number of cells covered.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the shape covers no cells.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Whether the minimum x and minimum y are both zero.
    pub fn is_normalized(&self) -> bool {
        match self.min_corner() {
            Some((x, y)) => x == 0 && y == 0,
            None => true,
        }
    }

    /// Applies `transform` to every offset and normalizes the result.
    ///
    /// The fixed transforms only swap and negate coordinates, which keeps a
    /// bounded shape bounded.
    #[instrument(skip(self), fields(shape = %self.name))]
    pub fn transform(&self, transform: Transform) -> Shape {
        let moved = Self::bounded(
            format!("{}-{}", self.name, transform),
            self.offsets.iter().map(|&o| transform.apply(o)).collect(),
        );
        moved.normalized()
    }

    /// Applies an arbitrary integer matrix, labelling the result
    /// `"{name}-{label}"`, then normalizes.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::Overflow`] if the product overflows, or a bounds
    /// error if the mapped shape is too large.
    pub fn apply_matrix(&self, label: &str, matrix: &Matrix) -> Result<Shape, ShapeError> {
        let offsets = self
            .offsets
            .iter()
            .map(|&o| apply_matrix(matrix, o).ok_or(ShapeError::Overflow { dx: o.dx, dy: o.dy }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Shape::new(format!("{}-{}", self.name, label), offsets)?.normalized())
    }

    /// Translates the shape so its minimum x and minimum y are zero.
    pub fn normalized(&self) -> Shape {
        let Some((x, y)) = self.min_corner() else {
            return self.clone();
        };
        // Within bounds each difference is at most the span.
        Self::bounded(
            self.name.clone(),
            self.offsets
                .iter()
                .map(|o| Offset::new(o.dx.saturating_sub(x), o.dy.saturating_sub(y)))
                .collect(),
        )
    }

    /// Shifts every offset by `(dx, dy)`. No renormalization.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::Overflow`] if a shifted offset overflows, or
    /// [`ShapeError::OffsetOutOfRange`] if it leaves the supported range.
    pub fn translate(&self, dx: i32, dy: i32) -> Result<Shape, ShapeError> {
        let offsets = self
            .offsets
            .iter()
            .map(|o| o.checked_shifted(dx, dy).ok_or(ShapeError::Overflow { dx: o.dx, dy: o.dy }))
            .collect::<Result<Vec<_>, _>>()?;
        Shape::new(self.name.clone(), offsets)
    }

    fn min_corner(&self) -> Option<(i32, i32)> {
        let min_x = self.offsets.iter().map(|o| o.dx).min()?;
        let min_y = self.offsets.iter().map(|o| o.dy).min()?;
        Some((min_x, min_y))
    }
}

/// Distance between the smallest and largest value, zero when empty.
fn span(values: impl Iterator<Item = i32> + Clone) -> i64 {
    match (values.clone().min(), values.max()) {
        (Some(lo), Some(hi)) => i64::from(hi) - i64::from(lo),
        _ => 0,
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.offsets == other.offsets
    }
}

impl Eq for Shape {}

impl Hash for Shape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.offsets.hash(state);
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let points: Vec<String> = self.offsets.iter().map(ToString::to_string).collect();
        write!(f, "{} - {}", self.name, points.join(", "))
    }
}

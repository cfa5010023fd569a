//! Fixed symmetry transforms over integer coordinates.
//!
//! Each transform is a 2x2 integer matrix applied to every offset of a
//! shape. The set is closed: mirrors and quarter-turn rotations only.

use super::Offset;
use strum::{EnumIter, IntoEnumIterator};

/// A 2x2 integer matrix in row-major order: `[[a, b], [c, d]]` maps
/// `(x, y)` to `(a*x + b*y, c*x + d*y)`.
pub type Matrix = [[i32; 2]; 2];

/// One of the five symmetry transforms used to derive win shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, derive_more::Display)]
pub enum Transform {
    /// Flip across the horizontal axis: `(x, y) -> (x, -y)`.
    #[display("mirror horizontally")]
    MirrorHorizontal,
    /// Flip across the vertical axis: `(x, y) -> (-x, y)`.
    #[display("mirror vertically")]
    MirrorVertical,
    /// Quarter turn clockwise (y grows downward).
    #[display("90° CW")]
    Rotate90,
    /// Half turn.
    #[display("180° CW")]
    Rotate180,
    /// Quarter turn counter-clockwise.
    #[display("90° CCW")]
    Rotate270,
}

impl Transform {
    /// The two mirror transforms.
    pub const MIRRORS: [Transform; 2] = [Transform::MirrorHorizontal, Transform::MirrorVertical];

    /// The three non-trivial rotations.
    pub const ROTATIONS: [Transform; 3] =
        [Transform::Rotate90, Transform::Rotate180, Transform::Rotate270];

    /// Returns the matrix for this transform.
    pub const fn matrix(self) -> Matrix {
        match self {
            Transform::MirrorHorizontal => [[1, 0], [0, -1]],
            Transform::MirrorVertical => [[-1, 0], [0, 1]],
            Transform::Rotate90 => [[0, -1], [1, 0]],
            Transform::Rotate180 => [[-1, 0], [0, -1]],
            Transform::Rotate270 => [[0, 1], [-1, 0]],
        }
    }

    /// Applies this transform to a single offset (no normalization).
    ///
    /// Every matrix here is a signed permutation, so the result is the
    /// offset with its coordinates swapped and/or negated. Negation
    /// saturates, so `i32::MIN` maps to `i32::MAX` instead of overflowing.
    pub fn apply(self, offset: Offset) -> Offset {
        let Offset { dx: x, dy: y } = offset;
        match self {
            Transform::MirrorHorizontal => Offset::new(x, y.saturating_neg()),
            Transform::MirrorVertical => Offset::new(x.saturating_neg(), y),
            Transform::Rotate90 => Offset::new(y.saturating_neg(), x),
            Transform::Rotate180 => Offset::new(x.saturating_neg(), y.saturating_neg()),
            Transform::Rotate270 => Offset::new(y, x.saturating_neg()),
        }
    }

    /// Iterates over all five transforms.
    pub fn all() -> impl Iterator<Item = Transform> {
        Transform::iter()
    }
}

/// Multiplies `matrix` by the column vector `offset`.
///
/// Returns `None` if any product or sum overflows `i32`.
pub fn apply_matrix(matrix: &Matrix, offset: Offset) -> Option<Offset> {
    let [[a, b], [c, d]] = *matrix;
    let row = |m: i32, n: i32| m.checked_mul(offset.dx)?.checked_add(n.checked_mul(offset.dy)?);
    Some(Offset::new(row(a, b)?, row(c, d)?))
}

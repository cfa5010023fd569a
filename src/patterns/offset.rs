//! Relative cell offsets inside a shape.

use serde::{Deserialize, Serialize};

/// A relative coordinate `(dx, dy)` within a shape.
///
/// Ordering is by `dx` then `dy`, which keeps offset sets stable when
/// printed or compared.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("({}, {})", dx, dy)]
pub struct Offset {
    /// Horizontal offset.
    pub dx: i32,
    /// Vertical offset.
    pub dy: i32,
}

impl Offset {
    /// Creates a new offset.
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Returns this offset shifted by `(dx, dy)`, or `None` on overflow.
    pub fn checked_shifted(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(self.dx.checked_add(dx)?, self.dy.checked_add(dy)?))
    }
}

impl From<(i32, i32)> for Offset {
    fn from((dx, dy): (i32, i32)) -> Self {
        Self::new(dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_shifted() {
        assert_eq!(Offset::new(1, 2).checked_shifted(-1, 3), Some(Offset::new(0, 5)));
        assert_eq!(Offset::new(i32::MAX, 0).checked_shifted(1, 0), None);
        assert_eq!(Offset::new(0, i32::MIN).checked_shifted(0, -1), None);
    }

    #[test]
    fn test_ordering_is_x_major() {
        assert!(Offset::new(0, 2) < Offset::new(1, 0));
        assert!(Offset::new(1, 0) < Offset::new(1, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Offset::new(2, -1).to_string(), "(2, -1)");
    }
}

//! Errors raised when building shapes.

use derive_more::{Display, Error};

/// Why a shape could not be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ShapeError {
    /// An offset lies outside `±Shape::MAX_EXTENT`.
    #[display("Offset ({}, {}) is outside the supported range", dx, dy)]
    OffsetOutOfRange {
        /// Horizontal offset.
        dx: i32,
        /// Vertical offset.
        dy: i32,
    },

    /// The shape is wider or taller than `Shape::MAX_EXTENT`.
    #[display("Shape spans {} x {} cells, more than the supported extent", width, height)]
    SpanTooLarge {
        /// Distance between the smallest and largest x.
        width: i64,
        /// Distance between the smallest and largest y.
        height: i64,
    },

    /// Integer overflow while moving or mapping an offset.
    #[display("Offset ({}, {}) overflows when transformed", dx, dy)]
    Overflow {
        /// Horizontal offset before the operation.
        dx: i32,
        /// Vertical offset before the operation.
        dy: i32,
    },
}

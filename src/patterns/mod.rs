//! Geometric pattern library.
//!
//! Win conditions are not listed by hand. Two seed shapes, a straight
//! line and a diagonal, are expanded by mirroring and rotating into every
//! distinct orientation, and the board engine anchors each orientation at
//! every cell.

mod error;
mod offset;
mod orbit;
mod shape;
mod transform;

pub use error::ShapeError;
pub use offset::Offset;
pub use orbit::{default_patterns, mirror_images, orbit, rotations};
pub use shape::Shape;
pub use transform::{Matrix, Transform, apply_matrix};

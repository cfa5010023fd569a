//! Symmetry orbits of seed shapes.

use super::{Shape, Transform};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// The two mirror images of `shape`.
pub fn mirror_images(shape: &Shape) -> HashSet<Shape> {
    Transform::MIRRORS.iter().map(|&t| shape.transform(t)).collect()
}

/// The three non-trivial rotations of `shape`.
pub fn rotations(shape: &Shape) -> HashSet<Shape> {
    Transform::ROTATIONS.iter().map(|&t| shape.transform(t)).collect()
}

/// Every distinct shape reachable from `seed` by mirroring and rotating.
///
/// Starts from the seed, adds its mirror images, then adds the rotations
/// of everything gathered so far. Deduplication is by offset set.
#[instrument(skip(seed), fields(seed = %seed.name()))]
pub fn orbit(seed: &Shape) -> HashSet<Shape> {
    let mut shapes = HashSet::from([seed.clone()]);
    shapes.extend(mirror_images(seed));

    let rotated: Vec<Shape> = shapes.iter().flat_map(rotations).collect();
    shapes.extend(rotated);

    debug!(count = shapes.len(), "Derived orbit");
    shapes
}

/// All tic-tac-toe win shapes: the orbits of the horizontal line and the
/// diagonal, unioned.
///
/// Recomputed on every call.
#[instrument]
pub fn default_patterns() -> HashSet<Shape> {
    let mut patterns = orbit(&Shape::horizontal_line());
    patterns.extend(orbit(&Shape::diagonal_line()));
    patterns
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Planar math helpers: world-space points and facing angles.
//!
//! World coordinates are `f64`; the collision grid converts them to integer
//! cells by truncation, so nothing here needs to round like the grid does.

mod angle;
mod point;

pub use angle::Angle;
pub use point::Point;

/// Degeneracy threshold used when normalising vectors.
pub const EPSILON: f64 = 1e-12;

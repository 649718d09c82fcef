// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::math::Point;

/// Facing angle of a body, in degrees.
///
/// 0° faces "up" the screen, i.e. toward negative Y, and angles grow
/// clockwise on screen. [`Angle::rotate`] maps body-frame vectors into world
/// space under that convention.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Angle {
    degrees: f64,
}

impl Angle {
    /// Creates an angle from degrees.
    pub const fn from_degrees(degrees: f64) -> Self {
        Self { degrees }
    }

    /// The angle in degrees, as given.
    pub fn degrees(self) -> f64 {
        self.degrees
    }

    /// Unit vector pointing in the facing direction.
    pub fn unit(self) -> Point {
        self.rotate(Point::new(0.0, -1.0))
    }

    /// Rotates a body-frame vector into world space.
    pub fn rotate(self, v: Point) -> Point {
        let (sin, cos) = self.degrees.to_radians().sin_cos();
        Point::new(v.x() * cos - v.y() * sin, v.x() * sin + v.y() * cos)
    }

    /// Rotates a world-space vector into the body frame.
    pub fn inverse_rotate(self, v: Point) -> Point {
        Self::from_degrees(-self.degrees).rotate(v)
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::math::EPSILON;

/// 2D vector in world space.
///
/// * Components are world units and may represent either positions or
///   displacements depending on the calling context.
/// * The plane wraps only inside the collision grid; `Point` itself is an
///   ordinary unbounded vector.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point {
    data: [f64; 2],
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a point from components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { data: [x, y] }
    }

    /// X component.
    pub fn x(self) -> f64 {
        self.data[0]
    }

    /// Y component.
    pub fn y(self) -> f64 {
        self.data[1]
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f64; 2] {
        self.data
    }

    /// Dot product with another vector.
    pub fn dot(self, other: Self) -> f64 {
        self.x() * other.x() + self.y() * other.y()
    }

    /// Z component of the 3D cross product (signed parallelogram area).
    pub fn cross(self, other: Self) -> f64 {
        self.x() * other.y() - self.y() * other.x()
    }

    /// Vector length (magnitude).
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Returns the unit vector in the same direction.
    ///
    /// Vectors with length ≤ [`EPSILON`] are degenerate and map to the zero
    /// vector so callers can detect them deterministically.
    pub fn unit(self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self * (1.0 / len)
    }
}

impl From<[f64; 2]> for Point {
    fn from(value: [f64; 2]) -> Self {
        Self { data: value }
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x() + rhs.x(), self.y() + rhs.y())
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x() - rhs.x(), self.y() - rhs.y())
    }
}

impl Mul<f64> for Point {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x() * rhs, self.y() * rhs)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;
    fn mul(self, rhs: Point) -> Point {
        rhs * self
    }
}

impl Neg for Point {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x(), -self.y())
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_matches_componentwise_math() {
        let a = Point::new(1.0, -2.0);
        let b = Point::new(-3.0, 4.0);
        assert_eq!((a + b).to_array(), [-2.0, 2.0]);
        assert_eq!((a - b).to_array(), [4.0, -6.0]);
        assert_eq!((a * 2.0).to_array(), [2.0, -4.0]);
        assert_eq!((2.0 * a).to_array(), [2.0, -4.0]);
        assert_eq!((-a).to_array(), [-1.0, 2.0]);
        assert_eq!(a.dot(b), -11.0);
        assert_eq!(a.cross(b), -2.0);
    }

    #[test]
    fn unit_of_degenerate_vector_is_zero() {
        assert_eq!(Point::ZERO.unit(), Point::ZERO);
        let u = Point::new(3.0, 4.0).unit();
        assert!((u.length() - 1.0).abs() < 1e-12);
        assert!((u.x() - 0.6).abs() < 1e-12 && (u.y() - 0.8).abs() < 1e-12);
    }
}

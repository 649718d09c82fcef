// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Analytic hit masks.
//!
//! Both shapes answer [`Mask`] queries exactly, so tests can predict hit
//! fractions without a pixel outline.

use orbital_collide::{Angle, Mask, Point};

/// Disc of a fixed radius centred on the body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleMask {
    radius: f64,
}

impl CircleMask {
    /// Disc with the given radius.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Disc radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Mask for CircleMask {
    fn collide(&self, offset: Point, direction: Point, _facing: Angle) -> f64 {
        // Solve |offset + t * direction| = radius for the entering root.
        let c = offset.length_squared() - self.radius * self.radius;
        if c <= 0.0 {
            return 0.0;
        }
        let a = direction.length_squared();
        if a <= 0.0 {
            return 1.0;
        }
        let half_b = offset.dot(direction);
        let disc = half_b * half_b - a * c;
        if disc < 0.0 {
            return 1.0;
        }
        let t = (-half_b - disc.sqrt()) / a;
        if (0.0..1.0).contains(&t) {
            t
        } else {
            1.0
        }
    }

    fn within_ring(&self, offset: Point, _facing: Angle, inner: f64, outer: f64) -> bool {
        let d = offset.length();
        d + self.radius >= inner && d - self.radius <= outer
    }
}

/// Rectangle centred on the body, rotated by the body's facing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxMask {
    half_width: f64,
    half_height: f64,
}

impl BoxMask {
    /// Rectangle with the given half extents in the body frame.
    pub fn new(half_width: f64, half_height: f64) -> Self {
        Self {
            half_width,
            half_height,
        }
    }

    /// Distance from the centre to a corner.
    pub fn circumradius(&self) -> f64 {
        self.half_width.hypot(self.half_height)
    }
}

impl Mask for BoxMask {
    fn collide(&self, offset: Point, direction: Point, facing: Angle) -> f64 {
        let o = facing.inverse_rotate(offset);
        let d = facing.inverse_rotate(direction);

        // Slab test over t in [0, 1].
        let mut enter = 0.0_f64;
        let mut exit = 1.0_f64;
        for (start, delta, half) in [
            (o.x(), d.x(), self.half_width),
            (o.y(), d.y(), self.half_height),
        ] {
            if delta == 0.0 {
                if start.abs() > half {
                    return 1.0;
                }
                continue;
            }
            let a = (-half - start) / delta;
            let b = (half - start) / delta;
            enter = enter.max(a.min(b));
            exit = exit.min(a.max(b));
            if enter > exit {
                return 1.0;
            }
        }
        if enter < 1.0 {
            enter
        } else {
            1.0
        }
    }

    fn within_ring(&self, offset: Point, facing: Angle, inner: f64, outer: f64) -> bool {
        let c = facing.inverse_rotate(offset);
        let (cx, cy) = (c.x().abs(), c.y().abs());
        let near = (cx - self.half_width)
            .max(0.0)
            .hypot((cy - self.half_height).max(0.0));
        let far = (cx + self.half_width).hypot(cy + self.half_height);
        near <= outer && far >= inner
    }
}

/// Either shape, so one body type can carry both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FakeMask {
    /// See [`CircleMask`].
    Circle(CircleMask),
    /// See [`BoxMask`].
    Box(BoxMask),
}

impl FakeMask {
    /// Smallest radius enclosing the shape.
    pub fn bounding_radius(&self) -> f64 {
        match self {
            Self::Circle(c) => c.radius(),
            Self::Box(b) => b.circumradius(),
        }
    }
}

impl From<CircleMask> for FakeMask {
    fn from(mask: CircleMask) -> Self {
        Self::Circle(mask)
    }
}

impl From<BoxMask> for FakeMask {
    fn from(mask: BoxMask) -> Self {
        Self::Box(mask)
    }
}

impl Mask for FakeMask {
    fn collide(&self, offset: Point, direction: Point, facing: Angle) -> f64 {
        match self {
            Self::Circle(c) => c.collide(offset, direction, facing),
            Self::Box(b) => b.collide(offset, direction, facing),
        }
    }

    fn within_ring(&self, offset: Point, facing: Angle, inner: f64, outer: f64) -> bool {
        match self {
            Self::Circle(c) => c.within_ring(offset, facing, inner, outer),
            Self::Box(b) => b.within_ring(offset, facing, inner, outer),
        }
    }
}

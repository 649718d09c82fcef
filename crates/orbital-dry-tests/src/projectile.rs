// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fake projectile for `line_projectile` tests.

use orbital_collide::{Point, Projectile};

use crate::body::FakeBody;
use crate::government::FakeGovernment;

/// Projectile with a fixed position, velocity, faction and target.
#[derive(Debug, Clone)]
pub struct FakeProjectile<'a> {
    position: Point,
    velocity: Point,
    government: Option<FakeGovernment>,
    target: Option<&'a FakeBody>,
}

impl<'a> FakeProjectile<'a> {
    /// Neutral, untargeted projectile.
    pub fn new(position: Point, velocity: Point) -> Self {
        Self {
            position,
            velocity,
            government: None,
            target: None,
        }
    }

    /// Set the firing government.
    pub fn government(mut self, government: FakeGovernment) -> Self {
        self.government = Some(government);
        self
    }

    /// Lock onto `target`.
    pub fn target(mut self, target: &'a FakeBody) -> Self {
        self.target = Some(target);
        self
    }
}

impl Projectile<FakeBody> for FakeProjectile<'_> {
    fn position(&self) -> Point {
        self.position
    }

    fn velocity(&self) -> Point {
        self.velocity
    }

    fn government(&self) -> Option<&FakeGovernment> {
        self.government.as_ref()
    }

    fn target(&self) -> Option<&FakeBody> {
        self.target
    }
}

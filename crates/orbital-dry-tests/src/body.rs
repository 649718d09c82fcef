// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fake bodies for collision-set tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use orbital_collide::{Angle, Body, Point, Step};

use crate::government::FakeGovernment;
use crate::mask::{CircleMask, FakeMask};

/// Body with an analytic mask, optional animation frames and a faction.
///
/// Counts mask lookups so tests can see which bodies a query examined.
#[derive(Debug)]
pub struct FakeBody {
    label: &'static str,
    position: Point,
    radius: f64,
    facing: Angle,
    frames: Vec<FakeMask>,
    government: Option<FakeGovernment>,
    mask_lookups: AtomicUsize,
}

impl FakeBody {
    /// Disc-shaped neutral body: bounding radius and mask radius agree.
    pub fn circle(x: f64, y: f64, radius: f64) -> Self {
        FakeBodyBuilder::new().at(x, y).mask(CircleMask::new(radius)).build()
    }

    /// Label given at build time, for assertion messages.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Number of times [`Body::mask`] was called.
    pub fn mask_lookups(&self) -> usize {
        self.mask_lookups.load(Ordering::Relaxed)
    }

    /// Resets the mask lookup counter.
    pub fn reset_lookups(&self) {
        self.mask_lookups.store(0, Ordering::Relaxed);
    }
}

impl Body for FakeBody {
    type Mask = FakeMask;
    type Government = FakeGovernment;

    fn position(&self) -> Point {
        self.position
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn facing(&self) -> Angle {
        self.facing
    }

    fn mask(&self, step: Step) -> &FakeMask {
        self.mask_lookups.fetch_add(1, Ordering::Relaxed);
        // Frames cycle with the step; the builder guarantees at least one.
        let frame = (step.index() % self.frames.len() as u64) as usize;
        &self.frames[frame]
    }

    fn government(&self) -> Option<&FakeGovernment> {
        self.government.as_ref()
    }
}

/// Builder for [`FakeBody`].
///
/// # Example
///
/// ```
/// use orbital_collide::Body;
/// use orbital_dry_tests::{CircleMask, FakeBodyBuilder, FakeGovernment};
///
/// let ship = FakeBodyBuilder::new()
///     .label("raider")
///     .at(100.0, 200.0)
///     .mask(CircleMask::new(12.0))
///     .government(FakeGovernment::new(2).hostile_to(&[1]))
///     .build();
/// assert_eq!(ship.radius(), 12.0);
/// ```
#[derive(Debug, Clone)]
pub struct FakeBodyBuilder {
    label: &'static str,
    position: Point,
    radius: Option<f64>,
    facing: Angle,
    frames: Vec<FakeMask>,
    government: Option<FakeGovernment>,
}

impl Default for FakeBodyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeBodyBuilder {
    /// Neutral body at the origin with no mask frames yet.
    pub fn new() -> Self {
        Self {
            label: "body",
            position: Point::ZERO,
            radius: None,
            facing: Angle::default(),
            frames: Vec::new(),
            government: None,
        }
    }

    /// Set the label.
    pub fn label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    /// Set the position.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Point::new(x, y);
        self
    }

    /// Override the bounding radius (default: the largest frame's extent).
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Set the facing in degrees.
    pub fn facing(mut self, degrees: f64) -> Self {
        self.facing = Angle::from_degrees(degrees);
        self
    }

    /// Append a mask frame. Step `n` uses frame `n % frames`.
    pub fn mask(mut self, mask: impl Into<FakeMask>) -> Self {
        self.frames.push(mask.into());
        self
    }

    /// Set the government.
    pub fn government(mut self, government: FakeGovernment) -> Self {
        self.government = Some(government);
        self
    }

    /// Build the body. Without any mask frame it gets a zero-radius disc.
    pub fn build(self) -> FakeBody {
        let mut frames = self.frames;
        if frames.is_empty() {
            frames.push(CircleMask::new(0.0).into());
        }
        let radius = self.radius.unwrap_or_else(|| {
            frames
                .iter()
                .map(FakeMask::bounding_radius)
                .fold(0.0, f64::max)
        });
        FakeBody {
            label: self.label,
            position: self.position,
            radius,
            facing: self.facing,
            frames,
            government: self.government,
            mask_lookups: AtomicUsize::new(0),
        }
    }
}

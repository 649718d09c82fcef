// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! orbital-collide: collision index for bodies on a wrapping 2D plane.
//!
//! A [`CollisionSet`] is rebuilt every simulation step. Bodies are bucketed
//! into a power-of-two grid whose coordinates wrap, sorted with a counting
//! sort, and then queried:
//! - [`CollisionSet::line`]: nearest body hit by a segment, honouring
//!   faction hostility and an optional forced target.
//! - [`CollisionSet::ring`] / [`CollisionSet::circle`]: every body touching
//!   an annulus or disc.
//!
//! Shapes, factions and motion belong to the caller and are reached through
//! the [`Body`], [`Mask`] and [`Government`] traits.
//!
//! ```
//! use orbital_collide::{Angle, Body, CollisionSet, Government, Mask, Point, Step};
//!
//! struct Disc(f64);
//! impl Mask for Disc {
//!     fn collide(&self, offset: Point, dir: Point, _: Angle) -> f64 {
//!         // Crude: hit at the start if the segment begins inside.
//!         if offset.length() <= self.0 || (offset + dir).length() <= self.0 { 0.0 } else { 1.0 }
//!     }
//!     fn within_ring(&self, offset: Point, _: Angle, inner: f64, outer: f64) -> bool {
//!         let d = offset.length();
//!         d + self.0 >= inner && d - self.0 <= outer
//!     }
//! }
//!
//! struct Faction;
//! impl Government for Faction {
//!     fn is_enemy(&self, _: &Self) -> bool { true }
//! }
//!
//! struct Rock { at: Point, shape: Disc }
//! impl Body for Rock {
//!     type Mask = Disc;
//!     type Government = Faction;
//!     fn position(&self) -> Point { self.at }
//!     fn radius(&self) -> f64 { self.shape.0 }
//!     fn facing(&self) -> Angle { Angle::default() }
//!     fn mask(&self, _: Step) -> &Disc { &self.shape }
//!     fn government(&self) -> Option<&Faction> { None }
//! }
//!
//! let rocks = [
//!     Rock { at: Point::new(0.0, 0.0), shape: Disc(5.0) },
//!     Rock { at: Point::new(300.0, 0.0), shape: Disc(5.0) },
//! ];
//! let mut set = CollisionSet::new(256, 64);
//! for rock in &rocks {
//!     set.add(rock);
//! }
//! set.finish();
//! assert_eq!(set.circle(Point::new(0.0, 0.0), 50.0).len(), 1);
//! assert_eq!(set.circle(Point::new(0.0, 0.0), 350.0).len(), 2);
//! ```
#![forbid(unsafe_code)]

/// Planar math (points and facing angles).
pub mod math;

mod body;
/// Grid configuration and validation.
pub mod config;
mod diagnostics;
mod epoch;
mod line;
mod ring;
mod set;
mod step;

pub use body::{Body, Government, Mask, Projectile};
pub use config::{ConfigError, GridConfig, MAX_CELL_COUNT, MAX_CELL_SIZE};
pub use diagnostics::{CollisionDiagnostics, NullDiagnostics, TracingDiagnostics};
pub use epoch::EpochTracker;
pub use line::MAX_VELOCITY;
pub use math::{Angle, Point};
pub use set::{CollisionSet, Entry, QueryScratch};
pub use step::Step;

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Collaborator seams: the bodies, masks and governments the collision set
//! queries but never owns.
//!
//! The set only ever sees bodies through these traits. Shapes, factions and
//! motion stay in the simulation layer.

use std::rc::Rc;
use std::sync::Arc;

use crate::math::{Angle, Point};
use crate::step::Step;

/// Faction handle deciding who may hit whom.
pub trait Government {
    /// Returns `true` if `self` treats `other` as hostile.
    fn is_enemy(&self, other: &Self) -> bool;
}

/// Precise collision outline of a body, in the body's own frame.
pub trait Mask {
    /// Fraction of `direction` that a segment starting at `offset` travels
    /// before touching this shape.
    ///
    /// `offset` is the segment start relative to the body centre and
    /// `facing` is the body's rotation. Values in `[0, 1)` are hits; any value
    /// `>= 1.0` means the segment misses.
    fn collide(&self, offset: Point, direction: Point, facing: Angle) -> f64;

    /// Returns `true` if the shape overlaps the annulus `[inner, outer]`
    /// centred `offset` away from the body centre.
    fn within_ring(&self, offset: Point, facing: Angle, inner: f64, outer: f64) -> bool;
}

/// An entity that can be placed in a [`crate::CollisionSet`].
pub trait Body {
    /// Hit-mask type returned by [`Body::mask`].
    type Mask: Mask + ?Sized;
    /// Faction type returned by [`Body::government`].
    type Government: Government + ?Sized;

    /// World-space centre.
    fn position(&self) -> Point;
    /// Bounding radius; every part of the mask lies within it.
    fn radius(&self) -> f64;
    /// Current rotation.
    fn facing(&self) -> Angle;
    /// Hit mask to use during `step`.
    fn mask(&self, step: Step) -> &Self::Mask;
    /// Owning faction, if any. Bodies without one are hit by everything.
    fn government(&self) -> Option<&Self::Government>;
}

/// Something travelling along a segment each step.
pub trait Projectile<B: Body + ?Sized> {
    /// Start of this step's travel.
    fn position(&self) -> Point;
    /// Displacement over this step.
    fn velocity(&self) -> Point;
    /// Faction that fired the projectile.
    fn government(&self) -> Option<&B::Government>;
    /// Body the projectile is locked onto; it is hit regardless of faction.
    fn target(&self) -> Option<&B>;
}

macro_rules! forward_body {
    ($($ptr:ty),+ $(,)?) => {$(
        impl<T: Body + ?Sized> Body for $ptr {
            type Mask = T::Mask;
            type Government = T::Government;

            fn position(&self) -> Point {
                (**self).position()
            }
            fn radius(&self) -> f64 {
                (**self).radius()
            }
            fn facing(&self) -> Angle {
                (**self).facing()
            }
            fn mask(&self, step: Step) -> &Self::Mask {
                (**self).mask(step)
            }
            fn government(&self) -> Option<&Self::Government> {
                (**self).government()
            }
        }
    )+};
}

forward_body!(&T, Box<T>, Rc<T>, Arc<T>);

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Segment queries: the first body a projectile's path touches.
//!
//! The traversal walks grid cells along the segment with an integer DDA. The
//! segment's axis extents `mx`, `my` are multiplied together into a common
//! scale so that every cell is `cell_size * mx * my` units wide in both axes;
//! comparing "distance to the next X edge over mx" against "distance to the
//! next Y edge over my" then becomes `rx * my` vs `ry * mx`, with no division
//! and no floating point. The products are taken in 128 bits: with segments
//! capped at [`MAX_VELOCITY`] they fit for any `u32` cell size.

use std::cmp::Ordering;
use std::sync::atomic::Ordering as AtomicOrdering;

use crate::body::{Body, Government, Mask, Projectile};
use crate::epoch::EpochTracker;
use crate::math::Point;
use crate::set::{CollisionSet, QueryScratch};

/// Longest segment a line query traverses, in world units.
pub const MAX_VELOCITY: u32 = 450_000;

/// Length longer segments are clamped to.
const USED_MAX_VELOCITY: u32 = MAX_VELOCITY - 1;

/// Nearest hit so far. Starts at the caller's bound (or 1.0) so farther hits
/// are never recorded.
struct Closest<'a, B: ?Sized> {
    distance: f64,
    body: Option<&'a B>,
}

impl<'a, B: ?Sized> Closest<'a, B> {
    fn new(bound: f64) -> Self {
        Self {
            distance: bound,
            body: None,
        }
    }

    fn try_nearer(&mut self, distance: f64, body: &'a B) {
        if distance >= self.distance {
            return;
        }
        self.distance = distance;
        self.body = Some(body);
    }
}

/// What a segment is allowed to hit.
struct Probe<'q, B: Body + ?Sized> {
    from: Point,
    to: Point,
    government: Option<&'q B::Government>,
    target: Option<&'q B>,
}

impl<B: Body + ?Sized> Probe<'_, B> {
    /// The forced target is always hittable; otherwise a body is skipped only
    /// when both sides have a government and the body's is not hostile.
    fn can_hit(&self, body: &B) -> bool {
        if self.target.is_some_and(|t| std::ptr::eq(t, body)) {
            return true;
        }
        match (body.government(), self.government) {
            (Some(theirs), Some(ours)) => theirs.is_enemy(ours),
            _ => true,
        }
    }
}

impl<'a, B: Body + ?Sized> CollisionSet<'a, B> {
    /// Returns the first body hit by the segment `from → to`.
    ///
    /// If `closest_hit` is given, only hits nearer than its value (as a
    /// fraction of the segment) count, and it is updated when one is found.
    /// Without it the bound is 1.0. `government` filters out friendly bodies
    /// unless the body is `target`.
    pub fn line(
        &mut self,
        from: Point,
        to: Point,
        closest_hit: Option<&mut f64>,
        government: Option<&B::Government>,
        target: Option<&B>,
    ) -> Option<&'a B> {
        let mut scratch = std::mem::take(&mut self.scratch);
        let hit = self.line_with(&mut scratch, from, to, closest_hit, government, target);
        self.scratch = scratch;
        hit
    }

    /// Line query along a projectile's travel this step.
    pub fn line_projectile<P>(&mut self, projectile: &P, closest_hit: Option<&mut f64>) -> Option<&'a B>
    where
        P: Projectile<B> + ?Sized,
    {
        let from = projectile.position();
        let to = from + projectile.velocity();
        self.line(
            from,
            to,
            closest_hit,
            projectile.government(),
            projectile.target(),
        )
    }

    /// [`CollisionSet::line`] against caller-owned scratch, for shared access
    /// to a finished set.
    pub fn line_with(
        &self,
        scratch: &mut QueryScratch<'a, B>,
        from: Point,
        to: Point,
        closest_hit: Option<&mut f64>,
        government: Option<&B::Government>,
        target: Option<&B>,
    ) -> Option<&'a B> {
        self.debug_assert_ready();
        scratch.seen.ensure_len(self.len());

        let x = from.x() as i32;
        let y = from.y() as i32;
        let end_x = to.x() as i32;
        let end_y = to.y() as i32;

        let mut gx = x >> self.shift();
        let mut gy = y >> self.shift();
        let end_gx = end_x >> self.shift();
        let end_gy = end_y >> self.shift();

        let probe = Probe {
            from,
            to,
            government,
            target,
        };
        let mut closest = Closest::new(closest_hit.as_deref().copied().unwrap_or(1.0));

        // Most segments start and end in the same cell: one bucket, no walk.
        if gx == end_gx && gy == end_gy {
            self.probe_cell(gx, gy, None, &probe, &mut closest);
            return Self::report(closest, closest_hit);
        }

        let velocity = to - from;
        let length = velocity.length();
        if length > f64::from(MAX_VELOCITY) {
            if !self.velocity_warned.swap(true, AtomicOrdering::Relaxed) {
                self.diagnostics.on_velocity_clamped(length, MAX_VELOCITY);
            }
            let clamped = from + velocity.unit() * f64::from(USED_MAX_VELOCITY);
            return self.line_with(scratch, from, clamped, closest_hit, government, target);
        }

        let step_x: i32 = if x <= end_x { 1 } else { -1 };
        let step_y: i32 = if y <= end_y { 1 } else { -1 };
        let mx = u128::from((i64::from(end_x) - i64::from(x)).unsigned_abs());
        let my = u128::from((i64::from(end_y) - i64::from(y)).unsigned_abs());
        let scale = mx.max(1) * my.max(1);
        let full_scale = u128::from(self.cell_size()) * scale;

        // Scaled distance left to the next cell edge on each axis.
        let mut rx = scale * u128::from(self.offset_in_cell(x));
        let mut ry = scale * u128::from(self.offset_in_cell(y));
        if step_x > 0 {
            rx = full_scale - rx;
        }
        if step_y > 0 {
            ry = full_scale - ry;
        }

        scratch.seen.new_epoch();

        loop {
            self.probe_cell(gx, gy, Some(&mut scratch.seen), &probe, &mut closest);

            if closest.body.is_some() || (gx == end_gx && gy == end_gy) {
                break;
            }

            // rx / mx against ry / my: which edge comes first.
            match (rx * my).cmp(&(ry * mx)) {
                Ordering::Equal => {
                    // Exactly through a corner: advance both axes, but never
                    // past the end cell.
                    rx = full_scale;
                    ry = full_scale;
                    if gx == end_gx && gy + step_y == end_gy {
                        break;
                    }
                    if gy == end_gy && gx + step_x == end_gx {
                        break;
                    }
                    gx += step_x;
                    gy += step_y;
                }
                Ordering::Less => {
                    // ry * mx > rx * my >= 0, so mx is non-zero. rx stays a
                    // multiple of mx, so the division is exact.
                    ry -= my * (rx / mx);
                    rx = full_scale;
                    gx += step_x;
                }
                Ordering::Greater => {
                    // rx * my > ry * mx >= 0, so my is non-zero.
                    rx -= mx * (ry / my);
                    ry = full_scale;
                    gy += step_y;
                }
            }
        }

        Self::report(closest, closest_hit)
    }

    /// Tests every entry of unwrapped cell `(gx, gy)` against the probe.
    ///
    /// `seen` is `None` only for single-cell queries, where a body cannot
    /// appear twice.
    fn probe_cell(
        &self,
        gx: i32,
        gy: i32,
        mut seen: Option<&mut EpochTracker>,
        probe: &Probe<'_, B>,
        closest: &mut Closest<'a, B>,
    ) {
        for entry in self.bucket_at(self.wrapped_index(gx, gy)) {
            if entry.x() != gx || entry.y() != gy {
                continue;
            }
            if let Some(tracker) = seen.as_deref_mut() {
                if tracker.mark_and_check(entry.dense_index()) {
                    continue;
                }
            }

            let body = entry.body();
            if !probe.can_hit(body) {
                continue;
            }

            let mask = body.mask(self.step());
            let offset = probe.from - body.position();
            let range = mask.collide(offset, probe.to - probe.from, body.facing());
            closest.try_nearer(range, body);
        }
    }

    fn report(closest: Closest<'a, B>, closest_hit: Option<&mut f64>) -> Option<&'a B> {
        if let Some(slot) = closest_hit {
            if closest.distance < 1.0 {
                *slot = closest.distance;
            }
        }
        closest.body
    }
}

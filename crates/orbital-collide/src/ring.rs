// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Area queries: every body touching a ring or filled circle.

use crate::body::{Body, Mask};
use crate::math::Point;
use crate::set::{CollisionSet, QueryScratch};

impl<'a, B: Body + ?Sized> CollisionSet<'a, B> {
    /// Every body within `radius` of `center`.
    ///
    /// The returned slice is reused by the next ring or circle query.
    pub fn circle(&mut self, center: Point, radius: f64) -> &[&'a B] {
        self.ring(center, 0.0, radius)
    }

    /// Every body touching the annulus between `inner` and `outer` around
    /// `center`.
    ///
    /// A body counts if its centre lies in the annulus or its mask overlaps
    /// it. Each body is reported once, in bucket order. The returned slice is
    /// reused by the next ring or circle query.
    pub fn ring(&mut self, center: Point, inner: f64, outer: f64) -> &[&'a B] {
        let mut scratch = std::mem::take(&mut self.scratch);
        self.ring_with(&mut scratch, center, inner, outer);
        self.scratch = scratch;
        &self.scratch.result
    }

    /// [`CollisionSet::circle`] against caller-owned scratch.
    pub fn circle_with<'s>(
        &self,
        scratch: &'s mut QueryScratch<'a, B>,
        center: Point,
        radius: f64,
    ) -> &'s [&'a B] {
        self.ring_with(scratch, center, 0.0, radius)
    }

    /// [`CollisionSet::ring`] against caller-owned scratch.
    pub fn ring_with<'s>(
        &self,
        scratch: &'s mut QueryScratch<'a, B>,
        center: Point,
        inner: f64,
        outer: f64,
    ) -> &'s [&'a B] {
        self.debug_assert_ready();
        scratch.seen.ensure_len(self.len());

        let min_x = self.cell_of(center.x() - outer);
        let min_y = self.cell_of(center.y() - outer);
        let max_x = self.cell_of(center.x() + outer);
        let max_y = self.cell_of(center.y() + outer);

        scratch.seen.new_epoch();
        scratch.result.clear();

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                for entry in self.bucket_at(self.wrapped_index(x, y)) {
                    if entry.x() != x || entry.y() != y {
                        continue;
                    }
                    if scratch.seen.mark_and_check(entry.dense_index()) {
                        continue;
                    }

                    let body = entry.body();
                    let offset = center - body.position();
                    let length = offset.length();
                    if (inner..=outer).contains(&length)
                        || body
                            .mask(self.step())
                            .within_ring(offset, body.facing(), inner, outer)
                    {
                        scratch.result.push(body);
                    }
                }
            }
        }

        &scratch.result
    }
}

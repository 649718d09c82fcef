// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use orbital_collide::{CollisionSet, Step};
use orbital_dry_tests::FakeBody;

/// Builds a finished set over `bodies` for step 0.
pub fn finished_set(bodies: &[FakeBody], cell_size: u32, cell_count: u32) -> CollisionSet<'_, FakeBody> {
    finished_set_at(bodies, cell_size, cell_count, Step::new(0))
}

/// Builds a finished set over `bodies` for `step`.
pub fn finished_set_at(
    bodies: &[FakeBody],
    cell_size: u32,
    cell_count: u32,
    step: Step,
) -> CollisionSet<'_, FakeBody> {
    let mut set = CollisionSet::new(cell_size, cell_count);
    set.clear(step);
    for body in bodies {
        set.add(body);
    }
    set.finish();
    set
}

/// Index of `hit` in `bodies`, by identity.
pub fn index_of(bodies: &[FakeBody], hit: &FakeBody) -> usize {
    bodies
        .iter()
        .position(|b| std::ptr::eq(b, hit))
        .unwrap_or(usize::MAX)
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

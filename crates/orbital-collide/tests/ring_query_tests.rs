// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Ring and circle queries.

mod common;

use common::{finished_set, index_of};
use orbital_collide::Point;
use orbital_dry_tests::{BoxMask, FakeBody, FakeBodyBuilder};

fn sorted_indices(bodies: &[FakeBody], hits: &[&FakeBody]) -> Vec<usize> {
    let mut out: Vec<usize> = hits.iter().map(|h| index_of(bodies, h)).collect();
    out.sort_unstable();
    out
}

#[test]
fn circle_grows_to_include_the_far_body() {
    let bodies = vec![
        FakeBody::circle(0.0, 0.0, 5.0),
        FakeBody::circle(300.0, 0.0, 5.0),
    ];
    let mut set = finished_set(&bodies, 256, 64);

    let near = set.ring(Point::new(0.0, 0.0), 0.0, 50.0).to_vec();
    assert_eq!(sorted_indices(&bodies, &near), vec![0]);

    let both = set.circle(Point::new(0.0, 0.0), 350.0).to_vec();
    assert_eq!(sorted_indices(&bodies, &both), vec![0, 1]);
}

#[test]
fn inner_radius_excludes_the_hole() {
    let bodies = vec![
        FakeBody::circle(1100.0, 1000.0, 5.0), // distance 100
        FakeBody::circle(1300.0, 1000.0, 5.0), // distance 300
        FakeBody::circle(1000.0, 1198.0, 5.0), // centre in the hole, edge over it
        FakeBody::circle(1500.0, 1000.0, 5.0), // distance 500
    ];
    let mut set = finished_set(&bodies, 256, 64);
    let hits = set.ring(Point::new(1000.0, 1000.0), 200.0, 400.0).to_vec();
    assert_eq!(sorted_indices(&bodies, &hits), vec![1, 2]);
}

#[test]
fn mask_overlap_counts_even_when_the_centre_is_outside() {
    let bodies = vec![FakeBodyBuilder::new()
        .at(1100.0, 1000.0)
        .mask(BoxMask::new(60.0, 5.0))
        .build()];
    let mut set = finished_set(&bodies, 256, 64);
    // Centre is 100 away; the near edge is 40 away.
    assert_eq!(set.circle(Point::new(1000.0, 1000.0), 50.0).len(), 1);
    assert!(set.circle(Point::new(1000.0, 1000.0), 30.0).is_empty());
}

#[test]
fn a_ring_larger_than_the_grid_reports_each_body_once() {
    // Four 256-unit cells per axis: the query box covers every bucket twice.
    let bodies = vec![
        FakeBody::circle(512.0, 512.0, 5.0),
        FakeBody::circle(1020.0, 512.0, 10.0), // spans the wrap seam
        FakeBody::circle(760.0, 760.0, 40.0),  // spans four cells
        FakeBody::circle(5000.0, 5000.0, 5.0), // far outside the query
    ];
    let mut set = finished_set(&bodies, 256, 4);
    let hits = set.circle(Point::new(512.0, 512.0), 1000.0).to_vec();
    assert_eq!(sorted_indices(&bodies, &hits), vec![0, 1, 2]);
    for body in &bodies {
        assert!(body.mask_lookups() <= 1);
    }
}

#[test]
fn aliased_cells_do_not_leak_into_results() {
    let bodies = vec![FakeBody::circle(1100.0, 100.0, 5.0)];
    let mut set = finished_set(&bodies, 256, 4);
    // Same wrapped bucket as (76, 100), one lap away.
    assert!(set.circle(Point::new(76.0, 100.0), 50.0).is_empty());
    assert_eq!(set.circle(Point::new(1100.0, 120.0), 50.0).len(), 1);
}

#[test]
fn repeated_queries_start_from_a_clean_slate() {
    let bodies = vec![
        FakeBody::circle(100.0, 100.0, 5.0),
        FakeBody::circle(900.0, 900.0, 5.0),
    ];
    let mut set = finished_set(&bodies, 256, 64);
    for _ in 0..3 {
        assert_eq!(set.circle(Point::new(100.0, 100.0), 20.0).len(), 1);
        assert_eq!(set.circle(Point::new(900.0, 900.0), 20.0).len(), 1);
        assert_eq!(set.circle(Point::new(500.0, 500.0), 1000.0).len(), 2);
    }
}

#[test]
fn empty_set_answers_empty() {
    let bodies: Vec<FakeBody> = Vec::new();
    let mut set = finished_set(&bodies, 256, 64);
    assert!(set.circle(Point::new(0.0, 0.0), 1000.0).is_empty());
    assert!(set
        .line(Point::new(0.0, 0.0), Point::new(1000.0, 1000.0), None, None, None)
        .is_none());
}

#[test]
fn shared_reads_with_separate_scratch() {
    let bodies = orbital_dry_tests::scatter_bodies(11, 200, 4096.0, 5.0, 40.0);
    let mut set = finished_set(&bodies, 128, 32);

    let centres: Vec<Point> = (0..8)
        .map(|i| Point::new(256.0 + 480.0 * f64::from(i), 2048.0))
        .collect();
    let shot = Point::new(2000.0, 300.0);
    let expected: Vec<(Vec<usize>, Option<usize>, f64)> = centres
        .iter()
        .map(|c| {
            let hits = set.ring(*c, 50.0, 400.0).to_vec();
            let mut closest = 1.0;
            let first = set
                .line(*c, *c + shot, Some(&mut closest), None, None)
                .map(|b| index_of(&bodies, b));
            (sorted_indices(&bodies, &hits), first, closest)
        })
        .collect();
    assert!(expected.iter().any(|(_, first, _)| first.is_some()));

    let set = &set;
    let found: Vec<(Vec<usize>, Option<usize>, f64)> = std::thread::scope(|scope| {
        let handles: Vec<_> = centres
            .iter()
            .map(|c| {
                let bodies = &bodies;
                scope.spawn(move || {
                    let mut scratch = set.scratch();
                    let hits = set.ring_with(&mut scratch, *c, 50.0, 400.0).to_vec();
                    // The filled disc is a superset of the annulus.
                    let filled = set.circle_with(&mut scratch, *c, 400.0).len();
                    assert!(filled >= hits.len());
                    let mut closest = 1.0;
                    let first = set
                        .line_with(&mut scratch, *c, *c + shot, Some(&mut closest), None, None)
                        .map(|b| index_of(bodies, b));
                    (sorted_indices(bodies, &hits), first, closest)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("query thread panicked"))
            .collect()
    });

    assert_eq!(found, expected);
}

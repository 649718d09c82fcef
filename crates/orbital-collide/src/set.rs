// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Wrapping uniform grid with an O(n) bucket sort.
//!
//! Lifecycle per simulation step:
//! - [`CollisionSet::clear`] (or [`CollisionSet::rebind`]) empties the set.
//! - [`CollisionSet::add`] once per body. A body gets one entry for every
//!   cell its bounding box touches.
//! - [`CollisionSet::finish`] bucket-sorts the entries by wrapped cell.
//! - Line and ring queries, any number of times, until the next clear.
//!
//! Cell coordinates stored in entries are *unwrapped*; wrapping only picks the
//! bucket. Queries skip entries whose unwrapped coordinates differ from the
//! cell being visited, since those only share the bucket through aliasing.

use std::fmt;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::body::Body;
use crate::config::GridConfig;
use crate::diagnostics::{CollisionDiagnostics, TracingDiagnostics};
use crate::epoch::EpochTracker;
use crate::step::Step;

/// One (body, cell) pair in the grid.
pub struct Entry<'a, B: ?Sized> {
    body: &'a B,
    dense_index: usize,
    x: i32,
    y: i32,
}

impl<B: ?Sized> Clone for Entry<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: ?Sized> Copy for Entry<'_, B> {}

impl<B: ?Sized> fmt::Debug for Entry<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("dense_index", &self.dense_index)
            .field("x", &self.x)
            .field("y", &self.y)
            .finish_non_exhaustive()
    }
}

impl<'a, B: ?Sized> Entry<'a, B> {
    /// The body this entry refers to.
    pub fn body(&self) -> &'a B {
        self.body
    }

    /// Position of the body in [`CollisionSet::all`]; stable for the step.
    pub fn dense_index(&self) -> usize {
        self.dense_index
    }

    /// Unwrapped cell X.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Unwrapped cell Y.
    pub fn y(&self) -> i32 {
        self.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Building,
    Ready,
}

/// Per-query scratch: dedup marks and the ring result buffer.
///
/// A [`CollisionSet`] owns one for its `&mut self` queries. Callers that want
/// to query a finished set from several places at once give each caller its
/// own scratch from [`CollisionSet::scratch`] and use the `*_with` methods.
pub struct QueryScratch<'a, B: ?Sized> {
    pub(crate) seen: EpochTracker,
    pub(crate) result: Vec<&'a B>,
}

impl<B: ?Sized> Default for QueryScratch<'_, B> {
    fn default() -> Self {
        Self {
            seen: EpochTracker::default(),
            result: Vec::new(),
        }
    }
}

impl<B: ?Sized> fmt::Debug for QueryScratch<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryScratch")
            .field("seen", &self.seen)
            .field("result_len", &self.result.len())
            .finish()
    }
}

impl<'a, B: ?Sized> QueryScratch<'a, B> {
    /// Bodies found by the most recent ring or circle query.
    pub fn result(&self) -> &[&'a B] {
        &self.result
    }

    fn rebind<'b>(self) -> QueryScratch<'b, B> {
        QueryScratch {
            seen: self.seen,
            result: recycle(self.result),
        }
    }
}

/// Empties `v` and hands its allocation to a vector of another element type.
///
/// Lets a set move to a fresh borrow lifetime without reallocating; the
/// standard library reuses the buffer when layouts match.
fn recycle<T, U>(mut v: Vec<T>) -> Vec<U> {
    v.clear();
    v.into_iter().filter_map(|_| None).collect()
}

/// Collision index over bodies on a wrapping 2D plane.
///
/// Holds non-owning `&'a B` handles; the bodies must outlive the step the set
/// is populated for. Use [`CollisionSet::rebind`] to carry one instance (and
/// its allocations) into the next step.
///
/// Cell size and cell count are powers of two for the life of the set, so
/// every wrap is a bit mask.
pub struct CollisionSet<'a, B: ?Sized> {
    shift: u32,
    cell_size: u32,
    cell_mask: u32,
    cells: u32,
    wrap_mask: i32,

    step: Step,
    phase: Phase,

    added: Vec<Entry<'a, B>>,
    sorted: Vec<Entry<'a, B>>,
    /// Histogram during `add`, bucket start offsets after `finish`. Two extra
    /// leading slots let the scatter pass run one slot behind the histogram.
    counts: Vec<usize>,
    all: Vec<&'a B>,

    pub(crate) scratch: QueryScratch<'a, B>,
    pub(crate) diagnostics: Arc<dyn CollisionDiagnostics>,
    pub(crate) velocity_warned: AtomicBool,
}

impl<B: ?Sized> fmt::Debug for CollisionSet<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollisionSet")
            .field("cell_size", &self.cell_size)
            .field("cells", &self.cells)
            .field("step", &self.step)
            .field("phase", &self.phase)
            .field("bodies", &self.all.len())
            .field("entries", &self.added.len())
            .finish_non_exhaustive()
    }
}

impl<'a, B: Body + ?Sized> CollisionSet<'a, B> {
    /// Creates an empty set.
    ///
    /// `cell_size` and `cell_count` are rounded down to powers of two; zero
    /// behaves as one. The set starts cleared for `Step::default()`.
    pub fn new(cell_size: u32, cell_count: u32) -> Self {
        let shift = cell_size.checked_ilog2().unwrap_or(0);
        let cell_size = 1u32 << shift;
        let cells = 1u32 << cell_count.checked_ilog2().unwrap_or(0);

        let mut set = Self {
            shift,
            cell_size,
            cell_mask: cell_size - 1,
            cells,
            wrap_mask: (cells - 1) as i32,
            step: Step::default(),
            phase: Phase::Building,
            added: Vec::new(),
            sorted: Vec::new(),
            counts: Vec::new(),
            all: Vec::new(),
            scratch: QueryScratch::default(),
            diagnostics: Arc::new(TracingDiagnostics),
            velocity_warned: AtomicBool::new(false),
        };
        set.clear(Step::default());
        set
    }

    /// Creates an empty set with the dimensions in `config`.
    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.cell_size, config.cell_count)
    }

    /// Replaces the diagnostics sink (default: [`TracingDiagnostics`]).
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn CollisionDiagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Discards every body and entry and records `step` for mask lookups.
    pub fn clear(&mut self, step: Step) {
        self.step = step;
        self.phase = Phase::Building;

        self.added.clear();
        self.sorted.clear();
        self.counts.clear();
        self.all.clear();
        self.counts.resize(self.bucket_count() + 2, 0);
    }

    /// Clears the set and moves it to a new borrow lifetime, keeping every
    /// allocation and the diagnostics latch.
    pub fn rebind<'b>(self, step: Step) -> CollisionSet<'b, B> {
        let mut next = CollisionSet {
            shift: self.shift,
            cell_size: self.cell_size,
            cell_mask: self.cell_mask,
            cells: self.cells,
            wrap_mask: self.wrap_mask,
            step,
            phase: Phase::Building,
            added: recycle(self.added),
            sorted: recycle(self.sorted),
            counts: self.counts,
            all: recycle(self.all),
            scratch: self.scratch.rebind(),
            diagnostics: self.diagnostics,
            velocity_warned: self.velocity_warned,
        };
        next.clear(step);
        next
    }

    /// Adds a body, with one entry per cell its bounding box overlaps.
    pub fn add(&mut self, body: &'a B) {
        debug_assert_eq!(
            self.phase,
            Phase::Building,
            "CollisionSet::add after finish; clear the set first"
        );

        let position = body.position();
        let radius = body.radius();
        let min_x = self.cell_of(position.x() - radius);
        let min_y = self.cell_of(position.y() - radius);
        let max_x = self.cell_of(position.x() + radius);
        let max_y = self.cell_of(position.y() + radius);

        let dense_index = self.all.len();
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                self.added.push(Entry {
                    body,
                    dense_index,
                    x,
                    y,
                });
                let index = self.wrapped_index(x, y);
                self.counts[index + 2] += 1;
            }
        }

        self.all.push(body);
    }

    /// Sorts entries into buckets. Queries are valid from here until the next
    /// clear.
    pub fn finish(&mut self) {
        debug_assert_eq!(
            self.phase,
            Phase::Building,
            "CollisionSet::finish called twice"
        );

        // Prefix sums: counts[i + 1] becomes the start of bucket i.
        let mut sum = 0usize;
        for c in &mut self.counts {
            sum += *c;
            *c = sum;
        }

        // Scatter, using counts[i + 1] as bucket i's write cursor. Once bucket
        // i is written its cursor rests on bucket i + 1's start, leaving
        // counts[i] as the start of bucket i.
        self.sorted.clear();
        if let Some(&first) = self.added.first() {
            self.sorted.resize(self.added.len(), first);
        }
        for entry in &self.added {
            let index = self.wrapped_index(entry.x, entry.y) + 1;
            let at = self.counts[index];
            self.counts[index] = at + 1;
            self.sorted[at] = *entry;
        }

        self.scratch.seen.reset(self.all.len());
        self.phase = Phase::Ready;

        tracing::debug!(
            step = self.step.index(),
            bodies = self.all.len(),
            entries = self.sorted.len(),
            "collision set finished"
        );
    }

    /// Every body added since the last clear, in insertion order.
    pub fn all(&self) -> &[&'a B] {
        &self.all
    }

    /// Fresh scratch sized for this set, for the `*_with` query methods.
    pub fn scratch(&self) -> QueryScratch<'a, B> {
        QueryScratch {
            seen: EpochTracker::new(self.all.len()),
            result: Vec::new(),
        }
    }

    /// Entries stored in the bucket for cell `(gx, gy)` after wrapping.
    ///
    /// The slice may hold entries for other unwrapped cells that alias the
    /// same bucket.
    pub fn bucket(&self, gx: i32, gy: i32) -> &[Entry<'a, B>] {
        self.debug_assert_ready();
        self.bucket_at(self.wrapped_index(gx, gy))
    }
}

impl<'a, B: ?Sized> CollisionSet<'a, B> {
    /// Cell side length after rounding.
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Cells per axis after rounding.
    pub fn cell_count(&self) -> u32 {
        self.cells
    }

    /// `log2(cell_size)`: world coordinate to cell is a right shift by this.
    pub fn shift(&self) -> u32 {
        self.shift
    }

    /// Step recorded by the last clear.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Number of bodies added since the last clear.
    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// Returns `true` if no bodies have been added since the last clear.
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Total number of (body, cell) entries.
    pub fn entry_count(&self) -> usize {
        self.added.len()
    }

    /// Returns `true` once [`CollisionSet::finish`] has run.
    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    /// Unwrapped cell coordinate of a world coordinate.
    #[inline]
    pub(crate) fn cell_of(&self, value: f64) -> i32 {
        (value as i32) >> self.shift
    }

    /// Offset of `value` within its cell, in `[0, cell_size)`.
    #[inline]
    pub(crate) fn offset_in_cell(&self, value: i32) -> u64 {
        u64::from(value as u32 & self.cell_mask)
    }

    #[inline]
    pub(crate) fn wrapped_index(&self, x: i32, y: i32) -> usize {
        let gx = (x & self.wrap_mask) as usize;
        let gy = (y & self.wrap_mask) as usize;
        gy * self.cells as usize + gx
    }

    #[inline]
    pub(crate) fn bucket_at(&self, index: usize) -> &[Entry<'a, B>] {
        &self.sorted[self.counts[index]..self.counts[index + 1]]
    }

    #[inline]
    pub(crate) fn debug_assert_ready(&self) {
        debug_assert_eq!(
            self.phase,
            Phase::Ready,
            "CollisionSet queried before finish"
        );
    }

    fn bucket_count(&self) -> usize {
        let cells = self.cells as usize;
        cells * cells
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Epoch-stamped "seen" marks for per-query deduplication.
//!
//! A body may own several grid entries (it spans cells, or its cells alias
//! through the wrap). Queries stamp each body's dense index with the current
//! epoch instead of clearing a flag array, so starting a query is O(1).

/// Epoch-stamped visited set keyed by dense body index.
#[derive(Debug, Clone, Default)]
pub struct EpochTracker {
    epoch: u32,
    seen: Vec<u32>,
}

impl EpochTracker {
    /// Creates a tracker for `len` bodies.
    pub fn new(len: usize) -> Self {
        Self {
            epoch: 0,
            seen: vec![0; len],
        }
    }

    /// Sizes the tracker for `len` bodies and rewinds the epoch to zero.
    pub fn reset(&mut self, len: usize) {
        self.seen.clear();
        self.seen.resize(len, 0);
        self.epoch = 0;
    }

    /// Grows the tracker to at least `len` bodies without disturbing marks.
    ///
    /// New slots hold 0, which never matches an epoch handed out by
    /// [`EpochTracker::new_epoch`].
    pub fn ensure_len(&mut self, len: usize) {
        if self.seen.len() < len {
            self.seen.resize(len, 0);
        }
    }

    /// Number of bodies tracked.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns `true` when no bodies are tracked.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Current epoch; 0 until the first [`EpochTracker::new_epoch`].
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    /// Starts a new query, invalidating every mark in O(1).
    pub fn new_epoch(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        if self.epoch == 0 {
            // Wrapped: old stamps could alias new epochs.
            self.seen.fill(0);
            self.epoch = 1;
        }
    }

    /// Marks `index` for the current epoch. Returns `true` if it was already
    /// marked.
    #[inline]
    pub fn mark_and_check(&mut self, index: usize) -> bool {
        let slot = &mut self.seen[index];
        if *slot == self.epoch {
            return true;
        }
        *slot = self.epoch;
        false
    }
}

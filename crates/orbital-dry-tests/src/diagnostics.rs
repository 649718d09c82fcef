// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Diagnostics sink fake that records what it was told.

use orbital_collide::CollisionDiagnostics;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Records every velocity-clamp notification.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use orbital_collide::CollisionDiagnostics;
/// use orbital_dry_tests::RecordingDiagnostics;
///
/// let sink = Arc::new(RecordingDiagnostics::default());
/// sink.on_velocity_clamped(500_000.0, 450_000);
/// assert_eq!(sink.clamp_count(), 1);
/// assert_eq!(sink.clamped_lengths(), vec![500_000.0]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    clamps: AtomicUsize,
    lengths: Mutex<Vec<f64>>,
}

impl RecordingDiagnostics {
    /// Number of clamp notifications received.
    pub fn clamp_count(&self) -> usize {
        self.clamps.load(Ordering::SeqCst)
    }

    /// Segment lengths reported with each notification, in order.
    pub fn clamped_lengths(&self) -> Vec<f64> {
        self.lengths
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl CollisionDiagnostics for RecordingDiagnostics {
    fn on_velocity_clamped(&self, length: f64, _max: u32) {
        self.clamps.fetch_add(1, Ordering::SeqCst);
        self.lengths
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(length);
    }
}

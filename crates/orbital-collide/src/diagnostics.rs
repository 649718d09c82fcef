// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Diagnostics sink for degraded-but-safe query conditions.

/// Receives notifications the collision set cannot act on itself.
///
/// Each [`crate::CollisionSet`] owns its own one-shot latch, so a sink sees
/// at most one clamp notification per set instance.
pub trait CollisionDiagnostics: Send + Sync {
    /// A line query was longer than `max` world units and was shortened.
    fn on_velocity_clamped(&self, length: f64, max: u32);
}

/// Default sink: forwards to `tracing` at WARN level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl CollisionDiagnostics for TracingDiagnostics {
    fn on_velocity_clamped(&self, length: f64, max: u32) {
        tracing::warn!(
            length,
            max,
            "maximum projectile velocity is {max}; clamping longer segments"
        );
    }
}

/// Sink that discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnostics;

impl CollisionDiagnostics for NullDiagnostics {
    fn on_velocity_clamped(&self, _length: f64, _max: u32) {}
}

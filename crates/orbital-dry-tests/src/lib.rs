// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for orbital crates.
//!
//! # Modules
//!
//! - [`body`] - `FakeBody` and its builder
//! - [`diagnostics`] - Diagnostics sink that records notifications
//! - [`government`] - Factions with an explicit enemy list
//! - [`mask`] - Circle and rotated-box hit masks
//! - [`projectile`] - `FakeProjectile`
//! - [`scatter`] - Deterministic PRNG and body scattering for stress tests
#![forbid(unsafe_code)]

pub mod body;
pub mod diagnostics;
pub mod government;
pub mod mask;
pub mod projectile;
pub mod scatter;

pub use body::{FakeBody, FakeBodyBuilder};
pub use diagnostics::RecordingDiagnostics;
pub use government::FakeGovernment;
pub use mask::{BoxMask, CircleMask, FakeMask};
pub use projectile::FakeProjectile;
pub use scatter::{scatter_bodies, Prng};

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
/// Discrete simulation step.
///
/// The collision set records the step it was cleared for and hands it to
/// [`crate::Body::mask`], since a body's hit mask may be animated. This
/// newtype keeps step passing explicit across APIs.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Step {
    index: u64,
}

impl Step {
    /// Creates a step with the given index.
    #[must_use]
    pub const fn new(index: u64) -> Self {
        Self { index }
    }

    /// Returns the step index.
    #[must_use]
    pub const fn index(&self) -> u64 {
        self.index
    }

    /// Returns the following step.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self {
            index: self.index.wrapping_add(1),
        }
    }
}

impl From<u64> for Step {
    fn from(index: u64) -> Self {
        Self::new(index)
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Factions for hostility-filter tests.

use orbital_collide::Government;

/// Government with an id and an explicit list of hostile ids.
///
/// Hostility is one-directional: `a.is_enemy(b)` checks `a`'s list only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeGovernment {
    id: u32,
    enemies: Vec<u32>,
}

impl FakeGovernment {
    /// A government at peace with everyone.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            enemies: Vec::new(),
        }
    }

    /// Adds `ids` to the enemy list.
    pub fn hostile_to(mut self, ids: &[u32]) -> Self {
        self.enemies.extend_from_slice(ids);
        self
    }

    /// Government id.
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl Government for FakeGovernment {
    fn is_enemy(&self, other: &Self) -> bool {
        self.enemies.contains(&other.id)
    }
}

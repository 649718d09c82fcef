// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Grid configuration for collision sets.
//!
//! [`crate::CollisionSet::new`] trusts its arguments. Values coming from data
//! files go through [`GridConfig::from_json`], which rejects empty or
//! degenerate grids.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest cell size accepted from config data.
///
/// [`crate::CollisionSet::new`] itself takes any `u32`; this bound only
/// rejects grids so coarse that every body lands in a handful of buckets.
pub const MAX_CELL_SIZE: u32 = 65_536;

/// Largest grid side length; the bucket table holds `cell_count²` slots.
pub const MAX_CELL_COUNT: u32 = 4096;

/// Error type for grid configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config blob could not be parsed.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// `cell_size` is zero or larger than [`MAX_CELL_SIZE`].
    #[error("cell size {requested} out of range 1..={max}")]
    CellSizeOutOfRange {
        /// Value found in the config.
        requested: u32,
        /// Upper bound.
        max: u32,
    },
    /// `cell_count` is zero or larger than [`MAX_CELL_COUNT`].
    #[error("cell count {requested} out of range 1..={max}")]
    CellCountOutOfRange {
        /// Value found in the config.
        requested: u32,
        /// Upper bound.
        max: u32,
    },
}

/// Dimensions of a wrapping collision grid.
///
/// Both values are rounded down to powers of two when a set is built from
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Side length of one cell, in world units.
    pub cell_size: u32,
    /// Number of cells along each axis before coordinates wrap.
    pub cell_count: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 256,
            cell_count: 32,
        }
    }
}

impl GridConfig {
    /// Parses and validates a JSON config blob. Missing fields take their
    /// defaults.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config as pretty JSON.
    pub fn to_json(&self) -> Result<Vec<u8>, ConfigError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Checks both dimensions against their supported ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_CELL_SIZE).contains(&self.cell_size) {
            return Err(ConfigError::CellSizeOutOfRange {
                requested: self.cell_size,
                max: MAX_CELL_SIZE,
            });
        }
        if !(1..=MAX_CELL_COUNT).contains(&self.cell_count) {
            return Err(ConfigError::CellCountOutOfRange {
                requested: self.cell_count,
                max: MAX_CELL_COUNT,
            });
        }
        Ok(())
    }
}

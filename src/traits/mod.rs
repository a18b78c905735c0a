//! Derived traits — evenness, passages, crown
//!
//! Traits are never stored; they are recomputed from the seed on every query
//! and must come out identical on every execution.

mod crown;
mod evenness;
mod passages;

pub use crown::Crown;
pub use evenness::Evenness;
pub use passages::count_passages;

use crate::seed::{Grid, Seed};

/// The full trait record for one seed, in the encodings the ownership layer
/// wraps into its metadata envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraitSet {
    pub evenness: Evenness,
    pub passages: u32,
    pub crown: Crown,
}

impl TraitSet {
    /// Decode the seed and derive all three traits.
    pub fn derive(seed: &Seed) -> Self {
        let grid = Grid::decode(seed);
        Self::from_grid(seed, &grid)
    }

    /// Derive from an already-decoded grid, avoiding a second decode.
    pub fn from_grid(seed: &Seed, grid: &Grid) -> Self {
        Self {
            evenness: Evenness::score(seed),
            passages: count_passages(grid),
            crown: Crown::analyze(grid),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "evenness={} | passages={} | crown={}",
            self.evenness.label(),
            self.passages,
            self.crown
        )
    }
}

//! Seed and grid — the 256-bit genome and its 4×64 ring matrix
//!
//! The seed enters the decoder once; everything downstream (traits, artwork)
//! consumes the decoded matrix.

mod grid;
mod value;

pub use grid::{Grid, RINGS, SECTORS};
pub use value::{Seed, SeedError, SEED_BITS, SEED_BYTES};

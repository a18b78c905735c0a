//! # sigil-core
//!
//! Deterministic sigils: a 256-bit seed decodes into a 4×64 ring matrix, the
//! matrix yields three structural traits (evenness, passages, crown), and the
//! same bits assemble into a byte-exact vector document. Identical seeds
//! produce identical traits and identical artwork on every execution, forever.
//!
//! Pipeline: seed → grid → traits → document.

pub mod art;
pub mod seed;
pub mod store;
pub mod traits;

pub use art::{
    assemble, document_sha256, expected_len, render, sector_angle, FragmentError, FragmentSet,
    FragmentStore, MemoryFragments,
};
pub use seed::{Grid, Seed, SeedError, RINGS, SECTORS};
pub use store::{SeedProvider, TokenStore};
pub use traits::{count_passages, Crown, Evenness, TraitSet};

//! Artwork assembly — fragments, exact angles, and the document pipeline
//!
//! The assembler never computes geometry; it splices opaque fragments around
//! the two things that vary per seed: the per-sector rotation angle and the
//! per-cell color token.

mod angle;
mod assembler;
mod fragments;

pub use angle::sector_angle;
pub use assembler::{assemble, document_sha256, expected_len, render};
pub use fragments::{
    builtin_store, FragmentError, FragmentSet, FragmentStore, MemoryFragments, FRAGMENT_NAMES,
};

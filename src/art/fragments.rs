//! Fragment store — the constant byte pieces spliced into every document
//!
//! Fragments are opaque to the assembler: one head, one tail, one shape per
//! ring, one text prefix per hex line. They come from an external store so
//! constant boilerplate is never re-derived per seed. Resolving an incomplete
//! set is a configuration error and fails loudly before any assembly starts.

use std::collections::HashMap;

/// Names of the ten fragments every document needs.
pub const FRAGMENT_NAMES: [&str; 10] = [
    "head", "tail", "ring0", "ring1", "ring2", "ring3", "line0", "line1", "line2", "line3",
];

/// Fragment resolution errors
#[derive(Debug, thiserror::Error)]
pub enum FragmentError {
    #[error("fragment store is missing '{0}'")]
    Missing(&'static str),
}

/// External source of named fragments.
pub trait FragmentStore {
    fn get(&self, name: &str) -> Option<Vec<u8>>;
}

/// Map-backed fragment store.
#[derive(Debug, Clone, Default)]
pub struct MemoryFragments {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryFragments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(name.into(), bytes.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FragmentStore for MemoryFragments {
    fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.entries.get(name).cloned()
    }
}

/// A fully resolved fragment set: 1 head, 1 tail, 4 ring shapes, 4 line
/// prefixes.
#[derive(Debug, Clone)]
pub struct FragmentSet {
    pub head: Vec<u8>,
    pub tail: Vec<u8>,
    pub rings: [Vec<u8>; 4],
    pub lines: [Vec<u8>; 4],
}

impl FragmentSet {
    /// Resolve all ten fragments from a store, failing on the first hole.
    pub fn resolve(store: &dyn FragmentStore) -> Result<Self, FragmentError> {
        let fetch = |name: &'static str| store.get(name).ok_or(FragmentError::Missing(name));
        Ok(Self {
            head: fetch("head")?,
            tail: fetch("tail")?,
            rings: [
                fetch("ring0")?,
                fetch("ring1")?,
                fetch("ring2")?,
                fetch("ring3")?,
            ],
            lines: [
                fetch("line0")?,
                fetch("line1")?,
                fetch("line2")?,
                fetch("line3")?,
            ],
        })
    }

    /// The fragment set the crate ships with: a standalone 1024×1024 SVG
    /// rendition, each ring a radial bar rotated per sector.
    pub fn builtin() -> Self {
        Self {
            head: BUILTIN_HEAD.to_vec(),
            tail: BUILTIN_TAIL.to_vec(),
            rings: [
                BUILTIN_RINGS[0].to_vec(),
                BUILTIN_RINGS[1].to_vec(),
                BUILTIN_RINGS[2].to_vec(),
                BUILTIN_RINGS[3].to_vec(),
            ],
            lines: [
                BUILTIN_LINES[0].to_vec(),
                BUILTIN_LINES[1].to_vec(),
                BUILTIN_LINES[2].to_vec(),
                BUILTIN_LINES[3].to_vec(),
            ],
        }
    }
}

/// A memory store preloaded with the builtin set, for demos and tests of the
/// store seam.
pub fn builtin_store() -> MemoryFragments {
    let mut store = MemoryFragments::new();
    store.insert("head", BUILTIN_HEAD);
    store.insert("tail", BUILTIN_TAIL);
    for (i, ring) in BUILTIN_RINGS.iter().enumerate() {
        store.insert(format!("ring{}", i), *ring);
    }
    for (i, line) in BUILTIN_LINES.iter().enumerate() {
        store.insert(format!("line{}", i), *line);
    }
    store
}

const BUILTIN_HEAD: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1024 1024"><rect width="1024" height="1024" fill="#888"/>"##;

const BUILTIN_TAIL: &[u8] = b"</svg>";

// Each ring shape is an unclosed element: the assembler appends the color
// token and the closing token.
const BUILTIN_RINGS: [&[u8]; 4] = [
    br#"<rect x="632" y="507" width="88" height="10" rx="5""#,
    br#"<rect x="724" y="507" width="88" height="10" rx="5""#,
    br#"<rect x="816" y="507" width="88" height="10" rx="5""#,
    br#"<rect x="908" y="507" width="88" height="10" rx="5""#,
];

const BUILTIN_LINES: [&[u8]; 4] = [
    br##"<text x="512" y="412" font-family="monospace" font-size="28" text-anchor="middle" fill="#111">"##,
    br##"<text x="512" y="452" font-family="monospace" font-size="28" text-anchor="middle" fill="#111">"##,
    br##"<text x="512" y="492" font-family="monospace" font-size="28" text-anchor="middle" fill="#111">"##,
    br##"<text x="512" y="532" font-family="monospace" font-size="28" text-anchor="middle" fill="#111">"##,
];

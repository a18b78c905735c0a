//! Deterministic document assembler
//!
//! Strict concatenation order, the same for every seed:
//!
//! ```text
//! head
//! 64 × sector:  <g transform="rotate(ANGLE 512 512)">
//!                 4 × ring:  ring shape + color token + "/>"
//!               </g>
//! 4 × line:     line prefix + 16 lowercase hex nibbles + "</text>"
//! tail
//! ```
//!
//! The output length is computable before assembly and does not depend on the
//! grid (both color tokens are the same length), so the buffer is allocated
//! once and never grows.

use super::angle::sector_angle;
use super::fragments::FragmentSet;
use crate::seed::{Grid, Seed, RINGS, SECTORS};
use sha2::{Digest, Sha256};

/// Opens a sector rotation wrapper; the exact angle text follows.
const ROTATE_OPEN: &str = "<g transform=\"rotate(";
/// Closes the rotate() call around the shared pivot.
const ROTATE_CLOSE: &str = " 512 512)\">";
const SECTOR_CLOSE: &str = "</g>";

/// Color token for an open (bit 0) cell.
const FILL_BLACK: &str = " fill=\"#000\"";
/// Color token for a blocked (bit 1) cell.
const FILL_WHITE: &str = " fill=\"#fff\"";
/// Closes a ring shape element.
const SHAPE_CLOSE: &str = "/>";
/// Closes a hex text line.
const LINE_CLOSE: &str = "</text>";

/// Hex nibbles per seed text line (64 bits each).
const LINE_NIBBLES: usize = 16;

/// Assemble the vector document for a decoded seed.
pub fn assemble(seed: &Seed, grid: &Grid, fragments: &FragmentSet) -> Vec<u8> {
    let mut doc = Vec::with_capacity(expected_len(fragments));

    doc.extend_from_slice(&fragments.head);

    for sector in 0..SECTORS {
        doc.extend_from_slice(ROTATE_OPEN.as_bytes());
        doc.extend_from_slice(sector_angle(sector).as_bytes());
        doc.extend_from_slice(ROTATE_CLOSE.as_bytes());
        for ring in 0..RINGS {
            doc.extend_from_slice(&fragments.rings[ring]);
            let fill = if grid.bit(ring, sector) {
                FILL_WHITE
            } else {
                FILL_BLACK
            };
            doc.extend_from_slice(fill.as_bytes());
            doc.extend_from_slice(SHAPE_CLOSE.as_bytes());
        }
        doc.extend_from_slice(SECTOR_CLOSE.as_bytes());
    }

    for (line, prefix) in fragments.lines.iter().enumerate() {
        doc.extend_from_slice(prefix);
        let bytes = &seed.as_bytes()[line * 8..line * 8 + 8];
        doc.extend_from_slice(hex::encode(bytes).as_bytes());
        doc.extend_from_slice(LINE_CLOSE.as_bytes());
    }

    doc.extend_from_slice(&fragments.tail);

    debug_assert_eq!(doc.len(), expected_len(fragments));
    doc
}

/// Decode and assemble in one call.
pub fn render(seed: &Seed, fragments: &FragmentSet) -> Vec<u8> {
    let grid = Grid::decode(seed);
    assemble(seed, &grid, fragments)
}

/// Exact document length for any seed, for preallocation.
pub fn expected_len(fragments: &FragmentSet) -> usize {
    let per_ring: usize = fragments
        .rings
        .iter()
        .map(|r| r.len() + FILL_BLACK.len() + SHAPE_CLOSE.len())
        .sum();
    let wrappers: usize = (0..SECTORS)
        .map(|s| ROTATE_OPEN.len() + sector_angle(s).len() + ROTATE_CLOSE.len() + SECTOR_CLOSE.len())
        .sum();
    let lines: usize = fragments
        .lines
        .iter()
        .map(|l| l.len() + LINE_NIBBLES + LINE_CLOSE.len())
        .sum();
    fragments.head.len() + wrappers + SECTORS * per_ring + lines + fragments.tail.len()
}

/// SHA-256 fingerprint of an assembled document, lowercase hex.
pub fn document_sha256(doc: &[u8]) -> String {
    hex::encode(Sha256::digest(doc))
}

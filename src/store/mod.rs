//! Token registry — the ownership collaborator the pipeline renders for
//!
//! A seed is minted once, bound to a token id, and never modified; the core
//! derives traits and artwork fresh on every query. JSON persistence with an
//! open → mint → save flow. Payment, royalties, and supply caps live with the
//! caller, not here.

use crate::seed::Seed;
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Source of seeds by token id (the `getSeed` seam the core consumes).
pub trait SeedProvider {
    fn seed_of(&self, token_id: u64) -> Option<Seed>;
}

/// Minting errors
#[derive(Debug, thiserror::Error)]
pub enum MintError {
    #[error("token #{0} already minted")]
    TokenExists(u64),
}

/// One minted token: its seed and when it was bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MintedToken {
    pub seed: Seed,
    pub minted_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreMetadata {
    pub owner: String,
    pub created_at: String,
    pub total_minted: u64,
}

/// JSON-backed registry of minted tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenStore {
    pub tokens: BTreeMap<u64, MintedToken>,
    pub path: PathBuf,
    pub metadata: StoreMetadata,
}

impl TokenStore {
    /// Open an existing store or start a fresh one at `path`.
    pub fn open(path: impl AsRef<Path>, owner: &str) -> Self {
        let path = path.as_ref().to_path_buf();
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(&path) {
                if let Ok(store) = serde_json::from_str::<TokenStore>(&data) {
                    info!("Loaded {} tokens from {}", store.tokens.len(), path.display());
                    return store;
                }
            }
        }
        Self {
            tokens: BTreeMap::new(),
            path,
            metadata: StoreMetadata {
                owner: owner.to_string(),
                created_at: Utc::now().to_rfc3339(),
                total_minted: 0,
            },
        }
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Bind a seed to a token id. A token id can be minted exactly once.
    pub fn mint(&mut self, token_id: u64, seed: Seed) -> Result<(), MintError> {
        if self.tokens.contains_key(&token_id) {
            return Err(MintError::TokenExists(token_id));
        }
        self.metadata.total_minted += 1;
        self.tokens.insert(
            token_id,
            MintedToken {
                seed,
                minted_at: Utc::now(),
            },
        );
        info!("Minted token #{} with seed {}", token_id, seed);
        Ok(())
    }

    pub fn get(&self, token_id: u64) -> Option<&MintedToken> {
        self.tokens.get(&token_id)
    }

    pub fn count(&self) -> usize {
        self.tokens.len()
    }

    /// Smallest unused token id.
    pub fn next_token_id(&self) -> u64 {
        self.tokens.keys().next_back().map(|id| id + 1).unwrap_or(1)
    }

    pub fn summary(&self) -> String {
        format!(
            "TokenStore '{}' | {} tokens | {} minted all-time",
            self.metadata.owner,
            self.tokens.len(),
            self.metadata.total_minted
        )
    }
}

impl SeedProvider for TokenStore {
    fn seed_of(&self, token_id: u64) -> Option<Seed> {
        self.tokens.get(&token_id).map(|t| t.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_path() -> PathBuf {
        std::env::temp_dir().join(format!("sigil-store-test-{}.json", rand::random::<u64>()))
    }

    fn seed(byte: u8) -> Seed {
        Seed::from_bytes([byte; 32])
    }

    #[test]
    fn test_mint_and_lookup() {
        let mut store = TokenStore::open(test_path(), "tester");
        store.mint(1, seed(0xaa)).unwrap();
        store.mint(7, seed(0xbb)).unwrap();

        assert_eq!(store.count(), 2);
        assert_eq!(store.metadata.total_minted, 2);
        assert_eq!(store.seed_of(1), Some(seed(0xaa)));
        assert_eq!(store.seed_of(7), Some(seed(0xbb)));
        assert_eq!(store.seed_of(2), None);
        assert_eq!(store.next_token_id(), 8);
    }

    #[test]
    fn test_double_mint_rejected() {
        let mut store = TokenStore::open(test_path(), "tester");
        store.mint(1, seed(0x01)).unwrap();
        let err = store.mint(1, seed(0x02)).unwrap_err();
        assert!(matches!(err, MintError::TokenExists(1)));
        // First binding is untouched.
        assert_eq!(store.seed_of(1), Some(seed(0x01)));
    }

    #[test]
    fn test_save_and_reopen() {
        let path = test_path();
        let mut store = TokenStore::open(&path, "tester");
        store.mint(3, seed(0xcd)).unwrap();
        store.save().unwrap();

        let reopened = TokenStore::open(&path, "ignored-on-reload");
        assert_eq!(reopened.metadata.owner, "tester");
        assert_eq!(reopened.seed_of(3), Some(seed(0xcd)));
        assert_eq!(reopened.next_token_id(), 4);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_fresh_store_starts_at_one() {
        let store = TokenStore::open(test_path(), "tester");
        assert_eq!(store.next_token_id(), 1);
        assert_eq!(store.count(), 0);
    }
}

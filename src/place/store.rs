//! Place store with single-file JSON persistence
//!
//! The whole ordered collection lives in memory and is written back as
//! one JSON array after every mutation. Loading is fail-soft: a missing
//! or corrupt backing file yields an empty collection so a damaged store
//! never blocks the app (first run and corruption are indistinguishable
//! by design). Saves are atomic: the collection is written to a temp
//! file in the same directory and renamed over the target, so a reader
//! never observes a partially written file.

use crate::error::Result;
use crate::place::types::{Coordinate, Place};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory place collection backed by a single JSON file
pub struct PlaceStore {
    save_path: PathBuf,
    places: Arc<RwLock<Vec<Place>>>,
}

impl PlaceStore {
    /// Open a store at the given backing file, loading any persisted
    /// collection fail-soft
    pub async fn open(save_path: PathBuf) -> std::io::Result<Self> {
        if let Some(parent) = save_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let places = load_from_disk(&save_path);

        Ok(Self {
            save_path,
            places: Arc::new(RwLock::new(places)),
        })
    }

    /// Default backing file (~/.placevault/saved_places.json)
    pub fn default_path() -> PathBuf {
        dirs_next::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".placevault")
            .join("saved_places.json")
    }

    /// Read snapshot of the ordered collection
    pub async fn places(&self) -> Vec<Place> {
        self.places.read().await.clone()
    }

    /// Number of places in the collection
    pub async fn len(&self) -> usize {
        self.places.read().await.len()
    }

    /// True when the collection holds no places
    pub async fn is_empty(&self) -> bool {
        self.places.read().await.is_empty()
    }

    /// Create a new place at the given coordinate, append it to the end
    /// of the collection, and persist.
    ///
    /// Returns the new place so the caller can route a follow-up edit
    /// flow to it.
    pub async fn add_place(&self, at: Coordinate) -> Place {
        let place = Place::new(at);

        {
            let mut places = self.places.write().await;
            places.push(place.clone());
        }

        self.persist().await;
        place
    }

    /// Replace the entry whose id matches `original` with `updated`
    /// (position preserved) and persist.
    ///
    /// The stored entry keeps `original`'s id regardless of the id
    /// carried by `updated`. An id not present in the collection is a
    /// no-op; `false` signals the miss without raising an error.
    pub async fn update_place(&self, original: &Place, updated: Place) -> bool {
        let found = {
            let mut places = self.places.write().await;
            match places.iter_mut().find(|p| p.id == original.id) {
                Some(entry) => {
                    *entry = Place {
                        id: original.id,
                        ..updated
                    };
                    true
                }
                None => false,
            }
        };

        if found {
            self.persist().await;
        } else {
            tracing::debug!(id = %original.id, "update targeted an id not in the collection");
        }
        found
    }

    /// Serialize the whole collection and atomically replace the backing
    /// file.
    ///
    /// On failure the previous persisted state is left intact and the
    /// in-memory collection remains the session's source of truth.
    pub async fn save(&self) -> Result<()> {
        let json = {
            let places = self.places.read().await;
            serde_json::to_vec_pretty(&*places)?
        };

        let tmp = self.save_path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, &self.save_path).await?;
        Ok(())
    }

    /// Save with the non-fatal error policy used by mutation paths
    async fn persist(&self) {
        if let Err(e) = self.save().await {
            tracing::warn!(
                "Failed to persist places to {}: {}",
                self.save_path.display(),
                e
            );
        }
    }
}

/// Load the persisted collection, treating every failure as "empty"
fn load_from_disk(path: &Path) -> Vec<Place> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
            }
            return Vec::new();
        }
    };

    match serde_json::from_str(&data) {
        Ok(places) => places,
        Err(e) => {
            tracing::warn!("Failed to parse {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

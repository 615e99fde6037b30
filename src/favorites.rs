//! Persisted favorite-id set
//!
//! A strict subset of the place store's contract: a set of string ids
//! with fail-soft loading and atomic saves. Ids are written sorted so
//! identical sets always produce identical bytes on disk.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory id set backed by a single JSON file
pub struct FavoriteSet {
    save_path: PathBuf,
    ids: Arc<RwLock<HashSet<String>>>,
}

impl FavoriteSet {
    /// Open the set at the given backing file, loading fail-soft
    pub async fn open(save_path: PathBuf) -> std::io::Result<Self> {
        if let Some(parent) = save_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let ids = load_from_disk(&save_path);

        Ok(Self {
            save_path,
            ids: Arc::new(RwLock::new(ids)),
        })
    }

    /// Default backing file (~/.placevault/favorites.json)
    pub fn default_path() -> PathBuf {
        dirs_next::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".placevault")
            .join("favorites.json")
    }

    /// True when the set contains the given id
    pub async fn contains(&self, id: &str) -> bool {
        self.ids.read().await.contains(id)
    }

    /// Add an id to the set and persist
    pub async fn add(&self, id: impl Into<String>) {
        {
            let mut ids = self.ids.write().await;
            ids.insert(id.into());
        }
        self.persist().await;
    }

    /// Remove an id from the set and persist
    pub async fn remove(&self, id: &str) {
        {
            let mut ids = self.ids.write().await;
            ids.remove(id);
        }
        self.persist().await;
    }

    /// Number of favorited ids
    pub async fn len(&self) -> usize {
        self.ids.read().await.len()
    }

    /// True when nothing is favorited
    pub async fn is_empty(&self) -> bool {
        self.ids.read().await.is_empty()
    }

    /// Serialize the set (sorted) and atomically replace the backing file
    pub async fn save(&self) -> crate::error::Result<()> {
        let json = {
            let ids = self.ids.read().await;
            let mut sorted: Vec<&String> = ids.iter().collect();
            sorted.sort();
            serde_json::to_vec_pretty(&sorted)?
        };

        let tmp = self.save_path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, &self.save_path).await?;
        Ok(())
    }

    async fn persist(&self) {
        if let Err(e) = self.save().await {
            tracing::warn!(
                "Failed to persist favorites to {}: {}",
                self.save_path.display(),
                e
            );
        }
    }
}

/// Load the persisted set, treating every failure as "empty"
fn load_from_disk(path: &Path) -> HashSet<String> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
            }
            return HashSet::new();
        }
    };

    match serde_json::from_str(&data) {
        Ok(ids) => ids,
        Err(e) => {
            tracing::warn!("Failed to parse {}: {}", path.display(), e);
            HashSet::new()
        }
    }
}

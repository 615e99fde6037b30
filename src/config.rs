//! Place Vault configuration management

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main Place Vault configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Nearby enrichment lookup configuration
    #[serde(default)]
    pub lookup: LookupConfig,
}

impl VaultConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backing file for the place collection
    pub places_path: PathBuf,

    /// Backing file for the favorite-id set
    pub favorites_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            places_path: crate::place::PlaceStore::default_path(),
            favorites_path: crate::favorites::FavoriteSet::default_path(),
        }
    }
}

/// Nearby enrichment lookup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Lookup endpoint URL
    pub endpoint: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://en.wikipedia.org/w/api.php".to_string(),
            timeout_secs: 10,
        }
    }
}

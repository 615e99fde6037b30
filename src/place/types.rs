//! Place entity types
//!
//! Identity and equality are defined solely by `id`: two places with
//! identical coordinates but different ids are distinct, and a place with
//! an edited name but the same id is the same place for update purposes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default display label assigned to freshly created places
pub const DEFAULT_PLACE_NAME: &str = "New location";

/// A geographic point in double-precision degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A user-defined geographic bookmark
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    /// Opaque unique identifier, generated at creation, immutable
    pub id: Uuid,

    /// Display label
    pub name: String,

    /// Free-text description
    pub description: String,

    pub latitude: f64,
    pub longitude: f64,
}

impl Place {
    /// Create a new place at the given coordinate with a fresh id and
    /// default name/description
    pub fn new(at: Coordinate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: DEFAULT_PLACE_NAME.to_string(),
            description: String::new(),
            latitude: at.latitude,
            longitude: at.longitude,
        }
    }

    /// The place's coordinate as a value
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

// Equality is by id only
impl PartialEq for Place {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Place {}

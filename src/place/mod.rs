//! Place module — geographic bookmarks and their persistent store
//!
//! A [`Place`] is a user-created bookmark with a stable identity; the
//! [`PlaceStore`] is the single source of truth for the ordered
//! collection, persisted as one JSON file under `~/.placevault/`.

pub mod store;
pub mod types;

pub use store::PlaceStore;
pub use types::{Coordinate, Place};

//! Place Vault - persistent geographic bookmarks with a session auth gate
//! and a nearby enrichment lookup
//!
//! Place Vault is the stateful core of a map-based bookmarking application.
//! It owns three independent concerns, composed only by the host app:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      Host application                   │
//! │   (map surface, edit sheets, event binding — external)  │
//! └────────┬───────────────────┬───────────────────┬────────┘
//!          │                   │                   │
//! ┌────────▼────────┐ ┌────────▼────────┐ ┌────────▼────────┐
//! │   PlaceStore    │ │   AccessGate    │ │ NearbyInfoLookup│
//! │  - place list   │ │  - Locked /     │ │  - page id set  │
//! │  - atomic save  │ │    Unlocked     │ │    -> records   │
//! │  - fail-soft    │ │  - one check    │ │  - title-sorted │
//! │    load         │ │    per session  │ │  - fallback text│
//! └────────┬────────┘ └────────┬────────┘ └────────┬────────┘
//!          │                   │                   │
//!     backing file      Authenticator         remote lookup
//!     (JSON array)      (platform-owned)      endpoint (HTTP)
//! ```
//!
//! ## Key behaviors
//!
//! ### Durability without drama
//! - The place collection is loaded fail-soft: a missing or corrupt
//!   backing file yields an empty collection, never an error.
//! - Every mutation persists the whole collection atomically (temp file
//!   plus rename); a failed save is logged and the in-memory collection
//!   remains the source of truth for the rest of the session.
//!
//! ### Advisory session gate
//! - [`AccessGate`] starts `Locked` on every process start and unlocks at
//!   most once per session. It gates UI access by convention; it does not
//!   wrap [`PlaceStore`] operations.
//!
//! ### Deterministic enrichment
//! - [`NearbyInfoLookup`] decodes an unordered id-keyed response into
//!   records sorted by title, substituting a fixed sentinel for missing
//!   summaries. Only whole-response failures surface as errors.
//!
//! ## Modules
//!
//! - [`place`]: place entity and the persistent store
//! - [`gate`]: session access gate and the authenticator seam
//! - [`lookup`]: nearby enrichment lookup client and wire types
//! - [`favorites`]: persisted favorite-id set
//! - [`config`]: configuration management

pub mod config;
pub mod error;
pub mod favorites;
pub mod gate;
pub mod lookup;
pub mod place;

pub use config::VaultConfig;
pub use error::{Error, Result};
pub use favorites::FavoriteSet;
pub use gate::{AccessGate, AuthOutcome, Authenticator, GateState};
pub use lookup::{EnrichmentRecord, NearbyInfoLookup};
pub use place::{Coordinate, Place, PlaceStore};

//! `packindex-keymap` — name-keyed mapping reconciliation engine.
//!
//! Pure engine crate: receives the host's source collection (named items
//! from an asset pack) and its persisted key→name mapping, returns a rebuilt
//! mapping plus a conflict-checked lookup table. No CLI or IO dependencies —
//! the host owns loading, persistence, and enum reflection.

pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod sync;

pub use config::{EnumDescriptor, EnumVariant, KeyMode, KeymapConfig, SyncParams};
pub use error::KeymapError;
pub use lookup::build_lookup;
pub use model::{KeyConflict, LookupOutcome, MapEntry, SourceItem, SyncOutcome};
pub use sync::{is_up_to_date, normalize_name, rebind_keys, reconcile, reset_keys};

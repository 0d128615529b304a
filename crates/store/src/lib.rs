//! `packindex-store` — typed enum-keyed value store.
//!
//! A list-backed association of (key-type identifier, integer value) → value
//! with last-writer-wins upsert and a closed allow-list of key types fixed at
//! construction. The host persists the database; the store never prunes it.

pub mod error;
pub mod model;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub use error::StoreError;
pub use model::StoredEntry;

// ---------------------------------------------------------------------------
// Typed keys
// ---------------------------------------------------------------------------

/// A host enum usable as a store key. Implementations pin the type
/// identifier checked against the allow-list and the integer value stored
/// per variant.
pub trait StoreKey {
    /// Stable identifier of the key type, e.g. `"ui.Illustration"`.
    fn type_id() -> &'static str;
    /// Integer value of this key within its type.
    fn key_value(&self) -> i32;
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Generic get/set store over a closed set of permitted key types.
///
/// There is no delete: entries only appear (`set` on a new pair) or get
/// replaced (`set` on an existing pair).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyedStore<V> {
    authorized: BTreeSet<String>,
    database: Vec<StoredEntry<V>>,
}

impl<V> KeyedStore<V> {
    /// Create an empty store. The allow-list is fixed for the store's
    /// lifetime.
    pub fn new(authorized: impl IntoIterator<Item = String>) -> Self {
        Self {
            authorized: authorized.into_iter().collect(),
            database: Vec::new(),
        }
    }

    /// The closed set of key-type identifiers this store accepts.
    pub fn authorized_key_types(&self) -> &BTreeSet<String> {
        &self.authorized
    }

    pub fn len(&self) -> usize {
        self.database.len()
    }

    pub fn is_empty(&self) -> bool {
        self.database.is_empty()
    }

    /// Look up the value stored for `(key_type, key)`.
    pub fn get(&self, key_type: &str, key: i32) -> Option<&V> {
        self.database
            .iter()
            .find(|e| e.matches(key_type, key))
            .map(|e| &e.value)
    }

    /// Spec shape of `get`: the stored value, or the caller's default when
    /// the pair is absent, plus a found flag.
    pub fn get_or<'a>(&'a self, key_type: &str, key: i32, default: &'a V) -> (&'a V, bool) {
        match self.get(key_type, key) {
            Some(value) => (value, true),
            None => (default, false),
        }
    }

    /// Store a value for `(key_type, key)`, replacing any existing entry.
    ///
    /// Rejects key types outside the allow-list before touching the
    /// database. Unauthorized key types indicate a programmer error (an
    /// enum that was never registered), so hosts may escalate this.
    pub fn set(&mut self, key_type: &str, key: i32, value: V) -> Result<(), StoreError> {
        if !self.authorized.contains(key_type) {
            return Err(StoreError::UnauthorizedKeyType(key_type.to_string()));
        }
        self.database.retain(|e| !e.matches(key_type, key));
        self.database.push(StoredEntry::new(key_type, key, value));
        Ok(())
    }

    /// Typed variant of [`get`](Self::get) for host key enums.
    pub fn get_key<K: StoreKey>(&self, key: &K) -> Option<&V> {
        self.get(K::type_id(), key.key_value())
    }

    /// Typed variant of [`set`](Self::set) for host key enums.
    pub fn set_key<K: StoreKey>(&mut self, key: &K, value: V) -> Result<(), StoreError> {
        self.set(K::type_id(), key.key_value(), value)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

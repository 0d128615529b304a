use serde::{Deserialize, Serialize};

/// One stored association: a (key type, key value) pair and its payload.
/// At most one entry exists per distinct pair; `KeyedStore::set` enforces
/// that by removing the old entry before appending the new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEntry<V> {
    /// Fully qualified identifier of the key's enum type,
    /// e.g. `"ui.Illustration"`.
    pub key_type: String,
    /// Integer value of the key within its enum type.
    pub key: i32,
    pub value: V,
}

impl<V> StoredEntry<V> {
    pub fn new(key_type: impl Into<String>, key: i32, value: V) -> Self {
        Self { key_type: key_type.into(), key, value }
    }

    pub fn matches(&self, key_type: &str, key: i32) -> bool {
        self.key_type == key_type && self.key == key
    }
}

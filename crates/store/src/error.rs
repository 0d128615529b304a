use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// `set` was called with a key type outside the store's allow-list.
    /// The store is left unchanged.
    UnauthorizedKeyType(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnauthorizedKeyType(key_type) => {
                write!(f, "key type '{key_type}' is not authorized for this store")
            }
        }
    }
}

impl std::error::Error for StoreError {}

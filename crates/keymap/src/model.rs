use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::KeymapError;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A single named resource from the host's source collection (e.g. one
/// sprite in an atlas). The engine only cares that the name is a stable
/// string; how it was produced is the host's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceItem {
    pub name: String,
}

impl SourceItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

/// One persisted key → name association. The host serializes the mapping;
/// the engine only rebuilds it. Duplicate keys are tolerated here and only
/// surface as conflicts when the lookup table is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapEntry {
    pub key: i32,
    pub name: String,
}

impl MapEntry {
    pub fn new(key: i32, name: impl Into<String>) -> Self {
        Self { key, name: name.into() }
    }
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Two entries claimed the same non-default key under different names.
/// The first binding was kept, the later one recorded here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyConflict {
    pub key: i32,
    pub kept: String,
    pub rejected: String,
}

/// Derived key → name index plus everything the host needs for diagnostics.
/// Never persisted; rebuilt on demand whenever the mapping changes.
#[derive(Debug, Clone, Serialize)]
pub struct LookupOutcome {
    pub table: BTreeMap<i32, String>,
    pub conflicts: Vec<KeyConflict>,
    /// False when parameters are unconfigured or the built table is empty
    /// (empty source, or every entry still on the default key). Conflicts
    /// alone never clear this.
    pub ok: bool,
}

// ---------------------------------------------------------------------------
// Sync outcome
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct SyncMeta {
    pub engine_version: String,
    /// RFC 3339 timestamp of the run.
    pub run_at: String,
}

/// What a reconciliation run did, in host-reportable terms.
#[derive(Debug, Clone, Serialize)]
pub struct SyncSummary {
    pub retained: usize,
    pub added: Vec<String>,
    pub dropped: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SyncOutcome {
    pub meta: SyncMeta,
    pub summary: SyncSummary,
    /// The rebuilt mapping. Replaces the host's previous mapping entirely.
    pub mapping: Vec<MapEntry>,
}

impl SyncOutcome {
    /// JSON rendering for host-side diagnostics/logging.
    pub fn to_json(&self) -> Result<String, KeymapError> {
        serde_json::to_string_pretty(self).map_err(|e| KeymapError::Serialize(e.to_string()))
    }
}

use crate::config::SyncParams;
use crate::error::KeymapError;
use crate::model::{MapEntry, SourceItem, SyncMeta, SyncOutcome, SyncSummary};

/// Marker the host engine appends to instantiated copies of an asset.
/// Stripped before any name comparison.
const CLONE_MARKER: &str = "(Clone)";

/// Strip every occurrence of the transient clone marker from a source name.
pub fn normalize_name(name: &str) -> String {
    name.replace(CLONE_MARKER, "")
}

/// True when every source item already has a mapping entry under its
/// normalized name (exact, case-sensitive). Unconfigured params always
/// report stale; an empty source collection is vacuously up to date.
pub fn is_up_to_date(params: &SyncParams, mapping: &[MapEntry], items: &[SourceItem]) -> bool {
    if !params.is_configured() {
        return false;
    }
    items.iter().all(|item| {
        let name = normalize_name(&item.name);
        mapping.iter().any(|e| e.name == name)
    })
}

/// Rebuild the mapping against the source collection.
///
/// Source names are normalized and stably sorted (ordinal) to fix the
/// output order. Entries whose names survive carry their keys over, new
/// names get the configured default key, and names absent from the source
/// are dropped — a full rebuild, not a patch. Running it twice over the
/// same source is a no-op on the result.
pub fn reconcile(
    params: &SyncParams,
    mapping: &[MapEntry],
    items: &[SourceItem],
) -> Result<SyncOutcome, KeymapError> {
    if !params.is_configured() {
        return Err(KeymapError::ParametersNotConfigured);
    }

    let mut names: Vec<String> = items.iter().map(|i| normalize_name(&i.name)).collect();
    names.sort();

    let mut next: Vec<MapEntry> = Vec::with_capacity(names.len());
    let mut added = Vec::new();
    let mut retained = 0usize;

    for name in names {
        // Duplicate source names collapse onto one entry; sort order makes
        // them adjacent.
        if next.last().is_some_and(|e| e.name == name) {
            continue;
        }
        match mapping.iter().find(|e| e.name == name) {
            Some(existing) => {
                retained += 1;
                next.push(existing.clone());
            }
            None => {
                added.push(name.clone());
                next.push(MapEntry { key: params.default_key, name });
            }
        }
    }

    let mut dropped = Vec::new();
    for entry in mapping {
        if !next.iter().any(|e| e.name == entry.name) && !dropped.contains(&entry.name) {
            dropped.push(entry.name.clone());
        }
    }

    Ok(SyncOutcome {
        meta: SyncMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary: SyncSummary { retained, added, dropped },
        mapping: next,
    })
}

/// Rewrite every entry pinned to `old_key` to `new_key`. Used when the
/// operator moves the configured default key and wants entries still on the
/// old default to follow it. Adds and removes nothing.
pub fn rebind_keys(mapping: &[MapEntry], old_key: i32, new_key: i32) -> Vec<MapEntry> {
    mapping
        .iter()
        .map(|e| MapEntry {
            key: if e.key == old_key { new_key } else { e.key },
            name: e.name.clone(),
        })
        .collect()
}

/// Reset every key to `default_key`, keeping names and order. Used when the
/// operator switches key modes and the old keys are meaningless.
pub fn reset_keys(mapping: &[MapEntry], default_key: i32) -> Vec<MapEntry> {
    mapping
        .iter()
        .map(|e| MapEntry {
            key: default_key,
            name: e.name.clone(),
        })
        .collect()
}

use std::collections::BTreeMap;

use crate::config::SyncParams;
use crate::model::{KeyConflict, LookupOutcome, MapEntry};

/// Build the derived key → name lookup table from a mapping.
///
/// Entries still on the configured default key are unassigned and skipped.
/// When two entries claim the same key under different names, the first
/// binding wins and the later one is recorded as a conflict; detection runs
/// across the whole mapping rather than stopping at the first clash.
///
/// `ok` is false when the params are unconfigured (key mode `none`, or enum
/// mode without a descriptor — conflict detection is skipped entirely) or
/// when the built table ends up empty.
pub fn build_lookup(params: &SyncParams, mapping: &[MapEntry]) -> LookupOutcome {
    if !params.is_configured() {
        return LookupOutcome {
            table: BTreeMap::new(),
            conflicts: Vec::new(),
            ok: false,
        };
    }

    let mut table: BTreeMap<i32, String> = BTreeMap::new();
    let mut conflicts = Vec::new();

    for entry in mapping {
        if entry.key == params.default_key {
            continue;
        }
        match table.get(&entry.key) {
            Some(existing) if *existing != entry.name => conflicts.push(KeyConflict {
                key: entry.key,
                kept: existing.clone(),
                rejected: entry.name.clone(),
            }),
            // Same name bound twice under the same key is redundant, not a
            // conflict.
            Some(_) => {}
            None => {
                table.insert(entry.key, entry.name.clone());
            }
        }
    }

    let ok = !table.is_empty();
    LookupOutcome { table, conflicts, ok }
}

//! # Known-object alias registry
//!
//! Cross-report knowledge accumulates in the [`AliasStore`]: every alias
//! learned from the name-resolution service maps back to a canonical,
//! lowercase object identifier, together with the object's position and the
//! time it was last resolved.
//!
//! The store is **process-wide shared state** constructed once and threaded
//! explicitly through the components that need it: the coordinate
//! enrichment path writes it, the alias extractor reads it. Writes to the
//! same object id are serialized by the interior lock, and an insert is
//! visible to every subsequent read within the same or a later parse.
//! Records are refreshed in place when stale and never deleted.

pub mod enrichment;
pub mod resolver;

use std::collections::HashMap;
use std::sync::RwLock;

use hifitime::Epoch;

use crate::constants::EquatorialCoord;

/// One alias string mapping to a canonical object identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasRecord {
    pub alias: String,
    pub object_id: String,
}

/// Per-object resolution state: last known position and resolution time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectEntry {
    pub coord: EquatorialCoord,
    pub last_updated: Epoch,
}

#[derive(Debug, Default)]
struct AliasState {
    objects: HashMap<String, ObjectEntry>,
    aliases: Vec<AliasRecord>,
}

/// Shared alias registry; see the module documentation for the concurrency
/// contract.
#[derive(Debug, Default)]
pub struct AliasStore {
    inner: RwLock<AliasState>,
}

impl AliasStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the resolution state of an object id (lowercased before the
    /// lookup).
    pub fn lookup(&self, object_id: &str) -> Option<ObjectEntry> {
        let state = self.inner.read().expect("alias store lock poisoned");
        state.objects.get(&object_id.to_lowercase()).copied()
    }

    /// Snapshot of all alias records, in insertion order.
    pub fn all_aliases(&self) -> Vec<AliasRecord> {
        let state = self.inner.read().expect("alias store lock poisoned");
        state.aliases.clone()
    }

    /// Register an alias for an object, stamping the resolution time with
    /// the current clock.
    pub fn insert(&self, object_id: &str, coord: EquatorialCoord, alias: &str) {
        self.insert_dated(
            object_id,
            coord,
            alias,
            Epoch::now().expect("system clock unavailable"),
        );
    }

    /// Register an alias for an object with an explicit resolution time.
    pub fn insert_dated(
        &self,
        object_id: &str,
        coord: EquatorialCoord,
        alias: &str,
        last_updated: Epoch,
    ) {
        let object_id = object_id.to_lowercase();
        let mut state = self.inner.write().expect("alias store lock poisoned");

        state
            .objects
            .insert(object_id.clone(), ObjectEntry { coord, last_updated });

        let known = state
            .aliases
            .iter()
            .any(|record| record.object_id == object_id && record.alias.eq_ignore_ascii_case(alias));
        if !known {
            state.aliases.push(AliasRecord {
                alias: alias.to_string(),
                object_id,
            });
        }
    }

    /// Refresh an object's position and resolution time in place, keeping
    /// its aliases. Unknown ids are ignored.
    pub fn refresh(&self, object_id: &str, coord: EquatorialCoord) {
        let object_id = object_id.to_lowercase();
        let mut state = self.inner.write().expect("alias store lock poisoned");
        if let Some(entry) = state.objects.get_mut(&object_id) {
            entry.coord = coord;
            entry.last_updated = Epoch::now().expect("system clock unavailable");
        }
    }

    pub fn len(&self) -> usize {
        let state = self.inner.read().expect("alias store lock poisoned");
        state.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod alias_store_test {
    use super::*;

    fn coord(ra: f64, dec: f64) -> EquatorialCoord {
        EquatorialCoord { ra, dec }
    }

    #[test]
    fn test_insert_and_lookup() {
        let store = AliasStore::new();
        assert!(store.is_empty());
        assert_eq!(store.lookup("m31"), None);

        store.insert("M31", coord(10.68, 41.27), "Andromeda Galaxy");
        let entry = store.lookup("m31").expect("entry inserted");
        assert_eq!(entry.coord, coord(10.68, 41.27));
        assert_eq!(store.len(), 1);

        // Lookup is id-case-insensitive.
        assert!(store.lookup("M31").is_some());
    }

    #[test]
    fn test_aliases_accumulate_without_duplicates() {
        let store = AliasStore::new();
        store.insert("m31", coord(10.68, 41.27), "Andromeda Galaxy");
        store.insert("m31", coord(10.68, 41.27), "NGC 224");
        store.insert("m31", coord(10.68, 41.27), "andromeda galaxy");

        let aliases = store.all_aliases();
        assert_eq!(
            aliases,
            vec![
                AliasRecord {
                    alias: "Andromeda Galaxy".into(),
                    object_id: "m31".into()
                },
                AliasRecord {
                    alias: "NGC 224".into(),
                    object_id: "m31".into()
                },
            ]
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_refresh_updates_in_place() {
        let store = AliasStore::new();
        let stale = Epoch::from_gregorian_utc(2000, 1, 1, 0, 0, 0, 0);
        store.insert_dated("m31", coord(10.0, 41.0), "Andromeda Galaxy", stale);

        store.refresh("m31", coord(10.68, 41.27));
        let entry = store.lookup("m31").expect("entry kept");
        assert_eq!(entry.coord, coord(10.68, 41.27));
        assert!(entry.last_updated > stale);
        assert_eq!(store.all_aliases().len(), 1);

        // Refreshing an unknown id does not create one.
        store.refresh("m99", coord(1.0, 2.0));
        assert_eq!(store.lookup("m99"), None);
    }
}

//! # Chord Set Storage
//!
//! Named chord progressions saved to a JSON file.
//!
//! The file holds a JSON array of `{ "name", "chords", "id" }` objects. The same
//! format is used for export and import, so a file exported from one machine can
//! be imported on another. Imports only add sets whose `id` is not already stored.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::HypersynError;

/// File name used inside the data directory.
pub const STORE_FILE_NAME: &str = "hypersyn-chord-sets.json";

/// Default location of the chord-set file.
pub fn default_store_path() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("hypersyn");
    path.push(STORE_FILE_NAME);
    path
}

/// A named chord progression. `chords` is the raw input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordSet {
    pub name: String,
    pub chords: String,
    pub id: String,
}

/// What [`ChordSetStore::save_set`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

/// In-memory list of chord sets with file persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChordSetStore {
    sets: Vec<ChordSet>,
}

impl ChordSetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the store from `path`.
    ///
    /// A missing file is an empty store. A file that isn't a valid chord-set list is
    /// also treated as empty, with a warning.
    pub fn load(path: &Path) -> Result<Self, HypersynError> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = fs::read_to_string(path)?;
        match serde_json::from_str::<Vec<ChordSet>>(&content) {
            Ok(sets) => Ok(ChordSetStore { sets }),
            Err(e) => {
                warn!("Ignoring unreadable chord set file {}: {}", path.display(), e);
                Ok(Self::new())
            }
        }
    }

    /// Write the store to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), HypersynError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string(&self.sets)?)?;
        Ok(())
    }

    pub fn sets(&self) -> &[ChordSet] {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Save `chords` under `name`. An existing set with that name keeps its id and gets the new chords.
    pub fn save_set(&mut self, name: &str, chords: &str) -> Result<SaveOutcome, HypersynError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HypersynError::InvalidChordSet(
                "a chord set needs a name".to_string(),
            ));
        }

        if let Some(existing) = self.sets.iter_mut().find(|s| s.name == name) {
            existing.chords = chords.to_string();
            info!("Updated chord set '{}'", name);
            return Ok(SaveOutcome::Updated);
        }

        self.sets.push(ChordSet {
            name: name.to_string(),
            chords: chords.to_string(),
            id: Uuid::new_v4().to_string(),
        });
        info!("Saved chord set '{}'", name);
        Ok(SaveOutcome::Created)
    }

    pub fn get(&self, index: usize) -> Result<&ChordSet, HypersynError> {
        self.sets
            .get(index)
            .ok_or(HypersynError::ChordSetNotFound(index))
    }

    pub fn find_by_name(&self, name: &str) -> Option<&ChordSet> {
        self.sets.iter().find(|s| s.name == name)
    }

    /// Remove and return the set at `index`.
    pub fn delete(&mut self, index: usize) -> Result<ChordSet, HypersynError> {
        if index >= self.sets.len() {
            return Err(HypersynError::ChordSetNotFound(index));
        }
        let removed = self.sets.remove(index);
        info!("Deleted chord set '{}'", removed.name);
        Ok(removed)
    }

    /// All sets as pretty-printed JSON.
    pub fn export_json(&self) -> Result<String, HypersynError> {
        Ok(serde_json::to_string_pretty(&self.sets)?)
    }

    /// Add sets from exported JSON, returning how many were new.
    ///
    /// The input must be a JSON array. Entries that aren't chord sets, or that have
    /// an empty id or an id already in the store, are skipped.
    pub fn import_json(&mut self, json: &str) -> Result<usize, HypersynError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| HypersynError::Import(e.to_string()))?;
        let serde_json::Value::Array(entries) = value else {
            return Err(HypersynError::Import("expected an array of chord sets".to_string()));
        };

        let mut added = 0;
        for entry in entries {
            let Ok(set) = serde_json::from_value::<ChordSet>(entry) else {
                continue;
            };
            if set.id.is_empty() || self.sets.iter().any(|s| s.id == set.id) {
                continue;
            }
            self.sets.push(set);
            added += 1;
        }

        info!("Imported {} new chord set(s)", added);
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_nonexistent_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ChordSetStore::load(&dir.path().join("missing.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sets.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(ChordSetStore::load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("sets.json");

        let mut store = ChordSetStore::new();
        store.save_set("ii-V-I", "Dm7 G7 Cmaj7").unwrap();
        store.save_set("Blues", "C7 F7 G7").unwrap();
        store.save(&path).unwrap();

        let loaded = ChordSetStore::load(&path).unwrap();
        assert_eq!(loaded, store);
    }

    #[test]
    fn test_save_set_creates_then_updates() {
        let mut store = ChordSetStore::new();
        assert_eq!(store.save_set("Verse", "C Am").unwrap(), SaveOutcome::Created);
        let id = store.get(0).unwrap().id.clone();

        assert_eq!(store.save_set("Verse", "C Am F G").unwrap(), SaveOutcome::Updated);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().chords, "C Am F G");
        assert_eq!(store.get(0).unwrap().id, id);
    }

    #[test]
    fn test_save_set_trims_and_rejects_empty_name() {
        let mut store = ChordSetStore::new();
        assert!(matches!(
            store.save_set("   ", "C"),
            Err(HypersynError::InvalidChordSet(_))
        ));
        store.save_set("  Chorus ", "F G").unwrap();
        assert!(store.find_by_name("Chorus").is_some());
    }

    #[test]
    fn test_ids_are_uuid_v4() {
        let mut store = ChordSetStore::new();
        store.save_set("a", "C").unwrap();
        store.save_set("b", "D").unwrap();
        let a = Uuid::parse_str(&store.get(0).unwrap().id).unwrap();
        let b = Uuid::parse_str(&store.get(1).unwrap().id).unwrap();
        assert_eq!(a.get_version_num(), 4);
        assert_ne!(a, b);
    }

    #[test]
    fn test_delete() {
        let mut store = ChordSetStore::new();
        store.save_set("a", "C").unwrap();
        store.save_set("b", "D").unwrap();

        let removed = store.delete(0).unwrap();
        assert_eq!(removed.name, "a");
        assert_eq!(store.get(0).unwrap().name, "b");
        assert!(matches!(store.delete(5), Err(HypersynError::ChordSetNotFound(5))));
    }

    #[test]
    fn test_import_only_new_ids() {
        let mut store = ChordSetStore::new();
        store.save_set("mine", "C").unwrap();
        let existing_id = store.get(0).unwrap().id.clone();

        let json = format!(
            r#"[
                {{"name": "dup", "chords": "D", "id": "{}"}},
                {{"name": "new", "chords": "E", "id": "abc"}},
                {{"name": "no id", "chords": "F", "id": ""}},
                {{"name": "missing fields"}},
                42
            ]"#,
            existing_id
        );
        assert_eq!(store.import_json(&json).unwrap(), 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().name, "new");

        // Importing again adds nothing
        assert_eq!(store.import_json(&json).unwrap(), 0);
    }

    #[test]
    fn test_import_rejects_non_array() {
        let mut store = ChordSetStore::new();
        assert!(matches!(store.import_json("{}"), Err(HypersynError::Import(_))));
        assert!(matches!(store.import_json("nope"), Err(HypersynError::Import(_))));
    }

    #[test]
    fn test_export_then_import_elsewhere() {
        let mut source = ChordSetStore::new();
        source.save_set("a", "C G").unwrap();
        source.save_set("b", "Am F").unwrap();
        let exported = source.export_json().unwrap();
        assert!(exported.contains("\n  {"));

        let mut target = ChordSetStore::new();
        assert_eq!(target.import_json(&exported).unwrap(), 2);
        assert_eq!(target, source);
    }
}

//! Personal notes, one free-text string per recipe.
//!
//! The storage itself sits behind [`NoteStore`] so the app shell can plug in
//! its own key-value preferences. Two stores ship with the crate: an
//! in-memory map and a JSON file that is rewritten on every save.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use log::{debug, info, warn};

use crate::error::NoteError;

/// Prefix of every note key
pub const NOTE_KEY_PREFIX: &str = "user_recipe_";

/// Storage key for the note attached to `recipe_id`
pub fn note_key(recipe_id: &str) -> String {
    format!("{}{}", NOTE_KEY_PREFIX, recipe_id)
}

/// Opaque string key-value store.
///
/// `get` returns an empty string for keys that were never set. `set` is a
/// full overwrite and must be durable before it returns.
pub trait NoteStore {
    fn get(&self, key: &str) -> Result<String, NoteError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), NoteError>;
}

/// Recipe-level view over a [`NoteStore`]
#[derive(Debug)]
pub struct RecipeNotes<S> {
    store: S,
}

impl<S: NoteStore> RecipeNotes<S> {
    pub fn new(store: S) -> Self {
        RecipeNotes { store }
    }

    pub fn load(&self, recipe_id: &str) -> Result<String, NoteError> {
        self.store.get(&note_key(recipe_id))
    }

    /// Replace the note for `recipe_id`; the text is stored as given
    pub fn save(&mut self, recipe_id: &str, text: &str) -> Result<(), NoteError> {
        debug!("Saving note for recipe '{}' ({} bytes)", recipe_id, text.len());
        self.store.set(&note_key(recipe_id), text)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Notes kept in process memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryNoteStore {
    entries: BTreeMap<String, String>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoteStore for MemoryNoteStore {
    fn get(&self, key: &str) -> Result<String, NoteError> {
        Ok(self.entries.get(key).cloned().unwrap_or_default())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), NoteError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Notes persisted as one JSON object in a file.
///
/// A missing file reads as an empty store. Each `set` writes a temporary
/// sibling file, syncs it and renames it over the original.
#[derive(Debug, Clone)]
pub struct JsonFileNoteStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileNoteStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, NoteError> {
        let path = path.into();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            BTreeMap::new()
        };
        info!(
            "Opened note store at {} with {} entries",
            path.display(),
            entries.len()
        );
        Ok(JsonFileNoteStore { path, entries })
    }

    fn persist(&self) -> Result<(), NoteError> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        let tmp_path = self.path.with_extension("json.tmp");
        let mut file = File::create(&tmp_path)?;
        let written = file
            .write_all(content.as_bytes())
            .and_then(|()| file.sync_all());
        drop(file);
        if let Err(e) = written.and_then(|()| fs::rename(&tmp_path, &self.path)) {
            warn!("Failed to write {}: {}", self.path.display(), e);
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }
}

impl NoteStore for JsonFileNoteStore {
    fn get(&self, key: &str) -> Result<String, NoteError> {
        Ok(self.entries.get(key).cloned().unwrap_or_default())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), NoteError> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist() {
            // Keep memory in line with what is on disk
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_key_format() {
        assert_eq!(note_key("flat_white"), "user_recipe_flat_white");
    }

    #[test]
    fn test_missing_note_is_empty() {
        let notes = RecipeNotes::new(MemoryNoteStore::new());
        assert_eq!(notes.load("latte").unwrap(), "");
    }

    #[test]
    fn test_last_write_wins() {
        let mut notes = RecipeNotes::new(MemoryNoteStore::new());
        notes.save("latte", "oat milk").unwrap();
        notes.save("latte", "  whole milk, 62°C\n").unwrap();
        assert_eq!(notes.load("latte").unwrap(), "  whole milk, 62°C\n");
        assert_eq!(
            notes.store().get("user_recipe_latte").unwrap(),
            "  whole milk, 62°C\n"
        );
    }

    #[test]
    fn test_notes_are_per_recipe() {
        let mut notes = RecipeNotes::new(MemoryNoteStore::new());
        notes.save("latte", "a").unwrap();
        notes.save("mocha", "b").unwrap();
        assert_eq!(notes.load("latte").unwrap(), "a");
        assert_eq!(notes.load("mocha").unwrap(), "b");
    }
}

//! In-memory daily note store, keyed by `YYYY-MM-DD`.

use parking_lot::RwLock;
use std::collections::BTreeMap;

#[derive(Default)]
pub struct NoteStore {
    notes: RwLock<BTreeMap<String, String>>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the note for `date` and returns the stored text.
    pub fn upsert(&self, date: &str, note: &str) -> String {
        self.notes.write().insert(date.to_string(), note.to_string());
        log::debug!("Stored daily note for {}", date);
        note.to_string()
    }

    /// Note text for `date`, or an empty string.
    pub fn get(&self, date: &str) -> String {
        self.notes.read().get(date).cloned().unwrap_or_default()
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.notes.read().clone()
    }

    pub fn len(&self) -> usize {
        self.notes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.read().is_empty()
    }
}

//! Scratch Document Store
//!
//! Scratch documents are the only editable buffers in the workspace. Each one
//! owns a linear edit history:
//!
//! - `past` holds earlier contents, oldest first, ending with the value just
//!   before the current one
//! - `future` holds undone contents, most recently undone first
//!
//! An edit pushes the pre-edit content onto `past` unless it equals the last
//! `past` entry, and clears `future`. Undo and redo move one snapshot across.

use std::collections::{HashMap, VecDeque};

use log::debug;

use super::{DocumentId, SCRATCH_PREFIX};

/// Display name of a new scratch document.
pub const SCRATCH_NAME: &str = "Untitled";
/// Virtual path shown in breadcrumbs and the run transcript.
pub const SCRATCH_PATH: &str = "scratchpad/Untitled.txt";
/// Default file name when a scratch document is exported.
pub const SCRATCH_EXPORT_NAME: &str = "Untitled.txt";

// ─────────────────────────────────────────────────────────────────────────────
// Types
// ─────────────────────────────────────────────────────────────────────────────

/// A user-created text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchDocument {
    pub id: DocumentId,
    pub name: String,
    pub path: String,
    pub content: String,
}

impl ScratchDocument {
    /// File name offered by the export dialog.
    pub fn export_name(&self) -> String {
        if self.name.contains('.') {
            self.name.clone()
        } else {
            format!("{}.txt", self.name)
        }
    }
}

/// Undo/redo snapshots for one scratch document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct EditHistory {
    past: Vec<String>,
    future: VecDeque<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Store
// ─────────────────────────────────────────────────────────────────────────────

/// Owns every live scratch document and its history.
///
/// Invariant: a history entry exists exactly for each live document.
#[derive(Debug, Clone, Default)]
pub struct ScratchStore {
    /// Documents in creation order
    documents: Vec<ScratchDocument>,
    histories: HashMap<DocumentId, EditHistory>,
    /// Maximum `past` snapshots per document (0 = unlimited)
    max_history: usize,
}

impl ScratchStore {
    /// Create an empty store with the given history cap (0 = unlimited).
    pub fn new(max_history: usize) -> Self {
        Self {
            documents: Vec::new(),
            histories: HashMap::new(),
            max_history,
        }
    }

    /// Create an empty document and return its id.
    ///
    /// The id is `temp_<now_millis>`; if that is already taken (two creations
    /// in the same millisecond) the timestamp is bumped until it is unique.
    pub fn create(&mut self, now_millis: u128) -> DocumentId {
        let mut stamp = now_millis;
        let id = loop {
            let candidate = DocumentId::new(format!("{}{}", SCRATCH_PREFIX, stamp));
            if !self.contains(&candidate) {
                break candidate;
            }
            stamp += 1;
        };

        self.documents.push(ScratchDocument {
            id: id.clone(),
            name: SCRATCH_NAME.to_string(),
            path: SCRATCH_PATH.to_string(),
            content: String::new(),
        });
        self.histories.insert(id.clone(), EditHistory::default());
        debug!("Created scratch document {}", id);
        id
    }

    /// Replace a document's content, recording history.
    ///
    /// Unknown ids are ignored.
    pub fn update(&mut self, id: &DocumentId, new_content: impl Into<String>) {
        let max_history = self.max_history;
        let Some(doc) = self.documents.iter_mut().find(|d| &d.id == id) else {
            return;
        };
        let history = self.histories.entry(id.clone()).or_default();

        if history.past.last() != Some(&doc.content) {
            history.past.push(doc.content.clone());
            if max_history > 0 && history.past.len() > max_history {
                history.past.remove(0);
            }
        }
        history.future.clear();
        doc.content = new_content.into();
    }

    /// Step back one snapshot. Returns `true` if content changed.
    pub fn undo(&mut self, id: &DocumentId) -> bool {
        let (Some(doc), Some(history)) = (
            self.documents.iter_mut().find(|d| &d.id == id),
            self.histories.get_mut(id),
        ) else {
            return false;
        };
        let Some(previous) = history.past.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut doc.content, previous);
        history.future.push_front(current);
        true
    }

    /// Step forward one snapshot. Returns `true` if content changed.
    pub fn redo(&mut self, id: &DocumentId) -> bool {
        let (Some(doc), Some(history)) = (
            self.documents.iter_mut().find(|d| &d.id == id),
            self.histories.get_mut(id),
        ) else {
            return false;
        };
        let Some(next) = history.future.pop_front() else {
            return false;
        };
        let current = std::mem::replace(&mut doc.content, next);
        history.past.push(current);
        true
    }

    /// Remove a document and its history.
    ///
    /// Callers gate this behind an explicit confirmation.
    pub fn delete(&mut self, id: &DocumentId) -> Option<ScratchDocument> {
        let index = self.documents.iter().position(|d| &d.id == id)?;
        self.histories.remove(id);
        debug!("Deleted scratch document {}", id);
        Some(self.documents.remove(index))
    }

    /// Current content, or `None` if the id is not a live document.
    pub fn read_content(&self, id: &DocumentId) -> Option<&str> {
        self.get(id).map(|d| d.content.as_str())
    }

    pub fn get(&self, id: &DocumentId) -> Option<&ScratchDocument> {
        self.documents.iter().find(|d| &d.id == id)
    }

    pub fn contains(&self, id: &DocumentId) -> bool {
        self.get(id).is_some()
    }

    /// Live documents in creation order.
    pub fn documents(&self) -> &[ScratchDocument] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn can_undo(&self, id: &DocumentId) -> bool {
        self.histories.get(id).is_some_and(|h| !h.past.is_empty())
    }

    pub fn can_redo(&self, id: &DocumentId) -> bool {
        self.histories.get(id).is_some_and(|h| !h.future.is_empty())
    }

    #[cfg(test)]
    pub fn undo_count(&self, id: &DocumentId) -> usize {
        self.histories.get(id).map_or(0, |h| h.past.len())
    }

    #[cfg(test)]
    pub fn redo_count(&self, id: &DocumentId) -> usize {
        self.histories.get(id).map_or(0, |h| h.future.len())
    }

    fn has_history(&self, id: &DocumentId) -> bool {
        self.histories.contains_key(id)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_doc() -> (ScratchStore, DocumentId) {
        let mut store = ScratchStore::new(0);
        let id = store.create(1_700_000_000_000);
        (store, id)
    }

    #[test]
    fn test_create_initial_state() {
        let (store, id) = store_with_doc();
        assert_eq!(id, "temp_1700000000000");
        assert!(id.is_scratch());

        let doc = store.get(&id).unwrap();
        assert_eq!(doc.name, "Untitled");
        assert_eq!(doc.path, "scratchpad/Untitled.txt");
        assert_eq!(doc.export_name(), "Untitled.txt");
        assert_eq!(store.read_content(&id), Some(""));
        assert!(!store.can_undo(&id));
        assert!(!store.can_redo(&id));
        assert!(store.has_history(&id));
    }

    #[test]
    fn test_create_same_millisecond_is_unique() {
        let mut store = ScratchStore::new(0);
        let a = store.create(42);
        let b = store.create(42);
        let c = store.create(43);
        assert_eq!(a, "temp_42");
        assert_eq!(b, "temp_43");
        assert_eq!(c, "temp_44");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_update_records_history() {
        let (mut store, id) = store_with_doc();
        store.update(&id, "a");
        store.update(&id, "ab");

        assert_eq!(store.read_content(&id), Some("ab"));
        assert_eq!(store.undo_count(&id), 2);
        assert_eq!(store.redo_count(&id), 0);
    }

    #[test]
    fn test_update_collapses_repeated_snapshot() {
        let (mut store, id) = store_with_doc();
        store.update(&id, "b");
        store.update(&id, "b");
        // "b" is already the last snapshot, so this edit adds nothing
        store.update(&id, "c");
        assert_eq!(store.undo_count(&id), 2);

        store.undo(&id);
        assert_eq!(store.read_content(&id), Some("b"));
        store.undo(&id);
        assert_eq!(store.read_content(&id), Some(""));
        assert!(!store.undo(&id));
    }

    #[test]
    fn test_update_clears_future() {
        let (mut store, id) = store_with_doc();
        store.update(&id, "one");
        store.update(&id, "two");
        store.undo(&id);
        assert!(store.can_redo(&id));

        store.update(&id, "three");
        assert!(!store.can_redo(&id));
        assert!(!store.redo(&id));
        assert_eq!(store.read_content(&id), Some("three"));
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let (mut store, id) = store_with_doc();
        let versions = ["h", "he", "hel", "hell", "hello"];
        for v in versions {
            store.update(&id, v);
        }

        for _ in 0..versions.len() {
            assert!(store.undo(&id));
        }
        assert_eq!(store.read_content(&id), Some(""));

        for _ in 0..versions.len() {
            assert!(store.redo(&id));
        }
        assert_eq!(store.read_content(&id), Some("hello"));
        assert_eq!(store.undo_count(&id), versions.len());
        assert_eq!(store.redo_count(&id), 0);
    }

    #[test]
    fn test_undo_order_of_future() {
        let (mut store, id) = store_with_doc();
        store.update(&id, "a");
        store.update(&id, "b");
        store.undo(&id);
        store.undo(&id);
        // Most recently undone ("a") comes back first
        store.redo(&id);
        assert_eq!(store.read_content(&id), Some("a"));
        store.redo(&id);
        assert_eq!(store.read_content(&id), Some("b"));
    }

    #[test]
    fn test_undo_with_empty_past_is_noop() {
        let (mut store, id) = store_with_doc();
        store.update(&id, "x");
        store.undo(&id);
        let redo_before = store.redo_count(&id);

        assert!(!store.undo(&id));
        assert_eq!(store.read_content(&id), Some(""));
        assert_eq!(store.redo_count(&id), redo_before);
    }

    #[test]
    fn test_redo_with_empty_future_is_noop() {
        let (mut store, id) = store_with_doc();
        store.update(&id, "x");
        assert!(!store.redo(&id));
        assert_eq!(store.read_content(&id), Some("x"));
        assert_eq!(store.undo_count(&id), 1);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut store = ScratchStore::new(0);
        let ghost = DocumentId::from("temp_1");
        store.update(&ghost, "boo");
        assert!(store.is_empty());
        assert!(!store.undo(&ghost));
        assert!(!store.redo(&ghost));
        assert!(store.read_content(&ghost).is_none());
        assert!(store.delete(&ghost).is_none());
    }

    #[test]
    fn test_delete_removes_document_and_history() {
        let (mut store, id) = store_with_doc();
        store.update(&id, "draft");
        store.update(&id, "draft 2");
        store.undo(&id);

        let removed = store.delete(&id).unwrap();
        assert_eq!(removed.content, "draft");
        assert!(store.read_content(&id).is_none());
        assert!(!store.has_history(&id));
        assert!(!store.undo(&id));
        assert!(!store.redo(&id));
    }

    #[test]
    fn test_history_cap_drops_oldest() {
        let mut store = ScratchStore::new(2);
        let id = store.create(1);
        store.update(&id, "a");
        store.update(&id, "b");
        store.update(&id, "c");
        assert_eq!(store.undo_count(&id), 2);

        store.undo(&id);
        store.undo(&id);
        assert_eq!(store.read_content(&id), Some("a"));
        assert!(!store.undo(&id));
    }

    #[test]
    fn test_documents_keep_creation_order() {
        let mut store = ScratchStore::new(0);
        let a = store.create(10);
        let b = store.create(5);
        let ids: Vec<_> = store.documents().iter().map(|d| d.id.clone()).collect();
        assert_eq!(ids, vec![a, b]);
    }
}

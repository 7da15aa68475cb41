//! Open tabs and the active document
//!
//! `Session` only tracks identifiers. Whether a close is allowed (scratch
//! documents need confirmation) is decided by `AppState` before `close` is
//! called here.

use super::DocumentId;

/// Ordered open documents plus the active one.
///
/// Invariants:
/// - `open` has no duplicates and keeps insertion order
/// - `active`, if set, is a member of `open`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    open: Vec<DocumentId>,
    active: Option<DocumentId>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a document and make it active.
    ///
    /// Already-open documents are only activated, never duplicated.
    pub fn open(&mut self, id: impl Into<DocumentId>) {
        let id = id.into();
        if !self.is_open(&id) {
            self.open.push(id.clone());
        }
        self.active = Some(id);
    }

    /// Remove a document from the tab strip.
    ///
    /// If it was active, the last remaining tab becomes active (or none).
    /// Returns `false` if the document was not open.
    pub fn close(&mut self, id: &DocumentId) -> bool {
        let Some(index) = self.open.iter().position(|open| open == id) else {
            return false;
        };
        self.open.remove(index);

        if self.active.as_ref() == Some(id) {
            self.active = self.open.last().cloned();
        }
        true
    }

    /// Activate an already-open document. Returns `false` (no change) otherwise.
    pub fn set_active(&mut self, id: &DocumentId) -> bool {
        if self.is_open(id) {
            self.active = Some(id.clone());
            true
        } else {
            false
        }
    }

    pub fn is_open(&self, id: &DocumentId) -> bool {
        self.open.iter().any(|open| open == id)
    }

    pub fn is_active(&self, id: &DocumentId) -> bool {
        self.active.as_ref() == Some(id)
    }

    pub fn active(&self) -> Option<&DocumentId> {
        self.active.as_ref()
    }

    /// Open documents in tab order.
    pub fn open_documents(&self) -> &[DocumentId] {
        &self.open
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(session: &Session) -> Vec<&str> {
        session.open_documents().iter().map(|d| d.as_str()).collect()
    }

    #[test]
    fn test_open_appends_and_activates() {
        let mut session = Session::new();
        session.open("home");
        session.open("about");
        assert_eq!(ids(&session), vec!["home", "about"]);
        assert_eq!(session.active().map(|a| a.as_str()), Some("about"));
    }

    #[test]
    fn test_reopen_does_not_duplicate() {
        let mut session = Session::new();
        session.open("home");
        session.open("about");
        session.open("home");
        assert_eq!(ids(&session), vec!["home", "about"]);
        assert_eq!(session.active().map(|a| a.as_str()), Some("home"));
    }

    #[test]
    fn test_close_active_falls_back_to_last() {
        let mut session = Session::new();
        session.open("home");
        session.open("about");
        session.open("projects");

        assert!(session.close(&DocumentId::from("projects")));
        assert_eq!(ids(&session), vec!["home", "about"]);
        assert_eq!(session.active().map(|a| a.as_str()), Some("about"));
    }

    #[test]
    fn test_close_inactive_keeps_active() {
        let mut session = Session::new();
        session.open("home");
        session.open("about");
        session.open("projects");
        session.set_active(&DocumentId::from("home"));

        session.close(&DocumentId::from("about"));
        assert_eq!(ids(&session), vec!["home", "projects"]);
        assert!(session.is_active(&DocumentId::from("home")));
    }

    #[test]
    fn test_close_last_tab_clears_active() {
        let mut session = Session::new();
        session.open("home");
        session.close(&DocumentId::from("home"));
        assert!(session.is_empty());
        assert!(session.active().is_none());
    }

    #[test]
    fn test_close_unknown_is_noop() {
        let mut session = Session::new();
        session.open("home");
        assert!(!session.close(&DocumentId::from("ghost")));
        assert_eq!(ids(&session), vec!["home"]);
    }

    #[test]
    fn test_set_active_requires_open() {
        let mut session = Session::new();
        session.open("home");
        session.open("about");

        assert!(!session.set_active(&DocumentId::from("skills")));
        assert!(session.is_active(&DocumentId::from("about")));
        assert!(!session.is_open(&DocumentId::from("skills")));

        assert!(session.set_active(&DocumentId::from("home")));
        assert!(session.is_active(&DocumentId::from("home")));
    }
}

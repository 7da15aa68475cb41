//! Workspace session model
//!
//! The in-memory state behind the editor chrome:
//! - [`scratch`]: user-created text buffers with undo/redo history
//! - [`tabs`]: which documents are open and which one is active
//! - [`layout`]: panel widths, open/closed flags and the resize gesture
//!
//! None of this is persisted. Each sub-state is owned by `AppState` and
//! mutated from the UI thread only.

pub mod layout;
pub mod scratch;
pub mod tabs;

pub use layout::{DragTarget, ExpandedFolders, Layout};
pub use scratch::{ScratchDocument, ScratchStore};
pub use tabs::Session;

use std::fmt;

/// Prefix that marks a scratch document identifier.
pub const SCRATCH_PREFIX: &str = "temp_";

// ─────────────────────────────────────────────────────────────────────────────
// Document Identifier
// ─────────────────────────────────────────────────────────────────────────────

/// Opaque identifier of anything that can sit in a tab.
///
/// Catalog files use fixed names (`home`, `about`), blog posts use `blogN`,
/// and scratch documents use `temp_<creation millis>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id names a scratch document.
    pub fn is_scratch(&self) -> bool {
        self.0.starts_with(SCRATCH_PREFIX)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for DocumentId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DocumentId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratch_prefix_detection() {
        assert!(DocumentId::from("temp_1700000000000").is_scratch());
        assert!(!DocumentId::from("home").is_scratch());
        assert!(!DocumentId::from("blog1").is_scratch());
        assert!(!DocumentId::from("my_temp_file").is_scratch());
    }

    #[test]
    fn test_document_id_compares_with_str() {
        let id = DocumentId::new("about");
        assert_eq!(id, "about");
        assert_eq!(id.to_string(), "about");
        assert_eq!(id.as_str(), "about");
    }
}

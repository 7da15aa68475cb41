//! UI components for Devfolio
//!
//! Each component draws itself from borrowed state and reports what the user
//! asked for as [`UiAction`]s; `app.rs` applies them after the frame's
//! panels are laid out.

mod activity_bar;
mod chat_panel;
mod dialogs;
mod editor;
mod menu_bar;
mod quick_switcher;
mod sidebar;
mod status_bar;
mod terminal;
mod views;

pub use activity_bar::ActivityBar;
pub use chat_panel::show_chat_panel;
pub use dialogs::{show_about_dialog, show_confirm_dialog, show_error_modal, ConfirmChoice};
pub use editor::show_editor;
pub use menu_bar::show_menu_bar;
pub use quick_switcher::{QuickOpenEntry, QuickSwitcher};
pub use sidebar::show_sidebar;
pub use status_bar::{show_status_bar, StatusInfo};
pub use terminal::show_terminal;
pub use views::{show_minimized, show_terminated, ViewCache};

use eframe::egui;

use crate::catalog::{Catalog, EntryKind};
use crate::session::{DocumentId, DragTarget, ScratchStore};
use crate::state::{CloseOrigin, SidebarView};

/// Width of the invisible strip that starts a panel drag.
pub const DRAG_HANDLE_WIDTH: f32 = 4.0;

/// Something the user asked for during this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    // Documents
    OpenDocument(DocumentId),
    /// Tab click: switch to an already open document
    ActivateDocument(DocumentId),
    CloseDocument(DocumentId, CloseOrigin),
    NewScratch,
    CloseActive,
    SaveScratchAs(DocumentId),
    RunActiveScratch,

    // Edit
    Undo,
    Redo,
    CopyFileContent,
    PasteToEnd,

    // File
    SaveShortcut,
    ShareLink,

    // Layout
    SelectSidebarView(SidebarView),
    ToggleFolder(String),
    ToggleSidebar,
    ToggleSidePreview,
    ShowPreview,
    ToggleChat,
    ToggleChatMaximized,
    BeginDrag(DragTarget),
    QuickOpen,

    // Appearance
    ToggleTheme,
    ZoomIn,
    ZoomOut,
    ResetZoom,

    // Terminal
    PlayTranscript {
        lines: Vec<String>,
        link: Option<String>,
    },
    KillTerminal,
    OpenUrl(String),

    // Window & session
    TerminateSession,
    Minimize,
    ToggleFullscreen,
    ReestablishSession,
    ShowAbout,
}

/// Lay out an invisible vertical strip at `x` that starts `target`'s drag.
pub(crate) fn drag_handle(
    ui: &egui::Ui,
    id: &str,
    x: f32,
    target: DragTarget,
    accent: egui::Color32,
    actions: &mut Vec<UiAction>,
) {
    let panel = ui.max_rect();
    let rect = egui::Rect::from_min_max(
        egui::pos2(x - DRAG_HANDLE_WIDTH / 2.0, panel.top()),
        egui::pos2(x + DRAG_HANDLE_WIDTH / 2.0, panel.bottom()),
    );
    let response = ui.interact(rect, ui.id().with(id), egui::Sense::drag());
    if response.hovered() || response.dragged() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
        ui.painter().rect_filled(rect, 0.0, accent);
    }
    if response.drag_started() {
        actions.push(UiAction::BeginDrag(target));
    }
}

/// Tab and list caption of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DocumentLabel {
    pub name: String,
    pub kind: EntryKind,
}

/// Resolve the caption for any openable id; unknown ids read "Unknown".
pub(crate) fn document_label(
    catalog: &Catalog,
    scratch: &ScratchStore,
    id: &DocumentId,
) -> DocumentLabel {
    if let Some(item) = catalog.lookup(id.as_str()) {
        return DocumentLabel {
            name: item.name().to_string(),
            kind: item.kind(),
        };
    }
    match scratch.get(id) {
        Some(doc) => DocumentLabel {
            name: doc.name.clone(),
            kind: EntryKind::Text,
        },
        None => DocumentLabel {
            name: "Unknown".to_string(),
            kind: EntryKind::Text,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_label_resolves_every_source() {
        let catalog = Catalog::new();
        let mut scratch = ScratchStore::new(10);
        let temp = scratch.create(1_700_000_000_000);

        let about = document_label(&catalog, &scratch, &"about".into());
        assert_eq!(about.name, "about_me.py");
        assert_eq!(about.kind, EntryKind::Python);

        let blog = document_label(&catalog, &scratch, &"blog1".into());
        assert_eq!(blog.name, "Understanding Transformers");

        let view = document_label(&catalog, &scratch, &"extensions_view".into());
        assert_eq!(view.name, "Extensions");

        let doc = document_label(&catalog, &scratch, &temp);
        assert_eq!(doc.kind, EntryKind::Text);
        assert!(doc.name.starts_with("Untitled"));

        let missing = document_label(&catalog, &scratch, &"nope".into());
        assert_eq!(missing.name, "Unknown");
    }
}

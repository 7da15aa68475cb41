//! Sidebar panel
//!
//! Shows one of three views picked from the activity bar:
//! the explorer (open editors plus the portfolio tree), blog search, and the
//! installed "extensions". Rows are flattened into [`TreeRow`]s first and then
//! painted, so the tree shape can be checked without a UI.

use eframe::egui::{self, RichText, Sense, Ui, Vec2};

use super::{document_label, UiAction};
use crate::catalog::{Catalog, Folder, EXTENSIONS_VIEW_ID, ROOT_FOLDER_ID};
use crate::session::{DocumentId, ExpandedFolders, ScratchStore};
use crate::state::{AppState, CloseOrigin, SidebarView, SCRATCHPAD_FOLDER_ID};
use crate::theme::ThemeColors;

/// Indentation per tree level.
const INDENT_PER_LEVEL: f32 = 12.0;

/// Height of each tree item row.
const ROW_HEIGHT: f32 = 22.0;

// ─────────────────────────────────────────────────────────────────────────────
// Tree Rows
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RowKind {
    Folder { id: String, expanded: bool },
    File { id: DocumentId },
}

/// One painted line of the explorer tree.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TreeRow {
    pub depth: usize,
    pub name: String,
    pub icon: &'static str,
    pub kind: RowKind,
}

/// Flatten the visible part of the portfolio tree.
///
/// The scratchpad folder only exists while there are scratch documents; it
/// sits first inside the root folder, ahead of the regular sub-folders.
pub(crate) fn tree_rows(
    catalog: &Catalog,
    scratch: &ScratchStore,
    folders: &ExpandedFolders,
) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    push_folder(catalog.root(), 0, scratch, folders, &mut rows);
    rows
}

fn push_folder(
    folder: &Folder,
    depth: usize,
    scratch: &ScratchStore,
    folders: &ExpandedFolders,
    rows: &mut Vec<TreeRow>,
) {
    let expanded = folders.is_expanded(folder.id);
    rows.push(TreeRow {
        depth,
        name: folder.name.to_uppercase(),
        icon: "",
        kind: RowKind::Folder {
            id: folder.id.to_string(),
            expanded,
        },
    });
    if !expanded {
        return;
    }

    if folder.id == ROOT_FOLDER_ID && !scratch.is_empty() {
        let scratch_expanded = folders.is_expanded(SCRATCHPAD_FOLDER_ID);
        rows.push(TreeRow {
            depth: depth + 1,
            name: SCRATCHPAD_FOLDER_ID.to_uppercase(),
            icon: "",
            kind: RowKind::Folder {
                id: SCRATCHPAD_FOLDER_ID.to_string(),
                expanded: scratch_expanded,
            },
        });
        if scratch_expanded {
            rows.extend(scratch.documents().iter().map(|doc| TreeRow {
                depth: depth + 2,
                name: doc.name.clone(),
                icon: "📝",
                kind: RowKind::File { id: doc.id.clone() },
            }));
        }
    }

    for sub in &folder.folders {
        push_folder(sub, depth + 1, scratch, folders, rows);
    }
    rows.extend(folder.files.iter().map(|entry| TreeRow {
        depth: depth + 1,
        name: entry.name.to_string(),
        icon: entry.kind.icon(),
        kind: RowKind::File {
            id: DocumentId::from(entry.id),
        },
    }));
}

// ─────────────────────────────────────────────────────────────────────────────
// Panel
// ─────────────────────────────────────────────────────────────────────────────

/// Render the sidebar contents for the selected view.
pub fn show_sidebar(
    ui: &mut Ui,
    state: &mut AppState,
    colors: &ThemeColors,
    actions: &mut Vec<UiAction>,
) {
    match state.ui.sidebar_view {
        SidebarView::Explorer => show_explorer(ui, state, colors, actions),
        SidebarView::Search => show_search(ui, state, colors, actions),
        SidebarView::Extensions => show_installed(ui, state, colors, actions),
    }
}

fn header(ui: &mut Ui, title: &str, colors: &ThemeColors) -> egui::Response {
    ui.add_space(8.0);
    let response = ui
        .horizontal(|ui| {
            ui.add_space(12.0);
            ui.label(
                RichText::new(title)
                    .size(11.0)
                    .strong()
                    .color(colors.text.secondary),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(8.0);
                ui.add(egui::Button::new(RichText::new("⟳").size(12.0)).frame(false))
            })
            .inner
        })
        .inner;
    ui.add_space(4.0);
    response
}

fn section_label(ui: &mut Ui, title: &str, colors: &ThemeColors) {
    ui.horizontal(|ui| {
        ui.add_space(12.0);
        ui.label(
            RichText::new(title)
                .size(11.0)
                .strong()
                .color(colors.text.secondary),
        );
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Explorer
// ─────────────────────────────────────────────────────────────────────────────

fn show_explorer(
    ui: &mut Ui,
    state: &mut AppState,
    colors: &ThemeColors,
    actions: &mut Vec<UiAction>,
) {
    header(ui, "EXPLORER", colors);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if !state.session.is_empty() {
                section_label(ui, "▼ OPEN EDITORS", colors);
                for id in state.session.open_documents() {
                    let label = document_label(&state.catalog, &state.scratch, id);
                    let row = TreeRow {
                        depth: 1,
                        name: label.name,
                        icon: label.kind.icon(),
                        kind: RowKind::File { id: id.clone() },
                    };
                    render_row(ui, &row, state.session.is_active(id), colors, actions);
                }
                ui.add_space(8.0);
            }

            for row in tree_rows(&state.catalog, &state.scratch, &state.folders) {
                let active = match &row.kind {
                    RowKind::File { id } => state.session.is_active(id),
                    RowKind::Folder { .. } => false,
                };
                render_row(ui, &row, active, colors, actions);
            }
        });
}

/// Paint a tree row and report clicks.
fn render_row(
    ui: &mut Ui,
    row: &TreeRow,
    active: bool,
    colors: &ThemeColors,
    actions: &mut Vec<UiAction>,
) {
    let indent = row.depth as f32 * INDENT_PER_LEVEL + 8.0;
    let (row_rect, row_response) =
        ui.allocate_exact_size(Vec2::new(ui.available_width(), ROW_HEIGHT), Sense::click());

    if active {
        ui.painter().rect_filled(row_rect, 0.0, colors.base.selection);
    } else if row_response.hovered() {
        ui.painter().rect_filled(row_rect, 0.0, colors.base.tab);
    }
    if row_response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    let text_color = if active || row_response.hovered() {
        colors.text.primary
    } else {
        colors.text.secondary
    };
    let mut pos = row_rect.left_center() + Vec2::new(indent, 0.0);

    match &row.kind {
        RowKind::Folder { id, expanded } => {
            let arrow = if *expanded { "▼" } else { "▶" };
            ui.painter().text(
                pos,
                egui::Align2::LEFT_CENTER,
                arrow,
                egui::FontId::proportional(9.0),
                colors.text.primary,
            );
            pos.x += 14.0;
            ui.painter().text(
                pos,
                egui::Align2::LEFT_CENTER,
                &row.name,
                egui::FontId::proportional(11.0),
                colors.text.primary,
            );
            if row_response.clicked() {
                actions.push(UiAction::ToggleFolder(id.clone()));
            }
        }
        RowKind::File { id } => {
            ui.painter().text(
                pos,
                egui::Align2::LEFT_CENTER,
                row.icon,
                egui::FontId::proportional(11.0),
                colors.ui.accent,
            );
            pos.x += 18.0;
            ui.painter().text(
                pos,
                egui::Align2::LEFT_CENTER,
                &row.name,
                egui::FontId::proportional(13.0),
                text_color,
            );
            if row_response.clicked() {
                actions.push(UiAction::OpenDocument(id.clone()));
            }
            if id.is_scratch() {
                row_response.context_menu(|ui| {
                    render_scratch_menu(ui, id, actions);
                });
            }
        }
    }
}

/// Context menu offered on scratch documents only.
fn render_scratch_menu(ui: &mut Ui, id: &DocumentId, actions: &mut Vec<UiAction>) {
    if ui.button("Save As...").clicked() {
        actions.push(UiAction::SaveScratchAs(id.clone()));
        ui.close_menu();
    }
    ui.separator();
    if ui.button("Close File").clicked() {
        actions.push(UiAction::CloseDocument(id.clone(), CloseOrigin::Explorer));
        ui.close_menu();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Search
// ─────────────────────────────────────────────────────────────────────────────

fn show_search(
    ui: &mut Ui,
    state: &mut AppState,
    colors: &ThemeColors,
    actions: &mut Vec<UiAction>,
) {
    if header(ui, "SEARCH", colors)
        .on_hover_text("Clear search")
        .clicked()
    {
        state.ui.blog_query.clear();
    }

    ui.horizontal(|ui| {
        ui.add_space(12.0);
        ui.add(
            egui::TextEdit::singleline(&mut state.ui.blog_query)
                .hint_text("Search blogs...")
                .desired_width(ui.available_width() - 12.0),
        );
    });
    ui.add_space(8.0);
    section_label(ui, "RESULTS", colors);
    ui.add_space(4.0);

    let results = state.catalog.search_blogs(&state.ui.blog_query);
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if results.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(12.0);
                    ui.label(
                        RichText::new("No results found.")
                            .italics()
                            .size(11.0)
                            .color(colors.text.secondary),
                    );
                });
                return;
            }
            for post in results {
                let response = ui
                    .horizontal(|ui| {
                        ui.add_space(12.0);
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("📄 {}", post.title))
                                    .strong()
                                    .color(colors.text.primary),
                            );
                            ui.add(
                                egui::Label::new(
                                    RichText::new(post.summary)
                                        .size(10.0)
                                        .color(colors.text.secondary),
                                )
                                .wrap(),
                            );
                        });
                    })
                    .response
                    .interact(Sense::click());
                if response.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                if response.clicked() {
                    actions.push(UiAction::OpenDocument(post.id.into()));
                }
                ui.add_space(6.0);
            }
        });
}

// ─────────────────────────────────────────────────────────────────────────────
// Installed Extensions
// ─────────────────────────────────────────────────────────────────────────────

fn show_installed(
    ui: &mut Ui,
    state: &mut AppState,
    colors: &ThemeColors,
    actions: &mut Vec<UiAction>,
) {
    header(ui, "EXTENSIONS", colors);

    ui.horizontal(|ui| {
        ui.add_space(8.0);
        ui.add(
            egui::TextEdit::singleline(&mut state.ui.extension_query)
                .hint_text("Search Extensions")
                .desired_width(ui.available_width() - 8.0),
        );
    });
    ui.add_space(8.0);

    egui::Frame::none()
        .fill(colors.base.activity)
        .inner_margin(egui::Margin::symmetric(12.0, 4.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("INSTALLED").size(11.0).strong());
        });

    let connectors = ui
        .horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("🧩").size(22.0).color(colors.ui.accent));
            ui.vertical(|ui| {
                ui.label(RichText::new("Social Connectors").strong());
                ui.label(
                    RichText::new("Suman Mandal")
                        .size(10.0)
                        .color(colors.text.secondary),
                );
            });
        })
        .response
        .interact(Sense::click());
    if connectors.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    if connectors.clicked() {
        actions.push(UiAction::OpenDocument(EXTENSIONS_VIEW_ID.into()));
    }

    ui.add_enabled_ui(false, |ui| {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Py").strong().color(colors.ui.info));
            ui.vertical(|ui| {
                ui.label(RichText::new("Python").strong());
                ui.label(RichText::new("Microsoft").size(10.0));
            });
        });
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn names(rows: &[TreeRow]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_tree_rows_default_expansion() {
        let catalog = Catalog::new();
        let scratch = ScratchStore::new(10);
        let rows = tree_rows(&catalog, &scratch, &ExpandedFolders::default());
        assert_eq!(
            names(&rows),
            vec![
                "SUMAN-MANDAL",
                "SRC",
                "about_me.py",
                "experience.tsx",
                "contact.tsx",
                "MODELS",
                "projects.json",
                "CONFIG",
                "skills.yaml",
                "README.md",
            ]
        );
        assert_eq!(rows[0].depth, 0);
        assert_eq!(rows[2].depth, 2);
        assert_eq!(rows.last().map(|r| r.depth), Some(1));
    }

    #[test]
    fn test_tree_rows_collapsed_root() {
        let catalog = Catalog::new();
        let scratch = ScratchStore::new(10);
        let mut folders = ExpandedFolders::default();
        folders.toggle(ROOT_FOLDER_ID);
        let rows = tree_rows(&catalog, &scratch, &folders);
        assert_eq!(rows.len(), 1);
        assert!(matches!(
            rows[0].kind,
            RowKind::Folder {
                expanded: false,
                ..
            }
        ));
    }

    #[test]
    fn test_scratchpad_folder_only_with_documents() {
        let catalog = Catalog::new();
        let mut scratch = ScratchStore::new(10);
        let mut folders = ExpandedFolders::default();
        let without = tree_rows(&catalog, &scratch, &folders);
        assert!(!names(&without).contains(&"SCRATCHPAD"));

        let id = scratch.create(1_000);
        folders.expand(SCRATCHPAD_FOLDER_ID);
        let rows = tree_rows(&catalog, &scratch, &folders);
        assert_eq!(rows[1].name, "SCRATCHPAD");
        assert_eq!(rows[1].depth, 1);
        assert_eq!(rows[2].depth, 2);
        assert_eq!(rows[2].kind, RowKind::File { id });
    }

    #[test]
    fn test_collapsed_scratchpad_hides_documents() {
        let catalog = Catalog::new();
        let mut scratch = ScratchStore::new(10);
        scratch.create(1_000);
        let rows = tree_rows(&catalog, &scratch, &ExpandedFolders::default());
        assert_eq!(rows[1].name, "SCRATCHPAD");
        assert_eq!(rows[2].name, "SRC");
    }
}

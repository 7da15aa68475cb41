//! Title bar: session controls, the application menus and the chat toggle.

use eframe::egui::{self, Color32, Response, RichText, Sense, Ui, Vec2};

use super::{document_label, UiAction};
use crate::catalog::EXTENSIONS_VIEW_ID;
use crate::session::DocumentId;
use crate::state::{AppState, SidebarView};
use crate::theme::ThemeColors;
use crate::transcript::scripts;

const WINDOW_TITLE: &str = "Suman Mandal - IDE Portfolio";

const CLOSE_COLOR: Color32 = Color32::from_rgb(255, 95, 86);
const MINIMIZE_COLOR: Color32 = Color32::from_rgb(255, 189, 46);
const MAXIMIZE_COLOR: Color32 = Color32::from_rgb(39, 201, 63);

/// Render the title bar into its top panel.
pub fn show_menu_bar(
    ui: &mut Ui,
    state: &AppState,
    colors: &ThemeColors,
    actions: &mut Vec<UiAction>,
) {
    ui.horizontal(|ui| {
        ui.add_space(8.0);
        ui.spacing_mut().item_spacing.x = 6.0;

        if traffic_light(ui, CLOSE_COLOR, "×", "Close Session").clicked() {
            actions.push(UiAction::TerminateSession);
        }
        if traffic_light(ui, MINIMIZE_COLOR, "−", "Minimize").clicked() {
            actions.push(UiAction::Minimize);
        }
        let full = if state.ui.fullscreen {
            "Exit Full Screen"
        } else {
            "Full Screen"
        };
        if traffic_light(ui, MAXIMIZE_COLOR, "+", full).clicked() {
            actions.push(UiAction::ToggleFullscreen);
        }
        ui.add_space(10.0);

        if !state.ui.workspace_hidden && !state.ui.session_terminated {
            egui::menu::bar(ui, |ui| {
                file_menu(ui, state, actions);
                edit_menu(ui, state, actions);
                view_menu(ui, state, actions);
                run_menu(ui, state, actions);
                terminal_menu(ui, state, actions);
                help_menu(ui, actions);
            });
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(8.0);
            if !state.ui.session_terminated {
                let chat_color = if state.layout.chat_open {
                    colors.ui.accent
                } else {
                    colors.text.secondary
                };
                let chat = ui
                    .add(egui::Button::new(RichText::new("💬").color(chat_color)).frame(false))
                    .on_hover_text("Toggle Chat");
                if chat.clicked() {
                    actions.push(UiAction::ToggleChat);
                }
            }
            let remaining = ui.available_width();
            ui.allocate_ui_with_layout(
                Vec2::new(remaining, ui.available_height()),
                egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                |ui| {
                    ui.label(
                        RichText::new(WINDOW_TITLE)
                            .size(12.0)
                            .color(colors.text.secondary),
                    );
                },
            );
        });
    });
}

fn traffic_light(ui: &mut Ui, color: Color32, symbol: &str, tooltip: &str) -> Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(14.0), Sense::click());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), 6.0, color);
    if response.hovered() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            symbol,
            egui::FontId::proportional(10.0),
            Color32::from_black_alpha(160),
        );
    }
    response.on_hover_text(tooltip)
}

/// Menu entry with a shortcut hint; closes the menu when clicked.
fn item(ui: &mut Ui, label: &str, shortcut: &str, enabled: bool) -> bool {
    let button = egui::Button::new(label).shortcut_text(shortcut);
    let clicked = ui.add_enabled(enabled, button).clicked();
    if clicked {
        ui.close_menu();
    }
    clicked
}

fn file_menu(ui: &mut Ui, state: &AppState, actions: &mut Vec<UiAction>) {
    ui.menu_button("File", |ui| {
        if item(ui, "New Text File", "Ctrl+N", true) {
            actions.push(UiAction::NewScratch);
        }
        ui.menu_button("Open File...", |ui| {
            let ids = state
                .catalog
                .list_all()
                .into_iter()
                .map(|entry| DocumentId::from(entry.id))
                .chain(state.scratch.documents().iter().map(|doc| doc.id.clone()));
            for id in ids {
                let label = document_label(&state.catalog, &state.scratch, &id);
                let text = format!("{}  {}", label.kind.icon(), label.name);
                if item(ui, &text, label.kind.label(), true) {
                    actions.push(UiAction::OpenDocument(id));
                }
            }
        });
        if item(ui, "Open Blogs", "", true) {
            actions.push(UiAction::SelectSidebarView(SidebarView::Search));
        }
        if item(ui, "Open Extensions", "", true) {
            actions.push(UiAction::OpenDocument(EXTENSIONS_VIEW_ID.into()));
        }
        ui.separator();
        if item(ui, "Save As Shortcut", "", true) {
            actions.push(UiAction::SaveShortcut);
        }
        if item(ui, "Share Link", "", true) {
            actions.push(UiAction::ShareLink);
        }
        ui.separator();
        let has_active = state.session.active().is_some();
        if item(ui, "Close Editor", "Ctrl+W", has_active) {
            actions.push(UiAction::CloseActive);
        }
        if item(ui, "Exit", "", true) {
            actions.push(UiAction::TerminateSession);
        }
    });
}

fn edit_menu(ui: &mut Ui, state: &AppState, actions: &mut Vec<UiAction>) {
    let scratch = state.active_scratch();
    let can_undo = scratch.is_some_and(|id| state.scratch.can_undo(id));
    let can_redo = scratch.is_some_and(|id| state.scratch.can_redo(id));
    let editable = scratch.is_some();

    ui.menu_button("Edit", |ui| {
        if item(ui, "Undo", "Ctrl+Z", can_undo) {
            actions.push(UiAction::Undo);
        }
        if item(ui, "Redo", "Ctrl+Y", can_redo) {
            actions.push(UiAction::Redo);
        }
        ui.separator();
        if item(ui, "Copy File Content", "", editable) {
            actions.push(UiAction::CopyFileContent);
        }
        if item(ui, "Paste to End", "", editable) {
            actions.push(UiAction::PasteToEnd);
        }
    });
}

fn view_menu(ui: &mut Ui, state: &AppState, actions: &mut Vec<UiAction>) {
    ui.menu_button("View", |ui| {
        for (view, label, shortcut) in [
            (SidebarView::Explorer, "Explorer", "Ctrl+B"),
            (SidebarView::Search, "Search", ""),
            (SidebarView::Extensions, "Extensions", ""),
        ] {
            if item(ui, label, shortcut, true) {
                actions.push(UiAction::SelectSidebarView(view));
            }
        }
        ui.separator();
        let preview = if state.layout.preview_open {
            "ON"
        } else {
            "OFF"
        };
        if item(ui, "Toggle Side Preview", preview, true) {
            actions.push(UiAction::ToggleSidePreview);
        }
        if item(ui, "Toggle Chat", "", true) {
            actions.push(UiAction::ToggleChat);
        }
    });
}

fn run_menu(ui: &mut Ui, state: &AppState, actions: &mut Vec<UiAction>) {
    ui.menu_button("Run", |ui| {
        ui.add_enabled(false, egui::Button::new("Start Debugging"));
        if item(
            ui,
            "Run Without Debugging",
            "Ctrl+F5",
            state.active_scratch().is_some(),
        ) {
            actions.push(UiAction::RunActiveScratch);
        }
        ui.separator();
        ui.add_enabled(false, egui::Button::new("Add Configuration..."));
    });
}

fn terminal_menu(ui: &mut Ui, state: &AppState, actions: &mut Vec<UiAction>) {
    ui.menu_button("Terminal", |ui| {
        if item(ui, "New Terminal", "", true) {
            actions.push(UiAction::PlayTranscript {
                lines: scripts::new_terminal(),
                link: None,
            });
        }
        if item(ui, "Kill Terminal", "", state.transcript.is_open()) {
            actions.push(UiAction::KillTerminal);
        }
    });
}

fn help_menu(ui: &mut Ui, actions: &mut Vec<UiAction>) {
    ui.menu_button("Help", |ui| {
        if item(ui, "Quick Open", "Ctrl+P", true) {
            actions.push(UiAction::QuickOpen);
        }
        if item(ui, "About", "", true) {
            actions.push(UiAction::ShowAbout);
        }
    });
}

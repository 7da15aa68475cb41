//! Modal dialogs: confirmation, error and Help > About.

use eframe::egui::{self, Color32, RichText, Ui};

use crate::theme::ThemeColors;

/// Choice made in the confirmation dialog this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Confirm,
    Cancel,
}

/// Dim everything behind a modal.
fn overlay(ctx: &egui::Context, id: &str, is_dark: bool) -> bool {
    let screen_rect = ctx.screen_rect();
    let overlay_color = if is_dark {
        Color32::from_rgba_unmultiplied(0, 0, 0, 180)
    } else {
        Color32::from_rgba_unmultiplied(0, 0, 0, 120)
    };

    egui::Area::new(egui::Id::new(id))
        .order(egui::Order::Middle)
        .fixed_pos(screen_rect.min)
        .show(ctx, |ui| {
            let response = ui.allocate_response(screen_rect.size(), egui::Sense::click());
            ui.painter().rect_filled(screen_rect, 0.0, overlay_color);
            response.clicked()
        })
        .inner
}

fn modal_frame(ctx: &egui::Context, colors: &ThemeColors) -> egui::Frame {
    egui::Frame::window(&ctx.style())
        .fill(colors.base.sidebar)
        .stroke(egui::Stroke::new(1.0, colors.base.border))
        .rounding(8.0)
}

/// Show the confirmation dialog; `None` while the user has not decided.
pub fn show_confirm_dialog(
    ctx: &egui::Context,
    message: &str,
    colors: &ThemeColors,
) -> Option<ConfirmChoice> {
    let mut choice = None;
    overlay(ctx, "confirm_overlay", colors.is_dark());

    egui::Window::new("⚠ Confirm")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .order(egui::Order::Foreground)
        .frame(modal_frame(ctx, colors))
        .show(ctx, |ui| {
            ui.set_min_width(350.0);
            ui.set_max_width(420.0);
            ui.add_space(8.0);
            ui.label(RichText::new(message).color(colors.text.primary));
            ui.add_space(12.0);
            ui.separator();

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let confirm = egui::Button::new(
                        RichText::new("Confirm").color(Color32::WHITE).strong(),
                    )
                    .fill(colors.ui.error);
                    if ui.add(confirm).clicked() {
                        choice = Some(ConfirmChoice::Confirm);
                    }
                    if ui.button("Cancel").clicked() {
                        choice = Some(ConfirmChoice::Cancel);
                    }
                });
            });

            if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                choice = Some(ConfirmChoice::Cancel);
            }
        });

    choice
}

/// Show the error modal. Returns `true` once dismissed.
pub fn show_error_modal(ctx: &egui::Context, message: &str, colors: &ThemeColors) -> bool {
    let mut dismissed = overlay(ctx, "error_overlay", colors.is_dark());

    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .order(egui::Order::Foreground)
        .frame(modal_frame(ctx, colors))
        .show(ctx, |ui| {
            ui.set_max_width(420.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("⚠").size(24.0).color(colors.ui.warning));
                ui.label(RichText::new(message).color(colors.text.primary));
            });
            ui.separator();
            if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                dismissed = true;
            }
        });

    dismissed
}

// ─────────────────────────────────────────────────────────────────────────────
// Help > About
// ─────────────────────────────────────────────────────────────────────────────

pub const ABOUT_TITLE: &str = "DevPortfolio IDE v1.2.0";
pub const ABOUT_AUTHOR: &str = "Author: Suman Mandal";
pub const ABOUT_BUILT_WITH: &str = "Built with Rust & egui";

/// Keyboard shortcut groups listed in the About dialog.
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "File",
        &[
            ("Ctrl+N", "New Text File"),
            ("Ctrl+W", "Close Editor"),
            ("Ctrl+P", "Quick Open"),
        ],
    ),
    (
        "Edit",
        &[
            ("Ctrl+Z", "Undo"),
            ("Ctrl+Y / Ctrl+Shift+Z", "Redo"),
        ],
    ),
    (
        "View",
        &[
            ("Ctrl+B", "Toggle Sidebar"),
            ("Ctrl+Shift+T", "Toggle Theme"),
            ("Ctrl+= / Ctrl+-", "Zoom In / Out"),
            ("Ctrl+0", "Reset Zoom"),
        ],
    ),
    (
        "Run",
        &[
            ("F5 / Ctrl+F5", "Run Without Debugging"),
            ("Escape", "Close Terminal"),
        ],
    ),
];

fn shortcut_table(ui: &mut Ui, colors: &ThemeColors) {
    for (category, shortcuts) in SHORTCUTS {
        ui.label(
            RichText::new(*category)
                .strong()
                .size(12.0)
                .color(colors.ui.accent),
        );
        egui::Grid::new(("about_shortcuts", *category))
            .num_columns(2)
            .spacing([24.0, 2.0])
            .show(ui, |ui| {
                for (keys, action) in *shortcuts {
                    ui.label(RichText::new(*keys).monospace().size(11.0));
                    ui.label(
                        RichText::new(*action)
                            .size(11.0)
                            .color(colors.text.secondary),
                    );
                    ui.end_row();
                }
            });
        ui.add_space(6.0);
    }
}

/// Show the About dialog. Returns `true` once it should close.
pub fn show_about_dialog(ctx: &egui::Context, colors: &ThemeColors) -> bool {
    let mut close = overlay(ctx, "about_overlay", colors.is_dark());

    egui::Window::new("About")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .order(egui::Order::Foreground)
        .frame(modal_frame(ctx, colors))
        .show(ctx, |ui| {
            ui.set_min_width(320.0);
            if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                close = true;
            }
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("</>").size(32.0).color(colors.ui.accent));
                ui.label(RichText::new(ABOUT_TITLE).size(18.0).strong());
                ui.label(RichText::new(ABOUT_AUTHOR).color(colors.text.secondary));
                ui.label(
                    RichText::new(ABOUT_BUILT_WITH)
                        .size(11.0)
                        .color(colors.text.secondary),
                );
            });
            ui.add_space(8.0);
            ui.separator();
            egui::CollapsingHeader::new("Keyboard Shortcuts")
                .default_open(false)
                .show(ui, |ui| shortcut_table(ui, colors));
            ui.separator();
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    close = true;
                }
            });
        });

    close
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_groups_are_populated() {
        assert!(SHORTCUTS.iter().all(|(_, shortcuts)| !shortcuts.is_empty()));
    }

    #[test]
    fn test_quick_open_shortcut_listed() {
        let found = SHORTCUTS
            .iter()
            .flat_map(|(_, shortcuts)| shortcuts.iter())
            .any(|(keys, action)| *keys == "Ctrl+P" && *action == "Quick Open");
        assert!(found);
    }
}

//! Status bar along the bottom edge of the window.

use eframe::egui::{self, RichText, Ui};

use super::UiAction;
use crate::config::Theme;
use crate::theme::ThemeColors;

/// What the status bar shows this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusInfo<'a> {
    /// Kind label of the active document
    pub kind_label: &'a str,
    pub zoom_level: f32,
    pub theme: Theme,
    pub toast: Option<&'a str>,
}

impl StatusInfo<'_> {
    pub fn zoom_text(&self) -> String {
        format!("{}%", (self.zoom_level * 100.0).round() as i32)
    }
}

pub fn show_status_bar(
    ui: &mut Ui,
    info: &StatusInfo<'_>,
    colors: &ThemeColors,
    actions: &mut Vec<UiAction>,
) {
    let text = |s: &str| RichText::new(s).size(11.0).color(colors.base.main);

    ui.horizontal_centered(|ui| {
        ui.spacing_mut().item_spacing.x = 14.0;
        ui.add_space(6.0);
        ui.label(text("⎇ main*"));
        ui.label(text("⚠ 0"));
        if let Some(toast) = info.toast {
            ui.label(text(toast).strong());
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(6.0);
            if ui
                .add(egui::Button::new(text(info.theme.display_name())).frame(false))
                .on_hover_text("Toggle theme (Ctrl+Shift+T)")
                .clicked()
            {
                actions.push(UiAction::ToggleTheme);
            }
            if ui
                .add(egui::Button::new(text(&info.zoom_text())).frame(false))
                .on_hover_text("Reset zoom (Ctrl+0)")
                .clicked()
            {
                actions.push(UiAction::ResetZoom);
            }
            ui.label(text(info.kind_label));
            ui.label(text("UTF-8"));
            ui.label(text("Ln 12, Col 84"));
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_text_rounds_to_percent() {
        let info = StatusInfo {
            kind_label: "PYTHON",
            zoom_level: 1.1,
            theme: Theme::Dark,
            toast: None,
        };
        assert_eq!(info.zoom_text(), "110%");
    }

    #[test]
    fn test_theme_label_follows_theme() {
        assert_eq!(Theme::Dark.display_name(), "Dark");
        assert_eq!(Theme::Light.display_name(), "Light");
        assert_eq!(Theme::Dark.toggled().display_name(), "Light");
    }
}

//! Activity bar
//!
//! The narrow icon column on the far left: sidebar view switches at the top,
//! theme, profile and zoom controls at the bottom.

use eframe::egui::{self, Response, RichText, Ui, Vec2};

use super::UiAction;
use crate::catalog::{content::PERSONAL_PROFILE_URL, ABOUT_ID};
use crate::session::layout::ACTIVITY_BAR_WIDTH;
use crate::state::SidebarView;
use crate::theme::ThemeColors;

/// Size of icon buttons.
const ICON_BUTTON_SIZE: Vec2 = Vec2::new(ACTIVITY_BAR_WIDTH, 44.0);

/// Activity bar state (which popup is open).
#[derive(Debug, Clone, Default)]
pub struct ActivityBar {
    popup: Option<Popup>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Popup {
    Profile,
    Settings,
}

impl ActivityBar {
    pub fn new() -> Self {
        Self::default()
    }

    fn toggle_popup(&mut self, popup: Popup) {
        self.popup = if self.popup == Some(popup) {
            None
        } else {
            Some(popup)
        };
    }

    /// Render the bar into the `activity_bar` side panel.
    #[allow(clippy::too_many_arguments)]
    pub fn show(
        &mut self,
        ui: &mut Ui,
        colors: &ThemeColors,
        sidebar_view: SidebarView,
        sidebar_open: bool,
        theme_icon: &str,
        is_dark: bool,
        zoom_level: f32,
        actions: &mut Vec<UiAction>,
    ) {
        ui.spacing_mut().item_spacing = Vec2::ZERO;

        ui.vertical_centered(|ui| {
            for (view, icon, tooltip) in [
                (SidebarView::Explorer, "📄", "Explorer (Ctrl+B)"),
                (SidebarView::Search, "🔍", "Search / Blogs"),
                (SidebarView::Extensions, "🧩", "Extensions / Socials"),
            ] {
                let active = sidebar_open && sidebar_view == view;
                if activity_button(ui, icon, tooltip, active, colors).clicked() {
                    actions.push(UiAction::SelectSidebarView(view));
                }
            }
        });

        ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
            ui.add_space(6.0);

            let settings = activity_button(
                ui,
                "⚙",
                "Settings",
                self.popup == Some(Popup::Settings),
                colors,
            );
            if settings.clicked() {
                self.toggle_popup(Popup::Settings);
            }

            let profile = activity_button(
                ui,
                "👤",
                "Profile",
                self.popup == Some(Popup::Profile),
                colors,
            );
            if profile.clicked() {
                self.toggle_popup(Popup::Profile);
            }

            let tooltip = if is_dark {
                "Switch to Light Mode"
            } else {
                "Switch to Dark Mode"
            };
            if activity_button(ui, theme_icon, tooltip, false, colors).clicked() {
                actions.push(UiAction::ToggleTheme);
            }

            let close = match self.popup {
                Some(Popup::Profile) => profile_popup(ui.ctx(), &profile, actions),
                Some(Popup::Settings) => {
                    settings_popup(ui.ctx(), &settings, zoom_level, is_dark, actions)
                }
                None => false,
            };
            if close {
                self.popup = None;
            }
        });
    }
}

/// Returns `true` when the popup should close.
fn profile_popup(ctx: &egui::Context, anchor: &Response, actions: &mut Vec<UiAction>) -> bool {
    let mut close = false;
    let area = egui::Area::new(egui::Id::new("profile_popup"))
        .order(egui::Order::Foreground)
        .fixed_pos(anchor.rect.right_top() + Vec2::new(4.0, 0.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(160.0);
                if ui.button("Coder Profile").clicked() {
                    actions.push(UiAction::OpenDocument(ABOUT_ID.into()));
                    close = true;
                }
                if ui.button("Personal Profile").clicked() {
                    actions.push(UiAction::OpenUrl(PERSONAL_PROFILE_URL.to_string()));
                    close = true;
                }
            });
        });
    close || clicked_elsewhere(ctx, &area.response, anchor)
}

fn settings_popup(
    ctx: &egui::Context,
    anchor: &Response,
    zoom_level: f32,
    is_dark: bool,
    actions: &mut Vec<UiAction>,
) -> bool {
    let mut close = false;
    let area = egui::Area::new(egui::Id::new("settings_popup"))
        .order(egui::Order::Foreground)
        .fixed_pos(anchor.rect.right_top() + Vec2::new(4.0, -80.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(180.0);
                ui.label(
                    RichText::new(format!(
                        "Window Zoom ({}%)",
                        (zoom_level * 100.0).round() as i32
                    ))
                    .small()
                    .weak(),
                );
                if ui.button("Zoom In          Ctrl +").clicked() {
                    actions.push(UiAction::ZoomIn);
                }
                if ui.button("Zoom Out         Ctrl -").clicked() {
                    actions.push(UiAction::ZoomOut);
                }
                if ui.button("Reset Zoom").clicked() {
                    actions.push(UiAction::ResetZoom);
                }
                ui.separator();
                let theme = if is_dark { "Dark" } else { "Light" };
                if ui.button(format!("Color Theme: {}", theme)).clicked() {
                    actions.push(UiAction::ToggleTheme);
                    close = true;
                }
            });
        });
    close || clicked_elsewhere(ctx, &area.response, anchor)
}

fn clicked_elsewhere(ctx: &egui::Context, popup: &Response, anchor: &Response) -> bool {
    if anchor.clicked() {
        return false;
    }
    ctx.input(|i| i.pointer.any_click())
        && ctx
            .pointer_interact_pos()
            .is_some_and(|pos| !popup.rect.contains(pos))
}

/// Full-width icon button with an accent marker when active.
fn activity_button(
    ui: &mut Ui,
    icon: &str,
    tooltip: &str,
    active: bool,
    colors: &ThemeColors,
) -> Response {
    let (rect, response) = ui.allocate_exact_size(ICON_BUTTON_SIZE, egui::Sense::click());

    let text_color = if active || response.hovered() {
        colors.text.primary
    } else {
        colors.text.secondary
    };

    if active {
        let marker = egui::Rect::from_min_size(rect.left_top(), Vec2::new(2.0, rect.height()));
        ui.painter().rect_filled(marker, 0.0, colors.ui.accent);
    }
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        icon,
        egui::FontId::proportional(20.0),
        text_color,
    );

    response.on_hover_text(tooltip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_bar_starts_without_popup() {
        let bar = ActivityBar::new();
        assert!(bar.popup.is_none());
    }

    #[test]
    fn test_toggle_popup_switches_and_closes() {
        let mut bar = ActivityBar::new();
        bar.toggle_popup(Popup::Profile);
        assert_eq!(bar.popup, Some(Popup::Profile));
        bar.toggle_popup(Popup::Settings);
        assert_eq!(bar.popup, Some(Popup::Settings));
        bar.toggle_popup(Popup::Settings);
        assert!(bar.popup.is_none());
    }
}

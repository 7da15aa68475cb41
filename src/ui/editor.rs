//! Editor area: tab strip, breadcrumb and the active document's view.

use eframe::egui::{self, RichText, Sense, Stroke, Ui, Vec2};

use super::views::{self, ViewCache};
use super::{document_label, UiAction};
use crate::catalog::{
    BlogPost, CatalogItem, EntryKind, ABOUT_ID, CONTACT_ID, EXPERIENCE_ID, EXTENSIONS_VIEW_ID,
    HOME_ID, PROJECTS_ID, SKILLS_ID,
};
use crate::session::DocumentId;
use crate::state::{AppState, CloseOrigin};
use crate::theme::ThemeColors;

const TAB_HEIGHT: f32 = 34.0;
const TAB_MIN_WIDTH: f32 = 120.0;
const TAB_MAX_WIDTH: f32 = 200.0;

/// Root segment of every file breadcrumb.
const BREADCRUMB_ROOT: &str = "suman-mandal";

// ─────────────────────────────────────────────────────────────────────────────
// Breadcrumb
// ─────────────────────────────────────────────────────────────────────────────

/// Segments shown above the active document, if it has any.
///
/// Files show the workspace root followed by their path; blog posts show
/// `blogs` and the title; full-page views show nothing.
pub(crate) fn breadcrumb(state: &AppState, id: &DocumentId) -> Option<Vec<String>> {
    let path = match state.catalog.lookup(id.as_str()) {
        Some(CatalogItem::Blog(post)) => {
            return Some(vec!["blogs".to_string(), post.title.to_string()]);
        }
        Some(CatalogItem::Entry(entry)) if entry.kind != EntryKind::View => entry.path,
        Some(CatalogItem::Entry(_)) => return None,
        None => state.scratch.get(id).map(|doc| doc.path.as_str())?,
    };
    let mut parts = vec![BREADCRUMB_ROOT.to_string()];
    parts.extend(path.split('/').map(str::to_string));
    Some(parts)
}

// ─────────────────────────────────────────────────────────────────────────────
// Editor
// ─────────────────────────────────────────────────────────────────────────────

/// Render the editor into the central panel.
pub fn show_editor(
    ui: &mut Ui,
    state: &mut AppState,
    cache: &mut ViewCache,
    colors: &ThemeColors,
    now: f64,
    actions: &mut Vec<UiAction>,
) {
    show_tabs(ui, state, colors, actions);

    let Some(active) = state.session.active().cloned() else {
        views::show_empty(ui, colors);
        return;
    };

    if let Some(parts) = breadcrumb(state, &active) {
        show_breadcrumb(ui, state, &active, &parts, colors);
    }

    let page = match state.catalog.lookup(active.as_str()) {
        Some(CatalogItem::Blog(post)) => Page::Blog(post),
        Some(CatalogItem::Entry(entry)) => Page::File(entry.id),
        None if active.is_scratch() => Page::Scratch,
        None => Page::Missing,
    };

    match page {
        Page::Blog(post) => views::show_blog(ui, post, cache, colors),
        Page::File(HOME_ID) => views::show_home(ui, cache, colors, actions),
        Page::File(ABOUT_ID) => views::show_about(ui, state, cache, colors, actions),
        Page::File(PROJECTS_ID) => {
            views::show_projects(ui, state.catalog.projects(), colors, actions)
        }
        Page::File(SKILLS_ID) => views::show_skills(ui, state, colors),
        Page::File(CONTACT_ID) => views::show_contact(ui, state, colors, now, actions),
        Page::File(EXPERIENCE_ID) => views::show_experience(ui, state, colors, actions),
        Page::File(EXTENSIONS_VIEW_ID) => views::show_extensions(ui, state, colors, actions),
        Page::Scratch => views::show_scratch(ui, state, &active, colors),
        Page::File(_) | Page::Missing => views::show_empty(ui, colors),
    }
}

/// What the content area shows for the active id.
enum Page {
    Blog(&'static BlogPost),
    File(&'static str),
    Scratch,
    Missing,
}

fn show_tabs(ui: &mut Ui, state: &AppState, colors: &ThemeColors, actions: &mut Vec<UiAction>) {
    egui::Frame::none().fill(colors.base.tab).show(ui, |ui| {
        ui.set_width(ui.available_width());
        egui::ScrollArea::horizontal()
            .auto_shrink([false, true])
            .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing = Vec2::ZERO;
                    for id in state.session.open_documents() {
                        show_tab(ui, state, id, colors, actions);
                    }
                });
            });
    });
}

fn show_tab(
    ui: &mut Ui,
    state: &AppState,
    id: &DocumentId,
    colors: &ThemeColors,
    actions: &mut Vec<UiAction>,
) {
    let label = document_label(&state.catalog, &state.scratch, id);
    let active = state.session.is_active(id);

    let galley = ui.painter().layout_no_wrap(
        label.name.clone(),
        egui::FontId::proportional(12.0),
        colors.text.primary,
    );
    let width = (galley.size().x + 64.0).clamp(TAB_MIN_WIDTH, TAB_MAX_WIDTH);
    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, TAB_HEIGHT), Sense::click());

    let fill = if active || response.hovered() {
        colors.base.main
    } else {
        colors.base.tab
    };
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, fill);
    painter.vline(
        rect.right(),
        rect.y_range(),
        Stroke::new(1.0, colors.base.border),
    );
    if active {
        let top = egui::Rect::from_min_size(rect.left_top(), Vec2::new(rect.width(), 2.0));
        painter.rect_filled(top, 0.0, colors.ui.accent);
    }

    let text_color = if active {
        colors.text.primary
    } else {
        colors.text.secondary
    };
    painter.text(
        rect.left_center() + Vec2::new(10.0, 0.0),
        egui::Align2::LEFT_CENTER,
        label.kind.icon(),
        egui::FontId::proportional(11.0),
        colors.ui.accent,
    );
    let name_clip = egui::Rect::from_min_max(
        rect.left_top() + Vec2::new(30.0, 0.0),
        rect.right_bottom() - Vec2::new(26.0, 0.0),
    );
    painter.with_clip_rect(name_clip).text(
        name_clip.left_center(),
        egui::Align2::LEFT_CENTER,
        &label.name,
        egui::FontId::proportional(12.0),
        text_color,
    );

    let close_rect = egui::Rect::from_center_size(
        rect.right_center() - Vec2::new(14.0, 0.0),
        Vec2::splat(16.0),
    );
    let close = ui.interact(close_rect, ui.id().with(("tab_close", id)), Sense::click());
    if active || response.hovered() || close.hovered() {
        if close.hovered() {
            ui.painter().rect_filled(close_rect, 3.0, colors.base.activity);
        }
        ui.painter().text(
            close_rect.center(),
            egui::Align2::CENTER_CENTER,
            "×",
            egui::FontId::proportional(14.0),
            text_color,
        );
    }

    if close.clicked() {
        actions.push(UiAction::CloseDocument(id.clone(), CloseOrigin::TabButton));
    } else if response.clicked() {
        actions.push(UiAction::ActivateDocument(id.clone()));
    }
}

fn show_breadcrumb(
    ui: &mut Ui,
    state: &AppState,
    active: &DocumentId,
    parts: &[String],
    colors: &ThemeColors,
) {
    egui::Frame::none()
        .fill(colors.base.main)
        .inner_margin(egui::Margin::symmetric(16.0, 3.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;
                for (index, part) in parts.iter().enumerate() {
                    let last = index + 1 == parts.len();
                    let color = if last {
                        colors.text.primary
                    } else {
                        colors.text.secondary
                    };
                    ui.label(RichText::new(part).size(11.0).color(color));
                    if !last {
                        ui.label(RichText::new("›").size(11.0).color(colors.text.secondary));
                    }
                }
                if active.as_str() == ABOUT_ID && state.layout.preview_open {
                    ui.label(
                        RichText::new("|")
                            .size(11.0)
                            .color(colors.text.secondary.gamma_multiply(0.4)),
                    );
                    ui.label(
                        RichText::new("▼ Preview Mode")
                            .size(11.0)
                            .strong()
                            .color(colors.ui.accent),
                    );
                }
            });
        });
    let rect = ui.available_rect_before_wrap();
    ui.painter().hline(
        rect.x_range(),
        rect.top(),
        Stroke::new(1.0, colors.base.border),
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::ChatBackend;
    use crate::config::Settings;
    use crate::error::Result;
    use std::sync::Arc;

    struct SilentBackend;

    impl ChatBackend for SilentBackend {
        fn generate(&self, _prompt: &str) -> Result<String> {
            Ok(String::new())
        }
    }

    fn state() -> AppState {
        AppState::with_backend(Settings::default(), Arc::new(SilentBackend))
    }

    #[test]
    fn test_breadcrumb_for_files() {
        let state = state();
        assert_eq!(
            breadcrumb(&state, &"about".into()),
            Some(vec![
                "suman-mandal".to_string(),
                "src".to_string(),
                "about_me.py".to_string()
            ])
        );
        let home = breadcrumb(&state, &"home".into()).unwrap();
        assert_eq!(home, vec!["suman-mandal", "suman-mandal", "README.md"]);
    }

    #[test]
    fn test_breadcrumb_for_blog_and_views() {
        let state = state();
        assert_eq!(
            breadcrumb(&state, &"blog1".into()),
            Some(vec![
                "blogs".to_string(),
                "Understanding Transformers".to_string()
            ])
        );
        assert_eq!(breadcrumb(&state, &EXTENSIONS_VIEW_ID.into()), None);
        assert_eq!(breadcrumb(&state, &"missing".into()), None);
    }

    #[test]
    fn test_breadcrumb_for_scratch() {
        let mut state = state();
        let id = state.create_scratch(42);
        assert_eq!(
            breadcrumb(&state, &id),
            Some(vec![
                "suman-mandal".to_string(),
                "scratchpad".to_string(),
                "Untitled.txt".to_string()
            ])
        );
    }
}

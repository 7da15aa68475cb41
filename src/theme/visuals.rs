//! Palette to egui `Visuals`.

use eframe::egui::{self, style::WidgetVisuals, Color32, CursorIcon, Rounding, Stroke, Visuals};

use super::ThemeColors;

const WIDGET_ROUNDING: f32 = 2.0;
const WINDOW_ROUNDING: f32 = 4.0;

fn shadow(y: f32, blur: f32, alpha: u8) -> egui::epaint::Shadow {
    egui::epaint::Shadow {
        offset: egui::vec2(0.0, y),
        blur,
        spread: 0.0,
        color: Color32::from_black_alpha(alpha),
    }
}

fn paint(widget: &mut WidgetVisuals, fill: Color32, weak: Color32, edge: Color32, fg: Stroke) {
    widget.bg_fill = fill;
    widget.weak_bg_fill = weak;
    widget.bg_stroke = Stroke::new(1.0, edge);
    widget.fg_stroke = fg;
    widget.rounding = Rounding::same(WIDGET_ROUNDING);
}

/// Build the egui visuals for a palette. Dark and light palettes share the
/// layout; only the hover contrast and shadow depth differ.
pub fn build_visuals(colors: &ThemeColors) -> Visuals {
    let dark = colors.is_dark();
    let base = &colors.base;
    let text = colors.text.primary;
    let accent = colors.ui.accent;

    let mut visuals = if dark { Visuals::dark() } else { Visuals::light() };

    visuals.panel_fill = base.main;
    visuals.code_bg_color = base.tab;
    visuals.faint_bg_color = base.sidebar;
    if dark {
        visuals.window_fill = base.sidebar;
        visuals.extreme_bg_color = base.activity;
    } else {
        visuals.window_fill = base.main;
        visuals.extreme_bg_color = base.sidebar;
    }

    visuals.override_text_color = None;
    visuals.hyperlink_color = accent;
    visuals.warn_fg_color = colors.ui.warning;
    visuals.error_fg_color = colors.ui.error;

    visuals.selection.bg_fill = base.selection;
    visuals.selection.stroke = Stroke::new(1.0, accent);

    let hover_fg = if dark { Color32::WHITE } else { text };
    let active_fg = if dark { Color32::WHITE } else { base.main };
    let widgets = &mut visuals.widgets;
    paint(&mut widgets.noninteractive, base.sidebar, base.tab, base.border, Stroke::new(1.0, text));
    paint(&mut widgets.inactive, base.tab, base.tab, base.border, Stroke::new(1.0, text));
    paint(&mut widgets.hovered, base.activity, base.activity, accent, Stroke::new(1.5, hover_fg));
    paint(&mut widgets.active, accent, base.selection, accent, Stroke::new(2.0, active_fg));
    paint(&mut widgets.open, base.selection, base.selection, accent, Stroke::new(1.0, text));

    visuals.window_rounding = Rounding::same(WINDOW_ROUNDING);
    visuals.menu_rounding = Rounding::same(WIDGET_ROUNDING);
    visuals.window_stroke = Stroke::new(1.0, base.border);
    if dark {
        visuals.window_shadow = shadow(4.0, 16.0, 120);
        visuals.popup_shadow = shadow(6.0, 20.0, 140);
    } else {
        visuals.window_shadow = shadow(2.0, 8.0, 25);
        visuals.popup_shadow = shadow(4.0, 12.0, 35);
    }

    visuals.button_frame = true;
    visuals.collapsing_header_frame = false;
    visuals.indent_has_left_vline = false;
    visuals.striped = false;
    visuals.interact_cursor = Some(CursorIcon::PointingHand);
    visuals.dark_mode = dark;
    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_follows_palette() {
        assert!(build_visuals(&ThemeColors::dark()).dark_mode);
        assert!(!build_visuals(&ThemeColors::light()).dark_mode);
    }

    #[test]
    fn test_dark_visuals_use_editor_background() {
        let visuals = build_visuals(&ThemeColors::dark());
        assert_eq!(visuals.panel_fill, Color32::from_rgb(0x1e, 0x1e, 0x1e));
        assert_ne!(visuals.selection.bg_fill, visuals.panel_fill);
    }

    #[test]
    fn test_text_stroke_uses_palette_text() {
        for colors in [ThemeColors::dark(), ThemeColors::light()] {
            let visuals = build_visuals(&colors);
            assert_eq!(visuals.widgets.noninteractive.fg_stroke.color, colors.text.primary);
        }
    }

    #[test]
    fn test_light_shadows_are_softer() {
        let light = build_visuals(&ThemeColors::light());
        let dark = build_visuals(&ThemeColors::dark());
        assert!(light.window_shadow.color.a() < dark.window_shadow.color.a());
    }
}

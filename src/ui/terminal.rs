//! Terminal overlay
//!
//! A floating window near the bottom of the editor that shows the lines a
//! [`Transcript`] has revealed so far.

use eframe::egui::{self, Color32, FontId, RichText};

use super::UiAction;
use crate::theme::ThemeColors;
use crate::transcript::{LineKind, Transcript};

const TERMINAL_SIZE: egui::Vec2 = egui::vec2(620.0, 300.0);

/// Colour of a transcript line.
pub(crate) fn line_color(kind: LineKind, colors: &ThemeColors) -> Color32 {
    match kind {
        LineKind::Command => colors.ui.accent,
        LineKind::Success => colors.ui.success,
        LineKind::Error => colors.ui.error,
        LineKind::Info => colors.ui.info,
        LineKind::Plain => colors.terminal.text,
    }
}

/// Draw the overlay when the transcript is open.
pub fn show_terminal(
    ctx: &egui::Context,
    transcript: &Transcript,
    colors: &ThemeColors,
    actions: &mut Vec<UiAction>,
) {
    if !transcript.is_open() {
        return;
    }

    egui::Window::new("terminal_overlay")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .fixed_size(TERMINAL_SIZE)
        .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -40.0])
        .frame(
            egui::Frame::window(&ctx.style())
                .fill(colors.terminal.background)
                .inner_margin(egui::Margin::ZERO),
        )
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(colors.base.activity)
                .inner_margin(egui::Margin::symmetric(10.0, 6.0))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(">_ suman@iitm-bs:~")
                                .font(FontId::monospace(12.0))
                                .color(colors.text.secondary),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .add(egui::Button::new("×").frame(false))
                                .on_hover_text("Kill Terminal")
                                .clicked()
                            {
                                actions.push(UiAction::KillTerminal);
                            }
                        });
                    });
                });

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    egui::Frame::none()
                        .inner_margin(egui::Margin::same(12.0))
                        .show(ui, |ui| {
                            for line in transcript.shown() {
                                let color = line_color(LineKind::classify(line), colors);
                                ui.label(
                                    RichText::new(line)
                                        .font(FontId::monospace(13.0))
                                        .color(color),
                                );
                            }

                            if transcript.is_running() {
                                ui.add(egui::Spinner::new().size(12.0).color(colors.ui.accent));
                            } else if let Some(link) = transcript.link().filter(|_| transcript.is_complete()) {
                                ui.add_space(10.0);
                                ui.separator();
                                ui.label(
                                    RichText::new("Process Completed Successfully.")
                                        .size(12.0)
                                        .color(colors.ui.success),
                                );
                                let button = egui::Button::new(
                                    RichText::new("Open Link External")
                                        .strong()
                                        .color(colors.base.main),
                                )
                                .fill(colors.ui.accent);
                                if ui.add(button).clicked() {
                                    actions.push(UiAction::OpenUrl(link.to_string()));
                                    actions.push(UiAction::KillTerminal);
                                }
                            }
                        });
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_colors_follow_kind() {
        let colors = ThemeColors::dark();
        assert_eq!(
            line_color(LineKind::classify("> git fetch"), &colors),
            colors.ui.accent
        );
        assert_eq!(
            line_color(LineKind::classify("[SUCCESS] done"), &colors),
            colors.ui.success
        );
        assert_eq!(
            line_color(LineKind::classify("plain text"), &colors),
            colors.terminal.text
        );
    }
}

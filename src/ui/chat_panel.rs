//! "Ask About Suman" chat panel on the right edge.

use eframe::egui::{self, Align, Layout, RichText, Ui};

use super::{drag_handle, UiAction};
use crate::chat::{ChatSession, Role, GREETING, GREETING_HINT};
use crate::session::DragTarget;
use crate::theme::ThemeColors;

/// Render the chat panel contents.
///
/// Submitting goes straight to the session so the worker can be handed a
/// repaint handle for this context.
pub fn show_chat_panel(
    ui: &mut Ui,
    chat: &mut ChatSession,
    enabled: bool,
    maximized: bool,
    colors: &ThemeColors,
    actions: &mut Vec<UiAction>,
) {
    drag_handle(
        ui,
        "chat_drag",
        ui.max_rect().left(),
        DragTarget::Chat,
        colors.ui.accent,
        actions,
    );

    egui::Frame::none()
        .fill(colors.base.activity)
        .inner_margin(egui::Margin::symmetric(10.0, 6.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("💬 ASK ABOUT SUMAN")
                        .size(11.0)
                        .strong()
                        .color(colors.text.secondary),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.add(egui::Button::new("×").frame(false)).clicked() {
                        actions.push(UiAction::ToggleChat);
                    }
                    let (icon, tip) = if maximized {
                        ("🗗", "Restore")
                    } else {
                        ("🗖", "Maximize")
                    };
                    if ui
                        .add(egui::Button::new(icon).frame(false))
                        .on_hover_text(tip)
                        .clicked()
                    {
                        actions.push(UiAction::ToggleChatMaximized);
                    }
                });
            });
        });

    egui::TopBottomPanel::bottom("chat_input")
        .frame(egui::Frame::none().inner_margin(egui::Margin::same(8.0)))
        .show_inside(ui, |ui| {
            if enabled {
                show_input(ui, chat, colors);
            } else {
                ui.label(
                    RichText::new("Chat is disabled in settings.")
                        .italics()
                        .size(11.0)
                        .color(colors.text.secondary),
                );
            }
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("Powered by passion of developer")
                        .size(9.0)
                        .color(colors.text.secondary.gamma_multiply(0.6)),
                );
            });
        });

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add_space(8.0);
            if chat.messages().is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(RichText::new("💬").size(40.0).color(colors.text.secondary));
                    ui.label(RichText::new(GREETING).color(colors.text.secondary));
                    ui.label(
                        RichText::new(GREETING_HINT)
                            .size(11.0)
                            .color(colors.text.secondary.gamma_multiply(0.7)),
                    );
                });
            }

            let bubble_width = ui.available_width() * 0.85;
            for message in chat.messages() {
                let (align, fill, text_color) = match message.role {
                    Role::User => (Align::Max, colors.ui.accent, colors.base.main),
                    Role::Model => (Align::Min, colors.base.activity, colors.text.primary),
                };
                ui.with_layout(Layout::top_down(align), |ui| {
                    egui::Frame::none()
                        .fill(fill)
                        .stroke(egui::Stroke::new(1.0, colors.base.border))
                        .rounding(4.0)
                        .inner_margin(egui::Margin::same(8.0))
                        .show(ui, |ui| {
                            ui.set_max_width(bubble_width);
                            ui.add(
                                egui::Label::new(RichText::new(&message.text).color(text_color))
                                    .wrap(),
                            );
                        });
                });
                ui.add_space(8.0);
            }

            if chat.is_loading() {
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.add(egui::Spinner::new().size(14.0).color(colors.ui.accent));
                });
            }
        });
}

fn show_input(ui: &mut Ui, chat: &mut ChatSession, colors: &ThemeColors) {
    let input_id = egui::Id::new("chat_input_text");
    // Enter sends, Shift+Enter inserts a newline
    let focused = ui.memory(|m| m.has_focus(input_id));
    let mut send =
        focused && ui.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Enter));

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::multiline(&mut chat.input)
                .id(input_id)
                .hint_text("Ask me about Suman...")
                .desired_rows(3)
                .desired_width(ui.available_width() - 32.0),
        );
        let button = egui::Button::new(RichText::new("➤").color(colors.ui.accent)).frame(false);
        if ui
            .add_enabled(!chat.is_loading() && !chat.input.trim().is_empty(), button)
            .clicked()
        {
            send = true;
        }
    });

    if send {
        chat.submit(Some(ui.ctx().clone()));
    }
}

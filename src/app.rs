//! Main application module for Devfolio
//!
//! This module implements the eframe App trait: it lays out the panels each
//! frame, collects the [`UiAction`]s the components report, and applies them
//! to [`AppState`] once layout is done. Side effects that touch the outside
//! world (clipboard, native dialogs, the browser, the window) happen here.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use eframe::egui::{self, Key, Modifiers};
use log::{debug, info, warn};

use crate::export::{self, CLIPBOARD_DENIED, SHORTCUT_FILE_NAME};
use crate::files::dialogs::{save_file_dialog, save_shortcut_dialog};
use crate::session::layout::ACTIVITY_BAR_WIDTH;
use crate::session::scratch::SCRATCH_EXPORT_NAME;
use crate::session::DragTarget;
use crate::state::{AppState, CloseOutcome, SCRATCH_EMPTY};
use crate::theme::{ThemeColors, ThemeManager};
use crate::ui::{
    self, show_about_dialog, show_chat_panel, show_confirm_dialog, show_editor,
    show_error_modal, show_menu_bar, show_minimized, show_sidebar, show_status_bar,
    show_terminal, show_terminated, ActivityBar, ConfirmChoice, QuickOpenEntry, QuickSwitcher,
    StatusInfo, UiAction, ViewCache,
};

const TITLE_BAR_HEIGHT: f32 = 30.0;
const STATUS_BAR_HEIGHT: f32 = 22.0;

const SHORTCUT_SAVED: &str = "Shortcut saved to your computer!";
const LINK_COPIED: &str = "Link copied to clipboard!";

/// Keyboard shortcut actions that need to be deferred.
///
/// These are detected inside the input closure and executed afterwards to
/// avoid borrow conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyboardAction {
    /// New scratch document (Ctrl+N)
    New,
    /// Close the active document (Ctrl+W)
    CloseActive,
    /// Undo (Ctrl+Z)
    Undo,
    /// Redo (Ctrl+Y or Ctrl+Shift+Z)
    Redo,
    /// Quick open (Ctrl+P)
    QuickOpen,
    /// Toggle the sidebar (Ctrl+B)
    ToggleSidebar,
    /// Toggle theme (Ctrl+Shift+T)
    ToggleTheme,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    /// Run the active scratch document (F5 or Ctrl+F5)
    Run,
    /// Close the terminal overlay (Escape)
    DismissTerminal,
}

impl KeyboardAction {
    fn into_ui_action(self) -> UiAction {
        match self {
            KeyboardAction::New => UiAction::NewScratch,
            KeyboardAction::CloseActive => UiAction::CloseActive,
            KeyboardAction::Undo => UiAction::Undo,
            KeyboardAction::Redo => UiAction::Redo,
            KeyboardAction::QuickOpen => UiAction::QuickOpen,
            KeyboardAction::ToggleSidebar => UiAction::ToggleSidebar,
            KeyboardAction::ToggleTheme => UiAction::ToggleTheme,
            KeyboardAction::ZoomIn => UiAction::ZoomIn,
            KeyboardAction::ZoomOut => UiAction::ZoomOut,
            KeyboardAction::ResetZoom => UiAction::ResetZoom,
            KeyboardAction::Run => UiAction::RunActiveScratch,
            KeyboardAction::DismissTerminal => UiAction::KillTerminal,
        }
    }
}

/// Shortcut table, most specific chords first.
const SHORTCUTS: &[(Modifiers, Key, KeyboardAction)] = &[
    (Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::T, KeyboardAction::ToggleTheme),
    (Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z, KeyboardAction::Redo),
    (Modifiers::COMMAND, Key::Z, KeyboardAction::Undo),
    (Modifiers::COMMAND, Key::Y, KeyboardAction::Redo),
    (Modifiers::COMMAND, Key::N, KeyboardAction::New),
    (Modifiers::COMMAND, Key::W, KeyboardAction::CloseActive),
    (Modifiers::COMMAND, Key::P, KeyboardAction::QuickOpen),
    (Modifiers::COMMAND, Key::B, KeyboardAction::ToggleSidebar),
    (Modifiers::COMMAND, Key::Equals, KeyboardAction::ZoomIn),
    (Modifiers::COMMAND, Key::Plus, KeyboardAction::ZoomIn),
    (Modifiers::COMMAND, Key::Minus, KeyboardAction::ZoomOut),
    (Modifiers::COMMAND, Key::Num0, KeyboardAction::ResetZoom),
    (Modifiers::COMMAND, Key::F5, KeyboardAction::Run),
    (Modifiers::NONE, Key::F5, KeyboardAction::Run),
];

/// The main application struct that holds all state and implements eframe::App.
pub struct DevfolioApp {
    /// Central application state
    state: AppState,
    /// Theme manager for handling theme switching
    theme_manager: ThemeManager,
    activity_bar: ActivityBar,
    /// Quick open (Ctrl+P)
    quick_switcher: QuickSwitcher,
    /// Parsed markdown and highlighted source
    view_cache: ViewCache,
    /// Application start time for toasts and transcript timing
    start_time: Instant,
    /// Set once the first viewport width has been applied
    viewport_measured: bool,
    /// Last known inner window size, written back on exit
    last_window_size: Option<egui::Vec2>,
}

impl DevfolioApp {
    /// Create the app with settings loaded from the config file.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        info!("Initializing Devfolio");

        let state = AppState::new();

        let mut theme_manager = ThemeManager::new(state.settings.theme);
        theme_manager.apply_if_needed(&cc.egui_ctx);
        info!("Applied initial theme: {:?}", state.settings.theme);

        // Zoom is driven by settings; egui's own zoom keys would bypass them
        cc.egui_ctx.options_mut(|o| o.zoom_with_keyboard = false);
        cc.egui_ctx.set_zoom_factor(state.settings.zoom_level);

        Self {
            state,
            theme_manager,
            activity_bar: ActivityBar::new(),
            quick_switcher: QuickSwitcher::new(),
            view_cache: ViewCache::new(),
            start_time: Instant::now(),
            viewport_measured: false,
            last_window_size: None,
        }
    }

    /// Elapsed time since app start in seconds.
    fn get_app_time(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    /// Wall-clock milliseconds, used to mint scratch ids.
    fn now_millis() -> u128 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Per-frame bookkeeping
    // ─────────────────────────────────────────────────────────────────────────

    /// Advance the transcript and chat, and schedule the next repaint.
    fn tick_background(&mut self, ctx: &egui::Context, now: f64) {
        if self.state.transcript.tick(now) {
            ctx.request_repaint();
        }
        if let Some(deadline) = self.state.transcript.next_deadline() {
            ctx.request_repaint_after(Duration::from_secs_f64((deadline - now).max(0.0)));
        }

        if self.state.chat.poll() {
            ctx.request_repaint();
        }

        if let Some(expires_at) = self.state.ui.toast_expires_at {
            ctx.request_repaint_after(Duration::from_secs_f64((expires_at - now).max(0.0)));
        }
        if let Some(until) = self.state.ui.contact.sent_until.filter(|&t| t > now) {
            ctx.request_repaint_after(Duration::from_secs_f64(until - now));
        }
    }

    /// Feed the window width to the layout; the first frame applies the
    /// narrow-screen startup rules.
    fn track_viewport(&mut self, ctx: &egui::Context) {
        let width = ctx.screen_rect().width();
        if self.viewport_measured {
            self.state.layout.set_viewport_width(width);
        } else {
            self.state.apply_startup_viewport(width);
            self.viewport_measured = true;
        }

        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.last_window_size = Some(rect.size());
        }
    }

    /// Route pointer motion to an active panel drag and end it on release.
    fn handle_panel_drag(&mut self, ctx: &egui::Context) {
        if !self.state.layout.is_dragging() {
            return;
        }
        let (pos, released) = ctx.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.any_released() || !i.pointer.primary_down(),
            )
        });
        if let Some(pos) = pos {
            self.state.layout.on_pointer_move(pos);
        }
        if released {
            debug!("Ended drag of {:?}", self.state.layout.drag_target());
            self.state.layout.end_drag();
        }
        ctx.set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
    }

    fn modal_open(&self) -> bool {
        self.state.ui.show_confirm_dialog
            || self.state.ui.show_error_modal
            || self.state.ui.show_about
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Keyboard
    // ─────────────────────────────────────────────────────────────────────────

    /// Consume global shortcuts before widgets see them.
    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        if self.modal_open() || self.state.ui.session_terminated || self.state.ui.workspace_hidden
        {
            return;
        }

        let transcript_open = self.state.transcript.is_open();
        let switcher_open = self.quick_switcher.is_open();

        let action = ctx.input_mut(|i| {
            for &(modifiers, key, action) in SHORTCUTS {
                if i.consume_key(modifiers, key) {
                    return Some(action);
                }
            }
            // Escape belongs to the quick switcher while it is open
            if transcript_open && !switcher_open && i.consume_key(Modifiers::NONE, Key::Escape)
            {
                return Some(KeyboardAction::DismissTerminal);
            }
            None
        });

        if let Some(action) = action {
            debug!("Keyboard shortcut: {:?}", action);
            actions.push(action.into_ui_action());
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Layout
    // ─────────────────────────────────────────────────────────────────────────

    fn render_ui(&mut self, ctx: &egui::Context, now: f64, actions: &mut Vec<UiAction>) {
        let colors = self.theme_manager.colors();

        egui::TopBottomPanel::top("title_bar")
            .exact_height(TITLE_BAR_HEIGHT)
            .frame(egui::Frame::none().fill(colors.base.activity))
            .show_separator_line(false)
            .show(ctx, |ui| show_menu_bar(ui, &self.state, colors, actions));

        if self.state.ui.session_terminated {
            egui::CentralPanel::default()
                .frame(egui::Frame::none().fill(colors.base.main))
                .show(ctx, |ui| show_terminated(ui, colors, actions));
            return;
        }
        if self.state.ui.workspace_hidden {
            egui::CentralPanel::default()
                .frame(egui::Frame::none().fill(colors.base.main))
                .show(ctx, |ui| show_minimized(ui, colors, actions));
            return;
        }

        let kind_label = self
            .state
            .session
            .active()
            .map(|id| ui::document_label(&self.state.catalog, &self.state.scratch, id).kind)
            .map(|kind| kind.label())
            .unwrap_or("PLAINTEXT");
        let status = StatusInfo {
            kind_label,
            zoom_level: self.state.settings.zoom_level,
            theme: self.theme_manager.current_theme(),
            toast: self.state.ui.toast_message.as_deref(),
        };
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(STATUS_BAR_HEIGHT)
            .frame(egui::Frame::none().fill(colors.ui.accent))
            .show_separator_line(false)
            .show(ctx, |ui| show_status_bar(ui, &status, colors, actions));

        egui::SidePanel::left("activity_bar")
            .exact_width(ACTIVITY_BAR_WIDTH)
            .resizable(false)
            .frame(egui::Frame::none().fill(colors.base.activity))
            .show(ctx, |ui| {
                self.activity_bar.show(
                    ui,
                    colors,
                    self.state.ui.sidebar_view,
                    self.state.layout.sidebar_open,
                    self.theme_manager.icon(),
                    self.theme_manager.is_dark(),
                    self.state.settings.zoom_level,
                    actions,
                );
            });

        if self.state.layout.sidebar_open {
            egui::SidePanel::left("sidebar")
                .exact_width(self.state.layout.sidebar_width)
                .resizable(false)
                .frame(egui::Frame::none().fill(colors.base.sidebar))
                .show(ctx, |ui| {
                    show_sidebar(ui, &mut self.state, colors, actions);
                    let edge = ui.max_rect().right();
                    ui::drag_handle(
                        ui,
                        "sidebar_drag",
                        edge,
                        DragTarget::Sidebar,
                        colors.ui.accent,
                        actions,
                    );
                });
        }

        if self.state.layout.chat_open {
            let maximized = self.state.layout.is_chat_maximized();
            let enabled = self.state.settings.chat.enabled;
            egui::SidePanel::right("chat_panel")
                .exact_width(self.state.layout.chat_width)
                .resizable(false)
                .frame(egui::Frame::none().fill(colors.base.sidebar))
                .show(ctx, |ui| {
                    show_chat_panel(ui, &mut self.state.chat, enabled, maximized, colors, actions);
                });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(colors.base.main))
            .show(ctx, |ui| {
                show_editor(ui, &mut self.state, &mut self.view_cache, colors, now, actions);
            });

        show_terminal(ctx, &self.state.transcript, colors, actions);

        if self.quick_switcher.is_open() {
            let entries = QuickOpenEntry::collect(&self.state.catalog, &self.state.scratch);
            if let Some(id) = self.quick_switcher.show(ctx, &entries, colors) {
                actions.push(UiAction::OpenDocument(id));
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_action(&mut self, ctx: &egui::Context, action: UiAction, now: f64) {
        match action {
            UiAction::OpenDocument(id) => self.state.open_document(id),
            UiAction::ActivateDocument(id) => {
                self.state.session.set_active(&id);
            }
            UiAction::CloseDocument(id, origin) => {
                let outcome = self.state.close_document(&id, origin);
                self.report_close(outcome);
            }
            UiAction::CloseActive => {
                let outcome = self.state.close_active_document();
                self.report_close(outcome);
            }
            UiAction::NewScratch => {
                self.state.create_scratch(Self::now_millis());
            }
            UiAction::SaveScratchAs(id) => self.handle_save_scratch_as(&id),
            UiAction::RunActiveScratch => self.handle_run_scratch(now),

            UiAction::Undo => {
                self.state.undo_active();
            }
            UiAction::Redo => {
                self.state.redo_active();
            }
            UiAction::CopyFileContent => {
                if let Some(content) = self.state.active_scratch_content() {
                    if let Err(e) = export::copy_text(content) {
                        warn!("Copy failed: {}", e);
                        self.state.show_error(CLIPBOARD_DENIED);
                    }
                }
            }
            UiAction::PasteToEnd => match export::read_text() {
                Ok(Some(text)) => {
                    self.state.paste_to_end(&text);
                }
                Ok(None) => debug!("Clipboard holds no text"),
                Err(e) => {
                    warn!("Paste failed: {}", e);
                    self.state.show_error(CLIPBOARD_DENIED);
                }
            },

            UiAction::SaveShortcut => self.handle_save_shortcut(now),
            UiAction::ShareLink => {
                match export::copy_text(&self.state.settings.portfolio_url) {
                    Ok(()) => self.state.show_toast(LINK_COPIED, now, crate::state::TOAST_DURATION),
                    Err(e) => {
                        warn!("Share link failed: {}", e);
                        self.state.show_error(CLIPBOARD_DENIED);
                    }
                }
            }

            UiAction::SelectSidebarView(view) => self.state.select_sidebar_view(view),
            UiAction::ToggleFolder(id) => self.state.folders.toggle(&id),
            UiAction::ToggleSidebar => self.state.layout.toggle_sidebar(),
            UiAction::ToggleSidePreview => {
                if !self.state.toggle_side_preview() {
                    debug!("Side preview is only available on the about page");
                }
            }
            UiAction::ShowPreview => self.state.layout.preview_open = true,
            UiAction::ToggleChat => self.state.layout.toggle_chat(),
            UiAction::ToggleChatMaximized => self.state.layout.toggle_chat_maximized(),
            UiAction::BeginDrag(target) => {
                debug!("Began drag of {:?}", target);
                self.state.layout.begin_drag(target);
            }
            UiAction::QuickOpen => self.quick_switcher.toggle(),

            UiAction::ToggleTheme => {
                let theme = self.theme_manager.toggle();
                self.state.update_settings(|s| s.theme = theme);
                self.state.save_settings_if_dirty();
            }
            UiAction::ZoomIn => self.apply_zoom(ctx, |s| s.zoom_in()),
            UiAction::ZoomOut => self.apply_zoom(ctx, |s| s.zoom_out()),
            UiAction::ResetZoom => self.apply_zoom(ctx, |s| s.reset_zoom()),

            UiAction::PlayTranscript { lines, link } => {
                self.state.play_transcript(lines, link, now);
            }
            UiAction::KillTerminal => self.state.transcript.dismiss(),
            UiAction::OpenUrl(url) => {
                info!("Opening {}", url);
                if let Err(e) = open::that(&url) {
                    warn!("Failed to open {}: {}", url, e);
                    self.state.show_error(format!("Could not open link: {}", url));
                }
            }

            UiAction::TerminateSession => self.state.request_terminate_session(),
            UiAction::Minimize => {
                if self.state.minimize() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(false));
                }
            }
            UiAction::ToggleFullscreen => {
                let fullscreen = self.state.toggle_fullscreen();
                ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(fullscreen));
            }
            UiAction::ReestablishSession => self.state.reestablish_session(),
            UiAction::ShowAbout => self.state.toggle_about(),
        }
    }

    fn report_close(&mut self, outcome: CloseOutcome) {
        match outcome {
            CloseOutcome::Blocked(message) => self.state.show_error(message),
            CloseOutcome::NotOpen => debug!("Close ignored: document not open"),
            CloseOutcome::Closed | CloseOutcome::NeedsConfirmation => {}
        }
    }

    fn apply_zoom<F>(&mut self, ctx: &egui::Context, f: F)
    where
        F: FnOnce(&mut crate::config::Settings),
    {
        self.state.update_settings(f);
        ctx.set_zoom_factor(self.state.settings.zoom_level);
        debug!("Zoom level: {}", self.state.settings.zoom_level);
        self.state.save_settings_if_dirty();
    }

    /// Explorer "Save As...".
    fn handle_save_scratch_as(&mut self, id: &crate::session::DocumentId) {
        if !self.state.can_save_scratch(id) {
            self.state.show_error(SCRATCH_EMPTY);
            return;
        }
        let default_name = self
            .state
            .scratch
            .get(id)
            .map(|doc| doc.export_name())
            .unwrap_or_else(|| SCRATCH_EXPORT_NAME.to_string());
        let Some(path) = save_file_dialog(&default_name) else {
            debug!("Save As cancelled");
            return;
        };
        if let Err(e) = self.state.save_scratch_to(id, &path) {
            self.state.show_error(e.to_string());
        }
    }

    /// Run > Run Without Debugging: export the active scratch document and
    /// play the run script.
    fn handle_run_scratch(&mut self, now: f64) {
        let Some(id) = self.state.active_scratch().cloned() else {
            debug!("Run ignored: no active scratch document");
            return;
        };
        let default_name = self
            .state
            .scratch
            .get(&id)
            .map(|doc| doc.export_name())
            .unwrap_or_else(|| SCRATCH_EXPORT_NAME.to_string());
        let Some(path) = save_file_dialog(&default_name) else {
            debug!("Run cancelled");
            return;
        };
        if let Err(e) = self.state.run_active_scratch_to(&path, now) {
            self.state.show_error(e.to_string());
        }
    }

    /// File > Save As Shortcut.
    fn handle_save_shortcut(&mut self, now: f64) {
        let Some(path) = save_shortcut_dialog(SHORTCUT_FILE_NAME) else {
            debug!("Save As Shortcut cancelled");
            return;
        };
        match export::export_shortcut(&path, &self.state.settings.portfolio_url) {
            Ok(()) => self
                .state
                .show_toast(SHORTCUT_SAVED, now, crate::state::TOAST_DURATION),
            Err(e) => self.state.show_error(e.to_string()),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────────────────────────

    fn render_dialogs(&mut self, ctx: &egui::Context) {
        let colors: &ThemeColors = self.theme_manager.colors();

        if self.state.ui.show_confirm_dialog {
            match show_confirm_dialog(ctx, &self.state.ui.confirm_dialog_message, colors) {
                Some(ConfirmChoice::Confirm) => self.state.handle_confirmed_action(),
                Some(ConfirmChoice::Cancel) => self.state.cancel_pending_action(),
                None => {}
            }
        }

        if self.state.ui.show_error_modal
            && show_error_modal(ctx, &self.state.ui.error_message, colors)
        {
            self.state.dismiss_error();
        }

        if self.state.ui.show_about && show_about_dialog(ctx, colors) {
            self.state.ui.show_about = false;
        }
    }
}

impl eframe::App for DevfolioApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.theme_manager.apply_if_needed(ctx);

        let now = self.get_app_time();
        self.state.update_toast(now);
        self.tick_background(ctx, now);
        self.track_viewport(ctx);
        self.handle_panel_drag(ctx);

        let mut actions = Vec::new();
        // Before render so text fields never see the global chords
        self.handle_keyboard_shortcuts(ctx, &mut actions);
        self.render_ui(ctx, now, &mut actions);
        self.render_dialogs(ctx);

        for action in actions {
            self.handle_action(ctx, action, now);
        }
    }

    /// Called when the application is about to close.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application exiting");
        if let Some(size) = self.last_window_size {
            self.state.update_settings(|s| {
                s.window_size.width = size.x;
                s.window_size.height = size.y;
            });
        }
        self.state.save_settings_if_dirty();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_table_lists_specific_chords_first() {
        let pos = |m: Modifiers, k: Key| {
            SHORTCUTS
                .iter()
                .position(|&(mods, key, _)| mods == m && key == k)
                .unwrap()
        };
        let shift = Modifiers::COMMAND.plus(Modifiers::SHIFT);
        assert!(pos(shift, Key::Z) < pos(Modifiers::COMMAND, Key::Z));
        assert!(pos(shift, Key::T) < pos(Modifiers::COMMAND, Key::P));
    }

    #[test]
    fn test_keyboard_actions_map_to_ui_actions() {
        assert_eq!(KeyboardAction::New.into_ui_action(), UiAction::NewScratch);
        assert_eq!(
            KeyboardAction::DismissTerminal.into_ui_action(),
            UiAction::KillTerminal
        );
        assert_eq!(
            KeyboardAction::Run.into_ui_action(),
            UiAction::RunActiveScratch
        );
    }

    #[test]
    fn test_every_shortcut_has_a_binding() {
        for action in [
            KeyboardAction::New,
            KeyboardAction::CloseActive,
            KeyboardAction::Undo,
            KeyboardAction::Redo,
            KeyboardAction::QuickOpen,
            KeyboardAction::ToggleSidebar,
            KeyboardAction::ToggleTheme,
            KeyboardAction::ZoomIn,
            KeyboardAction::ZoomOut,
            KeyboardAction::ResetZoom,
            KeyboardAction::Run,
        ] {
            assert!(SHORTCUTS.iter().any(|&(_, _, a)| a == action), "{:?}", action);
        }
    }

    #[test]
    fn test_now_millis_is_after_epoch() {
        assert!(DevfolioApp::now_millis() > 1_600_000_000_000);
    }
}

//! Application state management for Devfolio
//!
//! `AppState` owns every piece of runtime state: the open-document session,
//! the scratch document store, panel layout, the terminal transcript, the
//! chat session, and transient UI flags (dialogs, toasts, pending actions).
//! All mutation happens on the UI thread; the chat worker only talks back
//! through its channel.

use std::path::Path;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::catalog::{Catalog, CatalogItem, ABOUT_ID, HOME_ID, ROOT_FOLDER_ID};
use crate::chat::{ChatBackend, ChatSession, GeminiBackend};
use crate::config::{load_config, save_config_silent, Settings};
use crate::error::{Error, Result};
use crate::export;
use crate::session::{DocumentId, ExpandedFolders, Layout, ScratchStore, Session};
use crate::transcript::{scripts, Transcript};

/// Folder id injected into the explorer tree for scratch documents.
pub const SCRATCHPAD_FOLDER_ID: &str = "scratchpad";

pub const BLOCKED_SCRATCH_CLOSE: &str =
    "Action Blocked: Please use the Explorer context menu (Right Click) to close temporary files.";
pub const CONFIRM_SCRATCH_DELETE: &str =
    "WARNING: Closing this temporary file will discard all content. Are you sure?";
pub const SCRATCH_EMPTY: &str = "File is empty or not found.";
pub const CONFIRM_TERMINATE_SESSION: &str =
    "Are you sure you want to close the session? Unsaved changes to 'Universe' may be lost.";

/// Default toast lifetime in seconds.
pub const TOAST_DURATION: f64 = 3.0;

// ─────────────────────────────────────────────────────────────────────────────
// UI State
// ─────────────────────────────────────────────────────────────────────────────

/// Which panel the activity bar has selected for the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarView {
    #[default]
    Explorer,
    Search,
    Extensions,
}

/// Contact form fields on the contact page.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub email: String,
    pub message: String,
    /// App time until which the "Message Sent!" banner stays up
    pub sent_until: Option<f64>,
}

impl ContactForm {
    pub fn is_valid(&self) -> bool {
        self.email.contains('@') && !self.message.trim().is_empty()
    }

    /// Clear the fields and show the confirmation for three seconds.
    pub fn submit(&mut self, now: f64) -> bool {
        if !self.is_valid() {
            return false;
        }
        info!("Contact form submitted by {:?}", self.email);
        self.email.clear();
        self.message.clear();
        self.sent_until = Some(now + TOAST_DURATION);
        true
    }

    pub fn is_sent(&self, now: f64) -> bool {
        self.sent_until.is_some_and(|until| now < until)
    }
}

/// UI-related state flags.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub sidebar_view: SidebarView,
    /// Whether the about dialog is open
    pub show_about: bool,
    /// Whether a confirmation dialog is open
    pub show_confirm_dialog: bool,
    pub confirm_dialog_message: String,
    /// Pending action after confirmation
    pub pending_action: Option<PendingAction>,
    pub show_error_modal: bool,
    pub error_message: String,
    /// Temporary toast message (shown in the status bar)
    pub toast_message: Option<String>,
    /// When the toast message should expire (as seconds since app start)
    pub toast_expires_at: Option<f64>,
    /// False once the user has terminated the session
    pub session_terminated: bool,
    /// Minimized: the workspace is hidden behind the title bar
    pub workspace_hidden: bool,
    pub fullscreen: bool,
    pub blog_query: String,
    pub extension_query: String,
    pub extension_grid: bool,
    pub contact: ContactForm,
}

/// Actions that need confirmation before execution.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    /// Delete a scratch document and close its tab
    DeleteScratch(DocumentId),
    /// Leave the workspace for the "Connection Terminated" screen
    TerminateSession,
}

/// Where a close request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOrigin {
    /// The `×` on a tab
    TabButton,
    /// Explorer context menu "Close File"
    Explorer,
    /// Menu item or keyboard shortcut
    Command,
}

/// Result of a close request.
#[derive(Debug, Clone, PartialEq)]
pub enum CloseOutcome {
    Closed,
    /// Refused; carries the message shown to the user
    Blocked(&'static str),
    /// Waiting on the confirmation dialog
    NeedsConfirmation,
    /// The id was not open and is not a scratch document
    NotOpen,
}

// ─────────────────────────────────────────────────────────────────────────────
// Application State
// ─────────────────────────────────────────────────────────────────────────────

/// Central application state struct.
///
/// ```ignore
/// let mut state = AppState::new();
/// state.open_document("about");
/// let id = state.create_scratch(now_millis);
/// ```
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,
    pub catalog: Catalog,
    pub scratch: ScratchStore,
    pub session: Session,
    pub layout: Layout,
    pub folders: ExpandedFolders,
    pub transcript: Transcript,
    pub chat: ChatSession,
    pub ui: UiState,
    /// Whether settings have been modified and need saving
    settings_dirty: bool,
}

impl AppState {
    /// Create a new AppState with settings loaded from config.
    pub fn new() -> Self {
        let settings = load_config();
        info!("AppState initialized with settings");
        debug!(
            "Theme: {:?}, zoom: {}, chat model: {}",
            settings.theme, settings.zoom_level, settings.chat.model
        );
        Self::with_settings(settings)
    }

    /// Create state from explicit settings, using the Gemini backend for chat.
    pub fn with_settings(settings: Settings) -> Self {
        let backend = Arc::new(GeminiBackend::from_settings(&settings.chat));
        Self::with_backend(settings, backend)
    }

    /// Create state with a caller-supplied chat backend.
    pub fn with_backend(settings: Settings, backend: Arc<dyn ChatBackend>) -> Self {
        let mut session = Session::new();
        session.open(HOME_ID);

        Self {
            scratch: ScratchStore::new(settings.max_undo_history),
            layout: Layout::new(&settings.panels),
            transcript: Transcript::new(settings.transcript_cadence_ms),
            chat: ChatSession::new(backend),
            catalog: Catalog::new(),
            folders: ExpandedFolders::default(),
            session,
            ui: UiState::default(),
            settings,
            settings_dirty: false,
        }
    }

    /// Apply the first measured viewport width.
    ///
    /// Narrow windows start with the sidebar closed and only the root folder
    /// expanded.
    pub fn apply_startup_viewport(&mut self, width: f32) {
        self.layout.set_viewport_width(width);
        if self.layout.is_narrow() {
            debug!("Narrow viewport at startup ({}px)", width);
            self.layout.sidebar_open = false;
            self.folders.collapse_to(&[ROOT_FOLDER_ID]);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Documents
    // ─────────────────────────────────────────────────────────────────────────

    /// Open a document (catalog entry, blog post, or scratch) and make it active.
    pub fn open_document(&mut self, id: impl Into<DocumentId>) {
        let id = id.into();
        let is_file = id.is_scratch()
            || matches!(self.catalog.lookup(id.as_str()), Some(CatalogItem::Entry(_)));
        if is_file {
            self.ui.sidebar_view = SidebarView::Explorer;
        }
        debug!("Opening document {}", id);
        self.session.open(id);

        if self.layout.is_narrow() {
            self.layout.sidebar_open = false;
        }
    }

    /// Create an empty scratch document, open it, and reveal the scratchpad folder.
    pub fn create_scratch(&mut self, now_millis: u128) -> DocumentId {
        let id = self.scratch.create(now_millis);
        info!("Created scratch document {}", id);
        self.folders.expand(SCRATCHPAD_FOLDER_ID);
        self.open_document(id.clone());
        id
    }

    /// Request closing a document, applying the scratch close policy.
    pub fn close_document(&mut self, id: &DocumentId, origin: CloseOrigin) -> CloseOutcome {
        if id.is_scratch() {
            if origin == CloseOrigin::TabButton {
                debug!("Blocked tab close of scratch document {}", id);
                return CloseOutcome::Blocked(BLOCKED_SCRATCH_CLOSE);
            }
            if !self.scratch.contains(id) {
                return CloseOutcome::NotOpen;
            }
            self.show_confirm_dialog(
                CONFIRM_SCRATCH_DELETE,
                PendingAction::DeleteScratch(id.clone()),
            );
            return CloseOutcome::NeedsConfirmation;
        }

        if self.session.close(id) {
            debug!("Closed document {}", id);
            CloseOutcome::Closed
        } else {
            CloseOutcome::NotOpen
        }
    }

    /// Close the active document through the confirmation path.
    pub fn close_active_document(&mut self) -> CloseOutcome {
        match self.session.active().cloned() {
            Some(id) => self.close_document(&id, CloseOrigin::Command),
            None => CloseOutcome::NotOpen,
        }
    }

    /// Active document id, if it is a live scratch document.
    pub fn active_scratch(&self) -> Option<&DocumentId> {
        self.session
            .active()
            .filter(|id| id.is_scratch() && self.scratch.contains(id))
    }

    pub fn undo_active(&mut self) -> bool {
        match self.active_scratch().cloned() {
            Some(id) => self.scratch.undo(&id),
            None => false,
        }
    }

    pub fn redo_active(&mut self) -> bool {
        match self.active_scratch().cloned() {
            Some(id) => self.scratch.redo(&id),
            None => false,
        }
    }

    /// Content of the active scratch document, for Edit > Copy File Content.
    pub fn active_scratch_content(&self) -> Option<&str> {
        self.active_scratch()
            .and_then(|id| self.scratch.read_content(id))
    }

    /// Append text to the active scratch document as one recorded edit.
    ///
    /// Empty text is ignored so a blank clipboard leaves history untouched.
    pub fn paste_to_end(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let Some(id) = self.active_scratch().cloned() else {
            return false;
        };
        let current = self.scratch.read_content(&id).unwrap_or_default();
        let combined = format!("{current}{text}");
        self.scratch.update(&id, combined);
        true
    }

    /// Write the active scratch document to `path` and play the run script.
    pub fn run_active_scratch_to(&mut self, path: &Path, now: f64) -> Result<()> {
        let Some(id) = self.active_scratch().cloned() else {
            return Ok(());
        };
        let Some(doc) = self.scratch.get(&id) else {
            return Ok(());
        };
        export::export_scratch(path, &doc.content)?;
        let lines = scripts::run_scratch(&doc.path);
        self.play_transcript(lines, None, now);
        Ok(())
    }

    /// Whether Explorer "Save As..." has anything to write for `id`.
    pub fn can_save_scratch(&self, id: &DocumentId) -> bool {
        self.scratch
            .read_content(id)
            .is_some_and(|content| !content.is_empty())
    }

    /// Write a scratch document to `path` (Explorer "Save As...").
    pub fn save_scratch_to(&self, id: &DocumentId, path: &Path) -> Result<()> {
        match self.scratch.read_content(id) {
            Some(content) if !content.is_empty() => export::export_scratch(path, content),
            _ => Err(Error::Application(SCRATCH_EMPTY.to_string())),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Layout & Sidebar
    // ─────────────────────────────────────────────────────────────────────────

    /// Activity bar click: re-selecting the current view toggles the sidebar.
    pub fn select_sidebar_view(&mut self, view: SidebarView) {
        if self.ui.sidebar_view == view && self.layout.sidebar_open {
            self.layout.sidebar_open = false;
        } else {
            self.ui.sidebar_view = view;
            self.layout.sidebar_open = true;
        }
    }

    /// View > Toggle Side Preview. Only the about page has a preview.
    pub fn toggle_side_preview(&mut self) -> bool {
        let on_about = self
            .session
            .active()
            .is_some_and(|id| id.as_str() == ABOUT_ID);
        if on_about {
            self.layout.toggle_preview();
        }
        on_about
    }

    /// Play a transcript in the terminal overlay.
    pub fn play_transcript(&mut self, lines: Vec<String>, link: Option<String>, now: f64) {
        info!("Terminal: playing {} line(s)", lines.len());
        self.transcript.play(lines, link, now);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Settings Management
    // ─────────────────────────────────────────────────────────────────────────

    /// Update settings and mark as dirty.
    pub fn update_settings<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Settings),
    {
        f(&mut self.settings);
        self.settings_dirty = true;
    }

    #[cfg(test)]
    pub fn is_settings_dirty(&self) -> bool {
        self.settings_dirty
    }

    /// Save settings to the config file if modified. Returns `true` if saved.
    pub fn save_settings_if_dirty(&mut self) -> bool {
        if self.settings_dirty {
            if save_config_silent(&self.settings) {
                self.settings_dirty = false;
                info!("Settings saved");
                return true;
            }
            warn!("Failed to save settings");
        }
        false
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Confirmation Flow
    // ─────────────────────────────────────────────────────────────────────────

    pub fn show_confirm_dialog(&mut self, message: impl Into<String>, action: PendingAction) {
        self.ui.show_confirm_dialog = true;
        self.ui.confirm_dialog_message = message.into();
        self.ui.pending_action = Some(action);
    }

    /// Ask before leaving for the "Connection Terminated" screen.
    pub fn request_terminate_session(&mut self) {
        self.show_confirm_dialog(CONFIRM_TERMINATE_SESSION, PendingAction::TerminateSession);
    }

    /// Handle a confirmed pending action.
    pub fn handle_confirmed_action(&mut self) {
        if let Some(action) = self.ui.pending_action.take() {
            match action {
                PendingAction::DeleteScratch(id) => {
                    self.session.close(&id);
                    if self.scratch.delete(&id).is_some() {
                        info!("Deleted scratch document {}", id);
                    }
                }
                PendingAction::TerminateSession => {
                    info!("Session terminated by user");
                    self.ui.session_terminated = true;
                    self.transcript.dismiss();
                }
            }
        }
        self.ui.show_confirm_dialog = false;
        self.ui.confirm_dialog_message.clear();
    }

    /// Cancel the pending action.
    pub fn cancel_pending_action(&mut self) {
        self.ui.pending_action = None;
        self.ui.show_confirm_dialog = false;
        self.ui.confirm_dialog_message.clear();
    }

    /// "Re-establish Connection" from the terminated screen.
    pub fn reestablish_session(&mut self) {
        info!("Session re-established");
        self.ui.session_terminated = false;
    }

    /// Minimize control: hide the workspace, or leave fullscreen first.
    ///
    /// Returns `true` if the caller should exit fullscreen.
    pub fn minimize(&mut self) -> bool {
        if self.ui.fullscreen {
            self.ui.fullscreen = false;
            return true;
        }
        self.ui.workspace_hidden = !self.ui.workspace_hidden;
        false
    }

    /// Maximize control. Returns the new fullscreen flag.
    pub fn toggle_fullscreen(&mut self) -> bool {
        self.ui.fullscreen = !self.ui.fullscreen;
        self.ui.fullscreen
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dialogs & Toasts
    // ─────────────────────────────────────────────────────────────────────────

    pub fn toggle_about(&mut self) {
        self.ui.show_about = !self.ui.show_about;
    }

    /// Show an error in the modal.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.ui.error_message = message.into();
        self.ui.show_error_modal = true;
        warn!("Error shown to user: {}", self.ui.error_message);
    }

    pub fn dismiss_error(&mut self) {
        self.ui.show_error_modal = false;
        self.ui.error_message.clear();
    }

    /// Show a toast that expires `duration` seconds after `current_time`.
    pub fn show_toast(&mut self, message: impl Into<String>, current_time: f64, duration: f64) {
        self.ui.toast_message = Some(message.into());
        self.ui.toast_expires_at = Some(current_time + duration);
    }

    /// Clear the toast once it has expired.
    pub fn update_toast(&mut self, current_time: f64) {
        if let Some(expires_at) = self.ui.toast_expires_at {
            if current_time >= expires_at {
                self.clear_toast();
            }
        }
    }

    pub fn clear_toast(&mut self) {
        self.ui.toast_message = None;
        self.ui.toast_expires_at = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PROJECTS_ID;
    use tempfile::TempDir;

    struct SilentBackend;

    impl ChatBackend for SilentBackend {
        fn generate(&self, _prompt: &str) -> Result<String> {
            Err(Error::Application("offline".to_string()))
        }
    }

    fn test_state() -> AppState {
        AppState::with_backend(Settings::default(), Arc::new(SilentBackend))
    }

    fn ids(state: &AppState) -> Vec<&str> {
        state
            .session
            .open_documents()
            .iter()
            .map(|id| id.as_str())
            .collect()
    }

    #[test]
    fn test_starts_with_home_open() {
        let state = test_state();
        assert_eq!(ids(&state), vec![HOME_ID]);
        assert_eq!(state.session.active().map(|id| id.as_str()), Some(HOME_ID));
        assert!(state.layout.sidebar_open);
    }

    #[test]
    fn test_reopen_does_not_duplicate() {
        let mut state = test_state();
        state.open_document(ABOUT_ID);
        state.open_document(HOME_ID);
        assert_eq!(ids(&state), vec![HOME_ID, ABOUT_ID]);
        assert_eq!(state.session.active().map(|id| id.as_str()), Some(HOME_ID));
    }

    #[test]
    fn test_close_active_falls_back_to_last() {
        let mut state = test_state();
        state.open_document(ABOUT_ID);
        state.open_document(PROJECTS_ID);

        let outcome = state.close_document(&DocumentId::from(PROJECTS_ID), CloseOrigin::TabButton);
        assert_eq!(outcome, CloseOutcome::Closed);
        assert_eq!(ids(&state), vec![HOME_ID, ABOUT_ID]);
        assert_eq!(state.session.active().map(|id| id.as_str()), Some(ABOUT_ID));
    }

    #[test]
    fn test_tab_button_never_closes_scratch() {
        let mut state = test_state();
        let id = state.create_scratch(1_000);
        let before = ids(&state).iter().map(|s| s.to_string()).collect::<Vec<_>>();

        let outcome = state.close_document(&id, CloseOrigin::TabButton);
        assert_eq!(outcome, CloseOutcome::Blocked(BLOCKED_SCRATCH_CLOSE));
        assert_eq!(ids(&state), before);
        assert!(state.scratch.contains(&id));
        assert!(!state.ui.show_confirm_dialog);
    }

    #[test]
    fn test_declined_scratch_close_changes_nothing() {
        let mut state = test_state();
        let id = state.create_scratch(1_000);
        state.scratch.update(&id, "notes");

        let outcome = state.close_document(&id, CloseOrigin::Explorer);
        assert_eq!(outcome, CloseOutcome::NeedsConfirmation);
        assert!(state.ui.show_confirm_dialog);
        assert_eq!(state.ui.confirm_dialog_message, CONFIRM_SCRATCH_DELETE);

        state.cancel_pending_action();
        assert!(state.session.is_open(&id));
        assert!(state.session.is_active(&id));
        assert_eq!(state.scratch.read_content(&id), Some("notes"));
        assert!(state.ui.pending_action.is_none());
    }

    #[test]
    fn test_confirmed_scratch_close_deletes_document() {
        let mut state = test_state();
        state.open_document(ABOUT_ID);
        let id = state.create_scratch(1_000);
        state.scratch.update(&id, "notes");

        state.close_document(&id, CloseOrigin::Command);
        state.handle_confirmed_action();

        assert!(!state.session.is_open(&id));
        assert_eq!(state.session.active().map(|id| id.as_str()), Some(ABOUT_ID));
        assert!(state.scratch.read_content(&id).is_none());
        assert!(!state.scratch.undo(&id));
        assert!(!state.ui.show_confirm_dialog);
    }

    #[test]
    fn test_create_scratch_expands_scratchpad() {
        let mut state = test_state();
        assert!(!state.folders.is_expanded(SCRATCHPAD_FOLDER_ID));
        let id = state.create_scratch(42);
        assert!(state.folders.is_expanded(SCRATCHPAD_FOLDER_ID));
        assert!(state.session.is_active(&id));
        assert_eq!(state.ui.sidebar_view, SidebarView::Explorer);
    }

    #[test]
    fn test_undo_redo_only_on_active_scratch() {
        let mut state = test_state();
        let id = state.create_scratch(7);
        state.scratch.update(&id, "a");
        state.scratch.update(&id, "ab");

        assert!(state.undo_active());
        assert_eq!(state.scratch.read_content(&id), Some("a"));
        assert!(state.redo_active());
        assert_eq!(state.scratch.read_content(&id), Some("ab"));

        state.open_document(HOME_ID);
        assert!(!state.undo_active());
        assert_eq!(state.scratch.read_content(&id), Some("ab"));
    }

    #[test]
    fn test_paste_to_end_records_history() {
        let mut state = test_state();
        let id = state.create_scratch(7);
        state.scratch.update(&id, "hello");

        assert!(state.paste_to_end(" world"));
        assert_eq!(state.active_scratch_content(), Some("hello world"));
        assert!(state.undo_active());
        assert_eq!(state.active_scratch_content(), Some("hello"));

        assert!(!state.paste_to_end(""));
    }

    #[test]
    fn test_paste_ignored_without_active_scratch() {
        let mut state = test_state();
        assert!(!state.paste_to_end("text"));
        assert!(state.active_scratch_content().is_none());
    }

    #[test]
    fn test_run_active_scratch_exports_and_plays() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Untitled.txt");
        let mut state = test_state();
        let id = state.create_scratch(7);
        state.scratch.update(&id, "print('hi')");

        state.run_active_scratch_to(&path, 0.0).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "print('hi')");
        assert!(state.transcript.is_open());
        assert!(state.transcript.is_running());
    }

    #[test]
    fn test_save_empty_scratch_is_refused() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Untitled.txt");
        let mut state = test_state();
        let id = state.create_scratch(7);

        assert!(!state.can_save_scratch(&id));
        let err = state.save_scratch_to(&id, &path).unwrap_err();
        assert_eq!(err.to_string(), SCRATCH_EMPTY);
        assert!(!path.exists());

        state.scratch.update(&id, "draft");
        state.save_scratch_to(&id, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "draft");
    }

    #[test]
    fn test_narrow_startup_collapses() {
        let mut state = test_state();
        state.apply_startup_viewport(600.0);
        assert!(!state.layout.sidebar_open);
        assert!(state.folders.is_expanded(ROOT_FOLDER_ID));
        assert!(!state.folders.is_expanded("src"));

        state.layout.sidebar_open = true;
        state.open_document(ABOUT_ID);
        assert!(!state.layout.sidebar_open);
    }

    #[test]
    fn test_wide_startup_keeps_defaults() {
        let mut state = test_state();
        state.apply_startup_viewport(1400.0);
        assert!(state.layout.sidebar_open);
        assert!(state.folders.is_expanded("src"));
    }

    #[test]
    fn test_select_sidebar_view_toggles_on_reselect() {
        let mut state = test_state();
        state.select_sidebar_view(SidebarView::Explorer);
        assert!(!state.layout.sidebar_open);
        state.select_sidebar_view(SidebarView::Search);
        assert!(state.layout.sidebar_open);
        assert_eq!(state.ui.sidebar_view, SidebarView::Search);
    }

    #[test]
    fn test_side_preview_only_on_about() {
        let mut state = test_state();
        assert!(!state.toggle_side_preview());
        assert!(!state.layout.preview_open);

        state.open_document(ABOUT_ID);
        assert!(state.toggle_side_preview());
        assert!(state.layout.preview_open);
    }

    #[test]
    fn test_terminate_session_requires_confirmation() {
        let mut state = test_state();
        state.request_terminate_session();
        assert!(!state.ui.session_terminated);
        assert_eq!(state.ui.confirm_dialog_message, CONFIRM_TERMINATE_SESSION);

        state.handle_confirmed_action();
        assert!(state.ui.session_terminated);
        state.reestablish_session();
        assert!(!state.ui.session_terminated);
    }

    #[test]
    fn test_minimize_leaves_fullscreen_first() {
        let mut state = test_state();
        assert!(state.toggle_fullscreen());
        assert!(state.minimize());
        assert!(!state.ui.workspace_hidden);
        assert!(!state.minimize());
        assert!(state.ui.workspace_hidden);
    }

    #[test]
    fn test_toast_expires() {
        let mut state = test_state();
        state.show_toast("Link copied to clipboard!", 1.0, TOAST_DURATION);
        state.update_toast(2.0);
        assert!(state.ui.toast_message.is_some());
        state.update_toast(4.0);
        assert!(state.ui.toast_message.is_none());
    }

    #[test]
    fn test_contact_form_validation() {
        let mut form = ContactForm::default();
        form.email = "nobody".to_string();
        form.message = "hi".to_string();
        assert!(!form.submit(0.0));

        form.email = "a@b.c".to_string();
        assert!(form.submit(0.0));
        assert!(form.is_sent(1.0));
        assert!(!form.is_sent(3.5));
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
    }

    #[test]
    fn test_contact_form_needs_message() {
        let mut form = ContactForm {
            email: "a@b.c".to_string(),
            message: "   ".to_string(),
            ..Default::default()
        };
        assert!(!form.is_valid());
        form.message = "hello".to_string();
        assert!(form.is_valid());
    }

    #[test]
    fn test_transcript_cadence_comes_from_settings() {
        let settings = Settings {
            transcript_cadence_ms: 200,
            ..Settings::default()
        };
        let mut state = AppState::with_backend(settings, Arc::new(SilentBackend));
        state.transcript.play(["a", "b"], None, 0.0);
        state.transcript.tick(0.25);
        assert_eq!(state.transcript.shown().len(), 1);
        state.transcript.tick(0.45);
        assert_eq!(state.transcript.shown().len(), 2);
    }

    #[test]
    fn test_update_settings_marks_dirty() {
        let mut state = test_state();
        assert!(!state.is_settings_dirty());
        state.update_settings(|s| s.zoom_in());
        assert!(state.is_settings_dirty());
    }
}

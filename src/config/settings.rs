//! User settings and preferences for Devfolio
//!
//! This module defines the `Settings` struct that holds the persisted
//! preferences, with serde support for JSON persistence. Only preferences
//! live here; open tabs, scratch documents and live panel state stay in
//! memory for the length of a run.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Theme Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Available color themes for the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other theme, used by the activity bar toggle.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Get the display name for the theme.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Window Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Window dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub maximized: bool,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            maximized: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Panel Layout Defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Starting widths for the resizable panels.
///
/// These seed the in-memory layout at startup. Drag gestures change the live
/// layout only and are not written back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelDefaults {
    pub sidebar_width: f32,
    pub chat_width: f32,
    pub preview_width: f32,
    /// Viewport width below which opening a document hides the sidebar
    pub narrow_breakpoint: f32,
}

impl Default for PanelDefaults {
    fn default() -> Self {
        Self {
            sidebar_width: 250.0,
            chat_width: 320.0,
            preview_width: 500.0,
            narrow_breakpoint: 768.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Chat Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Settings for the chat assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
    /// Whether the chat panel is offered at all
    pub enabled: bool,
    /// Base URL of the generative language API
    pub endpoint: String,
    /// Model name used for generateContent
    pub model: String,
    /// Environment variable that holds the API key
    pub api_key_env: String,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: String::from("https://generativelanguage.googleapis.com/v1beta"),
            model: String::from("gemini-2.5-flash"),
            api_key_env: String::from("GEMINI_API_KEY"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// User preferences for the application.
///
/// Stored as `config.json`; any missing field takes its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // ─────────────────────────────────────────────────────────────────────────
    // Appearance
    // ─────────────────────────────────────────────────────────────────────────
    /// Color theme (dark or light)
    pub theme: Theme,

    /// UI zoom factor (1.0 = 100%)
    pub zoom_level: f32,

    // ─────────────────────────────────────────────────────────────────────────
    // Window & Layout
    // ─────────────────────────────────────────────────────────────────────────
    /// Last window size
    pub window_size: WindowSize,

    /// Starting widths of the sidebar, chat and preview panels
    pub panels: PanelDefaults,

    // ─────────────────────────────────────────────────────────────────────────
    // Behavior
    // ─────────────────────────────────────────────────────────────────────────
    /// Delay between terminal transcript lines in milliseconds
    pub transcript_cadence_ms: u64,

    /// Maximum undo snapshots per scratch file (0 = unlimited)
    pub max_undo_history: usize,

    /// Public address of the portfolio, used by Share Link and shortcuts
    pub portfolio_url: String,

    // ─────────────────────────────────────────────────────────────────────────
    // Chat
    // ─────────────────────────────────────────────────────────────────────────
    pub chat: ChatSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            zoom_level: 1.0,
            window_size: WindowSize::default(),
            panels: PanelDefaults::default(),
            transcript_cadence_ms: 500,
            max_undo_history: 1000,
            portfolio_url: String::from("https://suman-mandal.dev"),
            chat: ChatSettings::default(),
        }
    }
}

impl Settings {
    // ─────────────────────────────────────────────────────────────────────────
    // Validation Constants and Sanitization
    // ─────────────────────────────────────────────────────────────────────────

    /// Minimum zoom factor.
    pub const MIN_ZOOM: f32 = 0.5;
    /// Maximum zoom factor.
    pub const MAX_ZOOM: f32 = 2.0;
    /// Step used by the zoom in/out commands.
    pub const ZOOM_STEP: f32 = 0.1;
    /// Minimum window dimension.
    pub const MIN_WINDOW_SIZE: f32 = 200.0;
    /// Maximum window dimension.
    pub const MAX_WINDOW_SIZE: f32 = 10000.0;
    /// Fastest allowed transcript cadence.
    pub const MIN_TRANSCRIPT_CADENCE_MS: u64 = 50;
    /// Slowest allowed transcript cadence.
    pub const MAX_TRANSCRIPT_CADENCE_MS: u64 = 5000;

    /// Clamp hand-edited values back into range.
    pub fn sanitize(&mut self) {
        if !self.zoom_level.is_finite() {
            self.zoom_level = 1.0;
        }
        self.zoom_level = self.zoom_level.clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);

        self.window_size.width = self
            .window_size
            .width
            .clamp(Self::MIN_WINDOW_SIZE, Self::MAX_WINDOW_SIZE);
        self.window_size.height = self
            .window_size
            .height
            .clamp(Self::MIN_WINDOW_SIZE, Self::MAX_WINDOW_SIZE);

        // Panel defaults use the same ranges a drag gesture accepts
        self.panels.sidebar_width = self.panels.sidebar_width.clamp(150.0, 600.0);
        self.panels.chat_width = self.panels.chat_width.clamp(250.0, 800.0);
        self.panels.preview_width = self.panels.preview_width.max(200.0);
        self.panels.narrow_breakpoint = self.panels.narrow_breakpoint.max(0.0);

        self.transcript_cadence_ms = self.transcript_cadence_ms.clamp(
            Self::MIN_TRANSCRIPT_CADENCE_MS,
            Self::MAX_TRANSCRIPT_CADENCE_MS,
        );

        if self.chat.model.trim().is_empty() {
            self.chat.model = ChatSettings::default().model;
        }
        if self.chat.endpoint.trim().is_empty() {
            self.chat.endpoint = ChatSettings::default().endpoint;
        }
    }

    /// Create settings from JSON and sanitize them.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Zoom in by one step, clamped to the maximum.
    pub fn zoom_in(&mut self) {
        self.zoom_level = round_zoom(self.zoom_level + Self::ZOOM_STEP).min(Self::MAX_ZOOM);
    }

    /// Zoom out by one step, clamped to the minimum.
    pub fn zoom_out(&mut self) {
        self.zoom_level = round_zoom(self.zoom_level - Self::ZOOM_STEP).max(Self::MIN_ZOOM);
    }

    /// Reset zoom to 100%.
    pub fn reset_zoom(&mut self) {
        self.zoom_level = 1.0;
    }
}

/// Round to one decimal place so repeated steps land on exact tenths.
fn round_zoom(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

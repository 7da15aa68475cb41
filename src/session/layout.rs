//! Panel layout and the resize gesture
//!
//! Three panels can be resized by dragging their edge: the sidebar (left edge
//! is the activity bar), the chat panel (anchored to the right window edge)
//! and the side preview (anchored left of the chat panel). Only one drag can
//! be active at a time and any pointer release ends it.
//!
//! A computed width outside a panel's range is rejected rather than clamped,
//! so the panel keeps its last in-range width while the pointer overshoots.

use std::collections::BTreeSet;

use eframe::egui::Pos2;
use log::trace;

use crate::config::PanelDefaults;

/// Width of the fixed activity bar on the far left.
pub const ACTIVITY_BAR_WIDTH: f32 = 48.0;

/// Exclusive sidebar width range.
pub const SIDEBAR_RANGE: (f32, f32) = (150.0, 600.0);
/// Exclusive chat width range.
pub const CHAT_RANGE: (f32, f32) = (250.0, 800.0);
/// Lower bound of the preview width; the upper bound depends on the window.
pub const PREVIEW_MIN_WIDTH: f32 = 200.0;
/// Space the preview must leave for the editor next to the sidebar.
pub const PREVIEW_EDITOR_RESERVE: f32 = 100.0;

/// Chat widths used by the maximize toggle.
const CHAT_COMPACT_WIDTH: f32 = 320.0;
const CHAT_EXPANDED_WIDTH: f32 = 600.0;
const CHAT_EXPANDED_THRESHOLD: f32 = 500.0;

/// Folder ids expanded on a normal-width start.
const DEFAULT_EXPANDED: &[&str] = &["portfolio", "src", "config", "models"];

// ─────────────────────────────────────────────────────────────────────────────
// Drag Target
// ─────────────────────────────────────────────────────────────────────────────

/// The panel currently being resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragTarget {
    #[default]
    None,
    Sidebar,
    Chat,
    Preview,
}

// ─────────────────────────────────────────────────────────────────────────────
// Layout
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub sidebar_open: bool,
    pub sidebar_width: f32,
    pub chat_open: bool,
    pub chat_width: f32,
    pub preview_open: bool,
    pub preview_width: f32,
    drag: DragTarget,
    viewport_width: f32,
    narrow_breakpoint: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(&PanelDefaults::default())
    }
}

impl Layout {
    pub fn new(defaults: &PanelDefaults) -> Self {
        Self {
            sidebar_open: true,
            sidebar_width: defaults.sidebar_width,
            chat_open: false,
            chat_width: defaults.chat_width,
            preview_open: false,
            preview_width: defaults.preview_width,
            drag: DragTarget::None,
            viewport_width: 0.0,
            narrow_breakpoint: defaults.narrow_breakpoint,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Viewport
    // ─────────────────────────────────────────────────────────────────────────

    /// Record the current window width. Called once per frame.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Whether the viewport is below the narrow breakpoint.
    ///
    /// An unknown (zero) width is never narrow.
    pub fn is_narrow(&self) -> bool {
        self.viewport_width > 0.0 && self.viewport_width < self.narrow_breakpoint
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Drag Gesture
    // ─────────────────────────────────────────────────────────────────────────

    /// Start resizing `target`, replacing any drag already in progress.
    pub fn begin_drag(&mut self, target: DragTarget) {
        self.drag = target;
    }

    pub fn drag_target(&self) -> DragTarget {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag != DragTarget::None
    }

    /// Apply a pointer position to the active drag. Only the horizontal
    /// coordinate matters.
    ///
    /// Returns `true` if a width changed.
    pub fn on_pointer_move(&mut self, pointer: Pos2) -> bool {
        let x = pointer.x;
        let window = self.viewport_width;
        match self.drag {
            DragTarget::None => false,
            DragTarget::Sidebar => {
                let width = x - ACTIVITY_BAR_WIDTH;
                assign_if_within(&mut self.sidebar_width, width, SIDEBAR_RANGE)
            }
            DragTarget::Chat => {
                let width = window - x;
                assign_if_within(&mut self.chat_width, width, CHAT_RANGE)
            }
            DragTarget::Preview => {
                let right_edge = window - if self.chat_open { self.chat_width } else { 0.0 };
                let width = right_edge - x;
                let max = self.preview_max_width();
                assign_if_within(&mut self.preview_width, width, (PREVIEW_MIN_WIDTH, max))
            }
        }
    }

    /// End whatever drag is active.
    pub fn end_drag(&mut self) {
        self.drag = DragTarget::None;
    }

    /// Upper bound for the preview width in the current window.
    pub fn preview_max_width(&self) -> f32 {
        self.viewport_width - self.sidebar_width - PREVIEW_EDITOR_RESERVE
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Toggles
    // ─────────────────────────────────────────────────────────────────────────

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn toggle_chat(&mut self) {
        self.chat_open = !self.chat_open;
    }

    pub fn toggle_preview(&mut self) {
        self.preview_open = !self.preview_open;
    }

    /// Switch the chat panel between its compact and expanded widths.
    pub fn toggle_chat_maximized(&mut self) {
        self.chat_width = if self.chat_width > CHAT_EXPANDED_THRESHOLD {
            CHAT_COMPACT_WIDTH
        } else {
            CHAT_EXPANDED_WIDTH
        };
    }

    pub fn is_chat_maximized(&self) -> bool {
        self.chat_width > CHAT_EXPANDED_THRESHOLD
    }
}

/// Store `value` only if it lies strictly inside `(min, max)`.
fn assign_if_within(slot: &mut f32, value: f32, (min, max): (f32, f32)) -> bool {
    if value > min && value < max {
        trace!("Panel width {} -> {}", slot, value);
        *slot = value;
        true
    } else {
        false
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Expanded Folders
// ─────────────────────────────────────────────────────────────────────────────

/// Folder ids currently shown expanded in the explorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedFolders {
    ids: BTreeSet<String>,
}

impl Default for ExpandedFolders {
    fn default() -> Self {
        Self {
            ids: DEFAULT_EXPANDED.iter().map(|id| id.to_string()).collect(),
        }
    }
}

impl ExpandedFolders {
    pub fn is_expanded(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn expand(&mut self, id: &str) {
        self.ids.insert(id.to_string());
    }

    /// Collapse everything except `keep`.
    pub fn collapse_to(&mut self, keep: &[&str]) {
        self.ids = keep.iter().map(|id| id.to_string()).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    fn layout(window: f32) -> Layout {
        let mut layout = Layout::default();
        layout.set_viewport_width(window);
        layout
    }

    #[test]
    fn test_defaults() {
        let layout = Layout::default();
        assert!(layout.sidebar_open);
        assert!(!layout.chat_open);
        assert!(!layout.preview_open);
        assert_eq!(layout.sidebar_width, 250.0);
        assert_eq!(layout.chat_width, 320.0);
        assert_eq!(layout.preview_width, 500.0);
        assert_eq!(layout.drag_target(), DragTarget::None);
    }

    #[test]
    fn test_sidebar_drag_in_range() {
        let mut layout = layout(1280.0);
        layout.begin_drag(DragTarget::Sidebar);
        assert!(layout.on_pointer_move(pos2(348.0, 10.0)));
        assert_eq!(layout.sidebar_width, 300.0);
    }

    #[test]
    fn test_drag_ignores_vertical_position() {
        let mut layout = layout(1280.0);
        layout.begin_drag(DragTarget::Sidebar);
        assert!(layout.on_pointer_move(pos2(298.0, 0.0)));
        assert_eq!(layout.sidebar_width, 250.0);
        assert!(layout.on_pointer_move(pos2(298.0, 640.0)));
        assert_eq!(layout.sidebar_width, 250.0);
    }

    #[test]
    fn test_sidebar_drag_out_of_range_is_sticky() {
        let mut layout = layout(1280.0);
        layout.sidebar_width = 300.0;
        layout.begin_drag(DragTarget::Sidebar);

        // 748 - 48 = 700, above the maximum
        assert!(!layout.on_pointer_move(pos2(748.0, 0.0)));
        assert_eq!(layout.sidebar_width, 300.0);

        // 100 - 48 = 52, below the minimum
        assert!(!layout.on_pointer_move(pos2(100.0, 0.0)));
        assert_eq!(layout.sidebar_width, 300.0);
    }

    #[test]
    fn test_range_bounds_are_exclusive() {
        let mut layout = layout(1280.0);
        layout.begin_drag(DragTarget::Sidebar);
        assert!(!layout.on_pointer_move(pos2(150.0 + ACTIVITY_BAR_WIDTH, 0.0)));
        assert!(!layout.on_pointer_move(pos2(600.0 + ACTIVITY_BAR_WIDTH, 0.0)));
        assert_eq!(layout.sidebar_width, 250.0);
    }

    #[test]
    fn test_chat_drag_measures_from_right_edge() {
        let mut layout = layout(1280.0);
        layout.begin_drag(DragTarget::Chat);
        assert!(layout.on_pointer_move(pos2(880.0, 0.0)));
        assert_eq!(layout.chat_width, 400.0);

        // 1280 - 200 = 1080, too wide
        assert!(!layout.on_pointer_move(pos2(200.0, 0.0)));
        assert_eq!(layout.chat_width, 400.0);
    }

    #[test]
    fn test_preview_drag_accounts_for_open_chat() {
        let mut layout = layout(1600.0);
        layout.chat_open = true;
        layout.chat_width = 400.0;
        layout.begin_drag(DragTarget::Preview);

        assert!(layout.on_pointer_move(pos2(900.0, 0.0)));
        assert_eq!(layout.preview_width, 300.0);

        layout.chat_open = false;
        assert!(layout.on_pointer_move(pos2(900.0, 0.0)));
        assert_eq!(layout.preview_width, 700.0);
    }

    #[test]
    fn test_preview_max_depends_on_sidebar() {
        let mut layout = layout(1000.0);
        layout.sidebar_width = 250.0;
        layout.preview_width = 400.0;
        layout.begin_drag(DragTarget::Preview);

        // max is 1000 - 250 - 100 = 650; 1000 - 300 = 700 is rejected
        assert_eq!(layout.preview_max_width(), 650.0);
        assert!(!layout.on_pointer_move(pos2(300.0, 0.0)));
        assert_eq!(layout.preview_width, 400.0);
    }

    #[test]
    fn test_move_without_drag_is_noop() {
        let mut layout = layout(1280.0);
        let before = layout.clone();
        assert!(!layout.on_pointer_move(pos2(400.0, 0.0)));
        assert_eq!(layout, before);
    }

    #[test]
    fn test_begin_drag_replaces_previous() {
        let mut layout = layout(1280.0);
        layout.begin_drag(DragTarget::Sidebar);
        layout.begin_drag(DragTarget::Chat);
        assert_eq!(layout.drag_target(), DragTarget::Chat);

        // Only the chat width moves now
        layout.on_pointer_move(pos2(880.0, 0.0));
        assert_eq!(layout.sidebar_width, 250.0);
        assert_eq!(layout.chat_width, 400.0);

        layout.end_drag();
        assert!(!layout.is_dragging());
        layout.end_drag();
        assert_eq!(layout.drag_target(), DragTarget::None);
    }

    #[test]
    fn test_toggles_are_independent_of_drag() {
        let mut layout = layout(1280.0);
        layout.begin_drag(DragTarget::Sidebar);
        layout.toggle_sidebar();
        layout.toggle_chat();
        layout.toggle_preview();
        assert!(!layout.sidebar_open);
        assert!(layout.chat_open);
        assert!(layout.preview_open);
        assert_eq!(layout.drag_target(), DragTarget::Sidebar);
        assert_eq!(layout.sidebar_width, 250.0);
    }

    #[test]
    fn test_toggle_chat_maximized() {
        let mut layout = Layout::default();
        layout.toggle_chat_maximized();
        assert_eq!(layout.chat_width, 600.0);
        assert!(layout.is_chat_maximized());
        layout.toggle_chat_maximized();
        assert_eq!(layout.chat_width, 320.0);
    }

    #[test]
    fn test_is_narrow() {
        let mut layout = Layout::default();
        assert!(!layout.is_narrow());
        layout.set_viewport_width(600.0);
        assert!(layout.is_narrow());
        layout.set_viewport_width(768.0);
        assert!(!layout.is_narrow());
    }

    #[test]
    fn test_expanded_folders() {
        let mut folders = ExpandedFolders::default();
        assert!(folders.is_expanded("portfolio"));
        assert!(folders.is_expanded("src"));
        assert!(!folders.is_expanded("scratchpad"));

        folders.toggle("src");
        assert!(!folders.is_expanded("src"));
        folders.toggle("src");
        assert!(folders.is_expanded("src"));

        folders.collapse_to(&["portfolio"]);
        assert!(folders.is_expanded("portfolio"));
        assert!(!folders.is_expanded("models"));
    }
}

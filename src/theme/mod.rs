//! Theme System
//!
//! Two palettes modelled on a code editor's default dark and light themes.
//! `ThemeColors` carries every colour the chrome and the views paint with;
//! `visuals.rs` turns a palette into egui `Visuals`, and `ThemeManager`
//! switches between them at runtime.
//!
//! # Color Categories
//!
//! - **Base colors**: editor, sidebar, activity bar and tab backgrounds, borders
//! - **Text colors**: primary and secondary
//! - **Syntax colors**: keywords, functions, numbers, strings, comments
//! - **UI colors**: accents and feedback colours
//! - **Terminal colors**: the transcript overlay

pub mod manager;
pub mod visuals;

pub use manager::ThemeManager;

use eframe::egui::Color32;

use crate::config::Theme;

// ─────────────────────────────────────────────────────────────────────────────
// Theme Colors
// ─────────────────────────────────────────────────────────────────────────────

/// Every colour used by the workspace.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    pub base: BaseColors,
    pub text: TextColors,
    pub syntax: SyntaxColors,
    pub ui: UiColors,
    pub terminal: TerminalColors,
}

impl ThemeColors {
    pub fn from_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }

    pub fn light() -> Self {
        Self {
            base: BaseColors::light(),
            text: TextColors::light(),
            syntax: SyntaxColors::light(),
            ui: UiColors::light(),
            terminal: TerminalColors::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            base: BaseColors::dark(),
            text: TextColors::dark(),
            syntax: SyntaxColors::dark(),
            ui: UiColors::dark(),
            terminal: TerminalColors::dark(),
        }
    }

    /// Check if this is a dark palette.
    pub fn is_dark(&self) -> bool {
        self.base.main.r() < 128
    }

    pub fn to_visuals(&self) -> eframe::egui::Visuals {
        visuals::build_visuals(self)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Base Colors
// ─────────────────────────────────────────────────────────────────────────────

/// Background and border colours of the workspace chrome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseColors {
    /// Editor area
    pub main: Color32,
    /// Explorer and chat panels
    pub sidebar: Color32,
    /// Activity bar and menu bar
    pub activity: Color32,
    /// Inactive tab and tab strip
    pub tab: Color32,
    pub tab_active: Color32,
    pub border: Color32,
    pub selection: Color32,
    pub scrollbar: Color32,
}

impl BaseColors {
    pub fn light() -> Self {
        Self {
            main: Color32::from_rgb(0xff, 0xff, 0xff),
            sidebar: Color32::from_rgb(0xf3, 0xf3, 0xf3),
            activity: Color32::from_rgb(0xe8, 0xe8, 0xe8),
            tab: Color32::from_rgb(0xec, 0xec, 0xec),
            tab_active: Color32::from_rgb(0xff, 0xff, 0xff),
            border: Color32::from_rgb(0xe1, 0xe4, 0xe8),
            selection: Color32::from_rgb(0xc8, 0xc8, 0xfa),
            scrollbar: Color32::from_rgb(0xd1, 0xd5, 0xda),
        }
    }

    pub fn dark() -> Self {
        Self {
            main: Color32::from_rgb(0x1e, 0x1e, 0x1e),
            sidebar: Color32::from_rgb(0x25, 0x25, 0x26),
            activity: Color32::from_rgb(0x33, 0x33, 0x33),
            tab: Color32::from_rgb(0x2d, 0x2d, 0x2d),
            tab_active: Color32::from_rgb(0x1e, 0x1e, 0x1e),
            border: Color32::from_rgb(0x3e, 0x3e, 0x42),
            selection: Color32::from_rgb(0x26, 0x4f, 0x78),
            scrollbar: Color32::from_rgb(0x42, 0x42, 0x42),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Text Colors
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextColors {
    pub primary: Color32,
    /// Labels, hints, inactive tabs
    pub secondary: Color32,
}

impl TextColors {
    pub fn light() -> Self {
        Self {
            primary: Color32::from_rgb(0x24, 0x29, 0x2e),
            secondary: Color32::from_rgb(0x6a, 0x73, 0x7d),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: Color32::from_rgb(0xd4, 0xd4, 0xd4),
            secondary: Color32::from_rgb(0x85, 0x85, 0x85),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Syntax Colors
// ─────────────────────────────────────────────────────────────────────────────

/// Colours for the hand-styled code fragments in the views.
///
/// File bodies are highlighted by syntect instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntaxColors {
    pub keyword: Color32,
    pub function: Color32,
    pub number: Color32,
    pub string: Color32,
    pub comment: Color32,
}

impl SyntaxColors {
    pub fn light() -> Self {
        Self {
            keyword: Color32::from_rgb(0xd7, 0x3a, 0x49),
            function: Color32::from_rgb(0x6f, 0x42, 0xc1),
            number: Color32::from_rgb(0x00, 0x5c, 0xc5),
            string: Color32::from_rgb(0x03, 0x2f, 0x62),
            comment: Color32::from_rgb(0x6a, 0x73, 0x7d),
        }
    }

    pub fn dark() -> Self {
        Self {
            keyword: Color32::from_rgb(0x56, 0x9c, 0xd6),
            function: Color32::from_rgb(0xdc, 0xdc, 0xaa),
            number: Color32::from_rgb(0xb5, 0xce, 0xa8),
            string: Color32::from_rgb(0xce, 0x91, 0x78),
            comment: Color32::from_rgb(0x6a, 0x99, 0x55),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// UI Colors
// ─────────────────────────────────────────────────────────────────────────────

/// Accents and feedback colours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiColors {
    pub accent: Color32,
    pub accent_secondary: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub info: Color32,
}

impl UiColors {
    pub fn light() -> Self {
        Self {
            accent: Color32::from_rgb(0x00, 0x5c, 0xc5),
            accent_secondary: Color32::from_rgb(0xd7, 0x3a, 0x49),
            success: Color32::from_rgb(40, 167, 69),
            warning: Color32::from_rgb(0xb0, 0x88, 0x00),
            error: Color32::from_rgb(220, 53, 69),
            info: Color32::from_rgb(0x03, 0x66, 0xd6),
        }
    }

    pub fn dark() -> Self {
        Self {
            accent: Color32::from_rgb(0x4e, 0xc9, 0xb0),
            accent_secondary: Color32::from_rgb(0xce, 0x91, 0x78),
            success: Color32::from_rgb(0x4a, 0xde, 0x80),
            warning: Color32::from_rgb(0xfa, 0xcc, 0x15),
            error: Color32::from_rgb(0xf8, 0x71, 0x71),
            info: Color32::from_rgb(0x60, 0xa5, 0xfa),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Terminal Colors
// ─────────────────────────────────────────────────────────────────────────────

/// The transcript overlay stays dark in both themes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalColors {
    pub background: Color32,
    pub text: Color32,
}

impl TerminalColors {
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(0x1e, 0x1e, 0x1e),
            text: Color32::from_rgb(0xf0, 0xf0, 0xf0),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(0x0c, 0x0c, 0x0c),
            text: Color32::from_rgb(0xcc, 0xcc, 0xcc),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_colors_from_theme() {
        assert!(ThemeColors::from_theme(Theme::Dark).is_dark());
        assert!(!ThemeColors::from_theme(Theme::Light).is_dark());
    }

    #[test]
    fn test_dark_palette_values() {
        let colors = ThemeColors::dark();
        assert_eq!(colors.base.main, Color32::from_rgb(30, 30, 30));
        assert_eq!(colors.ui.accent, Color32::from_rgb(0x4e, 0xc9, 0xb0));
        assert_eq!(colors.terminal.background, Color32::from_rgb(12, 12, 12));
    }

    #[test]
    fn test_text_contrast() {
        let dark = ThemeColors::dark();
        assert!(dark.text.primary.r() > dark.base.main.r());

        let light = ThemeColors::light();
        assert!(light.text.primary.r() < light.base.main.r());
    }

    #[test]
    fn test_terminal_is_dark_in_both_themes() {
        assert!(ThemeColors::light().terminal.background.r() < 64);
        assert!(ThemeColors::dark().terminal.background.r() < 64);
    }

    #[test]
    fn test_to_visuals_matches_mode() {
        assert!(ThemeColors::dark().to_visuals().dark_mode);
        assert!(!ThemeColors::light().to_visuals().dark_mode);
    }
}

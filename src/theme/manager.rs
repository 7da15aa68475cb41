//! Runtime theme switching.

use eframe::egui::Context;
use log::{debug, info};

use super::ThemeColors;
use crate::config::Theme;

/// Current theme plus a dirty flag; visuals are pushed to egui lazily.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    current_theme: Theme,
    colors: ThemeColors,
    needs_apply: bool,
}

impl ThemeManager {
    pub fn new(theme: Theme) -> Self {
        debug!("Starting with {:?} theme", theme);
        Self {
            current_theme: theme,
            colors: ThemeColors::from_theme(theme),
            needs_apply: true,
        }
    }

    pub fn current_theme(&self) -> Theme {
        self.current_theme
    }

    /// Takes effect on the next `apply_if_needed`.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.current_theme == theme {
            return;
        }
        info!("Switching theme {:?} -> {:?}", self.current_theme, theme);
        self.current_theme = theme;
        self.colors = ThemeColors::from_theme(theme);
        self.needs_apply = true;
    }

    pub fn toggle(&mut self) -> Theme {
        self.set_theme(self.current_theme.toggled());
        self.current_theme
    }

    pub fn needs_apply(&self) -> bool {
        self.needs_apply
    }

    /// Push the palette's visuals to `ctx` if the theme changed since the
    /// last call. Returns whether anything was applied.
    pub fn apply_if_needed(&mut self, ctx: &Context) -> bool {
        if !self.needs_apply {
            return false;
        }
        ctx.set_visuals(self.colors.to_visuals());
        self.needs_apply = false;
        true
    }

    pub fn colors(&self) -> &ThemeColors {
        &self.colors
    }

    pub fn is_dark(&self) -> bool {
        self.current_theme == Theme::Dark
    }

    /// Activity bar glyph for the theme toggle.
    pub fn icon(&self) -> &'static str {
        if self.is_dark() {
            "🌙"
        } else {
            "☀"
        }
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_manager_needs_apply() {
        let manager = ThemeManager::new(Theme::Light);
        assert_eq!(manager.current_theme(), Theme::Light);
        assert!(manager.needs_apply());
        assert!(!manager.colors().is_dark());
    }

    #[test]
    fn test_default_is_dark() {
        let manager = ThemeManager::default();
        assert_eq!(manager.current_theme(), Theme::Dark);
        assert!(manager.is_dark());
    }

    #[test]
    fn test_set_same_theme_does_not_reapply() {
        let mut manager = ThemeManager::new(Theme::Dark);
        manager.needs_apply = false;
        manager.set_theme(Theme::Dark);
        assert!(!manager.needs_apply());
    }

    #[test]
    fn test_toggle_swaps_palette() {
        let mut manager = ThemeManager::new(Theme::Dark);
        manager.needs_apply = false;

        assert_eq!(manager.toggle(), Theme::Light);
        assert!(manager.needs_apply());
        assert!(!manager.colors().is_dark());
        assert_eq!(manager.icon(), "☀");

        assert_eq!(manager.toggle(), Theme::Dark);
        assert!(manager.colors().is_dark());
    }

    #[test]
    fn test_apply_clears_flag() {
        let ctx = Context::default();
        let mut manager = ThemeManager::new(Theme::Light);
        assert!(manager.apply_if_needed(&ctx));
        assert!(!manager.apply_if_needed(&ctx));
        assert!(!ctx.style().visuals.dark_mode);
    }
}

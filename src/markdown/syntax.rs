//! Syntax Highlighting
//!
//! Source views (about_me.py, experience.tsx, projects.json, skills.yaml) and
//! fenced code blocks inside blog posts are coloured with syntect.
//!
//! Loading syntect's syntax and theme sets is slow, so one highlighter is
//! built lazily and shared for the life of the process. Highlighted output
//! for the static bodies is cached per (key, dark mode) in [`HighlightCache`].

use std::collections::HashMap;
use std::sync::OnceLock;

use eframe::egui::{Color32, FontId, RichText};
use log::{debug, warn};
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Style, Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Syntect theme used in dark mode
pub const DARK_THEME: &str = "base16-ocean.dark";

/// Syntect theme used in light mode
pub const LIGHT_THEME: &str = "InspiredGitHub";

// ─────────────────────────────────────────────────────────────────────────────
// Highlighted Output
// ─────────────────────────────────────────────────────────────────────────────

/// A run of text in one colour and style.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightedSegment {
    pub text: String,
    pub foreground: Color32,
    pub bold: bool,
    pub italic: bool,
}

impl HighlightedSegment {
    pub fn new(text: impl Into<String>, foreground: Color32) -> Self {
        Self {
            text: text.into(),
            foreground,
            bold: false,
            italic: false,
        }
    }

    /// Monospace rich text for this segment.
    pub fn to_rich_text(&self, font_size: f32) -> RichText {
        let mut rich_text = RichText::new(self.text.trim_end_matches('\n'))
            .color(self.foreground)
            .font(FontId::monospace(font_size));
        if self.bold {
            rich_text = rich_text.strong();
        }
        if self.italic {
            rich_text = rich_text.italics();
        }
        rich_text
    }
}

/// One source line as coloured segments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HighlightedLine {
    pub segments: Vec<HighlightedSegment>,
}

impl HighlightedLine {
    pub fn plain(text: &str, color: Color32) -> Self {
        Self {
            segments: vec![HighlightedSegment::new(text, color)],
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Syntax Highlighter
// ─────────────────────────────────────────────────────────────────────────────

pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    /// Used if a named theme is missing from the set
    fallback_theme: Theme,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        debug!("Loading syntect syntax and theme sets");
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let theme_set = ThemeSet::load_defaults();
        debug!(
            "Loaded {} syntaxes and {} themes",
            syntax_set.syntaxes().len(),
            theme_set.themes.len()
        );
        Self {
            syntax_set,
            theme_set,
            fallback_theme: Theme::default(),
        }
    }

    /// The syntect theme for dark or light mode.
    pub fn theme_for_mode(&self, dark_mode: bool) -> &Theme {
        let name = if dark_mode { DARK_THEME } else { LIGHT_THEME };
        self.theme_set
            .themes
            .get(name)
            .unwrap_or(&self.fallback_theme)
    }

    /// Highlight `code` as `language`.
    ///
    /// Unknown languages come back as plain lines in the theme's foreground.
    pub fn highlight(&self, code: &str, language: &str, dark_mode: bool) -> Vec<HighlightedLine> {
        let theme = self.theme_for_mode(dark_mode);
        let default_color = theme
            .settings
            .foreground
            .map(syntect_to_egui_color)
            .unwrap_or(Color32::GRAY);

        let Some(syntax) = self.find_syntax_for_language(language) else {
            debug!("No syntax found for language: {}", language);
            return code
                .lines()
                .map(|line| HighlightedLine::plain(line, default_color))
                .collect();
        };

        let mut highlighter = HighlightLines::new(syntax, theme);
        LinesWithEndings::from(code)
            .map(|line| match highlighter.highlight_line(line, &self.syntax_set) {
                Ok(ranges) => HighlightedLine {
                    segments: ranges
                        .into_iter()
                        .map(|(style, text)| style_to_segment(style, text))
                        .collect(),
                },
                Err(e) => {
                    warn!("Failed to highlight line: {}", e);
                    HighlightedLine::plain(line, default_color)
                }
            })
            .collect()
    }

    /// Resolve a language id or file extension to a syntax.
    ///
    /// TypeScript falls back to JavaScript since syntect's bundled set has no
    /// TypeScript grammar.
    fn find_syntax_for_language(&self, language: &str) -> Option<&SyntaxReference> {
        if language.is_empty() {
            return None;
        }
        let lang_lower = language.to_lowercase();
        let candidates: &[&str] = match lang_lower.as_str() {
            "python" | "py" => &["py"],
            "typescript" | "ts" => &["ts", "js"],
            "tsx" => &["tsx", "ts", "jsx", "js"],
            "javascript" | "js" | "jsx" => &["js"],
            "json" => &["json"],
            "yaml" | "yml" => &["yaml"],
            "rust" | "rs" => &["rs"],
            "shell" | "sh" | "bash" => &["sh"],
            "markdown" | "md" => &["md"],
            "sql" => &["sql"],
            "cpp" | "c++" => &["cpp"],
            _ => &[],
        };

        candidates
            .iter()
            .find_map(|ext| self.syntax_set.find_syntax_by_extension(ext))
            .or_else(|| self.syntax_set.find_syntax_by_extension(&lang_lower))
            .or_else(|| {
                self.syntax_set
                    .syntaxes()
                    .iter()
                    .find(|syntax| syntax.name.to_lowercase() == lang_lower)
            })
    }
}

/// syntect RGBA to egui.
pub fn syntect_to_egui_color(color: syntect::highlighting::Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

fn style_to_segment(style: Style, text: &str) -> HighlightedSegment {
    HighlightedSegment {
        text: text.to_string(),
        foreground: syntect_to_egui_color(style.foreground),
        bold: style.font_style.contains(FontStyle::BOLD),
        italic: style.font_style.contains(FontStyle::ITALIC),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Global Instance
// ─────────────────────────────────────────────────────────────────────────────

static HIGHLIGHTER: OnceLock<SyntaxHighlighter> = OnceLock::new();

/// Get or create the shared syntax highlighter.
pub fn get_highlighter() -> &'static SyntaxHighlighter {
    HIGHLIGHTER.get_or_init(SyntaxHighlighter::new)
}

/// Highlight code with the shared highlighter.
pub fn highlight_code(code: &str, language: &str, dark_mode: bool) -> Vec<HighlightedLine> {
    get_highlighter().highlight(code, language, dark_mode)
}

// ─────────────────────────────────────────────────────────────────────────────
// Cache
// ─────────────────────────────────────────────────────────────────────────────

/// Highlighted bodies keyed by a caller-chosen key and the mode.
#[derive(Debug, Default)]
pub struct HighlightCache {
    entries: HashMap<(String, bool), Vec<HighlightedLine>>,
}

impl HighlightCache {
    /// Highlighted lines for `code`, computing them on first use.
    ///
    /// `key` must change whenever `code` does.
    pub fn get_or_highlight(
        &mut self,
        key: &str,
        code: &str,
        language: &str,
        dark_mode: bool,
    ) -> &[HighlightedLine] {
        self.entries
            .entry((key.to_string(), dark_mode))
            .or_insert_with(|| highlight_code(code, language, dark_mode))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_exist() {
        let highlighter = get_highlighter();
        assert!(highlighter.theme_set.themes.contains_key(DARK_THEME));
        assert!(highlighter.theme_set.themes.contains_key(LIGHT_THEME));
    }

    #[test]
    fn test_highlight_python_body() {
        let code = crate::catalog::content::ABOUT_ME_PY;
        let lines = highlight_code(code, "python", true);
        assert_eq!(lines.len(), code.lines().count());
        assert!(lines.iter().any(|l| l.segments.len() > 1));
    }

    #[test]
    fn test_structured_languages_resolve() {
        let highlighter = get_highlighter();
        for language in ["python", "json", "yaml", "tsx", "ts", "js"] {
            assert!(
                highlighter.find_syntax_for_language(language).is_some(),
                "no syntax for {}",
                language
            );
        }
    }

    #[test]
    fn test_unknown_language_is_plain() {
        let lines = highlight_code("one\ntwo", "nosuchlang", false);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].segments.len(), 1);
        assert_eq!(lines[0].segments[0].text, "one");
    }

    #[test]
    fn test_empty_code() {
        assert!(highlight_code("", "python", true).is_empty());
    }

    #[test]
    fn test_cache_reuses_entries() {
        let mut cache = HighlightCache::default();
        cache.get_or_highlight("skills", "a: 1\n", "yaml", true);
        cache.get_or_highlight("skills", "a: 1\n", "yaml", true);
        assert_eq!(cache.len(), 1);
        cache.get_or_highlight("skills", "a: 1\n", "yaml", false);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_syntect_to_egui_color() {
        let color = syntect_to_egui_color(syntect::highlighting::Color {
            r: 255,
            g: 128,
            b: 64,
            a: 255,
        });
        assert_eq!(color, Color32::from_rgb(255, 128, 64));
    }
}

//! Quick Open with fuzzy search.
//!
//! A Ctrl+P overlay listing every catalog file, blog post and scratch
//! document. Typing narrows the list with the skim fuzzy matcher.

use eframe::egui::{self, Color32, Key, RichText, Sense};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::catalog::{Catalog, EntryKind};
use crate::session::{DocumentId, ScratchStore};
use crate::theme::ThemeColors;

/// Maximum number of results to show.
const MAX_RESULTS: usize = 15;

/// One row the quick switcher can open.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickOpenEntry {
    pub id: DocumentId,
    pub name: String,
    /// Path or section shown after the name
    pub detail: String,
    pub icon: &'static str,
}

impl QuickOpenEntry {
    /// Every openable document: catalog files, then blogs, then scratch docs.
    pub fn collect(catalog: &Catalog, scratch: &ScratchStore) -> Vec<Self> {
        let files = catalog.list_all().into_iter().map(|entry| Self {
            id: entry.id.into(),
            name: entry.name.to_string(),
            detail: entry.path.to_string(),
            icon: entry.kind.icon(),
        });
        let blogs = catalog.blogs().iter().map(|post| Self {
            id: post.id.into(),
            name: post.title.to_string(),
            detail: "blogs".to_string(),
            icon: EntryKind::Markdown.icon(),
        });
        let docs = scratch.documents().iter().map(|doc| Self {
            id: doc.id.clone(),
            name: doc.name.clone(),
            detail: doc.path.clone(),
            icon: EntryKind::Text.icon(),
        });
        files.chain(blogs).chain(docs).collect()
    }

    fn haystack(&self) -> String {
        format!("{} {}", self.name, self.detail)
    }
}

/// Quick switcher state.
pub struct QuickSwitcher {
    is_open: bool,
    query: String,
    selected_index: usize,
    matcher: SkimMatcherV2,
}

impl Default for QuickSwitcher {
    fn default() -> Self {
        Self::new()
    }
}

impl QuickSwitcher {
    pub fn new() -> Self {
        Self {
            is_open: false,
            query: String::new(),
            selected_index: 0,
            matcher: SkimMatcherV2::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
        self.query.clear();
        self.selected_index = 0;
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.query.clear();
        self.selected_index = 0;
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Entries matching the current query, best first.
    fn filter<'a>(&self, entries: &'a [QuickOpenEntry]) -> Vec<&'a QuickOpenEntry> {
        if self.query.trim().is_empty() {
            return entries.iter().take(MAX_RESULTS).collect();
        }

        let mut scored: Vec<(&QuickOpenEntry, i64)> = entries
            .iter()
            .filter_map(|entry| {
                self.matcher
                    .fuzzy_match(&entry.haystack(), self.query.trim())
                    .map(|score| (entry, score))
            })
            .collect();
        // Stable sort keeps catalog order among equal scores
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored
            .into_iter()
            .take(MAX_RESULTS)
            .map(|(entry, _)| entry)
            .collect()
    }

    /// Render the overlay. Returns the id the user picked, if any.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        entries: &[QuickOpenEntry],
        colors: &ThemeColors,
    ) -> Option<DocumentId> {
        if !self.is_open {
            return None;
        }

        let results = self.filter(entries);
        let mut selected = None;
        let mut closed = false;

        let selected_bg = colors.base.selection;
        let hover_bg = colors.base.selection.gamma_multiply(0.5);

        ctx.input(|i| {
            if i.key_pressed(Key::Escape) {
                closed = true;
            }
            if i.key_pressed(Key::ArrowDown) && !results.is_empty() {
                self.selected_index = (self.selected_index + 1) % results.len();
            }
            if i.key_pressed(Key::ArrowUp) && !results.is_empty() {
                self.selected_index = if self.selected_index == 0 {
                    results.len() - 1
                } else {
                    self.selected_index - 1
                };
            }
            if i.key_pressed(Key::Enter) {
                if let Some(result) = results.get(self.selected_index) {
                    selected = Some(result.id.clone());
                }
            }
        });

        egui::Area::new(egui::Id::new("quick_switcher_overlay"))
            .anchor(egui::Align2::CENTER_TOP, [0.0, 80.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(colors.base.sidebar)
                    .stroke(egui::Stroke::new(1.0, colors.base.border))
                    .rounding(6.0)
                    .shadow(egui::epaint::Shadow {
                        offset: [0.0, 4.0].into(),
                        blur: 12.0,
                        spread: 0.0,
                        color: Color32::from_black_alpha(60),
                    })
                    .show(ui, |ui| {
                        ui.set_width(500.0);
                        ui.add_space(8.0);

                        ui.horizontal(|ui| {
                            ui.add_space(12.0);
                            ui.label(RichText::new("🔍").size(14.0));
                            let response = ui.add(
                                egui::TextEdit::singleline(&mut self.query)
                                    .hint_text("Search files by name")
                                    .frame(false)
                                    .desired_width(450.0),
                            );
                            response.request_focus();
                            if response.changed() {
                                self.selected_index = 0;
                            }
                        });

                        ui.add_space(4.0);
                        ui.separator();

                        if results.is_empty() {
                            ui.horizontal(|ui| {
                                ui.add_space(16.0);
                                ui.label(
                                    RichText::new("No matching files")
                                        .color(colors.text.secondary)
                                        .italics(),
                                );
                            });
                        }

                        for (idx, result) in results.iter().enumerate() {
                            let is_selected = idx == self.selected_index;
                            let response = ui
                                .horizontal(|ui| {
                                    let row = ui.interact(
                                        ui.available_rect_before_wrap(),
                                        ui.id().with(idx),
                                        Sense::click(),
                                    );
                                    let rect = row.rect.expand2(egui::vec2(8.0, 2.0));
                                    if is_selected {
                                        ui.painter().rect_filled(rect, 4.0, selected_bg);
                                    } else if row.hovered() {
                                        ui.painter().rect_filled(rect, 4.0, hover_bg);
                                    }

                                    ui.add_space(16.0);
                                    ui.label(
                                        RichText::new(result.icon)
                                            .size(12.0)
                                            .color(colors.ui.accent),
                                    );
                                    ui.label(
                                        RichText::new(&result.name)
                                            .color(colors.text.primary)
                                            .strong(),
                                    );
                                    ui.label(
                                        RichText::new(&result.detail)
                                            .color(colors.text.secondary)
                                            .small(),
                                    );
                                    row
                                })
                                .inner;

                            if response.clicked() {
                                selected = Some(result.id.clone());
                            }
                        }

                        ui.separator();
                        ui.horizontal(|ui| {
                            ui.add_space(12.0);
                            ui.label(
                                RichText::new("↑↓ Navigate  ⏎ Open  Esc Close")
                                    .color(colors.text.secondary)
                                    .small(),
                            );
                        });
                        ui.add_space(6.0);
                    });
            });

        if selected.is_some() || closed {
            self.close();
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<QuickOpenEntry> {
        let mut scratch = ScratchStore::new(10);
        scratch.create(1_700_000_000_000);
        QuickOpenEntry::collect(&Catalog::new(), &scratch)
    }

    #[test]
    fn test_collect_covers_files_blogs_and_scratch() {
        let entries = entries();
        assert!(entries.iter().any(|e| e.id.as_str() == "about"));
        assert!(entries.iter().any(|e| e.id.as_str() == "blog1"));
        assert!(entries.iter().any(|e| e.id.is_scratch()));
        assert!(entries.last().is_some_and(|e| e.id.is_scratch()));
    }

    #[test]
    fn test_toggle_resets_query() {
        let mut switcher = QuickSwitcher::new();
        switcher.toggle();
        assert!(switcher.is_open());
        switcher.query = "abc".to_string();
        switcher.toggle();
        assert!(!switcher.is_open());
        assert!(switcher.query.is_empty());
    }

    #[test]
    fn test_empty_query_lists_in_order() {
        let entries = entries();
        let switcher = QuickSwitcher::new();
        let results = switcher.filter(&entries);
        assert_eq!(results.len(), entries.len().min(MAX_RESULTS));
        assert_eq!(results[0], &entries[0]);
    }

    #[test]
    fn test_fuzzy_query_ranks_match_first() {
        let entries = entries();
        let mut switcher = QuickSwitcher::new();
        switcher.query = "about_me".to_string();
        let results = switcher.filter(&entries);
        assert_eq!(results[0].id.as_str(), "about");
    }

    #[test]
    fn test_unmatched_query_is_empty() {
        let entries = entries();
        let mut switcher = QuickSwitcher::new();
        switcher.query = "zzzzqqqq".to_string();
        assert!(switcher.filter(&entries).is_empty());
    }
}

//! Markdown to egui
//!
//! README and blog bodies are parsed with comrak into a flat list of
//! [`Block`]s, which [`show_blocks`] lays out with plain egui widgets.

use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, Options};
use eframe::egui::{self, Color32, FontId, RichText, Stroke};

use super::syntax::highlight_code;
use crate::theme::ThemeColors;

// ─────────────────────────────────────────────────────────────────────────────
// Block Model
// ─────────────────────────────────────────────────────────────────────────────

/// Inline styling of a span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanStyle {
    pub strong: bool,
    pub emphasis: bool,
    pub code: bool,
    pub strike: bool,
}

/// A run of inline text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, spans: Vec<Span> },
    Paragraph(Vec<Span>),
    /// One list item paragraph; `marker` is "•" or "1." and so on
    ListItem { depth: usize, marker: String, spans: Vec<Span> },
    Quote(Vec<Span>),
    Code { language: String, literal: String },
    Rule,
}

fn options() -> Options {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options
}

/// Parse markdown into blocks.
pub fn parse_blocks(markdown: &str) -> Vec<Block> {
    let arena = Arena::new();
    let root = parse_document(&arena, markdown, &options());
    let mut blocks = Vec::new();
    for child in root.children() {
        collect_block(child, 0, &mut blocks);
    }
    blocks
}

fn collect_block<'a>(node: &'a AstNode<'a>, depth: usize, out: &mut Vec<Block>) {
    let value = node.data.borrow().value.clone();
    match value {
        NodeValue::Heading(heading) => out.push(Block::Heading {
            level: heading.level,
            spans: inline_spans(node),
        }),
        NodeValue::Paragraph => {
            let spans = inline_spans(node);
            if !spans.is_empty() {
                out.push(Block::Paragraph(spans));
            }
        }
        NodeValue::List(list) => {
            for (index, item) in node.children().enumerate() {
                let marker = match list.list_type {
                    ListType::Bullet => "•".to_string(),
                    ListType::Ordered => format!("{}.", list.start + index),
                };
                collect_list_item(item, depth, &marker, out);
            }
        }
        NodeValue::BlockQuote => {
            for child in node.children() {
                let spans = inline_spans(child);
                if !spans.is_empty() {
                    out.push(Block::Quote(spans));
                }
            }
        }
        NodeValue::CodeBlock(code) => out.push(Block::Code {
            language: code.info.split_whitespace().next().unwrap_or("").to_string(),
            literal: code.literal,
        }),
        NodeValue::ThematicBreak => out.push(Block::Rule),
        NodeValue::Table(_) => {
            for row in node.children() {
                let mut spans = Vec::new();
                for (i, cell) in row.children().enumerate() {
                    if i > 0 {
                        spans.push(plain_span(" | "));
                    }
                    spans.extend(inline_spans(cell));
                }
                out.push(Block::Paragraph(spans));
            }
        }
        // Raw HTML and front matter are not shown
        NodeValue::HtmlBlock(_) | NodeValue::FrontMatter(_) => {}
        _ => {
            for child in node.children() {
                collect_block(child, depth, out);
            }
        }
    }
}

fn collect_list_item<'a>(item: &'a AstNode<'a>, depth: usize, marker: &str, out: &mut Vec<Block>) {
    let mut first = true;
    for child in item.children() {
        let is_paragraph = matches!(child.data.borrow().value, NodeValue::Paragraph);
        if is_paragraph {
            out.push(Block::ListItem {
                depth,
                marker: if first { marker.to_string() } else { String::new() },
                spans: inline_spans(child),
            });
            first = false;
        } else {
            collect_block(child, depth + 1, out);
        }
    }
}

fn plain_span(text: &str) -> Span {
    Span {
        text: text.to_string(),
        style: SpanStyle::default(),
        link: None,
    }
}

/// Flatten the inline children of a block node.
fn inline_spans<'a>(node: &'a AstNode<'a>) -> Vec<Span> {
    let mut spans = Vec::new();
    for child in node.children() {
        collect_inline(child, SpanStyle::default(), None, &mut spans);
    }
    spans
}

fn collect_inline<'a>(
    node: &'a AstNode<'a>,
    style: SpanStyle,
    link: Option<&str>,
    out: &mut Vec<Span>,
) {
    let value = node.data.borrow().value.clone();
    match value {
        NodeValue::Text(text) => push_span(out, &text, style, link),
        NodeValue::Code(code) => {
            push_span(out, &code.literal, SpanStyle { code: true, ..style }, link)
        }
        NodeValue::SoftBreak => push_span(out, " ", style, link),
        NodeValue::LineBreak => push_span(out, "\n", style, link),
        NodeValue::HtmlInline(_) => {}
        NodeValue::Strong => {
            let style = SpanStyle { strong: true, ..style };
            for child in node.children() {
                collect_inline(child, style, link, out);
            }
        }
        NodeValue::Emph => {
            let style = SpanStyle { emphasis: true, ..style };
            for child in node.children() {
                collect_inline(child, style, link, out);
            }
        }
        NodeValue::Strikethrough => {
            let style = SpanStyle { strike: true, ..style };
            for child in node.children() {
                collect_inline(child, style, link, out);
            }
        }
        NodeValue::Link(target) => {
            for child in node.children() {
                collect_inline(child, style, Some(&target.url), out);
            }
        }
        _ => {
            for child in node.children() {
                collect_inline(child, style, link, out);
            }
        }
    }
}

/// Append text, merging with the previous span when nothing about it differs.
fn push_span(out: &mut Vec<Span>, text: &str, style: SpanStyle, link: Option<&str>) {
    if let Some(last) = out.last_mut() {
        if last.style == style && last.link.as_deref() == link {
            last.text.push_str(text);
            return;
        }
    }
    out.push(Span {
        text: text.to_string(),
        style,
        link: link.map(str::to_string),
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Rendering
// ─────────────────────────────────────────────────────────────────────────────

/// Lay out parsed blocks at the given base font size.
pub fn show_blocks(ui: &mut egui::Ui, blocks: &[Block], colors: &ThemeColors, font_size: f32) {
    for block in blocks {
        match block {
            Block::Heading { level, spans } => {
                let size = match level {
                    1 => font_size * 2.0,
                    2 => font_size * 1.5,
                    3 => font_size * 1.25,
                    _ => font_size * 1.1,
                };
                ui.add_space(font_size * 0.5);
                show_spans(ui, spans, colors, size, colors.text.primary, true);
                if *level <= 2 {
                    let rect = ui.available_rect_before_wrap();
                    ui.painter().hline(
                        rect.x_range(),
                        rect.top(),
                        Stroke::new(1.0, colors.base.border),
                    );
                }
                ui.add_space(font_size * 0.4);
            }
            Block::Paragraph(spans) => {
                show_spans(ui, spans, colors, font_size, colors.text.primary, false);
                ui.add_space(font_size * 0.6);
            }
            Block::ListItem { depth, marker, spans } => {
                ui.horizontal_wrapped(|ui| {
                    ui.add_space(12.0 + *depth as f32 * 16.0);
                    ui.label(RichText::new(format!("{:<2}", marker)).color(colors.ui.accent));
                    show_spans(ui, spans, colors, font_size, colors.text.primary, false);
                });
            }
            Block::Quote(spans) => {
                egui::Frame::none()
                    .inner_margin(egui::Margin {
                        left: 12.0,
                        right: 4.0,
                        top: 4.0,
                        bottom: 4.0,
                    })
                    .show(ui, |ui| {
                        let rect = ui.available_rect_before_wrap();
                        show_spans(ui, spans, colors, font_size, colors.text.secondary, false);
                        let bottom = ui.min_rect().bottom();
                        ui.painter().vline(
                            rect.left() - 8.0,
                            rect.top()..=bottom,
                            Stroke::new(3.0, colors.ui.accent),
                        );
                    });
                ui.add_space(font_size * 0.6);
            }
            Block::Code { language, literal } => {
                egui::Frame::none()
                    .fill(colors.base.sidebar)
                    .stroke(Stroke::new(1.0, colors.base.border))
                    .inner_margin(egui::Margin::same(8.0))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        for line in highlight_code(literal, language, colors.is_dark()) {
                            ui.horizontal(|ui| {
                                ui.spacing_mut().item_spacing.x = 0.0;
                                for segment in &line.segments {
                                    ui.label(segment.to_rich_text(font_size * 0.9));
                                }
                            });
                        }
                    });
                ui.add_space(font_size * 0.6);
            }
            Block::Rule => {
                ui.separator();
            }
        }
    }
}

fn show_spans(
    ui: &mut egui::Ui,
    spans: &[Span],
    colors: &ThemeColors,
    size: f32,
    color: Color32,
    heading: bool,
) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for span in spans {
            let mut text = RichText::new(&span.text).size(size).color(color);
            if span.style.strong || heading {
                text = text.strong();
            }
            if span.style.emphasis {
                text = text.italics();
            }
            if span.style.strike {
                text = text.strikethrough();
            }
            if span.style.code {
                text = text
                    .font(FontId::monospace(size * 0.9))
                    .color(colors.ui.accent_secondary)
                    .background_color(colors.base.tab);
            }
            match &span.link {
                Some(url) => {
                    ui.hyperlink_to(text.color(colors.ui.accent), url);
                }
                None => {
                    ui.label(text);
                }
            }
        }
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(spans: &[Span]) -> String {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_empty_document() {
        assert!(parse_blocks("").is_empty());
    }

    #[test]
    fn test_heading_and_paragraph() {
        let blocks = parse_blocks("# Title\n\nSome *nice* text.");
        assert_eq!(blocks.len(), 2);
        match &blocks[0] {
            Block::Heading { level, spans } => {
                assert_eq!(*level, 1);
                assert_eq!(text_of(spans), "Title");
            }
            other => panic!("expected heading, got {:?}", other),
        }
        match &blocks[1] {
            Block::Paragraph(spans) => {
                assert_eq!(text_of(spans), "Some nice text.");
                assert!(spans.iter().any(|s| s.style.emphasis && s.text == "nice"));
            }
            other => panic!("expected paragraph, got {:?}", other),
        }
    }

    #[test]
    fn test_inline_styles() {
        let blocks = parse_blocks("**bold** and `code` and [link](https://x.dev)");
        let Block::Paragraph(spans) = &blocks[0] else {
            panic!("expected paragraph");
        };
        assert!(spans.iter().any(|s| s.style.strong && s.text == "bold"));
        assert!(spans.iter().any(|s| s.style.code && s.text == "code"));
        assert!(spans
            .iter()
            .any(|s| s.link.as_deref() == Some("https://x.dev") && s.text == "link"));
    }

    #[test]
    fn test_soft_breaks_merge_into_one_span() {
        let blocks = parse_blocks("one\ntwo");
        let Block::Paragraph(spans) = &blocks[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "one two");
    }

    #[test]
    fn test_lists() {
        let blocks = parse_blocks("- a\n- b\n  1. inner\n");
        assert_eq!(
            blocks[0],
            Block::ListItem {
                depth: 0,
                marker: "•".to_string(),
                spans: vec![plain_span("a")],
            }
        );
        match &blocks[2] {
            Block::ListItem { depth, marker, .. } => {
                assert_eq!(*depth, 1);
                assert_eq!(marker, "1.");
            }
            other => panic!("expected nested item, got {:?}", other),
        }
    }

    #[test]
    fn test_quote_code_and_rule() {
        let blocks = parse_blocks("> quoted\n\n```python\nprint(1)\n```\n\n---\n");
        assert_eq!(blocks[0], Block::Quote(vec![plain_span("quoted")]));
        assert_eq!(
            blocks[1],
            Block::Code {
                language: "python".to_string(),
                literal: "print(1)\n".to_string(),
            }
        );
        assert_eq!(blocks[2], Block::Rule);
    }

    #[test]
    fn test_readme_parses() {
        let blocks = parse_blocks(crate::catalog::content::README_MD);
        assert!(matches!(blocks[0], Block::Heading { level: 1, .. }));
        assert!(blocks.iter().any(|b| matches!(b, Block::Quote(_))));
        assert!(blocks.iter().filter(|b| matches!(b, Block::ListItem { .. })).count() >= 6);
    }
}

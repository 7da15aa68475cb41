//! Document views
//!
//! One function per page of the portfolio. Each draws into the editor area
//! and reports navigation, terminal and link requests as [`UiAction`]s.

use std::collections::HashMap;
use std::time::Duration;

use eframe::egui::{self, Color32, FontId, RichText, Sense, Stroke, Ui, Vec2};

use super::{drag_handle, UiAction};
use crate::catalog::content::{
    Project, ABOUT_ME_PY, CONTACT_EMAIL, DISCORD_URL, LINKEDIN_URL, OWNER_AFFILIATION,
    OWNER_NAME, OWNER_TITLE, README_MD, RESUME_URL,
};
use crate::catalog::{BlogPost, ABOUT_ID, CONTACT_ID, PROJECTS_ID, SKILLS_ID};
use crate::markdown::{parse_blocks, show_blocks, Block, HighlightCache};
use crate::session::{DocumentId, DragTarget};
use crate::state::AppState;
use crate::theme::ThemeColors;
use crate::transcript::scripts;

/// Base body font size for views.
const BODY_SIZE: f32 = 14.0;
/// Source line font size.
const CODE_SIZE: f32 = 13.0;

/// Line of the about source where the interactive tail begins.
const ABOUT_INTERACTIVE_MARKER: &str = "    def get_skills(self):";

// ─────────────────────────────────────────────────────────────────────────────
// Caches
// ─────────────────────────────────────────────────────────────────────────────

/// Parsed markdown and highlighted source, kept across frames.
#[derive(Debug, Default)]
pub struct ViewCache {
    pub highlight: HighlightCache,
    blocks: HashMap<String, Vec<Block>>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parsed blocks for `markdown`, parsed on first use under `key`.
    pub fn blocks(&mut self, key: &str, markdown: &str) -> &[Block] {
        self.blocks
            .entry(key.to_string())
            .or_insert_with(|| parse_blocks(markdown))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared Widgets
// ─────────────────────────────────────────────────────────────────────────────

fn chip(ui: &mut Ui, text: &str, colors: &ThemeColors) {
    egui::Frame::none()
        .fill(colors.base.activity)
        .stroke(Stroke::new(1.0, colors.base.border))
        .rounding(3.0)
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(11.0).color(colors.text.primary));
        });
}

fn badge(ui: &mut Ui, text: &str, color: Color32) {
    egui::Frame::none()
        .stroke(Stroke::new(1.0, color.gamma_multiply(0.5)))
        .fill(color.gamma_multiply(0.1))
        .rounding(2.0)
        .inner_margin(egui::Margin::symmetric(6.0, 1.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text.to_uppercase()).size(9.0).strong().color(color));
        });
}

/// Text that behaves like a hyperlink inside the app.
fn link(ui: &mut Ui, text: impl Into<String>, color: Color32) -> egui::Response {
    let response = ui.add(
        egui::Label::new(RichText::new(text).color(color).strong()).sense(Sense::click()),
    );
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

fn card<R>(ui: &mut Ui, colors: &ThemeColors, add: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::none()
        .fill(colors.base.sidebar)
        .stroke(Stroke::new(1.0, colors.base.border))
        .rounding(4.0)
        .inner_margin(egui::Margin::same(14.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add(ui)
        })
        .inner
}

fn page(ui: &mut Ui, add: impl FnOnce(&mut Ui)) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Frame::none()
                .inner_margin(egui::Margin::same(24.0))
                .show(ui, add);
        });
}

fn open(actions: &mut Vec<UiAction>, id: &str) {
    actions.push(UiAction::OpenDocument(DocumentId::from(id)));
}

// ─────────────────────────────────────────────────────────────────────────────
// Empty Editor
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn show_empty(ui: &mut Ui, colors: &ThemeColors) {
    let faded = colors.text.secondary.gamma_multiply(0.6);
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.35);
        ui.label(RichText::new("📄").size(64.0).color(faded.gamma_multiply(0.5)));
        ui.add_space(16.0);
        ui.label(RichText::new("SUMAN'S IDE").size(20.0).color(faded));
        ui.label(
            RichText::new("Select a file to start editing")
                .size(11.0)
                .color(faded),
        );
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Home (README.md)
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn show_home(
    ui: &mut Ui,
    cache: &mut ViewCache,
    colors: &ThemeColors,
    actions: &mut Vec<UiAction>,
) {
    page(ui, |ui| {
        ui.label(
            RichText::new(format!("Hi, I'm {} 👋", OWNER_NAME))
                .size(34.0)
                .strong()
                .color(colors.text.primary),
        );
        ui.label(RichText::new(OWNER_TITLE).size(20.0).color(colors.text.secondary));
        ui.label(
            RichText::new(format!("⎇ {}", OWNER_AFFILIATION))
                .size(12.0)
                .color(colors.text.secondary),
        );
        ui.add_space(12.0);
        ui.separator();
        ui.add_space(12.0);

        // The heading and title lines are drawn above
        let body = README_MD
            .split_once("\n> ")
            .map(|(_, rest)| format!("> {}", rest))
            .unwrap_or_else(|| README_MD.to_string());
        show_blocks(ui, cache.blocks("readme", &body), colors, BODY_SIZE);

        ui.add_space(24.0);
        ui.horizontal(|ui| {
            let projects = egui::Button::new(
                RichText::new("View Projects").strong().color(colors.base.main),
            )
            .fill(colors.ui.accent);
            if ui.add(projects).clicked() {
                open(actions, PROJECTS_ID);
            }
            let about = egui::Button::new(RichText::new("Read About Me").strong())
                .fill(colors.base.activity)
                .stroke(Stroke::new(1.0, colors.base.border));
            if ui.add(about).clicked() {
                open(actions, ABOUT_ID);
            }
        });
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// About (about_me.py)
// ─────────────────────────────────────────────────────────────────────────────

/// The about page, split with the readable preview when it is open.
pub(crate) fn show_about(
    ui: &mut Ui,
    state: &AppState,
    cache: &mut ViewCache,
    colors: &ThemeColors,
    actions: &mut Vec<UiAction>,
) {
    if state.layout.preview_open {
        let panel = egui::SidePanel::right("about_preview")
            .exact_width(state.layout.preview_width)
            .resizable(false)
            .show_separator_line(true)
            .frame(egui::Frame::none().fill(colors.base.main))
            .show_inside(ui, |ui| show_about_preview(ui, colors, actions));
        drag_handle(
            ui,
            "preview_drag",
            panel.response.rect.left(),
            DragTarget::Preview,
            colors.ui.accent,
            actions,
        );
    }

    page(ui, |ui| {
        if !state.layout.preview_open {
            egui::Frame::none()
                .fill(colors.ui.info.gamma_multiply(0.1))
                .stroke(Stroke::new(1.0, colors.ui.info.gamma_multiply(0.3)))
                .rounding(3.0)
                .inner_margin(egui::Margin::same(10.0))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal_wrapped(|ui| {
                        ui.label(
                            RichText::new(
                                "ⓘ Tip: Click View > Toggle Side Preview to see a readable \
                                 version of this profile.",
                            )
                            .size(11.0)
                            .color(colors.ui.info),
                        );
                        if link(ui, "Open Preview Now", colors.ui.info).clicked() {
                            actions.push(UiAction::ShowPreview);
                        }
                    });
                });
            ui.add_space(16.0);
        }

        let source = ABOUT_ME_PY
            .split_once(ABOUT_INTERACTIVE_MARKER)
            .map_or(ABOUT_ME_PY, |(head, _)| head);
        for line in cache
            .highlight
            .get_or_highlight("about_me.py", source, "py", colors.is_dark())
        {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                for segment in &line.segments {
                    ui.label(segment.to_rich_text(CODE_SIZE));
                }
            });
        }

        let mono = |text: &str, color: Color32| {
            RichText::new(text).font(FontId::monospace(CODE_SIZE)).color(color)
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.label(mono("    def ", colors.syntax.keyword));
            ui.label(mono("get_skills", colors.syntax.function));
            ui.label(mono("(self):", colors.text.primary));
        });
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.label(mono("        return ", colors.syntax.keyword));
            ui.label(mono("load_yaml(", colors.syntax.function));
            if link(ui, "'config/skills.yaml'", colors.ui.accent)
                .on_hover_text("Open skills.yaml")
                .clicked()
            {
                open(actions, SKILLS_ID);
            }
            ui.label(mono(")", colors.text.primary));
        });
        ui.add_space(CODE_SIZE);
        ui.label(mono("    # Execute download protocol", colors.syntax.comment));
        ui.horizontal(|ui| {
            ui.add_space(28.0);
            let label = RichText::new("self.download_resume(format=\"pdf\") ▶")
                .font(FontId::monospace(CODE_SIZE))
                .color(colors.syntax.function);
            if ui.add(egui::Button::new(label).frame(false)).clicked() {
                actions.push(UiAction::PlayTranscript {
                    lines: scripts::download_resume_wget(),
                    link: Some(RESUME_URL.to_string()),
                });
            }
        });

        ui.add_space(32.0);
        ui.separator();
        ui.add_space(12.0);
        ui.label(mono(
            "# Ready to collaborate? Initialize handshake.",
            colors.syntax.comment,
        ));
        ui.add_space(6.0);
        let handshake = ui
            .horizontal(|ui| {
                chip(ui, ">_", colors);
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new("EXECUTE CONTACT PROTOCOL")
                            .size(11.0)
                            .strong()
                            .color(colors.text.secondary),
                    );
                    ui.label(mono("./run contact.tsx", colors.text.secondary));
                });
            })
            .response
            .interact(Sense::click());
        if handshake.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        if handshake.clicked() {
            open(actions, CONTACT_ID);
        }
    });
}

/// Readable rendering of the about page.
fn show_about_preview(ui: &mut Ui, colors: &ThemeColors, actions: &mut Vec<UiAction>) {
    page(ui, |ui| {
        ui.label(RichText::new("About Me").size(26.0).strong());
        ui.separator();
        ui.add_space(8.0);
        ui.label(
            RichText::new(
                "\"Undergraduate at IIT Madras specialized in Data Science. Building the \
                 bridge between theoretical AI and production systems.\"",
            )
            .size(16.0),
        );
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("📍 India").color(colors.text.secondary));
            ui.label(RichText::new("🟢 Open to Opportunities").color(colors.text.secondary));
        });

        let section = |ui: &mut Ui, title: &str| {
            ui.add_space(20.0);
            ui.label(RichText::new(title).size(18.0).strong().color(colors.ui.accent));
            ui.add_space(8.0);
        };

        section(ui, "▶ Education");
        card(ui, colors, |ui| {
            ui.label(RichText::new("BS in Data Science & Applications").size(16.0).strong());
            ui.label("Indian Institute of Technology, Madras");
            ui.label(
                RichText::new("2026 - 2030 (Expected)")
                    .size(12.0)
                    .color(colors.text.secondary),
            );
            ui.horizontal(|ui| {
                chip(ui, "Deep Learning", colors);
                chip(ui, "Big Data", colors);
            });
        });

        section(ui, ">_ Experience");
        for (role, domain, description) in [
            (
                "Student Researcher",
                "Neural Networks / NLP",
                "Researching architecture optimization for Low-Resource LLMs.",
            ),
            (
                "Open Source Contributor",
                "Python / AI Tools",
                "Contributed to libraries like LangChain and HuggingFace Transformers.",
            ),
        ] {
            ui.label(RichText::new(role).strong());
            ui.label(RichText::new(domain).size(12.0).color(colors.text.secondary));
            ui.label(RichText::new(description).size(12.0));
            ui.add_space(10.0);
        }

        section(ui, "⚙ Skills");
        ui.horizontal(|ui| {
            ui.label("View full visualization in");
            if link(ui, "skills.yaml", colors.ui.accent).clicked() {
                open(actions, SKILLS_ID);
            }
        });
        ui.horizontal_wrapped(|ui| {
            for skill in ["Python", "PyTorch", "SQL", "React"] {
                chip(ui, skill, colors);
            }
        });
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Projects (projects.json)
// ─────────────────────────────────────────────────────────────────────────────

/// Transcript and link for a project button.
pub(crate) fn project_action(project: &Project, demo: bool) -> Option<UiAction> {
    let (url, lines) = if demo {
        let url = project.demo.as_deref()?;
        (url, scripts::project_demo(url))
    } else {
        let url = project.repo.as_deref()?;
        (url, scripts::project_source(url))
    };
    Some(UiAction::PlayTranscript {
        lines,
        link: Some(url.to_string()),
    })
}

pub(crate) fn show_projects(
    ui: &mut Ui,
    projects: &[Project],
    colors: &ThemeColors,
    actions: &mut Vec<UiAction>,
) {
    page(ui, |ui| {
        ui.label(RichText::new("Projects.json").size(24.0).strong());
        ui.label(
            RichText::new(format!(
                "Loaded {} projects from local configuration.",
                projects.len()
            ))
            .size(12.0)
            .color(colors.text.secondary),
        );
        ui.add_space(16.0);

        for project in projects {
            card(ui, colors, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&project.name)
                            .size(16.0)
                            .strong()
                            .color(colors.ui.accent),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        badge(ui, "Public", colors.text.secondary);
                    });
                });
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 4.0;
                    ui.label(
                        RichText::new("stack:")
                            .font(FontId::monospace(12.0))
                            .color(colors.syntax.keyword),
                    );
                    ui.label(
                        RichText::new(format!("\"{}\"", project.stack))
                            .font(FontId::monospace(12.0))
                            .color(colors.syntax.string),
                    );
                });
                ui.add_space(4.0);
                ui.label(RichText::new(&project.desc).size(13.0).color(colors.text.secondary));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if project.repo.is_some() && ui.button("⎇ Source Code").clicked() {
                        actions.extend(project_action(project, false));
                    }
                    if project.demo.is_some() {
                        if ui.button("▶ Live View").clicked() {
                            actions.extend(project_action(project, true));
                        }
                    } else {
                        ui.add_enabled(false, egui::Button::new("Local Only"));
                    }
                });
            });
            ui.add_space(12.0);
        }
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Skills (skills.yaml)
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn show_skills(ui: &mut Ui, state: &AppState, colors: &ThemeColors) {
    let sheet = state.catalog.skills();
    page(ui, |ui| {
        ui.label(
            RichText::new("# skills.yaml config")
                .font(FontId::monospace(CODE_SIZE))
                .color(colors.syntax.comment),
        );
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.label(
                RichText::new("visualize")
                    .font(FontId::monospace(CODE_SIZE))
                    .color(colors.syntax.keyword),
            );
            ui.label(RichText::new(": ").font(FontId::monospace(CODE_SIZE)));
            ui.label(
                RichText::new(sheet.visualize.to_string())
                    .font(FontId::monospace(CODE_SIZE))
                    .color(colors.syntax.number),
            );
        });
        ui.add_space(20.0);

        if sheet.visualize {
            let label_width = 60.0;
            for (index, skill) in sheet.skills.iter().enumerate() {
                let (rect, response) = ui.allocate_exact_size(
                    Vec2::new(ui.available_width(), 28.0),
                    Sense::hover(),
                );
                let painter = ui.painter();
                if response.hovered() {
                    painter.rect_filled(rect, 0.0, colors.base.activity.gamma_multiply(0.5));
                }
                painter.text(
                    rect.left_center() + Vec2::new(label_width - 8.0, 0.0),
                    egui::Align2::RIGHT_CENTER,
                    &skill.name,
                    FontId::monospace(12.0),
                    colors.text.secondary,
                );
                let track = egui::Rect::from_min_max(
                    egui::pos2(rect.left() + label_width, rect.center().y - 10.0),
                    egui::pos2(rect.right() - 30.0, rect.center().y + 10.0),
                );
                let fill = if index % 2 == 0 {
                    colors.ui.accent
                } else {
                    colors.ui.accent_secondary
                };
                let mut bar = track;
                bar.set_width(track.width() * f32::from(skill.level) / 100.0);
                painter.rect_filled(bar, 4.0, fill);
                response.on_hover_text(format!("level: {}", skill.level));
            }
        }

        ui.add_space(24.0);
        egui::Frame::none()
            .fill(colors.terminal.background)
            .rounding(3.0)
            .inner_margin(egui::Margin::same(10.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                for line in [
                    "[INFO] Skills data loaded from local cache.",
                    "[INFO] Proficiency metrics updated: Today.",
                ] {
                    ui.label(
                        RichText::new(line)
                            .font(FontId::monospace(11.0))
                            .color(colors.ui.success),
                    );
                }
            });
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Contact (contact.tsx)
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn show_contact(
    ui: &mut Ui,
    state: &mut AppState,
    colors: &ThemeColors,
    now: f64,
    actions: &mut Vec<UiAction>,
) {
    let form = &mut state.ui.contact;
    page(ui, |ui| {
        egui::Frame::none()
            .fill(colors.terminal.background)
            .stroke(Stroke::new(1.0, colors.base.border))
            .rounding(4.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width().min(640.0));
                egui::Frame::none()
                    .fill(colors.base.activity)
                    .inner_margin(egui::Margin::symmetric(12.0, 6.0))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(
                            RichText::new(">_ contact.tsx — bash")
                                .size(11.0)
                                .color(colors.text.secondary),
                        );
                    });

                egui::Frame::none()
                    .inner_margin(egui::Margin::same(16.0))
                    .show(ui, |ui| {
                        let mono = FontId::monospace(CODE_SIZE);
                        if form.is_sent(now) {
                            ui.vertical_centered(|ui| {
                                ui.label(RichText::new("✔").size(40.0).color(colors.ui.success));
                                ui.label(
                                    RichText::new("Message Sent!")
                                        .size(16.0)
                                        .color(colors.ui.success),
                                );
                            });
                            if let Some(until) = form.sent_until {
                                let left = (until - now).max(0.0);
                                ui.ctx().request_repaint_after(Duration::from_secs_f64(left));
                            }
                            ui.add_space(12.0);
                        }

                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new("user@portfolio:~$")
                                    .font(mono.clone())
                                    .color(colors.ui.success),
                            );
                            ui.label(
                                RichText::new("./send_message --priority high")
                                    .font(mono.clone())
                                    .color(colors.terminal.text),
                            );
                        });
                        ui.add_space(12.0);

                        ui.label(RichText::new("Email").size(11.0).color(colors.text.secondary));
                        ui.add(
                            egui::TextEdit::singleline(&mut form.email)
                                .hint_text("enter_your_email@domain.com")
                                .font(mono.clone())
                                .desired_width(f32::INFINITY),
                        );
                        ui.add_space(8.0);
                        ui.label(
                            RichText::new("Message Payload")
                                .size(11.0)
                                .color(colors.text.secondary),
                        );
                        ui.add(
                            egui::TextEdit::multiline(&mut form.message)
                                .hint_text("// Type your message here...")
                                .font(mono.clone())
                                .desired_rows(4)
                                .desired_width(f32::INFINITY),
                        );
                        ui.add_space(12.0);

                        let execute = egui::Button::new(
                            RichText::new("EXECUTE ›").strong().color(colors.base.main),
                        )
                        .fill(colors.ui.success);
                        if ui.add_enabled(form.is_valid(), execute).clicked() {
                            form.submit(now);
                        }

                        ui.add_space(16.0);
                        ui.separator();
                        ui.horizontal(|ui| {
                            if link(ui, "✉ email", colors.text.secondary).clicked() {
                                actions.push(UiAction::OpenUrl(format!("mailto:{}", CONTACT_EMAIL)));
                            }
                            ui.add_space(12.0);
                            if link(ui, "🔗 LinkedIn", colors.text.secondary).clicked() {
                                actions.push(UiAction::OpenUrl(LINKEDIN_URL.to_string()));
                            }
                            ui.add_space(12.0);
                            if link(ui, "💬 Discord", colors.text.secondary).clicked() {
                                actions.push(UiAction::OpenUrl(DISCORD_URL.to_string()));
                            }
                        });
                    });
            });
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Experience (experience.tsx)
// ─────────────────────────────────────────────────────────────────────────────

fn experience_badge_color(kind: &str, colors: &ThemeColors) -> Color32 {
    match kind {
        "Research" => colors.ui.accent_secondary,
        "Internship" => colors.ui.info,
        "Part-time" => colors.ui.warning,
        _ => colors.ui.success,
    }
}

pub(crate) fn show_experience(
    ui: &mut Ui,
    state: &AppState,
    colors: &ThemeColors,
    actions: &mut Vec<UiAction>,
) {
    let records = state.catalog.experience();
    page(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(">_ experience.tsx").size(22.0).strong());
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;
                    let mono = |text: &str, color: Color32| {
                        RichText::new(text).font(FontId::monospace(12.0)).color(color)
                    };
                    ui.label(mono("const ", colors.syntax.keyword));
                    ui.label(mono("EXPERIENCE_DATA", colors.syntax.number));
                    ui.label(mono(" = ", colors.text.secondary));
                    ui.label(mono("await ", colors.syntax.keyword));
                    ui.label(mono("fetchHistory", colors.syntax.function));
                    ui.label(mono("();", colors.text.secondary));
                });
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{} Records", records.len()))
                        .size(11.0)
                        .color(colors.text.secondary),
                );
                if ui.button("▶ Download Resume").clicked() {
                    actions.push(UiAction::PlayTranscript {
                        lines: scripts::download_resume_curl(),
                        link: Some(RESUME_URL.to_string()),
                    });
                }
            });
        });
        ui.add_space(12.0);
        ui.separator();
        ui.add_space(12.0);

        for record in records {
            card(ui, colors, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(record.role).size(16.0).strong());
                    badge(ui, record.kind, experience_badge_color(record.kind, colors));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("▶ {}", record.date))
                                .font(FontId::monospace(11.0))
                                .color(colors.text.secondary),
                        );
                    });
                });
                ui.label(
                    RichText::new(format!("@ {}", record.company))
                        .color(colors.ui.accent),
                );
                ui.add_space(6.0);
                ui.label(RichText::new(record.description).size(13.0));
                ui.add_space(6.0);
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        RichText::new("stack:")
                            .font(FontId::monospace(11.0))
                            .color(colors.text.secondary),
                    );
                    for tech in record.stack {
                        chip(ui, tech, colors);
                    }
                });
            });
            ui.add_space(12.0);
        }

        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("── EOF ──")
                    .font(FontId::monospace(10.0))
                    .color(colors.text.secondary.gamma_multiply(0.6)),
            );
        });
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Extensions Marketplace
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn show_extensions(
    ui: &mut Ui,
    state: &mut AppState,
    colors: &ThemeColors,
    actions: &mut Vec<UiAction>,
) {
    let extensions = state.catalog.extensions();
    let query = &mut state.ui.extension_query;
    let grid = &mut state.ui.extension_grid;

    egui::Frame::none()
        .inner_margin(egui::Margin::symmetric(24.0, 16.0))
        .show(ui, |ui| {
            ui.label(RichText::new("EXTENSIONS: MARKETPLACE").size(18.0).strong());
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label("🔍");
                ui.add(
                    egui::TextEdit::singleline(query)
                        .hint_text("Search Extensions in Marketplace")
                        .desired_width(ui.available_width() - 80.0),
                );
                if ui.selectable_label(*grid, "▦").on_hover_text("Grid View").clicked() {
                    *grid = true;
                }
                if ui.selectable_label(!*grid, "☰").on_hover_text("List View").clicked() {
                    *grid = false;
                }
            });
        });
    ui.separator();

    let visible: Vec<_> = extensions.iter().filter(|e| e.matches(query)).collect();
    let install = |actions: &mut Vec<UiAction>, name: &str, url: &str| {
        actions.push(UiAction::PlayTranscript {
            lines: scripts::install_extension(name),
            link: Some(url.to_string()),
        });
    };

    page(ui, |ui| {
        if *grid {
            let columns = ((ui.available_width() / 260.0).floor() as usize).max(1);
            egui::Grid::new("extensions_grid")
                .num_columns(columns)
                .spacing(Vec2::splat(12.0))
                .show(ui, |ui| {
                    for (index, ext) in visible.iter().enumerate() {
                        ui.allocate_ui(Vec2::new(240.0, 170.0), |ui| {
                            card(ui, colors, |ui| {
                                ui.horizontal(|ui| {
                                    ui.label(RichText::new("🧩").size(22.0).color(colors.ui.accent));
                                    ui.vertical(|ui| {
                                        ui.label(
                                            RichText::new(format!("{} ✔", ext.name)).strong(),
                                        );
                                        ui.label(
                                            RichText::new(ext.publisher)
                                                .size(11.0)
                                                .color(colors.text.secondary),
                                        );
                                    });
                                });
                                ui.add_space(4.0);
                                ui.label(RichText::new(ext.desc).size(12.0));
                                ui.add_space(4.0);
                                ui.horizontal(|ui| {
                                    ui.label(
                                        RichText::new("▶ 1M+")
                                            .size(10.0)
                                            .color(colors.text.secondary),
                                    );
                                    ui.label(
                                        RichText::new("★★★★★")
                                            .size(10.0)
                                            .color(colors.ui.warning),
                                    );
                                });
                                if ui.button("Install").clicked() {
                                    install(actions, ext.name, ext.url);
                                }
                            });
                        });
                        if (index + 1) % columns == 0 {
                            ui.end_row();
                        }
                    }
                });
        } else {
            for ext in &visible {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("🧩").size(22.0).color(colors.ui.accent));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("{} ✔", ext.name)).strong());
                        ui.label(
                            RichText::new(format!("{} • {}", ext.id, ext.publisher))
                                .size(11.0)
                                .color(colors.text.secondary),
                        );
                        ui.label(RichText::new(ext.desc).size(12.0));
                        ui.label(
                            RichText::new("★★★★★ 5.0")
                                .size(10.0)
                                .color(colors.ui.warning),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Install").clicked() {
                            install(actions, ext.name, ext.url);
                        }
                    });
                });
                ui.separator();
            }
        }
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Blog Posts
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn show_blog(
    ui: &mut Ui,
    post: &BlogPost,
    cache: &mut ViewCache,
    colors: &ThemeColors,
) {
    page(ui, |ui| {
        ui.label(RichText::new(post.title).size(30.0).strong());
        ui.label(
            RichText::new(format!("{} • {}", OWNER_NAME, post.date))
                .size(12.0)
                .color(colors.text.secondary),
        );
        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);
        show_blocks(ui, cache.blocks(post.id, post.content), colors, BODY_SIZE);
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Scratch Documents
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn show_scratch(
    ui: &mut Ui,
    state: &mut AppState,
    id: &DocumentId,
    colors: &ThemeColors,
) {
    let Some(current) = state.scratch.read_content(id) else {
        show_empty(ui, colors);
        return;
    };
    let mut text = current.to_string();

    egui::Frame::none()
        .fill(colors.ui.warning.gamma_multiply(0.1))
        .inner_margin(egui::Margin::symmetric(12.0, 6.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(
                    "⚠️ WARNING: This is a temporary scratchpad. Content will be lost when tab is closed.",
                )
                .size(11.0)
                .color(colors.ui.warning),
            );
        });

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Frame::none()
                .inner_margin(egui::Margin::symmetric(16.0, 12.0))
                .show(ui, |ui| {
                    let response = ui.add_sized(
                        ui.available_size(),
                        egui::TextEdit::multiline(&mut text)
                            .id_source(id.as_str())
                            .hint_text("// Start typing your notes here...")
                            .font(FontId::monospace(CODE_SIZE))
                            .frame(false),
                    );
                    if response.changed() {
                        state.scratch.update(id, text);
                    }
                });
        });
}

// ─────────────────────────────────────────────────────────────────────────────
// Whole-window States
// ─────────────────────────────────────────────────────────────────────────────

/// Placeholder shown while the workspace is minimized.
pub fn show_minimized(ui: &mut Ui, colors: &ThemeColors, actions: &mut Vec<UiAction>) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.4);
        ui.label(RichText::new("Window Minimized").size(18.0).color(colors.text.secondary));
        ui.add_space(12.0);
        if ui.button("Restore").clicked() {
            actions.push(UiAction::Minimize);
        }
    });
}

/// Screen shown after the session was terminated.
pub fn show_terminated(ui: &mut Ui, colors: &ThemeColors, actions: &mut Vec<UiAction>) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.35);
        ui.label(RichText::new("⏻").size(48.0).color(colors.ui.error));
        ui.add_space(12.0);
        ui.label(RichText::new("Connection Terminated").size(22.0).strong());
        ui.label(
            RichText::new("Remote session closed by user.")
                .size(13.0)
                .color(colors.text.secondary),
        );
        ui.add_space(16.0);
        let button = egui::Button::new(
            RichText::new("Re-establish Connection").strong().color(colors.base.main),
        )
        .fill(colors.ui.accent);
        if ui.add(button).clicked() {
            actions.push(UiAction::ReestablishSession);
        }
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_project_actions_carry_their_links() {
        let catalog = Catalog::new();
        let with_demo = &catalog.projects()[0];
        match project_action(with_demo, true) {
            Some(UiAction::PlayTranscript { lines, link }) => {
                assert_eq!(link.as_deref(), with_demo.demo.as_deref());
                assert!(lines.iter().any(|l| l.contains("npm run build")));
            }
            other => panic!("unexpected action {:?}", other),
        }
        match project_action(with_demo, false) {
            Some(UiAction::PlayTranscript { link, .. }) => {
                assert_eq!(link.as_deref(), with_demo.repo.as_deref());
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_project_without_demo_has_no_live_view() {
        let catalog = Catalog::new();
        let local_only = &catalog.projects()[1];
        assert!(local_only.demo.is_none());
        assert!(project_action(local_only, true).is_none());
    }

    #[test]
    fn test_about_source_splits_before_interactive_tail() {
        let (head, _) = ABOUT_ME_PY
            .split_once(ABOUT_INTERACTIVE_MARKER)
            .expect("marker present");
        assert!(head.contains("def get_experience"));
        assert!(!head.contains("download_resume"));
    }

    #[test]
    fn test_view_cache_parses_once_per_key() {
        let mut cache = ViewCache::new();
        let first = cache.blocks("k", "# Title").to_vec();
        let second = cache.blocks("k", "# Different").to_vec();
        assert_eq!(first, second);
        assert_eq!(cache.blocks.len(), 1);
    }

    #[test]
    fn test_experience_badge_colors() {
        let colors = ThemeColors::dark();
        assert_eq!(experience_badge_color("Part-time", &colors), colors.ui.warning);
        assert_eq!(experience_badge_color("Full-time", &colors), colors.ui.success);
    }
}

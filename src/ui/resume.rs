//! Resume view rendering.
//!
//! The resume is laid out once per frame into plain lines, then the visible
//! window is drawn. Section start lines are recorded so the outline can
//! jump to them, and link spans become click targets.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use super::helpers::{display_width, draw_button, wrap_text};
use crate::app::App;
use crate::resume::{Resume, ResumeSection, BANNER_ACTION, BANNER_TEXT, BANNER_TITLE};
use crate::theme::Palette;
use crate::ui::interaction::ClickAction;

/// Rows taken by the banner when it is shown.
pub const BANNER_HEIGHT: u16 = 3;

/// A click target inside the laid-out resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpan {
    pub line: usize,
    pub column: u16,
    pub width: u16,
    pub action: ClickAction,
}

/// The resume laid out for a given width.
#[derive(Debug, Default)]
pub struct ResumeLayout {
    pub lines: Vec<Line<'static>>,
    pub anchors: Vec<(ResumeSection, usize)>,
    pub links: Vec<LinkSpan>,
}

/// `https://` prefix for bare hosts like `github.com/x`.
fn web_target(address: &str) -> String {
    if address.contains("://") {
        address.to_string()
    } else {
        format!("https://{}", address)
    }
}

struct Builder<'p> {
    palette: &'p Palette,
    width: usize,
    layout: ResumeLayout,
}

impl Builder<'_> {
    fn blank(&mut self) {
        self.layout.lines.push(Line::default());
    }

    fn line(&mut self, spans: Vec<Span<'static>>) {
        self.layout.lines.push(Line::from(spans));
    }

    fn heading(&mut self, section: ResumeSection) {
        self.layout.anchors.push((section, self.layout.lines.len()));
        let style = Style::default()
            .fg(self.palette.text_accent)
            .add_modifier(Modifier::BOLD);
        self.line(vec![Span::styled(format!("## {}", section.title()), style)]);
        self.line(vec![Span::styled(
            "─".repeat(self.width.min(40)),
            Style::default().fg(self.palette.border),
        )]);
    }

    fn paragraph(&mut self, indent: usize, text: &str, style: Style) {
        let width = self.width.saturating_sub(indent).max(10);
        for chunk in wrap_text(text, width) {
            self.line(vec![Span::raw(" ".repeat(indent)), Span::styled(chunk, style)]);
        }
    }

    fn labeled(&mut self, label: &str, text: &str) {
        if text.is_empty() {
            return;
        }
        let label_style = Style::default()
            .fg(self.palette.text_secondary)
            .add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(self.palette.text_primary);
        let prefix = format!("{}: ", label);
        let width = self.width.saturating_sub(prefix.len()).max(10);
        for (index, chunk) in wrap_text(text, width).into_iter().enumerate() {
            let lead = if index == 0 {
                Span::styled(prefix.clone(), label_style)
            } else {
                Span::raw(" ".repeat(prefix.len()))
            };
            self.line(vec![lead, Span::styled(chunk, text_style)]);
        }
    }

    fn bullet(&mut self, text: &str) {
        let style = Style::default().fg(self.palette.text_primary);
        let width = self.width.saturating_sub(4).max(10);
        for (index, chunk) in wrap_text(text, width).into_iter().enumerate() {
            let lead = if index == 0 { "  • " } else { "    " };
            self.line(vec![
                Span::styled(lead, Style::default().fg(self.palette.text_accent)),
                Span::styled(chunk, style),
            ]);
        }
    }

    /// `label` followed by a clickable `text`.
    fn link(&mut self, label: &str, text: &str, action: ClickAction) {
        let prefix = if label.is_empty() {
            "  ".to_string()
        } else {
            format!("  {}: ", label)
        };
        let column = display_width(&prefix);
        self.layout.links.push(LinkSpan {
            line: self.layout.lines.len(),
            column,
            width: display_width(text),
            action,
        });
        self.line(vec![
            Span::styled(prefix, Style::default().fg(self.palette.text_secondary)),
            Span::styled(
                text.to_string(),
                Style::default()
                    .fg(self.palette.link)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]);
    }
}

/// Lay out `resume` for a content pane `width` columns wide.
pub fn layout_resume(resume: &Resume, palette: &Palette, width: usize) -> ResumeLayout {
    let mut b = Builder {
        palette,
        width,
        layout: ResumeLayout::default(),
    };
    let profile = &resume.profile;

    if !profile.name.is_empty() {
        b.line(vec![Span::styled(
            profile.name.clone(),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )]);
    }
    let subtitle: Vec<&str> = [profile.role.as_str(), profile.location.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    if !subtitle.is_empty() {
        b.line(vec![Span::styled(
            subtitle.join(" · "),
            Style::default().fg(palette.text_secondary),
        )]);
    }
    b.link("", "⤓ Download PDF", ClickAction::DownloadResume);
    b.blank();

    for section in resume.sections() {
        b.heading(section);
        match section {
            ResumeSection::Summary => {
                b.paragraph(0, &profile.philosophy, Style::default().fg(palette.text_primary));
                b.labeled("Focus", &profile.focus);
                b.labeled("Experience", &profile.experience);
                b.labeled("Education", &profile.education);
                b.labeled("Interests", &profile.interests.join(", "));
            }
            ResumeSection::Skills => {
                for (title, items) in resume.skills.groups() {
                    b.labeled(title, &items.join(" · "));
                }
            }
            ResumeSection::Experience => {
                for role in &resume.experience {
                    b.line(vec![
                        Span::styled(
                            role.title.clone(),
                            Style::default()
                                .fg(palette.text_primary)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(format!(" · {}", role.company), Style::default().fg(palette.text_accent)),
                    ]);
                    b.line(vec![Span::styled(
                        format!("{} | {}", role.period, role.location),
                        Style::default().fg(palette.text_muted),
                    )]);
                    for highlight in &role.highlights {
                        b.bullet(highlight);
                    }
                    b.blank();
                }
            }
            ResumeSection::Projects => {
                for project in &resume.projects {
                    let meta: Vec<&str> = [project.status.as_str(), project.year.as_str()]
                        .into_iter()
                        .filter(|part| !part.is_empty())
                        .collect();
                    b.line(vec![
                        Span::styled(
                            project.name.clone(),
                            Style::default()
                                .fg(palette.text_primary)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            if meta.is_empty() {
                                String::new()
                            } else {
                                format!(" [{}]", meta.join(", "))
                            },
                            Style::default().fg(palette.text_muted),
                        ),
                    ]);
                    b.labeled("Problem", &project.problem);
                    b.labeled("Solution", &project.solution);
                    b.labeled("Stack", &project.stack.join(", "));
                    for (metric, outcome) in &project.results {
                        b.bullet(&format!("{}: {}", metric, outcome));
                    }
                    b.labeled("Lesson", &project.lesson);
                    if let Some(demo) = &project.links.demo {
                        b.link("Demo", demo, ClickAction::OpenLink(web_target(demo)));
                    }
                    if let Some(github) = &project.links.github {
                        b.link("Source", github, ClickAction::OpenLink(web_target(github)));
                    }
                    b.blank();
                }
            }
            ResumeSection::Values => {
                for value in &resume.values {
                    b.line(vec![Span::styled(
                        value.name.clone(),
                        Style::default()
                            .fg(palette.text_primary)
                            .add_modifier(Modifier::BOLD),
                    )]);
                    b.paragraph(2, &value.principle, Style::default().fg(palette.text_primary));
                    b.paragraph(2, &value.practice, Style::default().fg(palette.text_muted));
                }
            }
            ResumeSection::Contact => {
                let contact = &resume.contact;
                if !contact.email.is_empty() {
                    let target = format!("mailto:{}", contact.email);
                    b.link("Email", &contact.email, ClickAction::OpenLink(target));
                }
                if !contact.github.is_empty() {
                    b.link("GitHub", &contact.github, ClickAction::OpenLink(web_target(&contact.github)));
                }
                if !contact.linkedin.is_empty() {
                    b.link(
                        "LinkedIn",
                        &contact.linkedin,
                        ClickAction::OpenLink(web_target(&contact.linkedin)),
                    );
                }
                b.labeled("Location", &contact.location);
                b.labeled("Open to", &contact.open_to.join(", "));
                if !contact.signoff.is_empty() {
                    b.blank();
                    b.paragraph(0, &contact.signoff, Style::default().fg(palette.text_secondary));
                }
            }
        }
        b.blank();
    }
    b.layout
}

pub fn render_resume(frame: &mut Frame, area: Rect, app: &mut App) {
    let palette = app.theme.palette();
    let buf = frame.buffer_mut();
    buf.set_style(area, Style::default().bg(palette.bg_editor).fg(palette.text_primary));

    let mut body = area;
    if app.banner_visible && area.height > BANNER_HEIGHT + 2 {
        render_banner(buf, Rect::new(area.x, area.y, area.width, BANNER_HEIGHT), app);
        body.y += BANNER_HEIGHT;
        body.height -= BANNER_HEIGHT;
    }
    let page = Rect::new(
        body.x + 2,
        body.y + 1,
        body.width.saturating_sub(4),
        body.height.saturating_sub(1),
    );
    app.frame.content_rows = page.height;

    let layout = layout_resume(&app.resume, palette, page.width as usize);
    app.frame.resume_lines = layout.lines.len();
    app.frame.resume_anchors = layout.anchors.clone();
    let scroll = app.resume_scroll.min(layout.lines.len().saturating_sub(1));

    let window = scroll..scroll + page.height as usize;
    for (index, line) in layout.lines.iter().enumerate() {
        if !window.contains(&index) {
            continue;
        }
        let y = page.y + (index - scroll) as u16;
        buf.set_line(page.x, y, line, page.width);
    }

    let hover = Style::default()
        .fg(palette.link)
        .bg(palette.bg_hover)
        .add_modifier(Modifier::UNDERLINED);
    for link in layout.links {
        if !window.contains(&link.line) {
            continue;
        }
        let y = page.y + (link.line - scroll) as u16;
        let rect = Rect::new(page.x + link.column, y, link.width, 1).intersection(page);
        app.hit_registry.register(rect, link.action, Some(hover));
    }
}

fn render_banner(buf: &mut Buffer, area: Rect, app: &mut App) {
    let palette = app.theme.palette();
    buf.set_style(area, Style::default().bg(palette.bg_active));
    let title_style = Style::default()
        .fg(palette.text_accent)
        .bg(palette.bg_active)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(palette.text_primary).bg(palette.bg_active);
    buf.set_span(area.x + 2, area.y, &Span::styled(BANNER_TITLE, title_style), area.width.saturating_sub(6));
    buf.set_span(area.x + 2, area.y + 1, &Span::styled(BANNER_TEXT, text_style), area.width.saturating_sub(4));

    let normal = Style::default()
        .fg(palette.bg_editor)
        .bg(palette.text_accent)
        .add_modifier(Modifier::BOLD);
    let hover = normal.bg(palette.link);
    let action_label = format!(" {} ", BANNER_ACTION);
    draw_button(
        buf,
        &mut app.hit_registry,
        area.x + 2,
        area.y + 2,
        &action_label,
        normal,
        hover,
        ClickAction::BannerSwitchToEditor,
    );

    let close = " x ";
    let muted = Style::default().fg(palette.text_muted).bg(palette.bg_active);
    draw_button(
        buf,
        &mut app.hit_registry,
        area.right().saturating_sub(display_width(close) + 1),
        area.y,
        close,
        muted,
        muted.bg(palette.bg_hover),
        ClickAction::BannerDismiss,
    );
}

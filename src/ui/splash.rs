//! Full-screen first-run welcome.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use super::helpers::{display_width, draw_button, inner_rect, wrap_text};
use super::layout::centered;
use crate::app::App;
use crate::ui::interaction::ClickAction;

const BOX_WIDTH: u16 = 64;
const ENTER_LABEL: &str = "[ Enter Portfolio ]";

/// `█` for the filled share of `width`, `░` for the rest.
pub fn progress_bar(progress: f32, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 100.0) / 100.0) * width as f32).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled.min(width)))
}

/// Greeting lines, keeping the paragraph breaks of the source text.
fn greeting_lines(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for (index, paragraph) in text.split("\n\n").enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.extend(wrap_text(paragraph, width));
    }
    lines
}

pub fn render_welcome(frame: &mut Frame, app: &mut App) {
    let Some(welcome) = app.welcome.as_ref() else {
        return;
    };
    let palette = app.theme.palette();
    let screen = frame.area();
    frame.render_widget(Clear, screen);
    frame
        .buffer_mut()
        .set_style(screen, Style::default().bg(palette.bg_editor));

    let text_width = BOX_WIDTH.saturating_sub(6) as usize;
    let greeting = greeting_lines(welcome.typed_text(), text_width);
    let height = (8 + greeting.len() as u16).max(12);
    let area = centered(screen, BOX_WIDTH, height);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(
            " codefolio ",
            Style::default().fg(palette.text_accent).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(palette.bg_secondary));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width < 8 || inner.height < 4 {
        return;
    }
    let inner = inner_rect(inner, 1);

    let prompt_visible = welcome.prompt_visible();
    let bar_width = (inner.width as usize).saturating_sub(6);
    let buf = frame.buffer_mut();
    buf.set_line(
        inner.x,
        inner.y,
        &Line::from(vec![
            Span::styled(
                progress_bar(welcome.progress(), bar_width),
                Style::default().fg(palette.text_accent),
            ),
            Span::styled(
                format!(" {:>3}%", welcome.progress().round() as u32),
                Style::default().fg(palette.text_secondary),
            ),
        ]),
        inner.width,
    );
    buf.set_span(
        inner.x,
        inner.y + 1,
        &Span::styled(welcome.status(), Style::default().fg(palette.text_muted)),
        inner.width,
    );

    let mut y = inner.y + 3;
    for line in greeting {
        if y >= inner.bottom() {
            break;
        }
        buf.set_span(
            inner.x,
            y,
            &Span::styled(line, Style::default().fg(palette.text_primary)),
            inner.width,
        );
        y += 1;
    }

    if prompt_visible {
        let x = inner.x + inner.width.saturating_sub(display_width(ENTER_LABEL)) / 2;
        let y = area.bottom().saturating_sub(2);
        let style = Style::default()
            .fg(palette.text_accent)
            .add_modifier(Modifier::BOLD);
        draw_button(
            buf,
            &mut app.hit_registry,
            x,
            y,
            ENTER_LABEL,
            style,
            style.bg(palette.bg_hover),
            ClickAction::WelcomeEnter,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_fill() {
        assert_eq!(progress_bar(0.0, 4), "░░░░");
        assert_eq!(progress_bar(50.0, 4), "██░░");
        assert_eq!(progress_bar(100.0, 4), "████");
        assert_eq!(progress_bar(250.0, 4), "████");
    }

    #[test]
    fn test_greeting_keeps_paragraphs() {
        let lines = greeting_lines("one two\n\nthree", 20);
        assert_eq!(lines, vec!["one two", "", "three"]);
    }
}
